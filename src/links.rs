//! Link classification and resolution.
//!
//! Classification is literal prefix matching, by contract: no scheme or host
//! normalization, no trailing-slash handling. A base URL differing from the
//! links only by case or a trailing slash will not match them. Resolution to
//! absolute form, by contrast, goes through a real URL parser.

use url::Url;

/// Check if a link is an absolute web link (`http://` or `https://`).
#[inline]
#[must_use]
pub fn is_web_url(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Keep only outbound links: absolute web links, minus those starting with
/// the base URL when one is given.
#[must_use]
pub fn outbound_only(links: &[String], base_url: Option<&str>) -> Vec<String> {
    links
        .iter()
        .filter(|link| is_web_url(link))
        .filter(|link| base_url.is_none_or(|base| !link.starts_with(base)))
        .cloned()
        .collect()
}

/// Keep only internal links: those starting with the exact base URL string.
#[must_use]
pub fn internal_only(links: &[String], base_url: &str) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.starts_with(base_url))
        .cloned()
        .collect()
}

/// Resolve each link against a base URL, producing absolute form.
///
/// Links with non-web schemes (`data:`, `javascript:`, `mailto:`, `tel:`) and
/// links that are already absolute pass through unchanged, as does any link
/// that fails to resolve. An unparseable base leaves every link unchanged.
#[must_use]
pub fn resolve_against(links: &[String], base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        return links.to_vec();
    };
    links
        .iter()
        .map(|link| resolve_one(link, &base))
        .collect()
}

fn resolve_one(link: &str, base: &Url) -> String {
    if link.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if link.starts_with("data:")
        || link.starts_with("javascript:")
        || link.starts_with("mailto:")
        || link.starts_with("tel:")
    {
        return link.to_string();
    }

    if is_web_url(link) {
        return link.to_string();
    }

    match base.join(link) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn outbound_without_base_keeps_all_web_links() {
        let all = links(&["https://a.com/x", "http://b.com/y", "/relative", "#frag"]);
        assert_eq!(
            outbound_only(&all, None),
            links(&["https://a.com/x", "http://b.com/y"])
        );
    }

    #[test]
    fn outbound_with_base_excludes_own_links() {
        let all = links(&["https://example.com/a", "https://other.com/b", "/relative"]);
        assert_eq!(
            outbound_only(&all, Some("https://example.com")),
            links(&["https://other.com/b"])
        );
    }

    #[test]
    fn base_prefix_match_is_literal() {
        // No normalization: a trailing slash on the base stops the match.
        let all = links(&["https://example.com/a"]);
        assert_eq!(outbound_only(&all, Some("https://example.com/a/")), all);
        assert!(internal_only(&all, "https://example.com/a/").is_empty());
    }

    #[test]
    fn internal_keeps_prefixed_links_only() {
        let all = links(&["https://example.com/a", "https://other.com/b", "/relative"]);
        assert_eq!(
            internal_only(&all, "https://example.com"),
            links(&["https://example.com/a"])
        );
    }

    #[test]
    fn resolve_makes_relative_links_absolute() {
        let all = links(&["/a", "b/c", "../d", "//cdn.example.net/e"]);
        assert_eq!(
            resolve_against(&all, "https://example.com/dir/page"),
            links(&[
                "https://example.com/a",
                "https://example.com/dir/b/c",
                "https://example.com/d",
                "https://cdn.example.net/e",
            ])
        );
    }

    #[test]
    fn resolve_preserves_absolute_and_special_links() {
        let all = links(&["https://other.com/x", "mailto:a@b.c", "data:text/plain,hi", ""]);
        assert_eq!(resolve_against(&all, "https://example.com"), all);
    }

    #[test]
    fn resolve_with_unparseable_base_is_identity() {
        let all = links(&["/a", "https://other.com/x"]);
        assert_eq!(resolve_against(&all, "not a url"), all);
    }
}
