//! The document query facade.
//!
//! [`DocumentQuery`] wraps one parsed tree plus two configuration fields (the
//! content type it was parsed as, an optional base URL) and exposes named
//! queries over it. Each query assembles a selector expression, hands it to
//! the evaluator, and shapes the result list; nothing here mutates the tree,
//! so every call re-evaluates against the same immutable document.

use std::collections::HashMap;
use std::fmt;

use dom_query::{Document, Selection};

use crate::content_type::ContentType;
use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::links;
use crate::selector;
use crate::xml;

/// A parsed document with named query helpers.
///
/// # Example
///
/// ```rust
/// use markup_query::{ContentType, DocumentQuery};
///
/// let html = r#"<html><body>
///   <article><p>Hello</p></article>
///   <a href="/about">About</a>
/// </body></html>"#;
///
/// let doc = DocumentQuery::new(html, ContentType::Html, Some("https://example.com"))?;
/// assert_eq!(doc.nodes_by_tag("p")?.len(), 1);
/// assert_eq!(doc.links(), vec!["/about".to_string()]);
/// # Ok::<(), markup_query::Error>(())
/// ```
pub struct DocumentQuery {
    doc: Document,
    content_type: ContentType,
    base_url: Option<String>,
}

impl fmt::Debug for DocumentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentQuery")
            .field("content_type", &self.content_type)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DocumentQuery {
    /// Parses `content` as the given type and wraps the resulting tree.
    ///
    /// The base URL is stored verbatim - no trimming, no normalization - and
    /// is only consulted by the link classification helpers. `None` is
    /// distinct from an empty string.
    ///
    /// XML content is checked for well-formedness first; malformed input
    /// fails with [`Error::ParseError`]. HTML parsing is recovery-based and
    /// does not fail.
    pub fn new(content: &str, content_type: ContentType, base_url: Option<&str>) -> Result<Self> {
        let doc = match content_type {
            ContentType::Html => Document::from(content),
            ContentType::Xml => Document::from(xml::to_tree_input(content)?),
        };
        Ok(Self {
            doc,
            content_type,
            base_url: base_url.map(ToString::to_string),
        })
    }

    /// Parses raw bytes, detecting the character encoding declared by the
    /// content itself (meta tags for HTML, the XML declaration for XML) and
    /// transcoding to UTF-8 first.
    pub fn from_bytes(
        content: &[u8],
        content_type: ContentType,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let text = encoding::transcode_to_utf8(content, content_type);
        Self::new(&text, content_type, base_url)
    }

    /// The content type this document was parsed as.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The base URL given at construction, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Access to the underlying document tree.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    // === Node queries ===

    /// All elements with the given tag name, anywhere in the tree.
    pub fn nodes_by_tag(&self, tag: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_tag(tag))
    }

    /// Elements of `tag` whose `attr` exactly equals `value`.
    pub fn nodes_by_attr(&self, tag: &str, attr: &str, value: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_attr(tag, attr, value))
    }

    /// Elements of `tag` with a direct child text node exactly equal to `text`.
    ///
    /// Text inside nested elements does not count; `<p><b>x</b></p>` has no
    /// direct text at all.
    pub fn nodes_by_text(&self, tag: &str, text: &str) -> Result<Vec<Selection<'_>>> {
        let nodes = self.select_all(&selector::by_tag(tag))?;
        Ok(nodes
            .into_iter()
            .filter(|sel| dom::direct_text_nodes(sel).iter().any(|t| &**t == text))
            .collect())
    }

    /// The n-th `child` element (1-indexed, counted per parent among siblings
    /// of the same tag) under any `parent` element.
    pub fn nth_child(&self, parent: &str, child: &str, n: usize) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::nth_child(parent, child, n))
    }

    /// Elements of `tag` with a direct child text node containing `text`.
    pub fn nodes_containing_text(&self, tag: &str, text: &str) -> Result<Vec<Selection<'_>>> {
        let nodes = self.select_all(&selector::by_tag(tag))?;
        Ok(nodes
            .into_iter()
            .filter(|sel| dom::direct_text_nodes(sel).iter().any(|t| t.contains(text)))
            .collect())
    }

    /// Elements of `tag` whose `attr` value contains `fragment` as a substring.
    pub fn nodes_by_attr_containing_text(
        &self,
        tag: &str,
        attr: &str,
        fragment: &str,
    ) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_attr_containing(tag, attr, fragment))
    }

    /// Any element whose `class` attribute exactly equals `class`.
    ///
    /// Exact attribute equality, not token membership: an element carrying
    /// several space-separated classes only matches when the whole attribute
    /// equals the queried string.
    pub fn nodes_by_class(&self, class: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_class(class))
    }

    /// Any element whose `id` attribute exactly equals `id`.
    pub fn nodes_by_id(&self, id: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_id(id))
    }

    /// Any element whose `data-{name}` attribute exactly equals `value`.
    pub fn nodes_by_data_attribute(&self, name: &str, value: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_data_attr(name, value))
    }

    /// Any element whose `name` attribute exactly equals `name`.
    pub fn nodes_by_name(&self, name: &str) -> Result<Vec<Selection<'_>>> {
        self.select_all(&selector::by_name(name))
    }

    // === Content extraction ===

    /// Every text fragment under any `article` element, in document order,
    /// whitespace-trimmed, with empty fragments dropped. Repeated content is
    /// kept; nothing is deduplicated.
    #[must_use]
    pub fn article_text(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        for article in self.doc.select("article").iter() {
            let Some(node) = article.nodes().first() else {
                continue;
            };
            // A nested article's subtree is already covered by the outer walk.
            if dom::has_ancestor_tag(node, "article") {
                continue;
            }
            for text in dom::descendant_text_nodes(node) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed.to_string());
                }
            }
        }
        fragments
    }

    /// The `src` attribute of every `img` element, in document order. No
    /// deduplication, no validation of the values.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        dom::attr_values(&self.doc.select("img"), "src")
    }

    /// The `href` attribute of every `a` element, in document order. Anchors
    /// without an `href` contribute nothing.
    #[must_use]
    pub fn links(&self) -> Vec<String> {
        dom::attr_values(&self.doc.select("a"), "href")
    }

    /// Map from anchor visible text (trimmed) to its `href`.
    ///
    /// Anchors with no visible text, and anchors without an `href`, are
    /// skipped. When several anchors share the same text, the last one in
    /// document order wins.
    #[must_use]
    pub fn links_with_text(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for anchor in self.doc.select("a").iter() {
            let Some(href) = anchor.attr("href") else {
                continue;
            };
            let text = dom::text_content(&anchor);
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            map.insert(text.to_string(), href.to_string());
        }
        map
    }

    // === Link classification ===

    /// Links starting with `http://` or `https://`, minus those starting
    /// with the base URL when one was provided.
    ///
    /// Prefix matching is literal; see [`crate::links`].
    #[must_use]
    pub fn outbound_links(&self) -> Vec<String> {
        links::outbound_only(&self.links(), self.base_url.as_deref())
    }

    /// Links starting with the exact base URL string.
    ///
    /// Fails with [`Error::MissingBaseUrl`] when no base URL was provided at
    /// construction.
    pub fn internal_links(&self) -> Result<Vec<String>> {
        let base = self.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;
        Ok(links::internal_only(&self.links(), base))
    }

    /// All links resolved to absolute form against the base URL.
    ///
    /// Fails with [`Error::MissingBaseUrl`] when no base URL was provided at
    /// construction.
    pub fn absolute_links(&self) -> Result<Vec<String>> {
        let base = self.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;
        Ok(links::resolve_against(&self.links(), base))
    }

    fn select_all(&self, expression: &str) -> Result<Vec<Selection<'_>>> {
        let matcher = selector::compile(expression)?;
        Ok(self.doc.select_matcher(&matcher).iter().collect())
    }
}
