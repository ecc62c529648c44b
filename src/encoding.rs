//! Character encoding detection and transcoding.
//!
//! Byte input is converted to UTF-8 before parsing. HTML declares its charset
//! in meta tags; XML declares it in the XML declaration. Unknown or missing
//! declarations fall back to UTF-8, and invalid sequences are replaced rather
//! than treated as errors.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::content_type::ContentType;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Match the `encoding` attribute of an XML declaration
#[allow(clippy::expect_used)]
static XML_DECL_ENCODING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<\?xml[^>]*\bencoding\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

/// Detect the character encoding declared by the content itself.
///
/// Only the first 1024 bytes are examined. Returns UTF-8 when nothing is
/// declared or the declared label is unknown.
#[must_use]
pub fn detect_encoding(content: &[u8], content_type: ContentType) -> &'static Encoding {
    let head = &content[..content.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    let declared = match content_type {
        ContentType::Xml => XML_DECL_ENCODING_RE
            .captures(&head_str)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        ContentType::Html => extract_charset(&head_str).or_else(|| extract_content_type_charset(&head_str)),
    };

    declared
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Extract charset from `<meta charset="...">` tag.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode content bytes to a UTF-8 string.
///
/// Detects the declared encoding and decodes lossily, replacing invalid
/// sequences with the Unicode replacement character.
#[must_use]
pub fn transcode_to_utf8(content: &[u8], content_type: ContentType) -> String {
    let encoding = detect_encoding(content, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(content).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(content);
    decoded.into_owned()
}
