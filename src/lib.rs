//! # markup-query
//!
//! A thin query facade over parsed XML and HTML documents.
//!
//! This library wraps a parsed document tree and exposes named helper
//! queries - by tag, attribute, class, id, data-attribute, text containment,
//! nth child - together with content extraction (article text, image sources,
//! links) and link classification (internal vs. outbound). Parsing and
//! selector evaluation are delegated to the DOM engine; the code here only
//! assembles query expressions and shapes the result lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use markup_query::{ContentType, DocumentQuery};
//!
//! let html = r#"<html><body>
//!   <article><p>Main content here.</p></article>
//!   <a href="https://example.com/docs">Docs</a>
//!   <a href="https://other.org/page">Elsewhere</a>
//! </body></html>"#;
//!
//! let doc = DocumentQuery::new(html, ContentType::Html, Some("https://example.com"))?;
//! assert_eq!(doc.article_text(), vec!["Main content here.".to_string()]);
//! assert_eq!(doc.internal_links()?, vec!["https://example.com/docs".to_string()]);
//! assert_eq!(doc.outbound_links(), vec!["https://other.org/page".to_string()]);
//! # Ok::<(), markup_query::Error>(())
//! ```
//!
//! ## Content types
//!
//! HTML is parsed leniently and never fails. XML is checked for
//! well-formedness first and malformed input fails with
//! [`Error::ParseError`]. The content type is fixed at construction;
//! [`ContentType`] also implements `FromStr` for the string forms `"xml"`
//! and `"html"`, rejecting anything else before a parse is attempted.

mod content_type;
mod document;
mod error;
mod xml;

/// DOM operations adapter over the `dom_query` tree.
pub mod dom;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

/// Link classification and resolution helpers.
pub mod links;

/// Selector expression construction.
pub mod selector;

// Public API - re-exports
pub use content_type::ContentType;
pub use document::DocumentQuery;
pub use error::{Error, Result};

/// Parses an HTML document with no base URL.
///
/// # Example
///
/// ```rust
/// let doc = markup_query::parse_html("<p>hi</p>")?;
/// assert_eq!(doc.nodes_by_tag("p")?.len(), 1);
/// # Ok::<(), markup_query::Error>(())
/// ```
pub fn parse_html(content: &str) -> Result<DocumentQuery> {
    DocumentQuery::new(content, ContentType::Html, None)
}

/// Parses an XML document with no base URL.
///
/// # Example
///
/// ```rust
/// let doc = markup_query::parse_xml("<feed><entry>x</entry></feed>")?;
/// assert_eq!(doc.nodes_by_tag("entry")?.len(), 1);
/// # Ok::<(), markup_query::Error>(())
/// ```
pub fn parse_xml(content: &str) -> Result<DocumentQuery> {
    DocumentQuery::new(content, ContentType::Xml, None)
}
