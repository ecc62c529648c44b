//! Content type selection for document construction.
//!
//! Input is parsed either as XML (strict, well-formedness checked) or as HTML
//! (lenient, recovery-based). The variant is chosen at construction and fixed
//! for the lifetime of the document.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How document content is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// Strict XML. Malformed input fails with [`Error::ParseError`].
    Xml,
    /// Lenient HTML. The parser recovers from malformed input and never fails.
    #[default]
    Html,
}

impl ContentType {
    /// The lowercase name of this content type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Xml => "xml",
            ContentType::Html => "html",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    /// Accepts exactly `"xml"` or `"html"`; anything else is rejected before
    /// any parsing takes place.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xml" => Ok(ContentType::Xml),
            "html" => Ok(ContentType::Html),
            other => Err(Error::InvalidContentType(other.to_string())),
        }
    }
}
