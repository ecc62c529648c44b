//! Error types for markup-query.
//!
//! This module defines the error types returned by construction and query
//! operations.

/// Error type for document construction and query operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The content type string was neither `xml` nor `html`.
    #[error("invalid content type {0:?}: choose either \"xml\" or \"html\"")]
    InvalidContentType(String),

    /// The content could not be parsed as the declared type.
    #[error("parsing failed: {0}")]
    ParseError(String),

    /// A generated query expression failed to compile.
    #[error("invalid query expression: {0}")]
    QueryError(String),

    /// An operation required a base URL, but none was provided.
    #[error("base URL is not provided; cannot determine internal links")]
    MissingBaseUrl,
}

/// Result type alias for document construction and query operations.
pub type Result<T> = std::result::Result<T, Error>;
