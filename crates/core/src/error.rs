//! Error types for the pagetext extraction library.

use thiserror::Error;

/// Primary error type for page selection and text extraction.
#[derive(Error, Debug)]
pub enum PdfTextError {
    #[error("empty page spec: {0:?}")]
    EmptyPageSpec(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("invalid last-offset: {0}")]
    InvalidLastOffset(String),

    #[error("page out of range: {0}")]
    PageOutOfRange(String),

    #[error("endpoint out of range: {0}")]
    EndpointOutOfRange(String),

    #[error("page spec resolved to no pages: {0:?}")]
    EmptyResolution(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for PdfTextError.
pub type Result<T> = std::result::Result<T, PdfTextError>;
