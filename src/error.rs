//! Error types for taxpub library.

use std::io;
use thiserror::Error;

/// Result type alias for taxpub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or extracting from a document.
///
/// Missing optional content is never an error: extractors return empty
/// strings, empty lists, or empty records instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An extractor was called on a document that has not been loaded.
    #[error("Document is not ready: load and parse an XML document first")]
    DocumentNotReady,

    /// A loader input (URL or file path) failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input is not well-formed XML.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// The declared character encoding is not supported.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A path expression could not be compiled.
    #[error("Invalid path expression: {0}")]
    InvalidPath(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Remote document could not be fetched.
    #[error("Fetch error: {0}")]
    Fetch(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(e) => Error::Io(io::Error::new(e.kind(), e.to_string())),
            _ => Error::XmlParse(err.to_string()),
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(feature = "async")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
