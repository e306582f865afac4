//! Error types for ticket markup parsing.

use thiserror::Error;

/// Errors that can occur while reading ticket markup back into a document.
///
/// Rendering never fails; only the reverse direction has failure modes.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No text elements found in SVG")]
    NoTextElements,

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
