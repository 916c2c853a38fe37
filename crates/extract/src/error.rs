// ABOUTME: Error types for the text extraction pipeline.
// ABOUTME: Provides ExtractError with NoDimensions, MissingField, DateFormat, and InvalidNumber variants.

use thiserror::Error;

/// Errors that can occur while turning raw text into typed fields.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No measurement candidate was found where at least one was required.
    #[error("no dimensions found in {0:?}")]
    NoDimensions(String),

    /// A required node or text field was absent from the page.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The date text did not match "day month-name year".
    #[error("date {input:?} does not match \"day month year\": {source}")]
    DateFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A matched numeric token could not be converted to a float.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

impl ExtractError {
    /// Creates a NoDimensions error for the given source text.
    pub fn no_dimensions(text: impl Into<String>) -> Self {
        ExtractError::NoDimensions(text.into())
    }

    /// Returns true if this error means the text held no measurements.
    pub fn is_no_dimensions(&self) -> bool {
        matches!(self, ExtractError::NoDimensions(_))
    }
}
