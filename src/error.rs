//! Errors raised while decoding value types.

use thiserror::Error;

/// A string payload that does not follow a type's textual grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("color: {0:?} does not start with '#'")]
    MissingHash(String),

    #[error("color: {input:?} has {digits} hex digits, expected 6")]
    WrongLength { input: String, digits: usize },

    #[error("color: {0:?} is not a hex-color")]
    InvalidDigit(String),
}

/// A JSON payload that does not match any accepted shape for the target type.
///
/// `raw` always holds the offending JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("delay generator: unparsable JSON {raw}, expected [[lower, upper, percent], ...] or a single integer")]
    DelayGenerator { raw: String },

    #[error("times should be encoded as \"HH:MM:SS\" strings, got {raw} instead")]
    Time { raw: String },

    #[error("unable to read color string: {raw}")]
    ColorNotString { raw: String },

    #[error("unable to decode color {raw}: {source}")]
    Color {
        raw: String,
        #[source]
        source: FormatError,
    },
}
