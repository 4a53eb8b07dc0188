//! Error types for packing and unpacking.

use crate::types::ValueKind;

/// Errors that can occur while sizing, packing or unpacking a format.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackError {
    #[error("format is longer than values to pack: {tokens} data tokens, {values} values")]
    FormatTooLong { tokens: usize, values: usize },

    #[error("value #{index} doesn't match expected '{token}' ({expected}), got {found}")]
    TypeMismatch {
        index: usize,
        token: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("unexpected format token: '{0}'")]
    UnknownToken(String),

    #[error("fixed-string field of {0} bytes is too large to pack")]
    FieldTooLarge(usize),

    #[error("buffer too short: format needs {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

impl PackError {
    pub(crate) fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken(token.into())
    }
}
