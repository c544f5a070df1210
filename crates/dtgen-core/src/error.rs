//! Error types for type-map parsing and column generalization.

use std::fmt;

use thiserror::Error;

use crate::label::TypeLabel;

/// Which side of an `old:new` segment a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingSide {
    Source,
    Target,
}

impl fmt::Display for MappingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingSide::Source => f.write_str("source"),
            MappingSide::Target => f.write_str("target"),
        }
    }
}

/// Errors raised while parsing a `--type_map` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMapError {
    /// A segment did not split into exactly two `:`-separated tokens.
    #[error("malformed mapping '{segment}': expected 'old_type:new_type'")]
    MalformedMapping { segment: String },

    /// A token is outside the type vocabulary.
    #[error("invalid {side} type '{token}'; supported types are: {vocab}", vocab = TypeLabel::vocabulary())]
    InvalidType { side: MappingSide, token: String },

    /// The same source type was mapped twice (strict parsing only).
    #[error("duplicate mapping for source type '{label}'")]
    DuplicateSource { label: TypeLabel },
}

/// Errors raised while generalizing table columns.
#[derive(Debug, Error)]
pub enum GeneralizeError {
    /// A column's values could not be cast to the requested type.
    #[error("failed to convert column '{column}' from {from} to {to}: {reason}")]
    Conversion {
        column: String,
        from: TypeLabel,
        to: TypeLabel,
        reason: String,
    },

    /// Rebuilding the table from converted columns failed.
    #[error("failed to rebuild table: {message}")]
    Table { message: String },
}

impl From<polars::prelude::PolarsError> for GeneralizeError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Table {
            message: err.to_string(),
        }
    }
}

/// Result type for generalization.
pub type Result<T> = std::result::Result<T, GeneralizeError>;
