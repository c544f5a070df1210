//! The closed vocabulary of column type labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic type of a column.
///
/// `Object` is the catch-all for storage that is not text, integer,
/// floating point or boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeLabel {
    Int,
    Float,
    Str,
    Bool,
    Object,
}

impl TypeLabel {
    /// Every label, in the order used for diagnostics.
    pub const ALL: [TypeLabel; 5] = [
        TypeLabel::Int,
        TypeLabel::Float,
        TypeLabel::Str,
        TypeLabel::Bool,
        TypeLabel::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeLabel::Int => "int",
            TypeLabel::Float => "float",
            TypeLabel::Str => "str",
            TypeLabel::Bool => "bool",
            TypeLabel::Object => "object",
        }
    }

    /// Comma-separated vocabulary, e.g. for error messages.
    pub fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a token after trimming and lower-casing it.
    pub fn parse_token(token: &str) -> Option<Self> {
        let normalized = token.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == normalized)
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type '{0}'; supported types are: {vocab}", vocab = TypeLabel::vocabulary())]
pub struct UnknownLabel(pub String);

impl FromStr for TypeLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s).ok_or_else(|| UnknownLabel(s.trim().to_lowercase()))
    }
}
