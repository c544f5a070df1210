//! Generalization options.

use serde::{Deserialize, Serialize};

/// How text cells are coerced when a column is converted to `bool`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolParsing {
    /// Empty text is false, any other text is true ("False" becomes true).
    #[default]
    Truthy,
    /// Only `true`/`false` (case-insensitive, trimmed) are accepted.
    Literal,
}

/// Options controlling column generalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralizeOptions {
    pub bool_parsing: BoolParsing,
}

impl GeneralizeOptions {
    /// Set the text-to-bool coercion mode.
    #[must_use]
    pub fn with_bool_parsing(mut self, parsing: BoolParsing) -> Self {
        self.bool_parsing = parsing;
        self
    }
}
