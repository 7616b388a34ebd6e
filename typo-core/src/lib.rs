// Typo Core Library
//
// Typographic correction of plain text through an ordered set of named rules.
// Main interface is `Typography` (a rule set) and the `typography()` shortcut.

pub mod types;
pub mod error;
pub mod config;
pub mod rules;

use std::sync::LazyLock;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::TypographyError;
pub use config::TypographyConfig;
pub use rules::{resolve, RuleCatalog, Typography, TypographyBuilder, CANONICAL_ORDER};

static DEFAULT_TYPOGRAPHY: LazyLock<Typography> = LazyLock::new(Typography::default);

/// Apply every built-in rule in canonical order.
///
/// ```
/// assert_eq!(typo_core::typography("Coca-cola(tm)"), "Coca-cola™");
/// ```
pub fn typography(text: &str) -> String {
    DEFAULT_TYPOGRAPHY.apply(text)
}
