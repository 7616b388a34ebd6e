// Main rules module - delegates to semantic sub-modules
// This file coordinates the rule system but actual implementations are in:
// - engine.rs: Typography rule set, its builder and the apply pipeline
// - catalog.rs: registry of built-in rules and specifier resolution
// - one file per built-in rule, each a pure `&str -> String` function

pub mod catalog;
pub mod engine;

// Built-in rules, in canonical order
pub mod cleanspaces;
pub mod ellipsis;
pub mod initials;
pub mod dashes;
pub mod wordglue;
pub mod marks;

pub use catalog::{resolve, RuleCatalog, CANONICAL_ORDER};
pub use engine::{Typography, TypographyBuilder};
