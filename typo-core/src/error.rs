/// Errors raised while building a rule set.
///
/// Every variant is produced at construction time; applying an already
/// built [`crate::Typography`] never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TypographyError {
    /// The name is not one of the built-in rules
    #[error("unknown typography rule: {0}")]
    UnknownRule(String),

    /// The specifier has a shape that cannot be resolved to a single rule
    #[error("invalid rule specifier: {0}")]
    InvalidSpecifier(String),
}
