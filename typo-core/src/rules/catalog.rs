use crate::error::TypographyError;
use crate::types::{Rule, RuleSpec, Transform};
use indexmap::IndexMap;
use std::sync::{Arc, LazyLock};

use super::{cleanspaces, dashes, ellipsis, initials, marks, wordglue};

/// Built-in rules in the order the default pipeline applies them:
/// cleanup and normalization, then spacing and glue, then symbols.
pub const CANONICAL_ORDER: [&str; 6] = [
    "cleanspaces",
    "ellipsis",
    "initials",
    "dashes",
    "wordglue",
    "marks",
];

static CATALOG: LazyLock<RuleCatalog> = LazyLock::new(RuleCatalog::builtin);

/// Registry of the built-in rules, keyed by their fixed names.
///
/// Populated once on first use and never mutated afterwards.
pub struct RuleCatalog {
    entries: IndexMap<&'static str, Transform>,
}

impl RuleCatalog {
    pub fn global() -> &'static RuleCatalog {
        &CATALOG
    }

    fn builtin() -> Self {
        let builtins: [(&'static str, fn(&str) -> String); 6] = [
            ("cleanspaces", cleanspaces::cleanspaces),
            ("ellipsis", ellipsis::ellipsis),
            ("initials", initials::initials),
            ("dashes", dashes::dashes),
            ("wordglue", wordglue::wordglue),
            ("marks", marks::marks),
        ];

        let entries = builtins
            .into_iter()
            .map(|(name, rule)| (name, Arc::new(rule) as Transform))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Result<Transform, TypographyError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| TypographyError::UnknownRule(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Resolve a single specifier to a named rule.
///
/// `forced_name`, when given, always replaces the derived name; the
/// transform is never affected by it.
pub fn resolve(spec: &RuleSpec, forced_name: Option<&str>) -> Result<Rule, TypographyError> {
    if forced_name == Some("") {
        return Err(TypographyError::InvalidSpecifier(
            "forced rule name is empty".to_string(),
        ));
    }

    match spec {
        RuleSpec::Name(name) => {
            let transform = RuleCatalog::global().lookup(name)?;
            Ok(Rule::new(forced_name.unwrap_or(name.as_str()), transform))
        }
        RuleSpec::Function { name, transform } => {
            let name = forced_name.or(name.as_deref()).ok_or_else(|| {
                TypographyError::InvalidSpecifier(
                    "function has no declared name; give it an alias".to_string(),
                )
            })?;
            Ok(Rule::new(name, transform.clone()))
        }
        RuleSpec::Aliased(inner, alias) => {
            resolve(inner, Some(forced_name.unwrap_or(alias.as_str())))
        }
        RuleSpec::Sequence(_) | RuleSpec::Mapping(_) => Err(TypographyError::InvalidSpecifier(
            format!("{spec:?} is a container, not a single rule"),
        )),
    }
}
