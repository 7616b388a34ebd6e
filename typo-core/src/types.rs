use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Characters inserted by the built-in rules
pub mod chars {
    /// Glue between words that must not be separated by a line break
    pub const NNBSP: char = '\u{202f}';
    /// Join between initials and a surname
    pub const THIN_SPACE: char = '\u{2009}';
    pub const EM_DASH: char = '\u{2014}';
    pub const EN_DASH: char = '\u{2013}';
    pub const ELLIPSIS: char = '\u{2026}';
    pub const COPYRIGHT: char = '\u{00a9}';
    pub const REGISTERED: char = '\u{00ae}';
    pub const TRADEMARK: char = '\u{2122}';
    pub const PLUS_MINUS: char = '\u{00b1}';
    pub const DEGREE: char = '\u{00b0}';
}

/// A pure text-to-text transformation
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

// ===== RULES =====

/// A resolved, named transformation
#[derive(Clone)]
pub struct Rule {
    pub name: String,
    pub transform: Transform,
}

impl Rule {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        (self.transform)(text)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

// ===== RULE SPECIFIERS =====
// Every shape accepted when building a rule set maps onto one variant,
// so the builder never has to inspect argument types at runtime.

#[derive(Clone)]
pub enum RuleSpec {
    /// A built-in rule looked up in the catalog
    Name(String),
    /// An ad-hoc rule. `name` is the function's declared identifier, or
    /// `None` when it has none (closures)
    Function {
        name: Option<String>,
        transform: Transform,
    },
    /// Wraps another specifier and overrides the resolved name
    Aliased(Box<RuleSpec>, String),
    /// Ordered container of names/functions
    Sequence(Vec<RuleSpec>),
    /// Forced name -> specifier, in insertion order
    Mapping(Vec<(String, RuleSpec)>),
}

impl RuleSpec {
    pub fn name(name: impl Into<String>) -> Self {
        RuleSpec::Name(name.into())
    }

    /// Wrap a function item; its name is taken from its own identifier.
    ///
    /// ```
    /// use typo_core::RuleSpec;
    ///
    /// fn shout(text: &str) -> String {
    ///     text.to_uppercase()
    /// }
    ///
    /// match RuleSpec::function(shout) {
    ///     RuleSpec::Function { name, .. } => assert_eq!(name.as_deref(), Some("shout")),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        RuleSpec::Function {
            name: declared_identifier::<F>(),
            transform: Arc::new(f),
        }
    }

    /// Wrap a function under an explicit name (the only way to name a closure)
    pub fn named_function<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        RuleSpec::function(f).aliased(name)
    }

    pub fn aliased(self, forced_name: impl Into<String>) -> Self {
        RuleSpec::Aliased(Box::new(self), forced_name.into())
    }

    pub fn sequence<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec>,
    {
        RuleSpec::Sequence(specs.into_iter().map(Into::into).collect())
    }

    pub fn mapping<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<RuleSpec>,
    {
        RuleSpec::Mapping(
            entries
                .into_iter()
                .map(|(forced, spec)| (forced.into(), spec.into()))
                .collect(),
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, RuleSpec::Sequence(_) | RuleSpec::Mapping(_))
    }
}

impl From<&str> for RuleSpec {
    fn from(name: &str) -> Self {
        RuleSpec::Name(name.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(name: String) -> Self {
        RuleSpec::Name(name)
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSpec::Name(name) => f.debug_tuple("Name").field(name).finish(),
            RuleSpec::Function { name, .. } => f
                .debug_struct("Function")
                .field("name", name)
                .finish_non_exhaustive(),
            RuleSpec::Aliased(inner, forced) => {
                f.debug_tuple("Aliased").field(inner).field(forced).finish()
            }
            RuleSpec::Sequence(specs) => f.debug_tuple("Sequence").field(specs).finish(),
            RuleSpec::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
        }
    }
}

/// Last path segment of a function item's type name.
///
/// Only a fn item's type name is a bare `a::b::name` path. Closures
/// (`{{closure}}`), fn pointers (`fn(&str) -> ...`), boxed or referenced
/// callables (`Box<dyn Fn...>`, `&...`) have no declared name.
fn declared_identifier<F>() -> Option<String> {
    let full = std::any::type_name::<F>();
    let is_path = full.split("::").all(|segment| {
        !segment.is_empty()
            && !segment.starts_with(|c: char| c.is_ascii_digit())
            && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
    });
    if !is_path {
        return None;
    }
    full.rsplit("::").next().map(str::to_string)
}

// ===== DIAGNOSTICS =====

/// Text after one rule of a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleStage {
    pub rule: String,
    pub output: String,
    pub elapsed: Duration,
}
