use crate::error::TypographyError;
use crate::types::{Rule, RuleSpec, RuleStage, Transform};
use indexmap::IndexMap;
use log::{debug, trace};
use std::fmt;
use std::time::Instant;

use super::catalog::{resolve, CANONICAL_ORDER};

/// An ordered set of named rules, applied one after another.
///
/// Names are unique. Re-adding a name replaces its transform but keeps the
/// position where the name first appeared, so the application order is
/// fixed by first occurrence.
#[derive(Clone)]
pub struct Typography {
    rules: IndexMap<String, Transform>,
}

impl Typography {
    pub fn builder() -> TypographyBuilder {
        TypographyBuilder::default()
    }

    /// Build from positional specifiers only
    pub fn new<I, S>(specs: I) -> Result<Self, TypographyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec>,
    {
        specs
            .into_iter()
            .fold(Self::builder(), |builder, spec| builder.rule(spec))
            .build()
    }

    /// A rule set without rules; `apply` is the identity
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    pub fn rules(&self) -> &IndexMap<String, Transform> {
        &self.rules
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the text through every rule in order
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |text, (name, transform)| {
                let rule_start = Instant::now();
                let result = transform(&text);
                trace!("rule {} applied in {:?}", name, rule_start.elapsed());
                result
            })
    }

    /// Like [`Typography::apply`], but keeps the text produced by each rule.
    /// The last stage holds the final result.
    pub fn apply_staged(&self, text: &str) -> Vec<RuleStage> {
        let mut stages: Vec<RuleStage> = Vec::with_capacity(self.rules.len());

        for (name, transform) in &self.rules {
            let input = stages.last().map_or(text, |stage| stage.output.as_str());
            let rule_start = Instant::now();
            let output = transform(input);
            let elapsed = rule_start.elapsed();

            debug!(
                "rule {}: {} -> {} chars in {:?}{}",
                name,
                input.chars().count(),
                output.chars().count(),
                elapsed,
                if output == input { " (unchanged)" } else { "" }
            );

            stages.push(RuleStage {
                rule: name.clone(),
                output,
                elapsed,
            });
        }

        stages
    }

    fn record(&mut self, rule: Rule) {
        if self.rules.contains_key(&rule.name) {
            trace!("rule {} redefined, keeping its position", rule.name);
        }
        // IndexMap::insert keeps the original slot of an existing key
        self.rules.insert(rule.name, rule.transform);
    }
}

impl Default for Typography {
    /// All built-in rules in canonical order
    fn default() -> Self {
        Self::new(CANONICAL_ORDER).expect("built-in rules always resolve")
    }
}

impl fmt::Debug for Typography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typography")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Collects specifiers and folds them into a [`Typography`].
///
/// Expansion happens in three phases, each in the order the specifiers
/// were added:
/// 1. single positional specifiers (names, functions, aliases)
/// 2. members of positional sequences
/// 3. positional mappings, then keyword bindings (`bind`)
#[derive(Default)]
pub struct TypographyBuilder {
    positional: Vec<RuleSpec>,
    bindings: Vec<(String, RuleSpec)>,
}

impl TypographyBuilder {
    /// Add a positional specifier of any shape
    pub fn rule(mut self, spec: impl Into<RuleSpec>) -> Self {
        self.positional.push(spec.into());
        self
    }

    pub fn function<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.rule(RuleSpec::function(f))
    }

    pub fn rules<I, S>(self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec>,
    {
        self.rule(RuleSpec::sequence(specs))
    }

    pub fn mapping<I, K, S>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<RuleSpec>,
    {
        self.rule(RuleSpec::mapping(entries))
    }

    /// Keyword-style binding: `spec` is recorded under `forced_name`
    pub fn bind(mut self, forced_name: impl Into<String>, spec: impl Into<RuleSpec>) -> Self {
        self.bindings.push((forced_name.into(), spec.into()));
        self
    }

    pub fn build(self) -> Result<Typography, TypographyError> {
        let mut singles = Vec::new();
        let mut sequence_members = Vec::new();
        let mut forced = Vec::new();

        for spec in self.positional {
            match spec {
                RuleSpec::Sequence(members) => sequence_members.extend(members),
                RuleSpec::Mapping(entries) => forced.extend(entries),
                single => singles.push(single),
            }
        }
        forced.extend(self.bindings);

        let mut typography = Typography::empty();
        for spec in singles.iter().chain(&sequence_members) {
            typography.record(resolve(spec, None)?);
        }
        for (forced_name, spec) in &forced {
            typography.record(resolve(spec, Some(forced_name.as_str()))?);
        }

        debug!("built typography with rules {:?}", typography.rule_names());
        Ok(typography)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Marks its input so tests can tell which transform ran
    fn cb_testrule(text: &str) -> String {
        format!("{text}+cb")
    }

    fn behaviour(typography: &Typography, name: &str, input: &str) -> String {
        typography.get(name).map(|transform| transform(input)).unwrap()
    }

    #[test]
    fn expand_empty_args() {
        let typography = Typography::builder().build().unwrap();
        assert!(typography.rules().is_empty());
        assert!(typography.rule_names().is_empty());
        assert_eq!(typography.apply("as is  ..."), "as is  ...");
    }

    #[test]
    fn expand_simple_name() {
        let typography = Typography::new(["ellipsis"]).unwrap();
        assert_eq!(typography.rule_names(), ["ellipsis"]);
        assert_eq!(behaviour(&typography, "ellipsis", "..."), "…");
    }

    #[test]
    fn expand_mapping_of_names() {
        let typography = Typography::builder()
            .rule("ellipsis")
            .mapping([("newrule", "ellipsis")])
            .build()
            .unwrap();
        assert_eq!(typography.rule_names(), ["ellipsis", "newrule"]);
        assert_eq!(behaviour(&typography, "newrule", "..."), "…");
    }

    #[test]
    fn expand_simple_function() {
        let typography = Typography::builder().function(cb_testrule).build().unwrap();
        assert_eq!(typography.rule_names(), ["cb_testrule"]);
        assert_eq!(typography.apply("x"), "x+cb");
    }

    #[test]
    fn expand_mapping_of_functions() {
        let typography = Typography::builder()
            .function(cb_testrule)
            .mapping([("newrule", RuleSpec::function(cb_testrule))])
            .build()
            .unwrap();
        assert_eq!(typography.rule_names(), ["cb_testrule", "newrule"]);
        assert_eq!(typography.apply("x"), "x+cb+cb");
    }

    #[test]
    fn expand_mixed_args() {
        let bound = Typography::builder()
            .function(cb_testrule)
            .bind("newrule", "ellipsis")
            .build()
            .unwrap();
        assert_eq!(bound.rule_names(), ["cb_testrule", "newrule"]);
        assert_eq!(behaviour(&bound, "newrule", "..."), "…");

        let positional = Typography::builder()
            .function(cb_testrule)
            .rule("ellipsis")
            .build()
            .unwrap();
        assert_eq!(positional.rule_names(), ["cb_testrule", "ellipsis"]);
    }

    #[test]
    fn recommended_args_style() {
        let typography = Typography::builder()
            .rules([RuleSpec::function(cb_testrule)])
            .rules(["ellipsis"])
            .mapping([(
                "newrule",
                RuleSpec::function(|text: &str| text.to_uppercase()),
            )])
            .build()
            .unwrap();
        assert_eq!(
            typography.rule_names(),
            ["cb_testrule", "ellipsis", "newrule"]
        );
        assert_eq!(typography.apply("a..."), "A…+CB");
    }

    #[test]
    fn singles_precede_sequences_precede_mappings() {
        let typography = Typography::builder()
            .bind("glue", "wordglue")
            .mapping([("dots", "ellipsis")])
            .rules(["dashes", "marks"])
            .rule("cleanspaces")
            .build()
            .unwrap();
        assert_eq!(
            typography.rule_names(),
            ["cleanspaces", "dashes", "marks", "dots", "glue"]
        );
    }

    #[test]
    fn redefinition_keeps_first_position() {
        let typography = Typography::builder()
            .rule("ellipsis")
            .rule("marks")
            .bind("ellipsis", RuleSpec::function(cb_testrule))
            .build()
            .unwrap();
        assert_eq!(typography.rule_names(), ["ellipsis", "marks"]);
        assert_eq!(behaviour(&typography, "ellipsis", "..."), "...+cb");
        assert_eq!(typography.len(), 2);
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Typography::new(["ellipsis", "hyphenate"]).err(),
            Some(TypographyError::UnknownRule("hyphenate".to_string()))
        );

        let nested = Typography::builder()
            .rules([RuleSpec::sequence(["dashes"])])
            .build();
        assert!(matches!(nested, Err(TypographyError::InvalidSpecifier(_))));

        let mapped_container = Typography::builder()
            .mapping([("glue", RuleSpec::mapping([("inner", "wordglue")]))])
            .build();
        assert!(matches!(
            mapped_container,
            Err(TypographyError::InvalidSpecifier(_))
        ));
    }

    #[test]
    fn fn_pointers_need_an_alias() {
        let shout: fn(&str) -> String = |text| text.to_uppercase();
        let lower: fn(&str) -> String = |text| text.to_lowercase();

        let unnamed = Typography::builder().function(shout).function(lower).build();
        assert!(matches!(unnamed, Err(TypographyError::InvalidSpecifier(_))));

        let named = Typography::builder()
            .rule(RuleSpec::named_function("shout", shout))
            .rule(RuleSpec::named_function("lower", lower))
            .build()
            .unwrap();
        assert_eq!(named.rule_names(), ["shout", "lower"]);
        assert_eq!(named.apply("Ab"), "ab");
    }

    #[test]
    fn default_is_canonical() {
        let typography = Typography::default();
        assert_eq!(typography.rule_names(), CANONICAL_ORDER);
    }

    #[test]
    fn staged_apply_matches_apply() {
        let typography = Typography::default();
        let text = "...Ну - да (c) 2008";
        let stages = typography.apply_staged(text);

        let names: Vec<_> = stages.iter().map(|stage| stage.rule.as_str()).collect();
        assert_eq!(names, CANONICAL_ORDER);
        assert_eq!(stages.last().unwrap().output, typography.apply(text));
        assert_eq!(stages[1].output, "…Ну - да (c) 2008");
    }

    #[test]
    fn shared_across_threads() {
        let typography = Typography::default();
        let results: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| typography.apply("Coca-cola(tm)")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|result| result == "Coca-cola™"));
    }
}
