use crate::error::TypographyError;
use crate::rules::{Typography, CANONICAL_ORDER};
use crate::types::RuleSpec;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;

// Default value functions for serde
fn default_rules() -> Vec<Value> {
    CANONICAL_ORDER
        .iter()
        .map(|name| Value::String(name.to_string()))
        .collect()
}

/// Declarative description of a rule set.
///
/// ```yaml
/// rules:
///   - cleanspaces
///   - [ellipsis, dashes]
///   - glue: wordglue
/// bindings:
///   symbols: marks
/// ```
///
/// Each entry of `rules` is a positional specifier: a rule name, a list of
/// names, or a mapping from alias to name. `bindings` are keyword-style
/// aliases applied after them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypographyConfig {
    /// Positional specifiers, all built-in rules when omitted
    #[serde(default = "default_rules")]
    pub rules: Vec<Value>,
    /// Alias -> rule name
    #[serde(default)]
    pub bindings: IndexMap<String, Value>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            bindings: IndexMap::new(),
        }
    }
}

impl TypographyConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: TypographyConfig =
            serde_yaml::from_str(content).context("invalid typography config")?;
        Ok(config)
    }

    /// Load config from file path
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read typography config {path}"))?;
        Self::from_yaml_str(&content)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                warn!("{e:#}, using default typography rules");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Resolve every entry and build the rule set
    pub fn build(&self) -> Result<Typography, TypographyError> {
        let mut builder = Typography::builder();
        for value in &self.rules {
            builder = builder.rule(positional_spec(value)?);
        }
        for (forced_name, value) in &self.bindings {
            builder = builder.bind(forced_name.as_str(), single_spec(value)?);
        }
        builder.build()
    }
}

fn positional_spec(value: &Value) -> Result<RuleSpec, TypographyError> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(single_spec)
            .collect::<Result<Vec<_>, _>>()
            .map(RuleSpec::Sequence),
        Value::Mapping(entries) => entries
            .iter()
            .map(|(key, value)| Ok((key_name(key)?, single_spec(value)?)))
            .collect::<Result<Vec<_>, _>>()
            .map(RuleSpec::Mapping),
        other => single_spec(other),
    }
}

fn single_spec(value: &Value) -> Result<RuleSpec, TypographyError> {
    match value {
        Value::String(name) => Ok(RuleSpec::Name(name.clone())),
        other => Err(TypographyError::InvalidSpecifier(format!(
            "expected a rule name, found {}",
            describe(other)
        ))),
    }
}

fn key_name(key: &Value) -> Result<String, TypographyError> {
    match key {
        Value::String(name) => Ok(name.clone()),
        other => Err(TypographyError::InvalidSpecifier(format!(
            "rule alias must be a string, found {}",
            describe(other)
        ))),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
