//! Ordered regex replacement rules.

use regex::Regex;

use crate::config::ReplacementConfig;
use crate::error::{Error, Result};

/// Built-in rules, applied in this order.
const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    // whitespace
    (r"\s", "-"),
    // only alphanumerics plus dash, dot, plus and underscore survive
    (r"[^-_A-Za-z0-9+.]+", ""),
    // double underscore is reserved as the hash separator in file IDs
    (r"_{2,}", "_"),
    (r"-{2,}", "-"),
    // leading dots, dashes or underscores
    (r"^[-_.]+", ""),
];

/// Extra rule used for folder names: dots become dashes.
const FOLDER_REPLACEMENTS: &[(&str, &str)] = &[(r"\.", "-")];

/// A single pattern and its replacement.
///
/// The replacement may reference capture groups (`$1`, `${name}`).
#[derive(Debug, Clone)]
pub struct Replacement {
    pattern: Regex,
    replacement: String,
}

impl Replacement {
    /// Compile a replacement rule.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            replacement: replacement.into(),
        })
    }

    /// The source text of the pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply this rule to every match in `input`.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered list of replacement rules; each rule's output feeds the next.
#[derive(Debug, Clone, Default)]
pub struct ReplacementRules {
    rules: Vec<Replacement>,
}

impl ReplacementRules {
    /// Create an empty rule list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in file name rules.
    pub fn defaults() -> Self {
        Self::from_static(DEFAULT_REPLACEMENTS)
    }

    /// The built-in rules plus the folder name rule.
    pub fn folder_defaults() -> Self {
        let mut rules = Self::defaults();
        rules.merge(Self::from_static(FOLDER_REPLACEMENTS));
        rules
    }

    fn from_static(pairs: &[(&str, &str)]) -> Self {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| {
                Replacement::new(pattern, *replacement).expect("built-in pattern is valid")
            })
            .collect();
        Self { rules }
    }

    /// Compile rules from configuration, keeping their order.
    pub fn from_config(entries: &[ReplacementConfig]) -> Result<Self> {
        let rules = entries
            .iter()
            .map(|entry| Replacement::new(&entry.pattern, entry.replacement.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Replacement) {
        self.rules.push(rule);
    }

    /// Merge `other` into this list.
    ///
    /// A rule whose pattern already exists overwrites that rule's replacement
    /// in place; new patterns go to the end.
    pub fn merge(&mut self, other: ReplacementRules) {
        for rule in other.rules {
            match self
                .rules
                .iter_mut()
                .find(|existing| existing.pattern() == rule.pattern())
            {
                Some(existing) => existing.replacement = rule.replacement,
                None => self.rules.push(rule),
            }
        }
    }

    /// Run every rule once, in order.
    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |acc, rule| rule.apply(&acc))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replacement> {
        self.rules.iter()
    }
}
