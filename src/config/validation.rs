//! Configuration validation logic.

use crate::config::loader::{Config, ReplacementConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(rules) = &config.filter.replacements {
        validate_replacements("filter.replacements", rules)?;
    }
    validate_replacements("filter.extra_replacements", &config.filter.extra_replacements)?;

    if let Some(name) = &config.filter.default_name {
        validate_default_name(name)?;
    }

    Ok(())
}

/// Check that every pattern in a rule list compiles.
pub fn validate_replacements(field: &str, rules: &[ReplacementConfig]) -> Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        if let Err(e) = Regex::new(&rule.pattern) {
            return Err(Error::ConfigValidation {
                field: format!("{}[{}]", field, index),
                message: format!("Invalid pattern '{}': {}", rule.pattern, e),
            });
        }
    }

    Ok(())
}

/// Validate the placeholder name used for empty filter results.
pub fn validate_default_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ConfigValidation {
            field: "filter.default_name".to_string(),
            message: "Default name cannot be empty".to_string(),
        });
    }

    let pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();
    if !pattern.is_match(name) {
        return Err(Error::ConfigValidation {
            field: "filter.default_name".to_string(),
            message: format!(
                "Default name '{}' is invalid. It must start with an alphanumeric character, followed by alphanumerics, hyphens, or underscores.",
                name
            ),
        });
    }

    Ok(())
}
