//! Configuration structures and loading logic.

use crate::config::modes::FileIdLayout;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub file_ids: FileIdConfig,
}

/// One pattern → replacement rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementConfig {
    /// Regular expression matched against the name.
    pub pattern: String,

    /// Replacement text, may reference capture groups.
    #[serde(default)]
    pub replacement: String,
}

/// File name filter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Whether names are transliterated to ASCII before filtering.
    #[serde(default = "default_true")]
    pub transliterate: bool,

    /// Fixed name used when filtering leaves nothing behind.
    /// A random token is generated when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_name: Option<String>,

    /// Ordered rules replacing the built-in `default_replacements`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacements: Option<Vec<ReplacementConfig>>,

    /// Rules merged into the active list.
    #[serde(default)]
    pub extra_replacements: Vec<ReplacementConfig>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            transliterate: true,
            default_name: None,
            replacements: None,
            extra_replacements: Vec::new(),
        }
    }
}

/// File ID layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileIdConfig {
    /// Layout used to build new file IDs.
    #[serde(default)]
    pub layout: FileIdLayout,

    /// Whether the legacy layout decodes `__<hash>` suffixes.
    #[serde(default = "default_true")]
    pub legacy_hash_aware: bool,

    /// Additional layouts tried, in order, when decoding.
    #[serde(default)]
    pub fallback_layouts: Vec<FileIdLayout>,
}

impl Default for FileIdConfig {
    fn default() -> Self {
        Self {
            layout: FileIdLayout::default(),
            legacy_hash_aware: true,
            fallback_layouts: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Merge extra filter rules, as an outer configuration layer would.
    pub fn merge_replacements(&mut self, extra: impl IntoIterator<Item = ReplacementConfig>) {
        for rule in extra {
            let existing = self
                .filter
                .extra_replacements
                .iter_mut()
                .find(|r| r.pattern == rule.pattern);
            match existing {
                Some(existing) => existing.replacement = rule.replacement,
                None => self.filter.extra_replacements.push(rule),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[filter]
transliterate = false
default_name = "file"
replacements = [
    { pattern = '\s', replacement = "-" },
    { pattern = '[^-_A-Za-z0-9+.]+' },
]

[file_ids]
layout = "legacy"
legacy_hash_aware = false
fallback_layouts = ["hash"]
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert!(!config.filter.transliterate);
        assert_eq!(config.filter.default_name.as_deref(), Some("file"));

        let rules = config.filter.replacements.as_ref().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern, r"\s");
        assert_eq!(rules[1].replacement, "");

        assert_eq!(config.file_ids.layout, FileIdLayout::Legacy);
        assert!(!config.file_ids.legacy_hash_aware);
        assert_eq!(config.file_ids.fallback_layouts, vec![FileIdLayout::Hash]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.filter.transliterate);
        assert!(config.file_ids.legacy_hash_aware);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.toml");

        let config = Config::from_toml_str(SAMPLE).unwrap();
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_merge_replacements() {
        let mut config = Config::default();
        config.merge_replacements(vec![ReplacementConfig {
            pattern: r"\.".to_string(),
            replacement: "_".to_string(),
        }]);
        config.merge_replacements(vec![ReplacementConfig {
            pattern: r"\.".to_string(),
            replacement: "-".to_string(),
        }]);

        assert_eq!(config.filter.extra_replacements.len(), 1);
        assert_eq!(config.filter.extra_replacements[0].replacement, "-");
    }
}
