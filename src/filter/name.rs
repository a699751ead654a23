//! File name filtering.

use std::fmt;
use std::sync::Arc;

use crate::config::validation::validate_default_name;
use crate::config::FilterConfig;
use crate::error::Result;
use crate::filter::rules::ReplacementRules;
use crate::filter::transliterate::{AsciiTransliterator, NoTransliteration, Transliterator};
use crate::hash::content_hash;

/// Upper bound on replacement passes before giving up on a fixed point.
const MAX_PASSES: usize = 8;

/// Length of a generated placeholder name.
const GENERATED_NAME_LENGTH: usize = 13;

/// Normalizes user supplied file names into a restricted character set.
///
/// The name is transliterated, then the replacement rules run over the base
/// name until it stops changing. The extension is re-appended untouched and
/// an empty base name is replaced by a placeholder, so the result is never
/// empty and never just an extension.
#[derive(Clone)]
pub struct FileNameFilter {
    replacements: ReplacementRules,
    transliterator: Arc<dyn Transliterator>,
    transliterate: bool,
    keep_extension: bool,
    default_name: Option<String>,
}

impl Default for FileNameFilter {
    fn default() -> Self {
        Self {
            replacements: ReplacementRules::defaults(),
            transliterator: Arc::new(AsciiTransliterator),
            transliterate: true,
            keep_extension: true,
            default_name: None,
        }
    }
}

impl fmt::Debug for FileNameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNameFilter")
            .field("replacements", &self.replacements)
            .field("transliterate", &self.transliterate)
            .field("keep_extension", &self.keep_extension)
            .field("default_name", &self.default_name)
            .finish()
    }
}

impl FileNameFilter {
    /// Filter with the built-in rules and the default transliterator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for folder names: dots are replaced and no extension is kept.
    pub fn for_folders() -> Self {
        Self {
            replacements: ReplacementRules::folder_defaults(),
            keep_extension: false,
            ..Self::default()
        }
    }

    /// Build a filter from the `[filter]` configuration section.
    pub fn from_config(config: &FilterConfig) -> Result<Self> {
        let mut replacements = match &config.replacements {
            Some(entries) => ReplacementRules::from_config(entries)?,
            None => ReplacementRules::defaults(),
        };
        replacements.merge(ReplacementRules::from_config(&config.extra_replacements)?);

        let mut filter = Self::default().with_replacements(replacements);
        if !config.transliterate {
            filter.disable_transliteration();
        }
        if let Some(name) = &config.default_name {
            filter.set_default_name(name.as_str())?;
        }
        Ok(filter)
    }

    pub fn with_replacements(mut self, replacements: ReplacementRules) -> Self {
        self.set_replacements(replacements);
        self
    }

    pub fn with_transliterator<T: Transliterator + 'static>(mut self, transliterator: T) -> Self {
        self.set_transliterator(transliterator);
        self
    }

    pub fn without_transliteration(mut self) -> Self {
        self.disable_transliteration();
        self
    }

    /// Replace the rule list for this instance only.
    pub fn set_replacements(&mut self, replacements: ReplacementRules) {
        self.replacements = replacements;
    }

    pub fn replacements(&self) -> &ReplacementRules {
        &self.replacements
    }

    /// Use `transliterator` before the replacement rules run.
    pub fn set_transliterator<T: Transliterator + 'static>(&mut self, transliterator: T) {
        self.transliterator = Arc::new(transliterator);
        self.transliterate = true;
    }

    /// Skip transliteration; non-ASCII characters are left to the rules.
    pub fn disable_transliteration(&mut self) {
        self.transliterator = Arc::new(NoTransliteration);
        self.transliterate = false;
    }

    pub fn is_transliterating(&self) -> bool {
        self.transliterate
    }

    /// Use a fixed placeholder instead of a generated one.
    pub fn set_default_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_default_name(&name)?;
        self.default_name = Some(name);
        Ok(())
    }

    /// Filter a candidate file name.
    pub fn filter(&self, original: &str) -> String {
        let name = self.transliterator.to_ascii(original);

        let (base, extension) = if self.keep_extension {
            split_extension(&name)
        } else {
            (name.as_str(), None)
        };

        let mut filtered = self.apply_replacements(base);
        if filtered.is_empty() {
            filtered = self.placeholder(original);
            tracing::debug!("Filtered name of '{}' is empty, using '{}'", name, filtered);
        }

        match extension {
            Some(ext) => format!("{}.{}", filtered, ext),
            None => filtered,
        }
    }

    /// Run the rules until the output stops changing.
    ///
    /// Only the first pass may lengthen the name. Rules that keep growing it
    /// never settle, so the last shorter result is kept instead.
    fn apply_replacements(&self, input: &str) -> String {
        let mut current = input.to_string();
        for pass in 0..MAX_PASSES {
            let next = self.replacements.apply(&current);
            if next == current {
                return next;
            }
            if pass > 0 && next.len() > current.len() {
                tracing::warn!(
                    "Replacement rules keep growing '{}', stopping after {} passes",
                    input,
                    pass + 1
                );
                return current;
            }
            current = next;
        }

        tracing::warn!(
            "Replacement rules did not settle on '{}' after {} passes",
            input,
            MAX_PASSES
        );
        current
    }

    /// Name used when the rules leave nothing of `original`.
    ///
    /// The configured name goes through the rules like any other name. The
    /// generated one is a prefix of the md5 of `original`, so equal inputs
    /// get equal placeholders.
    fn placeholder(&self, original: &str) -> String {
        if let Some(name) = &self.default_name {
            let filtered = self.apply_replacements(name);
            if !filtered.is_empty() {
                return filtered;
            }
        }

        let mut token = content_hash(original.as_bytes());
        token.truncate(GENERATED_NAME_LENGTH);
        let filtered = self.apply_replacements(&token);
        if filtered.is_empty() {
            token
        } else {
            filtered
        }
    }
}

/// Split off an extension.
///
/// Only a non-empty ASCII alphanumeric tail after the last dot, with some
/// text in front of it, counts as an extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((base, ext))
            if !base.is_empty()
                && !ext.is_empty()
                && ext.bytes().all(|b| b.is_ascii_alphanumeric()) =>
        {
            (base, Some(ext))
        }
        _ => (name, None),
    }
}
