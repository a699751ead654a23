//! Decoding across several layouts.

use crate::config::{FileIdConfig, FileIdLayout};
use crate::fileid::helper::{FileIdHelper, FileIdStrategy};
use crate::fileid::parsed::ParsedFileId;

/// An ordered list of layouts.
///
/// New file IDs are built with the first layout; decoding tries each layout
/// in turn, so files written by an older layout are still found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdResolver {
    strategies: Vec<FileIdStrategy>,
}

impl FileIdResolver {
    pub fn new(primary: FileIdStrategy) -> Self {
        Self {
            strategies: vec![primary],
        }
    }

    /// Resolver for the configured layout followed by its fallbacks.
    pub fn from_config(config: &FileIdConfig) -> Self {
        let mut resolver = Self::new(FileIdStrategy::from_config(config));
        for layout in &config.fallback_layouts {
            resolver = resolver.with_fallback(FileIdStrategy::for_layout(*layout, config));
        }
        resolver
    }

    /// Add a layout tried after the existing ones. Duplicates are ignored.
    pub fn with_fallback(mut self, strategy: FileIdStrategy) -> Self {
        if !self.strategies.contains(&strategy) {
            self.strategies.push(strategy);
        }
        self
    }

    pub fn primary(&self) -> &FileIdStrategy {
        &self.strategies[0]
    }

    pub fn strategies(&self) -> &[FileIdStrategy] {
        &self.strategies
    }

    /// Encode with the primary layout.
    pub fn build_file_id(&self, parsed: &ParsedFileId) -> String {
        self.primary().build_file_id(parsed)
    }

    /// Decode with the first layout that accepts `file_id`.
    pub fn resolve(&self, file_id: &str) -> Option<(FileIdLayout, ParsedFileId)> {
        let resolved = self.strategies.iter().find_map(|strategy| {
            strategy
                .parse_file_id(file_id)
                .map(|parsed| (strategy.layout(), parsed))
        });

        match &resolved {
            Some((layout, _)) => tracing::debug!("Resolved '{}' with {} layout", file_id, layout),
            None => tracing::debug!("No layout matches '{}'", file_id),
        }
        resolved
    }

    pub fn parse_file_id(&self, file_id: &str) -> Option<ParsedFileId> {
        self.resolve(file_id).map(|(_, parsed)| parsed)
    }

    /// Whether any layout reads `file_id` as a variant of `original`.
    pub fn is_variant_of(&self, file_id: &str, original: &ParsedFileId) -> bool {
        self.strategies
            .iter()
            .any(|strategy| strategy.is_variant_of(file_id, original))
    }

    /// Folders to list when looking for variants of `parsed`, without duplicates.
    pub fn variant_folders(&self, parsed: &ParsedFileId) -> Vec<String> {
        let mut folders: Vec<String> = Vec::new();
        for strategy in &self.strategies {
            let folder = strategy.look_for_variant_in(parsed);
            if !folders.contains(&folder) {
                folders.push(folder);
            }
        }
        folders
    }
}

impl Default for FileIdResolver {
    fn default() -> Self {
        Self::new(FileIdStrategy::default())
    }
}
