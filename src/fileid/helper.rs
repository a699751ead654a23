//! Shared file ID contract and layout selection.

use crate::config::{FileIdConfig, FileIdLayout};
use crate::fileid::hashed::HashFileIdHelper;
use crate::fileid::legacy::LegacyFileIdHelper;
use crate::fileid::parsed::ParsedFileId;

/// Folder name that introduces the variant part of a file ID.
pub const VARIANT_MARKER: &str = "_resampled";

/// Separator between a base name and an embedded hash.
pub const HASH_SEPARATOR: &str = "__";

/// Encodes and decodes file IDs for one storage layout.
pub trait FileIdHelper {
    /// Encode `parsed` as a file ID.
    ///
    /// Never fails; a malformed identity yields a malformed path.
    fn build_file_id(&self, parsed: &ParsedFileId) -> String;

    /// Normalize a user supplied filename for this layout.
    fn clean_filename(&self, filename: &str) -> String;

    /// Decode a file ID, or `None` if it does not fit this layout.
    fn parse_file_id(&self, file_id: &str) -> Option<ParsedFileId>;

    /// Whether `file_id` is `original` or one of its variants.
    ///
    /// Only the filenames are compared; hashes and variants are ignored.
    fn is_variant_of(&self, file_id: &str, original: &ParsedFileId) -> bool {
        self.parse_file_id(file_id)
            .is_some_and(|parsed| parsed.filename() == original.filename())
    }

    /// Folder under which the variants of `parsed` live.
    fn look_for_variant_in(&self, parsed: &ParsedFileId) -> String {
        join_path(parsed.folder(), VARIANT_MARKER)
    }
}

/// A file ID split into its structural parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileIdParts<'a> {
    pub folder: Vec<&'a str>,
    pub variant: Vec<&'a str>,
    pub file: &'a str,
}

impl FileIdParts<'_> {
    pub fn folder(&self) -> String {
        self.folder.join("/")
    }
}

/// Split a file ID into folder, variant and file segments.
///
/// Rejects a leading slash, empty or dot segments, and a variant marker that
/// is repeated, names the file itself, or has nothing after it.
pub(crate) fn split_file_id(file_id: &str) -> Option<FileIdParts<'_>> {
    if file_id.is_empty() {
        return reject(file_id, "empty file ID");
    }
    if file_id.starts_with('/') {
        return reject(file_id, "leading slash");
    }

    let segments: Vec<&str> = file_id.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return reject(file_id, "empty path segment");
    }
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return reject(file_id, "relative path segment");
    }

    let (&file, dirs) = segments.split_last()?;
    if file == VARIANT_MARKER {
        return reject(file_id, "variant marker in file position");
    }

    let markers: Vec<usize> = dirs
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == VARIANT_MARKER)
        .map(|(i, _)| i)
        .collect();

    match markers.as_slice() {
        [] => Some(FileIdParts {
            folder: dirs.to_vec(),
            variant: Vec::new(),
            file,
        }),
        [marker] => {
            let variant = dirs[marker + 1..].to_vec();
            if variant.is_empty() {
                return reject(file_id, "variant marker without variant");
            }
            Some(FileIdParts {
                folder: dirs[..*marker].to_vec(),
                variant,
                file,
            })
        }
        _ => reject(file_id, "repeated variant marker"),
    }
}

pub(crate) fn reject<T>(file_id: &str, reason: &str) -> Option<T> {
    tracing::debug!("Rejected file ID '{}': {}", file_id, reason);
    None
}

/// Join two path fragments, skipping an empty folder.
pub(crate) fn join_path(folder: &str, rest: &str) -> String {
    if folder.is_empty() {
        rest.to_string()
    } else {
        format!("{}/{}", folder, rest)
    }
}

/// Assemble `folder/_resampled/<variant...>/file`.
pub(crate) fn join_file_id(folder: &str, variant: &[&str], file: &str) -> String {
    let mut segments: Vec<&str> = Vec::with_capacity(variant.len() + 3);
    if !folder.is_empty() {
        segments.push(folder);
    }
    if !variant.is_empty() {
        segments.push(VARIANT_MARKER);
        segments.extend_from_slice(variant);
    }
    segments.push(file);
    segments.join("/")
}

/// The file ID layouts, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIdStrategy {
    Hash(HashFileIdHelper),
    Legacy(LegacyFileIdHelper),
}

impl FileIdStrategy {
    /// Strategy for `layout`, honoring the legacy options in `config`.
    pub fn for_layout(layout: FileIdLayout, config: &FileIdConfig) -> Self {
        match layout {
            FileIdLayout::Hash => FileIdStrategy::Hash(HashFileIdHelper),
            FileIdLayout::Legacy => {
                FileIdStrategy::Legacy(LegacyFileIdHelper::new(config.legacy_hash_aware))
            }
        }
    }

    /// Strategy for the configured primary layout.
    pub fn from_config(config: &FileIdConfig) -> Self {
        Self::for_layout(config.layout, config)
    }

    pub fn layout(&self) -> FileIdLayout {
        match self {
            FileIdStrategy::Hash(_) => FileIdLayout::Hash,
            FileIdStrategy::Legacy(_) => FileIdLayout::Legacy,
        }
    }

    fn helper(&self) -> &dyn FileIdHelper {
        match self {
            FileIdStrategy::Hash(helper) => helper,
            FileIdStrategy::Legacy(helper) => helper,
        }
    }
}

impl Default for FileIdStrategy {
    fn default() -> Self {
        FileIdStrategy::Hash(HashFileIdHelper)
    }
}

impl FileIdHelper for FileIdStrategy {
    fn build_file_id(&self, parsed: &ParsedFileId) -> String {
        self.helper().build_file_id(parsed)
    }

    fn clean_filename(&self, filename: &str) -> String {
        self.helper().clean_filename(filename)
    }

    fn parse_file_id(&self, file_id: &str) -> Option<ParsedFileId> {
        self.helper().parse_file_id(file_id)
    }

    fn is_variant_of(&self, file_id: &str, original: &ParsedFileId) -> bool {
        self.helper().is_variant_of(file_id, original)
    }

    fn look_for_variant_in(&self, parsed: &ParsedFileId) -> String {
        self.helper().look_for_variant_in(parsed)
    }
}
