//! Current file ID layout.
//!
//! `folder/_resampled/<variant>/<base>__<hash>.<ext>`, where the variant part
//! is only present for variants and the hash part only when a hash is known.

use crate::fileid::helper::{
    join_file_id, join_path, reject, split_file_id, FileIdHelper, HASH_SEPARATOR,
};
use crate::fileid::parsed::{join_variant, split_name, ParsedFileId};
use crate::hash::{embeddable_hash, is_truncated_hash};

/// Encoder/decoder for the current layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashFileIdHelper;

impl FileIdHelper for HashFileIdHelper {
    fn build_file_id(&self, parsed: &ParsedFileId) -> String {
        let (base, extension) = split_name(parsed.name());

        let mut file = base.to_string();
        if !parsed.hash().is_empty() {
            match embeddable_hash(parsed.hash()) {
                Some(hash) => {
                    file.push_str(HASH_SEPARATOR);
                    file.push_str(&hash);
                }
                None => tracing::debug!(
                    "Hash '{}' of '{}' is not embeddable, omitting it",
                    parsed.hash(),
                    parsed.filename()
                ),
            }
        }
        file.push_str(extension);

        if parsed.has_variant() {
            join_file_id(parsed.folder(), &[parsed.variant()], &file)
        } else {
            join_file_id(parsed.folder(), &[], &file)
        }
    }

    /// Use forward slashes, drop empty segments and collapse `__` runs,
    /// which would otherwise read as a hash separator.
    fn clean_filename(&self, filename: &str) -> String {
        let normalized = filename.replace('\\', "/");
        let mut cleaned = normalized
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        while cleaned.contains(HASH_SEPARATOR) {
            cleaned = cleaned.replace(HASH_SEPARATOR, "_");
        }
        cleaned
    }

    fn parse_file_id(&self, file_id: &str) -> Option<ParsedFileId> {
        let parts = split_file_id(file_id)?;

        let (stem, extension) = split_name(parts.file);
        if stem.is_empty() {
            return reject(file_id, "missing base name");
        }

        let (base, hash) = match stem.rsplit_once(HASH_SEPARATOR) {
            Some((base, hash)) if !base.is_empty() && is_truncated_hash(hash) => (base, hash),
            _ => (stem, ""),
        };

        let filename = join_path(&parts.folder(), &format!("{}{}", base, extension));
        Some(ParsedFileId::decoded(
            filename,
            hash.to_string(),
            join_variant(&parts.variant),
            file_id,
        ))
    }
}
