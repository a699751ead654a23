//! Legacy file ID layout.
//!
//! Variants live under `folder/_resampled/`, one folder per variant part, so
//! the variant `stack_variant` of `folder/sam.jpg` is stored as
//! `folder/_resampled/stack/variant/sam.jpg`.
//!
//! Decoding does not sanitize its input. A backslash is an ordinary
//! character, so `Folder\With\Backslash\file.jpg` decodes to a single
//! segment filename.

use crate::fileid::helper::{
    join_file_id, join_path, reject, split_file_id, FileIdHelper, HASH_SEPARATOR,
};
use crate::fileid::parsed::{join_variant, split_name, ParsedFileId};
use crate::hash::is_truncated_hash;

/// Encoder/decoder for the legacy layout.
///
/// The legacy layout never writes a hash into the file name. The mode only
/// affects decoding: in hash-aware mode a `__<hash>` suffix on the base name
/// is read as the truncated content hash, and any other `__` suffix marks a
/// file ID from a newer layout that this helper refuses. In migration mode
/// `__` is an ordinary part of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFileIdHelper {
    hash_aware: bool,
}

impl LegacyFileIdHelper {
    pub fn new(hash_aware: bool) -> Self {
        Self { hash_aware }
    }

    /// Helper used when migrating files out of the legacy layout.
    pub fn migration() -> Self {
        Self::new(false)
    }

    pub fn is_hash_aware(&self) -> bool {
        self.hash_aware
    }
}

impl Default for LegacyFileIdHelper {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FileIdHelper for LegacyFileIdHelper {
    fn build_file_id(&self, parsed: &ParsedFileId) -> String {
        let variant: Vec<&str> = parsed
            .variant()
            .split('_')
            .filter(|s| !s.is_empty())
            .collect();
        join_file_id(parsed.folder(), &variant, parsed.name())
    }

    fn clean_filename(&self, filename: &str) -> String {
        filename.replace('\\', "/").trim_matches('/').to_string()
    }

    fn parse_file_id(&self, file_id: &str) -> Option<ParsedFileId> {
        let parts = split_file_id(file_id)?;

        if parts.variant.iter().any(|s| s.contains('.')) {
            return reject(file_id, "dot in variant folder");
        }

        let (stem, extension) = split_name(parts.file);
        if stem.is_empty() {
            return reject(file_id, "missing base name");
        }

        let (base, hash) = if self.hash_aware {
            match stem.rsplit_once(HASH_SEPARATOR) {
                Some((base, hash)) if !base.is_empty() && is_truncated_hash(hash) => (base, hash),
                Some(_) => return reject(file_id, "variant suffix from a newer layout"),
                None => (stem, ""),
            }
        } else {
            (stem, "")
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn migration() -> LegacyFileIdHelper {
        LegacyFileIdHelper::migration()
    }

    #[rstest]
    #[case("sam.jpg", ParsedFileId::new("sam.jpg"))]
    #[case("subfolder/sam.jpg", ParsedFileId::new("subfolder/sam.jpg"))]
    #[case(
        "subfolder/_resampled/resizeXYZ/sam.jpg",
        ParsedFileId::from_parts("subfolder/sam.jpg", "", "resizeXYZ")
    )]
    #[case(
        "_resampled/resizeXYZ/sam.jpg",
        ParsedFileId::from_parts("sam.jpg", "", "resizeXYZ")
    )]
    #[case(
        "subfolder/under_score/_resampled/resizeXYZ/sam.jpg",
        ParsedFileId::from_parts("subfolder/under_score/sam.jpg", "", "resizeXYZ")
    )]
    #[case(
        "subfolder/under_score/_resampled/resizeXYZ/sam_single-underscore.jpg",
        ParsedFileId::from_parts("subfolder/under_score/sam_single-underscore.jpg", "", "resizeXYZ")
    )]
    #[case(
        "subfolder/under_score/sam_double_dots.tar.gz",
        ParsedFileId::new("subfolder/under_score/sam_double_dots.tar.gz")
    )]
    #[case(
        "subfolder/under_score/_resampled/resizeXYZ/sam_double_dots.tar.gz",
        ParsedFileId::from_parts("subfolder/under_score/sam_double_dots.tar.gz", "", "resizeXYZ")
    )]
    #[case(
        "subfolder/under_score/_resampled/stack/variant/sam_double_dots.tar.gz",
        ParsedFileId::from_parts("subfolder/under_score/sam_double_dots.tar.gz", "", "stack_variant")
    )]
    #[case(
        "sam__double-under-score.jpg",
        ParsedFileId::new("sam__double-under-score.jpg")
    )]
    #[case(
        "_resampled/resizeXYZ/sam__double-under-score.jpg",
        ParsedFileId::from_parts("sam__double-under-score.jpg", "", "resizeXYZ")
    )]
    #[case(
        "subfolder/_resampled/resizeXYZ/sam__double-under-score.jpg",
        ParsedFileId::from_parts("subfolder/sam__double-under-score.jpg", "", "resizeXYZ")
    )]
    fn test_file_id_components(#[case] file_id: &str, #[case] parsed: ParsedFileId) {
        assert_eq!(migration().build_file_id(&parsed), file_id);
        assert_eq!(migration().parse_file_id(file_id), Some(parsed));
    }

    #[rstest]
    #[case("sam.jpg", ParsedFileId::from_parts("sam.jpg", "abcdef7890", ""))]
    #[case("subfolder/sam.jpg", ParsedFileId::from_parts("subfolder/sam.jpg", "abcdef7890", ""))]
    #[case(
        "_resampled/resizeXYZ/sam__double-under-score.jpg",
        ParsedFileId::from_parts("sam__double-under-score.jpg", "abcdef7890", "resizeXYZ")
    )]
    #[case(
        "subfolder/_resampled/resizeXYZ/sam__double-under-score.jpg",
        ParsedFileId::from_parts("subfolder/sam__double-under-score.jpg", "abcdef7890", "resizeXYZ")
    )]
    fn test_dirty_file_id_components(#[case] file_id: &str, #[case] parsed: ParsedFileId) {
        assert_eq!(migration().build_file_id(&parsed), file_id);

        // the hash is not on disk, so decoding only recovers the rest
        let decoded = migration().parse_file_id(file_id).unwrap();
        assert_eq!(decoded, parsed.with_hash(""));
    }

    #[rstest]
    #[case("sam.jpg", "sam.jpg")]
    #[case("subfolder/sam.jpg", "subfolder/sam.jpg")]
    #[case("sub_folder/sam.jpg", "sub_folder/sam.jpg")]
    #[case("sub_folder/double__underscore.jpg", "sub_folder/double__underscore.jpg")]
    #[case("sub_folder/single_underscore.jpg", "sub_folder/single_underscore.jpg")]
    #[case("Folder/With/Backslash/file.jpg", "Folder\\With\\Backslash\\file.jpg")]
    fn test_clean_filename(#[case] expected: &str, #[case] input: &str) {
        assert_eq!(migration().clean_filename(input), expected);
    }

    #[test]
    fn test_parse_keeps_backslashes() {
        let file_id = "Folder\\With\\Backslash\\file.jpg";
        for helper in [LegacyFileIdHelper::migration(), LegacyFileIdHelper::default()] {
            let parsed = helper.parse_file_id(file_id).unwrap();
            assert_eq!(parsed.filename(), file_id);
            assert_eq!(parsed.folder(), "");
        }
    }

    #[rstest]
    #[case("/sam.jpg")]
    #[case("/no-slash-start/sam__resizeXYZ.jpg")]
    #[case("folder//sam.jpg")]
    #[case("folder/_resampled/sam.jpg")]
    #[case("folder/_resampled/resize.XYZ/sam.jpg")]
    fn test_broken_file_id(#[case] file_id: &str) {
        assert_eq!(migration().parse_file_id(file_id), None);
        assert_eq!(LegacyFileIdHelper::default().parse_file_id(file_id), None);
    }

    #[rstest]
    #[case("_resampled/ResizeXYZ/sam.jpg", ParsedFileId::new("sam.jpg"), true)]
    #[case("sam.jpg", ParsedFileId::new("sam.jpg"), true)]
    #[case("folder/_resampled/ResizeXYZ/sam.jpg", ParsedFileId::new("folder/sam.jpg"), true)]
    #[case("folder/sam.jpg", ParsedFileId::new("folder/sam.jpg"), true)]
    #[case(
        "folder/_resampled/ResizeXYZ/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", ""),
        true
    )]
    #[case(
        "folder/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", ""),
        true
    )]
    #[case(
        "folder/_resampled/ResizeXYZ/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "", "ResizeXXX"),
        true
    )]
    #[case(
        "folder/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "", "ResizeXXX"),
        true
    )]
    #[case(
        "folder/_resampled/ResizeXYZ/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", "ResizeXXX"),
        true
    )]
    #[case(
        "folder/sam.jpg",
        ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", "ResizeXXX"),
        true
    )]
    #[case(
        "folder/sam.jpg",
        ParsedFileId::from_parts("wrong-folder/sam.jpg", "abcdef7890", ""),
        false
    )]
    #[case(
        "folder/sam.jpg",
        ParsedFileId::from_parts("wrong-file-name.jpg", "folder", ""),
        false
    )]
    #[case(
        "folder/_resampled/ResizeXYZ/sam.jpg",
        ParsedFileId::from_parts("wrong-folder/sam.jpg", "abcdef7890", ""),
        false
    )]
    #[case(
        "folder/_resampled/ResizeXYZ/sam.jpg",
        ParsedFileId::from_parts("wrong-file-name.jpg", "folder", ""),
        false
    )]
    fn test_variant_of(
        #[case] file_id: &str,
        #[case] original: ParsedFileId,
        #[case] expected: bool,
    ) {
        assert_eq!(migration().is_variant_of(file_id, &original), expected);
    }

    #[rstest]
    #[case(ParsedFileId::from_parts("sam.jpg", "abcdef7890", ""), "_resampled")]
    #[case(ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", ""), "folder/_resampled")]
    #[case(ParsedFileId::from_parts("folder/truncate-hash.jpg", "abcdef78901", ""), "folder/_resampled")]
    #[case(
        ParsedFileId::from_parts("folder/truncate-hash.jpg", "abcdef7890", "ResizeXXX"),
        "folder/_resampled"
    )]
    fn test_variant_in(#[case] parsed: ParsedFileId, #[case] expected: &str) {
        assert_eq!(migration().look_for_variant_in(&parsed), expected);
    }

    #[rstest]
    #[case(
        "subfolder/_resampled/stack/variant/sam__abcdef7890.jpg",
        ParsedFileId::from_parts("subfolder/sam.jpg", "abcdef7890", "stack_variant")
    )]
    #[case("sam__abcdef7890.jpg", ParsedFileId::from_parts("sam.jpg", "abcdef7890", ""))]
    #[case("sam.tar.gz", ParsedFileId::new("sam.tar.gz"))]
    fn test_hash_aware_components(#[case] file_id: &str, #[case] parsed: ParsedFileId) {
        let helper = LegacyFileIdHelper::default();
        assert!(helper.is_hash_aware());
        assert_eq!(helper.parse_file_id(file_id), Some(parsed));
    }

    #[rstest]
    #[case(
        "subfolder/_resampled/stack/variant/sam.jpg",
        ParsedFileId::from_parts("subfolder/sam.jpg", "abcdef7890", "stack_variant")
    )]
    #[case("folder/sam.jpg", ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", ""))]
    #[case("sam.tar.gz", ParsedFileId::from_parts("sam.tar.gz", "0123456789", ""))]
    fn test_build_never_writes_hash(#[case] file_id: &str, #[case] parsed: ParsedFileId) {
        for helper in [LegacyFileIdHelper::migration(), LegacyFileIdHelper::default()] {
            assert_eq!(helper.build_file_id(&parsed), file_id);
            assert_eq!(helper.parse_file_id(file_id), Some(parsed.clone().with_hash("")));
        }
    }

    #[test]
    fn test_hash_aware_refuses_newer_variants() {
        let helper = LegacyFileIdHelper::default();
        assert_eq!(helper.parse_file_id("sam__double-under-score.jpg"), None);
        assert_eq!(helper.parse_file_id("folder/sam__resizeXYZ.jpg"), None);
        assert!(!helper.is_variant_of("folder/sam__resizeXYZ.jpg", &ParsedFileId::new("folder/sam.jpg")));
    }

    #[test]
    fn test_hash_aware_drops_dirty_hash() {
        let helper = LegacyFileIdHelper::new(true);
        let parsed = ParsedFileId::from_parts("folder/sam.jpg", "abcdef78901234567890", "");
        assert_eq!(helper.build_file_id(&parsed), "folder/sam.jpg");
        assert_eq!(
            helper.parse_file_id("folder/sam__abcdef7890.jpg"),
            Some(ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", ""))
        );
    }

    #[rstest]
    #[case(ParsedFileId::new("sam.jpg"))]
    #[case(ParsedFileId::new("a/b/sam_double_dots.tar.gz"))]
    fn test_round_trip_and_variants(#[case] parsed: ParsedFileId) {
        for helper in [LegacyFileIdHelper::migration(), LegacyFileIdHelper::default()] {
            let file_id = helper.build_file_id(&parsed);
            assert_eq!(helper.parse_file_id(&file_id), Some(parsed.clone()));

            let variant = parsed.clone().with_variant_segments(["stack", "variant"]);
            let variant_id = helper.build_file_id(&variant);
            assert!(helper.is_variant_of(&variant_id, &parsed));
            assert_eq!(helper.parse_file_id(&variant_id), Some(variant));
        }
    }
}
