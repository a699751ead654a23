//! Structured file identity.

/// A file identity decoded from, or to be encoded into, a file ID.
///
/// `filename` is `folder/base.ext` with `/` separators and no leading slash.
/// An empty `hash` means the hash is unknown, an empty `variant` means the
/// original file. Transforms return new values.
///
/// Equality compares filename, hash and variant; the file ID a value was
/// decoded from is ignored.
#[derive(Debug, Clone, Default)]
pub struct ParsedFileId {
    filename: String,
    hash: String,
    variant: String,
    file_id: Option<String>,
}

impl ParsedFileId {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Build from all three components at once.
    pub fn from_parts(
        filename: impl Into<String>,
        hash: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            hash: hash.into(),
            variant: variant.into(),
            file_id: None,
        }
    }

    pub(crate) fn decoded(filename: String, hash: String, variant: String, file_id: &str) -> Self {
        Self {
            filename,
            hash,
            variant,
            file_id: Some(file_id.to_string()),
        }
    }

    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..self
        }
    }

    pub fn with_hash(self, hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            ..self
        }
    }

    pub fn with_variant(self, variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..self
        }
    }

    /// Set a variant made of several hierarchical parts, joined with `_`.
    pub fn with_variant_segments<I, S>(self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_variant(join_variant(segments))
    }

    /// The same identity pointing at the original file.
    pub fn without_variant(self) -> Self {
        self.with_variant(String::new())
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn has_variant(&self) -> bool {
        !self.variant.is_empty()
    }

    /// The file ID this value was decoded from, if any.
    pub fn file_id(&self) -> Option<&str> {
        self.file_id.as_deref()
    }

    /// Folder part of the filename, empty for files at the root.
    pub fn folder(&self) -> &str {
        split_folder(&self.filename).0
    }

    /// Last path segment of the filename.
    pub fn name(&self) -> &str {
        split_folder(&self.filename).1
    }

    /// File name without folder and extension.
    pub fn base_name(&self) -> &str {
        split_name(self.name()).0
    }

    /// Extension without the leading dot. Multi-part extensions such as
    /// `tar.gz` are kept whole.
    pub fn extension(&self) -> &str {
        split_name(self.name()).1.trim_start_matches('.')
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.filename.split('/').filter(|s| !s.is_empty())
    }

    /// `(filename, hash, variant)`
    pub fn tuple(&self) -> (&str, &str, &str) {
        (&self.filename, &self.hash, &self.variant)
    }
}

impl PartialEq for ParsedFileId {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename && self.hash == other.hash && self.variant == other.variant
    }
}

impl Eq for ParsedFileId {}

/// Join hierarchical variant parts into one token.
pub fn join_variant<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    parts.join("_")
}

/// Split `folder/name` at the last slash.
pub(crate) fn split_folder(filename: &str) -> (&str, &str) {
    match filename.rfind('/') {
        Some(pos) => (&filename[..pos], &filename[pos + 1..]),
        None => ("", filename),
    }
}

/// Split a file name at its first dot; the extension keeps the dot.
pub(crate) fn split_name(name: &str) -> (&str, &str) {
    match name.find('.') {
        Some(pos) => (&name[..pos], &name[pos..]),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let parsed = ParsedFileId::new("folder/sub/sam_double_dots.tar.gz");
        assert_eq!(parsed.folder(), "folder/sub");
        assert_eq!(parsed.name(), "sam_double_dots.tar.gz");
        assert_eq!(parsed.base_name(), "sam_double_dots");
        assert_eq!(parsed.extension(), "tar.gz");
        assert_eq!(
            parsed.segments().collect::<Vec<_>>(),
            vec!["folder", "sub", "sam_double_dots.tar.gz"]
        );
    }

    #[test]
    fn test_root_file_without_extension() {
        let parsed = ParsedFileId::new("README");
        assert_eq!(parsed.folder(), "");
        assert_eq!(parsed.base_name(), "README");
        assert_eq!(parsed.extension(), "");
    }

    #[test]
    fn test_transforms_return_new_values() {
        let original = ParsedFileId::from_parts("folder/sam.jpg", "abcdef7890", "");
        let variant = original.clone().with_variant("resizeXYZ");

        assert_eq!(original.variant(), "");
        assert_eq!(variant.variant(), "resizeXYZ");
        assert_eq!(variant.clone().without_variant(), original);
        assert_eq!(
            variant.with_hash("").tuple(),
            ("folder/sam.jpg", "", "resizeXYZ")
        );
    }

    #[test]
    fn test_variant_segments_collapse() {
        let parsed = ParsedFileId::new("sam.jpg").with_variant_segments(["stack", "variant"]);
        assert_eq!(parsed.variant(), "stack_variant");
        assert_eq!(join_variant(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_equality_ignores_file_id() {
        let decoded = ParsedFileId::decoded(
            "sam.jpg".to_string(),
            String::new(),
            "resizeXYZ".to_string(),
            "_resampled/resizeXYZ/sam.jpg",
        );
        assert_eq!(decoded.file_id(), Some("_resampled/resizeXYZ/sam.jpg"));
        assert_eq!(decoded, ParsedFileId::from_parts("sam.jpg", "", "resizeXYZ"));
        assert_ne!(decoded, ParsedFileId::from_parts("sam.jpg", "abcdef7890", "resizeXYZ"));
    }
}
