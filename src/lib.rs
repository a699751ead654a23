//! Asset naming - file name filtering and file ID encoding for asset storage.
//!
//! This library provides the pure string transformations an asset store needs
//! before anything touches a storage backend.
//!
//! # Features
//!
//! - Configurable, ordered regex rules that sanitize user supplied file names
//! - Optional transliteration of non-ASCII names
//! - Reversible mapping between a file identity and its storage path
//! - Current and legacy path layouts behind a single trait
//! - Variant detection for resized or otherwise derived files
//!
//! # Example
//!
//! ```
//! use asset_naming::{FileIdHelper, FileNameFilter, HashFileIdHelper, ParsedFileId};
//!
//! let name = FileNameFilter::new().filter("Brötchen für alle.jpg");
//! assert_eq!(name, "Broetchen-fuer-alle.jpg");
//!
//! let helper = HashFileIdHelper;
//! let original = ParsedFileId::new(format!("bakery/{}", name)).with_hash("abcdef7890");
//! let resized = original.clone().with_variant("resizeXYZ");
//!
//! let file_id = helper.build_file_id(&resized);
//! assert_eq!(file_id, "bakery/_resampled/resizeXYZ/Broetchen-fuer-alle__abcdef7890.jpg");
//! assert!(helper.is_variant_of(&file_id, &original));
//! ```

pub mod config;
pub mod error;
pub mod fileid;
pub mod filter;
pub mod hash;

// Re-exports for convenience
pub use config::{validate_config, Config, FileIdLayout};
pub use error::{Error, Result};
pub use fileid::{
    FileIdHelper, FileIdResolver, FileIdStrategy, HashFileIdHelper, LegacyFileIdHelper,
    ParsedFileId,
};
pub use filter::{FileNameFilter, ReplacementRules, Transliterator};
