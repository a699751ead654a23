//! File ID module.
//!
//! Provides:
//! - The `ParsedFileId` value object
//! - The current (hash) and legacy path layouts behind one `FileIdHelper` trait
//! - Layout selection and multi-layout decoding

pub mod hashed;
pub mod helper;
pub mod legacy;
pub mod parsed;
pub mod resolver;

pub use hashed::HashFileIdHelper;
pub use helper::{FileIdHelper, FileIdStrategy, HASH_SEPARATOR, VARIANT_MARKER};
pub use legacy::LegacyFileIdHelper;
pub use parsed::{join_variant, ParsedFileId};
pub use resolver::FileIdResolver;
