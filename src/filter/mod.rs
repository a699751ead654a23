//! File name filter module.
//!
//! Provides:
//! - Ordered regex replacement rules with the built-in defaults
//! - Pluggable transliteration to ASCII
//! - The `FileNameFilter` pipeline

pub mod name;
pub mod rules;
pub mod transliterate;

pub use name::FileNameFilter;
pub use rules::{Replacement, ReplacementRules};
pub use transliterate::{AsciiTransliterator, NoTransliteration, Transliterator};
