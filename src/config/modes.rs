//! File ID layout definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available file ID layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIdLayout {
    /// Current layout, with the content hash embedded in the file name (default).
    #[default]
    Hash,
    /// Legacy layout, with variant folders as siblings under `_resampled`.
    Legacy,
}

impl fmt::Display for FileIdLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileIdLayout::Hash => write!(f, "hash"),
            FileIdLayout::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for FileIdLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hash" => Ok(FileIdLayout::Hash),
            "legacy" => Ok(FileIdLayout::Legacy),
            _ => Err(format!("Unknown file ID layout: {}", s)),
        }
    }
}
