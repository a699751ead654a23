//! Configuration module for asset naming.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - File ID layout selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, FileIdConfig, FilterConfig, ReplacementConfig};
pub use modes::FileIdLayout;
pub use validation::validate_config;
