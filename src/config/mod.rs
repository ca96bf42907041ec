//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions and built-in defaults in [`schema`]
//! - File discovery, loading, and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use pose_setup::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("pose-setup.yml"), "uploads_dir: media").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.uploads_dir, std::path::PathBuf::from("media"));
//! assert_eq!(config.model_files.len(), 3);
//! ```
//!
//! # Configuration File Location
//!
//! `pose-setup.yml` in the project root is used when present. Without it,
//! the built-in defaults apply. `--config` points at any other file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{ModelFile, PythonSettings, SetupConfig};
