//! pose-setup - environment bootstrapper for the tennis pose detection app.
//!
//! Before the web application can start it needs an uploads directory, three
//! model artifacts on disk, and a Python environment that can import its
//! packages. This crate checks all of that in order and reports exactly
//! what is missing.
//!
//! # Modules
//!
//! - [`bootstrap`] - The setup phases and their orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Program execution and PATH lookup
//! - [`ui`] - Console output, spinners, and test doubles
//!
//! # Example
//!
//! ```
//! use pose_setup::bootstrap::check_required_files;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("yolov8m.pt"), "").unwrap();
//!
//! let missing = check_required_files(temp.path(), &["yolov8m.pt", "yolov8m-pose.pt"]);
//! assert_eq!(missing.names(), &["yolov8m-pose.pt".to_string()]);
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, SetupError};
