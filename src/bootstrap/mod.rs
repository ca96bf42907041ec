//! Environment bootstrapping.
//!
//! Verifies that the project directory is ready for the pose detection app:
//!
//! 1. [`ensure_uploads_directory`] creates the uploads directory if needed
//! 2. [`check_required_files`] finds model files that are absent
//! 3. [`check_dependencies`] probes Python imports through an [`ImportProbe`]
//!
//! [`Bootstrapper`] runs the phases in that order and stops at the first one
//! that fails, returning a [`BootstrapOutcome`]. Missing resources are
//! outcomes, not errors; only unexpected failures (e.g. the uploads
//! directory cannot be created) surface as `Err`.
//!
//! # Example
//!
//! ```
//! use pose_setup::bootstrap::{Bootstrapper, BootstrapOutcome, ImportOutcome, ImportProbe};
//! use pose_setup::config::SetupConfig;
//! use pose_setup::ui::MockUI;
//! use tempfile::TempDir;
//!
//! struct Everything;
//! impl ImportProbe for Everything {
//!     fn probe(&self, _module: &str) -> ImportOutcome {
//!         ImportOutcome::Available
//!     }
//! }
//!
//! let temp = TempDir::new().unwrap();
//! let config = SetupConfig::default();
//! for name in config.required_file_names() {
//!     std::fs::write(temp.path().join(name), "").unwrap();
//! }
//!
//! let mut ui = MockUI::new();
//! let outcome = Bootstrapper::new(temp.path(), &config, &Everything)
//!     .run(&mut ui)
//!     .unwrap();
//! assert_eq!(outcome, BootstrapOutcome::Ready);
//! assert!(temp.path().join("uploads").is_dir());
//! ```

pub mod dependencies;
pub mod download;
pub mod files;
pub mod report;
pub mod runner;
pub mod uploads;

pub use dependencies::{
    check_dependencies, CheckPolicy, DependencyReport, ImportOutcome, ImportProbe,
    MissingDependency, PythonImportProbe,
};
pub use download::ModelDownloader;
pub use files::{check_required_files, MissingFiles};
pub use report::{ReportStatus, SetupReport};
pub use runner::{BootstrapOptions, BootstrapOutcome, Bootstrapper};
pub use uploads::{ensure_uploads_directory, UploadsDir};
