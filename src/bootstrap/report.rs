//! Machine-readable setup report.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::dependencies::MissingDependency;
use super::runner::BootstrapOutcome;

/// Overall status in the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    MissingModelFiles,
    MissingDependencies,
}

/// Serializable summary of one run, printed by `check --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupReport {
    pub status: ReportStatus,
    pub uploads_dir: PathBuf,
    pub missing_files: Vec<String>,
    pub missing_dependencies: Vec<MissingDependency>,
}

impl SetupReport {
    /// Build a report from a finished run.
    pub fn from_outcome(uploads_dir: &Path, outcome: &BootstrapOutcome) -> Self {
        let (status, missing_files, missing_dependencies) = match outcome {
            BootstrapOutcome::Ready => (ReportStatus::Ready, Vec::new(), Vec::new()),
            BootstrapOutcome::MissingModelFiles(files) => {
                (ReportStatus::MissingModelFiles, files.clone(), Vec::new())
            }
            BootstrapOutcome::MissingDependencies(deps) => {
                (ReportStatus::MissingDependencies, Vec::new(), deps.clone())
            }
        };

        Self {
            status,
            uploads_dir: uploads_dir.to_path_buf(),
            missing_files,
            missing_dependencies,
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
