//! Required model file checks.

use std::path::Path;

/// Required files that were absent at check time, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingFiles(Vec<String>);

impl MissingFiles {
    /// Whether every required file was present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of missing files.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Missing names, in configured order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Consume into the list of names.
    pub fn into_names(self) -> Vec<String> {
        self.0
    }

    /// Comma-separated list for display.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Return the required names that do not exist under `project_root`.
///
/// Any filesystem entry counts as present. Order follows `required`.
pub fn check_required_files<S: AsRef<str>>(project_root: &Path, required: &[S]) -> MissingFiles {
    let missing: Vec<String> = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| {
            let present = project_root.join(name).exists();
            tracing::debug!("Model file {}: {}", name, if present { "found" } else { "missing" });
            !present
        })
        .map(String::from)
        .collect();

    MissingFiles(missing)
}
