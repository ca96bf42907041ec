//! Python dependency checks.
//!
//! Importability is decided by an [`ImportProbe`]. The production probe,
//! [`PythonImportProbe`], asks the configured interpreter to run
//! `import <module>`; tests substitute their own probes.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::shell::{execute_program, parse_system_path, resolve_program, CommandOptions};

/// Result of probing a single module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The module imported cleanly.
    Available,
    /// The import failed; `message` identifies why.
    Missing { message: String },
}

/// Decides whether a module can be imported.
pub trait ImportProbe {
    /// Attempt to import `module`.
    fn probe(&self, module: &str) -> ImportOutcome;
}

/// How far to go once a module is found missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckPolicy {
    /// Stop at the first missing module.
    #[default]
    FirstMissing,
    /// Probe every module and report all that are missing.
    AllMissing,
}

/// A module that failed to import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDependency {
    /// Import name, e.g. `cv2`.
    pub module: String,
    /// Identifying message, e.g. `No module named 'cv2'`.
    pub message: String,
}

/// Outcome of checking a set of modules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    /// Modules that were probed, in order.
    pub checked: Vec<String>,
    /// Modules that failed, in order.
    pub missing: Vec<MissingDependency>,
}

impl DependencyReport {
    /// Whether every probed module imported.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }

    /// The first module that failed, if any.
    pub fn first_missing(&self) -> Option<&MissingDependency> {
        self.missing.first()
    }
}

/// Probe `modules` in order according to `policy`.
pub fn check_dependencies<S: AsRef<str>>(
    probe: &dyn ImportProbe,
    modules: &[S],
    policy: CheckPolicy,
) -> DependencyReport {
    let mut report = DependencyReport::default();

    for module in modules.iter().map(AsRef::as_ref) {
        report.checked.push(module.to_string());

        match probe.probe(module) {
            ImportOutcome::Available => {
                tracing::debug!("import {} ok", module);
            }
            ImportOutcome::Missing { message } => {
                tracing::debug!("import {} failed: {}", module, message);
                report.missing.push(MissingDependency {
                    module: module.to_string(),
                    message,
                });
                if policy == CheckPolicy::FirstMissing {
                    break;
                }
            }
        }
    }

    report
}

/// Probes imports by running the Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonImportProbe {
    interpreter: String,
    resolved: Option<PathBuf>,
    project_root: PathBuf,
}

impl PythonImportProbe {
    /// Resolve `interpreter` against PATH (or `project_root` for paths).
    pub fn new(interpreter: &str, project_root: &Path) -> Self {
        Self::with_path_entries(interpreter, project_root, &parse_system_path())
    }

    /// Resolve `interpreter` against explicit PATH entries.
    pub fn with_path_entries(interpreter: &str, project_root: &Path, path: &[PathBuf]) -> Self {
        let resolved = resolve_program(interpreter, project_root, path);
        match &resolved {
            Some(p) => tracing::info!("Using Python interpreter {}", p.display()),
            None => tracing::debug!("Python interpreter '{}' not found", interpreter),
        }

        Self {
            interpreter: interpreter.to_string(),
            resolved,
            project_root: project_root.to_path_buf(),
        }
    }

    /// The resolved interpreter binary, if found.
    pub fn interpreter_path(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }
}

impl ImportProbe for PythonImportProbe {
    fn probe(&self, module: &str) -> ImportOutcome {
        let Some(interpreter) = &self.resolved else {
            return ImportOutcome::Missing {
                message: format!("Python interpreter '{}' not found", self.interpreter),
            };
        };

        let statement = format!("import {}", module);
        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..Default::default()
        };

        match execute_program(interpreter, &["-c", statement.as_str()], &options) {
            Ok(result) if result.success => ImportOutcome::Available,
            Ok(result) => ImportOutcome::Missing {
                message: result
                    .last_stderr_line()
                    .map(strip_exception_name)
                    .unwrap_or_else(|| format!("No module named '{}'", module)),
            },
            Err(e) => ImportOutcome::Missing {
                message: format!("could not run {}: {}", self.interpreter, e),
            },
        }
    }
}

/// Drop a leading `SomeError: ` from a traceback summary line.
fn strip_exception_name(line: &str) -> String {
    if let Some((name, rest)) = line.split_once(": ") {
        let is_exception = (name.ends_with("Error") || name.ends_with("Exception"))
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if is_exception && !rest.is_empty() {
            return rest.to_string();
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Probe that fails for a fixed set of modules and records calls.
    struct FakeProbe {
        missing: HashSet<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        fn missing(modules: &[&'static str]) -> Self {
            Self {
                missing: modules.iter().copied().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImportProbe for FakeProbe {
        fn probe(&self, module: &str) -> ImportOutcome {
            self.calls.borrow_mut().push(module.to_string());
            if self.missing.contains(module) {
                ImportOutcome::Missing {
                    message: format!("No module named '{}'", module),
                }
            } else {
                ImportOutcome::Available
            }
        }
    }

    const MODULES: [&str; 6] = ["flask", "ultralytics", "numpy", "cv2", "pickle", "sklearn"];

    #[test]
    fn all_available_is_satisfied() {
        let probe = FakeProbe::missing(&[]);
        let report = check_dependencies(&probe, &MODULES, CheckPolicy::FirstMissing);

        assert!(report.is_satisfied());
        assert_eq!(report.checked, MODULES);
        assert_eq!(*probe.calls.borrow(), MODULES);
    }

    #[test]
    fn first_missing_short_circuits() {
        let probe = FakeProbe::missing(&["numpy", "sklearn"]);
        let report = check_dependencies(&probe, &MODULES, CheckPolicy::FirstMissing);

        assert!(!report.is_satisfied());
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.first_missing().unwrap().module, "numpy");
        assert_eq!(*probe.calls.borrow(), ["flask", "ultralytics", "numpy"]);
    }

    #[test]
    fn all_missing_probes_everything() {
        let probe = FakeProbe::missing(&["numpy", "sklearn"]);
        let report = check_dependencies(&probe, &MODULES, CheckPolicy::AllMissing);

        let names: Vec<_> = report.missing.iter().map(|m| m.module.as_str()).collect();
        assert_eq!(names, ["numpy", "sklearn"]);
        assert_eq!(probe.calls.borrow().len(), MODULES.len());
    }

    #[test]
    fn missing_message_comes_from_probe() {
        let probe = FakeProbe::missing(&["cv2"]);
        let report = check_dependencies(&probe, &["cv2"], CheckPolicy::FirstMissing);

        assert_eq!(
            report.missing,
            vec![MissingDependency {
                module: "cv2".to_string(),
                message: "No module named 'cv2'".to_string(),
            }]
        );
    }

    #[test]
    fn empty_module_list_is_satisfied() {
        let probe = FakeProbe::missing(&[]);
        let modules: [&str; 0] = [];
        let report = check_dependencies(&probe, &modules, CheckPolicy::FirstMissing);
        assert!(report.is_satisfied());
        assert!(probe.calls.borrow().is_empty());
    }

    #[test]
    fn strips_exception_prefix() {
        assert_eq!(
            strip_exception_name("ModuleNotFoundError: No module named 'cv2'"),
            "No module named 'cv2'"
        );
        assert_eq!(
            strip_exception_name("ImportError: libGL.so.1: cannot open shared object file"),
            "libGL.so.1: cannot open shared object file"
        );
        assert_eq!(strip_exception_name("Segmentation fault"), "Segmentation fault");
        assert_eq!(strip_exception_name("note: something"), "note: something");
    }

    #[test]
    fn unresolved_interpreter_reports_every_module_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let probe = PythonImportProbe::with_path_entries(
            "python-does-not-exist",
            temp.path(),
            &[temp.path().to_path_buf()],
        );

        assert!(probe.interpreter_path().is_none());
        match probe.probe("flask") {
            ImportOutcome::Missing { message } => {
                assert!(message.contains("python-does-not-exist"));
            }
            other => panic!("Expected Missing, got {:?}", other),
        }
    }

    #[cfg(unix)]
    fn fake_interpreter(dir: &Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fakepython");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn interpreter_exit_status_decides_outcome() {
        let temp = tempfile::TempDir::new().unwrap();
        // "$2" is the import statement passed after -c
        fake_interpreter(
            temp.path(),
            "#!/bin/sh\ncase \"$2\" in\n  \"import cv2\")\n    echo 'Traceback (most recent call last):' >&2\n    echo \"ModuleNotFoundError: No module named 'cv2'\" >&2\n    exit 1;;\nesac\nexit 0\n",
        );
        let probe = PythonImportProbe::with_path_entries(
            "fakepython",
            temp.path(),
            &[temp.path().to_path_buf()],
        );

        assert_eq!(probe.probe("numpy"), ImportOutcome::Available);
        assert_eq!(
            probe.probe("cv2"),
            ImportOutcome::Missing {
                message: "No module named 'cv2'".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn silent_failure_falls_back_to_module_name() {
        let temp = tempfile::TempDir::new().unwrap();
        fake_interpreter(temp.path(), "#!/bin/sh\nexit 1\n");
        let probe = PythonImportProbe::with_path_entries(
            "fakepython",
            temp.path(),
            &[temp.path().to_path_buf()],
        );

        assert_eq!(
            probe.probe("sklearn"),
            ImportOutcome::Missing {
                message: "No module named 'sklearn'".to_string()
            }
        );
    }
}
