//! Integration tests for the public bootstrap API.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use pose_setup::bootstrap::{
    ensure_uploads_directory, BootstrapOutcome, Bootstrapper, ImportOutcome, ImportProbe,
    SetupReport,
};
use pose_setup::config::{load_config, SetupConfig};
use pose_setup::ui::{LineKind, MockUI};
use tempfile::TempDir;

/// Probe that fails on one module and counts calls.
struct CountingProbe {
    broken: Option<&'static str>,
    calls: Cell<usize>,
}

impl CountingProbe {
    fn new(broken: Option<&'static str>) -> Self {
        Self {
            broken,
            calls: Cell::new(0),
        }
    }
}

impl ImportProbe for CountingProbe {
    fn probe(&self, module: &str) -> ImportOutcome {
        self.calls.set(self.calls.get() + 1);
        if self.broken == Some(module) {
            ImportOutcome::Missing {
                message: format!("No module named '{}'", module),
            }
        } else {
            ImportOutcome::Available
        }
    }
}

fn write_models(root: &Path, config: &SetupConfig) {
    for name in config.required_file_names() {
        fs::write(root.join(name), "model").unwrap();
    }
}

#[test]
fn ready_if_and_only_if_files_and_dependencies_pass() {
    let config = SetupConfig::default();

    for (files_present, broken) in [
        (true, None),
        (true, Some("cv2")),
        (false, None),
        (false, Some("flask")),
    ] {
        let temp = TempDir::new().unwrap();
        if files_present {
            write_models(temp.path(), &config);
        }
        let probe = CountingProbe::new(broken);
        let mut ui = MockUI::new();

        let outcome = Bootstrapper::new(temp.path(), &config, &probe)
            .run(&mut ui)
            .unwrap();

        let expect_ready = files_present && broken.is_none();
        assert_eq!(outcome.is_ready(), expect_ready, "{:?}", (files_present, broken));
        if !files_present {
            assert_eq!(probe.calls.get(), 0);
        }
    }
}

#[test]
fn ensure_uploads_twice_leaves_one_directory() {
    let temp = TempDir::new().unwrap();

    ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();
    ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["uploads".to_string()]);
}

#[test]
fn custom_config_drives_every_phase() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pose-setup.yml"),
        r#"
app_name: Serve Coach
uploads_dir: media/uploads
model_files:
  - name: coach.onnx
    description: Stroke classifier
python:
  modules: [onnxruntime]
  install_hint: uv sync
launch_command: uv run app.py
"#,
    )
    .unwrap();
    let config = load_config(temp.path(), None).unwrap();
    fs::write(temp.path().join("coach.onnx"), "model").unwrap();

    let probe = CountingProbe::new(Some("onnxruntime"));
    let mut ui = MockUI::new();
    let outcome = Bootstrapper::new(temp.path(), &config, &probe)
        .run(&mut ui)
        .unwrap();

    assert!(temp.path().join("media/uploads").is_dir());
    assert_eq!(ui.texts(LineKind::Header), ["🎾 Serve Coach - Setup"]);
    assert!(ui.has_hint("uv sync"));
    assert!(matches!(outcome, BootstrapOutcome::MissingDependencies(_)));

    let report = SetupReport::from_outcome(&config.uploads_dir, &outcome);
    assert_eq!(report.missing_dependencies[0].module, "onnxruntime");
}
