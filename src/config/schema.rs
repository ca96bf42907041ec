//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `pose-setup.yml` file format. Every field has a default, so an empty
//! file (or no file at all) yields the stock tennis pose detection setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for pose-setup.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Directory that receives user uploads, relative to the project root
    pub uploads_dir: PathBuf,

    /// Model artifacts that must exist before the app can start, in report order
    pub model_files: Vec<ModelFile>,

    /// Python interpreter and required modules
    pub python: PythonSettings,

    /// Where to get model files, shown when some are missing
    pub download_sources: Vec<String>,

    /// Command that starts the application once setup succeeds
    pub launch_command: String,
}

/// A required model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    /// File name, relative to the project root
    pub name: String,

    /// What the file is, for the missing-file guidance
    #[serde(default)]
    pub description: String,

    /// Download source used by `check --download`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Python environment settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonSettings {
    /// Interpreter used to probe imports (name on PATH or a path)
    pub interpreter: String,

    /// Import names checked in order
    pub modules: Vec<String>,

    /// Install instruction shown when a module is missing
    pub install_hint: String,
}

impl ModelFile {
    /// Create a model file entry without a download source.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            url: None,
        }
    }

    /// Attach a download URL.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            app_name: "Tennis Pose Detection AI".to_string(),
            uploads_dir: PathBuf::from("uploads"),
            model_files: vec![
                ModelFile::new(
                    "pose_classifier_new.pkl",
                    "Your trained Random Forest classifier",
                ),
                ModelFile::new("yolov8m.pt", "YOLOv8 model for person detection"),
                ModelFile::new("yolov8m-pose.pt", "YOLOv8-pose model for pose estimation"),
            ],
            python: PythonSettings::default(),
            download_sources: vec![
                "Your local training environment".to_string(),
                "YOLO model repository".to_string(),
            ],
            launch_command: "python app.py".to_string(),
        }
    }
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            modules: ["flask", "ultralytics", "numpy", "cv2", "pickle", "sklearn"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
            install_hint: "pip install -r requirements.txt".to_string(),
        }
    }
}

impl SetupConfig {
    /// Names of all required model files, in configured order.
    pub fn required_file_names(&self) -> Vec<String> {
        self.model_files.iter().map(|f| f.name.clone()).collect()
    }
}
