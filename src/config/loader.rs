//! Configuration file discovery, loading, and validation.

use crate::config::schema::SetupConfig;
use crate::error::{Result, SetupError};
use std::fs;
use std::path::Path;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "pose-setup.yml";

/// Load and validate configuration for a project.
///
/// If `config_override` is provided, that file must exist. Relative override
/// paths are resolved against `project_root`. Otherwise `pose-setup.yml` in
/// the project root is used when present, and the built-in defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<SetupConfig> {
    let config = match config_override {
        Some(path) => load_config_file(&project_root.join(path))?,
        None => {
            let path = project_root.join(CONFIG_FILE_NAME);
            if path.exists() {
                load_config_file(&path)?
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                SetupConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into SetupConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| SetupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

impl SetupConfig {
    /// Check values that the phases rely on.
    ///
    /// Module names end up in `python -c "import <name>"`, so only dotted
    /// identifiers are accepted.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = self.model_files.iter().find(|f| f.name.trim().is_empty()) {
            return Err(SetupError::ConfigValidationError {
                message: format!("model file with empty name ({:?})", file.description),
            });
        }

        if self.python.interpreter.trim().is_empty() {
            return Err(SetupError::ConfigValidationError {
                message: "python.interpreter must not be empty".to_string(),
            });
        }

        if let Some(bad) = self
            .python
            .modules
            .iter()
            .find(|m| !is_module_name(m))
        {
            return Err(SetupError::ConfigValidationError {
                message: format!("'{}' is not a valid Python module name", bad),
            });
        }

        Ok(())
    }
}

/// A dotted Python identifier such as `sklearn` or `os.path`.
fn is_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        })
}
