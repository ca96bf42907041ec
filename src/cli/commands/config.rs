//! Config command implementation.
//!
//! The `pose-setup config` command shows the resolved configuration,
//! defaults included.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, SetupConfig, CONFIG_FILE_NAME};
use crate::error::{Result, SetupError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    /// The file the configuration came from, if any.
    fn source(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(self.project_root.join(path)),
            None => {
                let default = self.project_root.join(CONFIG_FILE_NAME);
                default.exists().then_some(default)
            }
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(SetupError::ConfigNotFound { path }) => {
                ui.error(&format!("Config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            // Machine output bypasses the UI so `--quiet` cannot swallow it
            println!("{}", config_json(&config)?);
        } else {
            match self.source() {
                Some(path) => ui.message(&format!("# {}", path.display())),
                None => ui.message("# built-in defaults"),
            }
            let yaml = serde_yaml::to_string(&config).map_err(|e| SetupError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}

fn config_json(config: &SetupConfig) -> Result<String> {
    serde_json::to_string_pretty(config).map_err(|e| SetupError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("# built-in defaults"));
        assert!(ui.has_message("yolov8m-pose.pt"));
        assert!(ui.has_message("pip install -r requirements.txt"));
    }

    #[test]
    fn shows_source_path_when_file_exists() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "app_name: Rally").unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message(CONFIG_FILE_NAME));
        assert!(ui.has_message("app_name: Rally"));
    }

    #[test]
    fn json_output_parses() {
        let value: serde_json::Value =
            serde_json::from_str(&config_json(&SetupConfig::default()).unwrap()).unwrap();
        assert_eq!(value["python"]["interpreter"], "python3");
        assert_eq!(value["model_files"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn json_output_bypasses_ui() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(cmd.args().json);
        assert!(ui.lines().is_empty());
    }

    #[test]
    fn missing_explicit_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), Some(Path::new("other.yml")), ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
