//! Check command implementation.
//!
//! The `pose-setup check` command (also the default) provisions the uploads
//! directory and verifies model files and Python packages.

use std::path::{Path, PathBuf};

use crate::bootstrap::{
    BootstrapOptions, Bootstrapper, CheckPolicy, PythonImportProbe, SetupReport,
};
use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::{Result, SetupError};
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn options(&self) -> BootstrapOptions {
        BootstrapOptions {
            download: self.args.download,
            policy: if self.args.all_missing {
                CheckPolicy::AllMissing
            } else {
                CheckPolicy::FirstMissing
            },
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(SetupError::ConfigNotFound { path }) => {
                ui.error(&format!("Config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let probe = PythonImportProbe::new(&config.python.interpreter, &self.project_root);
        let bootstrapper =
            Bootstrapper::new(&self.project_root, &config, &probe).with_options(self.options());

        let outcome = if self.args.json {
            // Human lines are suppressed; errors still reach stderr
            let mut quiet_ui = NonInteractiveUI::new(OutputMode::Silent);
            let outcome = bootstrapper.run(&mut quiet_ui)?;
            let report = SetupReport::from_outcome(&config.uploads_dir, &outcome);
            let json = report.to_json().map_err(|e| SetupError::Other(e.into()))?;
            println!("{}", json);
            outcome
        } else {
            bootstrapper.run(ui)?
        };

        tracing::debug!("Check finished: {:?}", outcome);

        if outcome.is_ready() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}
