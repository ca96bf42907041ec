//! Phase orchestration.

use std::path::{Path, PathBuf};

use crate::config::SetupConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dependencies::{check_dependencies, CheckPolicy, ImportProbe, MissingDependency};
use super::download::ModelDownloader;
use super::files::{check_required_files, MissingFiles};
use super::uploads::ensure_uploads_directory;

/// How a bootstrap run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Every phase passed.
    Ready,
    /// Required model files are absent; dependencies were not checked.
    MissingModelFiles(Vec<String>),
    /// Python modules failed to import.
    MissingDependencies(Vec<MissingDependency>),
}

impl BootstrapOutcome {
    /// Whether the environment is ready.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_ready() {
            0
        } else {
            1
        }
    }
}

/// Knobs for a run. The defaults reproduce the plain check.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapOptions {
    /// Fetch absent model files that have a configured URL first.
    pub download: bool,
    /// Whether to stop at the first missing module.
    pub policy: CheckPolicy,
}

/// Runs the setup phases against one project directory.
pub struct Bootstrapper<'a> {
    project_root: PathBuf,
    config: &'a SetupConfig,
    probe: &'a dyn ImportProbe,
    options: BootstrapOptions,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper with default options.
    pub fn new(project_root: &Path, config: &'a SetupConfig, probe: &'a dyn ImportProbe) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            probe,
            options: BootstrapOptions::default(),
        }
    }

    /// Replace the run options.
    pub fn with_options(mut self, options: BootstrapOptions) -> Self {
        self.options = options;
        self
    }

    /// Run every phase in order, stopping at the first failing one.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BootstrapOutcome> {
        ui.show_header(&format!("🎾 {} - Setup", self.config.app_name));

        let uploads = ensure_uploads_directory(&self.project_root, &self.config.uploads_dir)?;
        let uploads_name = self.config.uploads_dir.display();
        if uploads.created {
            ui.success(&format!("Created {} directory", uploads_name));
        } else {
            ui.success(&format!("Found {} directory", uploads_name));
        }

        if self.options.download {
            self.download_missing(ui)?;
        }

        let required = self.config.required_file_names();
        let missing = check_required_files(&self.project_root, required.as_slice());
        if !missing.is_empty() {
            tracing::info!("{} model file(s) missing", missing.len());
            self.report_missing_files(ui, &missing);
            return Ok(BootstrapOutcome::MissingModelFiles(missing.into_names()));
        }
        ui.success("All required model files found");

        ui.message("");
        let mut spinner = ui.start_spinner("Checking Python dependencies...");
        let report = check_dependencies(
            self.probe,
            self.config.python.modules.as_slice(),
            self.options.policy,
        );

        if !report.is_satisfied() {
            spinner.finish_clear();
            for dep in &report.missing {
                ui.failure(&format!("Missing Python package: {}", dep.message));
            }
            ui.show_hint(&format!(
                "Please install dependencies with: {}",
                self.config.python.install_hint
            ));
            return Ok(BootstrapOutcome::MissingDependencies(report.missing));
        }
        spinner.finish_success("All required Python packages are available");

        ui.message("");
        ui.message("🎉 Setup complete! You can now run the application with:");
        ui.show_hint(&self.config.launch_command);

        Ok(BootstrapOutcome::Ready)
    }

    /// Download absent files that have a URL. Failures are reported, not fatal.
    fn download_missing(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let pending: Vec<_> = self
            .config
            .model_files
            .iter()
            .filter(|f| !self.project_root.join(&f.name).exists())
            .filter_map(|f| f.url.as_deref().map(|url| (f.name.as_str(), url)))
            .collect();

        if pending.is_empty() {
            tracing::debug!("Nothing to download");
            return Ok(());
        }

        let downloader = ModelDownloader::new()?;
        for (name, url) in pending {
            let mut spinner = ui.start_spinner(&format!("Downloading {}...", name));
            match downloader.download(url, &self.project_root.join(name)) {
                Ok(_) => spinner.finish_success(&format!("Downloaded {}", name)),
                Err(e) => {
                    tracing::warn!("{}", e);
                    spinner.finish_error(&e.to_string());
                }
            }
        }

        Ok(())
    }

    fn report_missing_files(&self, ui: &mut dyn UserInterface, missing: &MissingFiles) {
        ui.message("");
        ui.warning(&format!("Missing model files: {}", missing.joined()));

        ui.message("");
        ui.message("Please download the required model files:");
        for (i, file) in self.config.model_files.iter().enumerate() {
            if file.description.is_empty() {
                ui.message(&format!("{}. {}", i + 1, file.name));
            } else {
                ui.message(&format!("{}. {} - {}", i + 1, file.name, file.description));
            }
        }

        if !self.config.download_sources.is_empty() {
            ui.message("");
            ui.message("You can download these files from:");
            for source in &self.config.download_sources {
                ui.message(&format!("- {}", source));
            }
        }

        ui.message("");
        ui.show_hint("Place them in the project directory and run this script again.");
    }
}
