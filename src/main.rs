//! pose-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pose_setup::cli::{Cli, CommandDispatcher};
use pose_setup::shell::is_ci;
use pose_setup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--verbose` flag sets level to INFO
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN, so normal runs show only the setup report
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("pose_setup=debug")
    } else if verbose {
        EnvFilter::new("pose_setup=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pose_setup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    tracing::debug!("pose-setup starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = match cli.project.clone() {
        Some(path) => path,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("✗ Cannot determine current directory: {}", e);
                return ExitCode::from(2);
            }
        },
    };

    let mut ui = create_ui(!is_ci(), output_mode);

    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(2)
        }
    }
}
