//! Program execution with captured output.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Last non-empty line of stderr, trimmed.
    ///
    /// Python prints the exception summary last, so for a failed import this
    /// is e.g. `ModuleNotFoundError: No module named 'cv2'`.
    pub fn last_stderr_line(&self) -> Option<&str> {
        self.stderr
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Execute a program directly (no shell) and capture its output.
///
/// Returns `Err` only when the process cannot be spawned. A non-zero exit
/// is reported through [`CommandResult::success`].
pub fn execute_program(
    program: &Path,
    args: &[&str],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!("Executing {} {:?}", program.display(), args);
    let output = cmd.output()?;

    let result = CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    };

    tracing::debug!(
        "{} exited with {:?} in {:?}",
        program.display(),
        result.exit_code,
        result.duration
    );

    Ok(result)
}
