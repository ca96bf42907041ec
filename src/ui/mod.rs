//! Console user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use pose_setup::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Silent);
//! ui.show_header("🎾 Tennis Pose Detection - Setup");
//! ui.success("All required model files found");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{Line, LineKind, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

/// Where the bootstrapper sends its report lines.
///
/// Everything except [`UserInterface::error`] belongs to the report and goes
/// to stdout, so piped output keeps the phase order.
pub trait UserInterface {
    /// Plain report line.
    fn message(&mut self, msg: &str);

    /// A phase that passed.
    fn success(&mut self, msg: &str);

    /// Something absent that the user has to provide.
    fn warning(&mut self, msg: &str);

    /// A check that failed, e.g. a module that would not import.
    fn failure(&mut self, msg: &str);

    /// A fatal error. Always shown, on stderr.
    fn error(&mut self, msg: &str);

    /// Banner with a rule underneath.
    fn show_header(&mut self, title: &str);

    /// A command for the user to run next.
    fn show_hint(&mut self, hint: &str);

    /// Start a progress indicator for a slow step.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle to a running progress indicator.
pub trait SpinnerHandle {
    /// Replace the indicator with a success line.
    fn finish_success(&mut self, msg: &str);

    /// Replace the indicator with a failure line.
    fn finish_error(&mut self, msg: &str);

    /// Remove the indicator without a final line.
    fn finish_clear(&mut self);
}
