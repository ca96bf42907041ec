//! Line-oriented UI for CI logs and pipes.

use super::theme::SetupTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// Prints plain lines without color or animation. The report goes to
/// stdout; only fatal errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: SetupTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: SetupTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn failure(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_error(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            println!("{}", self.theme.format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("{}", hint);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }
}

/// Prints the start line up front and the final line on finish.
struct LineSpinner {
    mode: OutputMode,
    theme: SetupTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_error(msg));
        }
    }

    fn finish_clear(&mut self) {}
}
