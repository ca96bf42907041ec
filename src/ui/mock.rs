//! Recording UI for tests.
//!
//! `MockUI` keeps every line in emission order, including the start and
//! finish lines of spinners, so tests can assert on both content and order.
//!
//! ```
//! use pose_setup::ui::{LineKind, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking Python dependencies...");
//! ui.success("All required Python packages are available");
//!
//! assert!(ui.has_message("Checking Python"));
//! assert_eq!(ui.count(LineKind::Success), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{SpinnerHandle, UserInterface};

/// What produced a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Message,
    Success,
    Warning,
    Failure,
    Error,
    Hint,
    /// A spinner was started with this text.
    Spinner,
}

/// One recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

type Log = Rc<RefCell<Vec<Line>>>;

fn record(log: &Log, kind: LineKind, text: &str) {
    log.borrow_mut().push(Line {
        kind,
        text: text.to_string(),
    });
}

/// UI that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    log: Log,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line so far, in order.
    pub fn lines(&self) -> Vec<Line> {
        self.log.borrow().clone()
    }

    /// Texts of the lines of one kind, in order.
    pub fn texts(&self, kind: LineKind) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.text.clone())
            .collect()
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.log.borrow().iter().filter(|line| line.kind == kind).count()
    }

    /// Whether a line of `kind` contains `needle`.
    pub fn has(&self, kind: LineKind, needle: &str) -> bool {
        self.log
            .borrow()
            .iter()
            .any(|line| line.kind == kind && line.text.contains(needle))
    }

    /// Index of the first line (any kind) containing `needle`.
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.log
            .borrow()
            .iter()
            .position(|line| line.text.contains(needle))
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.has(LineKind::Message, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.has(LineKind::Success, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.has(LineKind::Warning, needle)
    }

    pub fn has_failure(&self, needle: &str) -> bool {
        self.has(LineKind::Failure, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.has(LineKind::Error, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.has(LineKind::Hint, needle)
    }

    pub fn has_spinner(&self, needle: &str) -> bool {
        self.has(LineKind::Spinner, needle)
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        record(&self.log, LineKind::Message, msg);
    }

    fn success(&mut self, msg: &str) {
        record(&self.log, LineKind::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        record(&self.log, LineKind::Warning, msg);
    }

    fn failure(&mut self, msg: &str) {
        record(&self.log, LineKind::Failure, msg);
    }

    fn error(&mut self, msg: &str) {
        record(&self.log, LineKind::Error, msg);
    }

    fn show_header(&mut self, title: &str) {
        record(&self.log, LineKind::Header, title);
    }

    fn show_hint(&mut self, hint: &str) {
        record(&self.log, LineKind::Hint, hint);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        record(&self.log, LineKind::Spinner, message);
        Box::new(MockSpinner {
            log: Rc::clone(&self.log),
        })
    }
}

/// Spinner whose final line lands in the owning [`MockUI`]'s log.
struct MockSpinner {
    log: Log,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        record(&self.log, LineKind::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        record(&self.log, LineKind::Failure, msg);
    }

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_emission_order() {
        let mut ui = MockUI::new();

        ui.show_header("Setup");
        ui.success("Created uploads directory");
        ui.message("");
        ui.show_hint("python app.py");

        let kinds: Vec<_> = ui.lines().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [
                LineKind::Header,
                LineKind::Success,
                LineKind::Message,
                LineKind::Hint
            ]
        );
        assert_eq!(ui.position("python app.py"), Some(3));
    }

    #[test]
    fn spinner_finish_lines_are_recorded() {
        let mut ui = MockUI::new();

        let mut ok = ui.start_spinner("Downloading a.pt...");
        ok.finish_success("Downloaded a.pt");
        let mut failed = ui.start_spinner("Downloading b.pt...");
        failed.finish_error("Failed to download b.pt: HTTP 500");
        let mut cleared = ui.start_spinner("Importing");
        cleared.finish_clear();

        assert_eq!(
            ui.texts(LineKind::Spinner),
            ["Downloading a.pt...", "Downloading b.pt...", "Importing"]
        );
        assert!(ui.has_success("Downloaded a.pt"));
        assert_eq!(
            ui.texts(LineKind::Failure),
            ["Failed to download b.pt: HTTP 500"]
        );
        assert_eq!(ui.lines().len(), 5);
    }

    #[test]
    fn has_matches_kind_and_substring() {
        let mut ui = MockUI::new();
        ui.warning("Missing model files: a.pt");
        ui.failure("Missing Python package: No module named 'cv2'");
        ui.error("Error: Not a directory: uploads");

        assert!(ui.has_warning("a.pt"));
        assert!(ui.has_failure("cv2"));
        assert!(ui.has_error("Not a directory"));
        assert!(!ui.has_error("cv2"));
        assert!(!ui.has_message("a.pt"));
        assert_eq!(ui.position("numpy"), None);
    }
}
