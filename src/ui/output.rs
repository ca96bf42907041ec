//! Output verbosity mode.

/// How much of the report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The full report.
    #[default]
    Normal,
    /// Status lines, hints and progress only.
    Quiet,
    /// Nothing but fatal errors (used under `--json`).
    Silent,
}

impl OutputMode {
    /// Progress lines ("Downloading ...") and spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Headers, guidance and blank separators.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Success, warning and failure lines plus hints.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
