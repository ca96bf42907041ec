//! Visual theme and styling.

use console::Style;

/// Width of the rule printed under headers.
pub const RULE_WIDTH: usize = 50;

/// Styles for each kind of report line.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub header: Style,
    /// The rule under the header.
    pub rule: Style,
    pub hint: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Colored theme for terminals.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            rule: Style::new().dim(),
            hint: Style::new().cyan(),
        }
    }

    /// Theme without escape codes (non-TTY, `--no-color`, `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            rule: Style::new(),
            hint: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠️  {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Title plus a rule of `=` on the next line.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{}\n{}",
            self.header.apply_to(title),
            self.rule.apply_to("=".repeat(RULE_WIDTH))
        )
    }

    pub fn format_hint(&self, hint: &str) -> String {
        self.hint.apply_to(hint).to_string()
    }
}

/// Colors are on for a TTY unless `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_carry_icons() {
        let theme = SetupTheme::plain();
        assert_eq!(
            theme.format_success("All required model files found"),
            "✓ All required model files found"
        );
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert!(theme
            .format_warning("Missing model files: a.pt")
            .starts_with("⚠️"));
        assert_eq!(theme.format_hint("python app.py"), "python app.py");
    }

    #[test]
    fn header_is_followed_by_rule() {
        let theme = SetupTheme::plain();
        let msg = theme.format_header("🎾 App - Setup");
        let lines: Vec<_> = msg.lines().collect();
        let rule = "=".repeat(RULE_WIDTH);
        assert_eq!(lines, ["🎾 App - Setup", rule.as_str()]);
    }
}
