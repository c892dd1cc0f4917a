//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";

    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold label followed by a plain value, e.g. `Input: sets.csv`
pub fn label_value(label: &str, value: &str) -> String {
    format!(
        "{}: {}",
        colorize(label, &format!("{}{}", Colors::BOLD, Colors::BRIGHT_CYAN)),
        colorize(value, Colors::BRIGHT_WHITE)
    )
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Redirected output gets plain text
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => env::var("TERM_PROGRAM").is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_plain_under_test() {
        // Formatting is disabled under cfg(test) unless FORCE_COLOR is set
        if std::env::var("FORCE_COLOR").is_err() {
            assert_eq!(colorize("Saved", Colors::GREEN), "Saved");
        }
    }

    #[test]
    fn test_label_value_contains_both_parts() {
        let line = label_value("Input", "sets.csv");
        assert!(line.contains("Input"));
        assert!(line.contains("sets.csv"));
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Colors::RESET, "\x1b[0m");
        assert_eq!(Colors::GREEN, "\x1b[32m");
        assert!(Colors::BOLD.starts_with("\x1b["));
    }
}
