use colored::Colorize;

use crate::report::Style;

/// Terminal style. `colored` honors `NO_COLOR`.
pub struct Colored;

impl Style for Colored {
    fn error(&self, text: &str) -> String {
        text.red().bold().to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.yellow().bold().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}
