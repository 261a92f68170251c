//! Terminal output for the `eco` CLI.
//!
//! In `--json` mode only [`Output::json`] and errors print; everything else
//! is for people reading a terminal.

use console::{style, StyledObject};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    /// Goes to stderr so piped listings stay clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Always printed; a one-field JSON object in `--json` mode.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// `[num/total] msg`, used for cart script ops and carousel steps.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        self.line(style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("cannot encode output: {}", e)),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        self.line(style("  •").dim(), item);
    }

    /// One row of a fixed-width table.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if !self.json {
            println!("{}", format_row(cols, widths));
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, prefix: StyledObject<impl std::fmt::Display>, msg: &str) {
        if !self.json {
            println!("{} {}", prefix, msg);
        }
    }
}

/// Cells longer than their column are cut with an ellipsis; trailing padding
/// is dropped.
fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = cols
        .iter()
        .zip(widths)
        .map(|(col, &width)| format!("{:width$}", truncate(col, width), width = width))
        .collect();
    format!("  {}", cells.join("  ").trim_end())
}

/// Truncate `text` to `max` characters, appending an ellipsis when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
