//! Output management and formatting.

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) {
        if self.quiet {
            return;
        }
        println!("{msg}");
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            println!("\u{2713} {msg}"); // ✓
        } else {
            println!("{} {}", "\u{2713}".green().bold(), msg.green());
        }
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            println!("\u{2139} {msg}"); // ℹ
        } else {
            println!("{} {}", "\u{2139}".blue().bold(), msg.blue());
        }
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) {
        if self.quiet {
            return;
        }
        if self.no_color {
            println!("{text}");
        } else {
            println!("{}", text.cyan().bold());
        }
    }
}
