//! Leveled console output
//!
//! Each level has a `format_*` function returning the styled line and a
//! printing counterpart. The optional `step` renders a `[n/2]` progress marker
//! for the two numbered phases of the create flow (scaffold and install).

use colored::Colorize;
use std::fmt::Display;

/// Number of numbered phases shown in progress markers
pub const TOTAL_STEPS: usize = 2;

fn marker(step: Option<usize>) -> String {
    match step {
        Some(n) => format!("[{}/{}]", n, TOTAL_STEPS),
        None => ">>".to_string(),
    }
}

pub fn format_info(message: impl Display, step: Option<usize>) -> String {
    format!("{} {}", marker(step).cyan(), message)
}

pub fn format_success(message: impl Display) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

pub fn format_failure(message: impl Display, step: Option<usize>) -> String {
    let marker = match step {
        Some(_) => marker(step),
        None => "[x]".to_string(),
    };
    format!("{} {}", marker.red(), message.to_string().red())
}

/// Print an informational line
pub fn info(message: impl Display, step: Option<usize>) {
    println!("{}", format_info(message, step));
}

/// Print a success line, preceded by a blank line
pub fn success(message: impl Display) {
    println!();
    println!("{}", format_success(message));
}

/// Print a failure line to stderr
pub fn failure(message: impl Display, step: Option<usize>) {
    eprintln!("{}", format_failure(message, step));
}
