//! Centralized warning and status messages.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print the discarded-candidates summary - suppressed in quiet mode
pub fn summary(line: &str) {
    if !quiet::enabled() {
        println!("{line}");
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

/// Wait for Enter. Returns immediately when stdin is closed.
pub fn pause() {
    print!("Press Enter to exit...");
    let _ = std::io::stdout().flush();
    let mut input = String::new();
    let _ = std::io::stdin().read_line(&mut input);
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Falls back silently in quiet or non-interactive mode.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
