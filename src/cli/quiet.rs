//! Global quiet mode state.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::is_interactive;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppress warnings and summaries)
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when prompts should be skipped: quiet mode or stdin is not a tty.
pub fn skip_prompt() -> bool {
    enabled() || !is_interactive()
}
