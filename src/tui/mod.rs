//! Interactive mode.

mod input;
mod session;

pub use input::{Console, LineSource};
pub use session::*;

use crate::cli::{Cli, prompts};
use crate::error::Result;
use crate::settings::Settings;

/// Run interactive mode on the terminal with the settings file under `$HOME`.
pub fn run(cli: &Cli) -> Result<()> {
    let result = run_session(&mut Console, cli, &Settings::default_path());
    prompts::pause();
    result
}
