use std::env;
use std::process::ExitCode;

use clap::Parser;

use stronkpass::cli::{self, Cli, prompts};
use stronkpass::{logger, tui};

mod exits;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    // No arguments at all selects the interactive prompts.
    let interactive = env::args_os().len() == 1;
    let args = Cli::parse();
    logger::init(args.verbose);

    let result = if interactive {
        tui::run(&args)
    } else {
        cli::run(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(config = e.is_config(), "exiting with error");
            prompts::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
