//! Non-interactive run: one batch straight from command-line flags.

use super::{Cli, prompts, quiet};
use crate::batch::{BatchReport, BatchRunner};
use crate::breach::PwnedPasswordsClient;
use crate::error::Result;
use crate::pass::Generator;
use crate::pass::output::{self, Destination};

/// Run CLI mode. Honors `--pause` whether or not the batch succeeded.
pub fn run(cli: &Cli) -> Result<()> {
    quiet::set(cli.quiet);
    let result = generate_output(cli);
    if cli.pause {
        prompts::pause();
    }
    result
}

fn generate_output(cli: &Cli) -> Result<()> {
    let request = cli.request();
    tracing::debug!(?request, "batch mode");

    let Some(destination) = resolve_destination(cli.destination()) else {
        return Ok(());
    };

    let checker = if request.check_breach {
        Some(PwnedPasswordsClient::new(&cli.api_url, cli.timeout())?)
    } else {
        None
    };

    let mut runner = BatchRunner::new(Generator::os()).max_attempts(cli.attempt_limit());
    if let Some(checker) = checker.as_ref() {
        runner = runner.with_checker(checker);
    }

    let report = output::deliver(&mut runner, &request, &destination)?;
    report_outcome(&report, &destination);
    Ok(())
}

/// Fall back to the terminal when the clipboard cannot be opened.
/// `None` means the user chose to abort.
fn resolve_destination(destination: Destination) -> Option<Destination> {
    if destination == Destination::Clipboard && !output::clipboard_available() {
        if prompts::clipboard_fallback_prompt() {
            return Some(Destination::Terminal);
        }
        return None;
    }
    Some(destination)
}

fn report_outcome(report: &BatchReport, destination: &Destination) {
    let count = report.accepted;
    match destination {
        Destination::Terminal => {}
        Destination::Clipboard => prompts::clipboard_copied(count),
        Destination::File(path) => {
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.display().to_string());
            prompts::passwords_written(count, &full_path);
        }
    }
    if let Some(line) = report.summary() {
        prompts::summary(&line);
    }
}
