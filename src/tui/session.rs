//! Interactive prompt sequence.

use std::ops::RangeInclusive;
use std::path::Path;

use super::input::LineSource;
use crate::batch::BatchRunner;
use crate::breach::PwnedPasswordsClient;
use crate::cli::{Cli, prompts};
use crate::error::Result;
use crate::pass::Generator;
use crate::pass::output::{Destination, deliver};
use crate::settings::{COUNT_RANGE, LENGTH_RANGE, Settings};
use crate::terminal::{RED, RESET, box_bottom, box_line_center, box_top};

/// Parse a numeric answer. Empty input selects `default`.
pub fn parse_number(
    input: &str,
    default: usize,
    range: &RangeInclusive<usize>,
) -> std::result::Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    let n: usize = input
        .parse()
        .map_err(|_| "Please enter a valid number.".to_string())?;
    if range.contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "Please enter a number between {} and {}.",
            range.start(),
            range.end()
        ))
    }
}

/// Parse a yes/no answer. Empty input selects `default`; `None` means unrecognized.
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "j" | "ja" => Some(true),
        "n" | "no" | "nein" => Some(false),
        _ => None,
    }
}

fn invalid(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn ask_number<S: LineSource>(
    source: &mut S,
    label: &str,
    default: usize,
    range: RangeInclusive<usize>,
) -> Option<usize> {
    let prompt = format!("{} [default: {}]", label, default);
    loop {
        let answer = source.read_answer(&prompt)?;
        match parse_number(&answer, default, &range) {
            Ok(n) => return Some(n),
            Err(msg) => invalid(&msg),
        }
    }
}

pub fn ask_yes_no<S: LineSource>(source: &mut S, label: &str, default: bool) -> Option<bool> {
    let prompt = format!("{} [{}]", label, if default { "Y/n" } else { "y/N" });
    loop {
        let answer = source.read_answer(&prompt)?;
        match parse_yes_no(&answer, default) {
            Some(b) => return Some(b),
            None => invalid("Please answer y or n."),
        }
    }
}

/// Collect one batch worth of settings, using `current` as defaults.
pub fn ask_settings<S: LineSource>(source: &mut S, current: &Settings) -> Option<Settings> {
    let mut next = current.clone();
    next.pass_length = ask_number(source, "Password length", current.pass_length, LENGTH_RANGE)?;
    next.number_of_passwords = ask_number(
        source,
        "Number of passwords",
        current.number_of_passwords,
        COUNT_RANGE,
    )?;
    next.classes.upper = ask_yes_no(source, "Use uppercase letters?", current.classes.upper)?;
    next.classes.lower = ask_yes_no(source, "Use lowercase letters?", current.classes.lower)?;
    next.classes.digits = ask_yes_no(source, "Use digits?", current.classes.digits)?;
    next.classes.special = ask_yes_no(source, "Use special characters?", current.classes.special)?;
    next.check_breach = ask_yes_no(
        source,
        "Check passwords against Have I Been Pwned?",
        current.check_breach,
    )?;
    Some(next)
}

pub fn print_banner() {
    box_top("stronkpass");
    box_line_center("STRONK PWD Generator");
    box_bottom();
}

/// Prompt, generate, repeat until the user is done or input ends.
/// Settings are read from `settings_path` and written back after each
/// successful batch.
pub fn run_session<S: LineSource>(source: &mut S, cli: &Cli, settings_path: &Path) -> Result<()> {
    let mut settings = Settings::load_from(settings_path).unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });
    let mut checker: Option<PwnedPasswordsClient> = None;

    print_banner();

    loop {
        let Some(next) = ask_settings(source, &settings) else {
            break;
        };
        settings = next;
        println!();

        if settings.check_breach && checker.is_none() {
            checker = Some(PwnedPasswordsClient::new(&cli.api_url, cli.timeout())?);
        }

        let mut runner = BatchRunner::new(Generator::os()).max_attempts(cli.attempt_limit());
        if let Some(c) = checker.as_ref() {
            runner = runner.with_checker(c);
        }

        match deliver(&mut runner, &settings.to_request(), &Destination::Terminal) {
            Ok(report) => {
                if let Some(line) = report.summary() {
                    prompts::summary(&line);
                }
                if let Err(e) = settings.save_to(settings_path) {
                    prompts::warn(&format!("Failed to save settings: {}", e));
                }
            }
            Err(e) if e.is_config() => prompts::error(&format!("Error: {}", e)),
            Err(e) => return Err(e),
        }
        println!();

        if ask_yes_no(source, "Generate more passwords?", false) != Some(true) {
            break;
        }
    }

    Ok(())
}
