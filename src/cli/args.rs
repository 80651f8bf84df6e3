use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::batch::BatchRequest;
use crate::breach::DEFAULT_API_URL;
use crate::pass::CharClasses;
use crate::pass::output::Destination;

/// Generate secure passwords, optionally checked against Have I Been Pwned.
///
/// Run without arguments for interactive mode.
#[derive(Parser, Debug, Clone)]
#[command(name = "stronkpass", version)]
pub struct Cli {
    /// Characters per password
    #[arg(short, long, default_value_t = 12)]
    pub length: usize,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out punctuation
    #[arg(long)]
    pub no_special: bool,

    /// Discard passwords found in the Pwned Passwords corpus
    #[arg(long)]
    pub check_pwned: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,

    /// Stop after this many candidates instead of retrying forever
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<NonZeroUsize>,

    /// Breach check timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub timeout: u64,

    /// Base URL of the range API
    #[arg(long, value_name = "URL", env = "STRONKPASS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Copy passwords to the clipboard instead of printing them
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Append passwords to a file instead of printing them
    #[arg(short, long, value_name = "FILE", conflicts_with = "clipboard")]
    pub output: Option<PathBuf>,

    /// Suppress warnings and summaries
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn classes(&self) -> CharClasses {
        CharClasses {
            upper: !self.no_upper,
            lower: !self.no_lower,
            digits: !self.no_digits,
            special: !self.no_special,
        }
    }

    pub fn request(&self) -> BatchRequest {
        BatchRequest {
            count: self.count,
            length: self.length,
            classes: self.classes(),
            check_breach: self.check_pwned,
        }
    }

    pub fn destination(&self) -> Destination {
        if self.clipboard {
            Destination::Clipboard
        } else if let Some(path) = &self.output {
            Destination::File(path.clone())
        } else {
            Destination::Terminal
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn attempt_limit(&self) -> Option<usize> {
        self.max_attempts.map(NonZeroUsize::get)
    }
}
