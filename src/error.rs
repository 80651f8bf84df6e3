//! Crate error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Every character class was disabled, so the pool is empty.
    #[error("no character class selected")]
    NoCharacterClass,

    #[error("gave up after {attempts} attempts: every candidate was reported as breached")]
    Exhausted { attempts: usize },

    #[error("breach check requested but no checker is configured")]
    MissingChecker,

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("failed to set up HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl Error {
    /// True for errors caused by the requested settings rather than the environment.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::NoCharacterClass | Error::MissingChecker)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
