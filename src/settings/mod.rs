//! Interactive-mode defaults, persisted between sessions.

mod file;

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::batch::BatchRequest;
use crate::pass::CharClasses;

/// Password lengths the interactive prompts accept.
pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=128;
/// Batch sizes the interactive prompts accept.
pub const COUNT_RANGE: RangeInclusive<usize> = 1..=50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: CharClasses,
    pub check_breach: bool,
}

impl Settings {
    /// `$HOME/.config/stronkpass/settings`.
    pub fn default_path() -> PathBuf {
        file::default_path()
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn to_request(&self) -> BatchRequest {
        BatchRequest {
            count: self.number_of_passwords,
            length: self.pass_length,
            classes: self.classes,
            check_breach: self.check_breach,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            classes: CharClasses::default(),
            check_breach: true,
        }
    }
}
