//! Character set building for password generation.

use crate::error::{Error, Result};

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// All 32 printable ASCII punctuation characters.
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes may appear in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            special: true,
        }
    }
}

impl CharClasses {
    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.special)
    }

    /// Build the character pool: enabled alphabets in upper, lower, digits, special order.
    pub fn pool(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Err(Error::NoCharacterClass);
        }

        let mut chars = Vec::with_capacity(self.size());
        if self.upper {
            chars.extend_from_slice(UPPERCASE);
        }
        if self.lower {
            chars.extend_from_slice(LOWERCASE);
        }
        if self.digits {
            chars.extend_from_slice(DIGITS);
        }
        if self.special {
            chars.extend_from_slice(SPECIAL);
        }
        Ok(chars)
    }

    /// Number of characters in the pool.
    pub fn size(&self) -> usize {
        let mut size = 0;
        if self.upper {
            size += UPPERCASE.len();
        }
        if self.lower {
            size += LOWERCASE.len();
        }
        if self.digits {
            size += DIGITS.len();
        }
        if self.special {
            size += SPECIAL.len();
        }
        size
    }
}
