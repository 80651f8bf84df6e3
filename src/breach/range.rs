//! Password fingerprints and range response parsing.

use sha1::{Digest, Sha1};
use zeroize::Zeroizing;

/// Hex characters of the fingerprint sent to the range service.
pub const PREFIX_LEN: usize = 5;
/// Hex characters of the fingerprint matched locally.
pub const SUFFIX_LEN: usize = 35;

/// Uppercase hex SHA-1 of a password.
pub struct Fingerprint(Zeroizing<String>);

impl Fingerprint {
    pub fn of(password: &str) -> Self {
        let digest = Sha1::digest(password.as_bytes());
        Self(Zeroizing::new(hex::encode_upper(digest)))
    }

    /// The only part of the fingerprint that leaves the process.
    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }

    pub fn suffix(&self) -> &str {
        &self.0[PREFIX_LEN..]
    }
}

/// Look up `suffix` in a range response body.
///
/// Returns the occurrence count of the matching line, `None` when the suffix
/// is absent, or a reason string if any line is malformed. A body without a
/// single entry is malformed too: a real range is never empty.
pub fn find_suffix(body: &str, suffix: &str) -> Result<Option<u64>, String> {
    let mut found = None;
    let mut entries = 0usize;

    for (n, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((candidate, count)) = line.split_once(':') else {
            return Err(format!("malformed response line {}", n + 1));
        };
        if candidate.len() != SUFFIX_LEN || !candidate.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("malformed hash suffix on line {}", n + 1));
        }
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| format!("malformed count on line {}", n + 1))?;

        entries += 1;
        if found.is_none() && candidate.eq_ignore_ascii_case(suffix) {
            found = Some(count);
        }
    }

    if entries == 0 {
        return Err("empty range response".to_string());
    }
    Ok(found)
}
