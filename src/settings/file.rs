//! Settings file persistence.
//!
//! One line of comma separated fields:
//! `length,count,upper,lower,digits,special,check_breach`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{COUNT_RANGE, LENGTH_RANGE, Settings};

const FIELDS: usize = 7;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.classes.upper,
        settings.classes.lower,
        settings.classes.digits,
        settings.classes.special,
        settings.check_breach,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Overlay values from `path` onto `settings`. A missing or short file is
/// rewritten from the current values; unparsable or out-of-range fields keep
/// their defaults.
pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        tracing::debug!(path = %path.display(), "rewriting malformed settings file");
        return save(settings, path);
    }

    settings.pass_length = parts[0]
        .parse()
        .ok()
        .filter(|n| LENGTH_RANGE.contains(n))
        .unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1]
        .parse()
        .ok()
        .filter(|n| COUNT_RANGE.contains(n))
        .unwrap_or(settings.number_of_passwords);
    settings.classes.upper = parts[2].parse().unwrap_or(settings.classes.upper);
    settings.classes.lower = parts[3].parse().unwrap_or(settings.classes.lower);
    settings.classes.digits = parts[4].parse().unwrap_or(settings.classes.digits);
    settings.classes.special = parts[5].parse().unwrap_or(settings.classes.special);
    settings.check_breach = parts[6].parse().unwrap_or(settings.check_breach);

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/stronkpass/settings")
}
