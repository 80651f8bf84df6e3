//! Breach checking against a k-anonymity range service.
//!
//! Only the first five hex characters of a password's SHA-1 fingerprint are
//! sent; the remaining suffix is matched against the returned candidates
//! locally.

mod client;
pub mod range;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT, PwnedPasswordsClient};
pub use range::Fingerprint;

/// Outcome of a single breach check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachStatus {
    Clean,
    /// Found in the corpus this many times.
    Breached(u64),
    /// The check could not be completed. Never treated as clean.
    Unknown(String),
}

pub trait BreachChecker {
    fn check(&self, password: &str) -> BreachStatus;
}

