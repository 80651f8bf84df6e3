//! Blocking HTTP client for the Pwned Passwords range API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;

use super::range::{Fingerprint, find_suffix};
use super::{BreachChecker, BreachStatus};
use crate::error::Result;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PwnedPasswordsClient {
    http: Client,
    base_url: String,
}

impl PwnedPasswordsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stronkpass/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }

    /// Fetch the padded candidate list for a prefix.
    fn fetch_range(&self, prefix: &str) -> std::result::Result<String, String> {
        tracing::debug!(prefix, "querying range");

        let response = self
            .http
            .get(self.range_url(prefix))
            .header("Add-Padding", "true")
            .send()
            .map_err(|e| describe_transport_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(prefix, status = status.as_u16(), "range query rejected");
            return Err(format!("API error: HTTP {}", status.as_u16()));
        }

        response
            .text()
            .map_err(|e| format!("unreadable response: {}", e))
    }
}

impl BreachChecker for PwnedPasswordsClient {
    fn check(&self, password: &str) -> BreachStatus {
        let fingerprint = Fingerprint::of(password);

        let body = match self.fetch_range(fingerprint.prefix()) {
            Ok(body) => body,
            Err(reason) => return BreachStatus::Unknown(reason),
        };

        match find_suffix(&body, fingerprint.suffix()) {
            // Padding entries carry a zero count.
            Ok(Some(0)) | Ok(None) => BreachStatus::Clean,
            Ok(Some(count)) => BreachStatus::Breached(count),
            Err(reason) => {
                tracing::warn!(prefix = fingerprint.prefix(), %reason, "bad range response");
                BreachStatus::Unknown(reason)
            }
        }
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "API timeout".to_string()
    } else if e.is_connect() {
        "API unreachable".to_string()
    } else {
        format!("API error: {}", e)
    }
}
