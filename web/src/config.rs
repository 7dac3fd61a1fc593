//! Process configuration read from the environment.

use std::time::Duration;

use crate::Error;

/// Base URL of the expense REST API.
pub const API_URL_VAR: &str = "EXPENSE_API_URL";
/// Port the web front end listens on.
pub const PORT_VAR: &str = "PORT";
/// Optional per-request timeout for API calls, in whole seconds.
pub const TIMEOUT_VAR: &str = "EXPENSE_API_TIMEOUT_SECS";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub port: u16,
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(Error::MissingConfig(API_URL_VAR))?;

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                Error::InvalidConfig {
                    name: PORT_VAR,
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => Some(parse_timeout(value)?),
            None => None,
        };

        Ok(Self {
            api_url,
            port,
            request_timeout,
        })
    }
}

fn parse_timeout(value: String) -> Result<Duration, Error> {
    match value.parse::<u64>() {
        Ok(0) => Err(Error::InvalidConfig {
            name: TIMEOUT_VAR,
            value,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(Error::InvalidConfig {
            name: TIMEOUT_VAR,
            value,
            reason: e.to_string(),
        }),
    }
}
