use std::env;
use std::net::SocketAddr;

use crate::error::ApplicationError;

const BIND_ADDR_VAR: &str = "LEDGER_BIND_ADDR";
const SEED_ACCOUNTS_VAR: &str = "LEDGER_SEED_ACCOUNTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    bind_address: SocketAddr,
    seed_accounts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed_accounts: true,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApplicationError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_address = raw.parse().map_err(|e| {
                ApplicationError::ConfigurationError(format!("{}={:?}: {}", BIND_ADDR_VAR, raw, e))
            })?;
        }
        if let Some(raw) = lookup(SEED_ACCOUNTS_VAR) {
            config.seed_accounts = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ApplicationError::ConfigurationError(format!(
                        "{}={:?}: expected a boolean",
                        SEED_ACCOUNTS_VAR, raw
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    pub fn seed_accounts(&self) -> bool {
        self.seed_accounts
    }
}
