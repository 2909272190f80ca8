//! Runtime configuration read from the environment.
//!
//! - `RACE_SEED`: RNG seed (u32). Unset or invalid: a random seed.
//! - `RACE_LOG_PATH`: file to write logs to. Unset or empty: no logging.
//! - `RACE_LOG`: log filter directive (`tracing_subscriber::EnvFilter` syntax), default `info`.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceConfig {
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RaceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("RACE_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("RACE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = lookup("RACE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            log_path,
            log_filter,
        }
    }

    /// Configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}
