//! Startup configuration read from the environment (and `.env`, loaded in `main`).

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const REWARD_SEED_VAR: &str = "WIKIQUEST_REWARD_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Note: Debug is implemented by hand so the bot token never ends up in logs.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    /// Fixes the coin and badge draws, handy for demos.
    pub reward_seed: Option<u64>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"***")
            .field("reward_seed", &self.reward_seed)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup(TOKEN_VAR)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing(TOKEN_VAR))?;

        let reward_seed = match lookup(REWARD_SEED_VAR) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed {
                var: REWARD_SEED_VAR,
                value: raw,
            })?),
        };

        Ok(Self { token, reward_seed })
    }

    pub fn reward_rng(&self) -> StdRng {
        match self.reward_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
