//! Faucet automation configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Faucet automation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaucetConfig {
    /// Faucet frontend URL (informational, shown in status output)
    pub frontend_url: String,

    /// Faucet backend URL (claim and balance endpoints)
    pub backend_url: String,

    /// Amount requested per claim
    pub claim_amount: u64,

    /// Per-request HTTP timeout (seconds)
    pub request_timeout_secs: u64,

    /// Maximum claim attempts per wallet
    pub max_attempts: u32,

    /// Backoff unit applied on HTTP 429, scaled by attempt number (seconds)
    pub rate_limit_backoff_secs: u64,

    /// Fixed delay after a rejected or failed attempt (seconds)
    pub retry_delay_secs: u64,

    /// Pause between wallet creations in a batch run (seconds)
    pub wallet_create_pause_secs: u64,

    /// Directory for persisted wallet files
    pub wallet_dir: String,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            frontend_url: "https://faucet.demos.sh".to_string(),
            backend_url: "https://faucetbackend.demos.sh".to_string(),
            claim_amount: 10,
            request_timeout_secs: 10,
            max_attempts: 3,
            rate_limit_backoff_secs: 30,
            retry_delay_secs: 5,
            wallet_create_pause_secs: 2,
            wallet_dir: ".".to_string(),
        }
    }
}

impl FaucetConfig {
    /// Load from environment variables with defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FAUCET_FRONTEND_URL") {
            config.frontend_url = url;
        }

        if let Ok(url) = std::env::var("FAUCET_BACKEND_URL") {
            config.backend_url = url;
        }

        if let Ok(amount) = std::env::var("FAUCET_CLAIM_AMOUNT") {
            config.claim_amount = amount.parse().unwrap_or(config.claim_amount);
        }

        if let Ok(timeout) = std::env::var("FAUCET_REQUEST_TIMEOUT") {
            config.request_timeout_secs = timeout.parse().unwrap_or(config.request_timeout_secs);
        }

        if let Ok(attempts) = std::env::var("FAUCET_MAX_ATTEMPTS") {
            config.max_attempts = attempts.parse().unwrap_or(config.max_attempts);
        }

        if let Ok(backoff) = std::env::var("FAUCET_RATE_LIMIT_BACKOFF") {
            config.rate_limit_backoff_secs = backoff.parse().unwrap_or(config.rate_limit_backoff_secs);
        }

        if let Ok(delay) = std::env::var("FAUCET_RETRY_DELAY") {
            config.retry_delay_secs = delay.parse().unwrap_or(config.retry_delay_secs);
        }

        if let Ok(dir) = std::env::var("FAUCET_WALLET_DIR") {
            config.wallet_dir = dir;
        }

        config
    }

    /// Get per-request HTTP timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get rate-limit backoff unit
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_secs(self.rate_limit_backoff_secs)
    }

    /// Get fixed retry delay
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// Get pause between wallet creations
    pub fn wallet_create_pause(&self) -> Duration {
        Duration::from_secs(self.wallet_create_pause_secs)
    }
}
