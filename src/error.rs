//! Error types for the faucet automation client

use thiserror::Error;

/// Faucet automation errors
///
/// Claim failures (rate limits, rejections, transport errors) are reported as
/// [`ClaimOutcome`](crate::client::ClaimOutcome) values, not errors: the retry
/// engine consumes them as data. This type covers the local failures around
/// the request path, all of which stay scoped to a single wallet or command.
#[derive(Error, Debug)]
pub enum FaucetError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Wallet file has no mnemonic: {0}")]
    MissingMnemonic(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type FaucetResult<T> = Result<T, FaucetError>;
