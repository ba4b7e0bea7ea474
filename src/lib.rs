//! Faucet automation client for the Demos testnet
//!
//! This crate automates interaction with the Demos faucet:
//! - Demo wallet generation (address + placeholder mnemonic)
//! - Token claims with bounded retry and rate-limit backoff
//! - Batch runs over N wallets with per-wallet outcome accounting
//! - Wallet file persistence and a dry-run batch transfer flow

pub mod automation;
pub mod client;
pub mod config;
pub mod error;
pub mod retry;
pub mod store;
pub mod transfer;
pub mod wallet;

pub use automation::{Automation, BatchSummary, FaucetRequestOutcome};
pub use client::{ClaimOutcome, Faucet, FaucetClient, FaucetStatus, NetworkErrorKind};
pub use config::FaucetConfig;
pub use error::{FaucetError, FaucetResult};
pub use retry::{claim_with_retry, RequestReport, RetryPolicy, Sleeper, TokioSleeper};
pub use store::{FsWalletStore, WalletStore};
pub use transfer::{DryRunExecutor, TransferExecutor, TransferSummary};
pub use wallet::WalletIdentity;
