//! Batch orchestration
//!
//! Runs wallet creation and token claims across N wallets, strictly
//! sequentially: the faucet is rate limited and ordering stays deterministic.
//! All waiting goes through the injected [`Sleeper`].

use crate::client::Faucet;
use crate::retry::{claim_with_retry, FailureKind, RetryPolicy, Sleeper};
use crate::store::WalletStore;
use crate::wallet::{short_address, WalletIdentity};
use std::time::Duration;
use tracing::{error, info};

/// Recorded result of one wallet's claim sequence
#[derive(Debug, Clone)]
pub struct FaucetRequestOutcome {
    pub address: String,
    pub succeeded: bool,
    pub attempts: u32,
    pub last_failure: Option<FailureKind>,
}

/// Aggregate result of one batch run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Wallets that survived creation and entered the request phase
    pub total_wallets: usize,
    pub successful_requests: usize,
    /// One outcome per wallet, in submission order
    pub outcomes: Vec<FaucetRequestOutcome>,
}

/// Sequential batch workflow: create wallets, persist them, claim for each
pub struct Automation<F, S, W> {
    faucet: F,
    sleeper: S,
    store: W,
    policy: RetryPolicy,
    wallet_create_pause: Duration,
}

impl<F, S, W> Automation<F, S, W>
where
    F: Faucet,
    S: Sleeper,
    W: WalletStore,
{
    pub fn new(
        faucet: F,
        sleeper: S,
        store: W,
        policy: RetryPolicy,
        wallet_create_pause: Duration,
    ) -> Self {
        Self {
            faucet,
            sleeper,
            store,
            policy,
            wallet_create_pause,
        }
    }

    /// Run the full workflow for `count` wallets
    ///
    /// A wallet whose persistence fails is logged and skipped; it contributes
    /// nothing to either pass. One wallet's claim failure never blocks the
    /// next wallet. The run never aborts for a single wallet.
    pub async fn run(&self, count: usize, inter_wallet_delay: Duration) -> BatchSummary {
        info!("Starting automated workflow for {} wallet(s)", count);

        // Pass 1: create and persist wallets
        info!("Step 1: Creating wallets...");
        let mut wallets = Vec::with_capacity(count);

        for i in 1..=count {
            info!("Creating wallet {}/{}...", i, count);
            let wallet = WalletIdentity::generate();

            match self.store.save_batch_wallet(&wallet, i) {
                Ok(_) => {
                    info!("Wallet {} created: {}", i, short_address(&wallet.address));
                    wallets.push(wallet);
                }
                Err(e) => {
                    error!("Failed to persist wallet {}: {}, skipping", i, e);
                }
            }

            if i < count {
                self.sleeper.sleep(self.wallet_create_pause).await;
            }
        }

        // Pass 2: request tokens for each surviving wallet
        info!("Step 2: Requesting tokens from faucet...");
        let total = wallets.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, wallet) in wallets.iter().enumerate() {
            info!("Requesting tokens for wallet {}/{}...", i + 1, total);

            let report =
                claim_with_retry(&self.faucet, &self.sleeper, &wallet.address, &self.policy).await;

            outcomes.push(FaucetRequestOutcome {
                address: wallet.address.clone(),
                succeeded: report.succeeded,
                attempts: report.attempts,
                last_failure: report.last_failure,
            });

            if i + 1 < total {
                info!("Waiting {:?} before next request...", inter_wallet_delay);
                self.sleeper.sleep(inter_wallet_delay).await;
            }
        }

        let successful_requests = outcomes.iter().filter(|o| o.succeeded).count();

        info!("Automation complete");
        info!("Wallets created: {}", total);
        info!("Successful faucet requests: {}/{}", successful_requests, total);

        BatchSummary {
            total_wallets: total,
            successful_requests,
            outcomes,
        }
    }
}
