//! Batch transfer flow
//!
//! Sweeps funded batch wallets toward a single target address. Real transfer
//! submission needs the Demos SDK, which this tool does not carry, so the
//! only shipped executor is an explicit dry run: it records what would be
//! sent and performs no network mutation. Tests assert on the recording.

use crate::error::FaucetResult;
use crate::retry::Sleeper;
use crate::store::StoredWallet;
use crate::wallet::short_address;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};

/// Default per-wallet sweep amount
pub const DEFAULT_TRANSFER_AMOUNT: f64 = 99.99;

/// Pause between wallets during a sweep
pub const INTER_TRANSFER_PAUSE: Duration = Duration::from_secs(2);

/// One transfer a sweep intends to make
#[derive(Debug, Clone, PartialEq)]
pub struct IntendedTransfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Aggregate result of one sweep
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub processed: usize,
    pub successful: usize,
    pub total_amount: f64,
}

/// Transfer submission seam
#[async_trait]
pub trait TransferExecutor: Send + Sync {
    async fn transfer(&self, from: &StoredWallet, to: &str, amount: f64) -> FaucetResult<()>;
}

/// Executor that records intended transfers without touching the network
#[derive(Default)]
pub struct DryRunExecutor {
    pub recorded: Mutex<Vec<IntendedTransfer>>,
}

#[async_trait]
impl TransferExecutor for DryRunExecutor {
    async fn transfer(&self, from: &StoredWallet, to: &str, amount: f64) -> FaucetResult<()> {
        info!(
            "Would transfer {} DEM from {} to {} (dry run)",
            amount,
            short_address(&from.address),
            short_address(to)
        );
        self.recorded.lock().unwrap().push(IntendedTransfer {
            from: from.address.clone(),
            to: to.to_string(),
            amount,
        });
        Ok(())
    }
}

/// Run one sweep over `wallets` toward `target`
///
/// Per-wallet executor errors are logged and skipped; the sweep continues.
pub async fn run_batch_transfer<E, S>(
    wallets: &[StoredWallet],
    target: &str,
    amount: f64,
    executor: &E,
    sleeper: &S,
) -> TransferSummary
where
    E: TransferExecutor + ?Sized,
    S: Sleeper + ?Sized,
{
    info!("Starting batch transfer to {}", target);
    info!("Found {} wallets to process", wallets.len());

    let mut successful = 0;
    let mut total_amount = 0.0;

    for (i, wallet) in wallets.iter().enumerate() {
        info!(
            "[{}/{}] Processing {}",
            i + 1,
            wallets.len(),
            wallet.path.display()
        );

        match executor.transfer(wallet, target, amount).await {
            Ok(()) => {
                successful += 1;
                total_amount += amount;
            }
            Err(e) => error!("Transfer failed for {}: {}", wallet.address, e),
        }

        if i + 1 < wallets.len() {
            sleeper.sleep(INTER_TRANSFER_PAUSE).await;
        }
    }

    info!(
        "Processed {}/{} wallets, ~{:.2} DEM to transfer",
        successful,
        wallets.len(),
        total_amount
    );

    TransferSummary {
        processed: wallets.len(),
        successful,
        total_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaucetError;
    use crate::retry::test_support::RecordingSleeper;
    use std::path::PathBuf;

    fn wallet(address: &str) -> StoredWallet {
        StoredWallet {
            address: address.to_string(),
            mnemonic: "abandon ability able".to_string(),
            path: PathBuf::from(format!("{}.json", address)),
        }
    }

    #[tokio::test]
    async fn test_dry_run_records_without_mutation() {
        let wallets = vec![wallet("0xaaa"), wallet("0xbbb")];
        let executor = DryRunExecutor::default();
        let sleeper = RecordingSleeper::default();

        let summary =
            run_batch_transfer(&wallets, "0xtarget", 99.99, &executor, &sleeper).await;

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.successful, 2);
        assert!((summary.total_amount - 199.98).abs() < 1e-9);

        let recorded = executor.recorded.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].from, "0xaaa");
        assert_eq!(recorded[0].to, "0xtarget");
        assert_eq!(recorded[1].from, "0xbbb");

        // One pause between two wallets, none after the last
        assert_eq!(
            *sleeper.slept.lock().unwrap(),
            vec![INTER_TRANSFER_PAUSE]
        );
    }

    #[tokio::test]
    async fn test_executor_failure_skips_wallet() {
        struct FailingExecutor;

        #[async_trait]
        impl TransferExecutor for FailingExecutor {
            async fn transfer(
                &self,
                from: &StoredWallet,
                _to: &str,
                _amount: f64,
            ) -> FaucetResult<()> {
                if from.address == "0xbad" {
                    return Err(FaucetError::InvalidAddress("0xbad".to_string()));
                }
                Ok(())
            }
        }

        let wallets = vec![wallet("0xgood"), wallet("0xbad"), wallet("0xalso_good")];
        let sleeper = RecordingSleeper::default();

        let summary =
            run_batch_transfer(&wallets, "0xtarget", 50.0, &FailingExecutor, &sleeper).await;

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.successful, 2);
        assert!((summary.total_amount - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_sweep() {
        let executor = DryRunExecutor::default();
        let sleeper = RecordingSleeper::default();

        let summary = run_batch_transfer(&[], "0xtarget", 99.99, &executor, &sleeper).await;

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.successful, 0);
        assert!(executor.recorded.lock().unwrap().is_empty());
    }
}
