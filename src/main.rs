//! Demos faucet automation binary

use clap::{Parser, Subcommand};
use demos_faucet::retry::TokioSleeper;
use demos_faucet::transfer::{DryRunExecutor, DEFAULT_TRANSFER_AMOUNT};
use demos_faucet::{
    store, Automation, FaucetClient, FaucetConfig, FsWalletStore, RetryPolicy, WalletIdentity,
};
use demos_faucet::client::Faucet;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demos faucet automation CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Faucet backend URL
    #[arg(long)]
    backend_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new demo wallet
    Create {
        /// Save the wallet to a JSON file
        #[arg(long)]
        save: bool,
    },

    /// Request tokens for an existing address
    Request {
        /// Wallet address to fund
        #[arg(long)]
        address: String,
    },

    /// Show the faucet's own balance
    Status,

    /// Create wallets and request tokens for each
    Auto {
        /// Number of wallets to create
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Delay between requests (ms)
        #[arg(long, default_value_t = 5000)]
        delay: u64,
    },

    /// Sweep saved wallets toward a target address (dry run)
    Transfer {
        /// Target address
        #[arg(long)]
        target: String,

        /// Directory of saved wallet files
        #[arg(long, default_value = "batch-wallets")]
        wallet_dir: String,

        /// Amount per wallet
        #[arg(long, default_value_t = DEFAULT_TRANSFER_AMOUNT)]
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let env_filter = if args.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Demos Faucet Automation Tool v0.1.0");

    // Load configuration
    let mut config = FaucetConfig::from_env();

    // Override with CLI arguments
    if let Some(url) = args.backend_url {
        config.backend_url = url;
    }

    info!("Configuration:");
    info!("  Backend URL: {}", config.backend_url);
    info!("  Claim amount: {}", config.claim_amount);
    info!(
        "  Retry budget: {} attempts, {}s rate-limit backoff unit",
        config.max_attempts, config.rate_limit_backoff_secs
    );

    match args.command {
        Command::Create { save } => {
            let wallet = WalletIdentity::generate();
            info!("New wallet created:");
            info!("  Address: {}", wallet.address);
            info!("  Mnemonic: {}", wallet.mnemonic);

            if save {
                let store = FsWalletStore::new(config.wallet_dir.clone());
                store.save_wallet(&wallet)?;
            }
        }

        Command::Request { address } => {
            let client = FaucetClient::new(config.clone())?;
            let policy = RetryPolicy::from_config(&config);
            let report =
                demos_faucet::claim_with_retry(&client, &TokioSleeper, &address, &policy).await;

            if report.succeeded {
                info!("Tokens requested after {} attempt(s)", report.attempts);
            } else {
                warn!(
                    "Request failed after {} attempt(s): {:?}",
                    report.attempts, report.last_failure
                );
                std::process::exit(1);
            }
        }

        Command::Status => {
            let client = FaucetClient::new(config.clone())?;
            match client.check_status().await {
                Some(status) => {
                    info!("Faucet status:");
                    info!("  Balance: {} DEM", status.balance);
                    info!("  Address: {}", status.address);
                }
                None => {
                    warn!("Failed to check faucet status");
                    std::process::exit(1);
                }
            }
        }

        Command::Auto { count, delay } => {
            let client = FaucetClient::new(config.clone())?;
            let policy = RetryPolicy::from_config(&config);
            let store = FsWalletStore::new(config.wallet_dir.clone());

            let automation = Automation::new(
                client,
                TokioSleeper,
                store,
                policy,
                config.wallet_create_pause(),
            );

            let summary = automation.run(count, Duration::from_millis(delay)).await;

            info!(
                "Batch complete: {}/{} successful requests",
                summary.successful_requests, summary.total_wallets
            );
        }

        Command::Transfer {
            target,
            wallet_dir,
            amount,
        } => {
            let wallets = store::load_wallets(&wallet_dir)?;
            let executor = DryRunExecutor::default();

            let summary = demos_faucet::transfer::run_batch_transfer(
                &wallets,
                &target,
                amount,
                &executor,
                &TokioSleeper,
            )
            .await;

            info!(
                "Sweep complete: {}/{} wallets, ~{:.2} DEM total (dry run, nothing sent)",
                summary.successful, summary.processed, summary.total_amount
            );
        }
    }

    Ok(())
}
