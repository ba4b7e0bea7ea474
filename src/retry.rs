//! Bounded retry with rate-limit backoff
//!
//! The policy decision is a pure function of (outcome, attempt number) so it
//! can be tested without real time; the async driver threads an injected
//! [`Sleeper`] through the wait states.

use crate::client::{ClaimOutcome, Faucet, NetworkErrorKind};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

/// Retry budget and backoff intervals for one claim
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum attempts per claim
    pub max_attempts: u32,

    /// Backoff unit on HTTP 429, multiplied by the 1-based attempt number
    pub rate_limit_backoff: Duration,

    /// Fixed delay after a rejection or transport failure
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            rate_limit_backoff: Duration::from_secs(30),
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &crate::config::FaucetConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            rate_limit_backoff: config.rate_limit_backoff(),
            retry_delay: config.retry_delay(),
        }
    }
}

/// Next action after one claim attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    Stop { succeeded: bool },
    RetryAfter(Duration),
}

/// Non-success outcome class retained for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    Rejected(String),
    Network(NetworkErrorKind),
}

/// Result of one full claim sequence for a single address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestReport {
    pub succeeded: bool,
    pub attempts: u32,
    pub last_failure: Option<FailureKind>,
}

/// Decide what to do after attempt number `attempt` (1-based) yielded `outcome`
pub fn decide(outcome: &ClaimOutcome, attempt: u32, policy: &RetryPolicy) -> RetryDecision {
    let attempts_remain = attempt < policy.max_attempts;

    match outcome {
        ClaimOutcome::Success => RetryDecision::Stop { succeeded: true },
        ClaimOutcome::RateLimited if attempts_remain => {
            RetryDecision::RetryAfter(policy.rate_limit_backoff * attempt)
        }
        ClaimOutcome::Rejected(_) | ClaimOutcome::NetworkError(_) if attempts_remain => {
            RetryDecision::RetryAfter(policy.retry_delay)
        }
        _ => RetryDecision::Stop { succeeded: false },
    }
}

/// Waiting mechanism, injected so tests run without real delays
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run one bounded claim sequence for `address`
///
/// Each invocation owns its own attempt counter; nothing is carried across
/// calls. Never issues more than `policy.max_attempts` client calls.
pub async fn claim_with_retry<F, S>(
    faucet: &F,
    sleeper: &S,
    address: &str,
    policy: &RetryPolicy,
) -> RequestReport
where
    F: Faucet + ?Sized,
    S: Sleeper + ?Sized,
{
    info!("Requesting tokens for address: {}", address);
    let mut last_failure = None;

    for attempt in 1..=policy.max_attempts {
        info!("Attempt {}/{}", attempt, policy.max_attempts);

        let outcome = faucet.request_tokens(address).await;

        match &outcome {
            ClaimOutcome::Success => {
                info!("Tokens requested successfully for {}", address);
            }
            ClaimOutcome::RateLimited => {
                warn!("Rate limited on attempt {}", attempt);
                last_failure = Some(FailureKind::RateLimited);
            }
            ClaimOutcome::Rejected(message) => {
                warn!("Claim rejected on attempt {}: {}", attempt, message);
                last_failure = Some(FailureKind::Rejected(message.clone()));
            }
            ClaimOutcome::NetworkError(kind) => {
                warn!("Network error on attempt {}: {}", attempt, kind);
                last_failure = Some(FailureKind::Network(kind.clone()));
            }
        }

        match decide(&outcome, attempt, policy) {
            RetryDecision::Stop { succeeded } => {
                return RequestReport {
                    succeeded,
                    attempts: attempt,
                    last_failure: if succeeded { None } else { last_failure },
                };
            }
            RetryDecision::RetryAfter(delay) => {
                info!("Waiting {:?} before next attempt", delay);
                sleeper.sleep(delay).await;
            }
        }
    }

    // Unreachable for max_attempts >= 1: the final attempt always stops
    RequestReport {
        succeeded: false,
        attempts: policy.max_attempts,
        last_failure,
    }
}
