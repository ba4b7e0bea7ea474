//! HTTP client for the faucet backend
//!
//! Performs exactly one network attempt per call and reports the outcome
//! class. Retry logic lives in [`crate::retry`], not here.

use crate::config::FaucetConfig;
use crate::error::FaucetResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Transport-level failure classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkErrorKind {
    Timeout,
    Connect,
    Other(String),
}

impl std::fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkErrorKind::Timeout => write!(f, "timeout"),
            NetworkErrorKind::Connect => write!(f, "connection failed"),
            NetworkErrorKind::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Result of a single claim attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Success,
    RateLimited,
    Rejected(String),
    NetworkError(NetworkErrorKind),
}

/// Faucet balance as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaucetStatus {
    pub balance: String,
    pub address: String,
}

/// Claim request body
#[derive(Debug, Serialize)]
struct ClaimRequest<'a> {
    #[serde(rename = "publicKey")]
    public_key: &'a str,
    amount: u64,
}

/// Remote faucet operations
///
/// The retry engine and the batch orchestrator are generic over this trait so
/// tests can substitute scripted stubs for the live backend.
#[async_trait]
pub trait Faucet {
    /// Issue one token claim for `address`
    async fn request_tokens(&self, address: &str) -> ClaimOutcome;

    /// Fetch the faucet's own balance; `None` on any failure
    async fn check_status(&self) -> Option<FaucetStatus>;
}

/// Live HTTP client against a configured backend
pub struct FaucetClient {
    config: FaucetConfig,
    client: reqwest::Client,
}

impl FaucetClient {
    pub fn new(config: FaucetConfig) -> FaucetResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { config, client })
    }

    fn claim_url(&self) -> String {
        format!("{}/api/claim", self.config.backend_url)
    }

    fn balance_url(&self) -> String {
        format!("{}/api/balance", self.config.backend_url)
    }
}

#[async_trait]
impl Faucet for FaucetClient {
    async fn request_tokens(&self, address: &str) -> ClaimOutcome {
        let payload = ClaimRequest {
            public_key: address,
            amount: self.config.claim_amount,
        };

        let response = match self.client.post(self.claim_url()).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                let kind = classify_transport_error(&e);
                debug!("Claim transport error for {}: {}", address, kind);
                return ClaimOutcome::NetworkError(kind);
            }
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        classify_status(status, &body)
    }

    async fn check_status(&self) -> Option<FaucetStatus> {
        let response = match self.client.get(self.balance_url()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to reach faucet status endpoint: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Faucet status endpoint returned HTTP {}", response.status());
            return None;
        }

        let json: serde_json::Value = match response.json().await {
            Ok(json) => json,
            Err(e) => {
                warn!("Malformed faucet status response: {}", e);
                return None;
            }
        };

        parse_status_body(&json)
    }
}

/// Map a claim response to its outcome class
pub fn classify_status(status: u16, body: &str) -> ClaimOutcome {
    match status {
        200 => ClaimOutcome::Success,
        429 => ClaimOutcome::RateLimited,
        _ => ClaimOutcome::Rejected(body.to_string()),
    }
}

/// Classify a reqwest transport failure
fn classify_transport_error(error: &reqwest::Error) -> NetworkErrorKind {
    if error.is_timeout() {
        NetworkErrorKind::Timeout
    } else if error.is_connect() {
        NetworkErrorKind::Connect
    } else {
        NetworkErrorKind::Other(error.to_string())
    }
}

/// Extract balance and address from the nested `body` object
///
/// The backend reports the balance as either a number or a string; both are
/// accepted.
fn parse_status_body(json: &serde_json::Value) -> Option<FaucetStatus> {
    let body = json.get("body")?;

    let balance = match body.get("balance")? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return None,
    };

    let address = body.get("publicKey")?.as_str()?.to_string();

    Some(FaucetStatus { balance, address })
}
