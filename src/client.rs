// 🌐 Lunch Money Client - Fetches manual assets and linked accounts
//
// GET {base}/assets          → {"assets": [...]}
// GET {base}/plaid_accounts  → {"plaid_accounts": [...]}
//
// No retries, no timeouts beyond reqwest defaults: any failure aborts the
// run and surfaces to main.

use crate::entities::{ManualAsset, PlaidAccount};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://dev.lunchmoney.app/v1";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// True for 401/403 responses
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::Status { status: 401 | 403, .. })
    }
}

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Where accounts come from. The pipeline only sees this trait, so tests
/// can swap in an in-memory source.
#[allow(async_fn_in_trait)]
pub trait AccountSource {
    async fn fetch_manual_assets(&self) -> Result<Vec<ManualAsset>, FetchError>;
    async fn fetch_linked_accounts(&self) -> Result<Vec<PlaidAccount>, FetchError>;
}

// ============================================================================
// HTTP CLIENT
// ============================================================================

#[derive(Deserialize)]
struct AssetsResponse {
    assets: Vec<ManualAsset>,
}

#[derive(Deserialize)]
struct PlaidAccountsResponse {
    plaid_accounts: Vec<PlaidAccount>,
}

pub struct LunchMoneyClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl LunchMoneyClient {
    pub fn new(token: String) -> Result<Self, FetchError> {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("asset-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(LunchMoneyClient {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let endpoint = format!("{}/{}", self.base_url, path);
        log::debug!("GET {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint: endpoint.clone(), source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint: endpoint.clone(), source })?;

        if !status.is_success() {
            log::error!("{} returned {}", endpoint, status);
            return Err(FetchError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

impl AccountSource for LunchMoneyClient {
    async fn fetch_manual_assets(&self) -> Result<Vec<ManualAsset>, FetchError> {
        let response: AssetsResponse = self.get_json("assets").await?;
        log::info!("fetched {} manual assets", response.assets.len());
        Ok(response.assets)
    }

    async fn fetch_linked_accounts(&self) -> Result<Vec<PlaidAccount>, FetchError> {
        let response: PlaidAccountsResponse = self.get_json("plaid_accounts").await?;
        log::info!("fetched {} linked accounts", response.plaid_accounts.len());
        Ok(response.plaid_accounts)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client =
            LunchMoneyClient::with_base_url("tok".to_string(), "http://localhost:1/v1/".to_string())
                .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1/v1");
    }

    #[test]
    fn test_default_base_url() {
        let client = LunchMoneyClient::new("tok".to_string()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_auth_errors() {
        let unauthorized = FetchError::Status {
            endpoint: "x".to_string(),
            status: 401,
            body: String::new(),
        };
        let server_error = FetchError::Status {
            endpoint: "x".to_string(),
            status: 500,
            body: "oops".to_string(),
        };

        assert!(unauthorized.is_auth());
        assert!(!server_error.is_auth());
        assert_eq!(server_error.to_string(), "x returned HTTP 500: oops");
    }
}
