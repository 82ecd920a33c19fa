//! Defines the block explorer client used to list account transactions.

pub mod config;
pub mod envelope;

use thiserror::Error;

use crate::transaction_record::TransactionRecord;
use config::ExplorerConfig;

/// Failures while listing transactions from the explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("explorer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("explorer response is not valid json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("explorer returned status {status} ({message}): {detail}")]
    Upstream {
        status: String,
        message: String,
        detail: String,
    },
    #[error("explorer response has no transaction list")]
    UnexpectedResult,
}

/// A trait for any service that can list an account's transactions.
#[allow(async_fn_in_trait)]
pub trait TransactionSource {
    /// Fetches the full transaction list in one request.
    async fn account_transactions(&self) -> Result<Vec<TransactionRecord>, ExplorerError>;
}

/// Lists transactions through an Etherscan-compatible `txlist` endpoint.
pub struct Etherscan {
    client: reqwest::Client,
    config: ExplorerConfig,
}

impl Etherscan {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Builds the single GET request without sending it.
    pub fn request(&self) -> Result<reqwest::Request, ExplorerError> {
        Ok(self
            .client
            .get(&self.config.api_url)
            .query(&self.config.query_params())
            .build()?)
    }
}

impl TransactionSource for Etherscan {
    async fn account_transactions(&self) -> Result<Vec<TransactionRecord>, ExplorerError> {
        let request = self.request()?;
        dioxus_logger::tracing::debug!("txlist request: {}", request.url().path());

        let body = self.client.execute(request).await?.bytes().await?;
        let records = envelope::decode_envelope(&body)?;

        dioxus_logger::tracing::info!(
            "explorer returned {} transactions for {}",
            records.len(),
            self.config.address
        );
        Ok(records)
    }
}
