//! This crate contains all shared fullstack server functions.

pub mod explorer;
pub mod transaction_record;

use dioxus::prelude::*;
use transaction_record::TransactionRecord;

pub type ApiError = anyhow::Error;

/// Lists the configured account's transactions from the block explorer.
///
/// The explorer endpoint, account, block range and API key are read from the
/// server's environment, see [`explorer::config::ExplorerConfig::from_env`].
#[post("/api/account_transactions")]
pub async fn account_transactions() -> Result<Vec<TransactionRecord>, ApiError> {
    use explorer::TransactionSource;

    let source = explorer::Etherscan::new(explorer::config::ExplorerConfig::from_env());
    Ok(source.account_transactions().await?)
}
