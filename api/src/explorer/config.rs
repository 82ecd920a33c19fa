use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Ordering requested from the explorer.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Where and what to ask the block explorer for.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub api_url: String,
    pub address: String,
    pub start_block: u64,
    pub end_block: u64,
    pub sort: SortOrder,
    pub api_key: Option<String>,
}

impl ExplorerConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.etherscan.io/api";
    pub const DEFAULT_ADDRESS: &'static str = "0x6Fb447Ae94F5180254D436A693907a1f57696900";
    pub const DEFAULT_START_BLOCK: u64 = 16_689_267;
    pub const DEFAULT_END_BLOCK: u64 = 18_982_605;

    /// Creates an ExplorerConfig from environment variables, falling back to
    /// in-code defaults for anything unset or unparseable.
    ///
    /// # Environment Variables
    /// - `EXPLORER_API_URL`: base URL of the txlist endpoint.
    /// - `EXPLORER_ADDRESS`: account whose transactions are listed.
    /// - `EXPLORER_START_BLOCK` / `EXPLORER_END_BLOCK`: inclusive block range.
    /// - `EXPLORER_SORT`: "asc" or "desc".
    /// - `EXPLORER_API_KEY`: explorer API key. Omitted from requests when unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_url: non_empty("EXPLORER_API_URL")
                .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string()),
            address: non_empty("EXPLORER_ADDRESS")
                .unwrap_or_else(|| Self::DEFAULT_ADDRESS.to_string()),
            start_block: non_empty("EXPLORER_START_BLOCK")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(Self::DEFAULT_START_BLOCK),
            end_block: non_empty("EXPLORER_END_BLOCK")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(Self::DEFAULT_END_BLOCK),
            sort: non_empty("EXPLORER_SORT")
                .and_then(|s| SortOrder::from_str(s.trim()).ok())
                .unwrap_or_default(),
            api_key: non_empty("EXPLORER_API_KEY"),
        }
    }

    /// Query parameters of the txlist request, in the order the explorer
    /// documents them.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("startblock", self.start_block.to_string()),
            ("endblock", self.end_block.to_string()),
            ("sort", self.sort.as_str().to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("apikey", key.clone()));
        }
        params.push(("address", self.address.clone()));
        params
    }
}
