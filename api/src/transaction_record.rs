//! The transaction rows served by the block explorer.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Names one of the displayable fields of a [`TransactionRecord`].
///
/// The string form (see `as_str`) is the key used by the explorer's JSON and
/// is the identifier the grid uses for columns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TransactionField {
    BlockNumber,
    Hash,
    To,
    Value,
    Gas,
    GasPrice,
    GasUsed,
    FunctionName,
}

impl TransactionField {
    /// Returns the upstream JSON key, e.g. `"blockNumber"`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for TransactionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transaction as returned by the explorer.
///
/// Every field is an opaque display string. Nothing is validated or
/// normalized: the explorer is the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRecord {
    pub block_number: String,
    pub hash: String,
    pub to: String,
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    pub gas_used: String,
    pub function_name: String,
}

impl TransactionRecord {
    /// Builds a record from one entry of the explorer's `result` array.
    ///
    /// Strings are kept verbatim, other scalars keep their JSON text and
    /// missing or null keys become empty. An entry that is not an object
    /// still yields a (blank) record so row counts match the response.
    pub fn from_value(entry: &Value) -> Self {
        let field = |key: TransactionField| -> String {
            entry
                .get(key.as_str())
                .map(display_string)
                .unwrap_or_default()
        };

        Self {
            block_number: field(TransactionField::BlockNumber),
            hash: field(TransactionField::Hash),
            to: field(TransactionField::To),
            value: field(TransactionField::Value),
            gas: field(TransactionField::Gas),
            gas_price: field(TransactionField::GasPrice),
            gas_used: field(TransactionField::GasUsed),
            function_name: field(TransactionField::FunctionName),
        }
    }

    /// Reads a field by identifier.
    pub fn get(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::BlockNumber => &self.block_number,
            TransactionField::Hash => &self.hash,
            TransactionField::To => &self.to,
            TransactionField::Value => &self.value,
            TransactionField::Gas => &self.gas,
            TransactionField::GasPrice => &self.gas_price,
            TransactionField::GasUsed => &self.gas_used,
            TransactionField::FunctionName => &self.function_name,
        }
    }
}

fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A (block number, gas used) pair for the gas usage chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasUsedPoint {
    pub block_number: String,
    pub gas_used: String,
}

/// Projects records onto their gas usage, keeping order.
pub fn gas_used_series(records: &[TransactionRecord]) -> Vec<GasUsedPoint> {
    records
        .iter()
        .map(|r| GasUsedPoint {
            block_number: r.block_number.clone(),
            gas_used: r.gas_used.clone(),
        })
        .collect()
}
