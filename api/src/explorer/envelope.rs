//! Decoding of the explorer's `{status, message, result}` response envelope.

use serde::Deserialize;
use serde_json::Value;

use super::ExplorerError;
use crate::transaction_record::TransactionRecord;

#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Value,
}

/// Decodes a txlist response body into records, in response order.
///
/// The explorer reports failures (bad key, rate limit) with a string in
/// `result`; those become [`ExplorerError::Upstream`]. An empty array is a
/// valid, empty listing even though the explorer flags it with status "0".
pub fn decode_envelope(body: &[u8]) -> Result<Vec<TransactionRecord>, ExplorerError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    match envelope.result {
        Value::Array(entries) => Ok(entries.iter().map(TransactionRecord::from_value).collect()),
        Value::String(detail) => Err(ExplorerError::Upstream {
            status: envelope.status,
            message: envelope.message,
            detail,
        }),
        _ => Err(ExplorerError::UnexpectedResult),
    }
}
