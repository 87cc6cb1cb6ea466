//! Message and transaction data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw SMS notification as delivered by the platform.
///
/// Deserializes from the inbound wire shape
/// `{"sender": ..., "message": ..., "timestamp": <epoch millis>}`; a missing
/// timestamp is stamped with the time of receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMessage {
    /// Originating address of the SMS.
    pub sender: String,

    /// Full message body.
    #[serde(alias = "message")]
    pub body: String,

    /// When the message was received.
    #[serde(
        alias = "timestamp",
        default = "Utc::now",
        with = "chrono::serde::ts_milliseconds"
    )]
    pub received_at: DateTime<Utc>,
}

impl RawMessage {
    /// A message received now.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }
}

/// Fields pulled out of a provider message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Decimal amount string, thousands separators stripped, otherwise
    /// unvalidated.
    pub amount_raw: String,

    /// Phone number the money came from, verbatim digits.
    pub sender_number: String,

    /// Provider-assigned transaction identifier, verbatim digits.
    pub transaction_id: String,
}

/// Canonical transaction record, the unit forwarded and displayed.
///
/// Exists only when classification and extraction both succeeded; immutable
/// once constructed. Serializes to the backend wire contract in camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Decimal amount as a string, comma separators stripped.
    pub amount: String,

    /// Phone number the money came from.
    pub sender_number: String,

    /// Provider-assigned transaction identifier.
    pub transaction_id: String,

    /// Human-readable service label including the original sender address.
    pub service_provider: String,
}
