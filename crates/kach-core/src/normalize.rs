//! Canonical transaction record construction.

use crate::models::message::{ExtractedFields, TransactionRecord};
use crate::provider::Provider;

/// Build the canonical record for an accepted message.
///
/// `service_provider` carries both the service label and the original sender
/// address. No further validation happens here: the amount stays the string
/// the extractor produced, and the same inputs always build the same record.
pub fn normalize(provider: Provider, fields: ExtractedFields, sender: &str) -> TransactionRecord {
    TransactionRecord {
        amount: fields.amount_raw,
        sender_number: fields.sender_number,
        transaction_id: fields.transaction_id,
        service_provider: format!("{} ({})", provider.label(), sender),
    }
}
