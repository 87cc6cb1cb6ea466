//! MonCash (Digicel) receipt extraction.

use super::patterns::MONCASH_RECEIVED;
use super::strip_thousands;
use crate::models::message::ExtractedFields;

/// Extract fields from a MonCash receipt body.
pub(super) fn extract(body: &str) -> Option<ExtractedFields> {
    let caps = MONCASH_RECEIVED.captures(body)?;

    Some(ExtractedFields {
        amount_raw: strip_thousands(&caps[1]),
        sender_number: caps[2].to_string(),
        transaction_id: caps[3].to_string(),
    })
}
