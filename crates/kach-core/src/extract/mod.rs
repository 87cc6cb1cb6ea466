//! Provider-specific field extraction.
//!
//! One pattern set per provider, dispatched over the closed [`Provider`]
//! enum; adding a provider means adding a variant and its pattern set here.
//! Extraction is pure and never fails loudly: a body that matches no
//! candidate pattern yields `None`, and the caller decides what to log.

mod moncash;
mod natcash;
pub mod patterns;

use crate::models::message::ExtractedFields;
use crate::provider::Provider;

/// Extract transaction fields from a message body classified as `provider`.
///
/// Returns `None` when no candidate pattern for the provider matches, and
/// always for [`Provider::Unknown`]. Partial matches are never returned.
pub fn extract(provider: Provider, body: &str) -> Option<ExtractedFields> {
    match provider {
        Provider::MonCash => moncash::extract(body),
        Provider::NatCash => natcash::extract(body),
        Provider::Unknown => None,
    }
}

/// Strip the comma thousands separators providers put in formatted amounts.
fn strip_thousands(amount: &str) -> String {
    amount.replace(',', "")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_provider_extracts_nothing() {
        let body = "You have received G1,234.56 with MonCash from 50912345678. Txn ID: 987654";
        assert_eq!(extract(Provider::Unknown, body), None);
    }

    #[test]
    fn provider_dispatch_is_strict() {
        // A MonCash body run through the NatCash pattern set must not match.
        let body = "You have received G1,234.56 with MonCash from 50912345678. Txn ID: 987654";
        assert_eq!(extract(Provider::NatCash, body), None);
    }

    #[test]
    fn strip_thousands_only_touches_commas() {
        assert_eq!(strip_thousands("1,234.56"), "1234.56");
        assert_eq!(strip_thousands("2000"), "2000");
    }
}
