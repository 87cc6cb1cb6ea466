//! NatCash (Natcom) receipt extraction.
//!
//! Natcom has sent at least two phrasings of the receipt notification over
//! time, one French and one Creole, and which one is current is not settled.
//! Both are attempted in order, first match wins.

use regex::Regex;

use super::patterns::{NATCASH_RECEIVED_FR, NATCASH_RECEIVED_HT};
use super::strip_thousands;
use crate::models::message::ExtractedFields;

/// Extract fields from a NatCash receipt body, trying every known phrasing.
pub(super) fn extract(body: &str) -> Option<ExtractedFields> {
    let candidates: [&Regex; 2] = [&NATCASH_RECEIVED_FR, &NATCASH_RECEIVED_HT];

    candidates.iter().find_map(|pattern| {
        pattern.captures(body).map(|caps| ExtractedFields {
            amount_raw: strip_thousands(&caps[1]),
            sender_number: caps[2].to_string(),
            transaction_id: caps[3].to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extracts_french_phrasing() {
        let body = "Vous avez reçu 2,000 HTG de 50987654321. TransCode: 112233";

        let fields = extract(body).unwrap();
        assert_eq!(fields.amount_raw, "2000");
        assert_eq!(fields.sender_number, "50987654321");
        assert_eq!(fields.transaction_id, "112233");
    }

    #[test]
    fn extracts_creole_phrasing() {
        let body = "Ou resevwa 2,000 HTG nan men 50987654321. Transcode: 112233";

        let fields = extract(body).unwrap();
        assert_eq!(fields.amount_raw, "2000");
        assert_eq!(fields.sender_number, "50987654321");
        assert_eq!(fields.transaction_id, "112233");
    }

    #[test]
    fn both_phrasings_agree_on_the_same_transaction() {
        let french = extract("Vous avez reçu 2,000 HTG de 50987654321. TransCode: 112233");
        let creole = extract("Ou resevwa 2,000 HTG nan men 50987654321. Transcode: 112233");

        assert_eq!(french, creole);
    }

    #[test]
    fn tolerates_mangled_accented_verb() {
        // "reçu" frequently arrives with the ç replaced or double-encoded.
        let bodies = [
            "Vous avez re?u 500 HTG de 50911122233. TransCode: 9",
            "Vous avez reA§u 500 HTG de 50911122233. TransCode: 9",
        ];

        for body in bodies {
            let fields = extract(body).unwrap();
            assert_eq!(fields.amount_raw, "500");
            assert_eq!(fields.sender_number, "50911122233");
        }
    }

    #[test]
    fn accepts_short_and_long_phone_numbers() {
        // Natcom numbers show up both as 8-digit local and full MSISDN.
        let local = extract("Vous avez reçu 100 HTG de 87654321. TransCode: 5").unwrap();
        assert_eq!(local.sender_number, "87654321");

        let full = extract("Vous avez reçu 100 HTG de 509876543210123. TransCode: 5").unwrap();
        assert_eq!(full.sender_number, "509876543210123");
    }

    #[test]
    fn unmatched_bodies_extract_nothing() {
        assert_eq!(extract("Ou voye 2,000 HTG bay 50987654321. Transcode: 112233"), None);
        assert_eq!(extract("Vous avez reçu 2,000 HTG"), None);
        assert_eq!(extract(""), None);
    }
}
