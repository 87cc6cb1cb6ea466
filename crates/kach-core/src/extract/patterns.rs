//! Compiled receipt patterns for the known providers.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// MonCash receipt notification, optional "G" currency marker before the
    /// amount.
    pub static ref MONCASH_RECEIVED: Regex = Regex::new(
        r"(?i)You have received (?:G)?([\d,]+(?:\.\d{2})?) with MonCash from (\d+)\. Txn ID: (\d+)"
    ).unwrap();

    // The accented verb in "Vous avez reçu" arrives mangled on some
    // handsets, so the characters between "re" and "u" are matched loosely.
    pub static ref NATCASH_RECEIVED_FR: Regex = Regex::new(
        r"(?is)avez\s+re.{1,3}u\s+([\d,]+(?:\.\d{2})?)\s*HTG.*?\b(\d{8,15})\b.*?TransCode\s*:\s*(\d+)"
    ).unwrap();

    /// NatCash receipt notification, Creole phrasing.
    pub static ref NATCASH_RECEIVED_HT: Regex = Regex::new(
        r"(?is)resevwa\s+([\d,]+(?:\.\d{2})?)\s*HTG.*?nan.*?\b(\d{8,15})\b.*?Transcode\s*:\s*(\d+)"
    ).unwrap();
}
