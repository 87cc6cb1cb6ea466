//! Provider classification from the SMS sender address.

use std::fmt;

/// Mobile-money service inferred from the sender identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Digicel MonCash.
    MonCash,
    /// Natcom NatCash.
    NatCash,
    /// Sender matched no known provider.
    Unknown,
}

impl Provider {
    /// Human-readable service label, spelled the way the provider spells it.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::MonCash => "MonCash",
            Provider::NatCash => "Natcash",
            Provider::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a sender address into a provider.
///
/// Case-insensitive substring match; anything unrecognized is
/// [`Provider::Unknown`]. No side effects.
pub fn classify(sender: &str) -> Provider {
    let sender = sender.to_lowercase();
    if sender.contains("mon cash") {
        Provider::MonCash
    } else if sender.contains("natcash") {
        Provider::NatCash
    } else {
        Provider::Unknown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn moncash_senders_classify_in_any_case() {
        assert_eq!(classify("Mon Cash"), Provider::MonCash);
        assert_eq!(classify("MON CASH"), Provider::MonCash);
        assert_eq!(classify("Digicel mon cash alerts"), Provider::MonCash);
    }

    #[test]
    fn natcash_senders_classify_in_any_case() {
        assert_eq!(classify("Natcash"), Provider::NatCash);
        assert_eq!(classify("NATCASH"), Provider::NatCash);
        assert_eq!(classify("via natcash"), Provider::NatCash);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(classify(""), Provider::Unknown);
        assert_eq!(classify("50912345678"), Provider::Unknown);
        assert_eq!(classify("MonCash"), Provider::Unknown); // no space, not the sender id
        assert_eq!(classify("BankAlert"), Provider::Unknown);
    }

    #[test]
    fn labels_match_provider_spelling() {
        assert_eq!(Provider::MonCash.label(), "MonCash");
        assert_eq!(Provider::NatCash.label(), "Natcash");
    }
}
