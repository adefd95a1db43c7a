use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a normalized ledger entry.
///
/// The category alone decides the direction of the balance movement;
/// amounts are always non-negative magnitudes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryCategory {
    Charge,
    Payment,
    Refund,
    Fine,
    FinePayment,
    WalletPayment,
}

impl EntryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryCategory::Charge => "charge",
            EntryCategory::Payment => "payment",
            EntryCategory::Refund => "refund",
            EntryCategory::Fine => "fine",
            EntryCategory::FinePayment => "fine_payment",
            EntryCategory::WalletPayment => "wallet_payment",
        }
    }

    /// Whether the category increases the amount the customer owes.
    pub fn is_debit(self) -> bool {
        matches!(self, EntryCategory::Charge | EntryCategory::Fine)
    }

    /// Apply this category's sign convention to a magnitude.
    pub fn signed(self, amount: Decimal) -> Decimal {
        if self.is_debit() {
            amount
        } else {
            -amount
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charge" => Ok(EntryCategory::Charge),
            "payment" => Ok(EntryCategory::Payment),
            "refund" => Ok(EntryCategory::Refund),
            "fine" => Ok(EntryCategory::Fine),
            "fine_payment" => Ok(EntryCategory::FinePayment),
            "wallet_payment" => Ok(EntryCategory::WalletPayment),
            other => Err(format!("unknown entry category: {other}")),
        }
    }
}

/// Which upstream system produced an entry.
///
/// Needed by the roll-up view to recognize wallet-funded settlements that
/// would otherwise be double-counted against invoice charges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOrigin {
    Invoice,
    Wallet,
}

impl SourceOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceOrigin::Invoice => "invoice",
            SourceOrigin::Wallet => "wallet",
        }
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn debit_categories_keep_their_sign() {
        assert_eq!(EntryCategory::Charge.signed(dec!(100)), dec!(100));
        assert_eq!(EntryCategory::Fine.signed(dec!(25)), dec!(25));
    }

    #[test]
    fn credit_categories_negate() {
        for category in [
            EntryCategory::Payment,
            EntryCategory::Refund,
            EntryCategory::FinePayment,
            EntryCategory::WalletPayment,
        ] {
            assert_eq!(category.signed(dec!(40)), dec!(-40));
        }
    }

    #[test]
    fn round_trips_through_str() {
        for category in [
            EntryCategory::Charge,
            EntryCategory::Payment,
            EntryCategory::Refund,
            EntryCategory::Fine,
            EntryCategory::FinePayment,
            EntryCategory::WalletPayment,
        ] {
            assert_eq!(category.as_str().parse::<EntryCategory>(), Ok(category));
        }
    }
}
