use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{EntryCategory, EntryTimestamp, SourceOrigin};

/// Canonical normalized transaction row shared by every ledger view.
///
/// `label` and the descriptive fields are carried verbatim for display;
/// balance logic reads only `category`, `occurred_at` and `amount`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub category: EntryCategory,
    pub occurred_at: EntryTimestamp,
    /// Non-negative magnitude; direction lives in `category`.
    pub amount: Decimal,
    pub label: String,
    pub subject_name: String,
    pub source_origin: SourceOrigin,
    pub identification: String,
    pub origin: String,
    pub destination: String,
}

impl LedgerEntry {
    /// Create an entry with empty display fields.
    ///
    /// The source origin defaults to the one implied by the category:
    /// wallet payments come from the wallet ledger, everything else from
    /// an invoice-shaped ledger.
    pub fn new(category: EntryCategory, occurred_at: EntryTimestamp, amount: Decimal) -> Self {
        let source_origin = match category {
            EntryCategory::WalletPayment => SourceOrigin::Wallet,
            _ => SourceOrigin::Invoice,
        };
        Self {
            category,
            occurred_at,
            amount,
            label: String::new(),
            subject_name: String::new(),
            source_origin,
            identification: String::new(),
            origin: String::new(),
            destination: String::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject_name: impl Into<String>) -> Self {
        self.subject_name = subject_name.into();
        self
    }

    #[must_use]
    pub fn with_identification(mut self, identification: impl Into<String>) -> Self {
        self.identification = identification.into();
        self
    }

    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source_origin: SourceOrigin) -> Self {
        self.source_origin = source_origin;
        self
    }

    /// Balance delta contributed by this entry.
    pub fn signed_amount(&self) -> Decimal {
        self.category.signed(self.amount)
    }
}

/// Ledger entry annotated with the account balance after it was applied.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedEntry {
    pub entry: LedgerEntry,
    pub running_balance: Decimal,
}
