use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AnnotatedEntry;

/// Aggregate sums per category for one account and currency scope.
///
/// `outstanding` is set by the aggregator when the totals are built;
/// [`LedgerTotals::net`] recomputes the same figure from the category
/// sums so callers can cross-check the two.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub charges: Decimal,
    pub paid: Decimal,
    pub refunds: Decimal,
    pub fine_charges: Decimal,
    pub fines_paid: Decimal,
    pub outstanding: Decimal,
}

impl LedgerTotals {
    /// Net amount owed, derived from the category sums.
    pub fn net(&self) -> Decimal {
        self.charges - self.paid - self.refunds + self.fine_charges - self.fines_paid
    }

    /// Whether the outstanding amount is zero within `epsilon`.
    pub fn is_settled(&self, epsilon: Decimal) -> bool {
        self.outstanding.abs() <= epsilon
    }
}

/// Full itemized statement for one account and currency scope.
///
/// Computed fresh from a point-in-time snapshot of the sources; never
/// persisted or updated in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LedgerStatement {
    /// Chronological entries, each carrying its post-transaction balance.
    pub entries: Vec<AnnotatedEntry>,
    pub totals: LedgerTotals,
}

impl LedgerStatement {
    /// True when no source contributed any activity.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Affiliate-ledger totals split by counterparty side.
///
/// `business` collects the rows booked under the agency's own name,
/// `affiliate` everything else; the combined outstanding is the affiliate
/// side net of the business side.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AffiliateStatement {
    pub affiliate: LedgerTotals,
    pub business: LedgerTotals,
    pub outstanding: Decimal,
}
