use rust_decimal::Decimal;
use serde::Serialize;

use rihla_core::{CurrencyId, CustomerId};

/// One (customer, currency) pair in a roll-up computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct AccountScope {
    pub customer: CustomerId,
    pub currency: CurrencyId,
}

impl AccountScope {
    pub fn new(customer: CustomerId, currency: CurrencyId) -> Self {
        Self { customer, currency }
    }
}

/// Outstanding-balance line for one pair that survived the filter.
#[derive(Clone, Debug, Serialize)]
pub struct OutstandingRow {
    pub scope: AccountScope,
    /// Outstanding computed from the invoice-side ledger alone.
    pub invoice_outstanding: Decimal,
    /// Aggregate wallet `payment` sum netted against the invoice side.
    pub wallet_payments: Decimal,
    /// Net outstanding after the wallet subtraction.
    pub outstanding: Decimal,
    /// Wallet data could not be fetched; the row is invoice-only.
    pub wallet_unavailable: bool,
    /// Wallet payments exceeded the invoice outstanding by more than the
    /// settle epsilon. Kept visible rather than clamped.
    pub overshoot: bool,
}

/// Pair whose invoice-side fetch failed outright.
#[derive(Clone, Debug, Serialize)]
pub struct RollupFailure {
    pub scope: AccountScope,
    pub reason: String,
}

/// Aggregated pending-payments view across every requested pair.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RollupReport {
    /// Pairs with a real balance, ordered by customer then currency.
    pub rows: Vec<OutstandingRow>,
    /// Sum of the surviving rows' outstanding amounts.
    pub grand_total: Decimal,
    /// Pairs discarded because their net outstanding was within epsilon.
    pub settled: usize,
    /// Pairs that produced no row at all; never silently dropped.
    pub failures: Vec<RollupFailure>,
}

impl RollupReport {
    /// True when every requested pair either settled or failed.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
