use rust_decimal::Decimal;
use tracing::warn;

use rihla_core::LedgerTotals;

use crate::report::{AccountScope, OutstandingRow};

/// Default tolerance under which a pair counts as settled: one cent of
/// the target currency.
pub fn default_settle_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

/// Nets invoice-side outstanding amounts against wallet payments and
/// decides which pairs belong in the roll-up.
///
/// A wallet payment that settled an invoice charge appears twice across
/// the two systems: as a wallet debit and as an invoice charge still
/// looking unpaid. The aggregate wallet `payment` sum for the pair is
/// subtracted from the invoice outstanding so that settlement is counted
/// once. Matching by aggregate amount is the conservative default; when
/// the subtraction overshoots past the epsilon the row is flagged and
/// kept negative instead of being clamped.
#[derive(Clone, Copy, Debug)]
pub struct ScopeFilter {
    epsilon: Decimal,
}

impl ScopeFilter {
    pub fn new(epsilon: Decimal) -> Self {
        Self { epsilon }
    }

    /// Evaluate one pair. `wallet_payments` is `None` when the wallet
    /// fetch failed, in which case the invoice-only value stands.
    /// Returns `None` for pairs whose net outstanding is within epsilon.
    pub fn evaluate(
        &self,
        scope: AccountScope,
        invoice: &LedgerTotals,
        wallet_payments: Option<Decimal>,
    ) -> Option<OutstandingRow> {
        let wallet_unavailable = wallet_payments.is_none();
        let wallet_payments = wallet_payments.unwrap_or(Decimal::ZERO);
        let outstanding = invoice.outstanding - wallet_payments;
        if outstanding.abs() <= self.epsilon {
            return None;
        }
        let overshoot = outstanding < -self.epsilon && !wallet_payments.is_zero();
        if overshoot {
            warn!(
                customer = %scope.customer,
                currency = %scope.currency,
                invoice = %invoice.outstanding,
                wallet = %wallet_payments,
                "wallet payments exceed invoice outstanding"
            );
        }
        Some(OutstandingRow {
            scope,
            invoice_outstanding: invoice.outstanding,
            wallet_payments,
            outstanding,
            wallet_unavailable,
            overshoot,
        })
    }
}

impl Default for ScopeFilter {
    fn default() -> Self {
        Self::new(default_settle_epsilon())
    }
}
