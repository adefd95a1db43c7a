use futures::{stream, StreamExt};
use rust_decimal::Decimal;
use tracing::{info, warn};

use rihla_core::LedgerTotals;
use rihla_ledger::compose;
use rihla_sources::{normalize_invoice, normalize_wallet, LedgerApi, SourceResult};

use crate::filter::{default_settle_epsilon, ScopeFilter};
use crate::report::{AccountScope, RollupFailure, RollupReport};

const DEFAULT_CONCURRENCY: usize = 8;

/// Drives the pending-payments roll-up across many (customer, currency)
/// pairs.
///
/// Fetches fan out with bounded concurrency and are awaited
/// independently, so one slow or failing pair never blocks the rest.
/// A wallet-side failure degrades that pair to its invoice-only value;
/// an invoice-side failure is recorded in the report's failure list.
#[derive(Clone, Debug)]
pub struct RollupBuilder {
    concurrency: usize,
    epsilon: Decimal,
}

impl RollupBuilder {
    pub fn new() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            epsilon: default_settle_epsilon(),
        }
    }

    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Decimal) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Run the roll-up over the requested pairs.
    pub async fn collect(&self, api: &dyn LedgerApi, scopes: &[AccountScope]) -> RollupReport {
        let outcomes: Vec<(AccountScope, SourceResult<PairSnapshot>)> =
            stream::iter(scopes.iter().copied())
                .map(|scope| async move { (scope, fetch_pair(api, scope).await) })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        let filter = ScopeFilter::new(self.epsilon);
        let mut report = RollupReport::default();
        for (scope, outcome) in outcomes {
            match outcome {
                Ok(snapshot) => {
                    match filter.evaluate(scope, &snapshot.invoice, snapshot.wallet_payments) {
                        Some(row) => report.rows.push(row),
                        None => report.settled += 1,
                    }
                }
                Err(err) => {
                    warn!(
                        customer = %scope.customer,
                        currency = %scope.currency,
                        error = %err,
                        "invoice ledger fetch failed; pair excluded from roll-up"
                    );
                    report.failures.push(RollupFailure {
                        scope,
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
            .rows
            .sort_by_key(|row| (row.scope.customer, row.scope.currency));
        report.grand_total = report.rows.iter().map(|row| row.outstanding).sum();
        info!(
            pairs = scopes.len(),
            listed = report.rows.len(),
            settled = report.settled,
            failed = report.failures.len(),
            "roll-up complete"
        );
        report
    }
}

impl Default for RollupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time totals for one pair.
struct PairSnapshot {
    invoice: LedgerTotals,
    /// `None` when the wallet fetch failed.
    wallet_payments: Option<Decimal>,
}

async fn fetch_pair(api: &dyn LedgerApi, scope: AccountScope) -> SourceResult<PairSnapshot> {
    let (ledger, wallet) = tokio::join!(
        api.invoice_ledger(scope.customer, scope.currency),
        api.wallet_transactions(scope.customer, scope.currency)
    );
    let statement = compose([normalize_invoice(&ledger?)]);
    let invoice = statement.totals;
    let wallet_payments = match wallet {
        Ok(records) => Some(
            normalize_wallet(&records)
                .iter()
                .map(|entry| entry.amount)
                .sum(),
        ),
        Err(err) => {
            warn!(
                customer = %scope.customer,
                currency = %scope.currency,
                error = %err,
                "wallet fetch failed; using invoice-only outstanding"
            );
            None
        }
    };
    Ok(PairSnapshot {
        invoice,
        wallet_payments,
    })
}
