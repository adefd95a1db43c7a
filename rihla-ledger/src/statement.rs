use tracing::warn;

use rihla_core::{AffiliateStatement, LedgerEntry, LedgerStatement};

use crate::{merge, running_balances, summarize, summarize_split};

/// Build a full statement from already-normalized sources.
///
/// Runs merge, the running-balance pass and the independent aggregation,
/// then cross-checks that the final running balance equals the aggregate
/// outstanding. A mismatch means a sign rule diverged between the two
/// passes; it is logged loudly and the aggregate figure is kept.
pub fn compose<I>(sources: I) -> LedgerStatement
where
    I: IntoIterator<Item = Vec<LedgerEntry>>,
{
    let merged = merge(sources);
    let entries = running_balances(&merged);
    let totals = summarize(&merged);
    if let Some(last) = entries.last() {
        if last.running_balance != totals.outstanding {
            warn!(
                running = %last.running_balance,
                aggregate = %totals.outstanding,
                "statement cross-check failed: running balance diverges from totals"
            );
        }
    }
    LedgerStatement { entries, totals }
}

/// Thin parameterization layer for the four ledger screens.
///
/// Each screen feeds its active sources and, for the affiliate view,
/// requests the counterparty split; everything downstream is the same
/// pipeline.
#[derive(Debug, Default)]
pub struct StatementBuilder {
    sources: Vec<Vec<LedgerEntry>>,
    split_against: Option<String>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one normalized source. Empty sources are valid and contribute
    /// nothing.
    #[must_use]
    pub fn source(mut self, entries: Vec<LedgerEntry>) -> Self {
        self.sources.push(entries);
        self
    }

    /// Request the affiliate split, keyed by the agency's own name.
    #[must_use]
    pub fn split_against(mut self, agency_name: impl Into<String>) -> Self {
        self.split_against = Some(agency_name.into());
        self
    }

    /// Run the pipeline over the collected sources.
    pub fn build(self) -> (LedgerStatement, Option<AffiliateStatement>) {
        let split = self.split_against;
        let statement = compose(self.sources);
        let affiliate = split.map(|agency| {
            let entries: Vec<LedgerEntry> = statement
                .entries
                .iter()
                .map(|annotated| annotated.entry.clone())
                .collect();
            summarize_split(&entries, &agency)
        });
        (statement, affiliate)
    }
}
