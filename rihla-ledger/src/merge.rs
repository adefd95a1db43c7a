use rihla_core::LedgerEntry;

/// Merge entries from several sources into one chronological sequence.
///
/// Sources are concatenated in caller order and stably sorted by
/// `occurred_at`, so entries sharing a timestamp keep their relative input
/// order. The source systems expose no reliable secondary key; preserving
/// input order on ties is deliberate policy, not an accident of the sort.
pub fn merge<I>(sources: I) -> Vec<LedgerEntry>
where
    I: IntoIterator<Item = Vec<LedgerEntry>>,
{
    let mut merged: Vec<LedgerEntry> = sources.into_iter().flatten().collect();
    merged.sort_by_key(|entry| entry.occurred_at);
    merged
}
