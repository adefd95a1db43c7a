use rihla_core::{AffiliateStatement, EntryCategory, LedgerEntry, LedgerTotals};

/// Reduce a sequence into per-category totals.
///
/// Sums are accumulated independently of the running-balance pass so the
/// two outstanding figures can be cross-checked instead of trivially
/// agreeing by construction.
pub fn summarize(entries: &[LedgerEntry]) -> LedgerTotals {
    summarize_iter(entries.iter())
}

fn summarize_iter<'a, I>(entries: I) -> LedgerTotals
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    let mut totals = LedgerTotals::default();
    for entry in entries {
        match entry.category {
            EntryCategory::Charge => totals.charges += entry.amount,
            EntryCategory::Payment | EntryCategory::WalletPayment => totals.paid += entry.amount,
            EntryCategory::Refund => totals.refunds += entry.amount,
            EntryCategory::Fine => totals.fine_charges += entry.amount,
            EntryCategory::FinePayment => totals.fines_paid += entry.amount,
        }
    }
    totals.outstanding = totals.net();
    totals
}

/// Affiliate-ledger variant: split the totals by counterparty side.
///
/// Rows whose subject matches the agency's own name are the business
/// side; everything else belongs to the external affiliate. The combined
/// outstanding is the affiliate side net of the business side. The split
/// key is subject identity, never the entry category.
pub fn summarize_split(entries: &[LedgerEntry], agency_name: &str) -> AffiliateStatement {
    let agency = agency_name.trim();
    let (business, affiliate): (Vec<&LedgerEntry>, Vec<&LedgerEntry>) = entries
        .iter()
        .partition(|entry| entry.subject_name.trim().eq_ignore_ascii_case(agency));
    let affiliate = summarize_iter(affiliate);
    let business = summarize_iter(business);
    let outstanding = affiliate.outstanding - business.outstanding;
    AffiliateStatement {
        affiliate,
        business,
        outstanding,
    }
}
