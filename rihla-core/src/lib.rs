//! Core domain types shared by the Rihla ledger engine crates.

mod category;
mod entry;
mod ids;
mod time;
mod totals;

pub use category::{EntryCategory, SourceOrigin};
pub use entry::{AnnotatedEntry, LedgerEntry};
pub use ids::{CurrencyId, CustomerId};
pub use time::EntryTimestamp;
pub use totals::{AffiliateStatement, LedgerStatement, LedgerTotals};
