//! Source adapters for the Rihla ledger engine.
//!
//! Each upstream system (invoice ledger, residence ledger, affiliate
//! ledger, wallet) gets a pure, total `normalize_*` function mapping its
//! record shape onto the common [`rihla_core::LedgerEntry`], plus the
//! REST client that fetches the raw records.

mod adapters;
mod client;
mod de;
mod error;
mod records;

pub use adapters::{
    normalize_affiliate, normalize_invoice, normalize_residence, normalize_wallet,
};
pub use client::{LedgerApi, RestLedgerClient};
pub use error::{SourceError, SourceResult};
pub use records::{InvoiceLedgerRecord, WalletTransactionRecord, WalletTransactionType};
