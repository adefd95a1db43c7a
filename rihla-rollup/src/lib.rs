//! Pending-payments roll-up for the Rihla back office.
//!
//! Runs the statement pipeline once per (customer, currency) pair, nets
//! wallet-funded settlements out of the invoice-side outstanding, drops
//! settled pairs, and sums the remainder into a grand total. Partial
//! results are preferred over none: per-pair failures degrade or are
//! reported, never aborted on.

mod collect;
mod filter;
mod report;

pub use collect::RollupBuilder;
pub use filter::{default_settle_epsilon, ScopeFilter};
pub use report::{AccountScope, OutstandingRow, RollupFailure, RollupReport};
