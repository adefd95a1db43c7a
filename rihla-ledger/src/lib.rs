//! Statement reconciliation engine for the Rihla back office.
//!
//! The pipeline is strictly downstream: normalized entries from the source
//! adapters are merged chronologically, annotated with running balances,
//! and reduced into aggregate totals. Every stage returns a fresh value;
//! nothing is mutated in place, so a statement can be recomputed from any
//! point-in-time snapshot of the sources.

mod aggregate;
mod balance;
mod merge;
mod statement;

pub use aggregate::{summarize, summarize_split};
pub use balance::running_balances;
pub use merge::merge;
pub use statement::{compose, StatementBuilder};
