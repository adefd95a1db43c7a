//! Pure mapping from provider record shapes onto [`LedgerEntry`].
//!
//! Adapters are total: a malformed record still yields an entry (amount
//! zero, timestamp unknown) so the row stays visible in the statement.

use rihla_core::{EntryCategory, EntryTimestamp, LedgerEntry};

use crate::records::{InvoiceLedgerRecord, WalletTransactionRecord, WalletTransactionType};

/// Normalize invoice-ledger rows for the customer ledger screen.
pub fn normalize_invoice(records: &[InvoiceLedgerRecord]) -> Vec<LedgerEntry> {
    records
        .iter()
        .map(|record| invoice_entry(record, invoice_category(&record.transaction_type)))
        .collect()
}

/// Normalize residence-ledger rows. Same shape as the invoice ledger,
/// with residence fines carrying their own category.
pub fn normalize_residence(records: &[InvoiceLedgerRecord]) -> Vec<LedgerEntry> {
    records
        .iter()
        .map(|record| invoice_entry(record, residence_category(&record.transaction_type)))
        .collect()
}

/// Normalize affiliate-ledger rows. The affiliate feed reuses the invoice
/// shape; the business-versus-affiliate split happens downstream on
/// subject identity, so the mapping is the invoice one.
pub fn normalize_affiliate(records: &[InvoiceLedgerRecord]) -> Vec<LedgerEntry> {
    normalize_invoice(records)
}

/// Normalize wallet movements for the customer ledger.
///
/// Only `payment` rows settle invoice charges; deposits, withdrawals and
/// wallet refunds are dropped here because they move the wallet balance,
/// not the invoice ledger. The originating reference is folded into the
/// identification and label for traceability.
pub fn normalize_wallet(records: &[WalletTransactionRecord]) -> Vec<LedgerEntry> {
    records
        .iter()
        .filter(|record| record.transaction_type == WalletTransactionType::Payment)
        .map(wallet_entry)
        .collect()
}

fn invoice_category(kind: &str) -> EntryCategory {
    match kind.trim() {
        "Payment" | "Residence Payment" => EntryCategory::Payment,
        "Refund" => EntryCategory::Refund,
        "Residence Fine Payment" => EntryCategory::FinePayment,
        _ => EntryCategory::Charge,
    }
}

fn residence_category(kind: &str) -> EntryCategory {
    match kind.trim() {
        "Residence Fine" => EntryCategory::Fine,
        other => invoice_category(other),
    }
}

fn invoice_entry(record: &InvoiceLedgerRecord, category: EntryCategory) -> LedgerEntry {
    // One side is non-zero in practice; prefer the debit side when both
    // are populated rather than guessing.
    let magnitude = if record.debit.is_zero() {
        record.credit
    } else {
        record.debit
    };
    LedgerEntry::new(category, EntryTimestamp::parse(&record.date), magnitude.abs())
        .with_label(record.transaction_type.trim())
        .with_subject(record.passenger_name.trim())
        .with_identification(record.identification.trim())
        .with_route(record.origin.trim(), record.destination.trim())
}

fn wallet_entry(record: &WalletTransactionRecord) -> LedgerEntry {
    let reference = wallet_reference(record);
    let label = if reference.is_empty() {
        "Wallet Payment".to_string()
    } else {
        format!("Wallet Payment ({reference})")
    };
    LedgerEntry::new(
        EntryCategory::WalletPayment,
        EntryTimestamp::parse(&record.datetime),
        record.amount.abs(),
    )
    .with_label(label)
    .with_identification(reference)
}

fn wallet_reference(record: &WalletTransactionRecord) -> String {
    let kind = record.reference_type.trim();
    match (kind.is_empty(), record.reference_id) {
        (false, Some(id)) => format!("{kind} #{id}"),
        (false, None) => kind.to_string(),
        (true, Some(id)) => format!("#{id}"),
        (true, None) => String::new(),
    }
}
