use chrono::NaiveDate;
use rihla_core::{EntryCategory, EntryTimestamp, LedgerEntry};
use rihla_ledger::{compose, merge, running_balances, summarize};
use rust_decimal_macros::dec;

fn on(year: i32, month: u32, day: u32) -> EntryTimestamp {
    EntryTimestamp::from_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

fn entry(category: EntryCategory, amount: rust_decimal::Decimal, when: EntryTimestamp) -> LedgerEntry {
    LedgerEntry::new(category, when, amount)
}

#[test]
fn simple_statement_scenario() {
    let statement = compose([vec![
        entry(EntryCategory::Charge, dec!(100), on(2024, 1, 1)),
        entry(EntryCategory::Payment, dec!(60), on(2024, 1, 5)),
        entry(EntryCategory::Refund, dec!(10), on(2024, 1, 6)),
    ]]);

    let balances: Vec<_> = statement
        .entries
        .iter()
        .map(|annotated| annotated.running_balance)
        .collect();
    assert_eq!(balances, [dec!(100), dec!(40), dec!(30)]);
    assert_eq!(statement.totals.charges, dec!(100));
    assert_eq!(statement.totals.paid, dec!(60));
    assert_eq!(statement.totals.refunds, dec!(10));
    assert_eq!(statement.totals.outstanding, dec!(30));
}

#[test]
fn running_balance_agrees_with_independent_totals() {
    // Deliberately unordered, multi-source, with fines in the mix.
    let residence = vec![
        entry(EntryCategory::Fine, dec!(35), on(2024, 2, 10)),
        entry(EntryCategory::Charge, dec!(900), on(2024, 2, 1)),
        entry(EntryCategory::FinePayment, dec!(35), on(2024, 2, 12)),
    ];
    let wallet = vec![entry(
        EntryCategory::WalletPayment,
        dec!(400),
        on(2024, 2, 5),
    )];
    let statement = compose([residence, wallet]);
    assert_eq!(
        statement.entries.last().unwrap().running_balance,
        statement.totals.outstanding
    );
    assert_eq!(statement.totals.outstanding, dec!(500));
}

#[test]
fn merge_is_stable_across_sources_on_equal_dates() {
    let a = entry(EntryCategory::Charge, dec!(1), on(2024, 3, 3)).with_label("A");
    let b = entry(EntryCategory::Charge, dec!(1), on(2024, 3, 9)).with_label("B");
    let c = entry(EntryCategory::Charge, dec!(1), on(2024, 3, 3)).with_label("C");
    let merged = merge([vec![a, b], vec![c]]);
    let labels: Vec<&str> = merged.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["A", "C", "B"]);
}

#[test]
fn stage_outputs_never_mutate_their_inputs() {
    let merged = merge([vec![
        entry(EntryCategory::Charge, dec!(10), on(2024, 4, 1)),
        entry(EntryCategory::Payment, dec!(4), on(2024, 4, 2)),
    ]]);
    let before: Vec<_> = merged.iter().map(|e| e.amount).collect();
    let _ = running_balances(&merged);
    let _ = summarize(&merged);
    let after: Vec<_> = merged.iter().map(|e| e.amount).collect();
    assert_eq!(before, after);
}
