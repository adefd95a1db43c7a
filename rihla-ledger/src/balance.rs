use rust_decimal::Decimal;

use rihla_core::{AnnotatedEntry, LedgerEntry};

/// Annotate a merged sequence with post-transaction running balances.
///
/// Single left-to-right pass: the accumulator starts at zero and each
/// entry's `running_balance` is the value after applying that entry's
/// signed amount. The input is left untouched; a fresh annotated vector
/// is returned.
pub fn running_balances(entries: &[LedgerEntry]) -> Vec<AnnotatedEntry> {
    let mut balance = Decimal::ZERO;
    entries
        .iter()
        .map(|entry| {
            balance += entry.signed_amount();
            AnnotatedEntry {
                entry: entry.clone(),
                running_balance: balance,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rihla_core::{EntryCategory, EntryTimestamp};
    use rust_decimal_macros::dec;

    fn entry(category: EntryCategory, amount: Decimal) -> LedgerEntry {
        LedgerEntry::new(category, EntryTimestamp::unknown(), amount)
    }

    #[test]
    fn single_charge_is_positive() {
        let annotated = running_balances(&[entry(EntryCategory::Charge, dec!(100))]);
        assert_eq!(annotated[0].running_balance, dec!(100));
    }

    #[test]
    fn single_payment_is_negative() {
        let annotated = running_balances(&[entry(EntryCategory::Payment, dec!(100))]);
        assert_eq!(annotated[0].running_balance, dec!(-100));
    }

    #[test]
    fn balance_is_post_transaction() {
        let annotated = running_balances(&[
            entry(EntryCategory::Charge, dec!(100)),
            entry(EntryCategory::Payment, dec!(60)),
            entry(EntryCategory::Refund, dec!(10)),
        ]);
        let balances: Vec<Decimal> = annotated.iter().map(|a| a.running_balance).collect();
        assert_eq!(balances, [dec!(100), dec!(40), dec!(30)]);
    }

    #[test]
    fn fines_raise_and_fine_payments_lower() {
        let annotated = running_balances(&[
            entry(EntryCategory::Fine, dec!(50)),
            entry(EntryCategory::FinePayment, dec!(20)),
            entry(EntryCategory::WalletPayment, dec!(30)),
        ]);
        let balances: Vec<Decimal> = annotated.iter().map(|a| a.running_balance).collect();
        assert_eq!(balances, [dec!(50), dec!(30), dec!(0)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(running_balances(&[]).is_empty());
    }
}
