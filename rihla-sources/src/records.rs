use rust_decimal::Decimal;
use serde::Deserialize;

use rihla_core::CurrencyId;

use crate::de;

/// Raw invoice-ledger row as returned by the back-office API.
///
/// Field names mirror the wire contract verbatim, including the
/// provider's `Orgin` spelling. Every field decodes leniently so one
/// malformed value never rejects the record.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InvoiceLedgerRecord {
    #[serde(rename = "TRANSACTION_Type", default, deserialize_with = "de::lenient_string")]
    pub transaction_type: String,
    #[serde(rename = "Passenger_Name", default, deserialize_with = "de::lenient_string")]
    pub passenger_name: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub date: String,
    #[serde(rename = "Identification", default, deserialize_with = "de::lenient_string")]
    pub identification: String,
    #[serde(rename = "Orgin", default, deserialize_with = "de::lenient_string")]
    pub origin: String,
    #[serde(rename = "Destination", default, deserialize_with = "de::lenient_string")]
    pub destination: String,
    #[serde(rename = "Debit", default, deserialize_with = "de::lenient_decimal")]
    pub debit: Decimal,
    #[serde(rename = "Credit", default, deserialize_with = "de::lenient_decimal")]
    pub credit: Decimal,
}

/// Raw wallet movement as returned by the back-office API.
#[derive(Clone, Debug, Deserialize)]
pub struct WalletTransactionRecord {
    #[serde(default)]
    pub transaction_type: WalletTransactionType,
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub amount: Decimal,
    pub currency_id: CurrencyId,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Option<i64>,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub datetime: String,
}

/// Wallet movement kinds. Only `payment` reaches the customer ledger;
/// deposits and withdrawals move the wallet balance, not the invoices.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WalletTransactionType {
    Deposit,
    Refund,
    Payment,
    Withdrawal,
    #[default]
    Unknown,
}

impl<'de> serde::Deserialize<'de> for WalletTransactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.trim().to_ascii_lowercase().as_str() {
            "deposit" => Self::Deposit,
            "refund" => Self::Refund,
            "payment" => Self::Payment,
            "withdrawal" => Self::Withdrawal,
            _ => Self::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn decodes_a_well_formed_invoice_row() {
        let record: InvoiceLedgerRecord = serde_json::from_str(
            r#"{
                "TRANSACTION_Type": "Payment",
                "Passenger_Name": "Amina Khalid",
                "date": "2024-01-05",
                "Identification": "VIS-1021",
                "Orgin": "DXB",
                "Destination": "CAI",
                "Debit": 0,
                "Credit": "1,200.00"
            }"#,
        )
        .unwrap();
        assert_eq!(record.transaction_type, "Payment");
        assert_eq!(record.credit, dec!(1200.00));
        assert_eq!(record.debit, Decimal::ZERO);
        assert_eq!(record.origin, "DXB");
    }

    #[test]
    fn malformed_fields_degrade_without_rejecting_the_record() {
        let record: InvoiceLedgerRecord = serde_json::from_str(
            r#"{
                "TRANSACTION_Type": "Ticket",
                "date": null,
                "Debit": "n/a",
                "Credit": null
            }"#,
        )
        .unwrap();
        assert_eq!(record.transaction_type, "Ticket");
        assert_eq!(record.passenger_name, "");
        assert_eq!(record.debit, Decimal::ZERO);
        assert_eq!(record.credit, Decimal::ZERO);
    }

    #[test]
    fn unknown_wallet_kinds_map_to_the_unknown_variant() {
        let record: WalletTransactionRecord = serde_json::from_str(
            r#"{
                "transaction_type": "chargeback",
                "amount": 10,
                "currency_id": 2,
                "datetime": "2024-01-01 09:00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(record.transaction_type, WalletTransactionType::Unknown);
        assert_eq!(record.currency_id, CurrencyId(2));
    }
}
