use httpmock::prelude::*;
use serde_json::json;

use rihla_core::{CurrencyId, CustomerId};
use rihla_sources::{normalize_invoice, LedgerApi, RestLedgerClient, SourceError};
use rust_decimal_macros::dec;

#[tokio::test]
async fn fetches_and_decodes_an_invoice_ledger() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/customers/7/ledger")
                .query_param("currency", "2")
                .header("authorization", "Bearer secret-token");
            then.status(200).json_body(json!([
                {
                    "TRANSACTION_Type": "Ticket",
                    "Passenger_Name": "Amina Khalid",
                    "date": "2024-01-01",
                    "Debit": 320,
                    "Credit": 0
                },
                {
                    "TRANSACTION_Type": "Payment",
                    "date": "2024-01-05",
                    "Debit": 0,
                    "Credit": "320.00"
                }
            ]));
        })
        .await;

    let client =
        RestLedgerClient::new(server.base_url()).with_auth_token("secret-token");
    let records = client
        .invoice_ledger(CustomerId(7), CurrencyId(2))
        .await
        .unwrap();
    mock.assert_async().await;

    let entries = normalize_invoice(&records);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].amount, dec!(320));
    assert_eq!(entries[1].amount, dec!(320.00));
}

#[tokio::test]
async fn surfaces_http_errors_as_status_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/9/wallet/transactions");
            then.status(503);
        })
        .await;

    let client = RestLedgerClient::new(server.base_url());
    let err = client
        .wallet_transactions(CustomerId(9), CurrencyId(1))
        .await
        .unwrap_err();
    match err {
        SourceError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn surfaces_malformed_bodies_as_decode_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/3/ledger");
            then.status(200).body("not json");
        })
        .await;

    let client = RestLedgerClient::new(server.base_url());
    let err = client
        .invoice_ledger(CustomerId(3), CurrencyId(1))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}
