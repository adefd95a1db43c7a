use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use rihla_core::{CurrencyId, CustomerId};

use crate::error::{SourceError, SourceResult};
use crate::records::{InvoiceLedgerRecord, WalletTransactionRecord};

/// Remote back-office endpoints the engine reads from.
///
/// The trait is the seam for the roll-up driver and for tests; the
/// production implementation is [`RestLedgerClient`].
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Raw invoice-ledger rows for one customer and currency scope.
    async fn invoice_ledger(
        &self,
        customer: CustomerId,
        currency: CurrencyId,
    ) -> SourceResult<Vec<InvoiceLedgerRecord>>;

    /// Raw wallet movements for one customer and currency scope.
    async fn wallet_transactions(
        &self,
        customer: CustomerId,
        currency: CurrencyId,
    ) -> SourceResult<Vec<WalletTransactionRecord>>;
}

/// REST client for the agency back-office API.
#[derive(Clone, Debug)]
pub struct RestLedgerClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestLedgerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T>(&self, path: &str, currency: CurrencyId) -> SourceResult<T>
    where
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        let mut request = self
            .client
            .get(&endpoint)
            .query(&[("currency", currency.0)]);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status, endpoint });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LedgerApi for RestLedgerClient {
    async fn invoice_ledger(
        &self,
        customer: CustomerId,
        currency: CurrencyId,
    ) -> SourceResult<Vec<InvoiceLedgerRecord>> {
        debug!(%customer, %currency, "fetching invoice ledger");
        self.get_json(&format!("customers/{customer}/ledger"), currency)
            .await
    }

    async fn wallet_transactions(
        &self,
        customer: CustomerId,
        currency: CurrencyId,
    ) -> SourceResult<Vec<WalletTransactionRecord>> {
        debug!(%customer, %currency, "fetching wallet transactions");
        self.get_json(
            &format!("customers/{customer}/wallet/transactions"),
            currency,
        )
        .await
    }
}
