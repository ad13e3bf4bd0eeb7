use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::net::{Api, Transport, DEFAULT_BASE_URL};
use crate::resources::bulk_charges::BulkCharges;
use crate::resources::customers::Customers;
use crate::resources::direct_debit::DirectDebit;
use crate::resources::payment_pages::PaymentPages;
use crate::resources::plans::Plans;
use crate::resources::products::Products;
use crate::resources::refunds::Refunds;
use crate::resources::subscriptions::Subscriptions;
use crate::resources::transactions::Transactions;
use crate::resources::transfers::Transfers;
use crate::Error;

/// Entry point to every resource. Cloning is cheap; clones share one transport.
#[derive(Debug, Clone)]
pub struct PaystackClient {
    api: Api,
}

impl PaystackClient {
    /// Uses a default `reqwest::Client` against the production API.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, Error> {
        Self::builder(secret_key).build()
    }

    pub fn builder(secret_key: impl Into<String>) -> PaystackClientBuilder {
        PaystackClientBuilder {
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::builder(config.secret_key.as_str())
            .base_url(config.base_url.as_str())
            .http_client(http)
            .build()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn customers(&self) -> Customers {
        Customers::new(self.api.clone())
    }

    pub fn plans(&self) -> Plans {
        Plans::new(self.api.clone())
    }

    pub fn products(&self) -> Products {
        Products::new(self.api.clone())
    }

    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new(self.api.clone())
    }

    pub fn refunds(&self) -> Refunds {
        Refunds::new(self.api.clone())
    }

    pub fn payment_pages(&self) -> PaymentPages {
        PaymentPages::new(self.api.clone())
    }

    pub fn direct_debit(&self) -> DirectDebit {
        DirectDebit::new(self.api.clone())
    }

    pub fn bulk_charges(&self) -> BulkCharges {
        BulkCharges::new(self.api.clone())
    }

    pub fn transfers(&self) -> Transfers {
        Transfers::new(self.api.clone())
    }

    pub fn transactions(&self) -> Transactions {
        Transactions::new(self.api.clone())
    }
}

pub struct PaystackClientBuilder {
    secret_key: String,
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
}

impl PaystackClientBuilder {
    /// Point the client somewhere other than `https://api.paystack.co`, e.g. a proxy or a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(Arc::new(client))
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<PaystackClient, Error> {
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(reqwest::Client::new()) as Arc<dyn Transport>);
        let api = Api::new(transport, &self.secret_key, &self.base_url)?;
        Ok(PaystackClient { api })
    }
}
