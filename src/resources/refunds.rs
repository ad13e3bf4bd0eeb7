use crate::data::{NullBool, NullInt, NullString, NullTime, Nullable};
use crate::models::{Expandable, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::resources::transactions::Transaction;
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASIS: &str = "refund";

#[derive(Debug, Clone)]
pub struct Refunds {
    api: Api,
}

impl Refunds {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreateRefundRequest) -> Result<Response<Refund>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListRefundsRequest) -> Result<Response<Vec<Refund>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id: &str) -> Result<Response<Refund>, Error> {
        self.api.get(&[BASIS, id], None).await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Expandable<Transaction>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub dispute: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub deducted_amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub channel: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub fully_deducted: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub refunded_by: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub refunded_at: NullTime,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub expected_at: NullTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub customer_note: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub merchant_note: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRefundRequest {
    transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merchant_note: Option<String>,
}

impl CreateRefundRequest {
    /// `transaction` is the reference or id of the transaction to refund.
    pub fn builder(transaction: impl Into<String>) -> CreateRefundRequestBuilder {
        CreateRefundRequestBuilder {
            inner: Self {
                transaction: transaction.into(),
                amount: None,
                currency: None,
                customer_note: None,
                merchant_note: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreateRefundRequestBuilder {
    inner: CreateRefundRequest,
}

impl CreateRefundRequestBuilder {
    /// Partial refund amount; the full transaction amount when unset.
    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn customer_note(mut self, note: impl Into<String>) -> Self {
        self.inner.customer_note = Some(note.into());
        self
    }

    pub fn merchant_note(mut self, note: impl Into<String>) -> Self {
        self.inner.merchant_note = Some(note.into());
        self
    }

    pub fn build(self) -> CreateRefundRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRefundsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

impl ListRefundsRequest {
    pub fn builder() -> ListRefundsRequestBuilder {
        ListRefundsRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListRefundsRequestBuilder {
    inner: ListRefundsRequest,
}

impl ListRefundsRequestBuilder {
    pub fn transaction(mut self, transaction: impl Into<String>) -> Self {
        self.inner.transaction = Some(transaction.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.inner.from = Some(from);
        self
    }

    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.inner.to = Some(to);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.inner.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.inner.page = Some(page);
        self
    }

    pub fn build(self) -> ListRefundsRequest {
        self.inner
    }
}
