use crate::data::{NullInt, NullString, Nullable};
use crate::models::{Authorization, Customer, Expandable, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::resources::transactions::Transaction;
use crate::resources::ListRequest;
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASIS: &str = "bulkcharge";

#[derive(Debug, Clone)]
pub struct BulkCharges {
    api: Api,
}

impl BulkCharges {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Queues a batch of charges against previously saved authorizations.
    pub async fn initiate(&self, charges: &[BulkChargeItem]) -> Result<Response<BulkChargeBatch>, Error> {
        self.api.post(&[BASIS], charges).await
    }

    pub async fn list(&self, request: &ListRequest) -> Result<Response<Vec<BulkChargeBatch>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<BulkChargeBatch>, Error> {
        self.api.get(&[BASIS, id_or_code], None).await
    }

    pub async fn fetch_charges(
        &self,
        id_or_code: &str,
        request: &ListBatchChargesRequest,
    ) -> Result<Response<Vec<BulkCharge>>, Error> {
        self.api
            .get(&[BASIS, id_or_code, "charges"], serialize_query(request)?)
            .await
    }

    pub async fn pause(&self, batch_code: &str) -> Result<Response<serde_json::Value>, Error> {
        self.api.get(&[BASIS, "pause", batch_code], None).await
    }

    pub async fn resume(&self, batch_code: &str) -> Result<Response<serde_json::Value>, Error> {
        self.api.get(&[BASIS, "resume", batch_code], None).await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkChargeBatch {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub batch_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reference: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub total_charges: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub pending_charges: NullInt,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkCharge {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bulkcharge: NullInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Expandable<Transaction>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// One entry of the array sent to [`BulkCharges::initiate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkChargeItem {
    authorization: String,
    amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
}

impl BulkChargeItem {
    pub fn builder(authorization_code: impl Into<String>, amount: i64) -> BulkChargeItemBuilder {
        BulkChargeItemBuilder {
            inner: Self {
                authorization: authorization_code.into(),
                amount,
                reference: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct BulkChargeItemBuilder {
    inner: BulkChargeItem,
}

impl BulkChargeItemBuilder {
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn build(self) -> BulkChargeItem {
        self.inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListBatchChargesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ChargeStatus>,
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
}

impl ListBatchChargesRequest {
    pub fn builder() -> ListBatchChargesRequestBuilder {
        ListBatchChargesRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListBatchChargesRequestBuilder {
    inner: ListBatchChargesRequest,
}

impl ListBatchChargesRequestBuilder {
    pub fn status(mut self, status: ChargeStatus) -> Self {
        self.inner.status = Some(status);
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

    pub fn from(mut self, from: DateTime<Utc>) -> Self {
        self.inner.from = Some(from);
        self
    }

    pub fn to(mut self, to: DateTime<Utc>) -> Self {
        self.inner.to = Some(to);
        self
    }

    pub fn build(self) -> ListBatchChargesRequest {
        self.inner
    }
}
