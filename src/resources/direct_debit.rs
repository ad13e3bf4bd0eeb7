use crate::data::{NullInt, NullString, NullTime, Nullable};
use crate::models::Customer;
use crate::net::{serialize_query, Api, Response};
use crate::Error;
use serde::{Deserialize, Serialize};

const BASIS: &str = "directdebit";

#[derive(Debug, Clone)]
pub struct DirectDebit {
    api: Api,
}

impl DirectDebit {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Retries the activation charge for customers whose mandate is still pending.
    pub async fn trigger_activation_charge(
        &self,
        customer_ids: &[i64],
    ) -> Result<Response<serde_json::Value>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            customer_ids: &'a [i64],
        }

        self.api
            .put(&[BASIS, "activation-charge"], &Body { customer_ids })
            .await
    }

    /// Cursor paginated: feed `meta.next` back in as the cursor.
    pub async fn list_mandate_authorizations(
        &self,
        request: &ListMandateAuthorizationsRequest,
    ) -> Result<Response<Vec<MandateAuthorization>>, Error> {
        self.api
            .get(&[BASIS, "mandate-authorizations"], serialize_query(request)?)
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MandateStatus {
    Pending,
    Active,
    Revoked,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MandateAuthorization {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub mandate_id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration_id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub account_number: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bank_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bank_name: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorized_at: NullTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListMandateAuthorizationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<MandateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
}

impl ListMandateAuthorizationsRequest {
    pub fn builder() -> ListMandateAuthorizationsRequestBuilder {
        ListMandateAuthorizationsRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListMandateAuthorizationsRequestBuilder {
    inner: ListMandateAuthorizationsRequest,
}

impl ListMandateAuthorizationsRequestBuilder {
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.inner.cursor = Some(cursor.into());
        self
    }

    pub fn status(mut self, status: MandateStatus) -> Self {
        self.inner.status = Some(status);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.inner.per_page = Some(per_page);
        self
    }

    pub fn build(self) -> ListMandateAuthorizationsRequest {
        self.inner
    }
}
