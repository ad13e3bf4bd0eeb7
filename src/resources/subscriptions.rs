use crate::data::{NullInt, NullString, NullTime, Nullable};
use crate::models::{Authorization, Customer, Expandable, Plan, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASIS: &str = "subscription";

#[derive(Debug, Clone)]
pub struct Subscriptions {
    api: Api,
}

impl Subscriptions {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreateSubscriptionRequest) -> Result<Response<Subscription>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListSubscriptionsRequest) -> Result<Response<Vec<Subscription>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Subscription>, Error> {
        self.api.get(&[BASIS, id_or_code], None).await
    }

    pub async fn enable(&self, request: &ToggleSubscriptionRequest) -> Result<Response<serde_json::Value>, Error> {
        self.api.post(&[BASIS, "enable"], request).await
    }

    pub async fn disable(&self, request: &ToggleSubscriptionRequest) -> Result<Response<serde_json::Value>, Error> {
        self.api.post(&[BASIS, "disable"], request).await
    }

    /// Link the customer can use to update the card on a subscription.
    pub async fn generate_update_link(&self, code: &str) -> Result<Response<UpdateLink>, Error> {
        self.api.get(&[BASIS, code, "manage", "link"], None).await
    }

    /// Emails the update link to the subscription's customer.
    pub async fn send_update_link(&self, code: &str) -> Result<Response<serde_json::Value>, Error> {
        self.api
            .post(&[BASIS, code, "manage", "email"], &serde_json::Map::new())
            .await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Expandable<Customer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Expandable<Plan>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub start: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub quantity: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub subscription_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub email_token: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Expandable<Authorization>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub easy_cron_id: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub cron_expression: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub next_payment_date: NullTime,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub open_invoice: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub invoice_limit: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub split_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub payments_count: NullInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent_invoice: Option<serde_json::Value>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateLink {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub link: NullString,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSubscriptionRequest {
    customer: String,
    plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime<Utc>>,
}

impl CreateSubscriptionRequest {
    /// `customer` is an email or customer code, `plan` a plan code.
    pub fn builder(customer: impl Into<String>, plan: impl Into<String>) -> CreateSubscriptionRequestBuilder {
        CreateSubscriptionRequestBuilder {
            inner: Self {
                customer: customer.into(),
                plan: plan.into(),
                authorization: None,
                start_date: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreateSubscriptionRequestBuilder {
    inner: CreateSubscriptionRequest,
}

impl CreateSubscriptionRequestBuilder {
    pub fn authorization(mut self, authorization_code: impl Into<String>) -> Self {
        self.inner.authorization = Some(authorization_code.into());
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.inner.start_date = Some(start_date);
        self
    }

    pub fn build(self) -> CreateSubscriptionRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSubscriptionsRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<i64>,
}

impl ListSubscriptionsRequest {
    pub fn builder() -> ListSubscriptionsRequestBuilder {
        ListSubscriptionsRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListSubscriptionsRequestBuilder {
    inner: ListSubscriptionsRequest,
}

impl ListSubscriptionsRequestBuilder {
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.inner.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.inner.page = Some(page);
        self
    }

    pub fn customer(mut self, customer_id: i64) -> Self {
        self.inner.customer = Some(customer_id);
        self
    }

    pub fn plan(mut self, plan_id: i64) -> Self {
        self.inner.plan = Some(plan_id);
        self
    }

    pub fn build(self) -> ListSubscriptionsRequest {
        self.inner
    }
}

/// Body for enabling or disabling a subscription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleSubscriptionRequest {
    code: String,
    token: String,
}

impl ToggleSubscriptionRequest {
    /// `token` is the subscription's `email_token`.
    pub fn new(code: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            token: token.into(),
        }
    }
}
