use crate::models::{Interval, Plan};
use crate::net::{serialize_query, Api, Response};
use crate::Error;
use serde::Serialize;

const BASIS: &str = "plan";

#[derive(Debug, Clone)]
pub struct Plans {
    api: Api,
}

impl Plans {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreatePlanRequest) -> Result<Response<Plan>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListPlansRequest) -> Result<Response<Vec<Plan>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Plan>, Error> {
        self.api.get(&[BASIS, id_or_code], None).await
    }

    /// Paystack answers with a message only, no plan body.
    pub async fn update(
        &self,
        id_or_code: &str,
        request: &UpdatePlanRequest,
    ) -> Result<Response<serde_json::Value>, Error> {
        self.api.put(&[BASIS, id_or_code], request).await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePlanRequest {
    name: String,
    amount: i64,
    interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_limit: Option<u32>,
}

impl CreatePlanRequest {
    /// `amount` is in the currency's subunit (kobo, pesewas, cents).
    pub fn builder(name: impl Into<String>, amount: i64, interval: Interval) -> CreatePlanRequestBuilder {
        CreatePlanRequestBuilder {
            inner: Self {
                name: name.into(),
                amount,
                interval,
                description: None,
                send_invoices: None,
                send_sms: None,
                currency: None,
                invoice_limit: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreatePlanRequestBuilder {
    inner: CreatePlanRequest,
}

impl CreatePlanRequestBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn send_invoices(mut self, send_invoices: bool) -> Self {
        self.inner.send_invoices = Some(send_invoices);
        self
    }

    pub fn send_sms(mut self, send_sms: bool) -> Self {
        self.inner.send_sms = Some(send_sms);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn invoice_limit(mut self, invoice_limit: u32) -> Self {
        self.inner.invoice_limit = Some(invoice_limit);
        self
    }

    pub fn build(self) -> CreatePlanRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPlansRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
}

impl ListPlansRequest {
    pub fn builder() -> ListPlansRequestBuilder {
        ListPlansRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListPlansRequestBuilder {
    inner: ListPlansRequest,
}

impl ListPlansRequestBuilder {
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.inner.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.inner.page = Some(page);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.inner.status = Some(status.into());
        self
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.inner.interval = Some(interval);
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn build(self) -> ListPlansRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<Interval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_existing_subscriptions: Option<bool>,
}

impl UpdatePlanRequest {
    pub fn builder() -> UpdatePlanRequestBuilder {
        UpdatePlanRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct UpdatePlanRequestBuilder {
    inner: UpdatePlanRequest,
}

impl UpdatePlanRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.inner.interval = Some(interval);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn send_invoices(mut self, send_invoices: bool) -> Self {
        self.inner.send_invoices = Some(send_invoices);
        self
    }

    pub fn send_sms(mut self, send_sms: bool) -> Self {
        self.inner.send_sms = Some(send_sms);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn invoice_limit(mut self, invoice_limit: u32) -> Self {
        self.inner.invoice_limit = Some(invoice_limit);
        self
    }

    /// Apply the change to subscriptions already on the plan.
    pub fn update_existing_subscriptions(mut self, update: bool) -> Self {
        self.inner.update_existing_subscriptions = Some(update);
        self
    }

    pub fn build(self) -> UpdatePlanRequest {
        self.inner
    }
}
