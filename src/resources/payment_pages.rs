use crate::data::{NullBool, NullInt, NullString, Nullable};
use crate::models::{Metadata, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::resources::products::Product;
use crate::resources::ListRequest;
use crate::Error;
use serde::{Deserialize, Serialize};

const BASIS: &str = "page";

#[derive(Debug, Clone)]
pub struct PaymentPages {
    api: Api,
}

impl PaymentPages {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreatePaymentPageRequest) -> Result<Response<PaymentPage>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListRequest) -> Result<Response<Vec<PaymentPage>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id_or_slug: &str) -> Result<Response<PaymentPage>, Error> {
        self.api.get(&[BASIS, id_or_slug], None).await
    }

    pub async fn update(
        &self,
        id_or_slug: &str,
        request: &UpdatePaymentPageRequest,
    ) -> Result<Response<PaymentPage>, Error> {
        self.api.put(&[BASIS, id_or_slug], request).await
    }

    /// Succeeds when the slug is free; Paystack answers 400 when it is taken.
    pub async fn check_slug_availability(&self, slug: &str) -> Result<Response<serde_json::Value>, Error> {
        self.api.get(&[BASIS, "check_slug_availability", slug], None).await
    }

    /// Attaches products to a page of type `product`.
    pub async fn add_products(&self, id: &str, product_ids: &[i64]) -> Result<Response<PaymentPage>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            product: &'a [i64],
        }

        self.api
            .post(&[BASIS, id, "product"], &Body { product: product_ids })
            .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Payment,
    Subscription,
    Product,
    Plan,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentPage {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub description: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub slug: NullString,
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub page_type: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub plan: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub fixed_amount: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub split_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub redirect_url: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub success_message: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub notification_email: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub collect_phone: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub active: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub published: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub migrate: NullBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub products: Vec<Product>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentPageRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    page_type: Option<PageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed_amount: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    success_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collect_phone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_fields: Option<Vec<serde_json::Value>>,
}

impl CreatePaymentPageRequest {
    pub fn builder(name: impl Into<String>) -> CreatePaymentPageRequestBuilder {
        CreatePaymentPageRequestBuilder {
            inner: Self {
                name: name.into(),
                description: None,
                amount: None,
                currency: None,
                slug: None,
                page_type: None,
                plan: None,
                fixed_amount: None,
                split_code: None,
                metadata: None,
                redirect_url: None,
                success_message: None,
                notification_email: None,
                collect_phone: None,
                custom_fields: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreatePaymentPageRequestBuilder {
    inner: CreatePaymentPageRequest,
}

impl CreatePaymentPageRequestBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.inner.slug = Some(slug.into());
        self
    }

    pub fn page_type(mut self, page_type: PageType) -> Self {
        self.inner.page_type = Some(page_type);
        self
    }

    /// Plan code for pages of type `subscription`.
    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.inner.plan = Some(plan.into());
        self
    }

    pub fn fixed_amount(mut self, fixed_amount: bool) -> Self {
        self.inner.fixed_amount = Some(fixed_amount);
        self
    }

    pub fn split_code(mut self, split_code: impl Into<String>) -> Self {
        self.inner.split_code = Some(split_code.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    pub fn redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.inner.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.inner.success_message = Some(message.into());
        self
    }

    pub fn notification_email(mut self, email: impl Into<String>) -> Self {
        self.inner.notification_email = Some(email.into());
        self
    }

    pub fn collect_phone(mut self, collect_phone: bool) -> Self {
        self.inner.collect_phone = Some(collect_phone);
        self
    }

    pub fn custom_fields(mut self, custom_fields: Vec<serde_json::Value>) -> Self {
        self.inner.custom_fields = Some(custom_fields);
        self
    }

    pub fn build(self) -> CreatePaymentPageRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePaymentPageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
}

impl UpdatePaymentPageRequest {
    pub fn builder() -> UpdatePaymentPageRequestBuilder {
        UpdatePaymentPageRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct UpdatePaymentPageRequestBuilder {
    inner: UpdatePaymentPageRequest,
}

impl UpdatePaymentPageRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    /// Setting this to `false` deactivates the page.
    pub fn active(mut self, active: bool) -> Self {
        self.inner.active = Some(active);
        self
    }

    pub fn build(self) -> UpdatePaymentPageRequest {
        self.inner
    }
}
