use crate::data::{NullBool, NullInt, NullString, Nullable};
use crate::models::{Metadata, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::resources::ListRequest;
use crate::Error;
use serde::{Deserialize, Serialize};

const BASIS: &str = "product";

#[derive(Debug, Clone)]
pub struct Products {
    api: Api,
}

impl Products {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: &CreateProductRequest) -> Result<Response<Product>, Error> {
        self.api.post(&[BASIS], request).await
    }

    pub async fn list(&self, request: &ListRequest) -> Result<Response<Vec<Product>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id: &str) -> Result<Response<Product>, Error> {
        self.api.get(&[BASIS, id], None).await
    }

    pub async fn update(&self, id: &str, request: &UpdateProductRequest) -> Result<Response<Product>, Error> {
        self.api.put(&[BASIS, id], request).await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub description: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub product_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub slug: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub price: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub quantity: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub quantity_sold: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub active: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub in_stock: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub unlimited: NullBool,
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub product_type: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductRequest {
    name: String,
    description: String,
    price: i64,
    currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

impl CreateProductRequest {
    pub fn builder(
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        currency: impl Into<String>,
    ) -> CreateProductRequestBuilder {
        CreateProductRequestBuilder {
            inner: Self {
                name: name.into(),
                description: description.into(),
                price,
                currency: currency.into(),
                unlimited: None,
                quantity: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct CreateProductRequestBuilder {
    inner: CreateProductRequest,
}

impl CreateProductRequestBuilder {
    pub fn unlimited(mut self, unlimited: bool) -> Self {
        self.inner.unlimited = Some(unlimited);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.inner.quantity = Some(quantity);
        self
    }

    pub fn build(self) -> CreateProductRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlimited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<u32>,
}

impl UpdateProductRequest {
    pub fn builder() -> UpdateProductRequestBuilder {
        UpdateProductRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct UpdateProductRequestBuilder {
    inner: UpdateProductRequest,
}

impl UpdateProductRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.inner.price = Some(price);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn unlimited(mut self, unlimited: bool) -> Self {
        self.inner.unlimited = Some(unlimited);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.inner.quantity = Some(quantity);
        self
    }

    pub fn build(self) -> UpdateProductRequest {
        self.inner
    }
}
