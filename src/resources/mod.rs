//! One client per Paystack resource. Each exposes a method per endpoint and
//! takes the request types built with the `builder()` functions next to it.

pub mod bulk_charges;
pub mod customers;
pub mod direct_debit;
pub mod payment_pages;
pub mod plans;
pub mod products;
pub mod refunds;
pub mod subscriptions;
pub mod transactions;
pub mod transfers;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Page-based listing with an optional creation window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
}

impl ListRequest {
    pub fn builder() -> ListRequestBuilder {
        ListRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListRequestBuilder {
    inner: ListRequest,
}

impl ListRequestBuilder {
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

    pub fn build(self) -> ListRequest {
        self.inner
    }
}
