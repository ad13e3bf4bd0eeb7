use crate::data::{NullBool, NullInt, NullString, NullTime, Nullable};
use crate::models::{Authorization, Bearer, Channel, Customer, Metadata, Plan, Subaccount};
use crate::net::{serialize_query, Api, Response};
use crate::resources::ListRequest;
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASIS: &str = "transaction";

#[derive(Debug, Clone)]
pub struct Transactions {
    api: Api,
}

impl Transactions {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Starts a checkout; send the customer to the returned `authorization_url`.
    pub async fn initialize(
        &self,
        request: &InitializeTransactionRequest,
    ) -> Result<Response<InitializedTransaction>, Error> {
        self.api.post(&[BASIS, "initialize"], request).await
    }

    pub async fn verify(&self, reference: &str) -> Result<Response<Transaction>, Error> {
        self.api.get(&[BASIS, "verify", reference], None).await
    }

    pub async fn list(&self, request: &ListTransactionsRequest) -> Result<Response<Vec<Transaction>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id: i64) -> Result<Response<Transaction>, Error> {
        self.api.get(&[BASIS, &id.to_string()], None).await
    }

    /// Charges a reusable authorization without customer interaction.
    pub async fn charge_authorization(
        &self,
        request: &ChargeAuthorizationRequest,
    ) -> Result<Response<Transaction>, Error> {
        self.api.post(&[BASIS, "charge_authorization"], request).await
    }

    pub async fn timeline(&self, id_or_reference: &str) -> Result<Response<Timeline>, Error> {
        self.api.get(&[BASIS, "timeline", id_or_reference], None).await
    }

    pub async fn totals(&self, request: &ListRequest) -> Result<Response<TransactionTotals>, Error> {
        self.api.get(&[BASIS, "totals"], serialize_query(request)?).await
    }

    pub async fn export(&self, request: &ExportTransactionsRequest) -> Result<Response<ExportFile>, Error> {
        self.api.get(&[BASIS, "export"], serialize_query(request)?).await
    }

    /// Debits whatever is available on the authorization, down to `at_least`.
    pub async fn partial_debit(&self, request: &PartialDebitRequest) -> Result<Response<Transaction>, Error> {
        self.api.post(&[BASIS, "partial_debit"], request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Failed,
    Success,
    Abandoned,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializedTransaction {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_url: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub access_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reference: NullString,
}

/// Paystack sends both snake and camel case timestamps on transactions, so
/// each spelling gets its own field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reference: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub receipt_number: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub requested_amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub message: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub gateway_response: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub channel: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub ip_address: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub fees: NullInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_split: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<Subaccount>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub order_id: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_transaction_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub paid_at: NullTime,
    #[serde(rename = "paidAt", skip_serializing_if = "Nullable::is_absent")]
    pub paid_at_camel: NullTime,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub created_at: NullTime,
    #[serde(rename = "createdAt", skip_serializing_if = "Nullable::is_absent")]
    pub created_at_camel: NullTime,
}

impl Transaction {
    pub fn paid_time(&self) -> Option<DateTime<Utc>> {
        self.paid_at.time().or_else(|| self.paid_at_camel.time())
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.time().or_else(|| self.created_at_camel.time())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub event_type: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub message: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub time: NullInt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub start_time: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub time_spent: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub attempts: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub errors: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub success: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub mobile: NullBool,
    pub input: Vec<serde_json::Value>,
    pub history: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyAmount {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionTotals {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub total_transactions: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub unique_customers: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub total_volume: NullInt,
    pub total_volume_by_currency: Vec<CurrencyAmount>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub pending_transfers: NullInt,
    pub pending_transfers_by_currency: Vec<CurrencyAmount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportFile {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub path: NullString,
    #[serde(rename = "expiresAt", alias = "expires_at", skip_serializing_if = "Nullable::is_absent")]
    pub expires_at: NullTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitializeTransactionRequest {
    email: String,
    amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    split_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_charge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bearer: Option<Bearer>,
}

impl InitializeTransactionRequest {
    /// `amount` is in the currency's subunit.
    pub fn builder(email: impl Into<String>, amount: i64) -> InitializeTransactionRequestBuilder {
        InitializeTransactionRequestBuilder {
            inner: Self {
                email: email.into(),
                amount,
                currency: None,
                reference: None,
                callback_url: None,
                plan: None,
                invoice_limit: None,
                metadata: None,
                channels: None,
                split_code: None,
                subaccount: None,
                transaction_charge: None,
                bearer: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct InitializeTransactionRequestBuilder {
    inner: InitializeTransactionRequest,
}

impl InitializeTransactionRequestBuilder {
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.inner.callback_url = Some(callback_url.into());
        self
    }

    /// Plan code; when set Paystack ignores `amount` and charges the plan amount.
    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.inner.plan = Some(plan.into());
        self
    }

    pub fn invoice_limit(mut self, invoice_limit: u32) -> Self {
        self.inner.invoice_limit = Some(invoice_limit);
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    pub fn channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.inner.channels = Some(channels.into_iter().collect());
        self
    }

    pub fn split_code(mut self, split_code: impl Into<String>) -> Self {
        self.inner.split_code = Some(split_code.into());
        self
    }

    pub fn subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.inner.subaccount = Some(subaccount.into());
        self
    }

    pub fn transaction_charge(mut self, transaction_charge: i64) -> Self {
        self.inner.transaction_charge = Some(transaction_charge);
        self
    }

    pub fn bearer(mut self, bearer: Bearer) -> Self {
        self.inner.bearer = Some(bearer);
        self
    }

    pub fn build(self) -> InitializeTransactionRequest {
        self.inner
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeAuthorizationRequest {
    email: String,
    amount: i64,
    authorization_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channels: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subaccount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_charge: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bearer: Option<Bearer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    queue: Option<bool>,
}

impl ChargeAuthorizationRequest {
    pub fn builder(
        email: impl Into<String>,
        amount: i64,
        authorization_code: impl Into<String>,
    ) -> ChargeAuthorizationRequestBuilder {
        ChargeAuthorizationRequestBuilder {
            inner: Self {
                email: email.into(),
                amount,
                authorization_code: authorization_code.into(),
                reference: None,
                currency: None,
                metadata: None,
                channels: None,
                subaccount: None,
                transaction_charge: None,
                bearer: None,
                queue: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct ChargeAuthorizationRequestBuilder {
    inner: ChargeAuthorizationRequest,
}

impl ChargeAuthorizationRequestBuilder {
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.inner.metadata = Some(metadata);
        self
    }

    pub fn channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.inner.channels = Some(channels.into_iter().collect());
        self
    }

    pub fn subaccount(mut self, subaccount: impl Into<String>) -> Self {
        self.inner.subaccount = Some(subaccount.into());
        self
    }

    pub fn transaction_charge(mut self, transaction_charge: i64) -> Self {
        self.inner.transaction_charge = Some(transaction_charge);
        self
    }

    pub fn bearer(mut self, bearer: Bearer) -> Self {
        self.inner.bearer = Some(bearer);
        self
    }

    /// Queue the charge when running many charges in quick succession.
    pub fn queue(mut self, queue: bool) -> Self {
        self.inner.queue = Some(queue);
        self
    }

    pub fn build(self) -> ChargeAuthorizationRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTransactionsRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<i64>,
    #[serde(rename = "terminalid", skip_serializing_if = "Option::is_none")]
    terminal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
}

impl ListTransactionsRequest {
    pub fn builder() -> ListTransactionsRequestBuilder {
        ListTransactionsRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListTransactionsRequestBuilder {
    inner: ListTransactionsRequest,
}

impl ListTransactionsRequestBuilder {
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

    pub fn terminal_id(mut self, terminal_id: impl Into<String>) -> Self {
        self.inner.terminal_id = Some(terminal_id.into());
        self
    }

    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.inner.status = Some(status);
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

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn build(self) -> ListTransactionsRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportTransactionsRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settlement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_page: Option<i64>,
}

impl ExportTransactionsRequest {
    pub fn builder() -> ExportTransactionsRequestBuilder {
        ExportTransactionsRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ExportTransactionsRequestBuilder {
    inner: ExportTransactionsRequest,
}

impl ExportTransactionsRequestBuilder {
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

    pub fn customer(mut self, customer_id: i64) -> Self {
        self.inner.customer = Some(customer_id);
        self
    }

    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.inner.status = Some(status);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    pub fn settled(mut self, settled: bool) -> Self {
        self.inner.settled = Some(settled);
        self
    }

    pub fn settlement(mut self, settlement_id: i64) -> Self {
        self.inner.settlement = Some(settlement_id);
        self
    }

    pub fn payment_page(mut self, payment_page_id: i64) -> Self {
        self.inner.payment_page = Some(payment_page_id);
        self
    }

    pub fn build(self) -> ExportTransactionsRequest {
        self.inner
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialDebitRequest {
    authorization_code: String,
    currency: String,
    amount: i64,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    at_least: Option<i64>,
}

impl PartialDebitRequest {
    pub fn builder(
        authorization_code: impl Into<String>,
        currency: impl Into<String>,
        amount: i64,
        email: impl Into<String>,
    ) -> PartialDebitRequestBuilder {
        PartialDebitRequestBuilder {
            inner: Self {
                authorization_code: authorization_code.into(),
                currency: currency.into(),
                amount,
                email: email.into(),
                reference: None,
                at_least: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct PartialDebitRequestBuilder {
    inner: PartialDebitRequest,
}

impl PartialDebitRequestBuilder {
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    /// Smallest amount to accept.
    pub fn at_least(mut self, at_least: i64) -> Self {
        self.inner.at_least = Some(at_least);
        self
    }

    pub fn build(self) -> PartialDebitRequest {
        self.inner
    }
}
