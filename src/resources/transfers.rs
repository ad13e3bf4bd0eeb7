use crate::data::{NullBool, NullInt, NullString, NullTime, Nullable};
use crate::models::{Expandable, Metadata, Timestamps};
use crate::net::{serialize_query, Api, Response};
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BASIS: &str = "transfer";
const BALANCE: &str = "balance";

#[derive(Debug, Clone)]
pub struct Transfers {
    api: Api,
}

impl Transfers {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    pub async fn initiate(&self, request: &InitiateTransferRequest) -> Result<Response<Transfer>, Error> {
        self.api.post(&[BASIS], request).await
    }

    /// Completes a transfer that is waiting on OTP confirmation.
    pub async fn finalize(&self, request: &FinalizeTransferRequest) -> Result<Response<Transfer>, Error> {
        self.api.post(&[BASIS, "finalize_transfer"], request).await
    }

    pub async fn initiate_bulk(
        &self,
        request: &BulkTransferRequest,
    ) -> Result<Response<Vec<BulkTransferResult>>, Error> {
        self.api.post(&[BASIS, "bulk"], request).await
    }

    pub async fn list(&self, request: &ListTransfersRequest) -> Result<Response<Vec<Transfer>>, Error> {
        self.api.get(&[BASIS], serialize_query(request)?).await
    }

    pub async fn fetch(&self, id_or_code: &str) -> Result<Response<Transfer>, Error> {
        self.api.get(&[BASIS, id_or_code], None).await
    }

    pub async fn verify(&self, reference: &str) -> Result<Response<Transfer>, Error> {
        self.api.get(&[BASIS, "verify", reference], None).await
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipientDetails {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub account_number: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub account_name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bank_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bank_name: NullString,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRecipient {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub recipient_code: NullString,
    #[serde(rename = "type", skip_serializing_if = "Nullable::is_absent")]
    pub recipient_type: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub email: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub description: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub active: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub is_deleted: NullBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<RecipientDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub source: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reason: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Expandable<TransferRecipient>>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub transfer_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reference: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub titan_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub transferred_at: NullTime,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkTransferResult {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reference: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub recipient: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub transfer_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub status: NullString,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiateTransferRequest {
    source: String,
    amount: i64,
    recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
}

impl InitiateTransferRequest {
    /// Transfers are drawn from the integration balance, the only source Paystack supports.
    pub fn builder(amount: i64, recipient_code: impl Into<String>) -> InitiateTransferRequestBuilder {
        InitiateTransferRequestBuilder {
            inner: Self {
                source: BALANCE.to_string(),
                amount,
                recipient: recipient_code.into(),
                reason: None,
                currency: None,
                reference: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct InitiateTransferRequestBuilder {
    inner: InitiateTransferRequest,
}

impl InitiateTransferRequestBuilder {
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.inner.reason = Some(reason.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.inner.reference = Some(reference.into());
        self
    }

    pub fn build(self) -> InitiateTransferRequest {
        self.inner
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizeTransferRequest {
    transfer_code: String,
    otp: String,
}

impl FinalizeTransferRequest {
    pub fn new(transfer_code: impl Into<String>, otp: impl Into<String>) -> Self {
        Self {
            transfer_code: transfer_code.into(),
            otp: otp.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkTransferItem {
    amount: i64,
    recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl BulkTransferItem {
    pub fn new(amount: i64, recipient_code: impl Into<String>) -> Self {
        Self {
            amount,
            recipient: recipient_code.into(),
            reference: None,
            reason: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkTransferRequest {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    transfers: Vec<BulkTransferItem>,
}

impl BulkTransferRequest {
    pub fn builder() -> BulkTransferRequestBuilder {
        BulkTransferRequestBuilder {
            inner: Self {
                source: BALANCE.to_string(),
                currency: None,
                transfers: Vec::new(),
            },
        }
    }
}

#[derive(Debug)]
pub struct BulkTransferRequestBuilder {
    inner: BulkTransferRequest,
}

impl BulkTransferRequestBuilder {
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    pub fn transfer(mut self, transfer: BulkTransferItem) -> Self {
        self.inner.transfers.push(transfer);
        self
    }

    pub fn transfers(mut self, transfers: impl IntoIterator<Item = BulkTransferItem>) -> Self {
        self.inner.transfers.extend(transfers);
        self
    }

    pub fn build(self) -> BulkTransferRequest {
        self.inner
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListTransfersRequest {
    #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
}

impl ListTransfersRequest {
    pub fn builder() -> ListTransfersRequestBuilder {
        ListTransfersRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListTransfersRequestBuilder {
    inner: ListTransfersRequest,
}

impl ListTransfersRequestBuilder {
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.inner.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.inner.page = Some(page);
        self
    }

    pub fn recipient(mut self, recipient_id: i64) -> Self {
        self.inner.recipient = Some(recipient_id);
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

    pub fn build(self) -> ListTransfersRequest {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bulk_transfer_body() {
        let request = BulkTransferRequest::builder()
            .currency("NGN")
            .transfer(BulkTransferItem::new(20_000, "RCP_db342dvqvz9qcrn").with_reference("acv_9ee55786"))
            .transfer(BulkTransferItem::new(50_000, "RCP_db342dvqvz9qcrn").with_reason("Refund"))
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "source": "balance",
                "currency": "NGN",
                "transfers": [
                    { "amount": 20000, "recipient": "RCP_db342dvqvz9qcrn", "reference": "acv_9ee55786" },
                    { "amount": 50000, "recipient": "RCP_db342dvqvz9qcrn", "reason": "Refund" },
                ]
            })
        );
    }

    #[test]
    fn recipient_is_code_or_object() {
        let transfer: Transfer = serde_json::from_value(json!({
            "recipient": {
                "recipient_code": "RCP_a8wkxiychzdzfgs",
                "type": "nuban",
                "details": { "account_number": "0000000000", "bank_name": "Test Bank" }
            },
            "amount": "37800",
            "status": "success",
        }))
        .unwrap();

        let recipient = transfer.recipient.as_ref().and_then(Expandable::object).unwrap();
        assert_eq!(recipient.recipient_code.as_str(), Some("RCP_a8wkxiychzdzfgs"));
        assert_eq!(recipient.recipient_type.as_str(), Some("nuban"));
        assert_eq!(transfer.amount.int64(), Some(37800));
    }
}
