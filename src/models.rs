//! Shapes shared by several resources.

use crate::data::{FlexInt, NullBool, NullInt, NullString, NullTime, Nullable};
use serde::{Deserialize, Serialize};

pub type Metadata = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskAction {
    Default,
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Card,
    Bank,
    Ussd,
    Qr,
    MobileMoney,
    BankTransfer,
    Eft,
    ApplePay,
}

/// Who pays the transaction fee on a split payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bearer {
    Account,
    Subaccount,
}

/// Record creation and update times. Most endpoints send `createdAt`, a few
/// send `created_at`, and some send both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TimestampKeys")]
pub struct Timestamps {
    #[serde(rename = "createdAt", skip_serializing_if = "Nullable::is_absent")]
    pub created_at: NullTime,
    #[serde(rename = "updatedAt", skip_serializing_if = "Nullable::is_absent")]
    pub updated_at: NullTime,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct TimestampKeys {
    #[serde(rename = "createdAt")]
    created_at_camel: NullTime,
    created_at: NullTime,
    #[serde(rename = "updatedAt")]
    updated_at_camel: NullTime,
    updated_at: NullTime,
}

impl From<TimestampKeys> for Timestamps {
    fn from(keys: TimestampKeys) -> Self {
        Self {
            created_at: keys.created_at_camel.or(keys.created_at),
            updated_at: keys.updated_at_camel.or(keys.updated_at),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Authorization {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub authorization_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bin: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub last4: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub exp_month: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub exp_year: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub channel: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub card_type: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub bank: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub country_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub brand: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub reusable: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub signature: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub account_name: NullString,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub first_name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub last_name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub email: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub customer_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub phone: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub risk_action: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub international_format_phone: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub identified: NullBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifications: Option<serde_json::Value>,
    pub authorizations: Vec<Authorization>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub plan_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub description: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub amount: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub interval: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub send_invoices: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub send_sms: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub hosted_page: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub hosted_page_url: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub hosted_page_summary: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub currency: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub migrate: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub is_deleted: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub is_archived: NullBool,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub invoice_limit: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub integration: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub domain: NullString,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subaccount {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub id: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub subaccount_code: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub business_name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub description: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub primary_contact_name: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub primary_contact_email: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub primary_contact_phone: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_charge: Option<f64>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub settlement_bank: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub account_number: NullString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A related record that Paystack returns either as a bare id or code, or
/// expanded into the full object, depending on the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(FlexInt),
    Code(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(id.int64()),
            _ => None,
        }
    }

    pub fn object(&self) -> Option<&T> {
        match self {
            Self::Object(object) => Some(&**object),
            _ => None,
        }
    }
}
