use crate::data::{NullInt, NullString, Nullable};
use crate::Error;
use serde::{Deserialize, Serialize};

/// The `{status, message, data, meta}` envelope wrapping every Paystack response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Response<T> {
    pub fn into_data(self) -> Result<T, Error> {
        self.data.ok_or(Error::MissingData)
    }
}

/// Pagination details. Paystack spells `perPage` and `pageCount` in either
/// case, sometimes both at once, and occasionally sends the numbers as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MetaKeys")]
pub struct Meta {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub total: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub skipped: NullInt,
    #[serde(rename = "perPage", skip_serializing_if = "Nullable::is_absent")]
    pub per_page: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub page: NullInt,
    #[serde(rename = "pageCount", skip_serializing_if = "Nullable::is_absent")]
    pub page_count: NullInt,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub next: NullString,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub previous: NullString,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct MetaKeys {
    total: NullInt,
    skipped: NullInt,
    #[serde(rename = "perPage")]
    per_page_camel: NullInt,
    per_page: NullInt,
    page: NullInt,
    #[serde(rename = "pageCount")]
    page_count_camel: NullInt,
    page_count: NullInt,
    next: NullString,
    previous: NullString,
}

impl From<MetaKeys> for Meta {
    fn from(keys: MetaKeys) -> Self {
        Self {
            total: keys.total,
            skipped: keys.skipped,
            per_page: keys.per_page_camel.or(keys.per_page),
            page: keys.page,
            page_count: keys.page_count_camel.or(keys.page_count),
            next: keys.next,
            previous: keys.previous,
        }
    }
}

/// Body of a rejected call. Only `message` is reliable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub message: NullString,
}
