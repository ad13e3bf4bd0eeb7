//! Nullable scalar wrappers for Paystack's JSON.
//!
//! Paystack is not consistent about how it encodes scalars: amounts arrive as
//! numbers or strings, flags as booleans or `"true"`, timestamps in several
//! layouts, and keys are sometimes omitted and sometimes `null`. The types in
//! this module absorb those variations so models can use a single Rust type
//! per field.

mod nullable;
mod scalar;
mod time;

pub use nullable::Nullable;
pub use scalar::{FlexBool, FlexInt, FlexString};
pub use time::Timestamp;

use chrono::{DateTime, Utc};

pub type NullString = Nullable<FlexString>;
pub type NullInt = Nullable<FlexInt>;
pub type NullBool = Nullable<FlexBool>;
pub type NullTime = Nullable<Timestamp>;

impl NullString {
    pub fn as_str(&self) -> Option<&str> {
        self.as_ref().map(FlexString::as_str)
    }
}

impl NullInt {
    pub fn int64(&self) -> Option<i64> {
        self.as_ref().map(|value| value.0)
    }
}

impl NullBool {
    pub fn bool(&self) -> Option<bool> {
        self.as_ref().map(|value| value.0)
    }
}

impl NullTime {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.as_ref().map(|value| value.0)
    }
}
