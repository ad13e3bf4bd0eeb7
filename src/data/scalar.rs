use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A string that Paystack sometimes sends as a number or boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FlexString(pub String);

/// An integer that Paystack sometimes sends as a string (`"5000"`) or a float (`5000.0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FlexInt(pub i64);

/// A boolean that Paystack sometimes sends as `"true"`, `"1"` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FlexBool(pub bool);

impl FlexString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FlexInt {
    pub fn int64(self) -> i64 {
        self.0
    }
}

impl FlexBool {
    pub fn bool(self) -> bool {
        self.0
    }
}

impl Deref for FlexString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FlexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FlexString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FlexString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for FlexInt {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<bool> for FlexBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Serialize for FlexString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl Serialize for FlexInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl Serialize for FlexBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

struct FlexStringVisitor;

impl<'de> Visitor<'de> for FlexStringVisitor {
    type Value = FlexString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexString, E> {
        Ok(FlexString(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FlexString, E> {
        Ok(FlexString(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexString, E> {
        Ok(FlexString(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexString, E> {
        Ok(FlexString(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FlexString, E> {
        Ok(FlexString(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FlexString, E> {
        Ok(FlexString(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for FlexString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexStringVisitor)
    }
}

struct FlexIntVisitor;

impl<'de> Visitor<'de> for FlexIntVisitor {
    type Value = FlexInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexInt, E> {
        Ok(FlexInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexInt, E> {
        i64::try_from(v)
            .map(FlexInt)
            .map_err(|_| E::custom(format!("integer {v} is out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FlexInt, E> {
        if v.fract() != 0.0 || !v.is_finite() || v.abs() >= i64::MAX as f64 {
            return Err(E::custom(format!("{v} is not an integer")));
        }
        Ok(FlexInt(v as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexInt, E> {
        let trimmed = v.trim();
        if let Ok(parsed) = trimmed.parse::<i64>() {
            return Ok(FlexInt(parsed));
        }
        match trimmed.parse::<f64>() {
            Ok(parsed) => self.visit_f64(parsed),
            Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexIntVisitor)
    }
}

struct FlexBoolVisitor;

impl<'de> Visitor<'de> for FlexBoolVisitor {
    type Value = FlexBool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, \"true\"/\"false\" or 0/1")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FlexBool, E> {
        Ok(FlexBool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexBool, E> {
        match v {
            0 => Ok(FlexBool(false)),
            1 => Ok(FlexBool(true)),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexBool, E> {
        match v {
            0 => Ok(FlexBool(false)),
            1 => Ok(FlexBool(true)),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexBool, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(FlexBool(true)),
            "false" | "0" => Ok(FlexBool(false)),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for FlexBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexBoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flex_string_accepts_numbers_and_bools() {
        let parse = |v| serde_json::from_value::<FlexString>(v).unwrap();

        assert_eq!(parse(json!("NGN")).as_str(), "NGN");
        assert_eq!(parse(json!(42)).as_str(), "42");
        assert_eq!(parse(json!(true)).as_str(), "true");
        assert_eq!(serde_json::to_value(FlexString::from("x")).unwrap(), json!("x"));
    }

    #[test]
    fn flex_int_accepts_strings_and_integral_floats() {
        let parse = |v| serde_json::from_value::<FlexInt>(v).map(FlexInt::int64);

        assert_eq!(parse(json!(5000)).unwrap(), 5000);
        assert_eq!(parse(json!(" 5000 ")).unwrap(), 5000);
        assert_eq!(parse(json!(20.0)).unwrap(), 20);
        assert_eq!(parse(json!("20.0")).unwrap(), 20);
        assert!(parse(json!(1.5)).is_err());
        assert!(parse(json!(9223372036854775808.0)).is_err());
        assert!(parse(json!(-9223372036854775808.0)).is_err());
        assert!(parse(json!("9223372036854775808")).is_err());
        assert!(parse(json!("abc")).is_err());
        assert!(parse(json!("")).is_err());
        assert_eq!(serde_json::to_value(FlexInt(12)).unwrap(), json!(12));
    }

    #[test]
    fn flex_bool_accepts_strings_and_digits() {
        let parse = |v| serde_json::from_value::<FlexBool>(v).map(FlexBool::bool);

        assert!(parse(json!(true)).unwrap());
        assert!(parse(json!("TRUE")).unwrap());
        assert!(parse(json!(1)).unwrap());
        assert!(!parse(json!("0")).unwrap());
        assert!(!parse(json!(false)).unwrap());
        assert!(parse(json!(2)).is_err());
        assert!(parse(json!("yes")).is_err());
    }
}
