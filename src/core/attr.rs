//! Typed record attributes
//!
//! An [`Attr`] is one key/value pair attached to a log record. The value is a
//! tagged union: seven scalar kinds with dedicated serializations, nested
//! [`Group`](AttrValue::Group)s, and an opaque [`Any`](AttrValue::Any) kind
//! whose serialization strategy is chosen at dispatch time by probing the
//! capabilities its [`AnyValue`] implementation exposes.

use crate::core::error::BridgeError;
use crate::core::net::{IpPrefix, MacAddr};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

/// Capability surface probed for `Any`-kind values.
///
/// Every accessor defaults to "capability absent"; implementations override
/// the ones their value genuinely has. A value may expose several
/// capabilities at once; the dispatcher picks the most specific one in a
/// fixed priority order, so e.g. a value that both renders itself
/// ([`display`](AnyValue::display)) and marshals to JSON is logged via the
/// rendered string.
///
/// [`to_json_value`](AnyValue::to_json_value) is the reflective fallback and
/// is required: every value can at least describe itself through the serde
/// data model (typically via [`serde_json::to_value`]).
pub trait AnyValue: fmt::Debug + Send + Sync {
    /// Reflective fallback encoding, used when no other capability matches.
    fn to_json_value(&self) -> Value;

    /// Network address capability.
    fn as_ip_addr(&self) -> Option<IpAddr> {
        None
    }

    /// Network prefix (CIDR) capability.
    fn as_ip_prefix(&self) -> Option<IpPrefix> {
        None
    }

    /// Hardware address capability.
    fn as_mac_addr(&self) -> Option<MacAddr> {
        None
    }

    /// Error capability; logged as the error's message string.
    fn as_error(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }

    /// Human rendering capability ("stringer").
    fn display(&self) -> Option<String> {
        None
    }

    /// JSON marshaling capability. A successful result is spliced into the
    /// record as raw JSON, not re-escaped as a string.
    fn marshal_json(&self) -> Option<Result<Vec<u8>, BridgeError>> {
        None
    }

    /// Text marshaling capability; a successful result is written as a string.
    fn marshal_text(&self) -> Option<Result<String, BridgeError>> {
        None
    }
}

impl AnyValue for IpAddr {
    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn as_ip_addr(&self) -> Option<IpAddr> {
        Some(*self)
    }
}

impl AnyValue for Ipv4Addr {
    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn as_ip_addr(&self) -> Option<IpAddr> {
        Some(IpAddr::V4(*self))
    }
}

impl AnyValue for Ipv6Addr {
    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn as_ip_addr(&self) -> Option<IpAddr> {
        Some(IpAddr::V6(*self))
    }
}

impl AnyValue for IpPrefix {
    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn as_ip_prefix(&self) -> Option<IpPrefix> {
        Some(*self)
    }
}

impl AnyValue for MacAddr {
    fn to_json_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn as_mac_addr(&self) -> Option<MacAddr> {
        Some(*self)
    }
}

impl AnyValue for Value {
    fn to_json_value(&self) -> Value {
        self.clone()
    }
}

/// Boxed error carried as an `Any` attribute value.
pub struct ErrorValue(Box<dyn std::error::Error + Send + Sync>);

impl ErrorValue {
    pub fn new(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(error.into())
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorValue").field(&self.0).finish()
    }
}

impl AnyValue for ErrorValue {
    fn to_json_value(&self) -> Value {
        Value::String(self.0.to_string())
    }

    fn as_error(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

/// A single typed key/value pair attached to a log record.
#[derive(Debug)]
pub struct Attr {
    key: String,
    value: AttrValue,
}

/// The tagged value of an [`Attr`]. Exactly one kind is active.
#[derive(Debug)]
pub enum AttrValue {
    Bool(bool),
    Duration(Duration),
    F64(f64),
    I64(i64),
    Str(String),
    Time(DateTime<Utc>),
    U64(u64),
    /// Ordered child attributes; duplicate keys pass through to the encoder.
    Group(Vec<Attr>),
    /// Opaque value, serialized by capability probing.
    Any(Box<dyn AnyValue>),
}

impl Attr {
    pub fn new(key: impl Into<String>, value: AttrValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, AttrValue::Bool(value))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, AttrValue::Duration(value))
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, AttrValue::F64(value))
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, AttrValue::I64(value))
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, AttrValue::Str(value.into()))
    }

    pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Self {
        Self::new(key, AttrValue::Time(value))
    }

    pub fn uint(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, AttrValue::U64(value))
    }

    pub fn group(key: impl Into<String>, children: Vec<Attr>) -> Self {
        Self::new(key, AttrValue::Group(children))
    }

    pub fn any(key: impl Into<String>, value: impl AnyValue + 'static) -> Self {
        Self::new(key, AttrValue::Any(Box::new(value)))
    }

    pub fn err(
        key: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::any(key, ErrorValue::new(error))
    }

    /// Plain data with no special capability, encoded reflectively through
    /// serde. Encoding never fails structurally; unrepresentable values
    /// degrade to `null`.
    pub fn serialized<T: Serialize>(key: impl Into<String>, value: &T) -> Self {
        let encoded = serde_json::to_value(value).unwrap_or(Value::Null);
        Self::new(key, AttrValue::Any(Box::new(encoded)))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &AttrValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_constructors() {
        let attr = Attr::int("count", 12);
        assert_eq!(attr.key(), "count");
        assert!(matches!(attr.value(), AttrValue::I64(12)));

        let attr = Attr::string("name", "alice");
        let AttrValue::Str(s) = attr.value() else {
            panic!("expected string kind");
        };
        assert_eq!(s, "alice");
    }

    #[test]
    fn test_error_value_capabilities() {
        let value = ErrorValue::new(std::io::Error::new(std::io::ErrorKind::Other, "yo"));
        assert_eq!(value.as_error().unwrap().to_string(), "yo");
        assert_eq!(value.to_json_value(), json!("yo"));
        assert!(value.as_ip_addr().is_none());
        assert!(value.marshal_json().is_none());
    }

    #[test]
    fn test_ip_capabilities() {
        let ip = IpAddr::from([192, 168, 1, 2]);
        assert_eq!(ip.as_ip_addr(), Some(ip));
        assert_eq!(ip.to_json_value(), json!("192.168.1.2"));

        let v4 = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(v4.as_ip_addr(), Some(IpAddr::V4(v4)));
    }

    #[test]
    fn test_serialized_attr() {
        #[derive(Serialize)]
        struct Payload {
            foo: String,
            n: u32,
        }

        let attr = Attr::serialized(
            "payload",
            &Payload {
                foo: "bar".into(),
                n: 7,
            },
        );
        let AttrValue::Any(value) = attr.value() else {
            panic!("expected any kind");
        };
        assert_eq!(value.to_json_value(), json!({"foo": "bar", "n": 7}));
    }
}
