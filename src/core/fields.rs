//! Field accumulation shared by both builder shapes
//!
//! [`FieldBuf`] holds the ordered top-level object of an in-flight record plus
//! an explicit stack of open group frames. [`FieldWriter`] is the capability
//! set both builders ([`Event`](crate::core::Event) and
//! [`Context`](crate::core::Context)) expose; the attribute dispatcher is
//! written once against it.

use crate::core::net::{IpPrefix, MacAddr};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use std::time::Duration;

/// Field name of the back-end level written into every event.
pub const LEVEL_FIELD: &str = "level";
/// Field name of the record timestamp.
pub const TIMESTAMP_FIELD: &str = "time";
/// Field name of the record message.
pub const MESSAGE_FIELD: &str = "message";
/// Field name of the call-site annotation.
pub const CALLER_FIELD: &str = "caller";

/// Unit durations are scaled to before serialization.
///
/// A duration field is written as a number in this unit, not as text:
/// 3 seconds under the default [`Millis`](DurationUnit::Millis) becomes `3000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum DurationUnit {
    Nanos,
    Micros,
    #[default]
    Millis,
    Seconds,
}

impl DurationUnit {
    pub(crate) fn encode(self, value: Duration) -> Value {
        let scaled = match self {
            DurationUnit::Nanos => value.as_secs_f64() * 1e9,
            DurationUnit::Micros => value.as_secs_f64() * 1e6,
            DurationUnit::Millis => value.as_secs_f64() * 1e3,
            DurationUnit::Seconds => value.as_secs_f64(),
        };
        f64_value(scaled)
    }
}

pub(crate) fn f64_value(value: f64) -> Value {
    Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

pub(crate) fn time_value(value: &DateTime<Utc>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Raw marshaled bytes spliced as a JSON value. Bytes that are not valid JSON
/// degrade to an error-annotated string instead of corrupting the record.
pub(crate) fn raw_json_value(bytes: &[u8]) -> Value {
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => Value::String(format!("!ERROR:{}", e)),
    }
}

/// Ordered field accumulator with explicit group nesting.
///
/// Writes land in the innermost open group frame, or at the root when no
/// group is open. Closing a frame inserts it into its parent as a nested
/// object; a frame closed with zero fields still yields `{}`.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldBuf {
    root: Map<String, Value>,
    open: Vec<(String, Map<String, Value>)>,
}

impl FieldBuf {
    pub(crate) fn put(&mut self, key: &str, value: Value) {
        match self.open.last_mut() {
            Some((_, frame)) => {
                frame.insert(key.to_owned(), value);
            }
            None => {
                self.root.insert(key.to_owned(), value);
            }
        }
    }

    /// Write at the top level regardless of open groups. Reserved for the
    /// level, timestamp, and message fields, which must never nest.
    pub(crate) fn put_root(&mut self, key: &str, value: Value) {
        self.root.insert(key.to_owned(), value);
    }

    pub(crate) fn open_group(&mut self, name: &str) {
        self.open.push((name.to_owned(), Map::new()));
    }

    /// Close `n` open groups, or all of them when `n` is `None`.
    pub(crate) fn close_groups(&mut self, n: Option<usize>) {
        let count = n.unwrap_or(self.open.len());
        for _ in 0..count {
            let Some((name, frame)) = self.open.pop() else {
                break;
            };
            self.put(&name, Value::Object(frame));
        }
    }

    /// Finalize into the serializable object, closing any groups still open.
    pub(crate) fn into_object(mut self) -> Map<String, Value> {
        self.close_groups(None);
        self.root
    }
}

/// The attribute-writing surface shared by `Event` and `Context`.
///
/// Every method consumes and returns the builder, so dispatch code is written
/// once, generic over the concrete shape. The typed methods map 1:1 to the
/// scalar attribute kinds; the address, error, and raw-JSON methods back the
/// capability probe for opaque values.
pub trait FieldWriter: Sized {
    fn bool_field(self, key: &str, value: bool) -> Self;
    fn dur_field(self, key: &str, value: Duration) -> Self;
    fn f64_field(self, key: &str, value: f64) -> Self;
    fn i64_field(self, key: &str, value: i64) -> Self;
    fn str_field(self, key: &str, value: &str) -> Self;
    fn time_field(self, key: &str, value: DateTime<Utc>) -> Self;
    fn u64_field(self, key: &str, value: u64) -> Self;
    fn ip_field(self, key: &str, value: std::net::IpAddr) -> Self;
    fn prefix_field(self, key: &str, value: IpPrefix) -> Self;
    fn mac_field(self, key: &str, value: MacAddr) -> Self;
    fn err_field(self, key: &str, value: &dyn std::error::Error) -> Self;
    fn raw_json_field(self, key: &str, value: &[u8]) -> Self;
    /// Reflective fallback: write an already-encoded JSON value.
    fn value_field(self, key: &str, value: Value) -> Self;

    fn open_group(self, name: &str) -> Self;
    /// Close `n` open groups, or all of them when `n` is `None`.
    fn close_groups(self, n: Option<usize>) -> Self;

    /// Run `f` inside a group named `key`, closing it afterwards.
    fn grouped(self, key: &str, f: impl FnOnce(Self) -> Self) -> Self {
        f(self.open_group(key)).close_groups(Some(1))
    }
}
