//! Attribute dispatch onto the builder capability set
//!
//! Written once, generic over [`FieldWriter`], so the same code drives both
//! the reusable [`Context`](crate::core::Context) (handler binding) and the
//! per-record [`Event`](crate::core::Event) (record handling).

use crate::core::attr::{AnyValue, Attr, AttrValue};
use crate::core::fields::FieldWriter;

/// Write a sequence of attributes in order.
pub fn write_attrs<W: FieldWriter>(target: W, attrs: &[Attr]) -> W {
    attrs.iter().fold(target, write_attr)
}

/// Write one attribute, dispatching on its declared kind.
///
/// The seven scalar kinds map 1:1 to dedicated builder methods, preserving
/// the native type to serialization. Groups recurse through a nested scope;
/// an empty group still yields an empty nested object.
pub fn write_attr<W: FieldWriter>(target: W, attr: &Attr) -> W {
    let key = attr.key();
    match attr.value() {
        AttrValue::Bool(value) => target.bool_field(key, *value),
        AttrValue::Duration(value) => target.dur_field(key, *value),
        AttrValue::F64(value) => target.f64_field(key, *value),
        AttrValue::I64(value) => target.i64_field(key, *value),
        AttrValue::Str(value) => target.str_field(key, value),
        AttrValue::Time(value) => target.time_field(key, *value),
        AttrValue::U64(value) => target.u64_field(key, *value),
        AttrValue::Group(children) => target.grouped(key, |t| write_attrs(t, children)),
        AttrValue::Any(value) => write_any(target, key, value.as_ref()),
    }
}

/// Ordered capability probe for opaque values; first match wins.
///
/// Address kinds come before the generic rendering/marshaling probes because
/// address types frequently also render textually in a different form, and
/// exactness requires the most specific capability. Error and stringer come
/// before the marshalers for the same reason, with the shorter form
/// preferred. Marshal failures downgrade to an `!ERROR:`-prefixed string and
/// never abort the record.
fn write_any<W: FieldWriter>(target: W, key: &str, value: &dyn AnyValue) -> W {
    if let Some(addr) = value.as_ip_addr() {
        return target.ip_field(key, addr);
    }
    if let Some(prefix) = value.as_ip_prefix() {
        return target.prefix_field(key, prefix);
    }
    if let Some(mac) = value.as_mac_addr() {
        return target.mac_field(key, mac);
    }
    if let Some(error) = value.as_error() {
        return target.err_field(key, error);
    }
    if let Some(text) = value.display() {
        return target.str_field(key, &text);
    }
    if let Some(result) = value.marshal_json() {
        return match result {
            Ok(bytes) => target.raw_json_field(key, &bytes),
            Err(e) => target.str_field(key, &format!("!ERROR:{}", e)),
        };
    }
    if let Some(result) = value.marshal_text() {
        return match result {
            Ok(text) => target.str_field(key, &text),
            Err(e) => target.str_field(key, &format!("!ERROR:{}", e)),
        };
    }
    target.value_field(key, value.to_json_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BridgeError;
    use serde_json::{json, Value};
    use std::time::Duration;

    /// Minimal writer capturing which method handled each key.
    #[derive(Default)]
    struct Trace {
        calls: Vec<(String, String)>,
    }

    impl Trace {
        fn record(mut self, method: &str, key: &str) -> Self {
            self.calls.push((method.to_owned(), key.to_owned()));
            self
        }
    }

    impl FieldWriter for Trace {
        fn bool_field(self, key: &str, _: bool) -> Self {
            self.record("bool", key)
        }
        fn dur_field(self, key: &str, _: Duration) -> Self {
            self.record("dur", key)
        }
        fn f64_field(self, key: &str, _: f64) -> Self {
            self.record("f64", key)
        }
        fn i64_field(self, key: &str, _: i64) -> Self {
            self.record("i64", key)
        }
        fn str_field(self, key: &str, value: &str) -> Self {
            let tag = format!("str:{}", value);
            self.record(&tag, key)
        }
        fn time_field(self, key: &str, _: chrono::DateTime<chrono::Utc>) -> Self {
            self.record("time", key)
        }
        fn u64_field(self, key: &str, _: u64) -> Self {
            self.record("u64", key)
        }
        fn ip_field(self, key: &str, _: std::net::IpAddr) -> Self {
            self.record("ip", key)
        }
        fn prefix_field(self, key: &str, _: crate::core::IpPrefix) -> Self {
            self.record("prefix", key)
        }
        fn mac_field(self, key: &str, _: crate::core::MacAddr) -> Self {
            self.record("mac", key)
        }
        fn err_field(self, key: &str, _: &dyn std::error::Error) -> Self {
            self.record("err", key)
        }
        fn raw_json_field(self, key: &str, _: &[u8]) -> Self {
            self.record("raw_json", key)
        }
        fn value_field(self, key: &str, _: Value) -> Self {
            self.record("value", key)
        }
        fn open_group(self, name: &str) -> Self {
            self.record("open", name)
        }
        fn close_groups(self, _: Option<usize>) -> Self {
            self.record("close", "")
        }
    }

    #[derive(Debug)]
    struct StringerAndJson;

    impl AnyValue for StringerAndJson {
        fn to_json_value(&self) -> Value {
            Value::Null
        }
        fn display(&self) -> Option<String> {
            Some("rendered".into())
        }
        fn marshal_json(&self) -> Option<Result<Vec<u8>, BridgeError>> {
            Some(Ok(br#"{"via":"json"}"#.to_vec()))
        }
    }

    #[derive(Debug)]
    struct FailingMarshaller;

    impl AnyValue for FailingMarshaller {
        fn to_json_value(&self) -> Value {
            Value::Null
        }
        fn marshal_json(&self) -> Option<Result<Vec<u8>, BridgeError>> {
            Some(Err(BridgeError::marshal("failure")))
        }
    }

    #[test]
    fn test_scalar_kinds_use_dedicated_methods() {
        let attrs = [
            Attr::bool("b", true),
            Attr::int("i", 1),
            Attr::uint("u", 2),
            Attr::float("f", 1.5),
            Attr::duration("d", Duration::from_secs(1)),
        ];
        let trace = write_attrs(Trace::default(), &attrs);
        let methods: Vec<_> = trace.calls.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(methods, ["bool", "i64", "u64", "f64", "dur"]);
    }

    #[test]
    fn test_group_opens_and_closes_scope() {
        let attrs = [Attr::group("g", vec![Attr::int("n", 1)])];
        let trace = write_attrs(Trace::default(), &attrs);
        let methods: Vec<_> = trace.calls.iter().map(|(m, _)| m.as_str()).collect();
        assert_eq!(methods, ["open", "i64", "close"]);
    }

    #[test]
    fn test_stringer_beats_json_marshal() {
        let trace = write_attr(Trace::default(), &Attr::any("v", StringerAndJson));
        assert_eq!(trace.calls, [("str:rendered".to_owned(), "v".to_owned())]);
    }

    #[test]
    fn test_marshal_failure_downgrades() {
        let trace = write_attr(Trace::default(), &Attr::any("v", FailingMarshaller));
        assert_eq!(
            trace.calls,
            [("str:!ERROR:failure".to_owned(), "v".to_owned())]
        );
    }

    #[test]
    fn test_reflective_fallback() {
        let trace = write_attr(Trace::default(), &Attr::any("v", json!({"foo": "bar"})));
        assert_eq!(trace.calls, [("value".to_owned(), "v".to_owned())]);
    }
}
