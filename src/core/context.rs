//! Reusable context builder

use crate::core::fields::{f64_value, raw_json_value, time_value, FieldWriter};
use crate::core::logger::Logger;
use crate::core::net::{IpPrefix, MacAddr};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::Duration;

/// An immutable accumulator of fields bound to future events.
///
/// Obtained from [`Logger::with`]; every write consumes the context and
/// returns a new one, so a context value can safely seed several independent
/// derivation chains. [`into_logger`](Context::into_logger) bakes the
/// accumulated fields (open groups included) into a derived logger: events it
/// opens start from these fields, and later writes land inside the innermost
/// group still open here.
#[derive(Clone)]
pub struct Context {
    logger: Logger,
}

impl Context {
    pub(crate) fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The derived logger carrying the accumulated fields.
    pub fn into_logger(self) -> Logger {
        self.logger
    }
}

impl FieldWriter for Context {
    fn bool_field(mut self, key: &str, value: bool) -> Self {
        self.logger.context.put(key, Value::Bool(value));
        self
    }

    fn dur_field(mut self, key: &str, value: Duration) -> Self {
        let encoded = self.logger.duration_unit.encode(value);
        self.logger.context.put(key, encoded);
        self
    }

    fn f64_field(mut self, key: &str, value: f64) -> Self {
        self.logger.context.put(key, f64_value(value));
        self
    }

    fn i64_field(mut self, key: &str, value: i64) -> Self {
        self.logger.context.put(key, Value::Number(value.into()));
        self
    }

    fn str_field(mut self, key: &str, value: &str) -> Self {
        self.logger.context.put(key, Value::String(value.to_owned()));
        self
    }

    fn time_field(mut self, key: &str, value: DateTime<Utc>) -> Self {
        self.logger.context.put(key, time_value(&value));
        self
    }

    fn u64_field(mut self, key: &str, value: u64) -> Self {
        self.logger.context.put(key, Value::Number(value.into()));
        self
    }

    fn ip_field(mut self, key: &str, value: std::net::IpAddr) -> Self {
        self.logger.context.put(key, Value::String(value.to_string()));
        self
    }

    fn prefix_field(mut self, key: &str, value: IpPrefix) -> Self {
        self.logger.context.put(key, Value::String(value.to_string()));
        self
    }

    fn mac_field(mut self, key: &str, value: MacAddr) -> Self {
        self.logger.context.put(key, Value::String(value.to_string()));
        self
    }

    fn err_field(mut self, key: &str, value: &dyn std::error::Error) -> Self {
        self.logger.context.put(key, Value::String(value.to_string()));
        self
    }

    fn raw_json_field(mut self, key: &str, value: &[u8]) -> Self {
        self.logger.context.put(key, raw_json_value(value));
        self
    }

    fn value_field(mut self, key: &str, value: Value) -> Self {
        self.logger.context.put(key, value);
        self
    }

    fn open_group(mut self, name: &str) -> Self {
        self.logger.context.open_group(name);
        self
    }

    fn close_groups(mut self, n: Option<usize>) -> Self {
        self.logger.context.close_groups(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::sinks::BufferSink;
    use serde_json::json;

    fn decode(line: &str) -> Value {
        serde_json::from_str(line).expect("valid JSON line")
    }

    #[test]
    fn test_context_is_reusable() {
        let sink = BufferSink::new();
        let base = Logger::new(sink.clone()).with().str_field("service", "api");

        let a = base.clone().str_field("worker", "a").into_logger();
        let b = base.str_field("worker", "b").into_logger();

        a.info().msg("from a");
        b.info().msg("from b");

        let lines = sink.lines();
        let first = decode(&lines[0]);
        let second = decode(&lines[1]);
        assert_eq!(first["service"], json!("api"));
        assert_eq!(first["worker"], json!("a"));
        assert_eq!(second["worker"], json!("b"));
    }

    #[test]
    fn test_open_group_carries_into_events() {
        let sink = BufferSink::new();
        let logger = Logger::new(sink.clone())
            .with()
            .str_field("attr", "top")
            .open_group("scope")
            .into_logger();

        logger
            .with_level(Level::Warn)
            .str_field("inner", "v")
            .msg("nested");

        let decoded = decode(&sink.lines()[0]);
        assert_eq!(decoded["attr"], json!("top"));
        assert_eq!(decoded["scope"], json!({"inner": "v"}));
        assert_eq!(decoded["message"], json!("nested"));
    }
}
