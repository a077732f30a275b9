//! Single-use event builder

use crate::core::fields::{
    f64_value, raw_json_value, time_value, DurationUnit, FieldBuf, FieldWriter, LEVEL_FIELD,
    MESSAGE_FIELD,
};
use crate::core::level::Level;
use crate::core::logger::Logger;
use crate::core::net::{IpPrefix, MacAddr};
use crate::sinks::Sink;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// A mutable accumulator for one in-flight record.
///
/// Opened by [`Logger::with_level`] at a given back-end level, chained by
/// value through the [`FieldWriter`] surface, and finalized exactly once by
/// [`msg`](Event::msg), which writes a single serialized line to the sink.
/// An event opened below the logger's minimum level is disabled: it still
/// accumulates, but finalization emits nothing.
pub struct Event {
    buf: FieldBuf,
    duration_unit: DurationUnit,
    sink: Option<Arc<dyn Sink>>,
}

impl Event {
    pub(crate) fn new(logger: &Logger, level: Level) -> Self {
        let mut buf = logger.context.clone();
        buf.put_root(LEVEL_FIELD, Value::String(level.as_str().to_owned()));
        Self {
            buf,
            duration_unit: logger.duration_unit,
            sink: (level >= logger.level).then(|| Arc::clone(&logger.sink)),
        }
    }

    /// Whether finalizing this event will emit a record.
    pub fn enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Finalize with the record message and emit.
    ///
    /// The message always lands at the top level; any groups left open are
    /// closed first. A sink failure is reported on stderr and swallowed;
    /// emission has no failure path visible to callers.
    pub fn msg(self, message: &str) {
        let Some(sink) = self.sink else {
            return;
        };
        let mut buf = self.buf;
        buf.close_groups(None);
        buf.put_root(MESSAGE_FIELD, Value::String(message.to_owned()));

        match serde_json::to_vec(&Value::Object(buf.into_object())) {
            Ok(line) => {
                if let Err(e) = sink.write_line(&line) {
                    eprintln!("[LOGGER ERROR] Sink write failed: {}", e);
                }
            }
            Err(e) => {
                eprintln!("[LOGGER ERROR] Event serialization failed: {}", e);
            }
        }
    }
}

impl FieldWriter for Event {
    fn bool_field(mut self, key: &str, value: bool) -> Self {
        self.buf.put(key, Value::Bool(value));
        self
    }

    fn dur_field(mut self, key: &str, value: Duration) -> Self {
        let encoded = self.duration_unit.encode(value);
        self.buf.put(key, encoded);
        self
    }

    fn f64_field(mut self, key: &str, value: f64) -> Self {
        self.buf.put(key, f64_value(value));
        self
    }

    fn i64_field(mut self, key: &str, value: i64) -> Self {
        self.buf.put(key, Value::Number(value.into()));
        self
    }

    fn str_field(mut self, key: &str, value: &str) -> Self {
        self.buf.put(key, Value::String(value.to_owned()));
        self
    }

    fn time_field(mut self, key: &str, value: DateTime<Utc>) -> Self {
        self.buf.put(key, time_value(&value));
        self
    }

    fn u64_field(mut self, key: &str, value: u64) -> Self {
        self.buf.put(key, Value::Number(value.into()));
        self
    }

    fn ip_field(mut self, key: &str, value: std::net::IpAddr) -> Self {
        self.buf.put(key, Value::String(value.to_string()));
        self
    }

    fn prefix_field(mut self, key: &str, value: IpPrefix) -> Self {
        self.buf.put(key, Value::String(value.to_string()));
        self
    }

    fn mac_field(mut self, key: &str, value: MacAddr) -> Self {
        self.buf.put(key, Value::String(value.to_string()));
        self
    }

    fn err_field(mut self, key: &str, value: &dyn std::error::Error) -> Self {
        self.buf.put(key, Value::String(value.to_string()));
        self
    }

    fn raw_json_field(mut self, key: &str, value: &[u8]) -> Self {
        self.buf.put(key, raw_json_value(value));
        self
    }

    fn value_field(mut self, key: &str, value: Value) -> Self {
        self.buf.put(key, value);
        self
    }

    fn open_group(mut self, name: &str) -> Self {
        self.buf.open_group(name);
        self
    }

    fn close_groups(mut self, n: Option<usize>) -> Self {
        self.buf.close_groups(n);
        self
    }
}
