//! Record handler bound to a back-end logger

use crate::bridge::dispatch::write_attrs;
use crate::bridge::severity::backend_level;
use crate::core::attr::Attr;
use crate::core::error::Result;
use crate::core::fields::{FieldWriter, CALLER_FIELD, TIMESTAMP_FIELD};
use crate::core::level::Severity;
use crate::core::logger::Logger;
use crate::core::record::Record;

/// The front-end logging-adapter contract.
///
/// A handler consumes records from a record source: it reports enablement
/// for a severity, handles one record at a time, and derives new handlers
/// carrying bound attributes or an open group. Derivation never mutates the
/// receiver.
pub trait LogHandler: Send + Sync {
    /// Whether a record at `level` would be logged.
    fn enabled(&self, level: Severity) -> bool;

    /// Handle one record. This layer has no internal failure path: the
    /// result is always `Ok(())`, and sink failures surface in the sink
    /// layer. Callers are expected to consult [`enabled`](LogHandler::enabled)
    /// first; `handle` does not re-check it.
    fn handle(&self, record: &Record) -> Result<()>;

    /// A derived handler with `attrs` bound to every future record.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn LogHandler>;

    /// A derived handler whose future bound and record attributes land
    /// inside a group named `name`.
    fn with_group(&self, name: &str) -> Box<dyn LogHandler>;
}

/// Options for a [`BridgeHandler`]. The zero value is a usable default.
#[derive(Debug, Clone, Default)]
pub struct HandlerOptions {
    /// Attach a `caller` field with the record's call site, when the record
    /// carries one.
    pub add_source: bool,

    /// Minimum record severity, compared in front-end units.
    ///
    /// When unset, filtering defers to the bound logger's own (coarser)
    /// configured level.
    pub level: Option<Severity>,
}

/// A [`LogHandler`] that maps records onto a back-end [`Logger`].
///
/// The supplied logger must not be configured to emit timestamps or
/// call-site fields of its own: both are produced here from record data, and
/// a logger adding them again would duplicate the fields.
#[derive(Clone)]
pub struct BridgeHandler {
    opts: HandlerOptions,
    logger: Logger,
}

impl BridgeHandler {
    pub fn new(logger: Logger, opts: HandlerOptions) -> Self {
        Self { opts, logger }
    }
}

impl LogHandler for BridgeHandler {
    fn enabled(&self, level: Severity) -> bool {
        match self.opts.level {
            Some(min) => level >= min,
            None => backend_level(level) >= self.logger.get_level(),
        }
    }

    fn handle(&self, record: &Record) -> Result<()> {
        let logger = match self.opts.level {
            Some(min) => self.logger.clone().level(backend_level(min)),
            None => self.logger.clone(),
        };
        let mut event = logger.with_level(backend_level(record.level()));

        event = write_attrs(event, record.attrs());

        if self.opts.add_source {
            if let Some(source) = record.source() {
                event = event.str_field(CALLER_FIELD, &source.to_string());
            }
        }

        // Timestamp and message belong at the top level even when the last
        // attribute left a group open.
        event = event.close_groups(None);
        event = event.time_field(TIMESTAMP_FIELD, record.timestamp());
        event.msg(record.message());
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Box<dyn LogHandler> {
        Box::new(Self {
            opts: self.opts.clone(),
            logger: write_attrs(self.logger.with(), &attrs).into_logger(),
        })
    }

    fn with_group(&self, name: &str) -> Box<dyn LogHandler> {
        Box::new(Self {
            opts: self.opts.clone(),
            logger: self.logger.with().open_group(name).into_logger(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::sinks::BufferSink;
    use serde_json::{json, Value};

    fn decode(line: &str) -> Value {
        serde_json::from_str(line).expect("valid JSON line")
    }

    #[test]
    fn test_explicit_minimum_filters_in_frontend_units() {
        let sink = BufferSink::new();
        let handler = BridgeHandler::new(
            Logger::new(sink),
            HandlerOptions {
                level: Some(Severity::WARN),
                ..Default::default()
            },
        );

        assert!(handler.enabled(Severity::WARN));
        assert!(handler.enabled(Severity::ERROR));
        assert!(!handler.enabled(Severity::WARN.offset(-1)));
        assert!(!handler.enabled(Severity::INFO));
    }

    #[test]
    fn test_without_option_defers_to_logger_level() {
        let sink = BufferSink::new();
        let handler = BridgeHandler::new(Logger::new(sink).level(Level::Warn), HandlerOptions::default());

        assert!(handler.enabled(Severity::WARN));
        assert!(handler.enabled(Severity::ERROR.offset(-1)));
        // Coarse comparison: anything mapping below Warn is out.
        assert!(!handler.enabled(Severity::WARN.offset(-1)));
        assert!(!handler.enabled(Severity::INFO));
    }

    #[test]
    fn test_handle_emits_one_line() {
        let sink = BufferSink::new();
        let handler = BridgeHandler::new(Logger::new(sink.clone()), HandlerOptions::default());

        let mut record = Record::new(Severity::INFO, "hello");
        record.add_attr(Attr::string("k", "v"));
        handler.handle(&record).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let decoded = decode(&lines[0]);
        assert_eq!(decoded["level"], json!("info"));
        assert_eq!(decoded["message"], json!("hello"));
        assert_eq!(decoded["k"], json!("v"));
        assert!(decoded.get("time").is_some());
        assert!(decoded.get("caller").is_none());
    }

    #[test]
    fn test_derivation_leaves_parent_untouched() {
        let sink = BufferSink::new();
        let parent = BridgeHandler::new(Logger::new(sink.clone()), HandlerOptions::default());
        let child = parent.with_attrs(vec![Attr::string("bound", "yes")]);

        parent.handle(&Record::new(Severity::INFO, "parent")).unwrap();
        child.handle(&Record::new(Severity::INFO, "child")).unwrap();

        let lines = sink.lines();
        let first = decode(&lines[0]);
        let second = decode(&lines[1]);
        assert!(first.get("bound").is_none());
        assert_eq!(second["bound"], json!("yes"));
    }
}
