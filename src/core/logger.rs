//! Back-end JSON event logger
//!
//! A [`Logger`] is a cheap value: cloning shares the sink. It carries a
//! minimum [`Level`], a [`DurationUnit`], and bound context fields that are
//! merged into every event it opens. It never emits timestamps or call-site
//! fields of its own; those belong to the record layer above it.

use crate::core::context::Context;
use crate::core::event::Event;
use crate::core::fields::{DurationUnit, FieldBuf};
use crate::core::level::Level;
use crate::sinks::Sink;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) level: Level,
    pub(crate) duration_unit: DurationUnit,
    pub(crate) context: FieldBuf,
}

impl Logger {
    /// Create a logger writing newline-delimited JSON to `sink`, with no
    /// level filtering (minimum `Trace`).
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            level: Level::Trace,
            duration_unit: DurationUnit::default(),
            context: FieldBuf::default(),
        }
    }

    /// A copy of the logger with a new minimum level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// The configured minimum level.
    pub fn get_level(&self) -> Level {
        self.level
    }

    /// A copy of the logger with a new duration serialization unit.
    #[must_use]
    pub fn duration_unit(mut self, unit: DurationUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Start a context builder seeded with this logger's bound fields.
    pub fn with(&self) -> Context {
        Context::new(self.clone())
    }

    /// Open an event at `level`. The event accumulates fields and emits one
    /// serialized record on [`Event::msg`]; if `level` is below the logger's
    /// minimum the event is disabled and emits nothing.
    pub fn with_level(&self, level: Level) -> Event {
        Event::new(self, level)
    }

    pub fn trace(&self) -> Event {
        self.with_level(Level::Trace)
    }

    pub fn debug(&self) -> Event {
        self.with_level(Level::Debug)
    }

    pub fn info(&self) -> Event {
        self.with_level(Level::Info)
    }

    pub fn warn(&self) -> Event {
        self.with_level(Level::Warn)
    }

    pub fn error(&self) -> Event {
        self.with_level(Level::Error)
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> crate::core::error::Result<()> {
        self.sink.flush()
    }
}
