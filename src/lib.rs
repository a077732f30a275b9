//! # Structured Log Bridge
//!
//! A bridge between a typed structured-logging front end and a back-end JSON
//! event logger.
//!
//! Record sources produce [`Record`]s carrying typed attributes; a
//! [`BridgeHandler`] maps each record onto the back-end [`Logger`], which
//! serializes one JSON object per record to a pluggable [`Sink`].
//!
//! ## Features
//!
//! - **Typed attributes**: booleans, integers, floats, strings, durations,
//!   timestamps, nested groups, and opaque values with capability probing
//! - **Chainable builders**: reusable contexts and single-use events share
//!   one field-writing surface
//! - **Thread safe**: handlers and loggers are immutable values; sinks own
//!   their locking
//!
//! ## Example
//!
//! ```
//! use structured_log_bridge::prelude::*;
//!
//! let sink = BufferSink::new();
//! let handler = BridgeHandler::new(Logger::new(sink.clone()), HandlerOptions::default());
//!
//! let mut record = Record::new(Severity::INFO, "request served");
//! record.add_attr(Attr::int("status", 200));
//! record.add_attr(Attr::group("route", vec![Attr::string("path", "/health")]));
//! handler.handle(&record).unwrap();
//!
//! assert!(sink.contents().contains("request served"));
//! ```

pub mod bridge;
pub mod core;
pub mod sinks;

pub mod prelude {
    pub use crate::bridge::{
        backend_level, write_attr, write_attrs, BridgeHandler, HandlerOptions, LogHandler,
    };
    pub use crate::core::{
        AnyValue, Attr, AttrValue, BridgeError, Context, DurationUnit, ErrorValue, Event,
        FieldWriter, IpPrefix, Level, Logger, MacAddr, Record, Result, Severity, SourceLocation,
        CALLER_FIELD, LEVEL_FIELD, MESSAGE_FIELD, TIMESTAMP_FIELD,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::{BufferSink, FileSink, Sink, WriterSink};
}

pub use crate::bridge::{backend_level, BridgeHandler, HandlerOptions, LogHandler};
pub use crate::core::{
    AnyValue, Attr, AttrValue, BridgeError, Context, DurationUnit, ErrorValue, Event, FieldWriter,
    IpPrefix, Level, Logger, MacAddr, Record, Result, Severity, SourceLocation,
};
#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::{BufferSink, FileSink, Sink, WriterSink};
