//! Log record structure

use crate::core::attr::Attr;
use crate::core::level::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Call-site of a log statement.
///
/// The Rust-native rendering of a caller program counter: captured where the
/// record is produced, resolved eagerly to `file:line`. Absence means the
/// call site is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the caller's location.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One front-end log record: severity, message, timestamp, optional call
/// site, and an ordered attribute list.
#[derive(Debug)]
pub struct Record {
    level: Severity,
    message: String,
    timestamp: DateTime<Utc>,
    source: Option<SourceLocation>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            source: None,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    pub fn add_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn source(&self) -> Option<SourceLocation> {
        self.source
    }

    /// Attributes in their declared order.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }
}
