//! Console sink with pretty, colorized rendering

use super::Sink;
use crate::core::error::Result;
use crate::core::fields::{LEVEL_FIELD, MESSAGE_FIELD, TIMESTAMP_FIELD};
use crate::core::level::Level;
use colored::Colorize;
use serde_json::Value;

/// Human-oriented sink: decodes each serialized record and renders
/// `time LEVEL message key=value ...` instead of raw JSON.
///
/// Error-level records go to stderr, everything else to stdout.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn level_of(value: &Value) -> Level {
        value
            .get(LEVEL_FIELD)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn format_line(&self, value: &Value) -> String {
        let Some(object) = value.as_object() else {
            return value.to_string();
        };

        let level = Self::level_of(value);
        let level_str = if self.use_colors {
            format!("{:5}", level.as_str().to_uppercase())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:5}", level.as_str().to_uppercase())
        };

        let time = object
            .get(TIMESTAMP_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("-");
        let message = object
            .get(MESSAGE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("");

        let mut out = format!("{} {} {}", time, level_str, message);
        for (key, field) in object {
            if matches!(key.as_str(), LEVEL_FIELD | MESSAGE_FIELD | TIMESTAMP_FIELD) {
                continue;
            }
            match field {
                Value::String(s) => out.push_str(&format!(" {}={}", key, s)),
                other => out.push_str(&format!(" {}={}", key, other)),
            }
        }
        out
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let (output, level) = match serde_json::from_slice::<Value>(line) {
            Ok(value) => (self.format_line(&value), Self::level_of(&value)),
            Err(_) => (String::from_utf8_lossy(line).into_owned(), Level::Info),
        };

        if level >= Level::Error {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
