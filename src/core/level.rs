//! Severity definitions for both sides of the bridge
//!
//! The front-end [`Severity`] is an open-ended ordered value: record sources
//! may use any intermediate value, not just the named constants. The back-end
//! [`Level`] is the logger's own five-step enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Back-end log level, as written into the `level` field of each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    /// Wire name of the level, used as the `level` field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Trace => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(format!("Invalid level: '{}'", s)),
        }
    }
}

/// Front-end record severity.
///
/// Modeled as an ordered numeric value so callers can express granularity the
/// back-end does not have (`Severity::WARN.offset(1)` sits strictly between
/// `WARN` and `ERROR`). The named constants anchor the scale; [`DISABLED`] is
/// a sentinel above every real severity, usable as a minimum level that
/// suppresses all records.
///
/// [`DISABLED`]: Severity::DISABLED
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Severity(pub i16);

impl Severity {
    pub const TRACE: Severity = Severity(-8);
    pub const DEBUG: Severity = Severity(-4);
    pub const INFO: Severity = Severity(0);
    pub const WARN: Severity = Severity(4);
    pub const ERROR: Severity = Severity(8);
    /// Sentinel above every real severity.
    pub const DISABLED: Severity = Severity(i16::MAX);

    /// The severity shifted by `delta` front-end units.
    #[must_use]
    pub fn offset(self, delta: i16) -> Severity {
        Severity(self.0.saturating_add(delta))
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::INFO
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Severity::DISABLED {
            return write!(f, "DISABLED");
        }
        let (name, base) = if *self < Severity::DEBUG {
            ("TRACE", Severity::TRACE)
        } else if *self < Severity::INFO {
            ("DEBUG", Severity::DEBUG)
        } else if *self < Severity::WARN {
            ("INFO", Severity::INFO)
        } else if *self < Severity::ERROR {
            ("WARN", Severity::WARN)
        } else {
            ("ERROR", Severity::ERROR)
        };
        let delta = self.0 - base.0;
        if delta == 0 {
            write!(f, "{}", name)
        } else {
            write!(f, "{}{:+}", name, delta)
        }
    }
}
