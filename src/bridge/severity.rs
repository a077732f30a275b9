//! Front-end to back-end severity mapping

use crate::core::level::{Level, Severity};

/// Map a front-end severity onto the back-end level ladder.
///
/// Total over the whole severity range: buckets are half-open in front-end
/// units, so custom intermediate severities land in the bucket below their
/// ceiling rather than requiring an exact match.
pub fn backend_level(severity: Severity) -> Level {
    if severity < Severity::DEBUG {
        Level::Trace
    } else if severity < Severity::INFO {
        Level::Debug
    } else if severity < Severity::WARN {
        Level::Info
    } else if severity < Severity::ERROR {
        Level::Warn
    } else {
        Level::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let calibration = [
            (Severity::DEBUG.offset(-1), Level::Trace),
            (Severity::DEBUG, Level::Debug),
            (Severity::INFO.offset(-1), Level::Debug),
            (Severity::INFO, Level::Info),
            (Severity::WARN.offset(-1), Level::Info),
            (Severity::WARN, Level::Warn),
            (Severity::WARN.offset(1), Level::Warn),
            (Severity::ERROR.offset(-1), Level::Warn),
            (Severity::ERROR, Level::Error),
            (Severity::ERROR.offset(1), Level::Error),
        ];
        for (severity, expected) in calibration {
            assert_eq!(
                backend_level(severity),
                expected,
                "severity {} mapped wrong",
                severity
            );
        }
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(backend_level(Severity::TRACE), Level::Trace);
        assert_eq!(backend_level(Severity::DEBUG), Level::Debug);
        assert_eq!(backend_level(Severity::INFO), Level::Info);
        assert_eq!(backend_level(Severity::WARN), Level::Warn);
        assert_eq!(backend_level(Severity::ERROR), Level::Error);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(backend_level(Severity(i16::MIN)), Level::Trace);
        assert_eq!(backend_level(Severity::DISABLED), Level::Error);
    }
}
