//! In-memory capture sink

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared in-memory sink, mainly for tests and demos.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// logger owns another.
#[derive(Clone, Default)]
pub struct BufferSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Captured records, one per line.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut buf = self.buf.lock();
        buf.extend_from_slice(line);
        buf.push(b'\n');
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
