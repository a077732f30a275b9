//! Output sinks for serialized records
//!
//! A sink receives one serialized JSON object per finalized event and owns
//! line framing and any interior locking; loggers and their clones share a
//! sink and perform no locking of their own.

use crate::core::error::Result;

mod buffer;
#[cfg(feature = "console")]
mod console;
mod file;
mod writer;

pub use buffer::BufferSink;
#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use file::FileSink;
pub use writer::WriterSink;

pub trait Sink: Send + Sync {
    /// Write one serialized record (without trailing newline).
    fn write_line(&self, line: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
