//! Front-end handler, attribute dispatch, and severity mapping

pub mod dispatch;
pub mod handler;
pub mod severity;

pub use dispatch::{write_attr, write_attrs};
pub use handler::{BridgeHandler, HandlerOptions, LogHandler};
pub use severity::backend_level;
