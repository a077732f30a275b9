//! Basic usage: records through a handler onto an NDJSON stdout logger.

use std::time::Duration;
use structured_log_bridge::prelude::*;

fn main() {
    let logger = Logger::new(WriterSink::new(std::io::stdout())).level(Level::Debug);
    let handler = BridgeHandler::new(logger, HandlerOptions::default());

    let mut record = Record::new(Severity::INFO, "server started");
    record.add_attr(Attr::string("addr", "0.0.0.0:8080"));
    record.add_attr(Attr::uint("workers", 4));
    handler.handle(&record).unwrap();

    let mut record = Record::new(Severity::WARN, "slow request")
        .with_source(SourceLocation::caller());
    record.add_attr(Attr::duration("elapsed", Duration::from_millis(1530)));
    record.add_attr(Attr::group(
        "route",
        vec![Attr::string("method", "GET"), Attr::string("path", "/search")],
    ));
    handler.handle(&record).unwrap();

    // Below the logger's Debug minimum and mapped to back-end Trace: dropped.
    let record = Record::new(Severity::DEBUG.offset(-2), "noisy detail");
    if handler.enabled(record.level()) {
        handler.handle(&record).unwrap();
    }
}
