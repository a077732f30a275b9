//! Bound attributes and groups: derived handlers share options, not state.

use structured_log_bridge::prelude::*;

fn main() {
    let sink = BufferSink::new();
    let root = BridgeHandler::new(Logger::new(sink.clone()), HandlerOptions::default());

    let service = root.with_attrs(vec![
        Attr::string("service", "billing"),
        Attr::string("version", "1.4.2"),
    ]);

    let request = service
        .with_group("request")
        .with_attrs(vec![Attr::string("id", "req-7781")]);

    let mut record = Record::new(Severity::INFO, "charge accepted");
    record.add_attr(Attr::float("amount", 12.50));
    request.handle(&record).unwrap();

    // The service-level handler is untouched by the derivation above.
    service
        .handle(&Record::new(Severity::INFO, "heartbeat"))
        .unwrap();

    for line in sink.lines() {
        println!("{}", line);
    }
}
