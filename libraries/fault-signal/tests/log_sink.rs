//! The sink is process wide, so clearing it is checked in its own test binary.

use fault_signal::{ferror, finfo, FaultLogging, Record};
use std::sync::Mutex;

static RECEIVED: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn sink(record: &Record<'_>) {
    RECEIVED
        .lock()
        .unwrap()
        .push(format!("{}: {}", record.tag, record.args));
}

#[test]
fn cleared_sink_receives_nothing() {
    FaultLogging::set_sink(sink);
    finfo!("boot", "sink set");

    FaultLogging::clear_sink();
    ferror!("boot", "sink cleared");

    assert_eq!(*RECEIVED.lock().unwrap(), ["boot: sink set"]);
}
