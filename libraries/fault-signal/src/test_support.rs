//! Log capture shared by the unit tests. The sink is process wide while the tests run on parallel
//! threads, so every thread collects its own records.

use crate::{FaultLogging, Record};
use std::cell::RefCell;
use std::string::String;
use std::vec::Vec;

thread_local! {
    static EVENTS: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn capture(record: &Record<'_>) {
    let line = format!("{:?}|{}|{}", record.level, record.tag, record.args);
    EVENTS.with(|events| events.borrow_mut().push(line));
}

/// Installs the capturing sink and clears this thread's records.
pub fn install() {
    FaultLogging::set_sink(capture);
    EVENTS.with(|events| events.borrow_mut().clear());
}

/// Records a non-log event (e.g. a delay) so that its ordering with log lines can be checked.
pub fn push(event: &str) {
    EVENTS.with(|events| events.borrow_mut().push(String::from(event)));
}

/// Returns and clears this thread's records.
pub fn take() -> Vec<String> {
    EVENTS.with(|events| events.take())
}
