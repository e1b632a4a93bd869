//! Error escalation as seen from board code, through the public API only.

use fault_signal::{
    log_on_error, raise_if_error, return_on_error, sos_trap, ErrorCode, ErrorCondition, EspErr,
    FaultLogging, LogLevel, MorseWriter, Record,
};
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static LOGS: RefCell<Vec<(LogLevel, String, String)>> = RefCell::new(Vec::new());
}

fn sink(record: &Record<'_>) {
    let entry = (record.level, record.tag.to_string(), record.args.to_string());
    LOGS.with(|logs| logs.borrow_mut().push(entry));
}

fn take_logs() -> Vec<(LogLevel, String, String)> {
    LOGS.with(|logs| logs.take())
}

/// Stands in for a driver call returning `esp_err_t`.
fn driver_call(code: i32) -> EspErr {
    EspErr::from(code)
}

fn init_radio(status: i32) -> EspErr {
    log_on_error!(driver_call(0x10B), "radio");
    return_on_error!(driver_call(status), "radio");
    EspErr::OK
}

fn init_storage(status: i32) -> Result<(), ErrorCondition<EspErr>> {
    raise_if_error!(driver_call(status))?;
    Ok(())
}

#[test]
fn init_sequence_logs_and_returns() {
    FaultLogging::set_sink(sink);
    take_logs();

    assert_eq!(init_radio(0x107), EspErr::TIMEOUT);

    let logs = take_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|(level, tag, _)| *level == LogLevel::Error && tag == "radio"));
    assert!(logs[0].2.starts_with("init_radio("));
    assert!(logs[0].2.ends_with("ESP_ERR_INVALID_MAC"));
    assert!(logs[1].2.ends_with("ESP_ERR_TIMEOUT"));
}

#[test]
fn successful_init_is_silent() {
    FaultLogging::set_sink(sink);
    take_logs();

    assert!(init_storage(0).is_ok());
    assert!(init_radio(0).is_success());

    // Only the unconditional INVALID_MAC check in init_radio logs.
    assert_eq!(take_logs().len(), 1);
}

#[test]
fn storage_failure_is_raised_with_its_location() {
    let condition = init_storage(0x105).unwrap_err();

    assert_eq!(*condition.code(), EspErr::NOT_FOUND);
    assert_eq!(condition.location().function, Some("init_storage"));
    assert!(condition.to_string().starts_with("ESP_ERR_NOT_FOUND at "));
    assert!(condition.to_string().contains("board_init.rs:"));
}

struct CountingWriter {
    sos: usize,
    strings: Vec<String>,
}

impl MorseWriter for CountingWriter {
    fn write_word_gap(&mut self) {}

    fn write_sos(&mut self) {
        self.sos += 1;
        if self.sos > 2 {
            panic::panic_any("reset");
        }
    }

    fn write_string(&mut self, s: &str) {
        self.strings.push(s.to_string());
    }
}

#[test]
fn fatal_storage_error_blinks_its_code() {
    let mut writer = CountingWriter {
        sos: 0,
        strings: Vec::new(),
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        if init_storage(0x101).is_err() {
            sos_trap(&mut writer, Some("SD"));
        }
    }));

    assert!(result.is_err());
    assert_eq!(writer.sos, 3);
    assert_eq!(writer.strings, ["SD", "SD"]);
}
