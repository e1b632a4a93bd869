use core::cell::Cell;
use core::fmt::Arguments;
use critical_section::Mutex;

/// Severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// A single log message, as handed to the sink set with [`FaultLogging::set_sink`].
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    pub level: LogLevel,
    /// Category of the message, e.g. the component name or `"trap"`.
    pub tag: &'a str,
    pub args: Arguments<'a>,
}

static SINK: Mutex<Cell<Option<fn(&Record<'_>)>>> = Mutex::new(Cell::new(None));

/// Log an informational message. This message will be logged using defmt (with the `defmt`
/// feature), and if configured, sent to the sink. Takes a tag followed by `format_args!` style
/// arguments.
#[macro_export]
macro_rules! finfo {
    ($tag:expr, $($arg:tt)+) => {
        $crate::FaultLogging::log($crate::LogLevel::Info, $tag, format_args!($($arg)+))
    };
}

/// Log a warning message. This message will be logged using defmt (with the `defmt` feature), and
/// if configured, sent to the sink. Takes a tag followed by `format_args!` style arguments.
#[macro_export]
macro_rules! fwarning {
    ($tag:expr, $($arg:tt)+) => {
        $crate::FaultLogging::log($crate::LogLevel::Warning, $tag, format_args!($($arg)+))
    };
}

/// Log an error message. This message will be logged using defmt (with the `defmt` feature), and
/// if configured, sent to the sink. Takes a tag followed by `format_args!` style arguments.
#[macro_export]
macro_rules! ferror {
    ($tag:expr, $($arg:tt)+) => {
        $crate::FaultLogging::log($crate::LogLevel::Error, $tag, format_args!($($arg)+))
    };
}

pub struct FaultLogging {}

impl FaultLogging {
    /// Set the function receiving every log record, e.g. to forward them over a radio link or to
    /// persistent storage. This should be called ONCE during init.
    pub fn set_sink(sink: fn(&Record<'_>)) {
        critical_section::with(|cs| SINK.borrow(cs).set(Some(sink)));
    }

    /// Stop forwarding records to the sink. defmt output is unaffected.
    pub fn clear_sink() {
        critical_section::with(|cs| SINK.borrow(cs).set(None));
    }

    /// Log a message. While this function can be called directly, usually the [`ferror`] and
    /// similar macros would be used instead.
    pub fn log(level: LogLevel, tag: &str, args: Arguments<'_>) {
        #[cfg(feature = "defmt")]
        match level {
            LogLevel::Info => defmt::info!("{=str}: {}", tag, defmt::Display2Format(&args)),
            LogLevel::Warning => defmt::warn!("{=str}: {}", tag, defmt::Display2Format(&args)),
            LogLevel::Error => defmt::error!("{=str}: {}", tag, defmt::Display2Format(&args)),
        }

        // The sink runs outside of the critical section so it can block (e.g. on a UART).
        let sink = critical_section::with(|cs| SINK.borrow(cs).get());
        if let Some(sink) = sink {
            sink(&Record { level, tag, args })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support;

    #[test]
    fn macros_forward_level_tag_and_message() {
        test_support::install();

        finfo!("boot", "starting {}", 1);
        fwarning!("sd", "retrying");
        ferror!("can", "bus off after {} frames", 12);

        assert_eq!(
            test_support::take(),
            vec![
                "Info|boot|starting 1",
                "Warning|sd|retrying",
                "Error|can|bus off after 12 frames",
            ]
        );
    }
}
