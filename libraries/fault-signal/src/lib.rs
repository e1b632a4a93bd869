#![cfg_attr(not(test), no_std)]

//!
//! This crate contains the error handling shared by the boards: escalating platform error codes
//! (log, early return, `Result`) and the traps entered when an error is fatal, which keep
//! signalling it on the log or in Morse code on an LED until the board is reset.
//!

pub mod error;
mod logging;
pub mod trap;

#[cfg(test)]
mod test_support;

pub use crate::error::code::{ErrorCode, EspErr};
pub use crate::error::condition::{
    raise_at, raise_if_error, wrap_as_condition, ErrorCondition, SourceLocation,
    CONDITION_MESSAGE_CAPACITY,
};
pub use crate::error::{log_error_code, short_function_name};
pub use crate::logging::{FaultLogging, LogLevel, Record};
pub use crate::trap::{
    periodic_log_trap, sos_trap, trap_with_code, MorseTiming, MorseWriter, PinMorseWriter,
};
