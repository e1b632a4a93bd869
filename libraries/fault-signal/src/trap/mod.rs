//! # Fatal Traps
//! A trap is entered once recovery is impossible. It never returns: the board keeps signalling
//! the failure until someone power cycles it.
//!
//! [`periodic_log_trap`] repeats a message on the log. [`sos_trap`] is for when the log itself
//! cannot be trusted (e.g. the failure happened before the UART or radio came up): it blinks SOS,
//! followed by a short diagnostic code, on a [`MorseWriter`] such as an LED:
//! ```ignore
//! let mut writer = PinMorseWriter::new(led, delay, MorseTiming::default());
//! if sd_card_init().is_err() {
//!     sos_trap(&mut writer, Some("SD"));
//! }
//! ```

mod morse;
mod pin_writer;

use crate::error::code::ErrorCode;
use crate::ferror;

pub use morse::{encode, MorseWriter, SOS};
pub use pin_writer::{MorseTiming, PinMorseWriter};

/// Tag used for every message logged by a trap.
pub const TRAP_TAG: &str = "trap";

/// Logs `message` at error level, then calls `delay`, forever.
pub fn periodic_log_trap<D>(mut delay: D, message: &str) -> !
where
    D: FnMut(),
{
    loop {
        ferror!(TRAP_TAG, "{}", message);
        delay();
    }
}

/// Signals SOS on `writer` forever. Every cycle starts with a word gap so repetitions can be told
/// apart, and ends with `code` when given (typically 1-3 characters identifying the error).
pub fn sos_trap<W>(writer: &mut W, code: Option<&str>) -> !
where
    W: MorseWriter + ?Sized,
{
    loop {
        writer.write_word_gap();
        writer.write_sos();
        if let Some(code) = code {
            writer.write_word_gap();
            writer.write_string(code);
        }
    }
}

/// Like [`periodic_log_trap`], with a `"<function>(<line>): <name>"` message. Used by
/// [`trap_on_error`](crate::trap_on_error!).
pub fn trap_with_code<E, D>(code: E, function: &str, line: u32, mut delay: D) -> !
where
    E: ErrorCode,
    D: FnMut(),
{
    loop {
        ferror!(TRAP_TAG, "{}({}): {}", function, line, code.name());
        delay();
    }
}
