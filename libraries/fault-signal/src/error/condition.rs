use crate::error::code::ErrorCode;
use core::fmt::{self, Write};
use core::panic::Location;
use heapless::String;

/// Size of the rendered message of an [`ErrorCondition`].
pub const CONDITION_MESSAGE_CAPACITY: usize = 80;
/// Longest error name copied into the message.
pub const MAX_NAME_LEN: usize = 32;
/// Longest file path copied into the message.
pub const MAX_FILE_LEN: usize = 32;
/// Longest line number copied into the message. A `u32` never needs more.
pub const MAX_LINE_LEN: usize = 10;

const TRUNCATION_MARKER: &str = "...";

// "<name> at <file>:<line>"
const _: () = assert!(
    MAX_NAME_LEN + " at ".len() + MAX_FILE_LEN + ":".len() + MAX_LINE_LEN
        <= CONDITION_MESSAGE_CAPACITY
);

/// Where an error was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    /// Only known when captured through one of the macros.
    pub function: Option<&'static str>,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        SourceLocation {
            file,
            line,
            column,
            function: None,
        }
    }

    /// Location of the caller, following `#[track_caller]` frames.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        SourceLocation::new(location.file(), location.line(), location.column())
    }
}

/// A failed error code together with where it was detected and a rendered, bounded message of
/// the form `"<name> at <file>:<line>"`. This is the error type returned by
/// [`raise_if_error`](crate::raise_if_error).
#[derive(Clone, Debug)]
pub struct ErrorCondition<E> {
    code: E,
    location: SourceLocation,
    message: String<CONDITION_MESSAGE_CAPACITY>,
    truncated: bool,
}

impl<E: ErrorCode> ErrorCondition<E> {
    fn new(code: E, location: SourceLocation) -> Self {
        let mut message = String::new();
        let mut truncated = false;

        let (name, cut) = head(code.name(), MAX_NAME_LEN);
        truncated |= cut;
        message.push_str(name).ok();
        if cut {
            message.push_str(TRUNCATION_MARKER).ok();
        }

        message.push_str(" at ").ok();

        let (file, cut) = tail(location.file, MAX_FILE_LEN);
        truncated |= cut;
        if cut {
            message.push_str(TRUNCATION_MARKER).ok();
        }
        message.push_str(file).ok();

        // The bounds above leave room for any u32, so this cannot fail.
        write!(message, ":{}", location.line).ok();

        ErrorCondition {
            code,
            location,
            message,
            truncated,
        }
    }
}

impl<E> ErrorCondition<E> {
    pub fn code(&self) -> &E {
        &self.code
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` when the name or the file path had to be shortened to fit the message.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<E> fmt::Display for ErrorCondition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for ErrorCondition<E> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.message.as_str())
    }
}

/// Keeps the start of `s`, leaving room for the marker when it is cut.
fn head(s: &str, max: usize) -> (&str, bool) {
    if s.len() <= max {
        return (s, false);
    }
    let mut end = max - TRUNCATION_MARKER.len();
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    (&s[..end], true)
}

/// Keeps the end of `s`, where the file name of a path is.
fn tail(s: &str, max: usize) -> (&str, bool) {
    if s.len() <= max {
        return (s, false);
    }
    let mut start = s.len() - (max - TRUNCATION_MARKER.len());
    while !s.is_char_boundary(start) {
        start += 1;
    }
    (&s[start..], true)
}

/// Wraps `code` into an [`ErrorCondition`], unless it is a success.
pub fn wrap_as_condition<E: ErrorCode>(
    code: E,
    location: SourceLocation,
) -> Option<ErrorCondition<E>> {
    if code.is_success() {
        None
    } else {
        Some(ErrorCondition::new(code, location))
    }
}

/// Converts `code` into a `Result`, capturing the caller's location on failure so it can be
/// propagated with `?`:
/// ```
/// # use fault_signal::{raise_if_error, EspErr, ErrorCondition};
/// fn start_wifi() -> Result<(), ErrorCondition<EspErr>> {
///     raise_if_error(EspErr::OK)?;
///     Ok(())
/// }
/// # assert!(start_wifi().is_ok());
/// ```
#[track_caller]
pub fn raise_if_error<E: ErrorCode>(code: E) -> Result<(), ErrorCondition<E>> {
    raise_at(code, SourceLocation::caller())
}

/// Like [`raise_if_error`], with an explicit location.
pub fn raise_at<E: ErrorCode>(code: E, location: SourceLocation) -> Result<(), ErrorCondition<E>> {
    match wrap_as_condition(code, location) {
        Some(condition) => Err(condition),
        None => Ok(()),
    }
}
