//! # Error Escalation
//! Platform calls report failures through an [`ErrorCode`] where exactly one value means
//! success. This module turns such codes into log messages, early returns or [`ErrorCondition`]
//! errors. Each call site picks the strategy it needs; none of them retry.
//!
//! ## Log only
//! [`log_on_error`](crate::log_on_error!) logs `"<function>(<line>): <name>"` at error level under
//! the given tag, and carries on:
//! ```
//! # use fault_signal::{log_on_error, EspErr};
//! fn blink() {
//!     log_on_error!(EspErr::OK, "led");
//! }
//! # blink();
//! ```
//!
//! ## Log and return
//! [`return_on_error`](crate::return_on_error!) logs the same message, then returns the code from
//! the enclosing function. The function must return something the code converts `Into`:
//! ```
//! # use fault_signal::{return_on_error, EspErr};
//! fn init_bus() -> EspErr {
//!     return_on_error!(EspErr::TIMEOUT, "i2c");
//!     unreachable!()
//! }
//! assert_eq!(init_bus(), EspErr::TIMEOUT);
//! ```
//!
//! ## Raise
//! [`raise_if_error`](crate::raise_if_error()) wraps a failed code in an [`ErrorCondition`] that
//! records where it happened, so it can be propagated with `?`. The
//! [`raise_if_error`](crate::raise_if_error!) macro also records the function name.
//!
//! ## Trap
//! When nothing sensible is left to do, [`trap_on_error`](crate::trap_on_error!) enters
//! [`periodic_log_trap`](crate::periodic_log_trap) and never returns. See the [`trap`](crate::trap)
//! module for the Morse variant.

pub mod code;
pub mod condition;
mod escalation;

pub use code::ErrorCode;
pub use condition::ErrorCondition;
pub use escalation::{log_error_code, short_function_name};

/// Expands to the unqualified name of the enclosing function, skipping closures.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::short_function_name(type_name_of(f))
    }};
}

/// Logs `"<function>(<line>): <name>"` under `tag` if the code is not a success.
#[macro_export]
macro_rules! log_on_error {
    ($x:expr, $tag:expr$(,)?) => {{
        let err_rc = $x;
        $crate::log_error_code(&err_rc, $tag, $crate::function_name!(), line!());
    }};
}

/// Like [`log_on_error`](crate::log_on_error!), and also returns the code from the enclosing
/// function.
#[macro_export]
macro_rules! return_on_error {
    ($x:expr, $tag:expr$(,)?) => {{
        let err_rc = $x;
        if $crate::log_error_code(&err_rc, $tag, $crate::function_name!(), line!()) {
            return ::core::convert::Into::into(err_rc);
        }
    }};
}

/// Evaluates to `Result<(), ErrorCondition<_>>`, with the file, line and function of the call
/// site recorded on failure.
#[macro_export]
macro_rules! raise_if_error {
    ($x:expr$(,)?) => {
        $crate::raise_at(
            $x,
            $crate::SourceLocation::new(file!(), line!(), column!())
                .with_function($crate::function_name!()),
        )
    };
}

/// Traps forever if the code is not a success: `"<function>(<line>): <name>"` is logged under
/// the `"trap"` tag, calling `delay` between messages.
#[macro_export]
macro_rules! trap_on_error {
    ($x:expr, $delay:expr$(,)?) => {{
        let err_rc = $x;
        if !$crate::ErrorCode::is_success(&err_rc) {
            $crate::trap_with_code(err_rc, $crate::function_name!(), line!(), $delay)
        }
    }};
}
