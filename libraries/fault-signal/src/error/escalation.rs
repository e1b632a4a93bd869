use crate::error::code::ErrorCode;
use crate::ferror;

/// Logs `"<function>(<line>): <name>"` at error level under `tag` when `code` is not a success.
/// Returns whether something was logged. Used by the escalation macros.
pub fn log_error_code<E: ErrorCode>(code: &E, tag: &str, function: &str, line: u32) -> bool {
    if code.is_success() {
        return false;
    }
    ferror!(tag, "{}({}): {}", function, line, code.name());
    true
}

/// Reduces the type name of an item nested in a function (`crate::module::function::f`) to
/// `function`. Closure segments are skipped.
pub fn short_function_name(full: &'static str) -> &'static str {
    let mut name = full.strip_suffix("::f").unwrap_or(full);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    match name.rfind("::") {
        Some(i) => &name[i + 2..],
        None => name,
    }
}
