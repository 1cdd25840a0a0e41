///
/// Coercions
///
/// The language's loose typing rules, applied when generated code needs a
/// bool, a number or a display string out of an `Any`:
///
/// | value        | bool                      | number     | display       |
/// |--------------|---------------------------|------------|---------------|
/// | `false`      | false                     | 0          | "false"       |
/// | `true`       | true                      | 1          | "true"        |
/// | number       | false for 0 and -0        | itself     | formatted     |
/// | string       | false for "", "0", "false"| fatal      | itself        |
///
/// The typed helpers (`double_to_bool`, `str_to_bool`, ...) are the fast paths
/// used when the compiler already knows the static type of an expression.
///

use crate::error::{RuntimeError, fatal};
use crate::number::double_to_display;
use crate::value::{Any, Str};

pub fn double_to_bool(x: f64) -> bool {
    // NaN compares unequal to zero and is therefore truthy
    x != 0.0
}

pub fn bool_to_double(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

pub fn bool_to_display(b: bool) -> Str {
    Str::from_static(if b { "true" } else { "false" })
}

/// Truthiness of a string, consuming it
pub fn str_to_bool(s: Str) -> bool {
    let bytes = s.as_bytes();
    !(bytes.is_empty() || bytes == b"0" || s.eq_ignore_ascii_case("false"))
}

pub fn coerce_to_bool(v: Any) -> bool {
    match v {
        Any::Bool(b) => b,
        Any::Num(x) => double_to_bool(x),
        Any::Str(s) => str_to_bool(s),
    }
}

/// Checked number coercion; strings are rejected
pub fn try_coerce_to_double(v: Any) -> Result<f64, RuntimeError> {
    match v {
        Any::Bool(b) => Ok(bool_to_double(b)),
        Any::Num(x) => Ok(x),
        Any::Str(s) => Err(RuntimeError::StringToNumber { text: s.to_string() }),
    }
}

/// Number coercion. Coercing a string terminates the process.
pub fn coerce_to_double(v: Any) -> f64 {
    match try_coerce_to_double(v) {
        Ok(x) => x,
        Err(err) => fatal(err),
    }
}

/// Display string of `v`; strings pass through with their ownership
pub fn coerce_to_display(v: Any) -> Str {
    match v {
        Any::Bool(b) => bool_to_display(b),
        Any::Num(x) => double_to_display(x),
        Any::Str(s) => s,
    }
}

/// Run `f` over the display bytes of `v`, then drop them.
///
/// `v` is dropped exactly once, after `f` returns.
pub fn with_display<R>(v: Any, f: impl FnOnce(&[u8]) -> R) -> R {
    let display = coerce_to_display(v);
    let result = f(display.as_bytes());
    drop(display);
    result
}
