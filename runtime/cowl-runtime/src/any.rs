///
/// Value Exports
///
/// `extern "C"` entry points over `cowl_std_core` for generated code. Every
/// argument passed by value is consumed; `cowl_any_clone` is the one entry
/// point that borrows. Strings handed in as owned must live in a buffer from
/// `cowl_str_alloc`.
///

use cowl_std_core::{
    Any, bool_to_display, bool_to_double, char_at_any, coerce_to_bool, coerce_to_display,
    coerce_to_double, concat, double_to_bool, double_to_display, double_to_saturating_u64,
    str_length, u64_to_double,
};

use crate::repr::{AnyRepr, alloc_owned};

/// Allocate an owned string buffer of `len` bytes for generated code to fill
#[unsafe(no_mangle)]
pub extern "C" fn cowl_str_alloc(len: usize) -> *mut u8 {
    alloc_owned(len)
}

/// Independent copy of `v`; `v` stays live
///
/// # Safety
/// `v` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_any_clone(v: *const AnyRepr) -> AnyRepr {
    if v.is_null() {
        return AnyRepr::FALSE;
    }
    unsafe { (*v).clone_raw() }
}

/// # Safety
/// `v` must be a live value; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_any_drop(v: AnyRepr) {
    unsafe { v.release() }
}

/// # Safety
/// `v` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_any_to_bool(v: AnyRepr) -> bool {
    coerce_to_bool(unsafe { v.into_any() })
}

/// Number coercion; a string is fatal
///
/// # Safety
/// `v` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_any_to_double(v: AnyRepr) -> f64 {
    coerce_to_double(unsafe { v.into_any() })
}

/// Display string of `v`; strings are returned as they are
///
/// # Safety
/// `v` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_any_to_cow(v: AnyRepr) -> AnyRepr {
    if v.is_str() {
        return v;
    }
    AnyRepr::from_string(coerce_to_display(unsafe { v.into_any() }))
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_double_to_cow(x: f64) -> AnyRepr {
    AnyRepr::from_string(double_to_display(x))
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_bool_to_cow(b: bool) -> AnyRepr {
    AnyRepr::from_string(bool_to_display(b))
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_double_to_bool(x: f64) -> bool {
    double_to_bool(x)
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_bool_to_double(b: bool) -> f64 {
    bool_to_double(b)
}

/// # Safety
/// `v` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_str_length(v: AnyRepr) -> f64 {
    str_length(unsafe { v.into_any() })
}

/// # Safety
/// `v` and `index` must be live values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_char_at(v: AnyRepr, index: AnyRepr) -> AnyRepr {
    let (v, index) = unsafe { (v.into_any(), index.into_any()) };
    AnyRepr::from_string(char_at_any(v, index))
}

/// The `++` builtin over two operands
///
/// # Safety
/// `lhs` and `rhs` must be live values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_concat(lhs: AnyRepr, rhs: AnyRepr) -> AnyRepr {
    let parts: [Any; 2] = unsafe { [lhs.into_any(), rhs.into_any()] };
    AnyRepr::from_string(concat(parts))
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_u64_to_double(n: u64) -> f64 {
    u64_to_double(n)
}

#[unsafe(no_mangle)]
pub extern "C" fn cowl_double_to_u64(x: f64) -> u64 {
    double_to_saturating_u64(x)
}
