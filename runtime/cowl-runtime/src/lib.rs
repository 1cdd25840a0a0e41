///
/// cowl Runtime Static Library
///
/// Provides the C ABI called by compiled cowl programs. This crate produces
/// a static library (libcowl_runtime.a) that gets linked with the object
/// file emitted by the compiler.
///
/// Contains:
/// - `AnyRepr`, the two-word value layout shared with generated code
/// - Value builtins (cowl_any_clone, cowl_any_drop, cowl_any_to_bool, ...)
/// - List builtins (cowl_list_new, cowl_list_get, cowl_list_append, ...)
///
/// Every export states whether it consumes or borrows its value arguments.
/// A consumed `AnyRepr` must not be used again by the caller.
///

pub mod any;
pub mod list;
pub mod repr;

pub use any::*;
pub use list::*;
pub use repr::{AnyRepr, StaticStr, TAG_FALSE, TAG_NUMBER, TAG_TRUE};
