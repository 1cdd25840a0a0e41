//!
//! cowl-std-collections - Collection Types
//!
//! Provides the list engine for cowl programs:
//!
//! - `List::append(value)` - add to the end, growing capacity as `2c + 1`
//! - `List::get(index)` - clone of an element, or the empty string
//! - `List::delete(index)` / `List::delete_all()` - removal
//! - `List::replace(index, value)` - overwrite an element
//! - `List::length()` - the `length` builtin
//!
//! Indices are 1-based; the string `last` in any case names the final element.
//!

pub mod list;

pub use list::*;
