//!
//! cowl-std-core - Core Runtime Values
//!
//! This crate provides the value layer every piece of generated cowl code runs on:
//!
//! - `Any` - the tagged value (boolean, number, string) passed between runtime calls
//! - `Str` - string storage that is either owned or borrowed from static data
//! - Coercions to bool, number and display string (the language's loose typing)
//! - Number formatting and the saturating casts used for 1-based indexing
//! - UTF-8 codepoint primitives
//!
//! Ownership follows move semantics: functions taking `Any` by value consume it,
//! functions taking `&Any` only inspect it. Cloning an owned string deep-copies
//! its buffer, cloning anything else is a plain copy.
//!
//! Two failure tiers exist. Soft failures (out-of-range indices) return the
//! borrowed empty string. Fatal failures (coercing a string to a number)
//! terminate the process with the configured fatal status.
//!

pub mod coerce;
pub mod config;
pub mod error;
pub mod number;
pub mod strings;
pub mod value;

pub use coerce::*;
pub use config::{ConfigError, RuntimeConfig};
pub use error::{RuntimeError, fatal};
pub use number::*;
pub use strings::*;
pub use value::*;
