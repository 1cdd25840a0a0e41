//!
//! Runtime Value Representation
//!
//! A cowl value is one of:
//! - `Bool` and `Num` - plain values owning nothing
//! - `Str` - a UTF-8 byte buffer, either owned by the value or borrowed from
//!   static data such as string literals emitted by the compiler
//!
//! Dropping a value frees an owned buffer exactly once and never touches a
//! borrowed one. Cloning deep-copies owned buffers and shares borrowed ones.
//! Buffers are not required to be valid UTF-8; display paths decode lossily.
//!

use std::borrow::Cow;
use std::fmt;

use crate::error::{RuntimeError, fatal};

/// String storage for `Any::Str`
#[derive(PartialEq, Eq, Hash)]
pub struct Str(Cow<'static, [u8]>);

impl Str {
    pub fn owned(bytes: Vec<u8>) -> Self {
        Str(Cow::Owned(bytes))
    }

    pub const fn borrowed(bytes: &'static [u8]) -> Self {
        Str(Cow::Borrowed(bytes))
    }

    pub const fn from_static(text: &'static str) -> Self {
        Str::borrowed(text.as_bytes())
    }

    /// The canonical empty string returned by soft failures
    pub const fn empty() -> Self {
        Str::borrowed(b"")
    }

    /// Copy `bytes` into a freshly allocated owned string
    pub fn copy_from(bytes: &[u8]) -> Self {
        let mut buf = alloc_buffer(bytes.len());
        buf.extend_from_slice(bytes);
        Str::owned(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_owned(&self) -> bool {
        matches!(self.0, Cow::Owned(_))
    }

    /// Mutable access to the bytes, copying a borrowed buffer into an owned one first
    pub fn to_mut(&mut self) -> &mut Vec<u8> {
        if let Cow::Borrowed(bytes) = self.0 {
            *self = Str::copy_from(bytes);
        }
        self.0.to_mut()
    }

    pub fn into_bytes(self) -> Cow<'static, [u8]> {
        self.0
    }

    /// Case-insensitive comparison against an ASCII literal
    pub fn eq_ignore_ascii_case(&self, literal: &str) -> bool {
        self.0.eq_ignore_ascii_case(literal.as_bytes())
    }
}

impl Clone for Str {
    fn clone(&self) -> Self {
        match &self.0 {
            Cow::Borrowed(bytes) => Str::borrowed(bytes),
            Cow::Owned(bytes) => Str::copy_from(bytes),
        }
    }
}

impl Default for Str {
    fn default() -> Self {
        Str::empty()
    }
}

impl From<&'static str> for Str {
    fn from(text: &'static str) -> Self {
        Str::from_static(text)
    }
}

impl From<String> for Str {
    fn from(text: String) -> Self {
        Str::owned(text.into_bytes())
    }
}

impl From<Vec<u8>> for Str {
    fn from(bytes: Vec<u8>) -> Self {
        Str::owned(bytes)
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_owned() { "owned" } else { "borrowed" };
        write!(f, "{kind} {:?}", String::from_utf8_lossy(&self.0))
    }
}

/// The tagged value all generated code manipulates
#[derive(Debug, Clone, PartialEq)]
pub enum Any {
    Bool(bool),
    Num(f64),
    Str(Str),
}

impl Any {
    pub fn owned_str(bytes: Vec<u8>) -> Self {
        Any::Str(Str::owned(bytes))
    }

    pub const fn static_str(text: &'static str) -> Self {
        Any::Str(Str::from_static(text))
    }

    pub const fn empty_str() -> Self {
        Any::Str(Str::empty())
    }

    pub fn as_str(&self) -> Option<&Str> {
        match self {
            Any::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True for a string equal to `keyword` ignoring ASCII case
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_str().is_some_and(|s| s.eq_ignore_ascii_case(keyword))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Any::Bool(_) => "boolean",
            Any::Num(_) => "number",
            Any::Str(_) => "string",
        }
    }
}

impl Default for Any {
    fn default() -> Self {
        Any::empty_str()
    }
}

impl From<bool> for Any {
    fn from(b: bool) -> Self {
        Any::Bool(b)
    }
}

impl From<f64> for Any {
    fn from(n: f64) -> Self {
        Any::Num(n)
    }
}

impl From<Str> for Any {
    fn from(s: Str) -> Self {
        Any::Str(s)
    }
}

impl From<&'static str> for Any {
    fn from(text: &'static str) -> Self {
        Any::static_str(text)
    }
}

impl From<String> for Any {
    fn from(text: String) -> Self {
        Any::Str(Str::from(text))
    }
}

impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Any::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Any::Num(n) => fmt::Display::fmt(&crate::number::double_to_display(*n), f),
            Any::Str(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Allocate an empty buffer with room for exactly `len` bytes.
///
/// Allocation failure is fatal.
pub fn alloc_buffer(len: usize) -> Vec<u8> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        fatal(RuntimeError::AllocationFailed { bytes: len });
    }
    buf
}
