///
/// Two-Word Value Layout
///
/// Generated code holds values as a pair of machine words `(tag, payload)`:
/// - tag 0 / 1 - `false` / `true`, payload unused
/// - tag 2 - number, payload holds the f64 bit pattern
/// - tag >= 3 - string, tag is the address of the bytes and payload their length
///
/// The low bit of a string address is the ownership flag. Owned buffers are
/// allocated by this runtime with 8-byte alignment, so their low bit is 0.
/// Borrowed buffers are static data placed at odd addresses (see `StaticStr`)
/// and are never freed. The tag word is always the real address of the bytes.
///
/// Crossing into the safe `Any` type copies owned bytes into a `Vec`, and
/// crossing back copies them into a runtime allocation.
///

use std::alloc::{Layout, alloc, dealloc};

use cowl_std_core::{Any, RuntimeError, Str, fatal};

pub const TAG_FALSE: usize = 0;
pub const TAG_TRUE: usize = 1;
pub const TAG_NUMBER: usize = 2;

const BORROWED_BIT: usize = 1;
const OWNED_ALIGN: usize = 8;

const _: () = assert!(usize::BITS == 64, "AnyRepr stores f64 bits in one word");

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyRepr {
    pub tag: usize,
    pub payload: usize,
}

/// Static string data laid out at an odd address, so its address doubles
/// as a borrowed-string tag
#[repr(C, align(2))]
pub struct StaticStr<const N: usize> {
    _pad: u8,
    bytes: [u8; N],
}

impl<const N: usize> StaticStr<N> {
    pub const fn new(bytes: [u8; N]) -> Self {
        Self { _pad: 0, bytes }
    }

    pub fn as_bytes(&'static self) -> &'static [u8] {
        &self.bytes
    }

    pub fn repr(&'static self) -> AnyRepr {
        AnyRepr { tag: self.bytes.as_ptr() as usize, payload: N }
    }
}

static EMPTY: StaticStr<0> = StaticStr::new([]);

/// Allocate an owned string buffer of `len` bytes; failure is fatal
pub fn alloc_owned(len: usize) -> *mut u8 {
    if len == 0 {
        return EMPTY.repr().tag as *mut u8;
    }
    let Ok(layout) = Layout::from_size_align(len, OWNED_ALIGN) else {
        fatal(RuntimeError::AllocationFailed { bytes: len });
    };
    let ptr = unsafe { alloc(layout) };
    if ptr.is_null() {
        fatal(RuntimeError::AllocationFailed { bytes: len });
    }
    ptr
}

/// Free a buffer returned by `alloc_owned`.
///
/// # Safety
/// `ptr` and `len` must come from one `alloc_owned` call, freed only once.
pub unsafe fn free_owned(ptr: *mut u8, len: usize) {
    if len == 0 {
        return;
    }
    if let Ok(layout) = Layout::from_size_align(len, OWNED_ALIGN) {
        unsafe { dealloc(ptr, layout) };
    }
}

impl AnyRepr {
    pub const FALSE: AnyRepr = AnyRepr { tag: TAG_FALSE, payload: 0 };
    pub const TRUE: AnyRepr = AnyRepr { tag: TAG_TRUE, payload: 0 };

    pub fn boolean(b: bool) -> Self {
        if b { Self::TRUE } else { Self::FALSE }
    }

    pub fn number(x: f64) -> Self {
        AnyRepr { tag: TAG_NUMBER, payload: x.to_bits() as usize }
    }

    pub fn empty_str() -> Self {
        EMPTY.repr()
    }

    pub fn is_str(&self) -> bool {
        self.tag > TAG_NUMBER
    }

    pub fn is_owned_str(&self) -> bool {
        self.is_str() && self.tag & BORROWED_BIT == 0
    }

    pub fn from_any(v: Any) -> Self {
        match v {
            Any::Bool(b) => Self::boolean(b),
            Any::Num(x) => Self::number(x),
            Any::Str(s) => Self::from_string(s),
        }
    }

    /// Odd-addressed static data stays borrowed; everything else is copied
    /// into a runtime-owned buffer
    pub fn from_string(s: Str) -> Self {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Self::empty_str();
        }
        let addr = bytes.as_ptr() as usize;
        if !s.is_owned() && addr & BORROWED_BIT == BORROWED_BIT {
            return AnyRepr { tag: addr, payload: bytes.len() };
        }
        Self::owned_copy(bytes)
    }

    fn owned_copy(bytes: &[u8]) -> Self {
        let ptr = alloc_owned(bytes.len());
        unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, bytes.len()) };
        AnyRepr { tag: ptr as usize, payload: bytes.len() }
    }

    /// Bytes of a string value.
    ///
    /// # Safety
    /// `self` must be a live string value.
    pub unsafe fn as_bytes<'a>(&self) -> &'a [u8] {
        unsafe { std::slice::from_raw_parts(self.tag as *const u8, self.payload) }
    }

    /// Convert into the safe value type, consuming `self`.
    ///
    /// # Safety
    /// `self` must be a live value; borrowed strings must point at static data.
    pub unsafe fn into_any(self) -> Any {
        match self.tag {
            TAG_FALSE => Any::Bool(false),
            TAG_TRUE => Any::Bool(true),
            TAG_NUMBER => Any::Num(f64::from_bits(self.payload as u64)),
            _ => Any::Str(unsafe { self.into_str() }),
        }
    }

    /// # Safety
    /// `self` must be a live string value.
    pub unsafe fn into_str(self) -> Str {
        let bytes: &'static [u8] = unsafe { self.as_bytes() };
        if !self.is_owned_str() {
            return Str::borrowed(bytes);
        }
        let s = Str::copy_from(bytes);
        unsafe { free_owned(self.tag as *mut u8, self.payload) };
        s
    }

    /// Independent copy of a value, leaving `self` untouched.
    ///
    /// # Safety
    /// `self` must be a live value.
    pub unsafe fn clone_raw(&self) -> Self {
        if self.is_owned_str() {
            Self::owned_copy(unsafe { self.as_bytes() })
        } else {
            *self
        }
    }

    /// Free an owned string; a no-op for everything else.
    ///
    /// # Safety
    /// `self` must be a live value and is dead afterwards.
    pub unsafe fn release(self) {
        if self.is_owned_str() {
            unsafe { free_owned(self.tag as *mut u8, self.payload) };
        }
    }
}
