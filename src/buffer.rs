//! `AStr`: an owned, growable, NUL-terminated UTF-8 buffer.
//!
//! The teacher's codebase has no analogue of this type -- its modules all
//! operate on borrowed `&str`/`Vec<u32>` -- so this is grounded instead on
//! `aleph.h`'s `a_str` header comments (`A_MIN_STR_SIZE`, the byte-length/
//! codepoint-length/capacity triple, the always-present zero terminator) and
//! on the `ByteBuffer` design note's invariant discipline (`debug_assert!`
//! around every boundary instead of re-validating on every call).

use crate::codec;
use crate::error::{AStrError, Utf8Error};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Mirrors `aleph.h`'s `A_MIN_STR_SIZE`.
pub const MIN_CAPACITY: usize = 16;

/// An owned, mutable, NUL-terminated UTF-8 buffer with cached lengths.
///
/// Invariants (see `SPEC_FULL.md` §3):
/// - I1: `bytes[..byte_length]` is valid UTF-8.
/// - I2: `bytes[byte_length] == 0`.
/// - I3: `byte_length`/`codepoint_length` agree with the buffer contents.
/// - I4: mutators take `&mut self`, so a reallocation can never leave a stale
///   handle observable -- the borrow checker enforces this structurally.
/// - I5: `capacity` is a power of two, `>= MIN_CAPACITY`.
pub struct AStr {
    bytes: Vec<u8>,
    byte_length: usize,
    codepoint_length: usize,
    /// Logical capacity (I5): bytes available for content, excluding the
    /// terminator, always a power of two `>= MIN_CAPACITY`. Tracked as its
    /// own field rather than derived from `Vec::capacity()`, which can
    /// over-allocate beyond what we asked for and would make `capacity()`
    /// report a non-power-of-two value.
    capacity: usize,
}

fn next_power_of_two_capacity(required: usize) -> usize {
    required.max(MIN_CAPACITY).next_power_of_two()
}

impl AStr {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    pub fn with_capacity(n: usize) -> Self {
        let capacity = next_power_of_two_capacity(n);
        let mut bytes = Vec::with_capacity(capacity + 1);
        bytes.push(0);
        AStr {
            bytes,
            byte_length: 0,
            codepoint_length: 0,
            capacity,
        }
    }

    /// Infallible: a `&str` is already a UTF-8 validity witness.
    pub fn from_str(s: &str) -> Self {
        let mut a = Self::with_capacity(s.len() + 1);
        a.push_str(s);
        a
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    pub fn codepoint_length(&self) -> usize {
        self.codepoint_length
    }

    /// Allocated bytes exclusive of the terminator (I5): always a power of
    /// two `>= MIN_CAPACITY`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.byte_length]
    }

    pub fn as_str(&self) -> &str {
        // Safety argument, not an `unsafe` block: I1 guarantees this is valid
        // UTF-8 at every externally observable point, so the stdlib's
        // validating `from_utf8` path (not `from_utf8_unchecked`) is used
        // rather than asserting the invariant away.
        std::str::from_utf8(self.as_bytes()).expect("AStr invariant I1 violated")
    }

    pub fn as_c_str(&self) -> &std::ffi::CStr {
        std::ffi::CStr::from_bytes_with_nul(&self.bytes[..=self.byte_length])
            .expect("AStr invariant I2 violated")
    }

    /// Ensures room for `additional` more bytes plus the terminator, growing
    /// to the next sufficient power of two (I5) if needed.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.byte_length + additional;
        if required > self.capacity {
            let new_capacity = next_power_of_two_capacity(required);
            let target_len = new_capacity + 1; // + terminator
            if target_len > self.bytes.len() {
                self.bytes.reserve(target_len - self.bytes.len());
            }
            self.capacity = new_capacity;
        }
    }

    /// Exposes the write region beyond `byte_length` for callers that want to
    /// fill the buffer directly (e.g. a decoder writing bytes in bulk) rather
    /// than going through `push_str`/`insert_str`. The caller must call
    /// [`AStr::sync`] afterward; until then, `byte_length`/`codepoint_length`
    /// are stale.
    pub fn as_mut_bytes_for_write(&mut self, additional: usize) -> &mut [u8] {
        self.reserve(additional);
        let start = self.byte_length;
        let end = start + additional;
        if self.bytes.len() < end + 1 {
            self.bytes.resize(end + 1, 0);
        }
        &mut self.bytes[start..end]
    }

    /// Recomputes `byte_length`/`codepoint_length` from the buffer contents
    /// up to the first NUL (or `self.bytes.len() - 1`, whichever is first),
    /// validating UTF-8 along the way. Restores I2/I3 after a direct write
    /// through [`AStr::as_mut_bytes_for_write`].
    pub fn sync(&mut self) -> Result<(), AStrError> {
        let scan_end = self.bytes.len() - 1;
        let slice = &self.bytes[..scan_end];
        codec::validate(slice).map_err(|(err, _)| AStrError::from(err))?;
        self.byte_length = scan_end;
        self.codepoint_length = std::str::from_utf8(slice)
            .map_err(|_| AStrError::from(Utf8Error::InvalidCodeUnit))?
            .chars()
            .count();
        self.bytes[self.byte_length] = 0;
        Ok(())
    }

    pub(crate) fn set_from_bytes(&mut self, byte_length: usize, codepoint_length: usize) {
        self.byte_length = byte_length;
        self.codepoint_length = codepoint_length;
        if self.bytes.len() <= byte_length {
            self.bytes.resize(byte_length + 1, 0);
        }
        self.bytes[byte_length] = 0;
        // Callers that rewrite `bytes` directly (see `mutators.rs`) are
        // expected to have called `reserve` first, but keep I5 honest
        // regardless: the logical capacity never reports less than what the
        // buffer actually holds.
        if byte_length > self.capacity {
            self.capacity = next_power_of_two_capacity(byte_length);
        }
    }

    pub(crate) fn raw_bytes_mut(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }
}

impl Default for AStr {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[u8]> for AStr {
    type Error = AStrError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        codec::validate(bytes).map_err(|(err, _)| AStrError::from(err))?;
        let mut a = Self::with_capacity(bytes.len() + 1);
        a.bytes.truncate(0);
        a.bytes.extend_from_slice(bytes);
        a.bytes.push(0);
        a.byte_length = bytes.len();
        a.codepoint_length = std::str::from_utf8(bytes)
            .expect("codec::validate already confirmed this is valid UTF-8")
            .chars()
            .count();
        Ok(a)
    }
}

impl Clone for AStr {
    fn clone(&self) -> Self {
        let mut a = Self::with_capacity(self.byte_length + 1);
        a.push_str(self.as_str());
        a
    }
}

impl PartialEq for AStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for AStr {}

impl std::fmt::Debug for AStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AStr")
            .field("bytes", &self.as_str())
            .field("byte_length", &self.byte_length)
            .field("codepoint_length", &self.codepoint_length)
            .finish()
    }
}

impl std::fmt::Display for AStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes as a plain JSON string, not the `bytes`/`byte_length`/
/// `codepoint_length` triple -- the cached lengths are a derived index, not
/// part of the value's on-the-wire identity.
impl Serialize for AStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AStr::try_from(s.as_bytes()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_and_terminated() {
        let a = AStr::new();
        assert_eq!(a.byte_length(), 0);
        assert_eq!(a.codepoint_length(), 0);
        assert!(a.capacity() >= MIN_CAPACITY);
        assert_eq!(a.as_str(), "");
    }

    #[test]
    fn test_from_str_and_lengths() {
        let a = AStr::from_str("Café");
        assert_eq!(a.as_str(), "Café");
        assert_eq!(a.codepoint_length(), 4);
        assert_eq!(a.byte_length(), 5); // é is 2 bytes
    }

    #[test]
    fn test_try_from_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x43, 0xFF, 0x41];
        assert!(AStr::try_from(bytes).is_err());
    }

    #[test]
    fn test_try_from_accepts_valid_utf8() {
        let bytes = "héllo".as_bytes();
        let a = AStr::try_from(bytes).unwrap();
        assert_eq!(a.as_str(), "héllo");
    }

    #[test]
    fn test_capacity_is_power_of_two_and_grows() {
        let mut a = AStr::new();
        assert_eq!(a.capacity(), MIN_CAPACITY);
        a.push_str(&"x".repeat(20));
        assert!(a.capacity().is_power_of_two());
        assert!(a.capacity() > 20);
    }

    #[test]
    fn test_as_c_str_includes_terminator() {
        let a = AStr::from_str("hi");
        assert_eq!(a.as_c_str().to_str().unwrap(), "hi");
    }

    #[test]
    fn test_clone_is_independent() {
        let a = AStr::from_str("abc");
        let mut b = a.clone();
        b.push_str("d");
        assert_eq!(a.as_str(), "abc");
        assert_eq!(b.as_str(), "abcd");
    }

    #[test]
    fn test_serde_round_trip() {
        let a = AStr::from_str("Café");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"Café\"");
        let back: AStr = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
