use std::{error, fmt};

/// Reasons UTF-8 decoding or validation can fail.
///
/// Mirrors the teacher's `DecodeErr` (see `helpers.rs`/`validate.rs`), with
/// `OverlongEncoding` now carrying the code point it decoded to, so a caller
/// repairing the string (or re-encoding it) does not have to re-decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Error {
    /// A multi-byte sequence was truncated by the end of the input.
    IncompleteCharacter,
    /// The decoded value is outside `[0, 0x10FFFF]` or a surrogate half.
    InvalidCodePoint,
    /// The leading byte is not a valid UTF-8 lead byte (`0xC0, 0xC1, 0xF5..=0xFF`).
    InvalidCodeUnit,
    /// The sequence encodes a code point in more bytes than necessary.
    OverlongEncoding(u32),
    /// A continuation byte (`10xxxxxx`) appeared where a lead byte was expected.
    UnexpectedContinuation,
}

impl fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteCharacter => write!(f, "truncated UTF-8 sequence"),
            Self::InvalidCodePoint => write!(f, "decoded code point is out of range or a surrogate"),
            Self::InvalidCodeUnit => write!(f, "byte is not a valid UTF-8 lead byte"),
            Self::OverlongEncoding(cp) => {
                write!(f, "overlong encoding of U+{cp:04X}")
            }
            Self::UnexpectedContinuation => write!(f, "unexpected UTF-8 continuation byte"),
        }
    }
}

impl error::Error for Utf8Error {}

/// The public error taxonomy for this crate.
///
/// `OutOfCodespace` and `NotOnBoundary` from the distilled spec are contract
/// violations here (`debug_assert!` at the call site, see `buffer.rs` and
/// `mutators.rs`) rather than `Result` variants: they can only be caused by a
/// caller passing an already-invalid argument, which Rust's `debug_assert!`
/// convention (abort in debug, compiled out in release) matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AStrError {
    /// Wraps a `Utf8Error` encountered while constructing or syncing an `AStr`.
    Utf8(Utf8Error),
}

impl fmt::Display for AStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8(err) => err.fmt(f),
        }
    }
}

impl error::Error for AStrError {}

impl From<Utf8Error> for AStrError {
    fn from(err: Utf8Error) -> Self {
        Self::Utf8(err)
    }
}
