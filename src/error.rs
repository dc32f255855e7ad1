//! The error taxonomy shared by every fallible operation in this crate.
//!
//! Every bit-level, PER-level, and message-level operation returns
//! `Result<T, Error>`; nothing recovers from an error internally, and
//! nothing uses out-parameters — a failure is always the `Err` arm of a
//! value-returning call.

use std::fmt;

/// The kind of failure a codec operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The reader does not have enough bits left to satisfy the request.
    EndOfStream,
    /// A numeric value fell outside its declared ASN.1 range, a bit count
    /// fell outside `0..=64`, or a constraint's `max` was less than its `min`.
    InvalidConstraint,
    /// Reserved for bounded alignment failures. `align_to_byte` on the
    /// readers/writers in this crate cannot fail, so this variant is never
    /// produced today.
    AlignmentError,
    /// Reserved for writers with a fixed capacity. [`crate::bits::writer::BitWriter`]
    /// grows without bound, so this variant is never produced today.
    BufferOverflow,
    /// The input is structurally valid PER, but uses a construct this core
    /// does not implement (fragmented lengths, CHOICE extension branches,
    /// unmapped CHOICE indices, the long form of a normally-small integer).
    UnsupportedFeature,
}

/// A codec failure: a [`ErrorKind`] plus a static, log-friendly message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl Error {
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Error { kind, message }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
