//! src/stream/filter.rs
//! The `Rot13<S>` decorator and its constructors.

use crate::stream::chars::CharRead;
use std::io::{Read, Write};

/// Wraps one underlying stream and applies ROT13 to the data crossing it.
///
/// The wrapper owns no buffers and carries no state between calls. Each
/// operation is a single call on the inner stream, so byte counts, end of
/// stream and errors come back exactly as the inner stream reported them.
///
/// Stacking two wrappers is the identity:
///
/// ```
/// use rot13_rs::Rot13;
/// use std::io::Read;
///
/// let mut twice = Rot13::new(Rot13::new(&b"Hello, World!"[..]));
/// let mut out = String::new();
/// twice.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "Hello, World!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rot13<S> {
    inner: S,
}

impl<S> Rot13<S> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Shared access to the wrapped stream.
    pub const fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutable access to the wrapped stream.
    ///
    /// Reading or writing through this reference bypasses the rotation.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap, returning the underlying stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Returns a reader whose `read` calls `reader.read` and rotates the bytes it produced.
#[inline]
pub fn new_reader<R: Read>(reader: R) -> Rot13<R> {
    Rot13::new(reader)
}

/// Returns a writer that rotates the given bytes before passing them to `writer.write`.
#[inline]
pub fn new_writer<W: Write>(writer: W) -> Rot13<W> {
    Rot13::new(writer)
}

/// Returns a char reader whose `read_char` calls `reader.read_char` and rotates the result.
#[inline]
pub fn new_char_reader<C: CharRead>(reader: C) -> Rot13<C> {
    Rot13::new(reader)
}
