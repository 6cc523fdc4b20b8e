//! Letter rotation primitives.
//!
//! Every function here is pure. Only the 52 ASCII letters are moved; all
//! other bytes and scalar values are fixed points, so applying any of these
//! twice restores the input.

use crate::consts::{ALPHABET_LEN, ROT13_SHIFT};

/// Rotates an ASCII letter 13 places forward, wrapping within its case.
///
/// Non-letters (digits, punctuation, bytes `>= 0x80`) are returned unchanged.
///
/// ```
/// use rot13_rs::rot13;
///
/// assert_eq!(rot13(b'a'), b'n');
/// assert_eq!(rot13(b'N'), b'A');
/// assert_eq!(rot13(b'7'), b'7');
/// ```
#[inline(always)]
pub const fn rot13(byte: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => b'A' + (byte - b'A' + ROT13_SHIFT) % ALPHABET_LEN,
        b'a'..=b'z' => b'a' + (byte - b'a' + ROT13_SHIFT) % ALPHABET_LEN,
        _ => byte,
    }
}

/// Scalar-value form of [`rot13`].
///
/// Anything outside ASCII (accented letters, other scripts, symbols) passes
/// through, so the encoded width of `ch` never changes.
#[inline(always)]
pub const fn rot13_char(ch: char) -> char {
    if ch.is_ascii() {
        rot13(ch as u8) as char
    } else {
        ch
    }
}

/// Applies [`rot13`] to every byte of `bytes` in place.
///
/// Safe on UTF-8 text: continuation bytes are never ASCII letters.
#[inline]
pub fn rot13_bytes(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        *byte = rot13(*byte);
    }
}

/// Applies [`rot13_char`] to every element of `chars` in place.
#[inline]
pub fn rot13_chars(chars: &mut [char]) {
    for ch in chars.iter_mut() {
        *ch = rot13_char(*ch);
    }
}

/// Returns a new string with [`rot13_char`] applied to every scalar value.
#[must_use]
pub fn rot13_str(text: &str) -> String {
    text.chars().map(rot13_char).collect()
}
