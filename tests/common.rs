//! tests/common.rs
//! Shared fixtures and logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; `RUST_LOG` picks the level.
/// Safe to call from every test.
#[allow(dead_code)] // Used across multiple test files
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// (plaintext, rotated) pairs shared by the reader, writer and char tests
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PAIRS: &[(&[u8], &[u8])] = &[
    (b"123", b"123"),
    (b"abc", b"nop"),
    (b"ABC", b"NOP"),
    (b"123abc", b"123nop"),
    (b"123ABC", b"123NOP"),
    (b"a123Bc", b"n123Op"),
    (&[0x80, b'a'], &[0x80, b'n']),
];

/// Reader that hands out at most `chunk` bytes per call
#[allow(dead_code)]
pub struct Trickle<'a> {
    pub data: &'a [u8],
    pub chunk: usize,
}

impl std::io::Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
