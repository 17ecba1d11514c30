//! A capturing sink for tests

use core::fmt;

use crate::Print;

/// Records every byte written to it, up to `N` bytes.
///
/// Writes that would overflow are rejected whole.
pub struct Capture<const N: usize = 128> {
    buffer: [u8; N],
    len: usize,
}

impl Capture {
    pub const fn new() -> Self {
        Self::with_capacity()
    }
}

impl<const N: usize> Capture<N> {
    pub const fn with_capacity() -> Self {
        Capture {
            buffer: [0; N],
            len: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap()
    }
}

impl<const N: usize> Print for Capture<N> {
    fn write_bytes(&mut self, bytes: &[u8]) -> fmt::Result {
        let end = self.len.checked_add(bytes.len()).ok_or(fmt::Error)?;
        if end > N {
            return Err(fmt::Error);
        }
        self.buffer[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}
