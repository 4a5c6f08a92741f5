//! Console output device.
//!
//! PRN and PRA write into the console's transmit buffer; the simulator drains
//! the buffer to the host after every instruction, so host output order always
//! matches execution order.

use std::io::{self, Write};
use std::mem;

/// Console device with a transmit buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Console {
    tx_buffer: Vec<u8>,
}

impl Console {
    /// Creates a console with an empty transmit buffer.
    pub const fn new() -> Self {
        Self {
            tx_buffer: Vec::new(),
        }
    }

    /// Queues `val` as a decimal number followed by a newline.
    pub fn print_decimal(&mut self, val: u8) {
        self.tx_buffer.extend_from_slice(val.to_string().as_bytes());
        self.tx_buffer.push(b'\n');
    }

    /// Queues the character whose code point is `val`, with no newline.
    pub fn print_char(&mut self, val: u8) {
        let mut utf8 = [0; 4];
        let encoded = char::from(val).encode_utf8(&mut utf8);
        self.tx_buffer.extend_from_slice(encoded.as_bytes());
    }

    /// Bytes queued since the last drain.
    pub fn pending(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Takes every queued byte, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        mem::take(&mut self.tx_buffer)
    }

    /// Writes every queued byte to `out` and clears the buffer.
    ///
    /// # Errors
    ///
    /// Propagates the host write error; the buffer is kept intact in that case.
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.tx_buffer.is_empty() {
            return Ok(());
        }
        out.write_all(&self.tx_buffer)?;
        self.tx_buffer.clear();
        Ok(())
    }
}
