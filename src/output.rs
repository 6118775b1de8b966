//! Integer output formatting.
//!
//! Uses itoa to format values without allocation.

use crate::config::OUTPUT_BUFFER;
use crate::error::Result;
use std::io::{BufWriter, Write};

/// Buffered writer emitting one decimal integer per line.
pub struct IntWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> IntWriter<W> {
    /// Create a new IntWriter with the default 256KB buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(OUTPUT_BUFFER, output)
    }

    /// Create a new IntWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a value followed by a newline.
    #[inline]
    pub fn write_value_line(&mut self, value: i64) -> Result<()> {
        self.writer
            .write_all(self.itoa_buf.format(value).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write every value, one per line.
    pub fn write_values(&mut self, values: &[i64]) -> Result<()> {
        for &value in values {
            self.write_value_line(value)?;
        }
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}
