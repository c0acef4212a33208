use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::error::GenError;
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A single JSON array, one record per line between the brackets
    Array,
    /// JSON Lines, one complete object per line
    Lines,
}

impl Format {
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Format::Array => "catsoundsarray.json",
            Format::Lines => "catsoundslines.json",
        }
    }
}

/// Compact JSON with a space after every `:` and `,`, e.g. `{"id": 0, "sound": "meow"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes a single record with [`SpacedFormatter`], without any framing.
///
/// # Errors
/// Errors when the underlying writer fails
pub fn write_record_json<W: Write>(writer: &mut W, record: &Record) -> Result<(), GenError> {
    let mut ser = Serializer::with_formatter(writer, SpacedFormatter);
    record.serialize(&mut ser)?;
    Ok(())
}

/// A framing that records are streamed into, one at a time.
pub trait RecordSink {
    type Output;

    /// # Errors
    /// Errors when the record cannot be serialized or written
    fn write_record(&mut self, record: &Record) -> Result<(), GenError>;

    /// Writes any closing framing and flushes.
    ///
    /// # Errors
    /// Errors when the closing bytes cannot be written or the flush fails
    fn finish(self) -> Result<Self::Output, GenError>;
}

/// Writes `[\n`, the records joined by `,\n`, then `\n]` with no trailing newline.
#[derive(Debug)]
pub struct ArrayWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> ArrayWriter<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        ArrayWriter { inner, written: 0 }
    }

    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> RecordSink for ArrayWriter<W> {
    type Output = W;

    fn write_record(&mut self, record: &Record) -> Result<(), GenError> {
        let separator: &[u8] = if self.written == 0 { b"[\n" } else { b",\n" };
        self.inner.write_all(separator)?;
        write_record_json(&mut self.inner, record)?;
        self.written += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<W, GenError> {
        if self.written == 0 {
            self.inner.write_all(b"[\n")?;
        }
        self.inner.write_all(b"\n]")?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Writes every record followed by `\n`, including the last.
#[derive(Debug)]
pub struct LinesWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> LinesWriter<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        LinesWriter { inner, written: 0 }
    }

    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write> RecordSink for LinesWriter<W> {
    type Output = W;

    fn write_record(&mut self, record: &Record) -> Result<(), GenError> {
        write_record_json(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<W, GenError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
