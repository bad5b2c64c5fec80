//! Thin stream adapters over [`parse`] and [`format`].
//!
//! These exist purely for caller convenience; all the interesting
//! behaviour lives in the text-based entry points.

use std::io::{self, Read, Write};

use json5_util::{FormatError, ParseError};

use crate::format::format;
use crate::parser::parse;
use crate::value::Value;

/// A failure while reading, parsing, writing, or formatting through a
/// stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The stream's text was not valid JSON5.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The value could not be serialised.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Reads all of `reader` as UTF-8 text and parses it as JSON5.
pub fn load<R: Read>(mut reader: R) -> Result<Value, StreamError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text)?)
}

/// Formats `value` and writes it to `writer`.
pub fn dump<W: Write>(value: &Value, mut writer: W, indent: Option<usize>) -> Result<(), StreamError> {
    let text = format(value, indent)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}
