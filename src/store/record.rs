//! On-disk record framing
//!
//! The file is a flat concatenation of `<literal text><0x00>`. There is no
//! header, count, checksum or schema tag. Empty fragments (a trailing
//! separator, an empty file, doubled separators) carry no record.

use std::str::Utf8Error;

use thiserror::Error;

use crate::literal::{self, Literal, LiteralError, LiteralResult};
use super::errors::BoxError;

/// Byte separating two records
pub const RECORD_SEPARATOR: u8 = 0;

/// Renders a literal and terminates it with the separator.
///
/// Rendered text never contains a NUL byte, so the frame is unambiguous.
pub fn encode_record(literal: &Literal) -> LiteralResult<Vec<u8>> {
    let mut bytes = literal.to_text()?.into_bytes();
    bytes.push(RECORD_SEPARATOR);
    Ok(bytes)
}

/// One non-empty fragment of a store file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Byte offset of the fragment within the file
    pub offset: u64,
    pub bytes: &'a [u8],
}

/// Iterates over the non-empty NUL-separated fragments of a buffer.
pub struct RecordFragments<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordFragments<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for RecordFragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.data.len() {
            let start = self.pos;
            let rest = &self.data[start..];
            let len = rest
                .iter()
                .position(|b| *b == RECORD_SEPARATOR)
                .unwrap_or(rest.len());
            self.pos = start + len + 1;
            if len > 0 {
                return Some(Fragment {
                    offset: start as u64,
                    bytes: &rest[..len],
                });
            }
        }
        None
    }
}

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error(transparent)]
    Utf8(#[from] Utf8Error),

    #[error(transparent)]
    Literal(#[from] LiteralError),
}

impl FragmentError {
    /// The underlying error, unwrapped.
    pub fn into_cause(self) -> BoxError {
        match self {
            FragmentError::Utf8(e) => Box::new(e),
            FragmentError::Literal(e) => Box::new(e),
        }
    }
}

/// Decodes one fragment: UTF-8, then literal parsing.
pub fn decode_fragment(bytes: &[u8]) -> Result<Literal, FragmentError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(literal::parse(text)?)
}
