//! Record codecs
//!
//! The store is generic over a [`RecordCodec`], which converts records to
//! and from [`Literal`] values. The codec owns all record meaning: the store
//! only frames, locks and syncs.
//!
//! `deserialize` must accept every shape a past version of `serialize` may
//! have left on disk.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::literal::{Literal, LiteralError};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unexpected record shape: expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field {0:?}")]
    MissingField(&'static str),

    #[error(transparent)]
    Literal(#[from] LiteralError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

impl CodecError {
    pub fn unexpected_shape(expected: &'static str, found: &Literal) -> Self {
        CodecError::UnexpectedShape {
            expected,
            found: found.kind(),
        }
    }

    pub fn custom(message: impl fmt::Display) -> Self {
        CodecError::Custom(message.to_string())
    }
}

/// Converts records to and from their literal form.
pub trait RecordCodec {
    type Record;

    /// Prepares a record for rendering.
    fn serialize(&self, record: &Self::Record) -> Result<Literal, CodecError>;

    /// Builds a record from a parsed literal.
    fn deserialize(&self, raw: Literal) -> Result<Self::Record, CodecError>;
}

/// Stores [`Literal`] values as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralCodec;

impl RecordCodec for LiteralCodec {
    type Record = Literal;

    fn serialize(&self, record: &Literal) -> Result<Literal, CodecError> {
        Ok(record.clone())
    }

    fn deserialize(&self, raw: Literal) -> Result<Literal, CodecError> {
        Ok(raw)
    }
}

/// A codec assembled from two functions.
///
/// ```
/// use appendstore::literal::Literal;
/// use appendstore::store::{CodecError, FnCodec, RecordCodec};
///
/// let codec = FnCodec::new(
///     |n: &u32| Ok(Literal::from(*n)),
///     |raw: Literal| {
///         raw.as_i64()
///             .and_then(|i| u32::try_from(i).ok())
///             .ok_or_else(|| CodecError::unexpected_shape("u32", &raw))
///     },
/// );
/// assert_eq!(codec.deserialize(Literal::Int(7)).unwrap(), 7);
/// ```
pub struct FnCodec<V, S, D> {
    serialize: S,
    deserialize: D,
    _record: PhantomData<fn() -> V>,
}

impl<V, S, D> FnCodec<V, S, D>
where
    S: Fn(&V) -> Result<Literal, CodecError>,
    D: Fn(Literal) -> Result<V, CodecError>,
{
    pub fn new(serialize: S, deserialize: D) -> Self {
        Self {
            serialize,
            deserialize,
            _record: PhantomData,
        }
    }
}

impl<V, S, D> RecordCodec for FnCodec<V, S, D>
where
    S: Fn(&V) -> Result<Literal, CodecError>,
    D: Fn(Literal) -> Result<V, CodecError>,
{
    type Record = V;

    fn serialize(&self, record: &V) -> Result<Literal, CodecError> {
        (self.serialize)(record)
    }

    fn deserialize(&self, raw: Literal) -> Result<V, CodecError> {
        (self.deserialize)(raw)
    }
}

/// Stores any serde type, going through `serde_json::Value`.
///
/// Struct fields become dict entries with string keys; sequences and tuples
/// become lists.
pub struct SerdeCodec<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> SerdeCodec<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for SerdeCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerdeCodec")
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> RecordCodec for SerdeCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Record = T;

    fn serialize(&self, record: &T) -> Result<Literal, CodecError> {
        let value = serde_json::to_value(record)?;
        Ok(Literal::try_from(value)?)
    }

    fn deserialize(&self, raw: Literal) -> Result<T, CodecError> {
        let value = serde_json::Value::try_from(raw)?;
        Ok(serde_json::from_value(value)?)
    }
}
