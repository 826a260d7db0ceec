//! Append store
//!
//! Persists an ordered sequence of records in a single file. Each record is
//! rendered as literal text and terminated by a NUL byte; records are
//! appended durably (flush, fsync, chmod `0660`) under an exclusive
//! path-scoped lock.
//!
//! # Usage
//!
//! ```no_run
//! use appendstore::literal::Literal;
//! use appendstore::store::{AppendStore, LiteralCodec};
//!
//! let store = AppendStore::new("/var/lib/appendstore/audit.mk", LiteralCodec);
//! store.append(&Literal::from("host created"))?;
//! for record in store.read()? {
//!     println!("{}", record);
//! }
//! # Ok::<(), appendstore::store::StoreError>(())
//! ```

mod append_store;
mod codec;
mod config;
mod errors;
mod lock;
mod record;

pub use append_store::{AppendStore, STORE_FILE_MODE};
pub use codec::{CodecError, FnCodec, LiteralCodec, RecordCodec, SerdeCodec};
pub use config::{RewriteLocking, StoreConfig};
pub use errors::{BoxError, Severity, StoreError, StoreErrorCode, StoreResult};
pub use lock::{held_depth, PathLock};
pub use record::{
    decode_fragment, encode_record, Fragment, FragmentError, RecordFragments, RECORD_SEPARATOR,
};
