//! Literal-expression values
//!
//! Records are stored as text in the Python `repr` / `ast.literal_eval`
//! grammar: `None`, `True`, `False`, integers, floats, quoted strings,
//! lists, tuples and dicts. The grammar is evaluated without executing
//! anything, and files written by older producers of the same format stay
//! readable.
//!
//! # Usage
//!
//! ```
//! use appendstore::literal::{parse, Literal};
//!
//! let value = parse("{'host': 'srv01', 'ports': [80, 443]}").unwrap();
//! assert_eq!(value.get("host"), Some(&Literal::from("srv01")));
//! assert_eq!(value.to_text().unwrap(), "{'host': 'srv01', 'ports': [80, 443]}");
//! ```

mod errors;
mod json;
mod parser;
mod render;
mod value;

pub use errors::{LiteralError, LiteralResult};
pub use parser::{parse, MAX_NESTING_DEPTH};
pub use value::Literal;
