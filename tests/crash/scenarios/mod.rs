//! Crash scenarios, one module per operation

mod append;
mod rewrite;
