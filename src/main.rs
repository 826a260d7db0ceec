//! appendstore CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`; errors go to stderr with
//! a non-zero exit status.

use appendstore::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
