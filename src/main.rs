//! quill entry point
//!
//! Minimal shim: dispatch via cli::run, print errors to stderr, exit
//! non-zero on failure. All bootstrap lives in the cli module.

use quill::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
