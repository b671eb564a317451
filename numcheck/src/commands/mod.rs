//! Command modules for the numcheck CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`]; `run_*` functions are the entry points used by
//! `main`.

pub mod common;
pub mod traits;

pub mod check;
pub mod parse;
pub mod scan;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use parse::{run_parse, ParseArgs, ParseMode};
pub use scan::{run_scan, ScanArgs};
