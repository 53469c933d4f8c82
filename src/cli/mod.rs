//! Command-line interface.

pub mod args;

pub use args::{parse_error_exit_code, Args, AssertionArg};
