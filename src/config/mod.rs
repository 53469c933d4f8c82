//! Configuration module for mw-bulk-upload.
//!
//! This module handles:
//! - Loading optional settings from a TOML file
//! - Holding the positional job arguments merged in from the CLI
//! - Configuration validation

pub mod assertion;
pub mod loader;
pub mod validation;

pub use assertion::Assertion;
pub use loader::{ClientConfig, Config, JobConfig, UploadConfig, DEFAULT_USER_AGENT};
pub use validation::{parse_endpoint, validate_config};
