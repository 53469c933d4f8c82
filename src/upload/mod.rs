//! Upload module.
//!
//! This module provides:
//! - Per-run upload parameters
//! - Single-file upload with bounded token/rate-limit retries
//! - The sequential batch driver
//! - Batch counters

pub mod batch;
pub mod params;
pub mod retry;
pub mod state;

#[cfg(test)]
pub(crate) mod fake;

pub use batch::run_batch;
pub use params::UploadParams;
pub use retry::upload_file;
pub use state::BatchState;
