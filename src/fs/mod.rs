//! Filesystem module.
//!
//! Provides:
//! - Sorted listing of the source folder
//! - Offset selection for resuming a batch
//! - Wiki file name derivation

pub mod listing;
pub mod naming;

pub use listing::{list_source_files, BatchPlan, SourceFile, SourceListing};
pub use naming::decode_upload_name;
