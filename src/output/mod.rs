//! Output module for console output.
//!
//! Provides:
//! - Colored status lines
//! - Per-file progress lines
//! - Statistics reporting

pub mod console;
pub mod stats;

pub use self::console::{
    print_error, print_info, print_progress, print_run_summary, print_success, print_warning,
};
pub use stats::print_batch_stats;
