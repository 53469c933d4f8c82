//! Statistics reporting.

use console::style;

use crate::upload::BatchState;

/// Print counters for a finished batch.
pub fn print_batch_stats(state: &BatchState) {
    println!();
    println!("{}", style("Statistics:").bold());
    println!("  Uploaded:         {}", style(state.uploaded).green());
    println!("  Token refetches:  {}", state.token_refetches);
    println!("  Rate-limit waits: {}", state.ratelimit_waits);
}
