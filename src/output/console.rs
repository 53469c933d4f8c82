//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the `[position/total] name` line shown before each upload.
pub fn print_progress(position: usize, total: usize, name: &str) {
    println!("{}", progress_line(position, total, name));
}

fn progress_line(position: usize, total: usize, name: &str) -> String {
    format!("[{}/{}] {}", position, total, name)
}

/// Print the run summary.
pub fn print_run_summary(
    endpoint: &str,
    username: &str,
    folder: &str,
    total: usize,
    pending: usize,
    skipped_dirs: usize,
) {
    println!();
    println!("{}", style("Upload run:").bold());
    println!("  Wiki:   {}", endpoint);
    println!("  User:   {}", username);
    println!("  Folder: {}", folder);
    println!("  Files:  {}", files_line(total, pending, skipped_dirs));
    println!();
}

fn files_line(total: usize, pending: usize, skipped_dirs: usize) -> String {
    let mut line = format!("{} listed, {} to upload", total, pending);
    if skipped_dirs > 0 {
        line.push_str(&format!(", {} sub-directories skipped", skipped_dirs));
    }
    line
}
