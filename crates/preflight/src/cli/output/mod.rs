//! Output formatting utilities

use console::style;

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print the run summary line
pub fn summary(error_count: usize) {
    let line = format!("found {} errors!", error_count);
    if error_count == 0 {
        println!("{}", style(line).green().bold());
    } else {
        println!("{}", style(line).red().bold());
    }
}
