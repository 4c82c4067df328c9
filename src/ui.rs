//! Terminal output helpers for the binary.

use std::path::Path;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Show the old and new version of a manifest after a change.
pub fn display_version_change(manifest: &Path, old: &str, new: &str) {
    display_status(&format!("Updating {}", manifest.display()));
    println!("  From: \x1b[31m{}\x1b[0m", old);
    println!("  To:   \x1b[32m{}\x1b[0m", new);
}

/// Print a bare version on stdout so it can be captured by scripts.
pub fn display_version(version: &str) {
    println!("{}", version);
}
