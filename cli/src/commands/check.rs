//! Check Command
//!
//! Verify checksums from file (like sha256sum -c). The algorithm of each
//! line follows from its digest length.

use crate::commands::hash::hash_file;
use anyhow::{Context, Result};
use mdhash::Variant;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &Path) -> Result<()> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected, file_path)) = line.split_once("  ") else {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        };
        let expected = expected.trim().to_ascii_lowercase();
        let file_path = file_path.trim();
        total += 1;

        let Some(variant) = Variant::from_digest_hex_len(expected.len()) else {
            println!("{file_path}: FAILED (unrecognised digest length {})", expected.len());
            failed += 1;
            continue;
        };

        match hash_file(Path::new(file_path), variant) {
            Ok(actual) if actual == expected => println!("{file_path}: OK"),
            Ok(_) => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e:#})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
