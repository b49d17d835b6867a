//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use clap::ValueEnum;
use mdhash::Variant;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Algorithm {
    /// SHA-256 (32-bit words, 256-bit digest)
    Sha256,
    /// SHA-512 (64-bit words, 512-bit digest)
    Sha512,
}

impl Algorithm {
    pub const fn variant(self) -> Variant {
        match self {
            Self::Sha256 => Variant::Sha256,
            Self::Sha512 => Variant::Sha512,
        }
    }
}

/// Read and hash one file.
///
/// The engine is one-shot, so the whole file is read into memory first.
pub fn hash_file(path: &Path, variant: Variant) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), %variant, "hashing file");
    Ok(mdhash::hash(&data, variant)?)
}

/// Hash files in parallel; print in argument order.
pub fn hash_files(files: &[PathBuf], algo: Algorithm) -> Result<()> {
    let variant = algo.variant();
    let results: Vec<Result<String>> = files
        .par_iter()
        .map(|path| hash_file(path, variant))
        .collect();

    let mut failed = 0usize;
    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(digest) => println!("{digest}  {}", path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}

/// Hash a string argument.
pub fn hash_text(text: &str, algo: Algorithm) -> Result<()> {
    let digest = mdhash::hash(text.as_bytes(), algo.variant())?;
    println!("{digest}  \"{text}\"");
    Ok(())
}
