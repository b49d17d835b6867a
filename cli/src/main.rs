//! mdhash CLI
//!
//! SHA-256 / SHA-512 command-line tool with checksum verification and a
//! stage-by-stage trace view.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{check_mode, hash_files, hash_text, trace_text, Algorithm, TraceOptions};
use std::path::PathBuf;
use tracing::Level;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "mdhash")]
#[command(about = "SHA-256 and SHA-512 from one Merkle-Damgard engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash this text instead of files
    #[arg(short, long, value_name = "TEXT", conflicts_with = "files")]
    string: Option<String>,

    /// Hashing algorithm to use
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Algorithm::Sha256,
        env = "MDHASH_ALGO",
        global = true
    )]
    algo: Algorithm,

    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Print every intermediate value of one hash computation
    Trace {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Rounds to show per block
        #[arg(long, value_name = "N")]
        rounds: Option<usize>,

        /// Show only this block
        #[arg(long, value_name = "N")]
        block: Option<usize>,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file)?,
        Some(Commands::Trace {
            text,
            rounds,
            block,
        }) => trace_text(
            text,
            cli.algo,
            TraceOptions {
                rounds: *rounds,
                block: *block,
            },
        )?,
        None => {
            if let Some(text) = &cli.string {
                hash_text(text, cli.algo)?;
                return Ok(());
            }

            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: mdhash [FILE]... | mdhash -s TEXT | mdhash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.algo)?;
        }
    }

    Ok(())
}
