//! Trace Command
//!
//! Walks the stepped view of one computation and prints each stage.

use crate::commands::hash::Algorithm;
use anyhow::Result;
use mdhash::{Bitstream, Stage, Variant, VariantConfig, Walkthrough, Word, SHA256, SHA512};
use std::io::{self, Write};

/// Output filters for `mdhash trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceOptions {
    /// Rounds shown per block (all when `None`).
    pub rounds: Option<usize>,
    /// Single block to show (all when `None`).
    pub block: Option<usize>,
}

impl TraceOptions {
    fn shows_block(self, block: usize) -> bool {
        self.block.is_none_or(|b| b == block)
    }

    fn shows_round(self, block: usize, round: usize) -> bool {
        self.shows_block(block) && self.rounds.is_none_or(|n| round < n)
    }
}

/// Print the walkthrough of `text`.
pub fn trace_text(text: &str, algo: Algorithm, opts: TraceOptions) -> Result<()> {
    let mut out = io::stdout().lock();
    match algo.variant() {
        Variant::Sha256 => render(&mut out, text.as_bytes(), &SHA256, opts),
        Variant::Sha512 => render(&mut out, text.as_bytes(), &SHA512, opts),
    }
}

fn hex_word<W: Word>(w: W) -> String {
    format!("{w:0width$x}", width = W::BYTES * 2)
}

fn hex_words<W: Word>(words: &[W]) -> String {
    words
        .iter()
        .map(|w| hex_word(*w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render<W: Word>(
    out: &mut impl Write,
    message: &[u8],
    cfg: &VariantConfig<W>,
    opts: TraceOptions,
) -> Result<()> {
    let mut walk = Walkthrough::start(message, cfg)?;

    loop {
        let trace = walk.trace();
        match walk.stage() {
            Stage::Preprocess => {
                writeln!(out, "== {} | preprocess ==", cfg.name)?;
                writeln!(out, "message ({} bits)", message.len() * 8)?;
                writeln!(out, "  {}", Bitstream::from_bytes(message.to_vec()))?;
                writeln!(out, "padded ({} bits)", trace.padded.bit_len())?;
                writeln!(out, "  {}", trace.padded)?;
            }
            Stage::Parse => {
                writeln!(out, "== parse: {} block(s) ==", trace.blocks.len())?;
                for record in trace.blocks.iter().filter(|b| opts.shows_block(b.index)) {
                    writeln!(out, "block {}", record.index)?;
                    writeln!(out, "  {}", Bitstream::from_bytes(record.block.clone()))?;
                }
            }
            Stage::Initialize => {
                writeln!(out, "== initial state ==")?;
                writeln!(out, "  {}", hex_words(&trace.initial_state))?;
            }
            Stage::ExpandSchedule { block } if opts.shows_block(block) => {
                writeln!(out, "== block {block}: schedule ==")?;
                let schedule = walk.current_schedule().unwrap_or_default();
                for (row, chunk) in schedule.chunks(8).enumerate() {
                    writeln!(out, "  w[{:>2}..] {}", row * 8, hex_words(chunk))?;
                }
                writeln!(out, "== block {block}: rounds ==")?;
            }
            Stage::Compress { block, round } if opts.shows_block(block) => {
                let working = walk.current_working();
                if let Some(v) = working.filter(|_| opts.shows_round(block, round)) {
                    writeln!(out, "  t={round:>2} {}", hex_words(&v.to_array()))?;
                }
                if let Some(record) = trace.blocks.get(block) {
                    if round + 1 == record.rounds.len() {
                        writeln!(out, "  fold -> {}", hex_words(&record.state_after))?;
                    }
                }
            }
            Stage::Finalize => {
                let state = walk.current_state().unwrap_or(trace.initial_state);
                writeln!(out, "== final state ==")?;
                writeln!(out, "  {}", hex_words(&state))?;
                writeln!(out, "digest {}", walk.digest().unwrap_or_default())?;
                break;
            }
            Stage::ExpandSchedule { .. } | Stage::Compress { .. } => {}
        }

        walk.advance();
    }

    Ok(())
}
