//! Stepped Walkthrough
//!
//! Records every intermediate value of one hash computation and exposes a
//! cursor that walks the stages in order:
//!
//! ```text
//! Preprocess -> Parse -> Initialize -> { ExpandSchedule -> Compress x rounds } x blocks -> Finalize
//! ```
//!
//! `Finalize` is terminal: neither [`Walkthrough::advance`] nor
//! [`Walkthrough::rewind`] leaves it.

use crate::engine::blocks::parse_blocks;
use crate::engine::chain::format_digest;
use crate::engine::padding::{pad, Bitstream};
use crate::kernels::compress::{compress_block_traced, BlockTrace, HashState, WorkingVariables};
use crate::kernels::word::Word;
use crate::types::{Error, VariantConfig};

// =============================================================================
// TRACE
// =============================================================================

/// Everything computed while hashing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<W: Word> {
    /// Name of the parameter record used.
    pub variant: &'static str,
    /// The raw message.
    pub message: Vec<u8>,
    /// The padded stream.
    pub padded: Bitstream,
    /// State before the first block.
    pub initial_state: HashState<W>,
    /// One record per block, in order.
    pub blocks: Vec<BlockTrace<W>>,
}

impl<W: Word> Trace<W> {
    /// State after the last block.
    #[must_use]
    pub fn final_state(&self) -> HashState<W> {
        self.blocks
            .last()
            .map_or(self.initial_state, |b| b.state_after)
    }

    /// Hex digest of the final state.
    #[must_use]
    pub fn digest(&self) -> String {
        format_digest(&self.final_state())
    }
}

/// Hash `message` while recording every intermediate value.
///
/// # Errors
/// Same as [`crate::engine::hash`].
pub fn trace<W: Word>(message: &[u8], cfg: &VariantConfig<W>) -> Result<Trace<W>, Error> {
    let padded = pad(message, cfg)?;

    let records = {
        let blocks = parse_blocks(&padded, cfg)?;
        let mut state = cfg.initial_state;
        let mut records = Vec::with_capacity(blocks.len());
        for (index, block) in blocks.iter().enumerate() {
            let record = compress_block_traced(index, block, &state, cfg)?;
            state = record.state_after;
            records.push(record);
        }
        records
    };

    Ok(Trace {
        variant: cfg.name,
        message: message.to_vec(),
        padded,
        initial_state: cfg.initial_state,
        blocks: records,
    })
}

// =============================================================================
// STAGES
// =============================================================================

/// Where the cursor of a [`Walkthrough`] sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Message bits and padding.
    Preprocess,
    /// Padded stream split into blocks.
    Parse,
    /// Initial hash state loaded.
    Initialize,
    /// Schedule of `block` expanded.
    ExpandSchedule {
        /// Block index.
        block: usize,
    },
    /// `round` of `block` applied.
    Compress {
        /// Block index.
        block: usize,
        /// Round index.
        round: usize,
    },
    /// Digest available.
    Finalize,
}

// =============================================================================
// WALKTHROUGH
// =============================================================================

/// A cursor over a [`Trace`].
#[derive(Debug, Clone)]
pub struct Walkthrough<W: Word> {
    trace: Trace<W>,
    stage: Stage,
}

impl<W: Word> Walkthrough<W> {
    /// Start at [`Stage::Preprocess`].
    #[must_use]
    pub const fn new(trace: Trace<W>) -> Self {
        Self {
            trace,
            stage: Stage::Preprocess,
        }
    }

    /// Trace and start walking in one go.
    ///
    /// # Errors
    /// Same as [`trace`].
    pub fn start(message: &[u8], cfg: &VariantConfig<W>) -> Result<Self, Error> {
        trace(message, cfg).map(Self::new)
    }

    /// The underlying record.
    #[must_use]
    pub const fn trace(&self) -> &Trace<W> {
        &self.trace
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// `true` once the cursor reached [`Stage::Finalize`].
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Finalize)
    }

    fn rounds(&self, block: usize) -> usize {
        self.trace.blocks.get(block).map_or(0, |b| b.rounds.len())
    }

    /// Number of distinct stages from `Preprocess` to `Finalize` inclusive.
    #[must_use]
    pub fn step_count(&self) -> usize {
        let per_block: usize = self.trace.blocks.iter().map(|b| 1 + b.rounds.len()).sum();
        3 + per_block + 1
    }

    /// Zero-based position of the cursor among [`Self::step_count`] stages.
    #[must_use]
    pub fn position(&self) -> usize {
        let before_block = |block: usize| -> usize {
            3 + self.trace.blocks[..block]
                .iter()
                .map(|b| 1 + b.rounds.len())
                .sum::<usize>()
        };
        match self.stage {
            Stage::Preprocess => 0,
            Stage::Parse => 1,
            Stage::Initialize => 2,
            Stage::ExpandSchedule { block } => before_block(block),
            Stage::Compress { block, round } => before_block(block) + 1 + round,
            Stage::Finalize => self.step_count() - 1,
        }
    }

    /// Move one stage forward. Returns `false` at [`Stage::Finalize`].
    pub fn advance(&mut self) -> bool {
        let blocks = self.trace.blocks.len();
        let next = match self.stage {
            Stage::Preprocess => Stage::Parse,
            Stage::Parse => Stage::Initialize,
            Stage::Initialize if blocks == 0 => Stage::Finalize,
            Stage::Initialize => Stage::ExpandSchedule { block: 0 },
            Stage::ExpandSchedule { block } => Stage::Compress { block, round: 0 },
            Stage::Compress { block, round } if round + 1 < self.rounds(block) => Stage::Compress {
                block,
                round: round + 1,
            },
            Stage::Compress { block, .. } if block + 1 < blocks => {
                Stage::ExpandSchedule { block: block + 1 }
            }
            Stage::Compress { .. } => Stage::Finalize,
            Stage::Finalize => return false,
        };
        self.stage = next;
        true
    }

    /// Move one stage back. Returns `false` at [`Stage::Preprocess`] and at
    /// the terminal [`Stage::Finalize`].
    pub fn rewind(&mut self) -> bool {
        let prev = match self.stage {
            Stage::Preprocess | Stage::Finalize => return false,
            Stage::Parse => Stage::Preprocess,
            Stage::Initialize => Stage::Parse,
            Stage::ExpandSchedule { block: 0 } => Stage::Initialize,
            Stage::ExpandSchedule { block } => Stage::Compress {
                block: block - 1,
                round: self.rounds(block - 1).saturating_sub(1),
            },
            Stage::Compress { block, round: 0 } => Stage::ExpandSchedule { block },
            Stage::Compress { block, round } => Stage::Compress {
                block,
                round: round - 1,
            },
        };
        self.stage = prev;
        true
    }

    /// Jump straight to [`Stage::Finalize`].
    pub const fn skip_to_end(&mut self) {
        self.stage = Stage::Finalize;
    }

    /// Hash state visible at the cursor.
    ///
    /// `None` before initialisation. During a block's rounds this is the
    /// state entering the block; it changes only at the fold.
    #[must_use]
    pub fn current_state(&self) -> Option<HashState<W>> {
        match self.stage {
            Stage::Preprocess | Stage::Parse => None,
            Stage::Initialize => Some(self.trace.initial_state),
            Stage::ExpandSchedule { block } | Stage::Compress { block, .. } => {
                self.trace.blocks.get(block).map(|b| b.state_before)
            }
            Stage::Finalize => Some(self.trace.final_state()),
        }
    }

    /// Working variables after the current round, at a compress stage.
    #[must_use]
    pub fn current_working(&self) -> Option<&WorkingVariables<W>> {
        match self.stage {
            Stage::Compress { block, round } => self.trace.blocks.get(block)?.rounds.get(round),
            _ => None,
        }
    }

    /// Schedule of the current block, at expand or compress stages.
    #[must_use]
    pub fn current_schedule(&self) -> Option<&[W]> {
        match self.stage {
            Stage::ExpandSchedule { block } | Stage::Compress { block, .. } => {
                self.trace.blocks.get(block).map(|b| b.schedule.as_slice())
            }
            _ => None,
        }
    }

    /// The digest, once finished.
    #[must_use]
    pub fn digest(&self) -> Option<String> {
        self.is_finished().then(|| self.trace.digest())
    }
}
