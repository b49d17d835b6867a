//! Compression Function
//!
//! One round updates the eight working variables from a schedule word and a
//! round constant. A block runs every round in order, then folds the working
//! variables back into the hash state.

use crate::engine::blocks::Block;
use crate::kernels::schedule::{expand_schedule, Schedule};
use crate::kernels::word::{add_all, Word};
use crate::types::{Error, Rotation, VariantConfig};

/// The eight-word running hash state, `H0..H7`.
pub type HashState<W> = [W; 8];

// =============================================================================
// WORKING VARIABLES
// =============================================================================

/// Registers `a..h` for one block's compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkingVariables<W: Word> {
    /// Register `a`.
    pub a: W,
    /// Register `b`.
    pub b: W,
    /// Register `c`.
    pub c: W,
    /// Register `d`.
    pub d: W,
    /// Register `e`.
    pub e: W,
    /// Register `f`.
    pub f: W,
    /// Register `g`.
    pub g: W,
    /// Register `h`.
    pub h: W,
}

impl<W: Word> WorkingVariables<W> {
    /// Load `a..h` from a hash state.
    #[must_use]
    pub const fn from_state(state: &HashState<W>) -> Self {
        let [a, b, c, d, e, f, g, h] = *state;
        Self { a, b, c, d, e, f, g, h }
    }

    /// Registers in `a..h` order.
    #[must_use]
    pub const fn to_array(&self) -> [W; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }
}

// =============================================================================
// ROUND FUNCTION
// =============================================================================

/// `rotr(x, a) ^ rotr(x, b) ^ rotr(x, c)`.
#[inline(always)]
pub fn big_sigma<W: Word>(x: W, r: Rotation) -> W {
    x.rotr(r.a) ^ x.rotr(r.b) ^ x.rotr(r.c)
}

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere.
#[inline(always)]
pub fn ch<W: Word>(e: W, f: W, g: W) -> W {
    (e & f) ^ (!e & g)
}

/// Majority of `a`, `b`, `c` per bit.
#[inline(always)]
pub fn maj<W: Word>(a: W, b: W, c: W) -> W {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Run round `round` on `v`.
///
/// The output depends only on `v`, the schedule word and the round constant;
/// `round` is accepted so callers can pass loop indices straight through.
#[inline]
#[must_use]
pub fn compress_round<W: Word>(
    round: usize,
    v: WorkingVariables<W>,
    schedule_word: W,
    round_constant: W,
    cfg: &VariantConfig<W>,
) -> WorkingVariables<W> {
    debug_assert!(round < cfg.rounds, "round {round} out of range");
    let [sigma1, sigma0] = cfg.compression_rotations;

    let temp1 = add_all(&[
        v.h,
        big_sigma(v.e, sigma1),
        ch(v.e, v.f, v.g),
        round_constant,
        schedule_word,
    ]);
    let temp2 = big_sigma(v.a, sigma0).wrapping_add(maj(v.a, v.b, v.c));

    WorkingVariables {
        a: temp1.wrapping_add(temp2),
        b: v.a,
        c: v.b,
        d: v.c,
        e: v.d.wrapping_add(temp1),
        f: v.e,
        g: v.f,
        h: v.g,
    }
}

// =============================================================================
// BLOCK COMPRESSION
// =============================================================================

/// Compress one block into `state`, returning the next state.
///
/// # Errors
/// - [`Error::InvalidConfig`] if `cfg` fails [`VariantConfig::validate`].
/// - [`Error::InvalidLength`] if the block is not exactly `block_bits` long.
pub fn compress_block<W: Word>(
    block: &Block<'_>,
    state: &HashState<W>,
    cfg: &VariantConfig<W>,
) -> Result<HashState<W>, Error> {
    let schedule = expand_schedule(block, cfg)?;
    compress_schedule(&schedule, state, cfg)
}

/// Compress an already-expanded schedule into `state`.
///
/// # Errors
/// - [`Error::InvalidConfig`] if `cfg` fails [`VariantConfig::validate`].
/// - [`Error::InvalidLength`] if the schedule does not hold exactly `rounds`
///   words (lengths reported in bits).
pub fn compress_schedule<W: Word>(
    schedule: &[W],
    state: &HashState<W>,
    cfg: &VariantConfig<W>,
) -> Result<HashState<W>, Error> {
    run_rounds(schedule, state, cfg, |_| {})
}

/// Per-block record of everything a stepped view needs to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTrace<W: Word> {
    /// Position of the block in the stream.
    pub index: usize,
    /// The block's bytes.
    pub block: Vec<u8>,
    /// Expanded schedule (`rounds` words).
    pub schedule: Schedule<W>,
    /// Hash state entering the block.
    pub state_before: HashState<W>,
    /// Working variables after each round; `rounds[i]` is the result of round `i`.
    pub rounds: Vec<WorkingVariables<W>>,
    /// Hash state after the fold.
    pub state_after: HashState<W>,
}

/// [`compress_block`] that also records the schedule and every round.
///
/// # Errors
/// Same as [`compress_block`].
pub fn compress_block_traced<W: Word>(
    index: usize,
    block: &Block<'_>,
    state: &HashState<W>,
    cfg: &VariantConfig<W>,
) -> Result<BlockTrace<W>, Error> {
    let schedule = expand_schedule(block, cfg)?;
    let mut rounds = Vec::with_capacity(cfg.rounds);
    let state_after = run_rounds(&schedule, state, cfg, |v| rounds.push(*v))?;

    Ok(BlockTrace {
        index,
        block: block.as_bytes().to_vec(),
        schedule,
        state_before: *state,
        rounds,
        state_after,
    })
}

fn run_rounds<W: Word>(
    schedule: &[W],
    state: &HashState<W>,
    cfg: &VariantConfig<W>,
    mut on_round: impl FnMut(&WorkingVariables<W>),
) -> Result<HashState<W>, Error> {
    cfg.validate()?;
    if schedule.len() != cfg.rounds || cfg.round_constants.len() != cfg.rounds {
        return Err(Error::InvalidLength {
            bits: schedule.len() * W::BYTES * 8,
            block_bits: cfg.rounds * W::BYTES * 8,
        });
    }

    let mut v = WorkingVariables::from_state(state);
    for (i, (w, k)) in schedule.iter().zip(cfg.round_constants).enumerate() {
        v = compress_round(i, v, *w, *k, cfg);
        on_round(&v);
    }

    let working = v.to_array();
    let mut next = *state;
    for (h, x) in next.iter_mut().zip(working) {
        *h = h.wrapping_add(x);
    }
    Ok(next)
}
