//! Message Schedule Expansion
//!
//! The first 16 words come straight from the block; every later word mixes
//! four earlier ones through the two small sigma functions.

use crate::engine::blocks::Block;
use crate::kernels::word::{add_all, Word};
use crate::types::{Error, Rotation, VariantConfig};

/// Per-block expanded words, one per round.
pub type Schedule<W> = Vec<W>;

/// `rotr(x, a) ^ rotr(x, b) ^ (x >> c)`.
#[inline(always)]
pub fn small_sigma<W: Word>(x: W, r: Rotation) -> W {
    x.rotr(r.a) ^ x.rotr(r.b) ^ (x >> r.c)
}

/// Expand one block into `cfg.rounds` schedule words.
///
/// # Errors
/// - [`Error::InvalidConfig`] if `cfg` fails [`VariantConfig::validate`].
/// - [`Error::InvalidLength`] if the block is not exactly `block_bits` long.
pub fn expand_schedule<W: Word>(block: &Block<'_>, cfg: &VariantConfig<W>) -> Result<Schedule<W>, Error> {
    cfg.validate()?;
    let bytes = block.as_bytes();
    if bytes.len() != cfg.block_bytes() || bytes.len() != 16 * W::BYTES {
        return Err(Error::InvalidLength {
            bits: block.bit_len(),
            block_bits: cfg.block_bits,
        });
    }

    let [sigma0, sigma1] = cfg.schedule_rotations;
    let mut w: Schedule<W> = Vec::with_capacity(cfg.rounds);
    w.extend(bytes.chunks_exact(W::BYTES).map(W::from_be_slice));

    for i in 16..cfg.rounds {
        let next = add_all(&[
            w[i - 16],
            small_sigma(w[i - 15], sigma0),
            w[i - 7],
            small_sigma(w[i - 2], sigma1),
        ]);
        w.push(next);
    }

    Ok(w)
}
