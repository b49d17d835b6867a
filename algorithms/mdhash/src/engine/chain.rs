//! Chain Controller
//!
//! Feeds blocks through the compression function in order, carrying the
//! hash state forward, and renders the final state as a digest.

use crate::engine::blocks::parse_blocks;
use crate::engine::padding::pad;
use crate::kernels::compress::{compress_block, HashState};
use crate::kernels::word::Word;
use crate::types::{Error, VariantConfig};
use tracing::{debug, debug_span, trace};

// =============================================================================
// HASHING
// =============================================================================

/// Hash `message` and return the final state words.
///
/// The state starts as a fresh copy of `cfg.initial_state` on every call.
///
/// # Errors
/// [`Error::MessageTooLong`] from the padder; [`Error::InvalidConfig`] for a
/// malformed parameter record.
pub fn hash_words<W: Word>(message: &[u8], cfg: &VariantConfig<W>) -> Result<HashState<W>, Error> {
    let _span = debug_span!("hash", variant = cfg.name, message_len = message.len()).entered();

    let padded = pad(message, cfg)?;
    let blocks = parse_blocks(&padded, cfg)?;

    let mut state = cfg.initial_state;
    for (index, block) in blocks.iter().enumerate() {
        state = compress_block(block, &state, cfg)?;
        trace!(block = index, state = %format_digest(&state), "folded block");
    }

    debug!(blocks = blocks.len(), "hash complete");
    Ok(state)
}

/// Hash `message` and return the lowercase hex digest.
///
/// # Errors
/// Same as [`hash_words`].
pub fn hash<W: Word>(message: &[u8], cfg: &VariantConfig<W>) -> Result<String, Error> {
    hash_words(message, cfg).map(|state| format_digest(&state))
}

// =============================================================================
// DIGEST FORMATTING
// =============================================================================

/// State words serialised big-endian, in state order.
#[must_use]
pub fn digest_bytes<W: Word>(state: &HashState<W>) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 * W::BYTES);
    for word in state {
        word.extend_be(&mut out);
    }
    out
}

/// Fixed-width lowercase hex, `BITS / 4` characters per word, no separators.
#[must_use]
pub fn format_digest<W: Word>(state: &HashState<W>) -> String {
    hex::encode(digest_bytes(state))
}
