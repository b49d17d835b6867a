//! Public API Layer
//!
//! Variant-keyed entry points. Word-typed values cross this boundary widened
//! to `u64`, so one signature serves both widths.

use crate::engine::dispatcher::dispatch;
use crate::engine::{self, Bitstream, Block};
use crate::kernels::{self, Word};
use crate::types::{Error, Variant, VariantConfig};

// =============================================================================
// HASHING
// =============================================================================

/// Compute the hex digest of `message`.
///
/// One-shot: the whole message must be in memory.
///
/// # Example
/// ```rust
/// use mdhash::Variant;
///
/// let digest = mdhash::hash(b"abc", Variant::Sha256)?;
/// assert_eq!(digest, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
/// # Ok::<(), mdhash::Error>(())
/// ```
///
/// # Errors
/// [`Error::MessageTooLong`] if the bit length overflows the length field.
pub fn hash(message: &[u8], variant: Variant) -> Result<String, Error> {
    dispatch!(variant, |cfg| engine::hash(message, cfg))
}

/// Compute the hex digest of `message` for a variant given by name.
///
/// # Example
/// ```rust
/// let digest = mdhash::hash_named(b"", "sha-512")?;
/// assert_eq!(digest.len(), 128);
/// assert!(mdhash::hash_named(b"", "SHA-384").is_err());
/// # Ok::<(), mdhash::Error>(())
/// ```
///
/// # Errors
/// [`Error::UnsupportedVariant`] for unknown names, otherwise as [`hash`].
pub fn hash_named(message: &[u8], variant: &str) -> Result<String, Error> {
    hash(message, variant.parse()?)
}

/// Hash independent messages, in parallel when the `multithread` feature is on.
///
/// # Errors
/// An error from one of the messages. With `multithread` on, which one is
/// not tied to input order.
pub fn hash_batch<M: AsRef<[u8]> + Sync>(
    messages: &[M],
    variant: Variant,
) -> Result<Vec<String>, Error> {
    dispatch!(variant, |cfg| engine::hash_batch(messages, cfg))
}

// =============================================================================
// INTROSPECTION
// =============================================================================

/// Padded bitstream of `message`.
///
/// # Errors
/// [`Error::MessageTooLong`] if the bit length overflows the length field.
pub fn pad(message: &[u8], variant: Variant) -> Result<Bitstream, Error> {
    dispatch!(variant, |cfg| engine::pad(message, cfg))
}

/// Split a padded stream into blocks.
///
/// # Errors
/// [`Error::InvalidLength`] if the stream is not block aligned.
pub fn parse_blocks(padded: &Bitstream, variant: Variant) -> Result<Vec<Block<'_>>, Error> {
    dispatch!(variant, |cfg| engine::parse_blocks(padded, cfg))
}

/// Expanded schedule of one block, widened to `u64`.
///
/// # Errors
/// [`Error::InvalidLength`] if the block has the wrong size.
pub fn expand_schedule(block: &Block<'_>, variant: Variant) -> Result<Vec<u64>, Error> {
    dispatch!(variant, |cfg| kernels::expand_schedule(block, cfg)
        .map(|w| w.into_iter().map(Word::widen).collect()))
}

/// Compress one block into `state`, returning the next state.
///
/// # Errors
/// - [`Error::WordOutOfRange`] if a state word exceeds the variant's width.
/// - [`Error::InvalidLength`] if the block has the wrong size.
pub fn compress_block(
    block: &Block<'_>,
    state: &[u64; 8],
    variant: Variant,
) -> Result<[u64; 8], Error> {
    dispatch!(variant, |cfg| {
        let narrowed = narrow_state(state, cfg)?;
        let next = kernels::compress_block(block, &narrowed, cfg)?;
        Ok(next.map(Word::widen))
    })
}

/// Initial hash state, widened to `u64`.
#[must_use]
pub fn initial_state(variant: Variant) -> [u64; 8] {
    dispatch!(variant, |cfg| cfg.initial_state.map(Word::widen))
}

/// Hex digest of a (widened) state.
///
/// # Errors
/// [`Error::WordOutOfRange`] if a state word exceeds the variant's width.
pub fn format_digest(state: &[u64; 8], variant: Variant) -> Result<String, Error> {
    dispatch!(variant, |cfg| narrow_state(state, cfg).map(|s| engine::format_digest(&s)))
}

/// Narrow a widened state to the word type of `_cfg`.
fn narrow_state<W: Word>(state: &[u64; 8], _cfg: &VariantConfig<W>) -> Result<[W; 8], Error> {
    let mut out = [W::default(); 8];
    for (index, (slot, value)) in out.iter_mut().zip(state).enumerate() {
        *slot = W::narrow(*value).ok_or(Error::WordOutOfRange {
            index,
            value: *value,
        })?;
    }
    Ok(out)
}
