//! Block Parsing
//!
//! Slices a padded [`Bitstream`] into non-overlapping, ordered blocks.

use crate::engine::padding::{write_bits, Bitstream};
use crate::kernels::word::Word;
use crate::types::{Error, VariantConfig};
use core::fmt;

/// One `block_bits`-wide slice of a padded stream.
///
/// Order matters: the hash state chains through blocks in sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    bytes: &'a [u8],
}

impl<'a> Block<'a> {
    /// Wrap a raw slice. No length check happens here; the schedule expander
    /// rejects blocks of the wrong size.
    #[must_use]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Backing bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length in bits.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, self.bytes)
    }
}

/// Split `padded` into blocks in stream order.
///
/// # Errors
/// - [`Error::InvalidConfig`] if `cfg` fails [`VariantConfig::validate`].
/// - [`Error::InvalidLength`] if the stream is empty or not a multiple of
///   `block_bits`. A correct padder never produces either.
pub fn parse_blocks<'a, W: Word>(
    padded: &'a Bitstream,
    cfg: &VariantConfig<W>,
) -> Result<Vec<Block<'a>>, Error> {
    cfg.validate()?;
    let bits = padded.bit_len();
    if bits == 0 || bits % cfg.block_bits != 0 {
        return Err(Error::InvalidLength {
            bits,
            block_bits: cfg.block_bits,
        });
    }

    Ok(padded
        .as_bytes()
        .chunks_exact(cfg.block_bytes())
        .map(Block::from_bytes)
        .collect())
}
