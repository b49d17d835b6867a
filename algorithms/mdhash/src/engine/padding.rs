//! Message Preprocessing
//!
//! Turns a byte message into a block-aligned [`Bitstream`]:
//! message bits, a single `1`, zero fill up to `padding_target_bits`, then
//! the original bit length as a fixed-width big-endian integer.

use crate::kernels::word::Word;
use crate::types::{Error, VariantConfig};
use core::fmt;
use tracing::trace;

// =============================================================================
// BITSTREAM
// =============================================================================

/// A byte-aligned bit sequence.
///
/// Messages are always whole bytes and the `1` marker plus zero fill always
/// completes a byte, so the padded stream never ends mid-byte. The bytes are
/// the storage; `Display` renders the `0`/`1` view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitstream {
    bytes: Vec<u8>,
}

impl Bitstream {
    /// Wrap raw bytes (8 bits each, most significant first).
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Parse a textual `0`/`1` string. ASCII whitespace is ignored.
    ///
    /// # Errors
    /// - [`Error::InvalidBitString`] on any other character.
    /// - [`Error::InvalidLength`] if the bit count is not a multiple of 8.
    pub fn from_bit_str(bits: &str) -> Result<Self, Error> {
        let mut bytes = Vec::with_capacity(bits.len() / 8);
        let mut acc = 0u8;
        let mut count = 0usize;

        for (position, c) in bits.chars().enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                c if c.is_ascii_whitespace() => continue,
                found => return Err(Error::InvalidBitString { position, found }),
            };
            acc = (acc << 1) | bit;
            count += 1;
            if count % 8 == 0 {
                bytes.push(acc);
                acc = 0;
            }
        }

        if count % 8 != 0 {
            return Err(Error::InvalidLength {
                bits: count,
                block_bits: 8,
            });
        }
        Ok(Self { bytes })
    }

    /// Length in bits.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// `true` if the stream holds no bits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Backing bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the backing bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Bit at `index` (0 = most significant bit of the first byte).
    #[must_use]
    pub fn bit(&self, index: usize) -> Option<bool> {
        let byte = self.bytes.get(index / 8)?;
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    /// Decode the trailing `length_field_bits` as a big-endian integer.
    ///
    /// `None` if the stream is shorter than the field or the field is wider
    /// than 128 bits.
    #[must_use]
    pub fn trailing_length(&self, length_field_bits: usize) -> Option<u128> {
        let field_bytes = length_field_bits / 8;
        if field_bytes > 16 || field_bytes > self.bytes.len() {
            return None;
        }
        let field = &self.bytes[self.bytes.len() - field_bytes..];
        Some(field.iter().fold(0u128, |acc, b| (acc << 8) | u128::from(*b)))
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.bytes)
    }
}

/// Render bytes as `0`/`1` characters, most significant bit first.
pub(crate) fn write_bits(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:08b}")?;
    }
    Ok(())
}

// =============================================================================
// PADDER
// =============================================================================

/// Pad `message` to a whole number of blocks.
///
/// # Errors
/// - [`Error::MessageTooLong`] if `len(message) * 8` does not fit in
///   `length_field_bits`.
/// - [`Error::InvalidConfig`] if `cfg` fails [`VariantConfig::validate`].
pub fn pad<W: Word>(message: &[u8], cfg: &VariantConfig<W>) -> Result<Bitstream, Error> {
    cfg.validate()?;
    let length_field = encode_bit_length(message.len() as u128, cfg.length_field_bits)?;

    // Message bits + the single `1` bit, then zeros up to the target residue.
    let used_bits = message.len() * 8 + 1;
    let gap_bits = (cfg.padding_target_bits + cfg.block_bits - used_bits % cfg.block_bits)
        % cfg.block_bits;

    let mut bytes = Vec::with_capacity(message.len() + 1 + gap_bits / 8 + length_field.len());
    bytes.extend_from_slice(message);
    // The marker bit is followed by seven zero bits of the fill.
    bytes.push(0x80);
    bytes.resize(bytes.len() + (gap_bits - 7) / 8, 0);
    bytes.extend_from_slice(&length_field);

    let padded = Bitstream { bytes };
    trace!(
        message_bits = message.len() * 8,
        padded_bits = padded.bit_len(),
        "padded message"
    );

    if padded.bit_len() % cfg.block_bits != 0 {
        return Err(Error::InvalidLength {
            bits: padded.bit_len(),
            block_bits: cfg.block_bits,
        });
    }
    Ok(padded)
}

/// Encode the bit length of a `byte_len`-byte message in a
/// `length_field_bits`-wide big-endian field.
pub(crate) fn encode_bit_length(byte_len: u128, length_field_bits: usize) -> Result<Vec<u8>, Error> {
    let too_long = Error::MessageTooLong { length_field_bits };
    if length_field_bits > 128 || length_field_bits % 8 != 0 {
        return Err(too_long);
    }

    let Some(bit_len) = byte_len.checked_mul(8) else {
        return Err(too_long);
    };
    if length_field_bits < 128 && bit_len >> length_field_bits != 0 {
        return Err(too_long);
    }

    let field_bytes = length_field_bits / 8;
    Ok(bit_len.to_be_bytes()[16 - field_bytes..].to_vec())
}
