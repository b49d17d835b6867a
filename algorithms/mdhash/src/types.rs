//! Shared types used across the mdhash library.

use crate::kernels::word::Word;
use core::fmt;
use core::str::FromStr;
use std::error;

// =============================================================================
// VARIANT SELECTION
// =============================================================================

/// The hash widths served by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// 32-bit words, 512-bit blocks, 64 rounds.
    Sha256,
    /// 64-bit words, 1024-bit blocks, 80 rounds.
    Sha512,
}

impl Variant {
    /// Every supported variant, narrow first.
    pub const ALL: [Self; 2] = [Self::Sha256, Self::Sha512];

    /// Canonical display name (`"SHA-256"` / `"SHA-512"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Word width in bits.
    #[must_use]
    pub const fn word_bits(self) -> u32 {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex digest (`word_bits / 4` characters per state word).
    #[must_use]
    pub const fn digest_hex_len(self) -> usize {
        (self.word_bits() as usize / 4) * 8
    }

    /// Infer the variant from the length of a hex digest.
    #[must_use]
    pub fn from_digest_hex_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.digest_hex_len() == len)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts `SHA-256`, `sha256`, `Sha-512`, ... (case-insensitive, dash optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Error::UnsupportedVariant(s.to_owned())),
        }
    }
}

// =============================================================================
// VARIANT PARAMETERS
// =============================================================================

/// A rotation triple `(a, b, c)`.
///
/// In the schedule the third amount is a plain right shift; in compression
/// all three are rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// First rotation amount.
    pub a: u32,
    /// Second rotation amount.
    pub b: u32,
    /// Third amount (shift in the schedule, rotation in compression).
    pub c: u32,
}

impl Rotation {
    /// Build a triple.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

/// Static parameter record for one hash width.
///
/// Pure data: the engine functions take it by reference and keep nothing.
#[derive(Debug, Clone, Copy)]
pub struct VariantConfig<W: Word> {
    /// Human readable name.
    pub name: &'static str,
    /// Word width in bits (32 or 64).
    pub word_bits: u32,
    /// Block width in bits (512 or 1024).
    pub block_bits: usize,
    /// Compression rounds per block (64 or 80).
    pub rounds: usize,
    /// Width of the trailing message-length field (64 or 128).
    pub length_field_bits: usize,
    /// Residue, modulo `block_bits`, the zero padding must reach (448 or 896).
    pub padding_target_bits: usize,
    /// One constant per round.
    pub round_constants: &'static [W],
    /// Hash state before the first block.
    pub initial_state: [W; 8],
    /// `[sigma0, sigma1]` amounts for schedule expansion.
    pub schedule_rotations: [Rotation; 2],
    /// `[Sigma1 (on e), Sigma0 (on a)]` amounts for the round function.
    pub compression_rotations: [Rotation; 2],
}

impl<W: Word> VariantConfig<W> {
    /// Block width in bytes.
    #[must_use]
    pub const fn block_bytes(&self) -> usize {
        self.block_bits / 8
    }

    /// Length-field width in bytes.
    #[must_use]
    pub const fn length_field_bytes(&self) -> usize {
        self.length_field_bits / 8
    }

    /// Length of the formatted digest in hex characters.
    #[must_use]
    pub const fn digest_hex_len(&self) -> usize {
        (self.word_bits as usize / 4) * 8
    }

    /// Check the structural invariants of the record.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), Error> {
        let fail = |reason: &'static str| Err(Error::InvalidConfig { name: self.name, reason });

        if self.word_bits != W::BITS {
            return fail("word_bits does not match the word type");
        }
        if self.round_constants.len() != self.rounds {
            return fail("round_constants length differs from rounds");
        }
        if self.rounds < 16 {
            return fail("fewer rounds than block words");
        }
        if self.block_bits != 16 * self.word_bits as usize {
            return fail("block is not 16 words wide");
        }
        if self.padding_target_bits + self.length_field_bits != self.block_bits {
            return fail("padding target and length field do not fill a block");
        }
        if self.length_field_bits % 8 != 0 || self.length_field_bits > 128 {
            return fail("length field is not a whole number of bytes up to 128 bits");
        }
        let amounts = self
            .schedule_rotations
            .iter()
            .chain(self.compression_rotations.iter())
            .flat_map(|r| [r.a, r.b, r.c]);
        for n in amounts {
            if n == 0 || n >= W::BITS {
                return fail("rotation amount outside 1..word_bits");
            }
        }
        Ok(())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Every failure the engine can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The message bit length does not fit in the length field.
    MessageTooLong {
        /// Width of the length field that overflowed.
        length_field_bits: usize,
    },
    /// A bitstream or block whose length is not a multiple of the block size.
    InvalidLength {
        /// Length that was supplied, in bits.
        bits: usize,
        /// Required granularity, in bits.
        block_bits: usize,
    },
    /// No parameter set matches the requested name.
    UnsupportedVariant(String),
    /// A textual bitstream contained something other than `0` or `1`.
    InvalidBitString {
        /// Character offset of the offending symbol.
        position: usize,
        /// The offending symbol.
        found: char,
    },
    /// A widened state word does not fit the variant's word size.
    WordOutOfRange {
        /// Index of the word in the state.
        index: usize,
        /// The value supplied.
        value: u64,
    },
    /// A parameter record breaks one of its invariants.
    InvalidConfig {
        /// Name of the record.
        name: &'static str,
        /// The invariant that failed.
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLong { length_field_bits } => write!(
                f,
                "message too long: bit length does not fit in {length_field_bits} bits"
            ),
            Self::InvalidLength { bits, block_bits } => write!(
                f,
                "invalid length: {bits} bits is not a positive multiple of {block_bits}"
            ),
            Self::UnsupportedVariant(name) => {
                write!(f, "unsupported variant '{name}'. Supported: SHA-256, SHA-512")
            }
            Self::InvalidBitString { position, found } => {
                write!(f, "invalid bit string: {found:?} at position {position}")
            }
            Self::WordOutOfRange { index, value } => {
                write!(f, "state word {index} ({value:#x}) does not fit the word size")
            }
            Self::InvalidConfig { name, reason } => {
                write!(f, "invalid {name} parameters: {reason}")
            }
        }
    }
}

impl error::Error for Error {}
