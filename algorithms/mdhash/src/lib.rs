//! # mdhash
//!
//! One Merkle-Damgard engine, two parameter sets: SHA-256 (32-bit words) and
//! SHA-512 (64-bit words). Every stage of the pipeline is callable on its
//! own so intermediate values can be inspected without re-deriving them.

//! # Usage
//! ```rust
//! use mdhash::Variant;
//!
//! // 1. One call
//! let digest = mdhash::hash(b"abc", Variant::Sha512)?;
//! assert_eq!(digest.len(), 128);
//!
//! // 2. Stage by stage
//! let padded = mdhash::pad(b"abc", Variant::Sha256)?;
//! let blocks = mdhash::parse_blocks(&padded, Variant::Sha256)?;
//! let mut state = mdhash::initial_state(Variant::Sha256);
//! for block in &blocks {
//!     state = mdhash::compress_block(block, &state, Variant::Sha256)?;
//! }
//! assert_eq!(
//!     mdhash::format_digest(&state, Variant::Sha256)?,
//!     mdhash::hash(b"abc", Variant::Sha256)?,
//! );
//!
//! // 3. Generic engine, typed words
//! let words = mdhash::engine::hash_words(b"abc", &mdhash::SHA256)?;
//! assert_eq!(words[0], 0xba78_16bf);
//! # Ok::<(), mdhash::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod engine;
pub mod kernels;
mod oneshot;
pub(crate) mod types;
pub mod walkthrough;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::{Bitstream, Block};
pub use kernels::{BlockTrace, HashState, Word, WorkingVariables, SHA256, SHA512};
pub use oneshot::{
    compress_block, expand_schedule, format_digest, hash, hash_batch, hash_named, initial_state,
    pad, parse_blocks,
};
pub use types::{Error, Rotation, Variant, VariantConfig};
pub use walkthrough::{Stage, Trace, Walkthrough};
