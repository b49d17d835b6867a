//! Execution Engine
//!
//! Padding, block parsing, chaining and batch fan-out, generic over the
//! word width.

pub mod blocks;
pub mod chain;
pub(crate) mod dispatcher;
pub mod padding;
pub mod parallel;

pub use blocks::{parse_blocks, Block};
pub use chain::{digest_bytes, format_digest, hash, hash_words};
pub use padding::{pad, Bitstream};
pub use parallel::hash_batch;
