//! SHA-2 Kernels
//!
//! Word arithmetic, parameter tables, schedule expansion and compression.

pub mod compress;
pub mod constants;
pub mod schedule;
pub mod word;

pub use compress::{
    compress_block, compress_block_traced, compress_round, compress_schedule, BlockTrace,
    HashState, WorkingVariables,
};
pub use constants::{SHA256, SHA512};
pub use schedule::{expand_schedule, Schedule};
pub use word::Word;
