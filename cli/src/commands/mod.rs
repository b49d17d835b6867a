//! CLI Commands
//!
//! All mdhash CLI commands organized as separate modules.

mod check;
mod hash;
mod trace;

pub use check::check_mode;
pub use hash::{hash_files, hash_text, Algorithm};
pub use trace::{trace_text, TraceOptions};
