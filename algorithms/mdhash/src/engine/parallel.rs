//! Batch Execution
//!
//! Independent messages share nothing, so a batch spreads across threads
//! via Rayon when the `multithread` feature is on, and runs serially
//! otherwise. Output order always follows input order.

use crate::engine::chain::hash;
use crate::kernels::word::Word;
use crate::types::{Error, VariantConfig};
use tracing::debug;

/// Hash every message independently.
///
/// # Errors
/// An error from one of the messages. With `multithread` on, which one is
/// not tied to input order.
pub fn hash_batch<W, M>(messages: &[M], cfg: &VariantConfig<W>) -> Result<Vec<String>, Error>
where
    W: Word,
    M: AsRef<[u8]> + Sync,
{
    debug!(variant = cfg.name, count = messages.len(), "hashing batch");
    messages.process_each(|m| hash(m.as_ref(), cfg))
}

/// Helper for feature-agnostic fan-out.
trait BatchProcessor<T> {
    fn process_each<F, R, E>(self, f: F) -> Result<Vec<R>, E>
    where
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send;
}

impl<T: Sync> BatchProcessor<T> for &[T] {
    fn process_each<F, R, E>(self, f: F) -> Result<Vec<R>, E>
    where
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
