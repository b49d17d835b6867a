//! Variant Dispatcher
//!
//! Maps a runtime [`Variant`](crate::Variant) onto its static parameter
//! record so the generic engine can be monomorphised per word width.

/// Bind the parameter record for `$variant` to `$cfg` and evaluate `$body`.
///
/// Both arms must produce the same type; widen word-typed results inside
/// `$body`.
macro_rules! dispatch {
    ($variant:expr, |$cfg:ident| $body:expr) => {
        match $variant {
            $crate::types::Variant::Sha256 => {
                let $cfg = &$crate::kernels::constants::SHA256;
                $body
            }
            $crate::types::Variant::Sha512 => {
                let $cfg = &$crate::kernels::constants::SHA512;
                $body
            }
        }
    };
}

pub(crate) use dispatch;
