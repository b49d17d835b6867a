//! Word-width-generic unsigned arithmetic.
//!
//! The engine never touches `u32`/`u64` directly; every add, rotation and
//! shift goes through [`Word`] so the same round code serves both widths.

use core::fmt::{Debug, LowerHex};
use core::ops::{BitAnd, BitOr, BitXor, Not, Shr};

/// An unsigned machine word the engine can run on.
///
/// All arithmetic is modulo `2^BITS`; there is no signed interpretation anywhere.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + LowerHex
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the word in bits.
    const BITS: u32;
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Addition modulo `2^BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Circular right rotation over exactly `BITS` bits.
    fn rotr(self, n: u32) -> Self;

    /// Reads one word from exactly `BYTES` big-endian bytes.
    ///
    /// # Panics
    /// Panics if `bytes.len() != BYTES`. Callers slice with `chunks_exact`.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Appends the big-endian encoding of the word to `out`.
    fn extend_be(self, out: &mut Vec<u8>);

    /// Lossless widening to `u64`.
    fn widen(self) -> u64;

    /// Narrowing from `u64`; `None` if the value does not fit in `BITS` bits.
    fn narrow(value: u64) -> Option<Self>;
}

macro_rules! impl_word {
    ($t:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = core::mem::size_of::<$t>();

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline]
            fn from_be_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_be_bytes(buf)
            }

            #[inline]
            fn extend_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }

            #[inline]
            fn widen(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn narrow(value: u64) -> Option<Self> {
                <$t>::try_from(value).ok()
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// Sum of any number of words modulo `2^BITS`.
#[inline]
pub fn add_all<W: Word>(words: &[W]) -> W {
    words
        .iter()
        .fold(W::default(), |acc, w| acc.wrapping_add(*w))
}
