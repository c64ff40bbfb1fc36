//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is `foldhash` with a fixed seed, so hashes only depend on
//! the input. It keys the per-type path tables of the accessor cache.
//!
//! `NoOpHasher` passes a `u64` through unchanged. `TypeId` is already a hash,
//! so the outer level of the cache uses it.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5EED_BEA9_7A7E_C0DE);

/// A type alias for [`foldhash::fast::FoldHasher`] created by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bp_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("nested.field_a");
/// let b = FixedHashState.hash_one("nested.field_a");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that stores the last `u64` it was given.
///
/// Other writes fold the bytes in reverse order, so `write_u32(10)` and
/// `write_u64(10)` agree when they are the only call.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Hash state creating [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bp_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoOpHashState, NoOpHasher};
    use core::hash::{BuildHasher, Hasher};

    #[test]
    fn no_op_write_matches_write_u64() {
        let mut by_bytes = NoOpHasher::default();
        by_bytes.write_u32(1234);

        let mut by_u64 = NoOpHashState.build_hasher();
        by_u64.write_u64(1234);

        assert_eq!(by_bytes.finish(), by_u64.finish());
    }
}
