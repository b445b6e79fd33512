//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is based on the `foldhash` crate and gives stable results
//! through a fixed seed, so iteration order of small maps does not change
//! between runs.
//!
//! `NoOpHasher` passes a `u64` through untouched. `TypeId` already hashes
//! itself as a well-distributed `u64`, so hashing it again is wasted work.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5F3C_91A2_7E44_0D1B);

/// A hasher whose results only depend on the input.
///
/// Created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed, based on `foldhash`.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use rf_utils::hash::FixedHashState;
///
/// let a = {
///     let mut hasher = FixedHashState.build_hasher();
///     "tag_id".hash(&mut hasher);
///     hasher.finish()
/// };
/// let b = {
///     let mut hasher = FixedHashState.build_hasher();
///     "tag_id".hash(&mut hasher);
///     hasher.finish()
/// };
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
/// Other writes fold the bytes in reverse order, so a single `write_u32(10)`
/// and a single `write_u64(10)` agree.
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

/// Build state for [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use rf_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 3_u64.hash(&mut hasher);
/// assert_eq!(hasher.finish(), 3);
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
    use core::hash::{BuildHasher, Hash, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn noop_write_widths_agree() {
        let mut a = NoOpHashState.build_hasher();
        a.write_u32(10);
        let mut b = NoOpHashState.build_hasher();
        b.write_u64(10);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_state_is_stable() {
        let hash = |s: &str| {
            let mut hasher = FixedHashState.build_hasher();
            s.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash("name"), hash("name"));
        assert_ne!(hash("name"), hash("icon"));
    }
}
