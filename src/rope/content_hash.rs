use super::node::*;

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// The multiplier used by the polynomial content hash
pub const HASH_MULTIPLIER: u32 = 31;

/// The hash of a rope containing no bytes
pub const HASH_SEED: u32 = 0;

/// Bit set in a hash cache once it contains a value
const HASH_PRESENT: u64 = 1 << 32;

///
/// Continues the polynomial hash `h = h * 31 + byte` over a slice of bytes
///
/// Bytes are added as signed values, so `0xff` contributes `-1` (wrapping at 32 bits)
///
#[inline]
pub fn hash_bytes(seed: u32, bytes: &[u8]) -> u32 {
    bytes.iter()
        .fold(seed, |hash, byte| hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(*byte as i8 as i32 as u32))
}

///
/// Computes `HASH_MULTIPLIER` to the power of `exponent`, wrapping at 32 bits
///
pub (crate) fn multiplier_power(exponent: usize) -> u32 {
    let mut result      = 1u32;
    let mut base        = HASH_MULTIPLIER;
    let mut exponent    = exponent;

    while exponent > 0 {
        if exponent & 1 != 0 {
            result = result.wrapping_mul(base);
        }

        base        = base.wrapping_mul(base);
        exponent    >>= 1;
    }

    result
}

///
/// Given the hash of some bytes, returns the hash after accumulating a further `suffix_len` bytes
/// whose own hash (starting from `HASH_SEED`) is `suffix_hash`
///
/// This is the same value as continuing `hash_bytes` over the suffix one byte at a time.
///
#[inline]
pub (crate) fn continue_hash(prefix_hash: u32, suffix_len: usize, suffix_hash: u32) -> u32 {
    prefix_hash.wrapping_mul(multiplier_power(suffix_len)).wrapping_add(suffix_hash)
}

///
/// Write-once cache for a content hash
///
/// Threads that race to fill the cache compute the same value, so relaxed ordering is enough:
/// the hash and its 'present' flag are stored in a single word and can't be read torn.
///
pub (crate) struct HashCache(AtomicU64);

impl HashCache {
    pub (crate) fn new() -> HashCache {
        HashCache(AtomicU64::new(0))
    }

    ///
    /// Returns the cached hash, if it has been calculated
    ///
    #[inline]
    pub (crate) fn get(&self) -> Option<u32> {
        let value = self.0.load(Ordering::Relaxed);

        if value & HASH_PRESENT != 0 {
            Some(value as u32)
        } else {
            None
        }
    }

    ///
    /// Returns the cached hash, calculating it with the supplied function if it's not present yet
    ///
    pub (crate) fn get_or_compute<ComputeFn: FnOnce() -> u32>(&self, compute: ComputeFn) -> u32 {
        if let Some(hash) = self.get() {
            hash
        } else {
            let hash = compute();
            self.0.store(HASH_PRESENT | (hash as u64), Ordering::Relaxed);

            hash
        }
    }
}

impl Rope {
    ///
    /// The polynomial hash (`h = h * 31 + byte`, with signed bytes, wrapping at 32 bits) of the bytes in this rope
    ///
    /// Ropes with the same contents have the same hash, however their trees are shaped. The
    /// value is calculated once per node and cached.
    ///
    pub fn content_hash(&self) -> u32 {
        match self {
            Rope::Leaf(leaf)        => leaf.content_hash(),
            Rope::Concat(concat)    => concat.content_hash()
        }
    }

    ///
    /// The content hash of this rope, if it has already been calculated
    ///
    #[inline]
    pub (crate) fn cached_hash(&self) -> Option<u32> {
        match self {
            Rope::Leaf(leaf)        => leaf.cached_hash(),
            Rope::Concat(concat)    => concat.cached_hash()
        }
    }
}

impl Hash for Rope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.content_hash());
    }
}
