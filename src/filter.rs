//! Bloom filter core: bit array plus double-hashed position derivation.
//!
//! One 64-bit digest per value; its two 32-bit halves seed a double-hash
//! sequence (Kirsch–Mitzenmacher), so `add`/`check` cost one hash pass
//! regardless of the hash count.
//!
//! Single-threaded by contract: `add` mutates the bit array without
//! synchronization. Callers needing shared access must serialize externally.

use anyhow::{anyhow, Result};
use log::debug;

use crate::estimate;
use crate::hash::{split_halves, Hash64, Xx64};

/// Space-efficient probabilistic set membership.
///
/// `check` never returns false for a value that was added (no false
/// negatives) but may return true for one that was not (false positives,
/// bounded by sizing). Values cannot be removed; bits only ever turn on.
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Xx64> {
    /// Total bit slots (m). Fixed at construction.
    size: usize,
    /// Positions derived per value (k). Fixed at construction.
    hash_count: u32,
    /// Packed bit array: bit i lives at bits[i / 8], mask 1 << (i % 8).
    bits: Vec<u8>,
    /// Per-instance hash primitive. No state is shared across filters.
    hasher: H,
}

impl BloomFilter<Xx64> {
    /// Filter with explicit parameters: `size` bit slots, `hash_count`
    /// positions per value. Rejects `size == 0`, `hash_count == 0` and
    /// sizes beyond u32::MAX (positions are computed in u32 arithmetic).
    pub fn new(size: usize, hash_count: u32) -> Result<Self> {
        Self::with_hasher(size, hash_count, Xx64::new())
    }

    /// Filter sized for `expected_items` at a target false-positive rate.
    /// Convenience over [`estimate::optimal_bloom_size`]; runtime behavior
    /// is identical to calling [`BloomFilter::new`] with the results.
    pub fn from_estimate(expected_items: u64, max_fp_rate: f64) -> Result<Self> {
        if expected_items == 0 {
            return Err(anyhow!("expected_items must be > 0"));
        }
        if !(max_fp_rate > 0.0 && max_fp_rate < 1.0) {
            return Err(anyhow!(
                "max_fp_rate must be in (0, 1), got {}",
                max_fp_rate
            ));
        }
        let (size, hash_count) = estimate::optimal_bloom_size(expected_items, max_fp_rate);
        Self::new(size as usize, hash_count)
    }
}

impl<H: Hash64> BloomFilter<H> {
    /// Like [`BloomFilter::new`] but with a caller-supplied hash primitive.
    /// Both sides of a lookup must use the same algorithm and seed.
    pub fn with_hasher(size: usize, hash_count: u32, hasher: H) -> Result<Self> {
        if size == 0 || hash_count == 0 {
            return Err(anyhow!("size and hash_count must be > 0"));
        }
        if size > u32::MAX as usize {
            return Err(anyhow!("size must fit in u32, got {}", size));
        }
        let bytes = (size + 7) / 8;
        debug!("bloom filter created: m={} bits, k={}", size, hash_count);
        Ok(Self {
            size,
            hash_count,
            bits: vec![0u8; bytes],
            hasher,
        })
    }

    /// Record `value` in the filter. Idempotent; duplicate positions within
    /// one derivation are harmless.
    pub fn add(&mut self, value: &[u8]) {
        let (h1, h2) = split_halves(self.hasher.digest64(value));
        let m = self.size as u32;
        for i in 0..self.hash_count {
            let pos = h1.wrapping_add(i.wrapping_mul(h2)) % m;
            set_bit(&mut self.bits, pos as usize);
        }
    }

    /// True iff every derived position for `value` is set. False means the
    /// value was definitely never added; true means it probably was.
    /// Short-circuits on the first unset bit. Does not mutate the filter.
    pub fn check(&self, value: &[u8]) -> bool {
        let (h1, h2) = split_halves(self.hasher.digest64(value));
        let m = self.size as u32;
        for i in 0..self.hash_count {
            let pos = h1.wrapping_add(i.wrapping_mul(h2)) % m;
            if !get_bit(&self.bits, pos as usize) {
                return false;
            }
        }
        true
    }

    /// Total bit slots (m).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Positions derived per value (k).
    #[inline]
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }
}

#[inline]
fn set_bit(bytes: &mut [u8], bit: usize) {
    let byte = bit / 8;
    let mask = 1u8 << (bit % 8);
    bytes[byte] |= mask;
}

#[inline]
fn get_bit(bytes: &[u8], bit: usize) -> bool {
    let byte = bit / 8;
    let mask = 1u8 << (bit % 8);
    (bytes[byte] & mask) != 0
}
