//! Sizing estimator: bit-array size and hash count from expected load.
//!
//! Pure functions, no dependencies on the filter itself. Callers that know
//! their expected cardinality and a tolerable false-positive rate can size
//! the filter here instead of picking (m, k) by hand.

use std::f64::consts::LN_2;

/// Optimal bit count for `expected_items` at a target false-positive rate:
/// `ceil(n * |ln p| / (ln 2)^2)`.
///
/// Preconditions: `expected_items > 0`, `max_fp_rate` in (0, 1). Violations
/// are a caller error and yield degenerate output (checked in debug builds,
/// never clamped).
pub fn optimal_size(expected_items: u64, max_fp_rate: f64) -> u64 {
    debug_assert!(expected_items > 0, "expected_items must be > 0");
    debug_assert!(
        max_fp_rate > 0.0 && max_fp_rate < 1.0,
        "max_fp_rate must be in (0, 1)"
    );
    let numerator = (expected_items as f64) * max_fp_rate.ln().abs();
    let denom = LN_2 * LN_2;
    (numerator / denom).ceil() as u64
}

/// Optimal hash-function count for a filter of `size` bits holding
/// `expected_items` values: `ceil(floor(size / n) * ln 2)`.
///
/// The bits-per-item ratio is truncating integer division, not the textbook
/// real-valued ratio. This under-counts hashes when size is not close to a
/// multiple of n; kept as-is so filters sized by earlier releases keep the
/// same k for the same inputs.
///
/// Precondition: `expected_items > 0` (division by zero otherwise).
pub fn optimal_hash_count(expected_items: u64, size: u64) -> u32 {
    debug_assert!(expected_items > 0, "expected_items must be > 0");
    let ratio = (size / expected_items) as f64;
    (ratio * LN_2).ceil() as u32
}

/// Compose the two estimates: size first, then hash count from that size.
pub fn optimal_bloom_size(expected_items: u64, max_fp_rate: f64) -> (u64, u32) {
    let size = optimal_size(expected_items, max_fp_rate);
    let hash_count = optimal_hash_count(expected_items, size);
    (size, hash_count)
}
