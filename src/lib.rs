//! bloomlite — a space-efficient Bloom filter.
//!
//! Answers "might this value have been added?" with no false negatives and
//! a tunable, bounded false-positive rate. Never stores the values, only
//! derived bit positions.
//!
//! ```
//! use bloomlite::BloomFilter;
//!
//! let mut f = BloomFilter::from_estimate(1000, 0.01)?;
//! f.add(b"alice");
//! assert!(f.check(b"alice"));
//! # anyhow::Ok(())
//! ```

// Core modules
pub mod estimate; // sizing formulas (pure functions)
pub mod filter;   // bit array + add/check
pub mod hash;     // pluggable stable 64-bit hash

// Convenience re-exports
pub use filter::BloomFilter;
pub use hash::{Hash64, Xx64};
