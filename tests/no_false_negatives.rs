// No-false-negatives guarantee, randomized over keys and (m, k) shapes.
//
// Every added value must be reported present, for any valid parameters,
// no matter how overloaded the filter gets.

use anyhow::Result;
use oorandom::Rand64;

use bloomlite::BloomFilter;

#[test]
fn every_added_key_is_found() -> Result<()> {
    let mut rng = Rand64::new(0xB100_F117);

    // Shapes from comfortable to badly undersized.
    for (size, k) in [(64usize, 1u32), (100, 4), (1024, 6), (9586, 7), (33, 16)] {
        let mut f = BloomFilter::new(size, k)?;
        let keys: Vec<String> = (0..500)
            .map(|i| format!("member-{i}-{}", rng.rand_u64()))
            .collect();

        for key in &keys {
            f.add(key.as_bytes());
        }
        for key in &keys {
            assert!(
                f.check(key.as_bytes()),
                "false negative for {key} at m={size}, k={k}"
            );
        }
    }
    Ok(())
}

/// Binary keys (embedded NULs, high bytes) are first-class values.
#[test]
fn binary_keys_are_found() -> Result<()> {
    let mut rng = Rand64::new(42);
    let mut f = BloomFilter::new(4096, 5)?;

    let keys: Vec<Vec<u8>> = (0..200)
        .map(|_| rng.rand_u64().to_le_bytes().to_vec())
        .collect();
    for key in &keys {
        f.add(key);
    }
    for key in &keys {
        assert!(f.check(key), "false negative for binary key {key:?}");
    }
    Ok(())
}
