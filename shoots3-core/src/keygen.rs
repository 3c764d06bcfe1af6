//! Short random object keys.
//!
//! Keys are meant to be typed or shared by humans as a URL suffix, so they
//! only use ASCII letters and are not security tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Characters a generated key is drawn from.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length used when the caller does not ask for one.
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Generate a key of `length` letters from a freshly time-seeded generator.
pub fn generate_key(length: usize) -> String {
    generate_key_with(&mut time_seeded_rng(), length)
}

/// Generate a key of `length` letters, sampling each one uniformly from [`ALPHABET`].
pub fn generate_key_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// RNG seeded from the wall clock, so each run gets a different sequence.
pub fn time_seeded_rng() -> StdRng {
    // A clock before the epoch still yields a usable seed.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos as u64)
}
