//! Seed derivation for independent random streams.
//!
//! Parallel simulation splits paths into batches; every batch owns a
//! generator seeded from `(base_seed, batch_index)`. The base seed is first
//! scrambled by the SplitMix64 finaliser into a key, the stream index is
//! added along the SplitMix64 sequence, and the sum is finalised again.
//! Neighbouring stream indices yield unrelated seeds, shifting the base seed
//! does not reproduce a shifted stream, and the output does not depend on
//! which thread ran which batch.

/// Golden-ratio increment used by SplitMix64.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed of stream `stream` from a base seed.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::mix_seed;
///
/// assert_eq!(mix_seed(42, 7), mix_seed(42, 7));
/// assert_ne!(mix_seed(42, 7), mix_seed(42, 8));
/// assert_ne!(mix_seed(42, 7), mix_seed(43, 7));
/// ```
#[inline]
pub fn mix_seed(base: u64, stream: u64) -> u64 {
    let key = finalise(base.wrapping_add(GOLDEN_GAMMA));
    finalise(key.wrapping_add(stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)))
}

/// SplitMix64 output function; a bijection on `u64`.
#[inline]
fn finalise(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draws a fresh base seed from the thread-local entropy source.
///
/// Used when a simulation is configured without a seed. The drawn value is
/// reported back to the caller so the run can be reproduced.
#[inline]
pub fn entropy_seed() -> u64 {
    rand::random()
}
