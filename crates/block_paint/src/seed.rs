//! Seed derivation from block hashes.
//!
//! The first 16 hexadecimal characters of a block hash are parsed as a
//! base-16 integer, yielding a 64-bit [`Seed`]. Identical hash prefix, same
//! seed, on every platform and every run — this is the root of the
//! determinism guarantee made to collectors.
use crate::error::{Error, Result};

/// A seed fully determining a shuffle bag's output sequence.
pub type Seed = u64;

/// Number of hex characters consumed from the hash.
pub const SEED_HEX_LEN: usize = 16;

/// Derives the seed from the first [`SEED_HEX_LEN`] hex characters of `hash`.
///
/// An optional `0x`/`0X` prefix is stripped first. Characters beyond the
/// prefix window never influence the result.
///
/// # Errors
///
/// [`Error::InvalidHashFormat`] when fewer than [`SEED_HEX_LEN`] characters
/// remain after the prefix, or any character in the window is not hex.
pub fn derive_seed(hash: &str) -> Result<Seed> {
    let digits = hash
        .strip_prefix("0x")
        .or_else(|| hash.strip_prefix("0X"))
        .unwrap_or(hash);

    let window = digits
        .get(..SEED_HEX_LEN)
        .filter(|w| w.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::InvalidHashFormat(hash.to_owned()))?;

    // from_str_radix would also accept a leading sign, hence the digit check.
    u64::from_str_radix(window, 16).map_err(|_| Error::InvalidHashFormat(hash.to_owned()))
}

/// Folds a 64-bit seed to the generator's native 32-bit width.
///
/// Matches ECMAScript semantics — round to the nearest `f64`, then `ToUint32`
/// (truncate mod 2^32) — so browser-based verifiers, whose only number type
/// is `f64`, derive the identical generator state. Seeds below 2^53 are
/// unaffected by the rounding step.
pub fn fold_seed(seed: Seed) -> u32 {
    (seed as f64 as u128 & 0xFFFF_FFFF) as u32
}
