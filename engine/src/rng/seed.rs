//! Seed sources
//!
//! A seed is always an `i32` by the time it reaches the table builder. This
//! module resolves the three ways a caller can ask for one: an explicit
//! integer, a piece of text, or "anything unpredictable".

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Where a generator's seed comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedSource {
    /// Use this exact seed
    Explicit(i32),

    /// Decimal text is parsed, anything else is hashed
    Text(String),

    /// Fresh seed from operating-system entropy
    Entropy,
}

impl SeedSource {
    /// Resolve to a concrete seed.
    ///
    /// `Explicit` and non-empty `Text` are deterministic. `Entropy` and
    /// blank `Text` draw a new seed on every call.
    pub fn resolve(&self) -> i32 {
        match self {
            SeedSource::Explicit(seed) => *seed,
            SeedSource::Text(text) => seed_from_text(text).unwrap_or_else(entropy_seed),
            SeedSource::Entropy => entropy_seed(),
        }
    }
}

impl From<Option<i32>> for SeedSource {
    fn from(seed: Option<i32>) -> Self {
        match seed {
            Some(seed) => SeedSource::Explicit(seed),
            None => SeedSource::Entropy,
        }
    }
}

impl From<i32> for SeedSource {
    fn from(seed: i32) -> Self {
        SeedSource::Explicit(seed)
    }
}

impl From<&str> for SeedSource {
    fn from(text: &str) -> Self {
        SeedSource::Text(text.to_string())
    }
}

/// Draw an unpredictable seed.
///
/// A version-4 UUID carries 122 bits of OS randomness; all 128 bits are
/// folded down to 32.
pub fn entropy_seed() -> i32 {
    let bits = Uuid::new_v4().as_u128();
    let folded = (bits as u32) ^ ((bits >> 32) as u32) ^ ((bits >> 64) as u32) ^ ((bits >> 96) as u32);
    folded as i32
}

/// Map text to a seed.
///
/// Returns `None` for empty or whitespace-only text. Base-10 integers that
/// fit in `i32` are used verbatim; any other text maps to the first four
/// bytes (big-endian) of its SHA-256 digest, which is stable across
/// platforms and processes.
///
/// # Example
/// ```
/// use dice_rng_core_rs::rng::seed_from_text;
///
/// assert_eq!(seed_from_text("1234"), Some(1234));
/// assert_eq!(seed_from_text("  -7 "), Some(-7));
/// assert_eq!(seed_from_text(""), None);
/// assert_eq!(seed_from_text("dragon"), seed_from_text("dragon"));
/// ```
pub fn seed_from_text(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(seed) = trimmed.parse::<i32>() {
        return Some(seed);
    }

    let digest = Sha256::digest(trimmed.as_bytes());
    Some(i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_text_parsed() {
        assert_eq!(seed_from_text("42"), Some(42));
        assert_eq!(seed_from_text("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_overflowing_decimal_is_hashed() {
        // Does not fit in i32, so it falls through to the digest
        let seed = seed_from_text("99999999999");
        assert!(seed.is_some());
        assert_eq!(seed, seed_from_text("99999999999"));
    }

    #[test]
    fn test_blank_text_has_no_seed() {
        assert_eq!(seed_from_text(""), None);
        assert_eq!(seed_from_text("   \t"), None);
    }

    #[test]
    fn test_text_hash_distinguishes_inputs() {
        assert_ne!(seed_from_text("alpha"), seed_from_text("beta"));
    }

    #[test]
    fn test_text_hash_matches_digest_prefix() {
        let digest = Sha256::digest(b"abc");
        let expected = i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        assert_eq!(seed_from_text("abc"), Some(expected));
    }

    #[test]
    fn test_explicit_source_resolves_verbatim() {
        assert_eq!(SeedSource::Explicit(-5).resolve(), -5);
        assert_eq!(SeedSource::from(Some(9)).resolve(), 9);
    }

    #[test]
    fn test_entropy_seeds_vary() {
        let seeds: std::collections::HashSet<i32> = (0..32).map(|_| entropy_seed()).collect();
        assert!(seeds.len() > 1, "entropy seeds should not all collide");
    }
}
