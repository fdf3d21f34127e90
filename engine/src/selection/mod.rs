//! Selection on top of the typed derivations
//!
//! Shuffling, uniform and weighted choice, and probability tests. Everything
//! here consumes samples only through `RngManager`'s derivations, so a
//! selection is reproducible whenever the generator is.
//!
//! # Weighted choice
//!
//! Conceptually each candidate is repeated `weight` times in a pool and one
//! pool slot is drawn uniformly. The pool is never materialised: a running
//! sum of weights is searched for the drawn slot instead, which yields the
//! same candidate for the same sample in O(n) space rather than
//! O(total weight).

mod weight;

pub use weight::{WeightTable, Weighted, WeightedCandidate, WeightedVariant};

use std::hash::Hash;

use crate::error::{RngError, RngResult};
use crate::rng::RngManager;

impl RngManager {
    /// Shuffle in place (Fisher-Yates from the end).
    ///
    /// For `n` from `len` down to 2, swaps slot `n - 1` with slot
    /// `next_int(0, n)`.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for n in (2..=items.len()).rev() {
            let k = self.below(n);
            items.swap(n - 1, k);
        }
    }

    /// Pick one element uniformly
    ///
    /// # Errors
    /// `InvalidArgument` if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> RngResult<&'a T> {
        if items.is_empty() {
            return Err(RngError::InvalidArgument(
                "cannot choose from an empty slice".to_string(),
            ));
        }
        Ok(&items[self.below(items.len())])
    }

    /// Pick one element with probability `weight / sum(weights)`
    ///
    /// # Errors
    /// `InvalidArgument` if `items` is empty or every weight is 0.
    pub fn choose_weighted<'a, T: Weighted>(&mut self, items: &'a [T]) -> RngResult<&'a T> {
        self.choose_weighted_by(items, T::weight)
    }

    /// Like [`Self::choose_weighted`] with weights supplied by `weight_of`
    pub fn choose_weighted_by<'a, T, F>(&mut self, items: &'a [T], weight_of: F) -> RngResult<&'a T>
    where
        F: Fn(&T) -> u32,
    {
        let index = self.weighted_index(items.iter().map(weight_of))?;
        Ok(&items[index])
    }

    /// Draw a variant of `E` using the weights it declares
    ///
    /// # Errors
    /// `InvalidArgument` if `E` lists no variants or all weights are 0.
    pub fn choose_variant<E: WeightedVariant>(&mut self) -> RngResult<E> {
        let variants = E::variants();
        let index = self.weighted_index(variants.iter().map(E::variant_weight))?;
        Ok(variants[index])
    }

    /// Draw one of `variants` using weights registered in `table`
    ///
    /// Unregistered variants weigh 1.
    pub fn choose_variant_with<E>(&mut self, variants: &[E], table: &WeightTable<E>) -> RngResult<E>
    where
        E: Copy + Eq + Hash,
    {
        let index = self.weighted_index(variants.iter().map(|v| table.weight_of(v)))?;
        Ok(variants[index])
    }

    fn weighted_index<I>(&mut self, weights: I) -> RngResult<usize>
    where
        I: Iterator<Item = u32>,
    {
        let mut total: u64 = 0;
        let cumulative: Vec<u64> = weights
            .map(|w| {
                total += w as u64;
                total
            })
            .collect();

        if cumulative.is_empty() {
            return Err(RngError::InvalidArgument(
                "cannot choose from an empty candidate set".to_string(),
            ));
        }
        if total == 0 {
            return Err(RngError::InvalidArgument(
                "total candidate weight must be positive".to_string(),
            ));
        }

        let slot = self.below_u64(total);
        // First candidate whose running total passes the slot; zero-weight
        // candidates share their predecessor's total and are skipped
        Ok(cumulative.partition_point(|&c| c <= slot))
    }

    // ========================================================================
    // Probability tests
    // ========================================================================

    /// `true` with probability `p`.
    ///
    /// `p >= 1` is always `true` and `p <= 0` always `false`; neither
    /// consumes a sample.
    pub fn next_probability(&mut self, p: f32) -> bool {
        if p >= 1.0 {
            return true;
        }
        if p <= 0.0 {
            return false;
        }
        self.next_float() < p
    }

    /// `true` with probability `percent / 100`, clamped at 0 and 100
    pub fn next_percent(&mut self, percent: i32) -> bool {
        if percent >= 100 {
            return true;
        }
        if percent <= 0 {
            return false;
        }
        self.below(100) < percent as usize
    }

    /// `true` with probability `numerator / denominator`
    ///
    /// # Errors
    /// `DivideByZero` if `denominator == 0`.
    pub fn next_odds(&mut self, numerator: i32, denominator: i32) -> RngResult<bool> {
        if denominator == 0 {
            return Err(RngError::DivideByZero);
        }
        Ok(self.next_probability(numerator as f32 / denominator as f32))
    }
}
