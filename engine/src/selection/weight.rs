//! Weight sources for weighted selection
//!
//! A weight is a non-negative multiplier: a candidate of weight `w` is `w`
//! times as likely as one of weight 1, and weight 0 can never be drawn.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Anything that carries its own selection weight
pub trait Weighted {
    fn weight(&self) -> u32;
}

/// A value paired with a selection weight
///
/// # Example
/// ```
/// use dice_rng_core_rs::{RngManager, WeightedCandidate};
///
/// let loot = [
///     WeightedCandidate::new("common", 10),
///     WeightedCandidate::new("rare", 1),
///     WeightedCandidate::new("cursed", 0), // never drawn
/// ];
/// let mut rng = RngManager::new(7);
/// let pick = rng.choose_weighted(&loot).unwrap();
/// assert_ne!(pick.value, "cursed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedCandidate<T> {
    pub value: T,
    pub weight: u32,
}

impl<T> WeightedCandidate<T> {
    pub fn new(value: T, weight: u32) -> Self {
        Self { value, weight }
    }
}

impl<T> Weighted for WeightedCandidate<T> {
    fn weight(&self) -> u32 {
        self.weight
    }
}

/// An enumeration whose variants can be drawn by weight
///
/// Implementors list their variants once; weights default to 1 and can be
/// overridden per variant.
///
/// # Example
/// ```
/// use dice_rng_core_rs::{RngManager, WeightedVariant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Weather { Sun, Rain, Meteor }
///
/// impl WeightedVariant for Weather {
///     fn variants() -> &'static [Self] {
///         &[Weather::Sun, Weather::Rain, Weather::Meteor]
///     }
///
///     fn variant_weight(&self) -> u32 {
///         match self {
///             Weather::Sun => 3,
///             Weather::Rain => 1,
///             Weather::Meteor => 0,
///         }
///     }
/// }
///
/// let mut rng = RngManager::new(1);
/// assert_ne!(rng.choose_variant::<Weather>().unwrap(), Weather::Meteor);
/// ```
pub trait WeightedVariant: Sized + Copy + 'static {
    /// Every variant, in declaration order
    fn variants() -> &'static [Self];

    fn variant_weight(&self) -> u32 {
        1
    }
}

/// Explicit `value -> weight` registrations, defaulting to 1
///
/// Use this when the weights are configuration rather than a property of
/// the type itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable<E: Eq + Hash> {
    weights: HashMap<E, u32>,
}

impl<E: Eq + Hash> WeightTable<E> {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// Builder-style registration
    pub fn with(mut self, value: E, weight: u32) -> Self {
        self.weights.insert(value, weight);
        self
    }

    /// Register or replace the weight of `value`
    pub fn set(&mut self, value: E, weight: u32) {
        self.weights.insert(value, weight);
    }

    /// Weight of `value` (1 when unregistered)
    pub fn weight_of(&self, value: &E) -> u32 {
        self.weights.get(value).copied().unwrap_or(1)
    }
}

impl<E: Eq + Hash> Default for WeightTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash> FromIterator<(E, u32)> for WeightTable<E> {
    fn from_iter<I: IntoIterator<Item = (E, u32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
