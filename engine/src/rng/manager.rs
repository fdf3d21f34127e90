//! Typed random values on top of the subtractive generator
//!
//! [`RngManager`] owns a [`GeneratorState`] and turns its raw samples into
//! integers, floats, bytes and booleans. Every derivation is a pure function
//! of one or more `next_sample()` calls, so the same seed and the same call
//! sequence always produce the same values.

use serde::{Deserialize, Serialize};

use super::seed::{seed_from_text, SeedSource};
use super::state::{GeneratorState, MBIG};
use crate::error::{RngError, RngResult};
use crate::persistence::StateBlob;

const INV_MBIG: f64 = 1.0 / MBIG as f64;
const INV_MBIG_MINUS_ONE: f64 = 1.0 / (MBIG - 1) as f64;
const INV_MBIG_MINUS_ONE_F32: f32 = 1.0 / (MBIG - 1) as f32;

/// Deterministic, seedable pseudorandom generator
///
/// Not suitable for cryptography: the full state can be recovered from 55
/// consecutive outputs.
///
/// # Example
/// ```
/// use dice_rng_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let raw = rng.next_int();
/// let die = rng.next_int_range(1, 7).unwrap(); // [1, 7)
/// let unit = rng.next_double(); // [0.0, 1.0]
/// assert!((0..i32::MAX).contains(&raw));
/// assert!((1..7).contains(&die));
/// assert!((0.0..=1.0).contains(&unit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateBlob", into = "StateBlob")]
pub struct RngManager {
    pub(crate) state: GeneratorState,
}

impl RngManager {
    /// Create a generator with an explicit seed
    pub fn new(seed: i32) -> Self {
        tracing::debug!(seed, "seeding generator");
        Self {
            state: GeneratorState::seeded(seed),
        }
    }

    /// Create a generator with an unpredictable seed
    pub fn from_entropy() -> Self {
        Self::from_source(&SeedSource::Entropy)
    }

    /// Create a generator from an optional seed (`None` = unpredictable)
    pub fn with_seed(seed: Option<i32>) -> Self {
        Self::from_source(&SeedSource::from(seed))
    }

    /// Create a generator from text.
    ///
    /// Decimal text is parsed, other text is hashed, blank text means an
    /// unpredictable seed. See [`seed_from_text`].
    pub fn from_seed_text(text: &str) -> Self {
        Self::from_source(&SeedSource::Text(text.to_string()))
    }

    /// Create a generator from any seed source
    pub fn from_source(source: &SeedSource) -> Self {
        Self::new(source.resolve())
    }

    /// Seed the current state was built from
    pub fn seed(&self) -> i32 {
        self.state.seed()
    }

    /// Read-only view of the underlying generator state
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }

    /// Rebuild the state from a new seed (`None` = unpredictable).
    ///
    /// Returns the seed actually used.
    pub fn reseed(&mut self, seed: Option<i32>) -> i32 {
        let seed = SeedSource::from(seed).resolve();
        tracing::debug!(seed, "reseeding generator");
        self.state.reseed(seed);
        seed
    }

    /// Rebuild the state from text. Returns the seed actually used.
    pub fn reseed_text(&mut self, text: &str) -> i32 {
        self.reseed(seed_from_text(text))
    }

    /// Rewind to the beginning of the current seed's sequence
    pub fn reset(&mut self) {
        tracing::debug!(seed = self.state.seed(), "resetting generator");
        self.state.reset();
    }

    // ========================================================================
    // Raw samples
    // ========================================================================

    /// Next raw sample in `[0, i32::MAX)`
    #[inline]
    pub fn next_sample(&mut self) -> i32 {
        self.state.next_sample()
    }

    /// Sample scaled to `[0, span)`
    #[inline]
    fn scaled(&mut self, span: f64) -> f64 {
        self.next_sample() as f64 * INV_MBIG * span
    }

    /// Uniform index in `[0, n)`; identical to `next_int_range(0, n)` for
    /// any `n` that fits in `i32`.
    pub(crate) fn below(&mut self, n: usize) -> usize {
        self.scaled(n as f64) as usize
    }

    /// Uniform `u64` in `[0, n)` with the same derivation as [`Self::below`]
    pub(crate) fn below_u64(&mut self, n: u64) -> u64 {
        self.scaled(n as f64) as u64
    }

    // ========================================================================
    // Integers
    // ========================================================================

    /// Non-negative integer in `[0, i32::MAX)`
    pub fn next_int(&mut self) -> i32 {
        self.next_sample()
    }

    /// Integer in `[0, max)`.
    ///
    /// `max == 0` yields 0.
    ///
    /// # Errors
    /// `OutOfRange` if `max` is negative.
    pub fn next_int_max(&mut self, max: i32) -> RngResult<i32> {
        if max < 0 {
            return Err(RngError::out_of_range("max", max, "max must be non-negative"));
        }
        self.next_int_range(0, max)
    }

    /// Integer in `[min, max)`: `floor(sample / i32::MAX * (max - min)) + min`.
    ///
    /// `min == max` yields `min` (one sample is still consumed).
    ///
    /// # Errors
    /// `OutOfRange` if `min > max`.
    pub fn next_int_range(&mut self, min: i32, max: i32) -> RngResult<i32> {
        check_int_bounds(min, max)?;
        Ok(self.int_in(min, max))
    }

    fn int_in(&mut self, min: i32, max: i32) -> i32 {
        let span = (max as i64 - min as i64) as f64;
        (self.scaled(span).floor() as i64 + min as i64) as i32
    }

    // ========================================================================
    // Floating point
    // ========================================================================

    /// Double in `[0.0, 1.0]`: `sample / (i32::MAX - 1)`
    pub fn next_double(&mut self) -> f64 {
        self.next_sample() as f64 * INV_MBIG_MINUS_ONE
    }

    /// Double in `[min, max]`
    ///
    /// # Errors
    /// `InvalidArgument` for non-finite bounds, `OutOfRange` if `min > max`.
    pub fn next_double_range(&mut self, min: f64, max: f64) -> RngResult<f64> {
        check_float_bounds(min, max)?;
        Ok(scale_f64(self.next_double(), min, max))
    }

    /// Single-precision counterpart of [`Self::next_double`], in `[0.0, 1.0]`
    pub fn next_float(&mut self) -> f32 {
        self.next_sample() as f32 * INV_MBIG_MINUS_ONE_F32
    }

    /// Float in `[min, max]`
    ///
    /// # Errors
    /// `InvalidArgument` for non-finite bounds, `OutOfRange` if `min > max`.
    pub fn next_float_range(&mut self, min: f32, max: f32) -> RngResult<f32> {
        check_float_bounds(min as f64, max as f64)?;
        Ok(scale_f32(self.next_float(), min, max))
    }

    // ========================================================================
    // Bytes and booleans
    // ========================================================================

    /// Byte in `[0, 256)`
    pub fn next_byte(&mut self) -> u8 {
        self.int_in(0, 256) as u8
    }

    /// Byte in `[0, max)`; `max == 0` yields 0
    pub fn next_byte_max(&mut self, max: u8) -> u8 {
        self.int_in(0, max as i32) as u8
    }

    /// Byte in `[min, max)`
    ///
    /// # Errors
    /// `OutOfRange` if `min > max`.
    pub fn next_byte_range(&mut self, min: u8, max: u8) -> RngResult<u8> {
        Ok(self.next_int_range(min as i32, max as i32)? as u8)
    }

    /// Fair coin: `next_int(0, 2) == 1`
    pub fn next_bool(&mut self) -> bool {
        self.int_in(0, 2) == 1
    }

    // ========================================================================
    // Buffer fills
    // ========================================================================
    //
    // Each slot receives the scalar derivation, in order. An empty buffer is
    // an error rather than a no-op.

    /// Fill with values from [`Self::next_int`]
    pub fn fill_ints(&mut self, dest: &mut [i32]) -> RngResult<()> {
        check_not_empty(dest.len())?;
        dest.iter_mut().for_each(|slot| *slot = self.next_int());
        Ok(())
    }

    /// Fill with values in `[min, max)`
    pub fn fill_ints_range(&mut self, dest: &mut [i32], min: i32, max: i32) -> RngResult<()> {
        check_not_empty(dest.len())?;
        check_int_bounds(min, max)?;
        dest.iter_mut().for_each(|slot| *slot = self.int_in(min, max));
        Ok(())
    }

    /// Fill with values from [`Self::next_double`]
    pub fn fill_doubles(&mut self, dest: &mut [f64]) -> RngResult<()> {
        check_not_empty(dest.len())?;
        dest.iter_mut().for_each(|slot| *slot = self.next_double());
        Ok(())
    }

    /// Fill with values in `[min, max]`
    pub fn fill_doubles_range(&mut self, dest: &mut [f64], min: f64, max: f64) -> RngResult<()> {
        check_not_empty(dest.len())?;
        check_float_bounds(min, max)?;
        dest.iter_mut()
            .for_each(|slot| *slot = scale_f64(self.next_double(), min, max));
        Ok(())
    }

    /// Fill with values from [`Self::next_float`]
    pub fn fill_floats(&mut self, dest: &mut [f32]) -> RngResult<()> {
        check_not_empty(dest.len())?;
        dest.iter_mut().for_each(|slot| *slot = self.next_float());
        Ok(())
    }

    /// Fill with values from [`Self::next_byte`]
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> RngResult<()> {
        check_not_empty(dest.len())?;
        dest.iter_mut().for_each(|slot| *slot = self.next_byte());
        Ok(())
    }

    /// Fill with values from [`Self::next_bool`]
    pub fn fill_bools(&mut self, dest: &mut [bool]) -> RngResult<()> {
        check_not_empty(dest.len())?;
        dest.iter_mut().for_each(|slot| *slot = self.next_bool());
        Ok(())
    }
}

impl Default for RngManager {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn check_int_bounds(min: i32, max: i32) -> RngResult<()> {
    if min > max {
        return Err(RngError::out_of_range(
            "min",
            min,
            format!("min must not exceed max ({})", max),
        ));
    }
    Ok(())
}

/// Map `d` in `[0, 1]` onto `[min, max]` as `d * (max - min) + min`.
///
/// When `max - min` overflows (e.g. `-f64::MAX..f64::MAX`) the span is never
/// formed and the endpoints are weighted separately instead. Rounding can
/// land one ulp outside the bounds, hence the clamp.
fn scale_f64(d: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let value = if span.is_finite() {
        d * span + min
    } else {
        min * (1.0 - d) + max * d
    };
    value.clamp(min, max)
}

/// Single-precision counterpart of [`scale_f64`]
fn scale_f32(d: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    let value = if span.is_finite() {
        d * span + min
    } else {
        min * (1.0 - d) + max * d
    };
    value.clamp(min, max)
}

fn check_float_bounds(min: f64, max: f64) -> RngResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RngError::InvalidArgument(format!(
            "range bounds must be finite, got [{}, {}]",
            min, max
        )));
    }
    if min > max {
        return Err(RngError::out_of_range(
            "min",
            min,
            format!("min must not exceed max ({})", max),
        ));
    }
    Ok(())
}

fn check_not_empty(len: usize) -> RngResult<()> {
    if len == 0 {
        return Err(RngError::InvalidArgument(
            "destination buffer must not be empty".to_string(),
        ));
    }
    Ok(())
}
