//! Dice rolls
//!
//! The generator exposes two primitives, a total roll and per-die rolls.
//! [`Dice`] is a thin `count`/`sides` pair that forwards to them.

use serde::{Deserialize, Serialize};

use crate::error::{RngError, RngResult};
use crate::rng::RngManager;

/// Largest `count` accepted by [`RngManager::roll_each`]; each die costs a
/// slot in the returned `Vec`.
pub const MAX_ROLL_EACH: i32 = 1 << 20;

/// `count` dice with `sides` faces each (e.g. 3d6)
///
/// # Example
/// ```
/// use dice_rng_core_rs::{Dice, RngManager};
///
/// let mut rng = RngManager::new(2024);
/// let total = Dice::new(3, 6).roll(&mut rng).unwrap();
/// assert!((3..=18).contains(&total));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub count: i32,
    pub sides: i32,
}

impl Dice {
    pub fn new(count: i32, sides: i32) -> Self {
        Self { count, sides }
    }

    /// Sum of all dice, in `[count, count * sides]`
    pub fn roll(&self, rng: &mut RngManager) -> RngResult<i32> {
        rng.roll_total(self.count, self.sides)
    }

    /// Each die separately, every value in `[1, sides]`
    pub fn roll_each(&self, rng: &mut RngManager) -> RngResult<Vec<i32>> {
        rng.roll_each(self.count, self.sides)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl RngManager {
    /// Total of `count` dice with `sides` faces: one draw of
    /// `next_int(count, count * sides + 1)`.
    ///
    /// # Errors
    /// `InvalidArgument` if `count` or `sides` is not positive or
    /// `count * sides` overflows.
    pub fn roll_total(&mut self, count: i32, sides: i32) -> RngResult<i32> {
        let max = checked_dice_max(count, sides)?;
        self.next_int_range(count, max + 1)
    }

    /// `count` independent draws over `[1, sides + 1)`
    ///
    /// # Errors
    /// Same conditions as [`Self::roll_total`], plus `InvalidArgument` if
    /// `count` exceeds [`MAX_ROLL_EACH`].
    pub fn roll_each(&mut self, count: i32, sides: i32) -> RngResult<Vec<i32>> {
        checked_dice_max(count, sides)?;
        if count > MAX_ROLL_EACH {
            return Err(RngError::InvalidArgument(format!(
                "cannot roll {} dice individually (limit {})",
                count, MAX_ROLL_EACH
            )));
        }
        let mut rolls = vec![0; count as usize];
        self.fill_ints_range(&mut rolls, 1, sides + 1)?;
        Ok(rolls)
    }
}

fn checked_dice_max(count: i32, sides: i32) -> RngResult<i32> {
    if count <= 0 {
        return Err(RngError::InvalidArgument(format!(
            "dice count must be positive, got {}",
            count
        )));
    }
    if sides <= 0 {
        return Err(RngError::InvalidArgument(format!(
            "dice sides must be positive, got {}",
            sides
        )));
    }
    count
        .checked_mul(sides)
        .filter(|max| *max < i32::MAX)
        .ok_or_else(|| {
            RngError::InvalidArgument(format!("{}d{} exceeds the i32 range", count, sides))
        })
}
