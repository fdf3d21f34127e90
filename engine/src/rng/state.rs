//! Subtractive generator state
//!
//! The generator's entire memory is a circular table of 56 signed 32-bit
//! integers and two rotating cursors into it. Samples are produced by
//! subtracting the slot under one cursor from the slot under the other
//! (a lagged-Fibonacci construction with lags 55 and 24).
//!
//! # Invariants
//!
//! - `table[1..56]` holds values in `[0, i32::MAX)` for any state built by
//!   seeding and advanced by sampling.
//! - `table[0]` is never written by seeding or sampling and stays `0`. The
//!   persistence layer uses it as a corruption sentinel.
//! - After the first sample both cursors lie in `1..=55`.

/// Number of slots in the state table (slot 0 is the unused sentinel)
pub const TABLE_LEN: usize = 56;

/// Exclusive upper bound of every raw sample
pub const MBIG: i32 = i32::MAX;

/// Seeding constant (the golden ratio's leading digits)
const MSEED: i32 = 161_803_398;

/// Initial distance between the two cursors
const CURSOR_B_START: usize = 21;

/// Raw state of a subtractive generator
///
/// This type only knows how to seed itself and how to advance by one raw
/// sample. Typed derivations live on [`crate::RngManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorState {
    /// Seed that produced this state (used by reset)
    pub(crate) seed: i32,

    /// Circular state table
    pub(crate) table: [i32; TABLE_LEN],

    /// Cursor of the slot that receives the next sample
    pub(crate) cursor_a: usize,

    /// Trailing cursor, 21 slots ahead of `cursor_a` modulo 55
    pub(crate) cursor_b: usize,
}

impl GeneratorState {
    /// Build the state for `seed`.
    ///
    /// Same seed → same table → same infinite sample sequence.
    pub fn seeded(seed: i32) -> Self {
        let mut state = Self {
            seed,
            table: [0; TABLE_LEN],
            cursor_a: 0,
            cursor_b: CURSOR_B_START,
        };
        state.fill_table();
        state
    }

    /// Seed this state was last built from
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Current cursors `(cursor_a, cursor_b)`
    pub fn cursors(&self) -> (usize, usize) {
        (self.cursor_a, self.cursor_b)
    }

    /// Read-only view of the state table
    pub fn table(&self) -> &[i32; TABLE_LEN] {
        &self.table
    }

    /// Rebuild the table from `seed`, overwriting everything.
    pub(crate) fn reseed(&mut self, seed: i32) {
        self.seed = seed;
        self.table = [0; TABLE_LEN];
        self.fill_table();
    }

    /// Rebuild the table from the stored seed.
    pub(crate) fn reset(&mut self) {
        self.reseed(self.seed);
    }

    /// Advance by one and return the next raw sample in `[0, i32::MAX)`.
    ///
    /// Mutates exactly one table slot and both cursors. Takes `&mut self`, so
    /// the whole read-increment-write happens under a single exclusive borrow.
    pub fn next_sample(&mut self) -> i32 {
        let mut a = self.cursor_a + 1;
        if a >= TABLE_LEN {
            a = 1;
        }
        let mut b = self.cursor_b + 1;
        if b >= TABLE_LEN {
            b = 1;
        }

        let mut result = self.table[a].wrapping_sub(self.table[b]);
        if result == MBIG {
            result -= 1;
        }
        if result < 0 {
            result = result.wrapping_add(MBIG);
        }

        self.table[a] = result;
        self.cursor_a = a;
        self.cursor_b = b;
        result
    }

    fn fill_table(&mut self) {
        let subtraction = if self.seed == i32::MIN {
            MBIG
        } else {
            self.seed.abs()
        };

        let mut mj = MSEED.wrapping_sub(subtraction);
        self.table[TABLE_LEN - 1] = mj;
        let mut mk: i32 = 1;

        // Spread the seed over the table in a scrambled order
        for i in 1..TABLE_LEN - 1 {
            let ii = (21 * i) % (TABLE_LEN - 1);
            self.table[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = self.table[ii];
        }

        // Warm up: four passes of lag-31 subtraction
        for _ in 0..4 {
            for i in 1..TABLE_LEN {
                let lagged = self.table[1 + (i + 30) % (TABLE_LEN - 1)];
                let mut value = self.table[i].wrapping_sub(lagged);
                if value < 0 {
                    value = value.wrapping_add(MBIG);
                }
                self.table[i] = value;
            }
        }

        self.cursor_a = 0;
        self.cursor_b = CURSOR_B_START;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_slot_stays_zero() {
        let mut state = GeneratorState::seeded(12345);
        assert_eq!(state.table[0], 0);

        for _ in 0..10_000 {
            state.next_sample();
        }
        assert_eq!(state.table[0], 0, "sampling must never touch slot 0");
    }

    #[test]
    fn test_initial_cursors() {
        let state = GeneratorState::seeded(7);
        assert_eq!(state.cursors(), (0, 21));
    }

    #[test]
    fn test_cursors_wrap_to_one() {
        let mut state = GeneratorState::seeded(7);

        for _ in 0..200 {
            state.next_sample();
            let (a, b) = state.cursors();
            assert!((1..=55).contains(&a), "cursor_a {} out of 1..=55", a);
            assert!((1..=55).contains(&b), "cursor_b {} out of 1..=55", b);
        }
    }

    #[test]
    fn test_table_values_in_range_after_seeding() {
        for seed in [0, 1, -1, 42, i32::MAX, i32::MIN, MSEED, -MSEED] {
            let state = GeneratorState::seeded(seed);
            for (i, value) in state.table.iter().enumerate().skip(1) {
                assert!(
                    (0..MBIG).contains(value),
                    "seed {}: table[{}] = {} outside [0, MBIG)",
                    seed,
                    i,
                    value
                );
            }
        }
    }

    #[test]
    fn test_min_seed_same_as_max_seed() {
        // |i32::MIN| does not fit, so it is treated as i32::MAX
        let a = GeneratorState::seeded(i32::MIN);
        let b = GeneratorState::seeded(i32::MAX);
        assert_eq!(a.table, b.table);
    }

    #[test]
    fn test_negative_seed_mirrors_positive() {
        let a = GeneratorState::seeded(-99);
        let b = GeneratorState::seeded(99);
        assert_eq!(a.table, b.table);
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GeneratorState::seeded(2024);
        let fresh = state.clone();

        for _ in 0..77 {
            state.next_sample();
        }
        assert_ne!(state, fresh);

        state.reset();
        assert_eq!(state, fresh);
    }
}
