//! Persistence - Save/Load Generator State
//!
//! The full state of a generator is a fixed-layout sequence of 59 integers:
//!
//! ```text
//! [seed, cursor_a, cursor_b, table[0], table[1], ..., table[55]]
//! ```
//!
//! `table[0]` is never written by seeding or sampling, so a blob whose
//! element 3 is non-zero did not come from a healthy generator.
//!
//! # Critical Invariants
//!
//! - **Bit-for-bit**: `load_state(save_state())` resumes the exact sequence
//! - **All-or-nothing**: a rejected blob leaves the generator untouched
//! - **Stream layout**: little-endian `i32` count (always 59), then the 59
//!   elements as little-endian `i32`

mod checkpoint;

pub use checkpoint::{blob_checksum, StateSnapshot};

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{RngError, RngResult};
use crate::rng::{GeneratorState, RngManager, TABLE_LEN};

/// Number of integers in a persisted state
pub const BLOB_LEN: usize = 3 + TABLE_LEN;

/// Index of the sentinel slot (`table[0]`) within a blob
pub const SENTINEL_INDEX: usize = 3;

/// Validated 59-integer state blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct StateBlob(Vec<i32>);

impl StateBlob {
    /// Validate and wrap a raw integer sequence
    ///
    /// # Errors
    /// `CorruptedState` if the length is not 59, the sentinel slot is
    /// non-zero, or a cursor lies outside `0..=55`.
    pub fn new(values: Vec<i32>) -> RngResult<Self> {
        validate(&values)?;
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.0
    }

    fn to_state(&self) -> GeneratorState {
        let v = &self.0;
        let mut table = [0; TABLE_LEN];
        table.copy_from_slice(&v[SENTINEL_INDEX..]);
        GeneratorState {
            seed: v[0],
            cursor_a: v[1] as usize,
            cursor_b: v[2] as usize,
            table,
        }
    }
}

impl From<&GeneratorState> for StateBlob {
    fn from(state: &GeneratorState) -> Self {
        let mut values = Vec::with_capacity(BLOB_LEN);
        values.push(state.seed);
        values.push(state.cursor_a as i32);
        values.push(state.cursor_b as i32);
        values.extend_from_slice(&state.table);
        Self(values)
    }
}

impl TryFrom<Vec<i32>> for StateBlob {
    type Error = RngError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<StateBlob> for Vec<i32> {
    fn from(blob: StateBlob) -> Self {
        blob.0
    }
}

impl TryFrom<StateBlob> for RngManager {
    type Error = RngError;

    fn try_from(blob: StateBlob) -> Result<Self, Self::Error> {
        Ok(RngManager {
            state: blob.to_state(),
        })
    }
}

impl From<RngManager> for StateBlob {
    fn from(rng: RngManager) -> Self {
        StateBlob::from(&rng.state)
    }
}

fn validate(values: &[i32]) -> RngResult<()> {
    if values.len() != BLOB_LEN {
        return Err(RngError::CorruptedState(format!(
            "expected {} integers, got {}",
            BLOB_LEN,
            values.len()
        )));
    }

    if values[SENTINEL_INDEX] != 0 {
        return Err(RngError::CorruptedState(format!(
            "sentinel slot holds {} instead of 0",
            values[SENTINEL_INDEX]
        )));
    }

    // A cursor outside the table would index out of bounds on the next sample
    for (name, cursor) in [("cursor_a", values[1]), ("cursor_b", values[2])] {
        if !(0..TABLE_LEN as i32).contains(&cursor) {
            return Err(RngError::CorruptedState(format!(
                "{} = {} outside 0..={}",
                name,
                cursor,
                TABLE_LEN - 1
            )));
        }
    }

    Ok(())
}

impl RngManager {
    /// Snapshot the full state as `[seed, cursor_a, cursor_b] ++ table`
    pub fn save_state(&self) -> [i32; BLOB_LEN] {
        let mut out = [0; BLOB_LEN];
        out[0] = self.state.seed;
        out[1] = self.state.cursor_a as i32;
        out[2] = self.state.cursor_b as i32;
        out[SENTINEL_INDEX..].copy_from_slice(&self.state.table);
        out
    }

    /// Overwrite seed, cursors and table from a saved blob
    ///
    /// # Errors
    /// `CorruptedState` if the blob fails validation; the generator is left
    /// unchanged in that case.
    pub fn load_state(&mut self, values: &[i32]) -> RngResult<()> {
        if let Err(e) = validate(values) {
            tracing::warn!(error = %e, "rejecting persisted generator state");
            return Err(e);
        }

        let blob = StateBlob(values.to_vec());
        self.state = blob.to_state();
        tracing::debug!(seed = self.state.seed, "loaded generator state");
        Ok(())
    }

    /// Build a generator directly from a saved blob
    pub fn from_state(values: &[i32]) -> RngResult<Self> {
        let blob = StateBlob::new(values.to_vec())?;
        RngManager::try_from(blob)
    }

    /// Write the length-prefixed binary form of the state
    ///
    /// # Errors
    /// Writer failures are returned unchanged as `RngError::Io`.
    pub fn write_state<W: Write>(&self, mut writer: W) -> RngResult<()> {
        let mut bytes = Vec::with_capacity(4 * (BLOB_LEN + 1));
        bytes.extend_from_slice(&(BLOB_LEN as i32).to_le_bytes());
        for value in self.save_state() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Read the length-prefixed binary form and load it
    ///
    /// # Errors
    /// Reader failures are returned unchanged as `RngError::Io`; a count
    /// other than 59 or an invalid blob is `CorruptedState`.
    pub fn read_state<R: Read>(&mut self, mut reader: R) -> RngResult<()> {
        let mut word = [0u8; 4];
        reader.read_exact(&mut word)?;
        let count = i32::from_le_bytes(word);
        if count != BLOB_LEN as i32 {
            tracing::warn!(count, "rejecting state stream with wrong element count");
            return Err(RngError::CorruptedState(format!(
                "expected {} integers, stream declares {}",
                BLOB_LEN, count
            )));
        }

        let mut values = Vec::with_capacity(BLOB_LEN);
        for _ in 0..BLOB_LEN {
            reader.read_exact(&mut word)?;
            values.push(i32::from_le_bytes(word));
        }

        self.load_state(&values)
    }
}
