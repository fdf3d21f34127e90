//! JSON checkpoints with an integrity digest
//!
//! Wraps the 59-integer blob together with the SHA-256 of its little-endian
//! bytes, so a checkpoint edited or truncated on disk is caught on restore
//! rather than silently producing a different sequence.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{RngError, RngResult};
use crate::rng::RngManager;

/// Serializable generator checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// `[seed, cursor_a, cursor_b, table[0..56]]`
    pub blob: Vec<i32>,

    /// Hex SHA-256 of `blob` (little-endian i32s)
    pub checksum: String,
}

/// Compute the hex SHA-256 digest of a blob
pub fn blob_checksum(blob: &[i32]) -> String {
    let mut hasher = Sha256::new();
    for value in blob {
        hasher.update(value.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

impl StateSnapshot {
    /// Encode as a JSON string
    pub fn to_json(&self) -> RngResult<String> {
        serde_json::to_string(self).map_err(|e| {
            RngError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Decode from a JSON string (integrity is checked on restore)
    pub fn from_json(json: &str) -> RngResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            RngError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }

    /// Check the digest against the blob
    pub fn verify(&self) -> RngResult<()> {
        let actual = blob_checksum(&self.blob);
        if actual != self.checksum {
            return Err(RngError::CorruptedState(format!(
                "checksum mismatch: expected {}, computed {}",
                self.checksum, actual
            )));
        }
        Ok(())
    }
}

impl RngManager {
    /// Capture a checksummed checkpoint of the current state
    pub fn snapshot(&self) -> StateSnapshot {
        let blob = self.save_state().to_vec();
        let checksum = blob_checksum(&blob);
        StateSnapshot { blob, checksum }
    }

    /// Restore from a checkpoint
    ///
    /// # Errors
    /// `CorruptedState` if the digest does not match or the blob is invalid.
    pub fn restore(&mut self, snapshot: &StateSnapshot) -> RngResult<()> {
        if let Err(e) = snapshot.verify() {
            tracing::warn!(error = %e, "rejecting generator checkpoint");
            return Err(e);
        }
        self.load_state(&snapshot.blob)
    }
}
