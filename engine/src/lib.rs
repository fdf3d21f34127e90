//! Dice RNG Core - Rust Engine
//!
//! Deterministic, seedable pseudorandom generation for dice rolling,
//! weighted sampling and shuffling.
//!
//! # Architecture
//!
//! - **rng**: Subtractive generator state, seeding, typed derivations
//! - **selection**: Shuffle, uniform/weighted choice, probability tests
//! - **persistence**: 59-integer state blobs, binary streams, JSON checkpoints
//! - **shared**: Per-thread ambient generator and a lock-guarded shared handle
//! - **dice**: Thin dice value object over the two roll primitives
//! - **config**: Serde configuration for building generators
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, bit for bit
//! 2. `load_state(save_state())` resumes the exact sequence
//! 3. Not cryptographically secure

// Module declarations
pub mod config;
pub mod dice;
pub mod error;
pub mod persistence;
pub mod rng;
pub mod selection;
pub mod shared;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use dice::{Dice, MAX_ROLL_EACH};
pub use error::{RngError, RngResult};
pub use persistence::{StateBlob, StateSnapshot, BLOB_LEN};
pub use rng::{GeneratorState, RngManager, SeedSource};
pub use selection::{WeightTable, Weighted, WeightedCandidate, WeightedVariant};
pub use shared::{reseed_shared, try_with_shared, with_shared, SyncRng};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn dice_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyRandom>()?;
    Ok(())
}
