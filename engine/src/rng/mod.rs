//! Deterministic random number generation
//!
//! Subtractive (lagged-Fibonacci) generator with a 56-slot state table.
//! CRITICAL: same seed → same sequence, bit for bit, on every platform.

mod manager;
mod seed;
mod state;

pub use manager::RngManager;
pub use seed::{entropy_seed, seed_from_text, SeedSource};
pub use state::{GeneratorState, MBIG, TABLE_LEN};
