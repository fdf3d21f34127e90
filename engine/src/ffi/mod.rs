//! Python bindings (PyO3)
//!
//! Enabled with the `pyo3` feature.

pub mod random;
pub mod types;
