//! Conversions at the FFI boundary

use pyo3::prelude::*;

use crate::error::RngError;

/// Map an engine error onto the closest Python exception
///
/// - argument problems → `ValueError`
/// - zero denominator → `ZeroDivisionError`
/// - corrupted state, I/O, serialization and a busy shared generator →
///   `RuntimeError`
pub fn rng_error_to_py(err: RngError) -> PyErr {
    match err {
        RngError::InvalidArgument(_) | RngError::OutOfRange { .. } => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
        RngError::DivideByZero => {
            PyErr::new::<pyo3::exceptions::PyZeroDivisionError, _>(err.to_string())
        }
        RngError::CorruptedState(_)
        | RngError::Io(_)
        | RngError::Serialization(_)
        | RngError::SharedBusy => {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(err.to_string())
        }
    }
}
