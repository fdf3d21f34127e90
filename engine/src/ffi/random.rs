//! PyO3 wrapper for RngManager
//!
//! # Example (from Python)
//!
//! ```python
//! from dice_rng_core_rs import Random
//!
//! rng = Random(12345)
//! roll = rng.next_int_range(1, 7)
//! state = rng.save_state()      # list of 59 ints
//! rng.load_state(state)
//! ```

use pyo3::prelude::*;

use super::types::rng_error_to_py;
use crate::rng::RngManager;

/// Python wrapper for the Rust generator
#[pyclass(name = "Random")]
pub struct PyRandom {
    inner: RngManager,
}

#[pymethods]
impl PyRandom {
    /// Create a generator; omitting `seed` picks an unpredictable one
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i32>) -> Self {
        PyRandom {
            inner: RngManager::with_seed(seed),
        }
    }

    /// Build from text (decimal parsed, anything else hashed)
    #[staticmethod]
    fn from_text(text: &str) -> Self {
        PyRandom {
            inner: RngManager::from_seed_text(text),
        }
    }

    #[getter]
    fn seed(&self) -> i32 {
        self.inner.seed()
    }

    #[pyo3(signature = (seed=None))]
    fn reseed(&mut self, seed: Option<i32>) -> i32 {
        self.inner.reseed(seed)
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    fn next_int_range(&mut self, min: i32, max: i32) -> PyResult<i32> {
        self.inner.next_int_range(min, max).map_err(rng_error_to_py)
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    fn next_bool(&mut self) -> bool {
        self.inner.next_bool()
    }

    fn next_probability(&mut self, p: f32) -> bool {
        self.inner.next_probability(p)
    }

    fn next_odds(&mut self, numerator: i32, denominator: i32) -> PyResult<bool> {
        self.inner
            .next_odds(numerator, denominator)
            .map_err(rng_error_to_py)
    }

    fn roll(&mut self, count: i32, sides: i32) -> PyResult<i32> {
        self.inner.roll_total(count, sides).map_err(rng_error_to_py)
    }

    /// Return a shuffled copy of `items`
    fn shuffle(&mut self, mut items: Vec<PyObject>) -> Vec<PyObject> {
        self.inner.shuffle(&mut items);
        items
    }

    fn choose(&mut self, py: Python<'_>, items: Vec<PyObject>) -> PyResult<PyObject> {
        let picked = self.inner.choose(&items).map_err(rng_error_to_py)?;
        Ok(picked.clone_ref(py))
    }

    fn save_state(&self) -> Vec<i32> {
        self.inner.save_state().to_vec()
    }

    fn load_state(&mut self, state: Vec<i32>) -> PyResult<()> {
        self.inner.load_state(&state).map_err(rng_error_to_py)
    }
}
