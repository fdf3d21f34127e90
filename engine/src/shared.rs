//! Ambient and shared generators
//!
//! Two ways to reach a generator without threading one through every call:
//!
//! - [`with_shared`] gives each thread its own lazily-seeded [`RngManager`].
//!   Threads never see each other's state, so no locking is involved.
//! - [`SyncRng`] is a cloneable handle to one generator deliberately shared
//!   across threads. Every operation, including the full
//!   read-increment-write of a sample, runs under a single lock.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{RngError, RngResult};
use crate::rng::RngManager;

thread_local! {
    static SHARED: RefCell<Option<RngManager>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's generator, creating it on first use.
///
/// The generator is seeded from entropy unless [`reseed_shared`] ran first.
///
/// # Panics
/// If called from inside another `with_shared` (or [`try_with_shared`]) on
/// the same thread. Use [`try_with_shared`] where nesting is possible.
///
/// # Example
/// ```
/// use dice_rng_core_rs::shared::{reseed_shared, with_shared};
///
/// reseed_shared(Some(99)).unwrap();
/// let roll = with_shared(|rng| rng.next_int_range(1, 7)).unwrap();
/// assert!((1..7).contains(&roll));
/// ```
pub fn with_shared<R>(f: impl FnOnce(&mut RngManager) -> R) -> R {
    match try_with_shared(f) {
        Ok(value) => value,
        Err(err) => panic!("with_shared: {}", err),
    }
}

/// Fallible form of [`with_shared`].
///
/// # Errors
/// `SharedBusy` if this thread's generator is already borrowed by an
/// enclosing call. `f` is not run and the generator is left untouched.
pub fn try_with_shared<R>(f: impl FnOnce(&mut RngManager) -> R) -> RngResult<R> {
    SHARED.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| RngError::SharedBusy)?;
        let rng = slot.get_or_insert_with(RngManager::from_entropy);
        Ok(f(rng))
    })
}

/// Reseed this thread's generator (`None` = unpredictable).
///
/// Returns the seed actually used.
///
/// # Errors
/// `SharedBusy` when called from inside [`with_shared`].
pub fn reseed_shared(seed: Option<i32>) -> RngResult<i32> {
    SHARED.with(|cell| {
        let mut slot = cell.try_borrow_mut().map_err(|_| {
            tracing::warn!("reseed_shared called while the shared generator is borrowed");
            RngError::SharedBusy
        })?;
        let used = match slot.as_mut() {
            Some(rng) => rng.reseed(seed),
            None => {
                let rng = RngManager::with_seed(seed);
                let used = rng.seed();
                *slot = Some(rng);
                used
            }
        };
        Ok(used)
    })
}

/// Thread-safe handle to one generator
#[derive(Debug, Clone)]
pub struct SyncRng {
    inner: Arc<Mutex<RngManager>>,
}

impl SyncRng {
    pub fn new(rng: RngManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Lock and run `f` with exclusive access.
    ///
    /// Sequences of calls inside one `with` are not interleaved with other
    /// threads.
    pub fn with<R>(&self, f: impl FnOnce(&mut RngManager) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn next_sample(&self) -> i32 {
        self.lock().next_sample()
    }

    pub fn next_int_range(&self, min: i32, max: i32) -> RngResult<i32> {
        self.lock().next_int_range(min, max)
    }

    pub fn next_double(&self) -> f64 {
        self.lock().next_double()
    }

    pub fn save_state(&self) -> [i32; crate::persistence::BLOB_LEN] {
        self.lock().save_state()
    }

    pub fn load_state(&self, values: &[i32]) -> RngResult<()> {
        self.lock().load_state(values)
    }

    fn lock(&self) -> MutexGuard<'_, RngManager> {
        // Sampling cannot panic halfway through a write, so a poisoned
        // generator is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<RngManager> for SyncRng {
    fn from(rng: RngManager) -> Self {
        Self::new(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_shared_is_deterministic() {
        reseed_shared(Some(17)).unwrap();
        let first: Vec<i32> = (0..5).map(|_| with_shared(|rng| rng.next_int())).collect();

        reseed_shared(Some(17)).unwrap();
        let second: Vec<i32> = (0..5).map(|_| with_shared(|rng| rng.next_int())).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_matches_explicit_generator() {
        reseed_shared(Some(23)).unwrap();
        let mut explicit = RngManager::new(23);
        for _ in 0..10 {
            assert_eq!(with_shared(|rng| rng.next_sample()), explicit.next_sample());
        }
    }

    #[test]
    fn test_nested_reseed_is_rejected() {
        reseed_shared(Some(41)).unwrap();
        let inner = with_shared(|_| reseed_shared(Some(2)));
        assert!(matches!(inner, Err(RngError::SharedBusy)), "got {:?}", inner);

        // The outer borrow was released and the seed is unchanged
        let mut explicit = RngManager::new(41);
        assert_eq!(with_shared(|rng| rng.next_sample()), explicit.next_sample());
    }

    #[test]
    fn test_nested_try_with_shared_is_rejected() {
        let inner = with_shared(|_| try_with_shared(|rng| rng.next_sample()));
        assert!(matches!(inner, Err(RngError::SharedBusy)));
        assert!(try_with_shared(|rng| rng.next_sample()).is_ok());
    }

    #[test]
    #[should_panic(expected = "already in use")]
    fn test_nested_with_shared_panics_with_message() {
        with_shared(|_| with_shared(|rng| rng.next_sample()));
    }

    #[test]
    fn test_sync_rng_clones_share_state() {
        let a = SyncRng::new(RngManager::new(5));
        let b = a.clone();
        let mut reference = RngManager::new(5);

        assert_eq!(a.next_sample(), reference.next_sample());
        assert_eq!(b.next_sample(), reference.next_sample());
    }
}
