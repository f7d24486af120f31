//! Sampling decision.
//!
//! A call with `rate >= 1` always emits and never draws. Otherwise one uniform
//! draw in `[0, 1)` is taken and the call emits when `draw <= rate`, so the
//! expected emission frequency equals `rate`. Consequences of the comparison:
//! - `rate == 0.0` emits only on a draw of exactly `0.0`;
//! - negative rates never emit;
//! - `NaN` fails `rate < 1` and always emits.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`. Owned by each emitter instance.
pub trait RandomSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Decide whether a call at `rate` should emit.
pub fn should_emit<R: RandomSource + ?Sized>(rate: f64, source: &R) -> bool {
    if rate < 1.0 {
        source.draw() <= rate
    } else {
        true
    }
}

/// `StdRng` behind a mutex; safe to share across threads.
pub struct LockedRng {
    inner: Mutex<StdRng>,
}

impl LockedRng {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic sequence, for reproducible sampling.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for LockedRng {
    fn default() -> Self {
        Self::from_os()
    }
}

impl std::fmt::Debug for LockedRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedRng").finish_non_exhaustive()
    }
}

impl RandomSource for LockedRng {
    fn draw(&self) -> f64 {
        // Poisoned mutex: report the top of the range so sampled calls drop
        // instead of panicking the caller.
        match self.inner.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            Err(_) => {
                tracing::warn!("sampling rng lock poisoned; dropping sampled metrics");
                1.0
            }
        }
    }
}
