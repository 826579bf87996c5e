//! Engine seeding and per-engine-type storage for the static facilities.
//!
//! Rust statics cannot be generic, so the shared and thread-local facilities
//! keep their engines in maps keyed by the engine's [`TypeId`]. Each map holds
//! at most one engine per type, created on first use and never dropped before
//! process (or thread) teardown.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::types::RandomError;

/// Engine used by [`Random`](crate::Random), [`RandomStatic`](crate::RandomStatic)
/// and [`RandomLocal`](crate::RandomLocal).
///
/// A small, fast, non-cryptographic generator. Not suitable for secrets.
pub type DefaultEngine = SmallRng;

type SharedEngines = HashMap<TypeId, Box<dyn Any + Send>>;

static SHARED_ENGINES: OnceLock<Mutex<SharedEngines>> = OnceLock::new();

thread_local! {
    static LOCAL_ENGINES: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Seeds a new engine from the operating system entropy source.
pub(crate) fn try_seed<E: SeedableRng>(facility: &'static str) -> Result<E, RandomError> {
    let engine = E::from_rng(OsRng)?;
    debug!(
        engine = type_name::<E>(),
        facility, "Seeded random engine from OS entropy"
    );
    Ok(engine)
}

/// Seeds a new engine, panicking if the host provides no entropy.
pub(crate) fn seed<E: SeedableRng>(facility: &'static str) -> E {
    match try_seed(facility) {
        Ok(engine) => engine,
        Err(err) => panic!("{err}"),
    }
}

/// Runs `f` against the process-wide engine of type `E`, creating it first
/// if needed.
pub(crate) fn with_shared<E, T>(f: impl FnOnce(&mut E) -> T) -> T
where
    E: RngCore + SeedableRng + Send + 'static,
{
    let engines = SHARED_ENGINES.get_or_init(|| Mutex::new(HashMap::new()));
    // Engines hold no invariants a panicking caller could break.
    let mut engines = engines.lock().unwrap_or_else(PoisonError::into_inner);
    let slot = engines
        .entry(TypeId::of::<E>())
        .or_insert_with(|| -> Box<dyn Any + Send> { Box::new(seed::<E>("shared")) });
    match (**slot).downcast_mut::<E>() {
        Some(engine) => f(engine),
        None => unreachable!("engine registry is keyed by TypeId"),
    }
}

/// Runs `f` against the calling thread's engine of type `E`, creating it
/// first if needed.
pub(crate) fn with_local<E, T>(f: impl FnOnce(&mut E) -> T) -> T
where
    E: RngCore + SeedableRng + 'static,
{
    LOCAL_ENGINES.with(|engines| {
        let mut engines = engines.borrow_mut();
        let slot = engines
            .entry(TypeId::of::<E>())
            .or_insert_with(|| -> Box<dyn Any> { Box::new(seed::<E>("thread_local")) });
        match (**slot).downcast_mut::<E>() {
            Some(engine) => f(engine),
            None => unreachable!("engine registry is keyed by TypeId"),
        }
    })
}

/// Number of engines created so far on the calling thread.
#[cfg(test)]
pub(crate) fn local_engine_count() -> usize {
    LOCAL_ENGINES.with(|engines| engines.borrow().len())
}
