//! Explicitly owned random facility.
//!
//! This module provides [`BasicRandom`], which owns a single engine and
//! serves inclusive-range requests from it.

use std::any::type_name;
use std::fmt;

use rand::{RngCore, SeedableRng};

use super::engine;
use crate::types::{Common, CommonType, RandomError, RandomNumber};

/// Owned random facility over the engine `E`.
///
/// Holds exactly one engine for its whole lifetime. The engine is never
/// exposed, copied or reset; every draw advances it. Drawing takes
/// `&mut self`, so there is no internal locking and an instance cannot be
/// raced from several threads. Use
/// [`BasicRandomLocal`](crate::BasicRandomLocal) or
/// [`BasicRandomStatic`](crate::BasicRandomStatic) when no owner is at hand.
///
/// # Examples
///
/// ```rust
/// use random_core::Random;
///
/// let mut random = Random::new();
///
/// // Bounds in either order
/// let die = random.get(1, 6);
/// assert!((1..=6).contains(&die));
/// let die = random.get(6, 1);
/// assert!((1..=6).contains(&die));
///
/// // Reals are drawn from the closed interval
/// let x = random.get(-1.0_f64, 1.0);
/// assert!((-1.0..=1.0).contains(&x));
///
/// // Mixed bound types promote to their common type
/// let wide: i64 = random.get_common(-5_i32, 5_000_000_000_i64);
/// assert!((-5..=5_000_000_000).contains(&wide));
/// ```
pub struct BasicRandom<E> {
    /// The owned engine.
    engine: E,
}

impl<E: RngCore + SeedableRng> BasicRandom<E> {
    /// Creates a facility with an engine seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if the host entropy source fails. Use [`BasicRandom::try_new`]
    /// to handle that case.
    pub fn new() -> Self {
        Self {
            engine: engine::seed("owned"),
        }
    }

    /// Creates a facility with an engine seeded from OS entropy, reporting
    /// entropy failures instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::Entropy`] if the host entropy source fails.
    pub fn try_new() -> Result<Self, RandomError> {
        Ok(Self {
            engine: engine::try_seed("owned")?,
        })
    }
}

impl<E: RngCore> BasicRandom<E> {
    /// Creates a facility that takes ownership of a caller-built engine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use random_core::{BasicRandom, DefaultEngine};
    /// use rand::SeedableRng;
    ///
    /// let mut first = BasicRandom::from_engine(DefaultEngine::seed_from_u64(42));
    /// let mut second = BasicRandom::from_engine(DefaultEngine::seed_from_u64(42));
    ///
    /// assert_eq!(first.get(0_u64, 1_000), second.get(0_u64, 1_000));
    /// ```
    #[inline]
    pub fn from_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Draws a value uniformly from the inclusive range between `from` and
    /// `to`, which may be given in either order.
    ///
    /// Integers and bytes come from a discrete uniform distribution over
    /// `[min, max]`. Reals come from a continuous uniform distribution over
    /// the closed interval `[min, max]`; `get(x, x)` returns `x`.
    ///
    /// # Panics
    ///
    /// Panics for real bounds that are NaN or infinite. Any finite bounds,
    /// including `f64::MIN` to `f64::MAX`, are accepted.
    #[inline]
    pub fn get<A: RandomNumber>(&mut self, from: A, to: A) -> A {
        A::sample_inclusive(from, to, &mut self.engine)
    }

    /// Draws a value from the inclusive range between bounds of two
    /// different types, returned as their [`Common`] type.
    ///
    /// Only pairs of matching signedness are accepted; see [`CommonType`].
    ///
    /// # Panics
    ///
    /// Same conditions as [`BasicRandom::get`] for the common type.
    #[inline]
    pub fn get_common<A, B>(&mut self, from: A, to: B) -> Common<A, B>
    where
        A: CommonType<B>,
        B: RandomNumber,
    {
        let (from, to) = A::promote(from, to);
        self.get(from, to)
    }
}

impl<E: RngCore + SeedableRng> Default for BasicRandom<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for BasicRandom<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicRandom")
            .field("engine", &type_name::<E>())
            .finish()
    }
}
