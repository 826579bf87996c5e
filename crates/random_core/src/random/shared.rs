//! Static-interface facility backed by one process-wide engine.

use std::marker::PhantomData;

use rand::{RngCore, SeedableRng};

use super::engine;
use crate::types::{Common, CommonType, RandomNumber};

/// Static-interface random facility sharing one engine across the process.
///
/// There is one engine per engine type `E`, seeded from OS entropy on the
/// first call from any thread and kept until process exit. Calls from every
/// thread draw from, and advance, that same engine. Access is serialised by
/// a mutex; prefer [`BasicRandomLocal`](crate::BasicRandomLocal) in
/// contended multi-threaded code.
///
/// # Examples
///
/// ```rust
/// use random_core::RandomStatic;
///
/// let roll = RandomStatic::get(1, 6);
/// assert!((1..=6).contains(&roll));
///
/// let byte = RandomStatic::get(-5_i8, 5);
/// assert!((-5..=5).contains(&byte));
/// ```
pub struct BasicRandomStatic<E> {
    _engine: PhantomData<fn() -> E>,
}

impl<E> BasicRandomStatic<E>
where
    E: RngCore + SeedableRng + Send + 'static,
{
    /// Draws a value uniformly from the inclusive range between `from` and
    /// `to`, in either order.
    ///
    /// # Panics
    ///
    /// Panics for real bounds that are NaN or infinite.
    #[inline]
    pub fn get<A: RandomNumber>(from: A, to: A) -> A {
        engine::with_shared::<E, _>(|engine| A::sample_inclusive(from, to, engine))
    }

    /// Mixed-type form of [`BasicRandomStatic::get`].
    #[inline]
    pub fn get_common<A, B>(from: A, to: B) -> Common<A, B>
    where
        A: CommonType<B>,
        B: RandomNumber,
    {
        let (from, to) = A::promote(from, to);
        Self::get(from, to)
    }
}
