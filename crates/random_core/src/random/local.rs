//! Static-interface facility backed by one engine per thread.

use std::marker::PhantomData;

use rand::{RngCore, SeedableRng};

use super::engine;
use crate::types::{Common, CommonType, RandomNumber};

/// Static-interface random facility with an independent engine per thread.
///
/// Each thread lazily seeds its own engine of type `E` from OS entropy on
/// its first call. Engines are never shared, so calls take no locks and
/// threads never contend.
///
/// # Examples
///
/// ```rust
/// use random_core::RandomLocal;
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| std::thread::spawn(|| RandomLocal::get(0_u32, 99)))
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap() <= 99);
/// }
/// ```
pub struct BasicRandomLocal<E> {
    _engine: PhantomData<fn() -> E>,
}

impl<E> BasicRandomLocal<E>
where
    E: RngCore + SeedableRng + 'static,
{
    /// Draws a value uniformly from the inclusive range between `from` and
    /// `to`, in either order, using the calling thread's engine.
    ///
    /// # Panics
    ///
    /// Panics for real bounds that are NaN or infinite.
    #[inline]
    pub fn get<A: RandomNumber>(from: A, to: A) -> A {
        engine::with_local::<E, _>(|engine| A::sample_inclusive(from, to, engine))
    }

    /// Mixed-type form of [`BasicRandomLocal::get`].
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
