//! Numeric categories accepted as random range bounds.
//!
//! Every type usable as a bound implements the sealed [`RandomNumber`] trait.
//! The impl selected for a type fixes its [`NumberCategory`] and its sampling
//! path at compile time:
//!
//! - [`NumberCategory::Integer`]: `i16`, `i32`, `i64`, `i128`, `isize` and
//!   their unsigned counterparts, drawn from a discrete uniform distribution
//! - [`NumberCategory::Real`]: `f32`, `f64`, drawn from a continuous uniform
//!   distribution over the closed interval; any finite bounds are accepted
//! - [`NumberCategory::Byte`]: `i8`, `u8`, widened to `i16`/`u16`, drawn on
//!   the integer path and narrowed back
//!
//! Any other type has no impl and the call site fails to build:
//!
//! ```compile_fail
//! use random_core::Random;
//!
//! let mut random = Random::new();
//! let _ = random.get(false, true);
//! ```
//!
//! ```compile_fail
//! use random_core::Random;
//!
//! let mut random = Random::new();
//! let _ = random.get('a', 'z');
//! ```

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Compile-time category of a supported numeric type.
///
/// Carried as [`RandomNumber::CATEGORY`]; it has no runtime role in sampling
/// and exists for diagnostics and tests.
///
/// # Examples
///
/// ```rust
/// use random_core::{NumberCategory, RandomNumber};
///
/// assert_eq!(<u8 as RandomNumber>::CATEGORY, NumberCategory::Byte);
/// assert_eq!(<i64 as RandomNumber>::CATEGORY, NumberCategory::Integer);
/// assert_eq!(<f32 as RandomNumber>::CATEGORY, NumberCategory::Real);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    /// Integers of 16 bits and wider, signed or unsigned.
    Integer,
    /// Floating-point numbers.
    Real,
    /// Single-byte integers, sampled through a 16-bit integer.
    Byte,
}

mod sealed {
    pub trait Sealed {}
}

/// A numeric type that can bound a random range.
///
/// Sealed: the supported set is closed, so the compiler rejects everything
/// else instead of failing at runtime.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported random number type",
    label = "random bounds must be primitive integers or floats",
    note = "supported types are `i8`..`i128`, `isize`, `u8`..`u128`, `usize`, `f32` and `f64`"
)]
pub trait RandomNumber: Copy + PartialOrd + sealed::Sealed {
    /// Category driving the sampling path for this type.
    const CATEGORY: NumberCategory;

    /// Whether the type can represent negative values. Floats are signed.
    const SIGNED: bool;

    /// Draws one value uniformly from the inclusive range spanned by
    /// `from` and `to`, in either order.
    ///
    /// # Panics
    ///
    /// Panics for real bounds that are NaN or infinite.
    fn sample_inclusive<R: Rng + ?Sized>(from: Self, to: Self, rng: &mut R) -> Self;
}

/// Returns the category of `T`.
#[inline]
pub fn category_of<T: RandomNumber>() -> NumberCategory {
    T::CATEGORY
}

/// Orders the bounds and draws once from `Uniform::new_inclusive`.
#[inline]
fn sample_ordered<T, R>(from: T, to: T, rng: &mut R) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng + ?Sized,
{
    let (low, high) = if from < to { (from, to) } else { (to, from) };
    Uniform::new_inclusive(low, high).sample(rng)
}

macro_rules! impl_integer {
    ($($ty:ty => $signed:expr),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl RandomNumber for $ty {
            const CATEGORY: NumberCategory = NumberCategory::Integer;
            const SIGNED: bool = $signed;

            #[inline]
            fn sample_inclusive<R: Rng + ?Sized>(from: Self, to: Self, rng: &mut R) -> Self {
                sample_ordered(from, to, rng)
            }
        }
    )*};
}

macro_rules! impl_real {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl RandomNumber for $ty {
            const CATEGORY: NumberCategory = NumberCategory::Real;
            const SIGNED: bool = true;

            #[inline]
            fn sample_inclusive<R: Rng + ?Sized>(from: Self, to: Self, rng: &mut R) -> Self {
                let (low, high) = if from < to { (from, to) } else { (to, from) };
                if high - low <= <$ty>::MAX / 2.0 {
                    Uniform::new_inclusive(low, high).sample(rng)
                } else {
                    // Span too wide for the distribution's scale; draw a
                    // quarter-width value and scale it back up exactly.
                    4.0 * Uniform::new_inclusive(low / 4.0, high / 4.0).sample(rng)
                }
            }
        }
    )*};
}

macro_rules! impl_byte {
    ($($ty:ty => $wide:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl RandomNumber for $ty {
            const CATEGORY: NumberCategory = NumberCategory::Byte;
            const SIGNED: bool = <$wide as RandomNumber>::SIGNED;

            #[inline]
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn sample_inclusive<R: Rng + ?Sized>(from: Self, to: Self, rng: &mut R) -> Self {
                let wide = <$wide as RandomNumber>::sample_inclusive(
                    <$wide>::from(from),
                    <$wide>::from(to),
                    rng,
                );
                // `wide` lies between two values of the byte type
                wide as $ty
            }
        }
    )*};
}

impl_integer! {
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
}

impl_real!(f32, f64);

impl_byte! {
    i8 => i16,
    u8 => u16,
}
