//! Common-type promotion for mixed-type random ranges.
//!
//! A range may be bounded by two different numeric types of the same
//! signedness. Both bounds are promoted to their *common type*, the type
//! arithmetic between them would produce. The table is closed and lives
//! entirely in this module:
//!
//! | Bounds                                   | Common type     |
//! |------------------------------------------|-----------------|
//! | `T`, `T`                                 | `T`             |
//! | two signed integers                      | the wider one   |
//! | two unsigned integers                    | the wider one   |
//! | `isize` with `i8`/`i16`                  | `isize`         |
//! | `isize` with `i32`/`i64`                 | `i64`           |
//! | `isize` with `i128`                      | `i128`          |
//! | `usize` with `u8`/`u16`                  | `usize`         |
//! | `usize` with `u32`/`u64`                 | `u64`           |
//! | `usize` with `u128`                      | `u128`          |
//! | `f32`, `f64`                             | `f64`           |
//! | signed integer with `f32`                | `f32`           |
//! | signed integer with `f64`                | `f64`           |
//!
//! Integer bounds promoted to a float round to the nearest representable
//! value, as an `as` cast does.
//!
//! Signed and unsigned bounds never pair. Promoting a negative bound into an
//! unsigned type wraps it into a huge positive value and silently yields the
//! wrong range, so such calls do not compile:
//!
//! ```compile_fail
//! use random_core::Random;
//!
//! let mut random = Random::new();
//! let _ = random.get_common(-1_i32, 10_u32);
//! ```
//!
//! Floats count as signed, so they never pair with unsigned integers either:
//!
//! ```compile_fail
//! use random_core::Random;
//!
//! let mut random = Random::new();
//! let _ = random.get_common(0.5_f64, 10_u8);
//! ```
//!
//! Callers needing a mixed-signedness range convert one bound explicitly and
//! own the resulting semantics.

use super::category::RandomNumber;

/// Promotion of a `(Self, B)` bound pair into a shared [`RandomNumber`] type.
///
/// # Examples
///
/// ```rust
/// use random_core::{Common, CommonType};
///
/// let (from, to): (Common<i8, i32>, Common<i8, i32>) = i8::promote(-3, 1_000_i32);
/// assert_eq!((from, to), (-3_i32, 1_000_i32));
/// ```
#[diagnostic::on_unimplemented(
    message = "no common random range type for `{Self}` and `{B}`",
    label = "bounds of type `{Self}` and `{B}` cannot be mixed",
    note = "signed and unsigned bounds never mix; convert one bound explicitly"
)]
pub trait CommonType<B: RandomNumber>: RandomNumber {
    /// The type both bounds are promoted to.
    type Output: RandomNumber;

    /// Converts both bounds into [`CommonType::Output`].
    fn promote(from: Self, to: B) -> (Self::Output, Self::Output);
}

/// Common type of `A` and `B`.
pub type Common<A, B> = <A as CommonType<B>>::Output;

macro_rules! common_type {
    ($a:ty, $b:ty => $out:ty) => {
        const _: () = assert!(
            <$a as RandomNumber>::SIGNED == <$b as RandomNumber>::SIGNED,
            "signed and unsigned bounds must not share a common type"
        );

        impl CommonType<$b> for $a {
            type Output = $out;

            #[inline]
            fn promote(from: Self, to: $b) -> ($out, $out) {
                (<$out>::from(from), <$out>::from(to))
            }
        }
    };
}

macro_rules! common_type_cast {
    ($a:ty, $b:ty => $out:ty) => {
        const _: () = assert!(
            <$a as RandomNumber>::SIGNED == <$b as RandomNumber>::SIGNED,
            "signed and unsigned bounds must not share a common type"
        );

        impl CommonType<$b> for $a {
            type Output = $out;

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::unnecessary_cast
            )]
            fn promote(from: Self, to: $b) -> ($out, $out) {
                (from as $out, to as $out)
            }
        }
    };
}

macro_rules! common_types {
    ($($a:ty, $b:ty => $out:ty;)*) => {$(
        common_type!($a, $b => $out);
        common_type!($b, $a => $out);
    )*};
}

macro_rules! common_types_cast {
    ($($a:ty, $b:ty => $out:ty;)*) => {$(
        common_type_cast!($a, $b => $out);
        common_type_cast!($b, $a => $out);
    )*};
}

macro_rules! common_identity {
    ($($ty:ty),* $(,)?) => {$(
        common_type!($ty, $ty => $ty);
    )*};
}

common_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

common_types! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i8, isize => isize;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i16, isize => isize;
    i32, i64 => i64;
    i32, i128 => i128;
    i64, i128 => i128;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u8, u128 => u128;
    u8, usize => usize;
    u16, u32 => u32;
    u16, u64 => u64;
    u16, u128 => u128;
    u16, usize => usize;
    u32, u64 => u64;
    u32, u128 => u128;
    u64, u128 => u128;

    f32, f64 => f64;
    i8, f32 => f32;
    i16, f32 => f32;
    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
}

// Pairs without a `From` conversion into the common type.
common_types_cast! {
    i32, isize => i64;
    i64, isize => i64;
    isize, i128 => i128;

    u32, usize => u64;
    u64, usize => u64;
    usize, u128 => u128;

    i32, f32 => f32;
    i64, f32 => f32;
    i128, f32 => f32;
    isize, f32 => f32;
    i64, f64 => f64;
    i128, f64 => f64;
    isize, f64 => f64;
}
