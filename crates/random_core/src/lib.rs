//! # random_core: Type-Safe Inclusive-Range Random Numbers
//!
//! random_core is a thin layer over `rand` engines. A single operation,
//! `get(from, to)`, returns a uniformly distributed value of the bounds' type
//! from the inclusive range between them:
//!
//! - Integers (`i16`..`i128`, `isize`, `u16`..`u128`, `usize`): discrete uniform
//! - Reals (`f32`, `f64`): continuous uniform over the closed interval
//! - Bytes (`i8`, `u8`): widened to 16 bits, sampled, narrowed back
//! - Mixed bound types: promoted to their common type via `get_common`
//!
//! Bounds may be given in either order. Unsupported types and signed/unsigned
//! bound pairs are rejected at compile time; there is no runtime error path
//! for a range request.
//!
//! ## Facilities
//!
//! - [`Random`]: owns its engine; draws take `&mut self`
//! - [`RandomLocal`]: static interface, one engine per thread
//! - [`RandomStatic`]: static interface, one engine per process
//!
//! Each is an alias over [`DefaultEngine`]; the generic forms
//! [`BasicRandom`], [`BasicRandomLocal`] and [`BasicRandomStatic`] accept any
//! `rand::RngCore + rand::SeedableRng` engine.
//!
//! ## Usage Examples
//!
//! ```rust
//! use random_core::{Random, RandomLocal, RandomStatic};
//!
//! let mut random = Random::new();
//! let roll = random.get(6, 1);
//! assert!((1..=6).contains(&roll));
//!
//! let temperature = RandomLocal::get(-40.0_f64, 50.0);
//! assert!((-40.0..=50.0).contains(&temperature));
//!
//! let offset: i64 = RandomStatic::get_common(-3_i32, 1_i64 << 40);
//! assert!((-3..=1_i64 << 40).contains(&offset));
//! ```
//!
//! Randomness is not cryptographically secure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod random;
pub mod types;

pub use random::{
    BasicRandom, BasicRandomLocal, BasicRandomStatic, DefaultEngine, Random, RandomLocal,
    RandomStatic,
};
pub use types::{Common, CommonType, NumberCategory, RandomError, RandomNumber};
