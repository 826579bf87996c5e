//! # Random Facilities
//!
//! Three facilities serve the same `get`/`get_common` operations and differ
//! only in who owns the engine:
//!
//! | Facility               | Engine                         | Locking |
//! |------------------------|--------------------------------|---------|
//! | [`BasicRandom`]        | owned by the value             | none    |
//! | [`BasicRandomLocal`]   | one per thread per engine type | none    |
//! | [`BasicRandomStatic`]  | one per process per engine type| mutex   |
//!
//! The engine is chosen by type parameter; the aliases [`Random`],
//! [`RandomLocal`] and [`RandomStatic`] use [`DefaultEngine`]. Any engine
//! implementing `rand::RngCore + rand::SeedableRng` can be plugged in:
//!
//! ```rust
//! use random_core::BasicRandomLocal;
//! use rand::rngs::StdRng;
//!
//! type ChaChaLocal = BasicRandomLocal<StdRng>;
//!
//! let percent = ChaChaLocal::get(0.0_f32, 100.0);
//! assert!((0.0..=100.0).contains(&percent));
//! ```
//!
//! Engines are seeded from OS entropy when created. None of the facilities
//! is suitable for cryptographic use.

mod basic;
mod engine;
mod local;
mod shared;

pub use basic::BasicRandom;
pub use engine::DefaultEngine;
pub use local::BasicRandomLocal;
pub use shared::BasicRandomStatic;

/// Owned facility over [`DefaultEngine`].
pub type Random = BasicRandom<DefaultEngine>;

/// Process-wide static facility over [`DefaultEngine`].
pub type RandomStatic = BasicRandomStatic<DefaultEngine>;

/// Per-thread static facility over [`DefaultEngine`].
pub type RandomLocal = BasicRandomLocal<DefaultEngine>;
