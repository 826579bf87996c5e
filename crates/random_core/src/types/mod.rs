//! Numeric bound types and errors.
//!
//! This module provides:
//! - `category`: the sealed [`RandomNumber`] trait and [`NumberCategory`]
//! - `common`: mixed-type promotion via [`CommonType`]
//! - `error`: [`RandomError`] for engine seeding failures

pub mod category;
pub mod common;
pub mod error;

pub use category::{category_of, NumberCategory, RandomNumber};
pub use common::{Common, CommonType};
pub use error::RandomError;
