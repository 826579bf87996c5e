//! Error types for engine construction.
//!
//! Range requests themselves cannot fail: unsupported types and mismatched
//! bound types are rejected by the compiler. The only runtime failure is the
//! host refusing to provide entropy when an engine is seeded.

use thiserror::Error;

/// Random facility error.
///
/// # Examples
///
/// ```rust
/// use random_core::{Random, RandomError};
///
/// fn build() -> Result<Random, RandomError> {
///     Random::try_new()
/// }
///
/// assert!(build().is_ok());
/// ```
#[derive(Debug, Error)]
pub enum RandomError {
    /// The operating system entropy source could not seed an engine.
    #[error("Failed to seed random engine from OS entropy: {0}")]
    Entropy(#[from] rand::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[test]
    fn test_entropy_error_display() {
        let code = NonZeroU32::new(rand::Error::CUSTOM_START + 1).unwrap();
        let err = RandomError::from(rand::Error::from(code));
        let message = format!("{}", err);
        assert!(message.starts_with("Failed to seed random engine from OS entropy"));
    }

    #[test]
    fn test_entropy_error_source() {
        use std::error::Error as _;

        let code = NonZeroU32::new(rand::Error::CUSTOM_START + 2).unwrap();
        let err = RandomError::Entropy(rand::Error::from(code));
        assert!(err.source().is_some());
    }
}
