use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by the generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i32),
    #[error("requested bit count must be in 1..=32, got {0}")]
    InvalidBitCount(u32),
    #[error("empty range: min {min} must be less than max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("seed key must not be empty")]
    EmptyKey,
}
