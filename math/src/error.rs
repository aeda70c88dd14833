use sampling::SamplingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error("invalid ring: {0}")]
    InvalidRing(String),

    #[error("invalid field: {0}")]
    InvalidField(String),

    /// A coefficient that would wrap around the field modulus.
    #[error("coefficient {value} at index {index} does not fit in (-q/2, q/2) for q={q}")]
    CoefficientOverflow { index: usize, value: i64, q: u64 },

    #[error("big integer coefficient at index {0} does not fit in an i64")]
    BigIntOverflow(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
