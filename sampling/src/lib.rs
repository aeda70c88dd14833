pub mod distributions;
pub mod error;
pub mod gaussian;
pub mod hwt;
pub mod source;
pub mod ternary;
pub mod uniform;

pub use distributions::CoeffDistribution;
pub use error::{Result, SamplingError};
pub use gaussian::{
    fill_gaussian, fill_gaussian_f64, sample_gaussian, sample_gaussian_f64, TRUNCATION_SIGMAS,
};
pub use hwt::{clamp_hwt, fill_hwt, sample_hwt};
pub use ternary::{fill_small, sample_small, TERNARY_CHUNK};
pub use uniform::{fill_uniform, sample_uniform, UniformCoefficient};
