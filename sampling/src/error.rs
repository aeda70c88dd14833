use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SamplingError>;

pub(crate) fn check_len(n: usize, sampler: &str) -> Result<()> {
    if n == 0 {
        return Err(SamplingError::InvalidArgument(format!(
            "{} sampling needs n > 0",
            sampler
        )));
    }
    Ok(())
}

pub(crate) fn check_stdev(stdev: f64) -> Result<()> {
    if !(stdev.is_finite() && stdev > 0.0) {
        return Err(SamplingError::InvalidArgument(format!(
            "gaussian sampling needs a finite stdev > 0, got {}",
            stdev
        )));
    }
    Ok(())
}
