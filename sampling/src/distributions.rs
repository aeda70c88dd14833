use crate::error::{check_len, check_stdev, Result, SamplingError};
use crate::gaussian::fill_gaussian;
use crate::hwt::fill_hwt;
use crate::source::Source;
use crate::ternary::fill_small;
use crate::uniform::fill_uniform;

/// Coefficient distributions drawn by the samplers of this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoeffDistribution {
    /// Exactly `hwt` coefficients in {-1, 1}, the rest zero.
    HammingWeight(usize),
    /// 0 w.p. 1/2, +1 and -1 w.p. 1/4 each.
    Ternary,
    /// Rounded Box-Muller Gaussian with the given standard deviation.
    Gaussian(f64),
    /// Uniform in `[-B, B]`.
    Uniform(i64),
}

impl CoeffDistribution {
    /// Checks the distribution parameters for a vector of length `n`
    /// without consuming randomness.
    pub fn validate(&self, n: usize) -> Result<()> {
        check_len(n, self.name())?;
        match self {
            CoeffDistribution::HammingWeight(_) | CoeffDistribution::Ternary => Ok(()),
            CoeffDistribution::Gaussian(stdev) => check_stdev(*stdev),
            CoeffDistribution::Uniform(bound) => {
                if *bound <= 0 {
                    return Err(SamplingError::InvalidArgument(
                        "uniform sampling needs B > 0".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoeffDistribution::HammingWeight(_) => "hamming weight",
            CoeffDistribution::Ternary => "ternary",
            CoeffDistribution::Gaussian(_) => "gaussian",
            CoeffDistribution::Uniform(_) => "uniform",
        }
    }

    pub fn fill(&self, res: &mut [i64], source: &mut Source) -> Result<()> {
        match self {
            CoeffDistribution::HammingWeight(hwt) => fill_hwt(res, *hwt, source),
            CoeffDistribution::Ternary => fill_small(res, source),
            CoeffDistribution::Gaussian(stdev) => fill_gaussian(res, *stdev, source),
            CoeffDistribution::Uniform(bound) => fill_uniform(res, bound, source),
        }
    }

    pub fn sample(&self, n: usize, source: &mut Source) -> Result<Vec<i64>> {
        self.validate(n)?;
        let mut res: Vec<i64> = vec![0; n];
        self.fill(&mut res, source)?;
        Ok(res)
    }
}
