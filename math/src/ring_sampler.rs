use ::num_bigint::BigInt;
use sampling::source::Source;
use sampling::{sample_gaussian_f64, CoeffDistribution};

use crate::cache::ModulusCache;
use crate::error::Result;
use crate::field::Field;
use crate::poly::Poly;
use crate::reduce::reduce_mod_phi_m_x;
use crate::ring::RingDescriptor;

/// Fixed-point scale of the Ducas-Durmus sampler.
pub const DD_SCALE: i64 = 1 << 32;

/// Draws ring elements of Z[X]/(Phi_m(X)).
///
/// Power-of-two rings are sampled directly at length phi(m). Every other
/// ring is sampled at length m, i.e. modulo X^m - 1, and then reduced
/// modulo Phi_m(X) in `field` using the remainder structure held by `cache`.
pub struct RingSampler<'a, R: RingDescriptor + ?Sized> {
    ring: &'a R,
    field: Field,
    cache: &'a ModulusCache,
}

impl<'a, R: RingDescriptor + ?Sized> RingSampler<'a, R> {
    /// Uses [Field::best_fft] and the process-wide [ModulusCache].
    pub fn new(ring: &'a R) -> Self {
        Self {
            ring,
            field: Field::best_fft(),
            cache: ModulusCache::global(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    pub fn with_cache(mut self, cache: &'a ModulusCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn ring(&self) -> &R {
        self.ring
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Reduces a vector of any length modulo Phi_m(X).
    pub fn reduce(&self, a: &[i64]) -> Result<Vec<i64>> {
        reduce_mod_phi_m_x(a, self.ring, &self.field, self.cache)
    }

    pub fn sample(&self, dist: &CoeffDistribution, source: &mut Source) -> Result<Poly<i64>> {
        if self.ring.is_power_of_two() {
            return Ok(Poly(dist.sample(self.ring.phi_m(), source)?));
        }
        let a: Vec<i64> = dist.sample(self.ring.m(), source)?;
        Ok(Poly(self.reduce(&a)?))
    }

    pub fn sample_big(&self, dist: &CoeffDistribution, source: &mut Source) -> Result<Poly<BigInt>> {
        Ok(self.sample(dist, source)?.to_bigint())
    }

    pub fn sample_hwt(&self, hwt: usize, source: &mut Source) -> Result<Poly<i64>> {
        self.sample(&CoeffDistribution::HammingWeight(hwt), source)
    }

    pub fn sample_small(&self, source: &mut Source) -> Result<Poly<i64>> {
        self.sample(&CoeffDistribution::Ternary, source)
    }

    pub fn sample_gaussian(&self, stdev: f64, source: &mut Source) -> Result<Poly<i64>> {
        self.sample(&CoeffDistribution::Gaussian(stdev), source)
    }

    pub fn sample_uniform(&self, bound: i64, source: &mut Source) -> Result<Poly<i64>> {
        self.sample(&CoeffDistribution::Uniform(bound), source)
    }

    /// Ducas-Durmus error: a continuous Gaussian of length m with deviation
    /// stdev * sqrt(m), reduced modulo Phi_m(X) in fixed point with
    /// [DD_SCALE] and rounded to integers.
    ///
    /// Always goes through the reduction, power-of-two rings included.
    pub fn sample_error_dd(&self, stdev: f64, source: &mut Source) -> Result<Poly<i64>> {
        let m: usize = self.ring.m();
        let dvec: Vec<f64> = sample_gaussian_f64(m, stdev * (m as f64).sqrt(), source)?;
        let scaled: Vec<i64> = dvec.iter().map(|x| scale_up(*x)).collect();
        let reduced: Vec<i64> = self.reduce(&scaled)?;
        Ok(Poly(reduced.into_iter().map(scale_down).collect()))
    }

    pub fn sample_error_dd_big(&self, stdev: f64, source: &mut Source) -> Result<Poly<BigInt>> {
        Ok(self.sample_error_dd(stdev, source)?.to_bigint())
    }
}

#[inline(always)]
fn scale_up(x: f64) -> i64 {
    (x * DD_SCALE as f64).round() as i64
}

/// Floor of x / DD_SCALE + 1/2: nearest integer, ties upward for both signs.
#[inline(always)]
fn scale_down(x: i64) -> i64 {
    (x + (DD_SCALE >> 1)).div_euclid(DD_SCALE)
}
