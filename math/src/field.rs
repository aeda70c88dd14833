use std::sync::OnceLock;

use tracing::debug;

use crate::dft::ntt::Table;
use crate::error::{Error, Result};
use crate::modulus::prime::Prime;
use crate::modulus::prime_generator::NTTFriendlyPrimesGenerator;

/// Bit size of the default reduction field.
pub const FFT_PRIME_BITS: u64 = 61;

/// The default field supports negacyclic NTTs up to size 2^(FFT_TWO_ADICITY-1).
pub const FFT_TWO_ADICITY: u32 = 21;

/// Prime field Z_q in which polynomial remainders are computed.
///
/// A `Field` is a plain value passed to every reduction; there is no ambient
/// "current modulus". Coefficients are lifted in and out with the centred
/// representative, so a signed integer `x` survives the round trip iff
/// `|x| <= q/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    prime: Prime,
}

impl Field {
    pub fn new(q: u64) -> Result<Self> {
        Ok(Self {
            prime: Prime::new(q)?,
        })
    }

    /// Largest 61-bit prime with q = 1 mod 2^21, selected once per process.
    pub fn best_fft() -> Field {
        static BEST_FFT: OnceLock<Field> = OnceLock::new();
        *BEST_FFT.get_or_init(|| {
            let prime: Prime =
                NTTFriendlyPrimesGenerator::new(FFT_PRIME_BITS, 1 << FFT_TWO_ADICITY)
                    .next_downstream_prime();
            debug!(q = prime.q(), "selected default reduction field");
            Field { prime }
        })
    }

    pub fn q(&self) -> u64 {
        self.prime.q()
    }

    pub fn prime(&self) -> &Prime {
        &self.prime
    }

    /// Largest negacyclic NTT size over this field.
    pub fn max_ntt_size(&self) -> usize {
        1 << (self.prime.two_adicity() - 1)
    }

    pub fn ntt_table(&self, n: usize) -> Result<Table> {
        if !n.is_power_of_two() || n > self.max_ntt_size() {
            return Err(Error::InvalidField(format!(
                "q={} has no negacyclic NTT of size {} (max {})",
                self.q(),
                n,
                self.max_ntt_size()
            )));
        }
        Ok(Table::new(self.prime, n))
    }

    /// Returns |x| <= q/2, i.e. whether x is recovered by [Field::to_i64].
    #[inline(always)]
    pub fn fits(&self, x: i64) -> bool {
        x.unsigned_abs() <= self.q() >> 1
    }

    #[inline(always)]
    pub fn from_i64(&self, x: i64) -> u64 {
        x.rem_euclid(self.q() as i64) as u64
    }

    /// Centred lift of x in [0, q) to (-q/2, q/2].
    #[inline(always)]
    pub fn to_i64(&self, x: u64) -> i64 {
        debug_assert!(x < self.q(), "x={} >= q={}", x, self.q());
        if x > self.q() >> 1 {
            x as i64 - self.q() as i64
        } else {
            x as i64
        }
    }

    #[inline(always)]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let c: u64 = a + b;
        if c >= self.q() {
            c - self.q()
        } else {
            c
        }
    }

    #[inline(always)]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.q() - b
        }
    }

    #[inline(always)]
    pub fn neg(&self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.q() - a
        }
    }
}
