use ::num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::poly::Poly;

pub fn to_bigints(a: &[i64]) -> Vec<BigInt> {
    a.iter().map(|x| BigInt::from(*x)).collect()
}

/// Fails with [Error::BigIntOverflow] at the first coefficient outside i64.
pub fn from_bigints(a: &[BigInt]) -> Result<Vec<i64>> {
    a.iter()
        .enumerate()
        .map(|(i, x)| x.to_i64().ok_or(Error::BigIntOverflow(i)))
        .collect()
}

impl Poly<i64> {
    pub fn to_bigint(&self) -> Poly<BigInt> {
        Poly(to_bigints(&self.0))
    }
}

impl Poly<BigInt> {
    pub fn to_i64(&self) -> Result<Poly<i64>> {
        Ok(Poly(from_bigints(&self.0)?))
    }
}
