use num_bigint::{BigInt, BigUint};
use num_traits::Signed;
use rand_core::RngCore;

use crate::error::{check_len, Result, SamplingError};
use crate::source::Source;

/// Coefficient type that can be drawn uniformly from `[-bound, bound]`.
///
/// Implemented for `i64` and `BigInt`; [fill_uniform] is the same algorithm
/// for both.
pub trait UniformCoefficient: Clone {
    fn is_positive_bound(bound: &Self) -> bool;

    /// Draws uniformly from `[0, 2*bound + 1)` and shifts by `-bound`.
    fn draw_centered(bound: &Self, source: &mut Source) -> Self;
}

impl UniformCoefficient for i64 {
    fn is_positive_bound(bound: &i64) -> bool {
        *bound > 0
    }

    #[inline(always)]
    fn draw_centered(bound: &i64, source: &mut Source) -> i64 {
        let width: u64 = 2 * (*bound as u64) + 1;
        (source.next_u64_below(width) as i128 - *bound as i128) as i64
    }
}

impl UniformCoefficient for BigInt {
    fn is_positive_bound(bound: &BigInt) -> bool {
        bound.is_positive()
    }

    fn draw_centered(bound: &BigInt, source: &mut Source) -> BigInt {
        let width: BigUint = (bound.magnitude() << 1u32) + 1u32;
        BigInt::from(next_biguint_below(&width, source)) - bound
    }
}

fn next_biguint_below(bound: &BigUint, source: &mut Source) -> BigUint {
    let bits: u64 = bound.bits();
    let mut buf: Vec<u8> = vec![0u8; bits.div_ceil(8) as usize];
    let excess: u64 = (buf.len() as u64) * 8 - bits;
    loop {
        source.fill_bytes(&mut buf);
        let x: BigUint = BigUint::from_bytes_le(&buf) >> excess;
        if &x < bound {
            return x;
        }
    }
}

fn check_bound<C: UniformCoefficient>(bound: &C) -> Result<()> {
    if !C::is_positive_bound(bound) {
        return Err(SamplingError::InvalidArgument(
            "uniform sampling needs B > 0".to_string(),
        ));
    }
    Ok(())
}

/// Fills `res` with coefficients uniform in `[-bound, bound]`.
pub fn fill_uniform<C: UniformCoefficient>(
    res: &mut [C],
    bound: &C,
    source: &mut Source,
) -> Result<()> {
    check_len(res.len(), "uniform")?;
    check_bound(bound)?;
    res.iter_mut()
        .for_each(|x| *x = C::draw_centered(bound, source));
    Ok(())
}

pub fn sample_uniform<C: UniformCoefficient>(
    n: usize,
    bound: &C,
    source: &mut Source,
) -> Result<Vec<C>> {
    check_len(n, "uniform")?;
    check_bound(bound)?;
    Ok((0..n).map(|_| C::draw_centered(bound, source)).collect())
}
