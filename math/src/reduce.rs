use std::sync::Arc;

use crate::cache::ModulusCache;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::poly_modulus::PolyModulus;
use crate::ring::RingDescriptor;

/// Returns `poly` mod Phi_m(X) as `phi_m` centred integers.
///
/// The remainder is computed in Z_q for the given field and lifted back, so
/// the result is exact only if every true output coefficient lies in
/// (-q/2, q/2]. Inputs outside that range are rejected with
/// [Error::CoefficientOverflow]; output wraparound is the caller's contract.
pub fn reduce_mod_phi_m_x<R: RingDescriptor + ?Sized>(
    poly: &[i64],
    ring: &R,
    field: &Field,
    cache: &ModulusCache,
) -> Result<Vec<i64>> {
    if let Some((index, value)) = poly.iter().enumerate().find(|(_, x)| !field.fits(**x)) {
        return Err(Error::CoefficientOverflow {
            index,
            value: *value,
            q: field.q(),
        });
    }

    let modulus: Arc<PolyModulus> = cache.get_or_build(ring, field)?;
    let a: Vec<u64> = poly.iter().map(|x| field.from_i64(*x)).collect();
    Ok(modulus
        .rem(&a)
        .into_iter()
        .map(|x| field.to_i64(x))
        .collect())
}
