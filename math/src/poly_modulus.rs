use itertools::izip;

use crate::dft::ntt::Table;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::modulus::barrett::Barrett;
use crate::modulus::ONCE;

/// Precomputed remainder structure for a monic polynomial f of degree n over
/// a prime field.
///
/// Stores f mod X^n and rev(f)^-1 mod X^n in the NTT domain of size
/// N = next_pow2(2n), so that reducing a window of at most 2n coefficients
/// costs two multiplications (Barrett reduction for polynomials).
/// Longer inputs are folded window by window from the top.
pub struct PolyModulus {
    field: Field,
    degree: usize,
    table: Table,
    f_low: Vec<Barrett<u64>>,
    f_rev_inv: Vec<Barrett<u64>>,
}

impl PolyModulus {
    /// Builds the structure for f given by its coefficients, lowest first.
    /// Fails if f is not monic of degree >= 1 or if the field has no NTT
    /// large enough for 2 * degree.
    pub fn new(field: Field, f: &[i64]) -> Result<Self> {
        if f.len() < 2 || f[f.len() - 1] != 1 {
            return Err(Error::InvalidRing(format!(
                "modulus must be monic of degree >= 1, got {:?}",
                f
            )));
        }

        let degree: usize = f.len() - 1;
        let table: Table = field.ntt_table((degree << 1).next_power_of_two())?;

        let f_mod: Vec<u64> = f.iter().map(|x| field.from_i64(*x)).collect();
        let f_rev: Vec<u64> = f_mod.iter().rev().take(degree).copied().collect();
        let f_rev_inv: Vec<u64> = inverse_series(&field, &table, &f_rev, degree);

        let f_low: Vec<Barrett<u64>> = to_ntt(&field, &table, &f_mod[..degree]);
        let f_rev_inv: Vec<Barrett<u64>> = to_ntt(&field, &table, &f_rev_inv);

        Ok(Self {
            field,
            degree,
            table,
            f_low,
            f_rev_inv,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns a mod f as `degree` coefficients in [0, q).
    /// Coefficients of `a` must lie in [0, q).
    pub fn rem(&self, a: &[u64]) -> Vec<u64> {
        let n: usize = self.degree;
        let mut a: Vec<u64> = a.to_vec();

        while a.len() > n << 1 {
            let start: usize = a.len() - (n << 1);
            let r: Vec<u64> = self.rem_window(&a[start..]);
            a.truncate(start + n);
            a[start..].copy_from_slice(&r);
        }

        if a.len() > n {
            return self.rem_window(&a);
        }
        a.resize(n, 0);
        a
    }

    /// Reduces n < w.len() <= 2n coefficients.
    fn rem_window(&self, w: &[u64]) -> Vec<u64> {
        let n: usize = self.degree;
        debug_assert!(w.len() > n && w.len() <= n << 1, "w.len()={} n={}", w.len(), n);

        let k: usize = w.len() - n;

        // rev(quotient) = rev(w) * rev(f)^-1 mod X^k
        let w_rev: Vec<u64> = w.iter().rev().take(k).copied().collect();
        let mut quotient: Vec<u64> = self.mul_ntt(&w_rev, &self.f_rev_inv, k);
        quotient.reverse();

        // w - quotient * f = w - quotient * (f mod X^n) mod X^n
        let qf: Vec<u64> = self.mul_ntt(&quotient, &self.f_low, n);
        izip!(w[..n].iter(), qf.iter())
            .map(|(w, qf)| self.field.sub(*w, *qf))
            .collect()
    }

    fn mul_ntt(&self, a: &[u64], b: &[Barrett<u64>], len: usize) -> Vec<u64> {
        let barrett = &self.field.prime().barrett;
        let mut c: Vec<u64> = a.to_vec();
        c.resize(self.table.n(), 0);
        self.table.forward_inplace(&mut c);
        izip!(c.iter_mut(), b.iter()).for_each(|(c, b)| barrett.mul_external_assign::<ONCE>(b, c));
        self.table.backward_inplace(&mut c);
        c.truncate(len);
        c
    }
}

fn to_ntt(field: &Field, table: &Table, a: &[u64]) -> Vec<Barrett<u64>> {
    let mut c: Vec<u64> = a.to_vec();
    c.resize(table.n(), 0);
    table.forward_inplace(&mut c);
    c.iter().map(|x| field.prime().barrett.prepare(*x)).collect()
}

/// Returns a * b mod X^len. Requires a.len() + b.len() - 1 <= table.n().
fn mul_trunc(field: &Field, table: &Table, a: &[u64], b: &[u64], len: usize) -> Vec<u64> {
    debug_assert!(a.len() + b.len() <= table.n() + 1);
    let mut fa: Vec<u64> = a.to_vec();
    let mut fb: Vec<u64> = b.to_vec();
    fa.resize(table.n(), 0);
    fb.resize(table.n(), 0);
    table.forward_inplace(&mut fa);
    table.forward_inplace(&mut fb);
    izip!(fa.iter_mut(), fb.iter()).for_each(|(a, b)| *a = field.prime().mul(*a, *b));
    table.backward_inplace(&mut fa);
    fa.truncate(len);
    fa
}

/// Newton iteration g <- g * (2 - h * g), doubling the precision each step.
/// Requires h[0] = 1.
fn inverse_series(field: &Field, table: &Table, h: &[u64], n: usize) -> Vec<u64> {
    debug_assert!(h[0] == 1);
    let mut g: Vec<u64> = vec![1];
    let mut k: usize = 1;
    while k < n {
        let t: usize = (k << 1).min(n);
        let mut e: Vec<u64> = mul_trunc(field, table, &h[..t], &g, t);
        e.iter_mut().for_each(|x| *x = field.neg(*x));
        e[0] = field.add(e[0], 2);
        g = mul_trunc(field, table, &g, &e, t);
        k = t;
    }
    g
}
