use crate::modulus::barrett::Barrett;
use crate::modulus::prime::Prime;
use crate::modulus::ReduceOnce;
use crate::modulus::WordOps;
use crate::modulus::{NONE, ONCE};
use itertools::izip;

/// Negacyclic NTT of size n over Z_q: evaluates a polynomial modulo X^n + 1
/// at the odd powers of a primitive 2n-th root of unity psi.
///
/// Twiddles are stored in bit-reversed order with their Shoup quotients.
/// Butterflies keep values lazily in [0, 4q); outputs are fully reduced.
pub struct Table {
    prime: Prime,
    n: usize,
    psi_forward_rev: Vec<Barrett<u64>>,
    psi_backward_rev: Vec<Barrett<u64>>,
    n_inv: Barrett<u64>,
    q: u64,
    two_q: u64,
}

impl Table {
    pub fn new(prime: Prime, n: usize) -> Table {
        assert!(
            n.is_power_of_two(),
            "invalid argument: n={} is not a power of two",
            n
        );
        let nth_root: u64 = (n as u64) << 1;
        assert!(
            nth_root.trailing_zeros() <= prime.two_adicity(),
            "invalid argument: q={} has no primitive {}-th root of unity",
            prime.q(),
            nth_root
        );

        let psi: u64 = prime.primitive_nth_root(nth_root);
        let psi_inv: u64 = prime.inv(psi);

        let mut psi_forward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];
        let mut psi_backward_rev: Vec<Barrett<u64>> = vec![Barrett(0, 0); n];

        psi_forward_rev[0] = prime.barrett.one();
        psi_backward_rev[0] = prime.barrett.one();

        let log_n: u32 = n.trailing_zeros();

        let mut powers_forward: u64 = 1u64;
        let mut powers_backward: u64 = 1u64;

        for i in 1..n {
            let i_rev: usize = i.reverse_bits_msb(log_n);

            powers_forward = prime.mul(powers_forward, psi);
            powers_backward = prime.mul(powers_backward, psi_inv);

            psi_forward_rev[i_rev] = prime.barrett.prepare(powers_forward);
            psi_backward_rev[i_rev] = prime.barrett.prepare(powers_backward);
        }

        let q: u64 = prime.q();

        Self {
            prime,
            n,
            psi_forward_rev,
            psi_backward_rev,
            n_inv: prime.barrett.prepare(prime.inv(n as u64)),
            q,
            two_q: q << 1,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Cooley-Tukey, natural order in, bit-reversed order out.
    pub fn forward_inplace(&self, a: &mut [u64]) {
        assert!(
            a.len() == self.n,
            "invalid a.len()={} != n={}",
            a.len(),
            self.n
        );
        let log_n: u32 = self.n.trailing_zeros();

        for layer in 0..log_n {
            let (m, size) = (1 << layer, 1 << (log_n - layer - 1));
            izip!(a.chunks_exact_mut(size << 1), &self.psi_forward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dit_inplace(a, b, psi));
            });
        }

        a.iter_mut().for_each(|x| {
            x.reduce_once_assign(self.two_q);
            x.reduce_once_assign(self.q);
        });
    }

    #[inline(always)]
    fn dit_inplace(&self, a: &mut u64, b: &mut u64, t: &Barrett<u64>) {
        debug_assert!(*a < self.two_q << 1, "a:{} q:{}", a, self.q);
        debug_assert!(*b < self.two_q << 1, "b:{} q:{}", b, self.q);
        a.reduce_once_assign(self.two_q);
        let bt: u64 = self.prime.barrett.mul_external::<NONE>(t, b);
        *b = *a + self.two_q - bt;
        *a += bt;
    }

    /// Gentleman-Sande, bit-reversed order in, natural order out, scaled by n^-1.
    pub fn backward_inplace(&self, a: &mut [u64]) {
        assert!(
            a.len() == self.n,
            "invalid a.len()={} != n={}",
            a.len(),
            self.n
        );
        let log_n: u32 = self.n.trailing_zeros();

        for layer in (0..log_n).rev() {
            let (m, size) = (1 << layer, 1 << (log_n - layer - 1));
            izip!(a.chunks_exact_mut(size << 1), &self.psi_backward_rev[m..]).for_each(|(a, psi)| {
                let (a, b) = a.split_at_mut(size);
                izip!(a, b).for_each(|(a, b)| self.dif_inplace(a, b, psi));
            });
        }

        a.iter_mut()
            .for_each(|x| self.prime.barrett.mul_external_assign::<ONCE>(&self.n_inv, x));
    }

    #[inline(always)]
    fn dif_inplace(&self, a: &mut u64, b: &mut u64, t: &Barrett<u64>) {
        debug_assert!(*a < self.two_q, "a:{} q:{}", a, self.q);
        debug_assert!(*b < self.two_q, "b:{} q:{}", b, self.q);
        let d: u64 = self
            .prime
            .barrett
            .mul_external::<NONE>(t, &(*a + self.two_q - *b));
        *a += *b;
        a.reduce_once_assign(self.two_q);
        *b = d;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q: u64 = 0x1fffffffffe00001;

    fn negacyclic_schoolbook(prime: &Prime, a: &[u64], b: &[u64]) -> Vec<u64> {
        let n: usize = a.len();
        let q: u64 = prime.q();
        let mut c: Vec<u64> = vec![0; n];
        for i in 0..n {
            for j in 0..n {
                let t: u64 = prime.mul(a[i], b[j]);
                let k: usize = (i + j) % n;
                if i + j < n {
                    c[k] = (c[k] + t) % q;
                } else {
                    c[k] = (c[k] + q - t) % q;
                }
            }
        }
        c
    }

    #[test]
    fn forward_backward_identity() {
        let prime: Prime = Prime::new(Q).unwrap();
        for log_n in 0..8 {
            let n: usize = 1 << log_n;
            let table: Table = Table::new(prime, n);
            let mut a: Vec<u64> = (0..n as u64).map(|i| i.wrapping_mul(0x9e3779b97f4a7c15) % Q).collect();
            let b: Vec<u64> = a.clone();
            table.forward_inplace(&mut a);
            assert!(a.iter().all(|x| *x < Q));
            table.backward_inplace(&mut a);
            assert_eq!(a, b, "n={}", n);
        }
    }

    #[test]
    fn pointwise_product_is_negacyclic_convolution() {
        let prime: Prime = Prime::new(Q).unwrap();
        let n: usize = 32;
        let table: Table = Table::new(prime, n);
        let a: Vec<u64> = (0..n as u64).map(|i| (i * i + 3) % Q).collect();
        let b: Vec<u64> = (0..n as u64).map(|i| Q - 1 - i).collect();
        let want: Vec<u64> = negacyclic_schoolbook(&prime, &a, &b);

        let (mut fa, mut fb) = (a.clone(), b.clone());
        table.forward_inplace(&mut fa);
        table.forward_inplace(&mut fb);
        izip!(fa.iter_mut(), fb.iter()).for_each(|(x, y)| *x = prime.mul(*x, *y));
        table.backward_inplace(&mut fa);
        assert_eq!(fa, want);
    }
}
