use crate::error::{Error, Result};

/// Read-only parameters of the cyclotomic ring Z[X]/(Phi_m(X)).
pub trait RingDescriptor {
    /// Ring index.
    fn m(&self) -> usize;

    /// Rank of the ring, the degree of Phi_m.
    fn phi_m(&self) -> usize;

    /// Coefficients of Phi_m(X), lowest degree first, `phi_m() + 1` of them.
    fn phi_m_x(&self) -> &[i64];

    /// True iff m is a power of two >= 2, in which case Phi_m(X) = X^(m/2) + 1.
    fn is_power_of_two(&self) -> bool;
}

/// The m-th cyclotomic ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cyclotomic {
    m: usize,
    phi_m_x: Vec<i64>,
    is_power_of_two: bool,
}

impl Cyclotomic {
    /// Computes Phi_m(X) = prod_{d | m} (X^d - 1)^mu(m/d).
    pub fn new(m: usize) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidRing("m must be >= 1".to_string()));
        }

        let divisors: Vec<usize> = (1..=m).filter(|d| m % d == 0).collect();

        let mut phi: Vec<i128> = vec![1];
        divisors
            .iter()
            .filter(|d| mobius(m / **d) == 1)
            .for_each(|d| phi = mul_x_d_minus_one(&phi, *d));
        divisors
            .iter()
            .filter(|d| mobius(m / **d) == -1)
            .for_each(|d| phi = div_x_d_minus_one(&phi, *d));

        let phi_m_x: Vec<i64> = phi
            .iter()
            .map(|c| i64::try_from(*c))
            .collect::<std::result::Result<Vec<i64>, _>>()
            .map_err(|_| Error::InvalidRing(format!("Phi_{} has coefficients beyond i64", m)))?;

        Ok(Self {
            m,
            phi_m_x,
            is_power_of_two: m >= 2 && m.is_power_of_two(),
        })
    }

    /// Builds a descriptor from externally supplied values.
    pub fn from_parts(
        m: usize,
        phi_m: usize,
        phi_m_x: Vec<i64>,
        is_power_of_two: bool,
    ) -> Result<Self> {
        if phi_m == 0 || phi_m > m {
            return Err(Error::InvalidRing(format!(
                "invalid rank phi_m={} for m={}",
                phi_m, m
            )));
        }
        if phi_m_x.len() != phi_m + 1 || phi_m_x[phi_m] != 1 {
            return Err(Error::InvalidRing(format!(
                "Phi_m(X) must be monic of degree {}, got {:?}",
                phi_m, phi_m_x
            )));
        }
        if is_power_of_two
            && (!m.is_power_of_two()
                || phi_m << 1 != m
                || phi_m_x[0] != 1
                || phi_m_x[1..phi_m].iter().any(|c| *c != 0))
        {
            return Err(Error::InvalidRing(format!(
                "m={} with Phi_m(X)={:?} is not a power-of-two ring",
                m, phi_m_x
            )));
        }
        Ok(Self {
            m,
            phi_m_x,
            is_power_of_two,
        })
    }
}

impl RingDescriptor for Cyclotomic {
    fn m(&self) -> usize {
        self.m
    }

    fn phi_m(&self) -> usize {
        self.phi_m_x.len() - 1
    }

    fn phi_m_x(&self) -> &[i64] {
        &self.phi_m_x
    }

    fn is_power_of_two(&self) -> bool {
        self.is_power_of_two
    }
}

fn mobius(mut k: usize) -> i32 {
    let mut mu: i32 = 1;
    let mut p: usize = 2;
    while p * p <= k {
        if k % p == 0 {
            k /= p;
            if k % p == 0 {
                return 0;
            }
            mu = -mu;
        }
        p += 1;
    }
    if k > 1 {
        mu = -mu;
    }
    mu
}

fn mul_x_d_minus_one(a: &[i128], d: usize) -> Vec<i128> {
    let mut c: Vec<i128> = vec![0; a.len() + d];
    a.iter().enumerate().for_each(|(i, x)| {
        c[i + d] += x;
        c[i] -= x;
    });
    c
}

/// Exact division, a must be a multiple of X^d - 1.
fn div_x_d_minus_one(a: &[i128], d: usize) -> Vec<i128> {
    let mut r: Vec<i128> = a.to_vec();
    let mut q: Vec<i128> = vec![0; a.len() - d];
    for i in (d..a.len()).rev() {
        q[i - d] = r[i];
        r[i - d] += r[i];
        r[i] = 0;
    }
    debug_assert!(r.iter().all(|x| *x == 0), "X^{}-1 does not divide {:?}", d, a);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cyclotomics() {
        let cases: [(usize, Vec<i64>); 7] = [
            (1, vec![-1, 1]),
            (2, vec![1, 1]),
            (3, vec![1, 1, 1]),
            (8, vec![1, 0, 0, 0, 1]),
            (9, vec![1, 0, 0, 1, 0, 0, 1]),
            (12, vec![1, 0, -1, 0, 1]),
            (15, vec![1, -1, 0, 1, -1, 1, 0, -1, 1]),
        ];
        for (m, want) in cases {
            let ring: Cyclotomic = Cyclotomic::new(m).unwrap();
            assert_eq!(ring.phi_m_x(), &want[..], "m={}", m);
            assert_eq!(ring.phi_m(), want.len() - 1);
            assert_eq!(ring.m(), m);
        }
    }

    #[test]
    fn phi_105_has_a_minus_two() {
        let ring: Cyclotomic = Cyclotomic::new(105).unwrap();
        assert_eq!(ring.phi_m(), 48);
        assert_eq!(ring.phi_m_x()[7], -2);
        assert_eq!(ring.phi_m_x()[41], -2);
        assert_eq!(ring.phi_m_x().iter().filter(|c| **c == -2).count(), 2);
        assert!(!ring.is_power_of_two());
    }

    #[test]
    fn power_of_two_flag() {
        assert!(!Cyclotomic::new(1).unwrap().is_power_of_two());
        for log_m in 1..10 {
            let ring: Cyclotomic = Cyclotomic::new(1 << log_m).unwrap();
            assert!(ring.is_power_of_two());
            assert_eq!(ring.phi_m() << 1, ring.m());
        }
        assert!(!Cyclotomic::new(24).unwrap().is_power_of_two());
    }

    #[test]
    fn rank_is_euler_totient() {
        for (m, phi) in [(7usize, 6usize), (10, 4), (36, 12), (77, 60), (210, 48)] {
            assert_eq!(Cyclotomic::new(m).unwrap().phi_m(), phi, "m={}", m);
        }
    }

    #[test]
    fn from_parts_validates() {
        let ring: Cyclotomic = Cyclotomic::new(9).unwrap();
        let parts: Cyclotomic =
            Cyclotomic::from_parts(9, 6, ring.phi_m_x().to_vec(), false).unwrap();
        assert_eq!(parts, ring);
        assert!(Cyclotomic::from_parts(9, 10, vec![1; 11], false).is_err());
        assert!(Cyclotomic::from_parts(9, 6, vec![1; 6], false).is_err());
        assert!(Cyclotomic::from_parts(9, 6, vec![1, 0, 0, 1, 0, 0, 2], false).is_err());
        assert!(Cyclotomic::from_parts(9, 6, ring.phi_m_x().to_vec(), true).is_err());
        assert!(Cyclotomic::from_parts(8, 4, vec![1, 0, 0, 0, 1], true).is_ok());
        // X^4 + X + 1 has the right degree but is not X^4 + 1
        assert!(Cyclotomic::from_parts(8, 4, vec![1, 1, 0, 0, 1], true).is_err());
        assert!(Cyclotomic::from_parts(8, 4, vec![-1, 0, 0, 0, 1], true).is_err());
        assert!(Cyclotomic::from_parts(2, 1, vec![1, 1], true).is_ok());
        assert!(Cyclotomic::new(0).is_err());
    }
}
