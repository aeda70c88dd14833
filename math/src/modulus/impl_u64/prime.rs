use crate::error::{Error, Result};
use crate::modulus::barrett::BarrettPrecomp;
use crate::modulus::prime::Prime;
use primality_test::is_prime;

impl Prime {
    /// Returns a new instance of Prime.
    /// Fails if q is not a prime > 2 or does not fit in 61 bits.
    pub fn new(q: u64) -> Result<Self> {
        if q <= 2 || !is_prime(q) {
            return Err(Error::InvalidField(format!("q={} is not an odd prime", q)));
        }
        if q.next_power_of_two().ilog2() > 61 {
            return Err(Error::InvalidField(format!("q={} exceeds 61 bits", q)));
        }
        Ok(Self::new_unchecked(q))
    }

    /// Returns a new instance of Prime.
    /// Does not check if q is a prime > 2.
    /// Panics if q does not fit in 61 bits.
    pub fn new_unchecked(q: u64) -> Self {
        assert!(
            q.next_power_of_two().ilog2() <= 61,
            "invalid prime: q={} exceeds 61 bits",
            q
        );
        Self {
            q,
            two_adicity: (q - 1).trailing_zeros(),
            barrett: BarrettPrecomp::new(q),
        }
    }

    pub fn q(&self) -> u64 {
        self.q
    }

    pub fn two_adicity(&self) -> u32 {
        self.two_adicity
    }

    #[inline(always)]
    pub fn mul(&self, x: u64, y: u64) -> u64 {
        ((x as u128 * y as u128) % self.q as u128) as u64
    }

    /// Returns x^exponent mod q.
    pub fn pow(&self, x: u64, exponent: u64) -> u64 {
        let mut y: u64 = 1;
        let mut x: u64 = x % self.q;
        let mut i: u64 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                y = self.mul(y, x);
            }
            x = self.mul(x, x);
            i >>= 1;
        }
        y
    }

    /// Returns x^-1 mod q.
    /// User must ensure that x is not divisible by q.
    #[inline(always)]
    pub fn inv(&self, x: u64) -> u64 {
        self.pow(x, self.q - 2)
    }

    /// Returns a primitive nth root of unity mod q for a power-of-two nth_root >= 2.
    pub fn primitive_nth_root(&self, nth_root: u64) -> u64 {
        assert!(
            nth_root >= 2 && nth_root.is_power_of_two(),
            "invalid argument: nth_root={} is not a power of two >= 2",
            nth_root
        );
        assert!(
            (self.q - 1) % nth_root == 0,
            "invalid prime: q-1={} is not divisible by nth_root={}",
            self.q - 1,
            nth_root
        );

        let exponent: u64 = (self.q - 1) / nth_root;
        let mut candidate: u64 = 2;
        loop {
            // psi has order dividing nth_root, and exactly nth_root iff psi^(nth_root/2) = -1
            let psi: u64 = self.pow(candidate, exponent);
            if self.pow(psi, nth_root >> 1) == self.q - 1 {
                return psi;
            }
            candidate += 1;
        }
    }
}
