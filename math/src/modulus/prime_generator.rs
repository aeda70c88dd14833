use crate::modulus::prime::Prime;
use primality_test::is_prime;

/// Walks down from 2^bit_size through the integers congruent to 1 mod
/// nth_root and yields the primes among them, largest first.
pub struct NTTFriendlyPrimesGenerator {
    size: f64,
    prev_prime: u64,
    nth_root: u64,
}

impl NTTFriendlyPrimesGenerator {
    pub fn new(bit_size: u64, nth_root: u64) -> Self {
        assert!(
            nth_root.is_power_of_two(),
            "invalid argument: nth_root={} is not a power of two",
            nth_root
        );
        assert!(
            bit_size <= 61 && nth_root < 1 << bit_size,
            "invalid argument: bit_size={} nth_root={}",
            bit_size,
            nth_root
        );
        Self {
            size: bit_size as f64,
            prev_prime: (1 << bit_size) + 1 - nth_root,
            nth_root,
        }
    }

    pub fn next_downstream_prime(&mut self) -> Prime {
        loop {
            if self.size - (self.prev_prime as f64).log2() >= 0.5 || self.prev_prime < self.nth_root {
                panic!(
                    "prime list for downstream primes is exhausted (overlap with previous bit-size or prime < nth_root)"
                )
            }
            let candidate: u64 = self.prev_prime;
            self.prev_prime -= self.nth_root;
            if is_prime(candidate) {
                return Prime::new_unchecked(candidate);
            }
        }
    }
}
