use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;

const MAXF64: f64 = 9007199254740992.0;

/// Exclusive bound of the integer draw behind [Source::next_open_unit].
const OPEN_UNIT_BOUND: u64 = (1 << 53) - 1;
const OPEN_UNIT_MASK: u64 = (1 << 53) - 1;

/// Seeded pseudorandom stream feeding every sampler of the workspace.
///
/// The stream is a ChaCha8 keystream: uniform over its outputs, but its
/// suitability as a cryptographic source depends entirely on the seed.
pub struct Source {
    source: ChaCha8Rng,
}

/// Returns a fresh 32-byte seed drawn from the thread-local OS-seeded generator.
pub fn new_seed() -> [u8; 32] {
    let mut seed: [u8; 32] = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    seed
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    /// Returns an independent stream seeded from this one.
    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Rejection-samples `next_u64() & mask` until it falls below `max`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Returns an integer uniform in `[0, bound)`.
    #[inline(always)]
    pub fn next_u64_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "invalid bound: bound=0");
        if bound == 1 {
            return 0;
        }
        let mask: u64 = u64::MAX >> (bound - 1).leading_zeros();
        self.next_u64n(bound, mask)
    }

    /// Returns `k` uniform random bits in the low bits of a word.
    #[inline(always)]
    pub fn next_bits(&mut self, k: u32) -> u64 {
        debug_assert!(
            (1..=64).contains(&k),
            "invalid number of bits: k={} not in [1, 64]",
            k
        );
        self.next_u64() >> (u64::BITS - k)
    }

    /// Returns a value uniform on a 2^-53 grid of the open interval (0, 1).
    #[inline(always)]
    pub fn next_open_unit(&mut self) -> f64 {
        (1 + self.next_u64n(OPEN_UNIT_BOUND, OPEN_UNIT_MASK)) as f64 / MAXF64
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}
