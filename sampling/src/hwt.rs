use tracing::warn;

use crate::error::{check_len, Result};
use crate::source::Source;

/// Returns the number of nonzero coefficients actually drawn for length `n`.
///
/// A weight of `n` or more is relaxed to `n - 1`.
pub fn clamp_hwt(n: usize, hwt: usize) -> usize {
    if hwt >= n {
        warn!(n, hwt, "hamming weight >= n, clamping to n-1");
        return n - 1;
    }
    hwt
}

/// Fills `res` with zeros except for exactly `clamp_hwt(res.len(), hwt)`
/// positions, each set to -1 or +1 with probability 1/2.
///
/// Positions are drawn uniformly and rejected when already set, so the
/// support is a uniform subset of the requested size. The loop shares its
/// counter and buffer across iterations and runs sequentially.
pub fn fill_hwt(res: &mut [i64], hwt: usize, source: &mut Source) -> Result<()> {
    let n: usize = res.len();
    check_len(n, "hamming weight")?;
    let hwt: usize = clamp_hwt(n, hwt);

    res.fill(0);

    let mut i: usize = 0;
    while i < hwt {
        let u: usize = source.next_u64_below(n as u64) as usize;
        if res[u] == 0 {
            // b in {0, 2}
            let b: i64 = (source.next_bits(2) & 2) as i64;
            res[u] = b - 1;
            i += 1;
        }
    }
    Ok(())
}

pub fn sample_hwt(n: usize, hwt: usize, source: &mut Source) -> Result<Vec<i64>> {
    check_len(n, "hamming weight")?;
    let mut res: Vec<i64> = vec![0; n];
    fill_hwt(&mut res, hwt, source)?;
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplingError;
    use proptest::prelude::*;

    #[test]
    fn exact_weight_and_values() {
        let mut source: Source = Source::new([11u8; 32]);
        let a: Vec<i64> = sample_hwt(64, 20, &mut source).unwrap();
        assert_eq!(a.len(), 64);
        assert_eq!(a.iter().filter(|x| **x != 0).count(), 20);
        assert!(a.iter().all(|x| (-1..=1).contains(x)));
    }

    #[test]
    fn weight_at_or_above_n_is_clamped() {
        let n: usize = 16;
        for hwt in [n, n + 1, 10 * n] {
            let a: Vec<i64> = sample_hwt(n, hwt, &mut Source::new([4u8; 32])).unwrap();
            let b: Vec<i64> = sample_hwt(n, n - 1, &mut Source::new([4u8; 32])).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.iter().filter(|x| **x != 0).count(), n - 1);
        }
    }

    #[test]
    fn length_one_is_all_zero() {
        let a: Vec<i64> = sample_hwt(1, 1, &mut Source::new([0u8; 32])).unwrap();
        assert_eq!(a, vec![0]);
    }

    #[test]
    fn zero_length_is_rejected_without_writing() {
        let mut source: Source = Source::new([0u8; 32]);
        let mut empty: [i64; 0] = [];
        assert!(matches!(
            fill_hwt(&mut empty, 3, &mut source),
            Err(SamplingError::InvalidArgument(_))
        ));
        assert!(sample_hwt(0, 3, &mut source).is_err());
    }

    #[test]
    fn positions_uniform_and_signs_balanced() {
        let n: usize = 16;
        let hwt: usize = 4;
        let trials: usize = 5000;
        let mut source: Source = Source::new([21u8; 32]);
        let mut counts: Vec<f64> = vec![0.0; n];
        let mut plus: usize = 0;
        let mut a: Vec<i64> = vec![0; n];
        for _ in 0..trials {
            fill_hwt(&mut a, hwt, &mut source).unwrap();
            a.iter().enumerate().for_each(|(i, x)| {
                if *x != 0 {
                    counts[i] += 1.0;
                }
                if *x == 1 {
                    plus += 1;
                }
            });
        }
        let expected: f64 = (trials * hwt) as f64 / n as f64;
        let chi2: f64 = counts
            .iter()
            .map(|c| (c - expected).powi(2) / expected)
            .sum();
        // 15 degrees of freedom, p = 0.001 is ~37.7
        assert!(chi2 < 40.0, "chi2={}", chi2);

        let ratio: f64 = plus as f64 / (trials * hwt) as f64;
        assert!((ratio - 0.5).abs() < 0.02, "ratio of +1 = {}", ratio);
    }

    proptest! {
        #[test]
        fn weight_invariant(n in 1usize..200, hwt in 0usize..250, seed in any::<[u8; 32]>()) {
            let a: Vec<i64> = sample_hwt(n, hwt, &mut Source::new(seed)).unwrap();
            prop_assert_eq!(a.len(), n);
            prop_assert_eq!(a.iter().filter(|x| **x != 0).count(), hwt.min(n - 1));
            prop_assert!(a.iter().all(|x| *x == 0 || *x == 1 || *x == -1));
        }
    }
}
