use std::sync::Barrier;
use std::thread;

use math::poly::Poly;
use math::ring::{Cyclotomic, RingDescriptor};
use math::{reduce_mod_phi_m_x, Field, ModulusCache, RingSampler};
use sampling::source::Source;
use sampling::{sample_small, sample_uniform, CoeffDistribution};

#[test]
fn ring_sampling() {
    sub_test("test_uniform_small_example", test_uniform_small_example);
    sub_test("test_ternary_split_across_seeds", test_ternary_split_across_seeds);
    sub_test("test_secret_key_shapes::<m=4096>", || test_secret_key_shapes(4096));
    sub_test("test_secret_key_shapes::<m=105>", || test_secret_key_shapes(105));
    sub_test("test_secret_key_shapes::<m=1155>", || test_secret_key_shapes(1155));
    sub_test("test_threads_share_global_cache", test_threads_share_global_cache);
    sub_test("test_error_dd_is_small", test_error_dd_is_small);
}

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn test_uniform_small_example() {
    let mut source: Source = Source::new([0u8; 32]);
    let a: Vec<i64> = sample_uniform(8, &3i64, &mut source).unwrap();
    assert_eq!(a.len(), 8);
    assert!(a.iter().all(|x| (-3..=3).contains(x)));
}

fn test_ternary_split_across_seeds() {
    let (mut zero, mut plus, mut minus) = (0usize, 0usize, 0usize);
    for seed in 0..64u8 {
        let a: Vec<i64> = sample_small(1000, &mut Source::new([seed; 32])).unwrap();
        zero += a.iter().filter(|x| **x == 0).count();
        plus += a.iter().filter(|x| **x == 1).count();
        minus += a.iter().filter(|x| **x == -1).count();
    }
    let total: f64 = (64 * 1000) as f64;
    assert!((zero as f64 / total - 0.50).abs() < 0.05 * 0.50);
    assert!((plus as f64 / total - 0.25).abs() < 0.05 * 0.25);
    assert!((minus as f64 / total - 0.25).abs() < 0.05 * 0.25);
}

fn test_secret_key_shapes(m: usize) {
    let ring: Cyclotomic = Cyclotomic::new(m).unwrap();
    let sampler: RingSampler<Cyclotomic> = RingSampler::new(&ring);
    let mut source: Source = Source::new([m as u8; 32]);

    let s: Poly<i64> = sampler.sample_hwt(64, &mut source).unwrap();
    assert_eq!(s.n(), ring.phi_m());
    if ring.is_power_of_two() {
        assert_eq!(s.0.iter().filter(|x| **x != 0).count(), 64);
        assert!(s.0.iter().all(|x| (-1..=1).contains(x)));
    }

    let e: Poly<i64> = sampler.sample_gaussian(3.2, &mut source).unwrap();
    assert_eq!(e.n(), ring.phi_m());

    let u: Poly<i64> = sampler.sample_uniform(1 << 20, &mut source).unwrap();
    assert_eq!(u.n(), ring.phi_m());
}

fn test_threads_share_global_cache() {
    let ring: Cyclotomic = Cyclotomic::new(63).unwrap();
    let threads: usize = 6;
    let barrier: Barrier = Barrier::new(threads);

    let samples: Vec<Poly<i64>> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    RingSampler::new(&ring)
                        .sample_small(&mut Source::new([63u8; 32]))
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    samples.iter().for_each(|a| assert_eq!(a, &samples[0]));
    assert!(ModulusCache::global().get(63, &Field::best_fft()).is_some());

    // same result through a private cache
    let cache: ModulusCache = ModulusCache::new();
    let a: Poly<i64> = RingSampler::new(&ring)
        .with_cache(&cache)
        .sample(&CoeffDistribution::Ternary, &mut Source::new([63u8; 32]))
        .unwrap();
    assert_eq!(a, samples[0]);
}

fn test_error_dd_is_small() {
    let ring: Cyclotomic = Cyclotomic::new(127).unwrap();
    let sampler: RingSampler<Cyclotomic> = RingSampler::new(&ring);
    let mut source: Source = Source::new([127u8; 32]);
    let stdev: f64 = 3.2;
    // |e_i| <= |a_i| + |a_126| <= 2 * 8 * stdev * sqrt(m), plus rounding
    let bound: i64 = (16.0 * stdev * (127f64).sqrt()).ceil() as i64 + 1;
    for _ in 0..16 {
        let e: Poly<i64> = sampler.sample_error_dd(stdev, &mut source).unwrap();
        assert_eq!(e.n(), 126);
        assert!(e.0.iter().all(|x| x.abs() <= bound));
    }

    let cache: ModulusCache = ModulusCache::new();
    let reduced: Vec<i64> =
        reduce_mod_phi_m_x(&[0, 0, 5], &ring, &Field::best_fft(), &cache).unwrap();
    assert_eq!(reduced.len(), 126);
}
