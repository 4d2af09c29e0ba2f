//! Numerical properties of the tanh kernels in both precisions.
//!
//! Accuracy is measured against the standard library: `f64::tanh` for double
//! precision and `f64::tanh` rounded to `f32` for single precision.

use rand::{rngs::StdRng, Rng, SeedableRng};
use simdtanh::{tanh_f32, tanh_f64, tanh_into_with, Backend, SimdTanh};

fn ordered_f64(x: f64) -> i64 {
    let bits = x.to_bits() as i64;
    if bits < 0 {
        -(bits & i64::MAX)
    } else {
        bits
    }
}

fn ordered_f32(x: f32) -> i32 {
    let bits = x.to_bits() as i32;
    if bits < 0 {
        -(bits & i32::MAX)
    } else {
        bits
    }
}

fn ulps_f64(a: f64, b: f64) -> u64 {
    ordered_f64(a).abs_diff(ordered_f64(b))
}

fn ulps_f32(a: f32, b: f32) -> u32 {
    ordered_f32(a).abs_diff(ordered_f32(b))
}

fn grid(step: f64, end: f64) -> Vec<f64> {
    (0..=(end / step) as usize).map(|k| k as f64 * step).collect()
}

#[test]
fn test_special_values_f64() {
    let input = [0.0f64, -0.0, f64::INFINITY, f64::NEG_INFINITY];
    let output = input.as_slice().simd_tanh();

    assert_eq!(output[0].to_bits(), 0.0f64.to_bits());
    assert_eq!(output[1].to_bits(), (-0.0f64).to_bits());
    assert_eq!(output[2], 1.0);
    assert_eq!(output[3], -1.0);
}

#[test]
fn test_special_values_f32() {
    let input = [0.0f32, -0.0, f32::INFINITY, f32::NEG_INFINITY];
    let output = input.as_slice().simd_tanh();

    assert_eq!(output[0].to_bits(), 0.0f32.to_bits());
    assert_eq!(output[1].to_bits(), (-0.0f32).to_bits());
    assert_eq!(output[2], 1.0);
    assert_eq!(output[3], -1.0);
}

#[test]
fn test_every_nan_becomes_quiet() {
    let nans_f64 = [
        f64::NAN,
        -f64::NAN,
        f64::from_bits(0x7ff0_0000_0000_0001),
        f64::from_bits(0x7ff4_0000_0000_0000),
        f64::from_bits(0xfff0_dead_beef_0001),
        f64::from_bits(0x7fff_ffff_ffff_ffff),
    ];
    for y in nans_f64.as_slice().simd_tanh() {
        assert!(y.is_nan());
        assert_ne!(y.to_bits() & (1 << 51), 0, "NaN {y:?} is not quiet");
    }

    let nans_f32 = [
        f32::NAN,
        f32::from_bits(0x7f80_0001),
        f32::from_bits(0xff80_1234),
        f32::from_bits(0x7fff_ffff),
    ];
    for y in nans_f32.as_slice().simd_tanh() {
        assert!(y.is_nan());
        assert_ne!(y.to_bits() & (1 << 22), 0, "NaN {y:?} is not quiet");
    }
}

#[test]
fn test_documented_scenarios() {
    let src = [0.0f64, 1.0, -1.0, 100.0, f64::NAN];
    let mut dst = [0.0f64; 5];
    unsafe { tanh_f64(src.as_ptr(), 1, dst.as_mut_ptr(), 1, src.len()) };

    assert_eq!(dst[0], 0.0);
    assert!(ulps_f64(dst[1], 0.7615941559557649) <= 1);
    assert!(ulps_f64(dst[2], -0.7615941559557649) <= 1);
    assert_eq!(dst[3], 1.0);
    assert!(dst[4].is_nan());

    for (x, expected) in [(f64::INFINITY, 1.0), (f64::NEG_INFINITY, -1.0)] {
        let mut y = [0.0f64];
        unsafe { tanh_f64(&x, 1, y.as_mut_ptr(), 1, 1) };
        assert_eq!(y[0], expected);
    }
    for (x, expected) in [(f32::INFINITY, 1.0f32), (f32::NEG_INFINITY, -1.0)] {
        let mut y = [0.0f32];
        unsafe { tanh_f32(&x, 1, y.as_mut_ptr(), 1, 1) };
        assert_eq!(y[0], expected);
    }
}

#[test]
fn test_oddness_is_bit_exact() {
    let mut rng = StdRng::seed_from_u64(42);
    let positive: Vec<f64> = (0..10_000)
        .map(|_| rng.random_range(0.0..40.0))
        .chain([f64::MIN_POSITIVE, 5e-324, f64::MAX, 24.0, 3.0, 8.0])
        .collect();
    let negative: Vec<f64> = positive.iter().map(|x| -x).collect();

    let pos = positive.as_slice().simd_tanh();
    let neg = negative.as_slice().simd_tanh();
    for ((x, p), n) in positive.iter().zip(&pos).zip(&neg) {
        assert_eq!(p.to_bits() ^ n.to_bits(), 1 << 63, "oddness broken at {x:e}");
    }

    let positive: Vec<f32> = positive.iter().map(|x| *x as f32).collect();
    let negative: Vec<f32> = positive.iter().map(|x| -x).collect();
    let pos = positive.as_slice().simd_tanh();
    let neg = negative.as_slice().simd_tanh();
    for ((x, p), n) in positive.iter().zip(&pos).zip(&neg) {
        assert_eq!(p.to_bits() ^ n.to_bits(), 1 << 31, "oddness broken at {x:e}");
    }
}

#[test]
fn test_boundedness() {
    let mut rng = StdRng::seed_from_u64(7);
    let xs: Vec<f64> = (0..20_000).map(|_| rng.random_range(-1e3..1e3)).collect();
    for (x, y) in xs.iter().zip(xs.as_slice().simd_tanh()) {
        assert!((-1.0..=1.0).contains(&y), "tanh({x}) = {y}");
        if x.abs() < 18.0 {
            assert!(y.abs() < 1.0, "tanh({x}) saturated early");
        }
    }

    let xs: Vec<f32> = xs.iter().map(|x| *x as f32 / 50.0).collect();
    for (x, y) in xs.iter().zip(xs.as_slice().simd_tanh()) {
        assert!((-1.0..=1.0).contains(&y), "tanh({x}) = {y}");
        if x.abs() < 8.0 {
            assert!(y.abs() < 1.0, "tanh({x}) saturated early");
        }
    }
}

fn assert_non_decreasing_f64(first: u64, count: u64) {
    let xs: Vec<f64> = (first..first + count).map(f64::from_bits).collect();
    let ys = xs.as_slice().simd_tanh();
    for (i, w) in ys.windows(2).enumerate() {
        assert!(w[0] <= w[1], "f64 decreases from x = {:e} to {:e}", xs[i], xs[i + 1]);
    }
}

fn assert_non_decreasing_f32(first: u32, count: u32) {
    let xs: Vec<f32> = (first..first + count).map(f32::from_bits).collect();
    let ys = xs.as_slice().simd_tanh();
    for (i, w) in ys.windows(2).enumerate() {
        assert!(w[0] <= w[1], "f32 decreases from x = {:e} to {:e}", xs[i], xs[i + 1]);
    }
}

#[test]
fn test_monotonic_across_row_edges() {
    // 0.1875, 0.25, 0.375, ..., 16, 24
    for k in 1..=15u64 {
        let edge = 0x3FC0_0000_0000_0000 + (k << 51);
        assert_non_decreasing_f64(edge - 512, 1024);
    }
    // 0.0546875, 0.0625, ..., 8, 10
    for k in 1..=31u32 {
        let edge = 0x3D40_0000 + (k << 21);
        assert_non_decreasing_f32(edge - 512, 1024);
    }
}

#[test]
fn test_monotonic_dense_f32_scan() {
    // Runs of consecutive floats spread over every bit pattern in [0, 10].
    let end = 10.0f32.to_bits();
    let runs = 2048;
    let step = end / runs;
    for k in 0..runs {
        assert_non_decreasing_f32(k * step, 2048);
    }
    assert_non_decreasing_f32(end - 2048, 4096);

    // Around 3 and 4.9952106, both inside a row.
    assert_non_decreasing_f32(3.0f32.to_bits() - 8192, 16384);
    assert_non_decreasing_f32(0x409f_d8c4 - 8192, 16384);
}

#[test]
fn test_monotonic_f64_runs() {
    for x in [2.9999999995, 3.0, 5.9999999, 6.0, 7.999999, 8.0, 0.05, 0.1, 0.17] {
        assert_non_decreasing_f64(f64::to_bits(x) - 4096, 8192);
    }
    for k in 1..=14u64 {
        let lo = 0x3FC0_0000_0000_0000 + (k << 51);
        for quarter in 1..4 {
            assert_non_decreasing_f64(lo + quarter * (1 << 49), 4096);
        }
    }
}

#[test]
fn test_accuracy_f64() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut xs = grid(1.0 / 256.0, 24.0);
    xs.extend((0..4_000).map(|_| rng.random_range(0.0..25.0)));
    xs.extend((0..2_000).map(|_| 10f64.powf(rng.random_range(-30.0..0.0))));

    let ys = xs.as_slice().simd_tanh();
    for (x, y) in xs.iter().zip(&ys) {
        let error = ulps_f64(*y, x.tanh());
        assert!(error <= 3, "x = {x:e}: got {y:e}, std {:e}", x.tanh());
    }
}

#[test]
fn test_accuracy_f32() {
    let mut rng = StdRng::seed_from_u64(4321);
    let mut xs: Vec<f32> = grid(1.0 / 256.0, 12.0).iter().map(|x| *x as f32).collect();
    xs.extend((0..4_000).map(|_| rng.random_range(0.0f32..12.0)));
    xs.extend((0..2_000).map(|_| 10f32.powf(rng.random_range(-30.0f32..0.0))));

    let ys = xs.as_slice().simd_tanh();
    for (x, y) in xs.iter().zip(&ys) {
        let reference = (*x as f64).tanh() as f32;
        let error = ulps_f32(*y, reference);
        assert!(error <= 2, "x = {x:e}: got {y:e}, reference {reference:e}");
    }
}

#[test]
fn test_subnormals_pass_through() {
    let xs = [5e-324f64, 1e-310, -2.5e-320, f64::MIN_POSITIVE];
    for (x, y) in xs.iter().zip(xs.as_slice().simd_tanh()) {
        assert_eq!(*x, y);
    }
    let xs = [1e-45f32, -1e-40, f32::MIN_POSITIVE];
    for (x, y) in xs.iter().zip(xs.as_slice().simd_tanh()) {
        assert_eq!(*x, y);
    }
}

#[test]
fn test_backends_agree_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(99);
    let xs: Vec<f64> = (0..3_001)
        .map(|_| rng.random_range(-30.0..30.0))
        .chain([0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN])
        .collect();

    let mut reference = vec![0.0f64; xs.len()];
    tanh_into_with(Backend::Scalar, &xs, &mut reference).unwrap();

    for backend in [Backend::Portable, Backend::Avx2, Backend::detect()] {
        let mut out = vec![0.0f64; xs.len()];
        tanh_into_with(backend, &xs, &mut out).unwrap();
        for (i, (a, b)) in out.iter().zip(&reference).enumerate() {
            assert_eq!(a.to_bits(), b.to_bits(), "{backend:?} differs at x = {}", xs[i]);
        }
    }

    let xs: Vec<f32> = xs.iter().map(|x| *x as f32).collect();
    let mut reference = vec![0.0f32; xs.len()];
    tanh_into_with(Backend::Scalar, &xs, &mut reference).unwrap();
    for backend in [Backend::Portable, Backend::Avx2, Backend::detect()] {
        let mut out = vec![0.0f32; xs.len()];
        tanh_into_with(backend, &xs, &mut out).unwrap();
        for (i, (a, b)) in out.iter().zip(&reference).enumerate() {
            assert_eq!(a.to_bits(), b.to_bits(), "{backend:?} differs at x = {}", xs[i]);
        }
    }
}

#[test]
fn test_scalar_tanh_is_std() {
    let xs = [0.5f64, -2.0, 7.0];
    let ys = xs.as_slice().scalar_tanh();
    assert_eq!(ys, vec![0.5f64.tanh(), (-2.0f64).tanh(), 7.0f64.tanh()]);
}
