use rand::{rngs::StdRng, Rng, SeedableRng};
use simdtanh::{par_tanh_in_place, SimdTanh, PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

#[test]
fn test_parallel_tanh_small_array() {
    let data = vec![0.0f32, 0.5, -0.5, 20.0];
    let result = data.as_slice().par_simd_tanh();
    let expected = data.as_slice().simd_tanh();

    assert_eq!(result, expected);
}

#[test]
fn test_parallel_tanh_large_array_f64() {
    let mut rng = StdRng::seed_from_u64(2024);
    // Not a multiple of the chunk size, so the last rayon task gets a tail.
    let len = PARALLEL_SIMD_THRESHOLD + 3 * PARALLEL_CHUNK_SIZE + 13;
    let data: Vec<f64> = (0..len).map(|_| rng.random_range(-20.0..20.0)).collect();

    let parallel = data.as_slice().par_simd_tanh();
    let sequential = data.as_slice().simd_tanh();

    assert_eq!(parallel.len(), len);
    for (i, (p, s)) in parallel.iter().zip(&sequential).enumerate() {
        assert_eq!(p.to_bits(), s.to_bits(), "par_simd_tanh differs at index {i}");
    }
}

#[test]
fn test_parallel_tanh_large_array_f32() {
    let len = PARALLEL_SIMD_THRESHOLD + 777;
    let data: Vec<f32> = (0..len).map(|i| (i % 4096) as f32 / 256.0 - 8.0).collect();

    let parallel = data.as_slice().par_simd_tanh();
    let sequential = data.as_slice().simd_tanh();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_parallel_in_place() {
    let len = PARALLEL_SIMD_THRESHOLD + PARALLEL_CHUNK_SIZE / 2;
    let data: Vec<f64> = (0..len).map(|i| (i as f64).sin() * 10.0).collect();
    let expected = data.as_slice().simd_tanh();

    let mut in_place = data.clone();
    par_tanh_in_place(&mut in_place);

    assert_eq!(in_place, expected);
}
