use ndarray::{s, Array, Array2, Array3, Axis, ShapeBuilder};
use simdtanh::{tanh_array, tanh_array_in_place, tanh_array_into, SimdTanh, TanhError};

#[test]
fn test_array_matches_slice_api() {
    let a = Array::linspace(-6.0f64, 6.0, 1001);
    let t = tanh_array(&a);
    let expected = a.as_slice().unwrap().simd_tanh();
    assert_eq!(t.as_slice().unwrap(), expected.as_slice());
}

#[test]
fn test_fortran_order_input() {
    let a = Array2::from_shape_fn((5, 8).f(), |(i, j)| i as f32 * 0.7 - j as f32 * 0.3);
    let t = tanh_array(&a);
    for ((i, j), y) in t.indexed_iter() {
        let x = a[[i, j]];
        assert!((y - x.tanh()).abs() <= 4.0 * f32::EPSILON, "({i}, {j})");
    }
}

#[test]
fn test_every_lane_of_a_permuted_view() {
    let a = Array3::from_shape_fn((4, 5, 6), |(i, j, k)| {
        (i as f64 - j as f64) * 0.5 + k as f64 * 0.01
    });
    let permuted = a.view().permuted_axes([2, 0, 1]);
    let mut out = Array3::<f64>::zeros(permuted.raw_dim());
    tanh_array_into(&permuted, &mut out).unwrap();

    for (lane_in, lane_out) in permuted.lanes(Axis(2)).into_iter().zip(out.lanes(Axis(2))) {
        let expected = lane_in.to_vec().as_slice().simd_tanh();
        assert_eq!(lane_out.to_vec(), expected);
    }
}

#[test]
fn test_in_place_reversed_view() {
    let mut a = Array2::from_shape_fn((3, 7), |(i, j)| i as f64 + j as f64 * 0.125);
    let original = a.clone();
    tanh_array_in_place(&mut a.slice_mut(s![..;-1, ..;-2]));

    for ((i, j), y) in a.indexed_iter() {
        let x = original[[i, j]];
        if j % 2 == 0 {
            assert_eq!(y.to_bits(), [x].as_slice().simd_tanh()[0].to_bits());
        } else {
            assert_eq!(*y, x);
        }
    }
}

#[test]
fn test_shape_mismatch() {
    let a = Array2::<f64>::zeros((4, 4));
    let mut out = Array2::<f64>::zeros((4, 5));
    let err = tanh_array_into(&a, &mut out).unwrap_err();
    assert_eq!(
        err,
        TanhError::ShapeMismatch {
            input: vec![4, 4],
            output: vec![4, 5]
        }
    );
}
