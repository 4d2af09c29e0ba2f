//! Table-driven, vectorized hyperbolic tangent for `f32` and `f64` buffers.
//!
//! Every call classifies `|x|` into a subinterval from its exponent bits,
//! gathers that subinterval's range-reduction offset and polynomial
//! coefficients, evaluates the polynomial with fused multiply-adds and then
//! patches in the IEEE special cases (`±0`, `±Inf`, NaN) with lane masks.
//! The same pipeline runs on AVX2 registers, on portable lane arrays and one
//! element at a time.
//!
//! ```
//! use simdtanh::SimdTanh;
//!
//! let x = [0.0f64, 1.0, -1.0, 100.0, f64::NAN];
//! let y = x.as_slice().simd_tanh();
//! assert_eq!(y[0], 0.0);
//! assert!((y[1] - 0.7615941559557649).abs() < 1e-15);
//! assert_eq!(y[3], 1.0);
//! assert!(y[4].is_nan());
//! ```
//!
//! Strided and overlapping buffers go through [`tanh_raw`] (byte steps) or
//! [`tanh_f32`]/[`tanh_f64`] (element strides); `ndarray` views through
//! [`tanh_array`].

pub mod array;
pub mod error;
pub mod fpstatus;
pub mod simd;

pub use array::{tanh_array, tanh_array_in_place, tanh_array_into};
pub use error::{Result, TanhError};
pub use fpstatus::FpStatusGuard;
pub use simd::slice::{
    par_tanh_in_place, tanh_in_place, tanh_into, tanh_into_with, tanh_strided_into,
};
pub use simd::{
    tanh_f32, tanh_f64, tanh_raw, tanh_raw_with, Backend, SimdTanh, TanhFloat, TanhKernels,
    MAX_VECTOR_STRIDE,
};

/// Element count above which the `par_*` functions split work across rayon.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Elements per rayon task; a multiple of every lane count.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;
