//! Vectorized tanh: precision descriptors, coefficient tables, the lane
//! pipeline and its backends, and the dispatch layer on top.

#[cfg(avx2)]
pub(crate) mod avx2;

pub(crate) mod dispatch;
pub(crate) mod driver;
pub mod float;
pub(crate) mod portable;
pub mod slice;
pub(crate) mod tables;
pub(crate) mod tanh;
pub mod traits;

pub use dispatch::{
    tanh_f32, tanh_f64, tanh_raw, tanh_raw_with, Backend, Kernel, TanhKernels, MAX_VECTOR_STRIDE,
};
pub use float::TanhFloat;
pub use traits::SimdTanh;
