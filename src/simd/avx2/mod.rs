//! AVX2 + FMA backend.
//!
//! Compiled only when the build script detected AVX2 and FMA on the build
//! host (`cfg(avx2)`). The kernels below are the only entry points: each is a
//! `#[target_feature]` function that instantiates the generic driver over the
//! register type, so the whole pipeline is inlined and compiled with the
//! feature enabled. Callers must still confirm support at runtime; see
//! [`Backend::detect`](crate::Backend::detect).
//!
//! # Types
//!
//! - [`f64x4::F64x4`]: 4 × f64 in a `__m256d`
//! - [`f32x8::F32x8`]: 8 × f32 in a `__m256`

pub(crate) mod f32x8;
pub(crate) mod f64x4;

use super::driver::drive;

/// True when the running CPU has every feature the kernels are compiled for.
#[inline]
pub(crate) fn is_supported() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

/// # Safety
///
/// Same contract as [`drive`]; the CPU must support AVX2 and FMA.
#[target_feature(enable = "avx,avx2,fma")]
pub(crate) unsafe fn tanh_f64(
    src: *const f64,
    src_stride: isize,
    dst: *mut f64,
    dst_stride: isize,
    len: usize,
) {
    drive::<f64, f64x4::F64x4>(src, src_stride, dst, dst_stride, len)
}

/// # Safety
///
/// Same contract as [`drive`]; the CPU must support AVX2 and FMA.
#[target_feature(enable = "avx,avx2,fma")]
pub(crate) unsafe fn tanh_f32(
    src: *const f32,
    src_stride: isize,
    dst: *mut f32,
    dst_stride: isize,
    len: usize,
) {
    drive::<f32, f32x8::F32x8>(src, src_stride, dst, dst_stride, len)
}
