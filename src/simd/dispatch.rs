//! Per-call routing between the vector kernels and the single-lane path.
//!
//! [`tanh_raw`] receives NumPy-style descriptors: a base pointer and a byte
//! step per operand, plus an element count. The vector driver needs element
//! strides, aligned elements and operands that are either disjoint or exactly
//! the same walk. When any of that fails the call falls back to one element at
//! a time through the same pipeline, reading and writing in increasing index
//! order with unaligned accesses.
//!
//! Which vector backend runs is a separate decision, made once per process by
//! [`Backend::detect`] and overridable with [`tanh_raw_with`].

use std::{any::type_name, mem, sync::OnceLock};

use log::{debug, trace};

use super::{driver::drive, float::TanhFloat, portable::Lanes, tanh::tanh_lanes};
use crate::fpstatus::FpStatusGuard;

#[cfg(avx2)]
use super::avx2;

/// Largest element stride (in either direction) the vector path accepts.
///
/// Hardware gathers take 32-bit lane offsets; this keeps `stride * lane` in
/// range for every lane of the widest register.
pub const MAX_VECTOR_STRIDE: usize = (i32::MAX / 16) as usize;

/// Instruction set a tanh call runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// One lane at a time.
    Scalar,
    /// Fixed-width arrays, auto-vectorized by the compiler where possible.
    Portable,
    /// 256-bit AVX2 registers with FMA and hardware gathers.
    Avx2,
}

impl Backend {
    /// Best backend for the running CPU. Detected once per process.
    pub fn detect() -> Self {
        static DETECTED: OnceLock<Backend> = OnceLock::new();

        *DETECTED.get_or_init(|| {
            let backend = if avx2_supported() {
                Backend::Avx2
            } else {
                Backend::Portable
            };
            debug!("simdtanh: selected {backend:?} backend");
            backend
        })
    }

    /// Whether this backend was compiled in and the CPU can run it.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Scalar | Backend::Portable => true,
            Backend::Avx2 => avx2_supported(),
        }
    }

    /// `self` when available, otherwise the detected backend.
    pub fn resolve(self) -> Self {
        if self.is_available() {
            self
        } else {
            Self::detect()
        }
    }

    /// Elements processed per vector iteration.
    pub fn lane_count<T: TanhKernels>(self) -> usize {
        match self {
            Backend::Scalar => 1,
            Backend::Portable => T::PORTABLE_LANES,
            Backend::Avx2 => 32 / mem::size_of::<T>(),
        }
    }
}

#[cfg(avx2)]
fn avx2_supported() -> bool {
    avx2::is_supported()
}

#[cfg(not(avx2))]
fn avx2_supported() -> bool {
    false
}

/// Vector kernel over element strides: `(src, src_stride, dst, dst_stride, len)`.
pub type Kernel<T> = unsafe fn(*const T, isize, *mut T, isize, usize);

/// Element types with compiled tanh kernels.
pub trait TanhKernels: TanhFloat {
    /// Width of the portable lane array.
    const PORTABLE_LANES: usize;

    /// Kernel for `backend`. `backend` must be available.
    fn kernel(backend: Backend) -> Kernel<Self>;
}

impl TanhKernels for f64 {
    const PORTABLE_LANES: usize = 4;

    fn kernel(backend: Backend) -> Kernel<f64> {
        match backend {
            Backend::Scalar => drive::<f64, Lanes<f64, 1>>,
            Backend::Portable => drive::<f64, Lanes<f64, 4>>,
            #[cfg(avx2)]
            Backend::Avx2 => avx2::tanh_f64,
            #[cfg(not(avx2))]
            Backend::Avx2 => drive::<f64, Lanes<f64, 4>>,
        }
    }
}

impl TanhKernels for f32 {
    const PORTABLE_LANES: usize = 8;

    fn kernel(backend: Backend) -> Kernel<f32> {
        match backend {
            Backend::Scalar => drive::<f32, Lanes<f32, 1>>,
            Backend::Portable => drive::<f32, Lanes<f32, 8>>,
            #[cfg(avx2)]
            Backend::Avx2 => avx2::tanh_f32,
            #[cfg(not(avx2))]
            Backend::Avx2 => drive::<f32, Lanes<f32, 8>>,
        }
    }
}

/// Why a call cannot take the vector path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fallback {
    /// A byte step is not a multiple of the element size.
    UnevenStep,
    /// An element stride exceeds [`MAX_VECTOR_STRIDE`].
    StrideTooLarge,
    /// A base pointer is not aligned to the element type.
    Misaligned,
    /// The operands share memory without being the same walk.
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Vector { src_stride: isize, dst_stride: isize },
    SingleLane(Fallback),
}

/// `[start, end)` byte range touched by `len` elements of `size` bytes.
fn byte_span(ptr: usize, step: isize, len: usize, size: usize) -> (usize, usize) {
    let extent = step.unsigned_abs().saturating_mul(len - 1);
    if step >= 0 {
        (ptr, ptr.saturating_add(extent).saturating_add(size))
    } else {
        (ptr.saturating_sub(extent), ptr.saturating_add(size))
    }
}

/// Routing decision for a non-empty call.
pub(crate) fn plan<T>(
    src: *const T,
    src_step: isize,
    dst: *const T,
    dst_step: isize,
    len: usize,
) -> Route {
    debug_assert!(len > 0);

    let size = mem::size_of::<T>();
    let (src_step, dst_step) = if len == 1 {
        (size as isize, size as isize)
    } else {
        (src_step, dst_step)
    };

    if src_step % size as isize != 0 || dst_step % size as isize != 0 {
        return Route::SingleLane(Fallback::UnevenStep);
    }
    let src_stride = src_step / size as isize;
    let dst_stride = dst_step / size as isize;

    if src_stride.unsigned_abs() > MAX_VECTOR_STRIDE || dst_stride.unsigned_abs() > MAX_VECTOR_STRIDE {
        return Route::SingleLane(Fallback::StrideTooLarge);
    }

    let align = mem::align_of::<T>();
    if src as usize % align != 0 || dst as usize % align != 0 {
        return Route::SingleLane(Fallback::Misaligned);
    }

    let in_place = src == dst && src_stride == dst_stride;
    let (src_start, src_end) = byte_span(src as usize, src_step, len, size);
    let (dst_start, dst_end) = byte_span(dst as usize, dst_step, len, size);
    let disjoint = src_end <= dst_start || dst_end <= src_start;
    if !in_place && !disjoint {
        return Route::SingleLane(Fallback::Overlap);
    }

    Route::Vector {
        src_stride,
        dst_stride,
    }
}

/// One element at a time, in increasing index order, unaligned accesses.
unsafe fn single_lane<T: TanhFloat>(
    src: *const u8,
    src_step: isize,
    dst: *mut u8,
    dst_step: isize,
    len: usize,
) {
    for i in 0..len as isize {
        let x = src.offset(i * src_step).cast::<T>().read_unaligned();
        let y = tanh_lanes::<T, Lanes<T, 1>>(Lanes([x])).0[0];
        dst.offset(i * dst_step).cast::<T>().write_unaligned(y);
    }
}

/// Tanh over byte-strided operands with the detected backend.
///
/// # Safety
///
/// For every `i < len`, the `T` at byte offset `i * src_step` from `src` must
/// be readable and the `T` at byte offset `i * dst_step` from `dst` writable.
/// Neither needs to be aligned, and the operands may overlap arbitrarily.
pub unsafe fn tanh_raw<T: TanhKernels>(
    src: *const T,
    src_step: isize,
    dst: *mut T,
    dst_step: isize,
    len: usize,
) {
    tanh_raw_with(Backend::detect(), src, src_step, dst, dst_step, len)
}

/// [`tanh_raw`] on an explicit backend. An unavailable backend is replaced
/// by the detected one.
///
/// # Safety
///
/// Same as [`tanh_raw`].
pub unsafe fn tanh_raw_with<T: TanhKernels>(
    backend: Backend,
    src: *const T,
    src_step: isize,
    dst: *mut T,
    dst_step: isize,
    len: usize,
) {
    if len == 0 {
        return;
    }

    // Both routes evaluate the polynomial on every lane, sentinel rows
    // included, and can raise flags the mathematical function would not.
    let _status = FpStatusGuard::new();

    match plan(src, src_step, dst, dst_step, len) {
        Route::Vector {
            src_stride,
            dst_stride,
        } => {
            let backend = backend.resolve();
            trace!(
                "tanh<{}>: {len} elements on {backend:?} (strides {src_stride}, {dst_stride})",
                type_name::<T>()
            );
            (T::kernel(backend))(src, src_stride, dst, dst_stride, len);
        }
        Route::SingleLane(reason) => {
            trace!(
                "tanh<{}>: {len} elements one lane at a time ({reason:?})",
                type_name::<T>()
            );
            single_lane::<T>(src.cast(), src_step, dst.cast(), dst_step, len);
        }
    }
}

/// Tanh of `len` f64 values, `src_stride` and `dst_stride` elements apart.
///
/// # Safety
///
/// `src.offset(i * src_stride)` must be readable and
/// `dst.offset(i * dst_stride)` writable for every `i < len`.
pub unsafe fn tanh_f64(
    src: *const f64,
    src_stride: isize,
    dst: *mut f64,
    dst_stride: isize,
    len: usize,
) {
    let size = mem::size_of::<f64>() as isize;
    tanh_raw(src, src_stride * size, dst, dst_stride * size, len)
}

/// Tanh of `len` f32 values, `src_stride` and `dst_stride` elements apart.
///
/// # Safety
///
/// `src.offset(i * src_stride)` must be readable and
/// `dst.offset(i * dst_stride)` writable for every `i < len`.
pub unsafe fn tanh_f32(
    src: *const f32,
    src_stride: isize,
    dst: *mut f32,
    dst_stride: isize,
    len: usize,
) {
    let size = mem::size_of::<f32>() as isize;
    tanh_raw(src, src_stride * size, dst, dst_stride * size, len)
}
