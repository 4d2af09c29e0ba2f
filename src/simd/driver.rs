//! Strided vector driver.
//!
//! Walks `len` elements in steps of `V::LANES`, loading with the source
//! stride, running the pipeline and storing with the destination stride. The
//! last chunk loads and stores only the remaining count.

use super::{float::TanhFloat, tanh::tanh_lanes, traits::SimdLanes};

/// # Safety
///
/// For every `i < len`, `src.offset(i * src_stride)` must be valid for reads
/// and `dst.offset(i * dst_stride)` valid for writes. Source and destination
/// must be disjoint or identical (same pointer, same stride).
#[inline(always)]
pub(crate) unsafe fn drive<T: TanhFloat, V: SimdLanes<T>>(
    src: *const T,
    src_stride: isize,
    dst: *mut T,
    dst_stride: isize,
    len: usize,
) {
    let src_step = src_stride * V::LANES as isize;
    let dst_step = dst_stride * V::LANES as isize;

    let mut src = src;
    let mut dst = dst;
    let mut remaining = len;

    while remaining > 0 {
        let count = remaining.min(V::LANES);
        let x = V::load_partial(src, src_stride, count);
        tanh_lanes::<T, V>(x).store_partial(dst, dst_stride, count);

        // The final step may point past the buffer; it is never dereferenced.
        src = src.wrapping_offset(src_step);
        dst = dst.wrapping_offset(dst_step);
        remaining -= count;
    }
}
