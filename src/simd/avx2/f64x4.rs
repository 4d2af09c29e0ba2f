//! AVX2 4-lane f64 vector for the tanh pipeline.
//!
//! `F64x4` wraps a `__m256d`. Unit-stride tails use masked loads and stores;
//! strided loads use the masked hardware gather with 64-bit element offsets,
//! strided stores spill to the stack and scatter lane by lane.
//!
//! The table gather expects [`row_index`](SimdLanes::row_index) to hand back
//! row numbers already multiplied by the row width, so one
//! `_mm256_i64gather_pd` per column reads every lane's coefficient.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{float::TanhFloat, traits::SimdLanes};

/// Number of f64 elements in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 4;

const INDEX_SHIFT: i32 = <f64 as TanhFloat>::INDEX_SHIFT as i32;
const ROW_WIDTH: i64 = <f64 as TanhFloat>::ROW_WIDTH as i64;

#[derive(Copy, Clone, Debug)]
pub(crate) struct F64x4 {
    pub elements: __m256d,
}

/// All-ones in the first `count` 64-bit lanes.
#[inline(always)]
unsafe fn tail_mask(count: usize) -> __m256i {
    match count {
        1 => _mm256_setr_epi64x(-1, 0, 0, 0),
        2 => _mm256_setr_epi64x(-1, -1, 0, 0),
        3 => _mm256_setr_epi64x(-1, -1, -1, 0),
        _ => _mm256_set1_epi64x(-1),
    }
}

impl F64x4 {
    #[inline(always)]
    fn new(elements: __m256d) -> Self {
        Self { elements }
    }

    /// Exponent and leading mantissa bits of every lane, sign cleared.
    #[inline(always)]
    fn proxy(self) -> __m256i {
        unsafe {
            _mm256_and_si256(
                _mm256_castpd_si256(self.elements),
                _mm256_set1_epi64x(f64::PROXY_MASK as i64),
            )
        }
    }
}

impl SimdLanes<f64> for F64x4 {
    const LANES: usize = LANE_COUNT;

    type Mask = __m256d;
    type Index = __m256i;

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f64, stride: isize, count: usize) -> Self {
        debug_assert!(
            count > 0 && count <= LANE_COUNT,
            "count must be in 1..={LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = if stride == 1 {
            if count == LANE_COUNT {
                _mm256_loadu_pd(ptr)
            } else {
                _mm256_maskload_pd(ptr, tail_mask(count))
            }
        } else {
            let stride = stride as i64;
            let offsets = _mm256_setr_epi64x(0, stride, 2 * stride, 3 * stride);
            _mm256_mask_i64gather_pd::<8>(
                _mm256_setzero_pd(),
                ptr,
                offsets,
                _mm256_castsi256_pd(tail_mask(count)),
            )
        };

        Self::new(elements)
    }

    #[inline(always)]
    unsafe fn store_partial(self, ptr: *mut f64, stride: isize, count: usize) {
        debug_assert!(
            count > 0 && count <= LANE_COUNT,
            "count must be in 1..={LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        if stride == 1 {
            if count == LANE_COUNT {
                _mm256_storeu_pd(ptr, self.elements);
            } else {
                _mm256_maskstore_pd(ptr, tail_mask(count), self.elements);
            }
            return;
        }

        let mut lanes = [0.0f64; LANE_COUNT];
        _mm256_storeu_pd(lanes.as_mut_ptr(), self.elements);
        for (lane, value) in lanes.iter().enumerate().take(count) {
            *ptr.offset(lane as isize * stride) = *value;
        }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self::new(unsafe { _mm256_set1_pd(value) })
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::new(unsafe { _mm256_andnot_pd(_mm256_set1_pd(-0.0), self.elements) })
    }

    #[inline(always)]
    fn sign_bits(self) -> Self {
        Self::new(unsafe { _mm256_and_pd(_mm256_set1_pd(-0.0), self.elements) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self::new(unsafe { _mm256_or_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::new(unsafe { _mm256_sub_pd(self.elements, other.elements) })
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self::new(unsafe { _mm256_fmadd_pd(self.elements, a.elements, b.elements) })
    }

    #[inline(always)]
    fn select(mask: __m256d, on_true: Self, on_false: Self) -> Self {
        Self::new(unsafe { _mm256_blendv_pd(on_false.elements, on_true.elements, mask) })
    }

    #[inline(always)]
    fn not_nan(self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_ORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn saturated(self) -> __m256d {
        unsafe {
            let threshold = _mm256_set1_epi64x(f64::SATURATION_PROXY as i64);
            _mm256_castsi256_pd(_mm256_cmpgt_epi64(self.proxy(), threshold))
        }
    }

    #[inline(always)]
    fn row_index(self) -> __m256i {
        unsafe {
            let above_base = _mm256_sub_epi64(self.proxy(), _mm256_set1_epi64x(f64::BASE_PROXY as i64));
            // Low 32 bits of every lane are zero here, so a 32-bit clamp on
            // the high halves clamps the whole 64-bit lane.
            let clamped = _mm256_min_epi32(
                _mm256_max_epi32(above_base, _mm256_setzero_si256()),
                _mm256_set1_epi64x(f64::MAX_INDEX_PROXY as i64),
            );
            let row = _mm256_srli_epi64::<INDEX_SHIFT>(clamped);
            _mm256_mul_epu32(row, _mm256_set1_epi64x(ROW_WIDTH))
        }
    }

    #[inline(always)]
    fn gather(index: __m256i, column: usize) -> Self {
        unsafe {
            let base = f64::table_ptr().add(column).cast::<f64>();
            Self::new(_mm256_i64gather_pd::<8>(base, index))
        }
    }
}
