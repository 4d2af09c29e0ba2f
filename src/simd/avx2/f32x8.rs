//! AVX2 8-lane f32 vector for the tanh pipeline.
//!
//! Same layout as [`F64x4`](super::f64x4::F64x4) with 32-bit lanes: masked
//! loads and stores for unit-stride tails, `_mm256_mask_i32gather_ps` for
//! strided loads and row-width-scaled indices for the table gather.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{float::TanhFloat, traits::SimdLanes};

/// Number of f32 elements in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 8;

const INDEX_SHIFT: i32 = <f32 as TanhFloat>::INDEX_SHIFT as i32;
const ROW_WIDTH: i32 = <f32 as TanhFloat>::ROW_WIDTH as i32;

#[derive(Copy, Clone, Debug)]
pub(crate) struct F32x8 {
    pub elements: __m256,
}

#[inline(always)]
unsafe fn tail_mask(count: usize) -> __m256i {
    match count {
        1 => _mm256_setr_epi32(-1, 0, 0, 0, 0, 0, 0, 0),
        2 => _mm256_setr_epi32(-1, -1, 0, 0, 0, 0, 0, 0),
        3 => _mm256_setr_epi32(-1, -1, -1, 0, 0, 0, 0, 0),
        4 => _mm256_setr_epi32(-1, -1, -1, -1, 0, 0, 0, 0),
        5 => _mm256_setr_epi32(-1, -1, -1, -1, -1, 0, 0, 0),
        6 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0),
        7 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, -1, 0),
        _ => _mm256_set1_epi32(-1),
    }
}

impl F32x8 {
    #[inline(always)]
    fn new(elements: __m256) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn proxy(self) -> __m256i {
        unsafe {
            _mm256_and_si256(
                _mm256_castps_si256(self.elements),
                _mm256_set1_epi32(f32::PROXY_MASK as i32),
            )
        }
    }
}

impl SimdLanes<f32> for F32x8 {
    const LANES: usize = LANE_COUNT;

    type Mask = __m256;
    type Index = __m256i;

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, stride: isize, count: usize) -> Self {
        debug_assert!(
            count > 0 && count <= LANE_COUNT,
            "count must be in 1..={LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = if stride == 1 {
            if count == LANE_COUNT {
                _mm256_loadu_ps(ptr)
            } else {
                _mm256_maskload_ps(ptr, tail_mask(count))
            }
        } else {
            let offsets = _mm256_mullo_epi32(
                _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7),
                _mm256_set1_epi32(stride as i32),
            );
            _mm256_mask_i32gather_ps::<4>(
                _mm256_setzero_ps(),
                ptr,
                offsets,
                _mm256_castsi256_ps(tail_mask(count)),
            )
        };

        Self::new(elements)
    }

    #[inline(always)]
    unsafe fn store_partial(self, ptr: *mut f32, stride: isize, count: usize) {
        debug_assert!(
            count > 0 && count <= LANE_COUNT,
            "count must be in 1..={LANE_COUNT}"
        );
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        if stride == 1 {
            if count == LANE_COUNT {
                _mm256_storeu_ps(ptr, self.elements);
            } else {
                _mm256_maskstore_ps(ptr, tail_mask(count), self.elements);
            }
            return;
        }

        let mut lanes = [0.0f32; LANE_COUNT];
        _mm256_storeu_ps(lanes.as_mut_ptr(), self.elements);
        for (lane, value) in lanes.iter().enumerate().take(count) {
            *ptr.offset(lane as isize * stride) = *value;
        }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::new(unsafe { _mm256_set1_ps(value) })
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::new(unsafe { _mm256_andnot_ps(_mm256_set1_ps(-0.0), self.elements) })
    }

    #[inline(always)]
    fn sign_bits(self) -> Self {
        Self::new(unsafe { _mm256_and_ps(_mm256_set1_ps(-0.0), self.elements) })
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        Self::new(unsafe { _mm256_or_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::new(unsafe { _mm256_sub_ps(self.elements, other.elements) })
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self::new(unsafe { _mm256_fmadd_ps(self.elements, a.elements, b.elements) })
    }

    #[inline(always)]
    fn select(mask: __m256, on_true: Self, on_false: Self) -> Self {
        Self::new(unsafe { _mm256_blendv_ps(on_false.elements, on_true.elements, mask) })
    }

    #[inline(always)]
    fn not_nan(self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_ORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn saturated(self) -> __m256 {
        unsafe {
            let threshold = _mm256_set1_epi32(f32::SATURATION_PROXY as i32);
            _mm256_castsi256_ps(_mm256_cmpgt_epi32(self.proxy(), threshold))
        }
    }

    #[inline(always)]
    fn row_index(self) -> __m256i {
        unsafe {
            let above_base = _mm256_sub_epi32(self.proxy(), _mm256_set1_epi32(f32::BASE_PROXY as i32));
            let clamped = _mm256_min_epi32(
                _mm256_max_epi32(above_base, _mm256_setzero_si256()),
                _mm256_set1_epi32(f32::MAX_INDEX_PROXY as i32),
            );
            let row = _mm256_srli_epi32::<INDEX_SHIFT>(clamped);
            _mm256_mullo_epi32(row, _mm256_set1_epi32(ROW_WIDTH))
        }
    }

    #[inline(always)]
    fn gather(index: __m256i, column: usize) -> Self {
        unsafe {
            let base = f32::table_ptr().add(column).cast::<f32>();
            Self::new(_mm256_i32gather_ps::<4>(base, index))
        }
    }
}
