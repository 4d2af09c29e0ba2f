//! Array-backed lane vectors for targets without a hardware backend.
//!
//! `Lanes<T, N>` implements every lane primitive with plain scalar code over
//! `[T; N]`. Widths matching a hardware register (4 × f64, 8 × f32) let the
//! compiler auto-vectorize the arithmetic; the table gather stays a loop of
//! independent loads. `Lanes<T, 1>` is the degenerate single-lane vector used
//! when the dispatcher rules out the vector path.
//!
//! Loads and stores go through `read_unaligned`/`write_unaligned`, so these
//! vectors are also valid on element pointers that are not naturally aligned.

use num::{ToPrimitive, Zero};

use super::{float::TanhFloat, traits::SimdLanes};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Lanes<T, const N: usize>(pub [T; N]);

impl<T: TanhFloat, const N: usize> Lanes<T, N> {
    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    #[inline(always)]
    fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self(std::array::from_fn(|lane| f(self.0[lane], other.0[lane])))
    }

    #[inline(always)]
    fn proxy(value: T) -> T::Bits {
        value.to_raw() & T::PROXY_MASK
    }
}

impl<T: TanhFloat, const N: usize> SimdLanes<T> for Lanes<T, N> {
    const LANES: usize = N;

    type Mask = [bool; N];
    type Index = [usize; N];

    #[inline(always)]
    unsafe fn load_partial(ptr: *const T, stride: isize, count: usize) -> Self {
        debug_assert!(count > 0 && count <= N, "count must be in 1..={N}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut lanes = [T::zero(); N];
        for (lane, slot) in lanes.iter_mut().enumerate().take(count) {
            *slot = ptr.offset(lane as isize * stride).read_unaligned();
        }
        Self(lanes)
    }

    #[inline(always)]
    unsafe fn store_partial(self, ptr: *mut T, stride: isize, count: usize) {
        debug_assert!(count > 0 && count <= N, "count must be in 1..={N}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        for (lane, value) in self.0.iter().enumerate().take(count) {
            ptr.offset(lane as isize * stride).write_unaligned(*value);
        }
    }

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(|x| T::from_raw(x.to_raw() & !T::SIGN_MASK))
    }

    #[inline(always)]
    fn sign_bits(self) -> Self {
        self.map(|x| T::from_raw(x.to_raw() & T::SIGN_MASK))
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        self.zip(other, |a, b| T::from_raw(a.to_raw() | b.to_raw()))
    }

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self(std::array::from_fn(|lane| {
            self.0[lane].mul_add(a.0[lane], b.0[lane])
        }))
    }

    #[inline(always)]
    fn select(mask: [bool; N], on_true: Self, on_false: Self) -> Self {
        Self(std::array::from_fn(|lane| {
            if mask[lane] {
                on_true.0[lane]
            } else {
                on_false.0[lane]
            }
        }))
    }

    #[inline(always)]
    fn not_nan(self) -> [bool; N] {
        self.0.map(|x| !x.is_nan())
    }

    #[inline(always)]
    fn saturated(self) -> [bool; N] {
        self.0.map(|x| Self::proxy(x) > T::SATURATION_PROXY)
    }

    #[inline(always)]
    fn row_index(self) -> [usize; N] {
        self.0.map(|x| {
            let proxy = Self::proxy(x);
            let above_base = if proxy > T::BASE_PROXY {
                proxy - T::BASE_PROXY
            } else {
                <T::Bits as Zero>::zero()
            };
            let clamped = above_base.min(T::MAX_INDEX_PROXY);
            (clamped >> T::INDEX_SHIFT as usize)
                .to_usize()
                .unwrap_or(T::ROWS - 1)
        })
    }

    #[inline(always)]
    fn gather(index: [usize; N], column: usize) -> Self {
        Self(index.map(|row| T::from_raw(T::table_entry(row, column))))
    }
}
