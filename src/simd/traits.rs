use super::float::TanhFloat;

/// Lane-parallel primitives the tanh pipeline is written against.
///
/// One implementation exists per backend: plain arrays of any width
/// ([`Lanes`](super::portable::Lanes)) and AVX2 registers. Every operation
/// acts on all lanes at once; per-lane decisions are expressed as masks and
/// resolved with [`select`](SimdLanes::select).
pub(crate) trait SimdLanes<T: TanhFloat>: Copy {
    /// Number of lanes.
    const LANES: usize;

    /// Per-lane boolean.
    type Mask: Copy;

    /// Per-lane table row handle produced by [`row_index`](SimdLanes::row_index)
    /// and consumed by [`gather`](SimdLanes::gather). Its encoding is private
    /// to the backend.
    type Index: Copy;

    /// Loads `count` elements starting at `ptr`, `stride` elements apart.
    /// Lanes at and beyond `count` are zero.
    ///
    /// # Safety
    ///
    /// `ptr.offset(lane * stride)` must be valid for reads for every
    /// `lane < count`, and `0 < count <= Self::LANES`.
    unsafe fn load_partial(ptr: *const T, stride: isize, count: usize) -> Self;

    /// Stores the first `count` lanes to `ptr`, `stride` elements apart.
    /// Memory belonging to the remaining lanes is not touched.
    ///
    /// # Safety
    ///
    /// `ptr.offset(lane * stride)` must be valid for writes for every
    /// `lane < count`, and `0 < count <= Self::LANES`.
    unsafe fn store_partial(self, ptr: *mut T, stride: isize, count: usize);

    fn splat(value: T) -> Self;

    /// Clears the sign bit.
    fn abs(self) -> Self;

    /// Keeps only the sign bit.
    fn sign_bits(self) -> Self;

    /// Bitwise OR of the raw lanes.
    fn or(self, other: Self) -> Self;

    fn sub(self, other: Self) -> Self;

    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    /// `mask ? on_true : on_false`, per lane.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    /// True where the lane is not NaN.
    fn not_nan(self) -> Self::Mask;

    /// True where the magnitude proxy of the lane exceeds
    /// [`TanhFloat::SATURATION_PROXY`].
    fn saturated(self) -> Self::Mask;

    /// Table row of every lane, clamped into `[0, T::ROWS)`.
    fn row_index(self) -> Self::Index;

    /// Column `column` of the rows selected by `index`.
    fn gather(index: Self::Index, column: usize) -> Self;
}

/// Element-wise hyperbolic tangent over slices.
///
/// A dispatched SIMD version, a rayon version for large inputs and the plain
/// `std` version kept as a baseline.
pub trait SimdTanh {
    type Output;

    /// Tanh of every element through the detected backend.
    fn simd_tanh(self) -> Self::Output;

    /// Like [`simd_tanh`](SimdTanh::simd_tanh), split across the rayon pool
    /// once the input exceeds [`PARALLEL_SIMD_THRESHOLD`](crate::PARALLEL_SIMD_THRESHOLD).
    fn par_simd_tanh(self) -> Self::Output;

    /// Tanh of every element with the standard library.
    fn scalar_tanh(self) -> Self::Output;
}
