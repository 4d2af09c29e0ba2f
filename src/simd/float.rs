//! Precision descriptor for the tanh pipeline.
//!
//! The classifier, gather, Horner and reconcile stages are written once,
//! generically. Everything that differs between `f32` and `f64` (bit layout,
//! the magnitude-proxy constants that carve `|x|` into table rows, and the
//! table itself) lives behind [`TanhFloat`].
//!
//! # Magnitude proxy
//!
//! `|x|` is classified from its raw bits: `bits & PROXY_MASK` keeps the biased
//! exponent plus the leading mantissa bits, which orders the same way as `|x|`
//! (IEEE-754 magnitudes sort like their bit patterns). The row index is
//!
//! ```text
//! clamp(proxy - BASE_PROXY, 0, MAX_INDEX_PROXY) >> INDEX_SHIFT
//! ```
//!
//! and a lane is "saturated" (huge, infinite or NaN) when
//! `proxy > SATURATION_PROXY`.

use std::fmt::Debug;

use num::{Float, PrimInt};

use super::tables::{TANH_TABLE_F32, TANH_TABLE_F64};

/// Floating-point types the tanh kernels are instantiated for.
pub trait TanhFloat: Float + Debug + Send + Sync + 'static {
    /// Unsigned integer of the same width.
    type Bits: PrimInt + Debug + Send + Sync + 'static;

    /// Sign bit.
    const SIGN_MASK: Self::Bits;
    /// Exponent plus the mantissa bits that select a row.
    const PROXY_MASK: Self::Bits;
    /// Largest proxy still evaluated through the table; above it the result
    /// is forced to `±1`.
    const SATURATION_PROXY: Self::Bits;
    /// Proxy of the first subinterval boundary; anything below maps to row 0.
    const BASE_PROXY: Self::Bits;
    /// Clamp applied after subtracting [`Self::BASE_PROXY`]; selects the last row.
    const MAX_INDEX_PROXY: Self::Bits;
    /// Mantissa bits covered by one table row.
    const INDEX_SHIFT: u32;

    /// Number of table rows.
    const ROWS: usize;
    /// Polynomial coefficients per row (degree + 1).
    const COEFFICIENTS: usize;
    /// Row stride in table entries: offset + coefficients.
    const ROW_WIDTH: usize = Self::COEFFICIENTS + 1;

    fn to_raw(self) -> Self::Bits;

    fn from_raw(bits: Self::Bits) -> Self;

    /// Raw table entry; column 0 is the offset, column `k >= 1` the
    /// coefficient of degree `COEFFICIENTS - k`.
    fn table_entry(row: usize, column: usize) -> Self::Bits;

    /// Start of the row-major table, for hardware gathers.
    fn table_ptr() -> *const Self::Bits;
}

impl TanhFloat for f64 {
    type Bits = u64;

    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const PROXY_MASK: u64 = 0x7ff8_0000_0000_0000;
    const SATURATION_PROXY: u64 = 0x7fe0_0000_0000_0000;
    const BASE_PROXY: u64 = 0x3fc0_0000_0000_0000;
    const MAX_INDEX_PROXY: u64 = 0x0078_0000_0000_0000;
    const INDEX_SHIFT: u32 = 51;

    const ROWS: usize = 16;
    const COEFFICIENTS: usize = 17;

    #[inline(always)]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn table_entry(row: usize, column: usize) -> u64 {
        TANH_TABLE_F64[row][column]
    }

    #[inline(always)]
    fn table_ptr() -> *const u64 {
        TANH_TABLE_F64.as_ptr().cast()
    }
}

impl TanhFloat for f32 {
    type Bits = u32;

    const SIGN_MASK: u32 = 0x8000_0000;
    const PROXY_MASK: u32 = 0x7fe0_0000;
    const SATURATION_PROXY: u32 = 0x7f00_0000;
    const BASE_PROXY: u32 = 0x3d40_0000;
    const MAX_INDEX_PROXY: u32 = 0x03e0_0000;
    const INDEX_SHIFT: u32 = 21;

    const ROWS: usize = 32;
    const COEFFICIENTS: usize = 7;

    #[inline(always)]
    fn to_raw(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn table_entry(row: usize, column: usize) -> u32 {
        TANH_TABLE_F32[row][column]
    }

    #[inline(always)]
    fn table_ptr() -> *const u32 {
        TANH_TABLE_F32.as_ptr().cast()
    }
}
