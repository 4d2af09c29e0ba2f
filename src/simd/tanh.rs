//! The branchless tanh pipeline, shared by every backend and both precisions.
//!
//! One vector of inputs flows through four stages:
//!
//! 1. [`classify`]: magnitude proxy → table row, saturation mask, not-NaN mask.
//! 2. [`RowGather`]: per-lane loads of the selected row's offset and coefficients.
//! 3. [`horner`]: the row polynomial in `y = |x| - offset`, highest degree first,
//!    one fused multiply-add per step.
//! 4. [`reconcile`]: forces `1.0` on saturated lanes, restores the input sign and
//!    substitutes a quiet NaN for NaN lanes.
//!
//! Every stage computes all lanes unconditionally; special cases only ever
//! influence the result through mask selects.

use super::{float::TanhFloat, traits::SimdLanes};

/// Per-lane classification of an input vector.
pub(crate) struct Classified<T: TanhFloat, V: SimdLanes<T>> {
    pub index: V::Index,
    pub saturated: V::Mask,
    pub not_nan: V::Mask,
}

#[inline(always)]
pub(crate) fn classify<T: TanhFloat, V: SimdLanes<T>>(x: V) -> Classified<T, V> {
    Classified {
        index: x.row_index(),
        saturated: x.saturated(),
        not_nan: x.not_nan(),
    }
}

/// Table rows selected by a classified vector.
pub(crate) struct RowGather<T: TanhFloat, V: SimdLanes<T>> {
    index: V::Index,
}

impl<T: TanhFloat, V: SimdLanes<T>> RowGather<T, V> {
    #[inline(always)]
    pub fn new(index: V::Index) -> Self {
        Self { index }
    }

    /// Range-reduction offset of every lane's row.
    #[inline(always)]
    pub fn offset(&self) -> V {
        V::gather(self.index, 0)
    }

    /// Coefficient of `degree` for every lane's row.
    #[inline(always)]
    pub fn coefficient(&self, degree: usize) -> V {
        V::gather(self.index, T::COEFFICIENTS - degree)
    }
}

#[inline(always)]
pub(crate) fn horner<T: TanhFloat, V: SimdLanes<T>>(rows: &RowGather<T, V>, y: V) -> V {
    let top = T::COEFFICIENTS - 1;
    let mut r = rows.coefficient(top);
    for degree in (0..top).rev() {
        r = r.mul_add(y, rows.coefficient(degree));
    }
    r
}

#[inline(always)]
pub(crate) fn reconcile<T: TanhFloat, V: SimdLanes<T>>(
    r: V,
    x: V,
    class: &Classified<T, V>,
) -> V {
    // 1.0 is chosen before the sign goes back on, so -Inf yields -1.0.
    let r = V::select(class.saturated, V::splat(T::one()), r);
    let r = r.or(x.sign_bits());
    V::select(class.not_nan, r, V::splat(T::nan()))
}

/// Tanh of every lane of `x`.
#[inline(always)]
pub(crate) fn tanh_lanes<T: TanhFloat, V: SimdLanes<T>>(x: V) -> V {
    let class = classify::<T, V>(x);
    let rows = RowGather::<T, V>::new(class.index);
    let y = x.abs().sub(rows.offset());
    let r = horner(&rows, y);
    reconcile(r, x, &class)
}
