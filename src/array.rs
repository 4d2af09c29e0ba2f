//! `ndarray` integration.
//!
//! Arrays whose elements sit in one contiguous block (in either memory order)
//! are handled as a single flat call. Anything else is walked lane by lane
//! along the last axis, each lane passed to the dispatcher with its own
//! element stride, which may be negative for reversed views.

use std::mem;

use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, DataMut, Dimension, Zip};

use crate::{
    error::{Result, TanhError},
    simd::{
        dispatch::{tanh_raw, Backend, TanhKernels},
        slice::{apply, tanh_in_place},
    },
};

unsafe fn lane_into<T: TanhKernels>(src: ArrayView1<'_, T>, mut dst: ArrayViewMut1<'_, T>) {
    let size = mem::size_of::<T>() as isize;
    let src_step = src.stride_of(Axis(0)) * size;
    let dst_step = dst.stride_of(Axis(0)) * size;
    tanh_raw(src.as_ptr(), src_step, dst.as_mut_ptr(), dst_step, src.len());
}

/// Tanh of every element, as a new standard-layout array of the same shape.
pub fn tanh_array<T, S, D>(input: &ArrayBase<S, D>) -> Array<T, D>
where
    T: TanhKernels,
    S: Data<Elem = T>,
    D: Dimension,
{
    let mut output = Array::zeros(input.raw_dim());
    lanes_into(input, &mut output);
    output
}

/// Writes the tanh of every element of `input` into the matching element of
/// `output`.
///
/// # Errors
///
/// [`TanhError::ShapeMismatch`] when the shapes differ.
pub fn tanh_array_into<T, S, S2, D>(
    input: &ArrayBase<S, D>,
    output: &mut ArrayBase<S2, D>,
) -> Result<()>
where
    T: TanhKernels,
    S: Data<Elem = T>,
    S2: DataMut<Elem = T>,
    D: Dimension,
{
    if input.shape() != output.shape() {
        return Err(TanhError::ShapeMismatch {
            input: input.shape().to_vec(),
            output: output.shape().to_vec(),
        });
    }
    lanes_into(input, output);
    Ok(())
}

/// Replaces every element with its tanh.
pub fn tanh_array_in_place<T, S, D>(array: &mut ArrayBase<S, D>)
where
    T: TanhKernels,
    S: DataMut<Elem = T>,
    D: Dimension,
{
    if let Some(flat) = array.as_slice_memory_order_mut() {
        tanh_in_place(flat);
        return;
    }

    let axis = Axis(array.ndim() - 1);
    for mut lane in array.lanes_mut(axis) {
        let size = mem::size_of::<T>() as isize;
        let step = lane.stride_of(Axis(0)) * size;
        let ptr = lane.as_mut_ptr();
        unsafe { tanh_raw(ptr, step, ptr, step, lane.len()) };
    }
}

/// Shapes must already match. 0-d arrays are always contiguous, so the lane
/// walk below only sees `ndim >= 1`.
fn lanes_into<T, S, S2, D>(input: &ArrayBase<S, D>, output: &mut ArrayBase<S2, D>)
where
    T: TanhKernels,
    S: Data<Elem = T>,
    S2: DataMut<Elem = T>,
    D: Dimension,
{
    if input.strides() == output.strides() {
        if let (Some(src), Some(dst)) = (
            input.as_slice_memory_order(),
            output.as_slice_memory_order_mut(),
        ) {
            apply(Backend::detect(), src, dst);
            return;
        }
    }

    let axis = Axis(input.ndim() - 1);
    Zip::from(input.lanes(axis))
        .and(output.lanes_mut(axis))
        .for_each(|src, dst| unsafe { lane_into(src, dst) });
}
