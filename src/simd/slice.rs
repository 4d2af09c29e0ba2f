//! Safe slice API.
//!
//! Everything here validates lengths and strides up front and then hands raw
//! descriptors to the dispatcher, which picks the vector or single-lane path.
//! Parallel variants split the work into [`PARALLEL_CHUNK_SIZE`] pieces on the
//! rayon pool once the input is larger than [`PARALLEL_SIMD_THRESHOLD`].

use std::mem;

use rayon::prelude::*;

use super::{
    dispatch::{tanh_raw_with, Backend, TanhKernels},
    traits::SimdTanh,
};
use crate::{
    error::{Result, TanhError},
    PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD,
};

/// Unit-stride tanh of equally long slices; lengths are the caller's problem.
#[inline(always)]
pub(crate) fn apply<T: TanhKernels>(backend: Backend, input: &[T], output: &mut [T]) {
    debug_assert_eq!(input.len(), output.len(), "Slices must be the same length");

    let step = mem::size_of::<T>() as isize;
    unsafe {
        tanh_raw_with(
            backend,
            input.as_ptr(),
            step,
            output.as_mut_ptr(),
            step,
            input.len(),
        )
    };
}

#[inline(always)]
fn apply_in_place<T: TanhKernels>(backend: Backend, data: &mut [T]) {
    let step = mem::size_of::<T>() as isize;
    let ptr = data.as_mut_ptr();
    unsafe { tanh_raw_with(backend, ptr, step, ptr, step, data.len()) };
}

/// Chunk length for parallel splits: a multiple of the lane count.
fn parallel_chunk<T: TanhKernels>() -> usize {
    let step = Backend::detect().lane_count::<T>();
    ((PARALLEL_CHUNK_SIZE / step) * step).max(step)
}

fn simd_tanh<T: TanhKernels>(a: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); a.len()];
    apply(Backend::detect(), a, &mut out);
    out
}

fn parallel_simd_tanh<T: TanhKernels>(a: &[T]) -> Vec<T> {
    if a.len() <= PARALLEL_SIMD_THRESHOLD {
        return simd_tanh(a);
    }

    let backend = Backend::detect();
    let chunk = parallel_chunk::<T>();

    let mut out = vec![T::zero(); a.len()];
    out.par_chunks_mut(chunk)
        .zip(a.par_chunks(chunk))
        .for_each(|(out_chunk, in_chunk)| apply(backend, in_chunk, out_chunk));
    out
}

fn scalar_tanh<T: TanhKernels>(a: &[T]) -> Vec<T> {
    a.iter().map(|x| x.tanh()).collect()
}

impl<T: TanhKernels> SimdTanh for &[T] {
    type Output = Vec<T>;

    #[inline(always)]
    fn simd_tanh(self) -> Self::Output {
        simd_tanh(self)
    }

    #[inline(always)]
    fn par_simd_tanh(self) -> Self::Output {
        parallel_simd_tanh(self)
    }

    #[inline(always)]
    fn scalar_tanh(self) -> Self::Output {
        scalar_tanh(self)
    }
}

/// Writes `tanh(input[i])` to `output[i]`.
///
/// # Errors
///
/// [`TanhError::LengthMismatch`] when the slices differ in length.
pub fn tanh_into<T: TanhKernels>(input: &[T], output: &mut [T]) -> Result<()> {
    tanh_into_with(Backend::detect(), input, output)
}

/// [`tanh_into`] on an explicit backend. An unavailable backend is replaced by
/// the detected one.
///
/// # Errors
///
/// [`TanhError::LengthMismatch`] when the slices differ in length.
pub fn tanh_into_with<T: TanhKernels>(
    backend: Backend,
    input: &[T],
    output: &mut [T],
) -> Result<()> {
    if input.len() != output.len() {
        return Err(TanhError::LengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    apply(backend, input, output);
    Ok(())
}

/// Replaces every element with its tanh.
pub fn tanh_in_place<T: TanhKernels>(data: &mut [T]) {
    apply_in_place(Backend::detect(), data);
}

/// [`tanh_in_place`] split across the rayon pool for large slices.
pub fn par_tanh_in_place<T: TanhKernels>(data: &mut [T]) {
    let backend = Backend::detect();
    if data.len() <= PARALLEL_SIMD_THRESHOLD {
        apply_in_place(backend, data);
        return;
    }

    data.par_chunks_mut(parallel_chunk::<T>())
        .for_each(|chunk| apply_in_place(backend, chunk));
}

/// Slots a walk of `len` elements at `stride` touches.
fn required_slots(len: usize, stride: usize) -> Option<usize> {
    match len {
        0 => Some(0),
        _ => (len - 1).checked_mul(stride)?.checked_add(1),
    }
}

fn check_walk(len: usize, stride: usize, available: usize) -> Result<()> {
    match required_slots(len, stride) {
        Some(required) if required <= available => Ok(()),
        required => Err(TanhError::StrideOutOfBounds {
            len,
            stride,
            required: required.unwrap_or(usize::MAX),
            available,
        }),
    }
}

/// Writes `tanh(input[i * input_stride])` to `output[i * output_stride]` for
/// `i < len`. Slots between strided elements are left untouched.
///
/// # Errors
///
/// [`TanhError::StrideOutOfBounds`] when either walk runs past its slice.
pub fn tanh_strided_into<T: TanhKernels>(
    input: &[T],
    input_stride: usize,
    output: &mut [T],
    output_stride: usize,
    len: usize,
) -> Result<()> {
    check_walk(len, input_stride, input.len())?;
    check_walk(len, output_stride, output.len())?;

    // Steps only matter for len >= 2, where the bounds check above keeps them
    // within the slice and so within isize.
    let size = mem::size_of::<T>() as isize;
    unsafe {
        tanh_raw_with(
            Backend::detect(),
            input.as_ptr(),
            (input_stride as isize).wrapping_mul(size),
            output.as_mut_ptr(),
            (output_stride as isize).wrapping_mul(size),
            len,
        )
    };
    Ok(())
}
