//! Error types for the checked tanh entry points.
//!
//! The numeric kernel itself cannot fail: every input bit pattern has a
//! defined output. These errors only describe buffers handed to the safe
//! wrappers that do not fit together.

use thiserror::Error;

/// Result alias for simdtanh operations.
pub type Result<T> = std::result::Result<T, TanhError>;

/// Buffer descriptors rejected by the safe wrappers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TanhError {
    /// Input and output slices differ in length.
    #[error("Length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch {
        /// Input length.
        input: usize,
        /// Output length.
        output: usize,
    },

    /// Input and output arrays differ in shape.
    #[error("Shape mismatch: input {input:?}, output {output:?}")]
    ShapeMismatch {
        /// Input shape.
        input: Vec<usize>,
        /// Output shape.
        output: Vec<usize>,
    },

    /// A strided walk would step past the end of its buffer.
    #[error(
        "Stride out of bounds: {len} elements at stride {stride} need {required} slots, buffer has {available}"
    )]
    StrideOutOfBounds {
        /// Number of elements requested.
        len: usize,
        /// Element stride of the walk.
        stride: usize,
        /// Slots the walk touches.
        required: usize,
        /// Slots in the buffer.
        available: usize,
    },
}
