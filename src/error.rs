use thiserror::Error;

/// Errors reported by the filter engines.
///
/// Shape errors are detected before any pixel is written; a worker panic is
/// surfaced only after every spawned worker has been joined. In all error
/// cases the interior of the output buffer is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Either dimension is too small to contain a 3×3 window.
    #[error("image is {width}x{height}; a 3x3 stencil needs at least 3x3")]
    InvalidDimensions { width: usize, height: usize },

    /// Output buffer shape differs from the input's.
    #[error("output buffer is {out_w}x{out_h} but input is {in_w}x{in_h}")]
    SizeMismatch {
        in_w: usize,
        in_h: usize,
        out_w: usize,
        out_h: usize,
    },

    /// A spawned band worker panicked during its row range.
    #[error("filter worker panicked: {detail}")]
    WorkerPanicked { detail: String },
}
