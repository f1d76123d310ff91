//! Single-threaded stencil pass and the row-band loop shared with the
//! parallel engine.
use crate::error::FilterError;
use crate::image::PixelBuffer;
use crate::kernel::{window9, WindowKernel};

use std::ops::Range;

/// Entry checks shared by both engines: a 3×3 window must fit, and the
/// output must match the input's shape. Nothing is written on failure.
pub(crate) fn check_shapes(input: &PixelBuffer, output: &PixelBuffer) -> Result<(), FilterError> {
    if input.w < 3 || input.h < 3 {
        return Err(FilterError::InvalidDimensions {
            width: input.w,
            height: input.h,
        });
    }
    if !input.same_shape(output) {
        return Err(FilterError::SizeMismatch {
            in_w: input.w,
            in_h: input.h,
            out_w: output.w,
            out_h: output.h,
        });
    }
    Ok(())
}

/// Evaluate `kernel` over the interior pixels of rows `rows`, writing into
/// `band`.
///
/// `band` holds the output rows `rows.start..rows.end` back to back
/// (`rows.len() * input.w` elements). Border columns of each row are left
/// untouched; callers keep the top and bottom border rows out of `rows`.
pub(crate) fn filter_rows<K: WindowKernel + ?Sized>(
    input: &PixelBuffer,
    kernel: &K,
    rows: Range<usize>,
    band: &mut [i32],
) {
    let w = input.w;
    for y in rows.clone() {
        let offset = (y - rows.start) * w;
        let out_row = &mut band[offset..offset + w];
        for x in 1..w - 1 {
            out_row[x] = kernel.apply(&window9(input, x, y));
        }
    }
}

/// Apply `kernel` to every interior pixel of `input`, single-threaded, in
/// row-major order. The one-pixel border frame of `output` is never written.
pub fn filter_serial<K: WindowKernel + ?Sized>(
    input: &PixelBuffer,
    output: &mut PixelBuffer,
    kernel: &K,
) -> Result<(), FilterError> {
    check_shapes(input, output)?;
    let (w, h) = (input.w, input.h);
    filter_rows(input, kernel, 1..h - 1, &mut output.data[w..(h - 1) * w]);
    Ok(())
}
