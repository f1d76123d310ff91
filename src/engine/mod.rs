//! Serial and fork-join stencil engines plus the four named entry points
//! (serial/parallel × average/median).
mod options;
mod parallel;
mod serial;

pub use options::EngineOptions;
pub use parallel::filter_parallel;
pub use serial::filter_serial;

use crate::error::FilterError;
use crate::image::PixelBuffer;
use crate::kernel::{BoxAverage, Median};

/// Single-threaded moving-average pass.
pub fn serial_average(input: &PixelBuffer, output: &mut PixelBuffer) -> Result<(), FilterError> {
    filter_serial(input, output, &BoxAverage)
}

/// Fork-join moving-average pass with the default worker count.
pub fn parallel_average(input: &PixelBuffer, output: &mut PixelBuffer) -> Result<(), FilterError> {
    filter_parallel(input, output, &BoxAverage, EngineOptions::default().workers)
}

/// Single-threaded median pass.
pub fn serial_median(input: &PixelBuffer, output: &mut PixelBuffer) -> Result<(), FilterError> {
    filter_serial(input, output, &Median)
}

/// Fork-join median pass with the default worker count.
pub fn parallel_median(input: &PixelBuffer, output: &mut PixelBuffer) -> Result<(), FilterError> {
    filter_parallel(input, output, &Median, EngineOptions::default().workers)
}
