#![doc = include_str!("../README.md")]

pub mod config;
pub mod engine;
pub mod error;
pub mod image;
pub mod kernel;
pub mod partition;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the four named passes plus the generic engines.
pub use crate::engine::{
    filter_parallel, filter_serial, parallel_average, parallel_median, serial_average,
    serial_median, EngineOptions,
};
pub use crate::error::FilterError;
pub use crate::image::PixelBuffer;
pub use crate::kernel::{BoxAverage, Median, WindowKernel};

/// Small prelude for quick experiments.
///
/// ```
/// use stencil_filter::prelude::*;
///
/// # fn main() -> Result<(), FilterError> {
/// let input = PixelBuffer::from_raw(5, 5, vec![9; 25]);
/// let mut output = PixelBuffer::new(5, 5);
///
/// serial_average(&input, &mut output)?;
/// assert_eq!(output.get(2, 2), 9);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::engine::{
        parallel_average, parallel_median, serial_average, serial_median, EngineOptions,
    };
    pub use crate::error::FilterError;
    pub use crate::image::PixelBuffer;
}
