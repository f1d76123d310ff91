//! 3×3 window gather and the kernels evaluated over it.
//!
//! A kernel sees the neighborhood as an unordered bag of nine samples; both
//! shipped kernels (box average, median) are order-independent, so the gather
//! order is purely a layout convenience.
use crate::image::PixelBuffer;

/// Number of samples in a 3×3 window.
pub const WINDOW_LEN: usize = 9;

/// An order-independent aggregate over one 3×3 neighborhood.
///
/// `Sync` because the parallel engine shares one kernel instance across all
/// band workers.
pub trait WindowKernel: Sync {
    fn apply(&self, window: &[i32; WINDOW_LEN]) -> i32;
}

/// Moving-average (box blur) kernel: sum the nine samples, divide once by 9
/// with truncating integer division.
///
/// Summing before the single division is the canonical box filter; dividing
/// each term first (as some formulations do) truncates nine times and biases
/// the result low.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxAverage;

impl WindowKernel for BoxAverage {
    #[inline]
    fn apply(&self, window: &[i32; WINDOW_LEN]) -> i32 {
        window.iter().sum::<i32>() / WINDOW_LEN as i32
    }
}

/// Median kernel: the middle of the nine sorted samples.
///
/// Duplicates need no special handling; a uniform window returns its value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Median;

impl WindowKernel for Median {
    #[inline]
    fn apply(&self, window: &[i32; WINDOW_LEN]) -> i32 {
        let mut sorted = *window;
        sorted.sort_unstable();
        sorted[WINDOW_LEN / 2]
    }
}

/// Gather the 3×3 neighborhood centered on an interior pixel.
///
/// Callers guarantee `1 <= x <= w - 2` and `1 <= y <= h - 2`.
#[inline]
pub fn window9(input: &PixelBuffer, x: usize, y: usize) -> [i32; WINDOW_LEN] {
    let above = input.row(y - 1);
    let center = input.row(y);
    let below = input.row(y + 1);
    [
        above[x - 1],
        above[x],
        above[x + 1],
        center[x - 1],
        center[x],
        center[x + 1],
        below[x - 1],
        below[x],
        below[x + 1],
    ]
}
