//! Static decomposition of an image's interior rows into per-worker bands.
use std::ops::Range;

/// Split the interior row span `[1, height - 1)` into `workers + 1` ordered,
/// pairwise disjoint ranges whose union covers every interior row exactly
/// once.
///
/// Each of the first `workers` ranges holds `(height - 2) / (workers + 1)`
/// rows; the final range absorbs the remainder. With `workers == 0` the
/// whole interior comes back as a single range. Leading ranges may be empty
/// when there are more consumers than interior rows.
pub fn partition_rows(height: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(height >= 3, "no interior rows below height 3");
    let interior = height.saturating_sub(2);
    let pieces = workers + 1;
    let base = interior / pieces;

    let mut ranges = Vec::with_capacity(pieces);
    let mut start = 1usize;
    for _ in 0..workers {
        ranges.push(start..start + base);
        start += base;
    }
    ranges.push(start..height.saturating_sub(1));
    ranges
}
