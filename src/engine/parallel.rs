//! Fork-join stencil pass.
//!
//! The interior of the output buffer is carved into `workers + 1` disjoint
//! row bands with `split_at_mut`, so the borrow checker proves that no two
//! workers can touch the same output cell. The input buffer is only ever
//! read; a worker's window may reach one row into a neighboring band's
//! *input* rows, which is safe because nothing mutates the input during the
//! pass.
use super::serial::{check_shapes, filter_rows, filter_serial};
use crate::error::FilterError;
use crate::image::PixelBuffer;
use crate::kernel::WindowKernel;
use crate::partition::partition_rows;

use log::debug;
use std::any::Any;
use std::ops::Range;
use std::thread;

/// Apply `kernel` to every interior pixel of `input` using `workers` spawned
/// threads plus the invoking thread.
///
/// The invoking thread runs the final (remainder-absorbing) band itself.
/// Every spawned worker is joined before this returns; if any worker
/// panicked, the first panic is reported as
/// [`FilterError::WorkerPanicked`] after the join barrier. For a given
/// kernel the output is bit-identical to [`filter_serial`] for any
/// `workers`.
pub fn filter_parallel<K: WindowKernel + ?Sized>(
    input: &PixelBuffer,
    output: &mut PixelBuffer,
    kernel: &K,
    workers: usize,
) -> Result<(), FilterError> {
    check_shapes(input, output)?;
    if workers == 0 {
        return filter_serial(input, output, kernel);
    }

    let (w, h) = (input.w, input.h);
    let ranges = partition_rows(h, workers);
    debug!(
        "filter_parallel: {}x{} image, {} spawned workers, bands {:?}",
        w, h, workers, ranges
    );

    let (last, spawned) = ranges
        .split_last()
        .expect("partition always yields workers + 1 ranges");

    // Carve the interior rows into one disjoint mutable band per range.
    let mut remaining = &mut output.data[w..(h - 1) * w];
    let mut bands: Vec<(Range<usize>, &mut [i32])> = Vec::with_capacity(spawned.len());
    for range in spawned {
        let (band, rest) = remaining.split_at_mut(range.len() * w);
        bands.push((range.clone(), band));
        remaining = rest;
    }

    thread::scope(|s| {
        let mut handles = Vec::with_capacity(bands.len());
        for (range, band) in bands {
            handles.push(s.spawn(move || filter_rows(input, kernel, range, band)));
        }

        // The invoking thread takes the final band itself.
        filter_rows(input, kernel, last.clone(), remaining);

        // Join every worker before reporting the first failure.
        let mut first_panic = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                first_panic.get_or_insert(payload);
            }
        }
        match first_panic {
            None => Ok(()),
            Some(payload) => Err(FilterError::WorkerPanicked {
                detail: panic_message(payload.as_ref()),
            }),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{BoxAverage, Median};

    #[test]
    fn zero_workers_degenerates_to_serial() {
        let data: Vec<i32> = (0..25).map(|i| (i * 7) % 11).collect();
        let input = PixelBuffer::from_raw(5, 5, data);

        let mut serial = PixelBuffer::new(5, 5);
        let mut parallel = PixelBuffer::new(5, 5);
        filter_serial(&input, &mut serial, &Median).unwrap();
        filter_parallel(&input, &mut parallel, &Median, 0).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn shape_errors_surface_before_spawning() {
        let input = PixelBuffer::new(3, 2);
        let mut output = PixelBuffer::new(3, 2);
        assert_eq!(
            filter_parallel(&input, &mut output, &BoxAverage, 4),
            Err(FilterError::InvalidDimensions {
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn more_workers_than_interior_rows_is_fine() {
        let input = PixelBuffer::from_raw(4, 3, vec![6; 12]);
        let mut output = PixelBuffer::new(4, 3);
        filter_parallel(&input, &mut output, &BoxAverage, 8).unwrap();
        assert_eq!(output.get(1, 1), 6);
        assert_eq!(output.get(2, 1), 6);
    }

    #[test]
    fn worker_panic_is_reported_after_join() {
        const TRIPWIRE: i32 = -999;

        struct Exploding;
        impl WindowKernel for Exploding {
            fn apply(&self, window: &[i32; 9]) -> i32 {
                assert!(!window.contains(&TRIPWIRE), "kernel blew up");
                0
            }
        }

        // 6 interior rows over workers=2 -> spawned bands 1..3 and 3..5,
        // invoking thread takes 5..7. Only windows of band 1..3 can see
        // (1, 1), so exactly one spawned worker panics.
        let mut input = PixelBuffer::from_raw(5, 8, vec![1; 40]);
        input.set(1, 1, TRIPWIRE);
        let mut output = PixelBuffer::new(5, 8);

        let err = filter_parallel(&input, &mut output, &Exploding, 2).unwrap_err();
        match err {
            FilterError::WorkerPanicked { detail } => assert!(detail.contains("kernel blew up")),
            other => panic!("expected worker panic, got {other:?}"),
        }
    }
}
