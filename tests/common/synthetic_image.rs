use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stencil_filter::PixelBuffer;

/// Generates a simple high-contrast checkerboard buffer.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0i32; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            data[y * width + x] = if (cx + cy) & 1 == 0 { 32 } else { 220 };
        }
    }
    PixelBuffer::from_raw(width, height, data)
}

/// Generates a pseudo-random 8-bit-range buffer from a fixed seed.
pub fn random_buffer(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen_range(0..256)).collect();
    PixelBuffer::from_raw(width, height, data)
}
