//! Owned single-channel i32 image in row-major layout (stride == width).
//!
//! Filter inputs and outputs are plain integer buffers; the one-pixel border
//! frame keeps whatever value the buffer was constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of i32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<i32>,
}

impl PixelBuffer {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    /// Wrap an existing row-major vector; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<i32>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must equal w * h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice of `w` pixels.
    pub fn row(&self, y: usize) -> &[i32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Mutably borrow row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    /// The whole buffer as one contiguous slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    /// The whole buffer as one contiguous mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.w == other.w && self.h == other.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(2, 1, 7);
        assert_eq!(buf.idx(2, 1), 6);
        assert_eq!(buf.data[6], 7);
        assert_eq!(buf.get(2, 1), 7);
        assert_eq!(buf.row(1), &[0, 0, 7, 0]);
    }

    #[test]
    fn from_raw_keeps_layout() {
        let buf = PixelBuffer::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(buf.row(0), &[1, 2, 3]);
        assert_eq!(buf.row(1), &[4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "buffer length")]
    fn from_raw_rejects_short_vec() {
        let _ = PixelBuffer::from_raw(3, 3, vec![0; 8]);
    }
}
