use ndarray::{ArrayView3, ArrayViewMut3};

/// A single video/image frame: contiguous RGBA bytes in row-major order.
///
/// Decoders convert to RGBA at the I/O boundary; every pass in the filter
/// pipeline works on this one layout. Width and height are fixed for the
/// lifetime of a processing session.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

/// Channel count for RGBA frames.
pub const RGBA_CHANNELS: u8 = 4;

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// An opaque RGBA frame filled with a single value in R, G, and B.
    pub fn solid_rgba(width: u32, height: u32, value: u8, index: usize) -> Self {
        let mut data = vec![value; (width * height * RGBA_CHANNELS as u32) as usize];
        for px in data.chunks_exact_mut(RGBA_CHANNELS as usize) {
            px[3] = 255;
        }
        Self::new(data, width, height, RGBA_CHANNELS, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// True when the frame covers no pixels. Filter passes treat such
    /// frames as a no-op instead of erroring.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 16]; // 2x2x4
        let frame = Frame::new(data.clone(), 2, 2, 4, 7);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.channels(), 4);
        assert_eq!(frame.index(), 7);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_solid_rgba_is_opaque() {
        let frame = Frame::solid_rgba(3, 2, 100, 0);
        for px in frame.data().chunks_exact(4) {
            assert_eq!(px[0], 100);
            assert_eq!(px[1], 100);
            assert_eq!(px[2], 100);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(Frame::new(vec![], 0, 0, 4, 0).is_empty());
        assert!(Frame::new(vec![], 5, 0, 4, 0).is_empty());
        assert!(!Frame::solid_rgba(1, 1, 0, 0).is_empty());
    }

    #[test]
    fn test_data_mut_allows_modification() {
        let mut frame = Frame::solid_rgba(2, 1, 0, 0);
        frame.data_mut()[0] = 255;
        assert_eq!(frame.data()[0], 255);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::solid_rgba(2, 2, 100, 0);
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * channels")]
    fn test_mismatched_data_length_panics_in_debug() {
        let data = vec![0u8; 10]; // wrong size for 2x2x4
        Frame::new(data, 2, 2, 4, 0);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let frame = Frame::solid_rgba(4, 2, 0, 0);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 4]); // (height, width, channels)
    }

    #[test]
    fn test_as_ndarray_pixel_access() {
        // 2x2 RGBA: set pixel (row=1, col=0) to red
        let mut frame = Frame::solid_rgba(2, 2, 0, 0);
        frame.data_mut()[8] = 255; // row=1, col=0, R
        let arr = frame.as_ndarray();
        assert_eq!(arr[[1, 0, 0]], 255);
        assert_eq!(arr[[1, 0, 1]], 0);
        assert_eq!(arr[[1, 0, 2]], 0);
        assert_eq!(arr[[1, 0, 3]], 255);
    }
}
