// THEORY:
// `LuminancePlane` is the engine's only piece of cross-frame state: the previous
// frame, already collapsed to a single intensity channel. Storing luminance
// instead of the raw frame means the lookback buffer is a third of the size and
// the differencing loop is a single subtraction per pixel.
//
// The plane is refillable in place. The engine keeps two of them (previous and
// scratch) and rotates ownership after every call, so the steady state performs
// no per-frame allocation once the buffers have grown to the capture resolution.

use crate::core_modules::frame::FrameView;
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};

/// A single-channel luminance image, one f32 sample per pixel in 0-255 range.
#[derive(Debug, Clone, Default)]
pub struct LuminancePlane {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl LuminancePlane {
    /// An empty plane, the state before any frame has been seen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces this plane's contents with the luminance of `frame`, reusing
    /// the existing sample buffer.
    pub fn fill_from(&mut self, frame: &FrameView<'_>) {
        self.width = frame.width();
        self.height = frame.height();
        self.samples.clear();
        self.samples.extend(
            frame
                .data()
                .chunks_exact(CHANNELS)
                .map(|bytes| Pixel::from(bytes).luminance() as f32),
        );
    }

    pub fn same_dimensions(&self, other: &LuminancePlane) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major luminance samples, `width * height` long.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_converts_every_pixel() {
        let data = vec![255u8; 5 * 4 * 3];
        let frame = FrameView::new(&data, 5, 4).unwrap();
        let mut plane = LuminancePlane::empty();
        plane.fill_from(&frame);
        assert_eq!((plane.width(), plane.height()), (5, 4));
        assert_eq!(plane.samples().len(), 20);
        for s in plane.samples() {
            assert!((s - 255.0).abs() < 1e-3);
        }
    }

    #[test]
    fn refill_with_new_geometry_replaces_old_samples() {
        let big = vec![10u8; 8 * 8 * 3];
        let small = vec![20u8; 2 * 2 * 3];
        let mut plane = LuminancePlane::empty();
        plane.fill_from(&FrameView::new(&big, 8, 8).unwrap());
        plane.fill_from(&FrameView::new(&small, 2, 2).unwrap());
        assert_eq!(plane.samples().len(), 4);
        assert!(!plane.same_dimensions(&{
            let mut other = LuminancePlane::empty();
            other.fill_from(&FrameView::new(&big, 8, 8).unwrap());
            other
        }));
    }
}
