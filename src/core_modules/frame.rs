// THEORY:
// `FrameView` is the validated boundary between the capture collaborator and the
// engine. The capture side hands over a packed 8-bit RGB buffer plus its claimed
// geometry; this module is the single place where that claim is checked. Once a
// `FrameView` exists, every downstream module may assume a well-formed buffer,
// which keeps the hot per-pixel loops free of bounds bookkeeping.
//
// Key architectural principles:
// 1.  **Parse, don't re-validate**: construction is fallible (`InvalidFrame`),
//     everything after it is infallible.
// 2.  **Zero-copy**: the view borrows the caller's buffer for the duration of
//     one `process` call. The engine never retains it; what it keeps across
//     calls is its own luminance plane (see `luminance.rs`).

use crate::core_modules::pixel::pixel::CHANNELS;
use crate::error::{MotionError, MotionResult};

/// A borrowed, validated view of one captured frame.
///
/// Layout: row-major, packed RGB, 8 bits per channel, no padding between rows.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Wraps a raw capture buffer, checking it against the declared geometry.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> MotionResult<Self> {
        if data.is_empty() {
            return Err(MotionError::invalid_frame("frame buffer is empty"));
        }
        if width == 0 || height == 0 {
            return Err(MotionError::invalid_frame(format!(
                "frame has a zero dimension ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(MotionError::invalid_frame(format!(
                "buffer length {} does not match {width}x{height}x{CHANNELS} ({expected} bytes); \
                 wrong channel count or truncated frame",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Zero-copy view over an `image` crate RGB buffer, which is well-formed
    /// by construction.
    pub fn from_rgb_image(image: &'a image::RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            data: image.as_raw().as_slice(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The packed RGB bytes, `width * height * 3` long.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
