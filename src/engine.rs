// THEORY:
// The `engine` module is the top-level API for the motion core. It encapsulates
// the full per-frame path into a single, easy-to-use interface: hand it one raw
// frame, get back a fixed-shape heatmap and the scalar mean energy. The caller
// (a sequential capture loop) forwards those alongside independently computed
// signals to a broadcast layer; the engine knows nothing about cadence,
// transport, or what else rides in the payload.
//
// Key architectural principles:
// 1.  **One frame of memory**: the only state carried across calls is the
//     previous frame's luminance plane. The heatmap is recomputed fresh every
//     call; no grid state persists.
// 2.  **Priming over erroring**: the first frame, and any frame whose
//     dimensions differ from the stored plane (a live camera can renegotiate
//     resolution mid-stream), cannot be differenced. The engine re-primes and
//     returns a deterministic all-zero sample instead of failing.
// 3.  **Bounded, synchronous work**: `process` does O(H*W) arithmetic and
//     nothing else. No I/O, no locks, no suspension. One engine serves one
//     logical stream of frames; concurrent callers need external
//     synchronization.

use crate::core_modules::frame::FrameView;
use crate::core_modules::heatmap::{CellAccumulator, HeatmapGrid};
use crate::core_modules::luminance::LuminancePlane;
use crate::error::{MotionError, MotionResult};
use serde::{Deserialize, Serialize};

/// The two signals derived from one `process` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Per-region motion energies for this frame against the previous one.
    pub heatmap: HeatmapGrid,
    /// Arithmetic mean of all heatmap cells.
    pub mean_energy: f32,
}

impl MotionSample {
    fn zeroed(grid_height: u32, grid_width: u32) -> Self {
        Self {
            heatmap: HeatmapGrid::zeros(grid_height, grid_width),
            mean_energy: 0.0,
        }
    }
}

/// Stateful real-time motion processor.
///
/// Owns the previous frame's luminance plane and the fixed grid shape. Safe to
/// drive from a single sequential capture loop; it has no internal locking.
/// Frames dropped upstream simply widen the pair being differenced, which the
/// engine tolerates (it only ever compares its input to whatever it was last
/// given).
pub struct MotionEngine {
    grid_height: u32,
    grid_width: u32,
    /// Luminance of the last processed frame. `None` until primed.
    previous: Option<LuminancePlane>,
    /// Reused workspace for the current frame's luminance. Rotated into
    /// `previous` at the end of every call.
    scratch: LuminancePlane,
    /// Reused cell-pooling workspace, reset per frame pair.
    accumulator: CellAccumulator,
}

impl MotionEngine {
    /// Creates an engine producing `grid_height x grid_width` heatmaps.
    ///
    /// Fails with [`MotionError::Construction`] if either dimension is zero; a
    /// degenerate grid has no sensible semantics and must not limp along.
    pub fn new(grid_height: u32, grid_width: u32) -> MotionResult<Self> {
        if grid_height == 0 || grid_width == 0 {
            return Err(MotionError::construction(format!(
                "grid dimensions must be positive, got {grid_height}x{grid_width}"
            )));
        }
        Ok(Self {
            grid_height,
            grid_width,
            previous: None,
            scratch: LuminancePlane::empty(),
            accumulator: CellAccumulator::new(grid_height, grid_width),
        })
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// True once a previous frame is stored and the next matching-size frame
    /// will produce a real difference.
    pub fn is_primed(&self) -> bool {
        self.previous.is_some()
    }

    /// Processes one frame and returns its heatmap and mean energy.
    ///
    /// A priming call (first frame, or first frame after a resolution change)
    /// returns an all-zero sample and stores the frame as the new baseline.
    pub fn process(&mut self, frame: &FrameView<'_>) -> MotionSample {
        self.scratch.fill_from(frame);

        let previous = self.previous.take();
        let sample = match &previous {
            Some(prev) if prev.same_dimensions(&self.scratch) => self.difference(prev),
            Some(prev) => {
                tracing::debug!(
                    old_width = prev.width(),
                    old_height = prev.height(),
                    new_width = frame.width(),
                    new_height = frame.height(),
                    "frame dimensions changed, re-priming motion baseline"
                );
                MotionSample::zeroed(self.grid_height, self.grid_width)
            }
            None => {
                tracing::debug!(
                    width = frame.width(),
                    height = frame.height(),
                    "priming motion baseline with first frame"
                );
                MotionSample::zeroed(self.grid_height, self.grid_width)
            }
        };

        // Rotate buffers: the current plane becomes the baseline and the old
        // baseline is recycled as next call's workspace.
        let recycled = previous.unwrap_or_default();
        let current = std::mem::replace(&mut self.scratch, recycled);
        self.previous = Some(current);

        sample
    }

    /// Validates a raw packed-RGB buffer and processes it in one step.
    ///
    /// This is the whole InvalidFrame surface: a live-stream caller typically
    /// skips the offending frame and keeps going.
    pub fn process_buffer(
        &mut self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> MotionResult<MotionSample> {
        let frame = FrameView::new(data, width, height)?;
        Ok(self.process(&frame))
    }

    /// Absolute luminance difference against `prev`, pooled onto the grid.
    /// Both planes are guaranteed same-size by the caller.
    fn difference(&mut self, prev: &LuminancePlane) -> MotionSample {
        let width = self.scratch.width();
        let height = self.scratch.height();
        let current = self.scratch.samples();
        let baseline = prev.samples();

        self.accumulator.reset(height, width);
        for y in 0..height {
            let row_start = (y * width) as usize;
            for x in 0..width {
                let index = row_start + x as usize;
                let magnitude = (current[index] - baseline[index]).abs();
                self.accumulator.add(x, y, magnitude);
            }
        }

        let heatmap = self.accumulator.snapshot();
        let mean_energy = heatmap.mean_energy();
        MotionSample {
            heatmap,
            mean_energy,
        }
    }
}
