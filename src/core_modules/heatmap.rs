// THEORY:
// The heatmap module turns a full-resolution difference image into the engine's
// fixed-shape output. It has two halves:
//
// 1.  **`CellAccumulator`**: the spatial pooling pass. It partitions the frame
//     into `grid_height x grid_width` non-overlapping rectangular cells by
//     integer division, with the last row and column of cells absorbing any
//     remainder, so every pixel lands in exactly one cell no matter how the
//     frame and grid sizes relate. Pooling a region into one mean also cancels
//     single-pixel sensor noise, the same reason the engine analyzes regions
//     rather than raw pixels.
// 2.  **`HeatmapGrid`**: a "dumb" output container. Fixed shape for the
//     engine's whole lifetime, row-major, non-negative energies. It is the
//     value the broadcast layer JSON-encodes, so it derives serde and exposes
//     flat, per-row, and nested accessors.

use serde::{Deserialize, Serialize};

/// Fixed-shape grid of per-region motion energies for one frame pair.
///
/// Shape is `grid_height x grid_width`, row-major, every entry >= 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    grid_height: u32,
    grid_width: u32,
    /// Row-major cell energies, `grid_height * grid_width` long.
    cells: Vec<f32>,
}

impl HeatmapGrid {
    /// An all-zero grid, the output of a priming or resetting call.
    pub fn zeros(grid_height: u32, grid_width: u32) -> Self {
        Self {
            grid_height,
            grid_width,
            cells: vec![0.0; (grid_height * grid_width) as usize],
        }
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn get(&self, row: u32, col: u32) -> f32 {
        self.cells[(row * self.grid_width + col) as usize]
    }

    /// Row-major flat view of all cell energies.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    /// Iterator over grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.cells.chunks_exact(self.grid_width as usize)
    }

    /// Nested row-major copy, the shape the broadcast layer emits as JSON.
    pub fn to_nested(&self) -> Vec<Vec<f32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Arithmetic mean of all cell energies.
    pub fn mean_energy(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.cells.iter().map(|&c| c as f64).sum();
        (sum / self.cells.len() as f64) as f32
    }
}

/// Accumulates per-pixel motion magnitudes into grid cells.
///
/// Allocated once for the engine's lifetime and reset per frame pair, so the
/// per-call cost is arithmetic only.
pub struct CellAccumulator {
    grid_height: u32,
    grid_width: u32,
    /// Pixel height of a cell before remainder absorption. Clamped to 1 so a
    /// frame shorter than the grid still maps rows to distinct cells.
    cell_height: u32,
    cell_width: u32,
    sums: Vec<f64>,
    counts: Vec<u32>,
}

impl CellAccumulator {
    pub fn new(grid_height: u32, grid_width: u32) -> Self {
        let num_cells = (grid_height * grid_width) as usize;
        Self {
            grid_height,
            grid_width,
            cell_height: 1,
            cell_width: 1,
            sums: vec![0.0; num_cells],
            counts: vec![0; num_cells],
        }
    }

    /// Prepares for a new frame pair: recomputes the cell spans for the given
    /// frame geometry and zeroes all running sums.
    pub fn reset(&mut self, frame_height: u32, frame_width: u32) {
        self.cell_height = (frame_height / self.grid_height).max(1);
        self.cell_width = (frame_width / self.grid_width).max(1);
        self.sums.fill(0.0);
        self.counts.fill(0);
    }

    /// Grid row owning pixel row `y`. The last grid row absorbs the remainder.
    pub fn cell_row(&self, y: u32) -> u32 {
        (y / self.cell_height).min(self.grid_height - 1)
    }

    /// Grid column owning pixel column `x`. The last column absorbs the remainder.
    pub fn cell_col(&self, x: u32) -> u32 {
        (x / self.cell_width).min(self.grid_width - 1)
    }

    /// Adds one pixel's motion magnitude to the cell owning `(x, y)`.
    pub fn add(&mut self, x: u32, y: u32, magnitude: f32) {
        let index = (self.cell_row(y) * self.grid_width + self.cell_col(x)) as usize;
        self.sums[index] += magnitude as f64;
        self.counts[index] += 1;
    }

    /// Snapshots the pass: each cell becomes the mean magnitude of its pixels.
    /// Cells that received no pixels (frame smaller than the grid) report 0.0.
    pub fn snapshot(&self) -> HeatmapGrid {
        let cells = self
            .sums
            .iter()
            .zip(&self.counts)
            .map(|(&sum, &count)| {
                if count == 0 {
                    0.0
                } else {
                    (sum / count as f64) as f32
                }
            })
            .collect();
        HeatmapGrid {
            grid_height: self.grid_height,
            grid_width: self.grid_width,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_grid_has_expected_shape_and_mean() {
        let grid = HeatmapGrid::zeros(8, 8);
        assert_eq!(grid.as_slice().len(), 64);
        assert_eq!(grid.rows().count(), 8);
        assert_eq!(grid.mean_energy(), 0.0);
    }

    #[test]
    fn uneven_partition_counts_every_pixel_exactly_once() {
        // 10x10 frame over a 3x3 grid: cells are 3x3 with the last row and
        // column absorbing the extra pixel.
        let mut acc = CellAccumulator::new(3, 3);
        acc.reset(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                acc.add(x, y, 1.0);
            }
        }
        let total: u32 = acc.counts.iter().sum();
        assert_eq!(total, 100);
        assert_eq!(acc.counts[0], 9); // 3x3 interior cell
        assert_eq!(acc.counts[8], 16); // 4x4 bottom-right cell
        let grid = acc.snapshot();
        for &cell in grid.as_slice() {
            assert!((cell - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn frame_smaller_than_grid_leaves_trailing_cells_empty() {
        let mut acc = CellAccumulator::new(4, 4);
        acc.reset(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                acc.add(x, y, 8.0);
            }
        }
        let grid = acc.snapshot();
        assert_eq!(grid.get(0, 0), 8.0);
        assert_eq!(grid.get(3, 3), 0.0);
        assert_eq!(grid.as_slice().len(), 16);
    }

    #[test]
    fn mean_energy_matches_cell_average() {
        let mut acc = CellAccumulator::new(2, 2);
        acc.reset(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                // Top-left quadrant hot, rest quiet.
                let mag = if x < 2 && y < 2 { 100.0 } else { 0.0 };
                acc.add(x, y, mag);
            }
        }
        let grid = acc.snapshot();
        let expected: f32 = grid.as_slice().iter().sum::<f32>() / 4.0;
        assert!((grid.mean_energy() - expected).abs() < 1e-6);
        assert!((grid.mean_energy() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn serializes_with_shape_and_row_major_cells() {
        let grid = HeatmapGrid::zeros(2, 3);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["grid_height"], 2);
        assert_eq!(json["grid_width"], 3);
        assert_eq!(json["cells"].as_array().unwrap().len(), 6);

        let nested = grid.to_nested();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested[0].len(), 3);
    }
}
