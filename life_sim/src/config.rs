// config.rs - Compile-time settings and grid geometry

use std::time::Duration;

pub const GRID_SIZE: usize = 150;                          // Cells per side
pub const CELL_SIZE: f32 = 5.0;                            // Square edge in pixels
pub const CELL_SPACING: f32 = 2.0;                         // Gap between squares
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const WINDOW_SIZE: f32 = 612.0;
pub const WINDOW_TITLE: &str = "NextDevv's Game of Life";
pub const BACKGROUND_RGB: [u8; 3] = [0x2b, 0x2b, 0x2b];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub grid_size: usize,
    pub cell_size: f32,
    pub cell_spacing: f32,
    pub tick_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_size: CELL_SIZE,
            cell_spacing: CELL_SPACING,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl SimConfig {
    /// Distance between the origins of two adjacent cells.
    pub fn cell_stride(&self) -> f32 {
        self.cell_size + self.cell_spacing
    }

    /// Top-left corner of a cell, relative to the canvas origin.
    pub fn cell_origin(&self, x: i32, y: i32) -> (f32, f32) {
        let stride = self.cell_stride();
        (x as f32 * stride, y as f32 * stride)
    }

    /// Maps a canvas-relative pixel to the cell under it. Pixels in the
    /// spacing gap belong to the cell to their left/top.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(i32, i32)> {
        let stride = self.cell_stride();
        let x = (px / stride).floor();
        let y = (py / stride).floor();
        let n = self.grid_size as f32;

        if x >= 0.0 && y >= 0.0 && x < n && y < n {
            Some((x as i32, y as i32))
        } else {
            None
        }
    }

    /// Width (and height) of the whole drawn grid.
    pub fn canvas_extent(&self) -> f32 {
        self.grid_size as f32 * self.cell_stride() - self.cell_spacing
    }
}
