//! Fixed-size, row-major cell storage.

use std::fmt;

use crate::cell::CellState;

/// Grid position. Signed so that neighbors of edge cells can be addressed directly.
pub type Coord = (i32, i32);

/// Offsets of the eight cells in a Moore neighborhood.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Dense rectangular grid of cell states.
///
/// Reads outside the bounds return [`CellState::Dead`] and writes outside the
/// bounds are ignored, so neighbor loops never need edge special-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Dead; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major index of `(x, y)`, or `None` if it is out of bounds.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Returns the state at `(x, y)`, or `Dead` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .unwrap_or_default()
    }

    /// Overwrites the state at `(x, y)`. Does nothing outside the grid.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = state;
        }
    }

    /// Read-only view of the row-major cell buffer.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// The cell buffer as one byte per cell, for uploading to a display surface.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Text snapshot, one row per line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (row_idx, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if row_idx > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|cell| cell.symbol()));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
