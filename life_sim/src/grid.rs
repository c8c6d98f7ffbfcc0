// grid.rs - Bounds-checked live/dead grid for the simulation

/// Moore neighborhood offsets: top-left, top, top-right, left, right,
/// bottom-left, bottom, bottom-right. Callers rely on this order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

/// Square grid of cells. Anything outside `[0, size)` reads as dead and
/// ignores writes; there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,    // Row-major, index = y * size + x
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = alive;
        }
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                self.cells[i]
            }
            None => false,
        }
    }

    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Positions past the `i32` range come back as `-1`, which no grid holds.
    pub fn neighbor_positions(x: i32, y: i32) -> [(i32, i32); 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            (x.checked_add(dx).unwrap_or(-1), y.checked_add(dy).unwrap_or(-1))
        })
    }

    pub fn neighbors(&self, x: i32, y: i32) -> [bool; 8] {
        Self::neighbor_positions(x, y).map(|(nx, ny)| self.get(nx, ny))
    }

    /// Live cells in row-major order (y outer, x inner).
    pub fn live_cells(&self) -> Vec<(i32, i32)> {
        self.cells()
            .filter(|cell| cell.alive)
            .map(|cell| (cell.x, cell.y))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &alive)| Cell {
            x: (i % size) as i32,
            y: (i / size) as i32,
            alive,
        })
    }
}
