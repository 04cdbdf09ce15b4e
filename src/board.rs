use crate::Cell;
use crate::snake::Direction;

/// Fixed-size grid laid over a pixel screen. Cells are addressed by the
/// pixel coordinates of their top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width_px: i32,
    height_px: i32,
    cell_size: i32,
}

impl Board {
    pub fn new(width_px: i32, height_px: i32, cell_size: i32) -> Self {
        Board { width_px, height_px, cell_size }
    }

    pub fn columns(&self) -> i32 {
        self.width_px / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height_px / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Pixel position of the cell at grid column `col`, row `row`.
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        (col * self.cell_size, row * self.cell_size)
    }

    /// Grid column and row of a cell.
    pub fn grid_index(&self, cell: Cell) -> (i32, i32) {
        (cell.0 / self.cell_size, cell.1 / self.cell_size)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let (col, row) = self.grid_index(cell);
        cell.0 >= 0 && cell.1 >= 0
            && cell.0 % self.cell_size == 0 && cell.1 % self.cell_size == 0
            && col < self.columns() && row < self.rows()
    }

    /// The neighbouring cell in `direction`, wrapping around each edge.
    pub fn step(&self, from: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let (col, row) = self.grid_index(from);

        self.cell_at(
            (col + dx).rem_euclid(self.columns()),
            (row + dy).rem_euclid(self.rows()),
        )
    }
}
