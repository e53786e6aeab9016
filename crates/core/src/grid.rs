//! Grid module - the fixed-size occupancy matrix
//!
//! Cells are plain occupancy flags stored in a flat, row-major `Vec<bool>`
//! (`row * cols + col`). The dimensions are chosen at construction and never
//! change afterwards, so every row always holds exactly `cols` cells.
//!
//! Coordinates are `(row, col)` with row 0 at the top.

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        // Piece math runs in i32; every cell index must fit.
        if rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(ConfigError::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Build a grid from explicit rows of occupancy flags.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, ConfigError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(rows.len(), cols)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(ConfigError::RaggedRow {
                    row,
                    len: cells.len(),
                    cols,
                });
            }
            grid.row_mut(row).copy_from_slice(cells);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "grid cell ({row}, {col}) outside {}x{}",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Occupancy at signed coordinates, `None` when outside the grid.
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.cells[row as usize * self.cols + col as usize])
    }

    /// Whether a cell is occupied.
    ///
    /// # Panics
    ///
    /// Panics when the cell is outside the grid. Callers bounds-check first.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Mark a cell occupied. No-op when it already is.
    ///
    /// # Panics
    ///
    /// Panics when the cell is outside the grid.
    pub fn occupy(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = true;
    }

    /// Check if a row is completely filled
    ///
    /// # Panics
    ///
    /// Panics when the row is outside the grid.
    pub fn is_row_full(&self, row: usize) -> bool {
        assert!(row < self.rows, "row {row} outside grid of {} rows", self.rows);
        self.row(row).iter().all(|&cell| cell)
    }

    /// Remove a row and insert an empty one at the top.
    ///
    /// Rows above `row` move down by one; rows below it stay where they are.
    ///
    /// # Panics
    ///
    /// Panics when the row is outside the grid.
    pub fn clear_row(&mut self, row: usize) {
        assert!(row < self.rows, "row {row} outside grid of {} rows", self.rows);
        let width = self.cols;
        // copy_within handles the overlapping shift
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(false);
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Mark every cell of a row occupied.
    pub fn fill_row(&mut self, row: usize) {
        assert!(row < self.rows, "row {row} outside grid of {} rows", self.rows);
        self.row_mut(row).fill(true);
    }

    /// Flat row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Copy the grid into a row-per-vector matrix.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Write the grid into `out`, reusing its allocations when shapes match.
    pub fn write_rows(&self, out: &mut Vec<Vec<bool>>) {
        out.resize_with(self.rows, Vec::new);
        for (dst, src) in out.iter_mut().zip(self.cells.chunks(self.cols)) {
            dst.clear();
            dst.extend_from_slice(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 10 })
        );
        assert!(Grid::new(20, 0).is_err());
    }

    #[test]
    fn flat_index_is_row_major() {
        let mut grid = Grid::new(20, 10).unwrap();
        grid.occupy(1, 3);
        assert!(grid.cells()[13]);
        assert_eq!(grid.get(1, 3), Some(true));
        assert_eq!(grid.get(-1, 3), None);
        assert_eq!(grid.get(1, 10), None);
    }

    #[test]
    fn occupy_is_idempotent() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.occupy(2, 2);
        grid.occupy(2, 2);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    #[should_panic]
    fn occupancy_query_outside_grid_panics() {
        let grid = Grid::new(4, 4).unwrap();
        grid.is_occupied(4, 0);
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn clear_row_outside_grid_panics() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.clear_row(4);
    }

    #[test]
    fn clear_row_shifts_rows_above_only() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.occupy(0, 0);
        grid.occupy(1, 1);
        grid.fill_row(2);
        grid.occupy(3, 2);

        grid.clear_row(2);

        assert_eq!(
            grid.to_rows(),
            vec![
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
                vec![false, false, true],
            ]
        );
    }

    #[test]
    fn clear_top_row_leaves_it_empty() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.fill_row(0);
        grid.clear_row(0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(ConfigError::RaggedRow {
                row: 1,
                len: 1,
                cols: 2
            })
        );
    }

    #[test]
    fn write_rows_reuses_buffer() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.occupy(1, 0);
        let mut out = vec![vec![true; 5]; 7];
        grid.write_rows(&mut out);
        assert_eq!(out, vec![vec![false, false], vec![true, false]]);
    }
}
