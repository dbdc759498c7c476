//! the fixed size square container tiles live in
//!
//! The grid is deliberately inert: it knows how to store and fetch cells and
//! nothing about sliding, merging or scoring.

use std::fmt;

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::types::Coordinate;
use crate::{GameError, GameResult};

/// A single grid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[allow(missing_docs)]
    Empty,
    /// a tile with a positive value
    Occupied(u32),
}

impl Cell {
    /// the tile value, if there is one
    pub fn value(&self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(v) => Some(*v),
        }
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// maps 0 to an empty cell and anything else to a tile
    pub fn from_value(value: u32) -> Self {
        if value == 0 {
            Cell::Empty
        } else {
            Cell::Occupied(value)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A square grid of cells stored in row major order. The dimension is fixed at
/// construction and there are always exactly `dimension * dimension` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// makes an empty grid. panics if the dimension is smaller than 2
    pub fn new(dimension: usize) -> Self {
        assert!(dimension >= 2, "a grid needs at least 2 cells per side");
        Grid {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        }
    }

    /// builds a grid from rows of tile values, where 0 means empty
    ///
    /// ```
    /// use slide_merge_rules::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.get(1, 1), Cell::Occupied(4));
    /// ```
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> GameResult<Self> {
        let dimension = rows.len();
        if dimension < 2 {
            return Err(GameError::InvalidGrid(format!(
                "expected at least 2 rows, got {}",
                dimension
            )));
        }

        let mut grid = Grid::new(dimension);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dimension {
                return Err(GameError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    dimension
                )));
            }
            for (col, value) in values.iter().enumerate() {
                grid.set(row, col, Cell::from_value(*value));
            }
        }
        Ok(grid)
    }

    /// number of cells along each side
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, row: usize, col: usize) -> GameResult<usize> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GameError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    /// fetches a cell, returning an error for coordinates off the grid
    pub fn try_get(&self, row: usize, col: usize) -> GameResult<Cell> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// stores a cell, returning an error for coordinates off the grid
    pub fn try_set(&mut self, row: usize, col: usize, cell: Cell) -> GameResult<()> {
        debug_assert!(cell != Cell::Occupied(0), "tiles must be positive");
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// fetches a cell. Asking for a cell off the grid is a programming error and panics
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.try_get(row, col) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }

    /// stores a cell. Writing a cell off the grid is a programming error and panics
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Err(e) = self.try_set(row, col, cell) {
            panic!("{}", e)
        }
    }

    /// fetches the cell at a coordinate
    pub fn at(&self, coordinate: Coordinate) -> Cell {
        self.get(coordinate.row, coordinate.col)
    }

    /// stores a cell at a coordinate
    pub fn put(&mut self, coordinate: Coordinate, cell: Cell) {
        self.set(coordinate.row, coordinate.col, cell)
    }

    /// overwrites every cell
    pub fn fill_all(&mut self, cell: Cell) {
        self.cells.iter_mut().for_each(|c| *c = cell);
    }

    /// every coordinate on the grid, in row major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        iproduct!(0..self.dimension, 0..self.dimension).map(|(row, col)| Coordinate { row, col })
    }

    /// every coordinate paired with its cell, in row major order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.coordinates().zip(self.cells.iter().copied())
    }

    /// the empty coordinates, in row major order
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coordinate, _)| coordinate)
            .collect()
    }

    /// sum of every tile on the grid
    pub fn total_value(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(Cell::value)
            .map(u64::from)
            .sum()
    }

    /// the tile values row by row, 0 for empty cells
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.iter().map(|c| c.value().unwrap_or(0)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .filter_map(Cell::value)
            .max()
            .map(|v| v.to_string().len())
            .unwrap_or(1);
        for row in self.cells.chunks(self.dimension) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{:>width$}", ".", width = width)?,
                    Cell::Occupied(v) => write!(f, "{:>width$}", v, width = width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
