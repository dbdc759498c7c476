//! various types that are useful for working with sliding tile boards
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a slide direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl Direction {
    /// returns an array of all possible directions
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// converts this direction to a usize index. indices are the same order as the `Direction::all()` method
    pub fn as_index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// converts a usize index to a direction
    pub fn from_index(index: usize) -> Direction {
        match index {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => panic!("invalid index"),
        }
    }

    /// the grid coordinate of `position` within line number `line`, for a board of
    /// `dimension` cells per side. position 0 is the edge tiles slide towards, so
    /// walking positions in order reads the line in travel order.
    pub fn line_coordinate(&self, line: usize, position: usize, dimension: usize) -> Coordinate {
        debug_assert!(line < dimension && position < dimension);
        match self {
            Direction::Up => Coordinate::new(position, line),
            Direction::Down => Coordinate::new(dimension - 1 - position, line),
            Direction::Left => Coordinate::new(line, position),
            Direction::Right => Coordinate::new(line, dimension - 1 - position),
        }
    }

    /// all the coordinates of line number `line`, in travel order
    pub fn line_coordinates(&self, line: usize, dimension: usize) -> Vec<Coordinate> {
        (0..dimension)
            .map(|position| self.line_coordinate(line, position, dimension))
            .collect()
    }
}

/// a (row, column) position on the grid. row 0 is the top edge, column 0 the left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// row index
    pub row: usize,
    /// column index
    pub col: usize,
}

impl Coordinate {
    /// makes a new coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate { row, col }
    }
}

/// Receives every visible change a board goes through. Implementors drive a
/// presentation (a view, a text console, a test harness) without the board
/// knowing anything about it.
pub trait GameObserver {
    /// the score increased to `new_score`
    fn on_score_changed(&mut self, new_score: u64);

    /// one tile relocated from `from` to `to`, where it now holds `value`. when the
    /// move was a merge `value` is the combined value
    fn on_single_tile_moved(&mut self, from: Coordinate, to: Coordinate, value: u32);

    /// two tiles met at `to` and combined into a tile of `value`
    fn on_two_tiles_moved(
        &mut self,
        from_a: Coordinate,
        from_b: Coordinate,
        to: Coordinate,
        value: u32,
    );

    /// a brand new tile appeared
    fn on_tile_inserted(&mut self, at: Coordinate, value: u32);
}

/// Capability for choosing a uniformly random index, used to place new tiles
pub trait CellPicker {
    /// returns an index in `0..count`. `count` is never zero
    fn pick(&mut self, count: usize) -> usize;
}

impl<R: rand::Rng> CellPicker for R {
    fn pick(&mut self, count: usize) -> usize {
        self.gen_range(0..count)
    }
}

/// a game which can be slid in a direction
pub trait MoveApplicableGame {
    /// slides every tile towards `direction`, returns true if the board changed
    fn apply_move(&mut self, direction: Direction) -> bool;
}

/// a game which can have a winner determined
pub trait WinDeterminableGame {
    /// the first tile (in row major order) at or above the win threshold
    fn winning_tile(&self) -> Option<Coordinate>;

    #[allow(missing_docs)]
    fn has_won(&self) -> bool {
        self.winning_tile().is_some()
    }
}

/// a game which can be determined to be stuck
pub trait LossDeterminableGame {
    /// true when the board is full and no two neighbouring tiles can merge
    fn has_lost(&self) -> bool;
}

/// a game for which the empty cells can be listed
pub trait EmptyCellGettableGame {
    /// the empty cells, in row major order
    fn get_empty_cells(&self) -> Vec<Coordinate>;

    /// true if there are no empty cells
    fn is_full(&self) -> bool {
        self.get_empty_cells().is_empty()
    }
}

/// a game for which the size of the board can be determined
pub trait SizeDeterminableGame {
    /// number of cells along each side of the (square) board
    fn dimension(&self) -> usize;
}
