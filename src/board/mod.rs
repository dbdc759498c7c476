//! the board state: a grid, its score, and the collaborators it reports to
mod engine;
mod terminal;

use std::fmt;

use num_format::{Locale, ToFormattedString};
use tracing::debug;

use crate::config::GameConfig;
use crate::grid::{Cell, Grid};
use crate::types::{
    CellPicker, Coordinate, EmptyCellGettableGame, GameObserver, SizeDeterminableGame,
};
use crate::GameResult;

/// one in this many spawned tiles is a 4, the rest are 2s
const FOUR_TILE_ODDS: usize = 10;

/// Owns the grid and the running score. Every visible change is reported to the
/// observer `O`; new tiles are placed with the picker `P`.
#[derive(Debug, Clone)]
pub struct Board<O, P> {
    grid: Grid,
    score: u64,
    threshold: u32,
    observer: O,
    picker: P,
}

impl<O: GameObserver, P: CellPicker> Board<O, P> {
    /// builds an empty board for the given config
    pub fn new(config: &GameConfig, observer: O, picker: P) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::with_grid(
            Grid::new(config.dimension),
            config.threshold,
            observer,
            picker,
        ))
    }

    /// builds a board around an existing grid, with a score of zero
    pub fn with_grid(grid: Grid, threshold: u32, observer: O, picker: P) -> Self {
        Board {
            grid,
            score: 0,
            threshold,
            observer,
            picker,
        }
    }

    #[allow(missing_docs)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[allow(missing_docs)]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// the tile value that wins the game
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[allow(missing_docs)]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    #[allow(missing_docs)]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// consumes the board, handing back its observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += u64::from(points);
        self.observer.on_score_changed(self.score);
    }

    /// places a tile on an empty cell. Does nothing and returns false if the cell is
    /// already occupied
    pub fn insert_tile(&mut self, at: Coordinate, value: u32) -> bool {
        debug_assert!(value > 0, "tiles must be positive");
        if !self.grid.at(at).is_empty() {
            return false;
        }
        self.grid.put(at, Cell::Occupied(value));
        self.observer.on_tile_inserted(at, value);
        true
    }

    /// places a tile on an empty cell chosen uniformly by the picker. Does nothing
    /// when the grid is full
    pub fn insert_at_random_empty_cell(&mut self, value: u32) -> Option<Coordinate> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            debug!(value, "grid is full, not inserting");
            return None;
        }
        let at = empty[self.picker.pick(empty.len())];
        self.insert_tile(at, value);
        debug!(%at, value, "inserted tile");
        Some(at)
    }

    /// the value of the next spawned tile: a 4 one time in ten, otherwise a 2
    pub fn next_spawn_value(&mut self) -> u32 {
        if self.picker.pick(FOUR_TILE_ODDS) == 1 {
            4
        } else {
            2
        }
    }

    /// spawns a 2 or a 4 at a random empty cell, as happens after every move that
    /// changed the board
    pub fn spawn_random_tile(&mut self) -> Option<Coordinate> {
        if self.is_full() {
            return None;
        }
        let value = self.next_spawn_value();
        self.insert_at_random_empty_cell(value)
    }

    /// clears every cell and zeroes the score, ready for a new game
    pub fn reset(&mut self) {
        self.grid.fill_all(Cell::Empty);
        self.score = 0;
        self.observer.on_score_changed(0);
    }
}

impl<O, P> EmptyCellGettableGame for Board<O, P> {
    fn get_empty_cells(&self) -> Vec<Coordinate> {
        self.grid.empty_cells()
    }
}

impl<O, P> SizeDeterminableGame for Board<O, P> {
    fn dimension(&self) -> usize {
        self.grid.dimension()
    }
}

impl<O, P> fmt::Display for Board<O, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "score: {}", self.score.to_formatted_string(&Locale::en))?;
        write!(f, "{}", self.grid)
    }
}
