#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Rules for 2048-style sliding tile merge puzzles.
//!
//! The goal is to provide a headless engine that a presentation layer can drive:
//! given a square grid of numbered tiles and a slide direction it computes the new
//! grid, the score delta, and the exact per-tile moves and merges needed to animate
//! the transition. Every visible change is reported through a [GameObserver], so
//! a terminal renderer, a GPU view and a test harness all drive the same engine.
//!
//! you will likely be most interested in the [Game] type, which wires a [Board] to
//! a [MoveQueue] and runs the usual follow-up (spawn a tile, check for a win or a
//! loss) after every move that changed the board.
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use slide_merge_rules::{
//!     Direction, Game, GameConfig, ManualScheduler, RecordingObserver,
//! };
//!
//! let mut game = Game::new(
//!     GameConfig::default(),
//!     RecordingObserver::default(),
//!     SmallRng::seed_from_u64(2048),
//!     ManualScheduler::default(),
//! )
//! .unwrap();
//! game.start();
//! game.request_move(Direction::Left);
//! assert!(game.board().score() <= 4);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod grid;
pub mod line_resolver;
pub mod observer;
pub mod picker;
pub mod queue;
pub mod types;

pub use board::Board;
pub use config::GameConfig;
pub use game::{Game, GameStatus};
pub use grid::{Cell, Grid};
pub use line_resolver::{resolve_line, Instruction, LineResolution};
pub use observer::{replay, BoardEvent, NoopObserver, RecordingObserver};
pub use picker::SequencePicker;
pub use queue::{DrainScheduler, ManualScheduler, MoveQueue, PendingMove, QueueState};
pub use types::{
    CellPicker, Coordinate, Direction, EmptyCellGettableGame, GameObserver,
    LossDeterminableGame, MoveApplicableGame, SizeDeterminableGame, WinDeterminableGame,
};

/// Core error type for the rule engine.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// a coordinate fell outside the grid
    #[error("coordinate ({row}, {col}) is outside a {dimension}x{dimension} grid")]
    OutOfBounds {
        /// requested row
        row: usize,
        /// requested column
        col: usize,
        /// side length of the grid
        dimension: usize,
    },

    /// configuration values that can not describe a playable game
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// tile data that does not describe a square grid of positive tiles
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
