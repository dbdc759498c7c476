//! A headless game controller.
//!
//! [Game] plays the part a view controller would: it seeds the opening tiles,
//! routes move requests through the [MoveQueue], and after every move that
//! changed the board spawns a new tile and checks for a win or a loss.

use tracing::info;

use crate::board::Board;
use crate::config::GameConfig;
use crate::queue::{DrainScheduler, MoveQueue};
use crate::types::{
    CellPicker, Coordinate, Direction, GameObserver, LossDeterminableGame, WinDeterminableGame,
};
use crate::GameResult;

/// Where a game stands between moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// moves remain and nothing has reached the threshold
    InProgress,
    /// a tile at the given coordinate reached the threshold
    Won(Coordinate),
    /// the board is full and nothing can merge
    Lost,
}

/// A board together with the queue that feeds it moves
#[derive(Debug)]
pub struct Game<O, P, S> {
    config: GameConfig,
    board: Board<O, P>,
    queue: MoveQueue<Board<O, P>, S>,
}

impl<O, P, S> Game<O, P, S>
where
    O: GameObserver + 'static,
    P: CellPicker + 'static,
    S: DrainScheduler,
{
    /// builds a game with an empty board, call `start` to place the opening tiles
    pub fn new(config: GameConfig, observer: O, picker: P, scheduler: S) -> GameResult<Self> {
        let board = Board::new(&config, observer, picker)?;
        let queue = MoveQueue::from_config(&config, scheduler);
        Ok(Game {
            config,
            board,
            queue,
        })
    }

    /// places the opening tiles at random empty cells
    pub fn start(&mut self) {
        for _ in 0..self.config.opening_tiles {
            self.board
                .insert_at_random_empty_cell(self.config.opening_value);
        }
        info!(
            dimension = self.config.dimension,
            threshold = self.config.threshold,
            "game started"
        );
    }

    /// queues a move. once it has been applied and if it changed the board, a new
    /// tile is spawned
    pub fn request_move(&mut self, direction: Direction) {
        self.queue
            .request_move(&mut self.board, direction, follow_up::<O, P>);
    }

    /// queues a move like `request_move`, then hands the board and the outcome to
    /// `completion` once the follow-up has run
    pub fn request_move_with(
        &mut self,
        direction: Direction,
        completion: impl FnOnce(&mut Board<O, P>, bool) + 'static,
    ) {
        self.queue
            .request_move(&mut self.board, direction, move |board, changed| {
                follow_up(board, changed);
                completion(board, changed);
            });
    }

    /// continues working through queued moves, call once a scheduled resume is due
    pub fn resume(&mut self) {
        self.queue.resume(&mut self.board);
    }

    /// whether the game has been won or lost. a win takes precedence
    pub fn status(&self) -> GameStatus {
        if let Some(at) = self.board.winning_tile() {
            GameStatus::Won(at)
        } else if self.board.has_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// clears the board, the score and any waiting requests, then places fresh
    /// opening tiles
    pub fn reset(&mut self) {
        self.queue.clear();
        self.board.reset();
        self.start();
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &Board<O, P> {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn queue(&self) -> &MoveQueue<Board<O, P>, S> {
        &self.queue
    }

    #[allow(missing_docs)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        self.queue.scheduler_mut()
    }
}

fn follow_up<O: GameObserver, P: CellPicker>(board: &mut Board<O, P>, changed: bool) {
    if !changed {
        return;
    }
    if let Some(at) = board.winning_tile() {
        info!(%at, score = board.score(), "tile reached the win threshold");
    }
    board.spawn_random_tile();
    if board.has_lost() {
        info!(score = board.score(), "no moves remain");
    }
}
