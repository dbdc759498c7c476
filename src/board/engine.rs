use tracing::{instrument, trace};

use crate::grid::Cell;
use crate::line_resolver::{resolve_line, Instruction};
use crate::types::{CellPicker, Direction, GameObserver, MoveApplicableGame};

use super::Board;

impl<O: GameObserver, P: CellPicker> Board<O, P> {
    /// Slides every tile towards `direction`, merging equal neighbours. Returns true
    /// if the grid changed. Score increases and tile movements are reported to the
    /// observer in the order they happen, line by line.
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&mut self, direction: Direction) -> bool {
        let dimension = self.grid.dimension();
        let mut changed = false;

        for line in 0..dimension {
            let coordinates = direction.line_coordinates(line, dimension);
            let cells = coordinates.iter().map(|c| self.grid.at(*c)).collect::<Vec<_>>();
            let resolution = resolve_line(&cells);

            for instruction in resolution.changes() {
                changed = true;
                match *instruction {
                    Instruction::Slide {
                        source,
                        destination,
                        value,
                        merged,
                    } => {
                        let (from, to) = (coordinates[source], coordinates[destination]);
                        self.grid.put(from, Cell::Empty);
                        self.grid.put(to, Cell::Occupied(value));
                        if merged {
                            self.add_score(value);
                        }
                        self.observer.on_single_tile_moved(from, to, value);
                    }
                    Instruction::Converge {
                        first_source,
                        second_source,
                        destination,
                        value,
                    } => {
                        let (from_a, from_b, to) = (
                            coordinates[first_source],
                            coordinates[second_source],
                            coordinates[destination],
                        );
                        self.grid.put(from_a, Cell::Empty);
                        self.grid.put(from_b, Cell::Empty);
                        self.grid.put(to, Cell::Occupied(value));
                        self.add_score(value);
                        self.observer.on_two_tiles_moved(from_a, from_b, to, value);
                    }
                }
            }
        }

        trace!(changed, score = self.score, "applied move");
        changed
    }
}

impl<O: GameObserver, P: CellPicker> MoveApplicableGame for Board<O, P> {
    fn apply_move(&mut self, direction: Direction) -> bool {
        self.apply(direction)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::grid::Grid;
    use crate::observer::{replay, BoardEvent, NoopObserver, RecordingObserver};
    use crate::picker::SequencePicker;
    use crate::types::{Coordinate, EmptyCellGettableGame};

    use super::*;

    fn board(rows: &[[u32; 4]]) -> Board<RecordingObserver, SequencePicker> {
        Board::with_grid(
            Grid::from_rows(rows).unwrap(),
            2048,
            RecordingObserver::default(),
            SequencePicker::first(),
        )
    }

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_left_merges_and_scores() {
        let mut b = board(&[[4, 4, 8, 0], [2, 0, 2, 2], [0; 4], [0; 4]]);
        assert!(b.apply(Direction::Left));
        assert_eq!(
            b.grid().to_rows(),
            vec![
                vec![8, 8, 0, 0],
                vec![4, 2, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0]
            ]
        );
        assert_eq!(b.score(), 12);
        assert_eq!(
            b.observer().events(),
            &[
                BoardEvent::ScoreChanged { score: 8 },
                BoardEvent::SingleTileMoved {
                    from: c(0, 1),
                    to: c(0, 0),
                    value: 8
                },
                BoardEvent::SingleTileMoved {
                    from: c(0, 2),
                    to: c(0, 1),
                    value: 8
                },
                BoardEvent::ScoreChanged { score: 12 },
                BoardEvent::SingleTileMoved {
                    from: c(1, 2),
                    to: c(1, 0),
                    value: 4
                },
                BoardEvent::SingleTileMoved {
                    from: c(1, 3),
                    to: c(1, 1),
                    value: 2
                },
            ]
        );
    }

    #[test]
    fn test_right_reads_lines_from_the_right_edge() {
        let mut b = board(&[[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(b.apply(Direction::Right));
        assert_eq!(b.grid().to_rows()[0], vec![0, 0, 2, 4]);
        // travel order is [_, 2, 2, 2]: both tiles of the front pair move
        assert_eq!(
            b.observer().events()[1],
            BoardEvent::TwoTilesMoved {
                from_a: c(0, 2),
                from_b: c(0, 1),
                to: c(0, 3),
                value: 4
            }
        );
    }

    #[test]
    fn test_up_and_down_work_on_columns() {
        let rows = [[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 4], [0, 0, 0, 4]];

        let mut up = board(&rows);
        assert!(up.apply(Direction::Up));
        assert_eq!(
            up.grid().to_rows(),
            vec![
                vec![4, 0, 0, 8],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0]
            ]
        );

        let mut down = board(&rows);
        assert!(down.apply(Direction::Down));
        assert_eq!(
            down.grid().to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![4, 0, 0, 8]
            ]
        );
        assert_eq!(up.score(), 12);
        assert_eq!(down.score(), 12);
    }

    #[test]
    fn test_noop_direction_leaves_grid_untouched() {
        let mut b = board(&[[2, 4, 0, 0], [8, 0, 0, 0], [0; 4], [0; 4]]);
        let before = b.grid().clone();
        assert!(!b.apply(Direction::Left));
        assert!(!b.apply(Direction::Up));
        assert_eq!(b.grid(), &before);
        assert_eq!(b.score(), 0);
        assert!(b.observer().events().is_empty());
    }

    #[test]
    fn test_empty_board_never_changes() {
        let mut b = board(&[[0; 4]; 4]);
        for direction in Direction::all() {
            assert!(!b.apply(direction));
        }
    }

    fn arb_board() -> impl Strategy<Value = Vec<Vec<u32>>> {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(0u32), (1u32..5).prop_map(|p| 1 << p)], 4),
            4,
        )
    }

    proptest! {
        #[test]
        fn prop_moves_conserve_value_and_score_merges(rows in arb_board(), idx in 0usize..4) {
            let direction = Direction::from_index(idx);
            let grid = Grid::from_rows(&rows).unwrap();
            let mut b = Board::with_grid(grid.clone(), 2048, RecordingObserver::default(), SequencePicker::first());
            let changed = b.apply(direction);

            prop_assert_eq!(b.grid().total_value(), grid.total_value());
            prop_assert_eq!(changed, b.grid() != &grid);
            prop_assert_eq!(b.observer().last_score().unwrap_or(0), b.score());

            let converged: u64 = b
                .observer()
                .events()
                .iter()
                .map(|e| match *e {
                    BoardEvent::TwoTilesMoved { value, .. } => u64::from(value),
                    _ => 0,
                })
                .sum();
            prop_assert!(b.score() >= converged);
        }

        #[test]
        fn prop_replayed_events_rebuild_the_grid(rows in arb_board(), idx in 0usize..4) {
            let grid = Grid::from_rows(&rows).unwrap();
            let mut b = Board::with_grid(grid.clone(), 2048, RecordingObserver::default(), SequencePicker::first());
            b.apply(Direction::from_index(idx));

            let mut replayed = grid;
            replay(&mut replayed, b.observer().events());
            prop_assert_eq!(&replayed, b.grid());
        }

        #[test]
        fn prop_second_identical_move_only_changes_by_merging(rows in arb_board(), idx in 0usize..4) {
            let direction = Direction::from_index(idx);
            let mut b = Board::with_grid(Grid::from_rows(&rows).unwrap(), 2048, NoopObserver(), SequencePicker::first());
            b.apply(direction);
            let score = b.score();
            let tiles = 16 - b.get_empty_cells().len();
            let changed = b.apply(direction);
            // after one slide everything is compacted, so only merges can change things
            prop_assert_eq!(changed, b.score() > score);
            prop_assert!(16 - b.get_empty_cells().len() <= tiles);
        }
    }
}
