use crate::grid::Cell;
use crate::types::{
    Coordinate, EmptyCellGettableGame, LossDeterminableGame, WinDeterminableGame,
};

use super::Board;

impl<O, P> WinDeterminableGame for Board<O, P> {
    fn winning_tile(&self) -> Option<Coordinate> {
        self.grid
            .iter()
            .find(|(_, cell)| matches!(cell, Cell::Occupied(v) if *v >= self.threshold))
            .map(|(coordinate, _)| coordinate)
    }
}

impl<O, P> LossDeterminableGame for Board<O, P> {
    fn has_lost(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        let last = self.grid.dimension() - 1;
        for (coordinate, cell) in self.grid.iter() {
            let value = match cell {
                Cell::Occupied(v) => v,
                Cell::Empty => {
                    debug_assert!(false, "{} is empty on a full grid", coordinate);
                    return false;
                }
            };
            let Coordinate { row, col } = coordinate;
            let right = col < last && self.grid.get(row, col + 1) == Cell::Occupied(value);
            let below = row < last && self.grid.get(row + 1, col) == Cell::Occupied(value);
            if right || below {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::observer::NoopObserver;
    use crate::picker::SequencePicker;

    fn board<R: AsRef<[u32]>>(rows: &[R], threshold: u32) -> Board<NoopObserver, SequencePicker> {
        Board::with_grid(
            Grid::from_rows(rows).unwrap(),
            threshold,
            NoopObserver(),
            SequencePicker::first(),
        )
    }

    #[test]
    fn test_empty_grid_has_not_won() {
        let b = board(&[[0; 4]; 4], 2048);
        assert_eq!(b.winning_tile(), None);
        assert!(!b.has_won());
    }

    #[test]
    fn test_single_tile_at_threshold_wins() {
        let b = board(&[[0, 0, 0, 0], [0, 0, 2048, 0], [0; 4], [0; 4]], 2048);
        assert_eq!(b.winning_tile(), Some(Coordinate::new(1, 2)));
        assert!(b.has_won());
    }

    #[test]
    fn test_first_winning_tile_is_row_major() {
        let b = board(&[[0, 0, 32], [64, 0, 0], [0, 16, 0]], 16);
        assert_eq!(b.winning_tile(), Some(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_tiles_below_threshold_do_not_win() {
        let b = board(&[[1024, 512], [256, 1024]], 2048);
        assert_eq!(b.winning_tile(), None);
    }

    #[test]
    fn test_grid_with_space_has_not_lost() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]], 2048);
        assert!(!b.has_lost());
    }

    #[test]
    fn test_full_grid_without_pairs_has_lost() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 2048);
        assert!(b.has_lost());
    }

    #[test]
    fn test_full_grid_with_a_horizontal_pair_has_not_lost() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]], 2048);
        assert!(!b.has_lost());
    }

    #[test]
    fn test_full_grid_with_a_vertical_pair_has_not_lost() {
        let b = board(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]], 2048);
        assert!(!b.has_lost());
    }
}
