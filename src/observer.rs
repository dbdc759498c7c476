//! ready made [GameObserver] implementations, and replay of recorded events
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::types::{Coordinate, GameObserver};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Observer that does not do anything
pub struct NoopObserver();

impl GameObserver for NoopObserver {
    fn on_score_changed(&mut self, _new_score: u64) {}

    fn on_single_tile_moved(&mut self, _from: Coordinate, _to: Coordinate, _value: u32) {}

    fn on_two_tiles_moved(
        &mut self,
        _from_a: Coordinate,
        _from_b: Coordinate,
        _to: Coordinate,
        _value: u32,
    ) {
    }

    fn on_tile_inserted(&mut self, _at: Coordinate, _value: u32) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_score_changed(&mut self, new_score: u64) {
        (**self).on_score_changed(new_score)
    }

    fn on_single_tile_moved(&mut self, from: Coordinate, to: Coordinate, value: u32) {
        (**self).on_single_tile_moved(from, to, value)
    }

    fn on_two_tiles_moved(
        &mut self,
        from_a: Coordinate,
        from_b: Coordinate,
        to: Coordinate,
        value: u32,
    ) {
        (**self).on_two_tiles_moved(from_a, from_b, to, value)
    }

    fn on_tile_inserted(&mut self, at: Coordinate, value: u32) {
        (**self).on_tile_inserted(at, value)
    }
}

/// One observer callback, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum BoardEvent {
    ScoreChanged {
        score: u64,
    },
    SingleTileMoved {
        from: Coordinate,
        to: Coordinate,
        value: u32,
    },
    TwoTilesMoved {
        from_a: Coordinate,
        from_b: Coordinate,
        to: Coordinate,
        value: u32,
    },
    TileInserted {
        at: Coordinate,
        value: u32,
    },
}

/// Observer that keeps every callback it receives, in order. Useful for headless
/// play, tests, and for shipping a transition to a renderer that runs elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    events: Vec<BoardEvent>,
}

impl RecordingObserver {
    /// the events seen so far
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// hands back the events seen so far, leaving the log empty
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// the most recent score reported, if any
    pub fn last_score(&self) -> Option<u64> {
        self.events.iter().rev().find_map(|e| match e {
            BoardEvent::ScoreChanged { score } => Some(*score),
            _ => None,
        })
    }
}

impl GameObserver for RecordingObserver {
    fn on_score_changed(&mut self, new_score: u64) {
        self.events.push(BoardEvent::ScoreChanged { score: new_score });
    }

    fn on_single_tile_moved(&mut self, from: Coordinate, to: Coordinate, value: u32) {
        self.events
            .push(BoardEvent::SingleTileMoved { from, to, value });
    }

    fn on_two_tiles_moved(
        &mut self,
        from_a: Coordinate,
        from_b: Coordinate,
        to: Coordinate,
        value: u32,
    ) {
        self.events.push(BoardEvent::TwoTilesMoved {
            from_a,
            from_b,
            to,
            value,
        });
    }

    fn on_tile_inserted(&mut self, at: Coordinate, value: u32) {
        self.events.push(BoardEvent::TileInserted { at, value });
    }
}

/// Applies recorded events to a grid, in order. Starting from the grid a session
/// began with, replaying its events rebuilds the grid it ended with. Score events
/// carry no tile data and are skipped.
pub fn replay<'a>(grid: &mut Grid, events: impl IntoIterator<Item = &'a BoardEvent>) {
    for event in events {
        match *event {
            BoardEvent::ScoreChanged { .. } => {}
            BoardEvent::SingleTileMoved { from, to, value } => {
                grid.put(from, Cell::Empty);
                grid.put(to, Cell::Occupied(value));
            }
            BoardEvent::TwoTilesMoved {
                from_a,
                from_b,
                to,
                value,
            } => {
                grid.put(from_a, Cell::Empty);
                grid.put(from_b, Cell::Empty);
                grid.put(to, Cell::Occupied(value));
            }
            BoardEvent::TileInserted { at, value } => grid.put(at, Cell::Occupied(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_order() {
        let mut observer = RecordingObserver::default();
        observer.on_tile_inserted(Coordinate::new(0, 0), 2);
        observer.on_score_changed(4);
        observer.on_single_tile_moved(Coordinate::new(0, 1), Coordinate::new(0, 0), 4);

        assert_eq!(observer.last_score(), Some(4));
        assert_eq!(
            observer.drain(),
            vec![
                BoardEvent::TileInserted {
                    at: Coordinate::new(0, 0),
                    value: 2
                },
                BoardEvent::ScoreChanged { score: 4 },
                BoardEvent::SingleTileMoved {
                    from: Coordinate::new(0, 1),
                    to: Coordinate::new(0, 0),
                    value: 4
                },
            ]
        );
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_events_serialize_with_a_kind_tag() {
        let event = BoardEvent::TileInserted {
            at: Coordinate::new(1, 2),
            value: 4,
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "tile_inserted", "at": {"row": 1, "col": 2}, "value": 4})
        );
    }

    #[test]
    fn test_replay_two_tiles() {
        let mut grid = Grid::from_rows(&[[0, 2, 0, 2], [0, 0, 0, 0], [0; 4], [0; 4]]).unwrap();
        replay(
            &mut grid,
            &[BoardEvent::TwoTilesMoved {
                from_a: Coordinate::new(0, 1),
                from_b: Coordinate::new(0, 3),
                to: Coordinate::new(0, 0),
                value: 4,
            }],
        );
        assert_eq!(grid.to_rows()[0], vec![4, 0, 0, 0]);
    }
}
