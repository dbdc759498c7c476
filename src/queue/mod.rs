//! serializes move requests so that rapid input is applied one move at a time
//!
//! Requests are applied strictly in arrival order. Moves that change nothing are
//! skipped straight away; after a move that changed the board the queue rests for
//! a fixed delay before it looks at the next request, giving whoever reacts to
//! that move (spawning a tile, animating) time to finish.

mod scheduler;

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{GameConfig, DEFAULT_DRAIN_DELAY_MS, DEFAULT_MAX_PENDING_MOVES};
use crate::types::{Direction, MoveApplicableGame};

pub use scheduler::{DrainScheduler, ManualScheduler};

/// Callback fired once a request has been applied, with the target it was applied
/// to and whether it changed anything.
pub type Completion<G> = Box<dyn FnOnce(&mut G, bool)>;

/// A queued move request
pub struct PendingMove<G> {
    direction: Direction,
    completion: Completion<G>,
}

impl<G> PendingMove<G> {
    /// a request to slide towards `direction`
    pub fn new(direction: Direction, completion: impl FnOnce(&mut G, bool) + 'static) -> Self {
        PendingMove {
            direction,
            completion: Box::new(completion),
        }
    }

    #[allow(missing_docs)]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<G> fmt::Debug for PendingMove<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingMove")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Whether the queue is working through requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueState {
    /// nothing pending, the next request is applied immediately
    Idle,
    /// a drain is in progress or resting until its scheduled resume. new requests
    /// wait their turn
    Draining,
}

/// Serializes move requests against a target game
#[derive(Debug)]
pub struct MoveQueue<G, S> {
    pending: VecDeque<PendingMove<G>>,
    state: QueueState,
    max_pending: usize,
    drain_delay: Duration,
    scheduler: S,
}

impl<G: MoveApplicableGame, S: DrainScheduler> MoveQueue<G, S> {
    /// a queue with the default bound and delay
    pub fn new(scheduler: S) -> Self {
        Self::with_limits(
            scheduler,
            DEFAULT_MAX_PENDING_MOVES,
            Duration::from_millis(DEFAULT_DRAIN_DELAY_MS),
        )
    }

    /// a queue using the bound and delay from `config`
    pub fn from_config(config: &GameConfig, scheduler: S) -> Self {
        Self::with_limits(scheduler, config.max_pending_moves, config.drain_delay())
    }

    /// a queue that drops requests once more than `max_pending` are waiting, and rests
    /// for `drain_delay` after a move that changed the board
    pub fn with_limits(scheduler: S, max_pending: usize, drain_delay: Duration) -> Self {
        MoveQueue {
            pending: VecDeque::new(),
            state: QueueState::Idle,
            max_pending,
            drain_delay,
            scheduler,
        }
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> QueueState {
        self.state
    }

    /// number of requests waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[allow(missing_docs)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[allow(missing_docs)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Queues a move. When the queue is idle it is applied to `target` straight away,
    /// otherwise it waits for the in-flight drain to reach it. Requests beyond the
    /// pending bound are dropped without notice.
    pub fn request_move(
        &mut self,
        target: &mut G,
        direction: Direction,
        completion: impl FnOnce(&mut G, bool) + 'static,
    ) {
        self.enqueue(target, PendingMove::new(direction, completion))
    }

    /// like `request_move`, for an already built request
    pub fn enqueue(&mut self, target: &mut G, request: PendingMove<G>) {
        if self.pending.len() > self.max_pending {
            debug!(
                direction = %request.direction,
                pending = self.pending.len(),
                "move queue full, dropping request"
            );
            return;
        }

        self.pending.push_back(request);
        if self.state == QueueState::Idle {
            self.state = QueueState::Draining;
            self.drain(target);
        }
    }

    /// drops every waiting request without running it. a scheduled resume still
    /// arrives and finds the queue empty
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Picks the queue back up once a scheduled resume is due
    pub fn resume(&mut self, target: &mut G) {
        if self.state == QueueState::Idle {
            return;
        }
        self.drain(target);
    }

    fn drain(&mut self, target: &mut G) {
        while let Some(request) = self.pending.pop_front() {
            let changed = target.apply_move(request.direction);
            trace!(direction = %request.direction, changed, "applied queued move");
            (request.completion)(target, changed);

            if changed {
                self.scheduler.schedule_resume(self.drain_delay);
                return;
            }
        }
        self.state = QueueState::Idle;
    }
}
