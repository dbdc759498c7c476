use std::time::Duration;

/// Something that can arrange for a [MoveQueue](super::MoveQueue) to be resumed
/// later. The queue only asks; whoever owns the event loop is expected to call
/// `resume` once `delay` has elapsed.
pub trait DrainScheduler {
    /// ask for the queue to be resumed after `delay`
    fn schedule_resume(&mut self, delay: Duration);
}

/// A scheduler that just remembers what it was asked for. The owner polls it and
/// resumes the queue when it sees fit, which suits headless drivers and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    pending: Option<Duration>,
    scheduled: usize,
}

impl ManualScheduler {
    /// the delay of the outstanding resume request, if there is one
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    /// takes the outstanding resume request
    pub fn take_pending(&mut self) -> Option<Duration> {
        self.pending.take()
    }

    /// how many resumes have been requested in total
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }
}

impl DrainScheduler for ManualScheduler {
    fn schedule_resume(&mut self, delay: Duration) {
        self.pending = Some(delay);
        self.scheduled += 1;
    }
}

impl<S: DrainScheduler + ?Sized> DrainScheduler for &mut S {
    fn schedule_resume(&mut self, delay: Duration) {
        (**self).schedule_resume(delay)
    }
}
