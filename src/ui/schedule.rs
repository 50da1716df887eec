//! Cancellable one-shot timers driven by the UI event loop.
//!
//! Nothing here sleeps: the runtime asks for [`Scheduler::next_deadline`],
//! waits for input at most that long, then drains [`Scheduler::take_due`].

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Identity of one mounted page view. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer wakes up when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTarget {
    Typewriter { view: ViewId },
    DismissNotice,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    queue: BTreeMap<(Instant, TimerId), TimerTarget>,
    deadlines: HashMap<TimerId, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, target: TimerTarget) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((at, id), target);
        self.deadlines.insert(id, at);
        id
    }

    pub fn schedule_after(&mut self, now: Instant, delay: Duration, target: TimerTarget) -> TimerId {
        self.schedule(now + delay, target)
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => self.queue.remove(&(at, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerTarget> {
        let mut due = Vec::new();
        while let Some((&(at, id), _)) = self.queue.first_key_value() {
            if at > now {
                break;
            }
            if let Some(target) = self.queue.remove(&(at, id)) {
                self.deadlines.remove(&id);
                due.push(target);
            }
        }
        due
    }
}
