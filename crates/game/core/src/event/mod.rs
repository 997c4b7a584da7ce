//! Scheduled actions and the time-ordered queue that holds them.

mod queue;

pub use queue::EventQueue;

use crate::action::Move;
use crate::state::{GladiatorId, Position, Tick};

/// A move scheduled to take effect at `time_stamp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub owner: GladiatorId,
    pub action: Move,
    pub time_stamp: Tick,
    /// Owner position when the event was queued.
    pub origin: Position,
    /// Insertion order; breaks ties between equal time stamps.
    pub seq: u64,
}

impl Event {
    /// Creates an unsequenced event; the queue assigns `seq` on push.
    pub fn new(owner: GladiatorId, action: Move, time_stamp: Tick, origin: Position) -> Self {
        Self {
            owner,
            action,
            time_stamp,
            origin,
            seq: 0,
        }
    }

    pub fn ordering_key(&self) -> (Tick, u64) {
        (self.time_stamp, self.seq)
    }
}
