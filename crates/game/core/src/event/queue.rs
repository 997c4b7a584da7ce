use std::collections::BTreeMap;

use super::Event;
use crate::state::{GladiatorId, Tick};

/// Pending events ordered by `(time_stamp, seq)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue {
    events: BTreeMap<(Tick, u64), Event>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an event, stamping it with the next insertion number.
    pub fn push(&mut self, mut event: Event) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        event.seq = seq;
        self.events.insert(event.ordering_key(), event);
        seq
    }

    /// Removes and returns the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_first().map(|(_, event)| event)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.events.values().next()
    }

    /// Drops every event owned by `owner`. Returns how many were removed.
    pub fn purge_owner(&mut self, owner: GladiatorId) -> usize {
        let before = self.events.len();
        self.events.retain(|_, event| event.owner != owner);
        before - self.events.len()
    }

    pub fn has_event_for(&self, owner: GladiatorId) -> bool {
        self.events.values().any(|event| event.owner == owner)
    }

    /// Events in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
