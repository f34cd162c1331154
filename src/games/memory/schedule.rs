//! Deferred events on a virtual clock.
//!
//! The engine never sleeps. It records what should happen and when, and the
//! host either advances the clock or delivers events from its own timers.
//! Each event carries the session generation it was scheduled for.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a deferred event does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Hide the board after the level-start preview.
    EndPreview,
    /// Compare and commit the two selected tiles.
    ResolveSelection,
}

/// An event due at `due` on the engine clock, for session `generation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub due: Duration,
    pub generation: u64,
    pub kind: EventKind,
}

/// Pending events ordered by due time, ties in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: Vec<ScheduledEvent>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Events not yet fired, earliest first.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledEvent] {
        &self.queue
    }

    /// Schedule `kind` to fire `after` from now.
    pub fn schedule(&mut self, after: Duration, generation: u64, kind: EventKind) -> ScheduledEvent {
        let event = ScheduledEvent {
            due: self.now.checked_add(after).unwrap_or(Duration::MAX),
            generation,
            kind,
        };
        // Insert after every event due at the same time.
        let at = self.queue.partition_point(|e| e.due <= event.due);
        self.queue.insert(at, event);
        event
    }

    /// Remove and return the earliest event due at or before `until`,
    /// moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledEvent> {
        match self.queue.first() {
            Some(event) if event.due <= until => {
                let event = self.queue.remove(0);
                self.now = self.now.max(event.due);
                Some(event)
            }
            _ => None,
        }
    }

    /// Move the clock forward to `to`. Never moves it back.
    pub fn advance_to(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// Drop a specific pending event. Returns whether it was queued.
    pub fn remove(&mut self, event: &ScheduledEvent) -> bool {
        match self.queue.iter().position(|e| e == event) {
            Some(pos) => {
                self.queue.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every event scheduled for a generation other than `current`.
    ///
    /// Returns how many were dropped.
    pub fn purge_stale(&mut self, current: u64) -> usize {
        let before = self.queue.len();
        self.queue.retain(|e| e.generation == current);
        before - self.queue.len()
    }
}
