//! Seek domain: hidden target bookkeeping and the completion sequence.

use std::time::Duration;

use bevy::prelude::*;

use crate::content::SeekTuning;
use crate::core::DelayQueue;

/// Result of clicking a hidden target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Found { remaining: usize },
    AlreadyFound,
    /// Scanning has not started yet or the hunt is already won
    Ignored,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekEvent {
    ConfettiShown,
    ConfettiHidden,
    Completed,
}

/// Seek-and-find state. Inserted when the stage opens, removed on exit.
#[derive(Resource, Debug)]
pub struct SeekAndFind {
    targets: Vec<String>,
    /// Found ids in the order they were found
    found: Vec<String>,
    scanning: bool,
    locked: bool,
    completed: bool,
    tuning: SeekTuning,
    delays: DelayQueue<SeekEvent>,
}

impl SeekAndFind {
    pub fn new(targets: Vec<String>, tuning: SeekTuning) -> Self {
        Self {
            targets,
            found: Vec::new(),
            scanning: false,
            locked: false,
            completed: false,
            tuning,
            delays: DelayQueue::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.targets.len()
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_found(&self, id: &str) -> bool {
        self.found.iter().any(|found| found == id)
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Leave the briefing and start accepting clicks. Returns `false` if
    /// scanning already started.
    pub fn start_scanning(&mut self) -> bool {
        if self.scanning {
            return false;
        }
        self.scanning = true;
        if self.targets.is_empty() {
            self.lock();
        }
        true
    }

    pub fn click(&mut self, id: &str) -> ClickOutcome {
        if !self.scanning || self.locked {
            return ClickOutcome::Ignored;
        }
        if !self.targets.iter().any(|target| target == id) {
            return ClickOutcome::Unknown;
        }
        if self.is_found(id) {
            return ClickOutcome::AlreadyFound;
        }

        self.found.push(id.to_string());
        let remaining = self.total() - self.found_count();
        if remaining == 0 {
            self.lock();
        }
        ClickOutcome::Found { remaining }
    }

    fn lock(&mut self) {
        self.locked = true;
        let shown = self.tuning.confetti_delay_secs;
        let hidden = shown + self.tuning.confetti_secs;
        let done = hidden + self.tuning.fade_secs;
        self.delays.schedule_secs(shown, SeekEvent::ConfettiShown);
        self.delays.schedule_secs(hidden, SeekEvent::ConfettiHidden);
        self.delays.schedule_secs(done, SeekEvent::Completed);
    }

    pub fn tick(&mut self, delta: Duration) -> Vec<SeekEvent> {
        let mut events = self.delays.tick(delta);
        events.retain(|event| {
            if *event != SeekEvent::Completed {
                return true;
            }
            !std::mem::replace(&mut self.completed, true)
        });
        events
    }
}
