//! Core domain: companion selection with a one-shot commit.

use std::time::Duration;

use bevy::prelude::*;

use crate::content::SelectionTuning;
use crate::core::schedule::DelayQueue;

/// Milestones reached after a companion was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Show the confirmation card for the chosen index
    Confirmed(usize),
    /// Store the choice and leave the screen
    Committed(usize),
}

/// Selection screen state. Inserted when the screen opens, removed on exit.
#[derive(Resource, Debug)]
pub struct CompanionSelection {
    options: usize,
    chosen: Option<usize>,
    delays: DelayQueue<SelectionEvent>,
    tuning: SelectionTuning,
}

impl CompanionSelection {
    pub fn new(options: usize, tuning: SelectionTuning) -> Self {
        Self {
            options,
            chosen: None,
            delays: DelayQueue::new(),
            tuning,
        }
    }

    /// Choose the companion at `index`. Only the first valid choice counts.
    pub fn choose(&mut self, index: usize) -> bool {
        if self.chosen.is_some() || index >= self.options {
            return false;
        }
        self.chosen = Some(index);
        self.delays
            .schedule_secs(self.tuning.confirmation_secs, SelectionEvent::Confirmed(index));
        self.delays
            .schedule_secs(self.tuning.commit_secs, SelectionEvent::Committed(index));
        true
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    pub fn is_locked(&self) -> bool {
        self.chosen.is_some()
    }

    pub fn tick(&mut self, delta: Duration) -> Vec<SelectionEvent> {
        self.delays.tick(delta)
    }
}
