//! Cake domain: turns a downward pointer drag into a single cut.

use std::time::Duration;

use bevy::prelude::*;

use crate::content::CakeTuning;
use crate::core::DelayQueue;

/// Delays of the four confetti bursts after the cut, in seconds
pub const BURST_DELAYS: [f32; 4] = [0.0, 0.2, 0.4, 0.6];

/// One pointer sample: offset from the drag start and downward velocity
/// in pixels per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub dx: f32,
    pub dy: f32,
    pub velocity: f32,
}

impl GestureSample {
    pub fn new(dx: f32, dy: f32, velocity: f32) -> Self {
        Self { dx, dy, velocity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CakeEvent {
    /// The knife touched the cake during this drag
    KnifeContact,
    Committed,
    /// Confetti burst `n` of [`BURST_DELAYS`]
    Burst(usize),
    SliceSettled,
    ContinueReady,
}

/// Cake cutting state. Inserted when the stage opens, removed on exit.
#[derive(Resource, Debug)]
pub struct CakeCut {
    tuning: CakeTuning,
    dragging: bool,
    offset: Vec2,
    slice_reveal: f32,
    contact_made: bool,
    committed: bool,
    settled: bool,
    continue_ready: bool,
    delays: DelayQueue<CakeEvent>,
}

impl CakeCut {
    pub fn new(tuning: CakeTuning) -> Self {
        Self {
            tuning,
            dragging: false,
            offset: Vec2::ZERO,
            slice_reveal: 0.0,
            contact_made: false,
            committed: false,
            settled: false,
            continue_ready: false,
            delays: DelayQueue::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn continue_ready(&self) -> bool {
        self.continue_ready
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn slice_reveal(&self) -> f32 {
        self.slice_reveal
    }

    pub fn begin_drag(&mut self) {
        if self.committed {
            return;
        }
        self.dragging = true;
        self.offset = Vec2::ZERO;
        self.slice_reveal = 0.0;
        self.contact_made = false;
    }

    /// Feed one pointer sample. The cut commits on the first sample that is
    /// past the commit threshold and fast enough.
    pub fn update(&mut self, sample: GestureSample) -> Vec<CakeEvent> {
        let mut events = Vec::new();
        if !self.dragging || self.committed {
            return events;
        }

        let tuning = &self.tuning;
        self.offset = Vec2::new(sample.dx, sample.dy);

        if sample.dy > tuning.contact_threshold {
            self.slice_reveal = (sample.dy - tuning.contact_threshold).min(tuning.max_slice_reveal);
            if !self.contact_made {
                self.contact_made = true;
                events.push(CakeEvent::KnifeContact);
            }
        } else {
            self.slice_reveal = 0.0;
        }

        if sample.dy > tuning.commit_threshold && sample.velocity > tuning.min_velocity {
            self.commit();
            events.push(CakeEvent::Committed);
        }

        events
    }

    fn commit(&mut self) {
        self.committed = true;
        self.dragging = false;
        for (index, delay) in BURST_DELAYS.iter().enumerate() {
            self.delays.schedule_secs(*delay, CakeEvent::Burst(index));
        }
        self.delays
            .schedule_secs(self.tuning.settle_secs, CakeEvent::SliceSettled);
        self.delays
            .schedule_secs(self.tuning.continue_secs, CakeEvent::ContinueReady);
    }

    /// Releasing before the cut springs the knife back.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        if self.committed {
            return;
        }
        self.offset = Vec2::ZERO;
        self.slice_reveal = 0.0;
    }

    pub fn tick(&mut self, delta: Duration) -> Vec<CakeEvent> {
        let events = self.delays.tick(delta);
        for event in &events {
            match event {
                CakeEvent::SliceSettled => self.settled = true,
                CakeEvent::ContinueReady => self.continue_ready = true,
                _ => {}
            }
        }
        events
    }
}
