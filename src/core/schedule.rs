//! Core domain: delayed actions owned by a single screen.
//!
//! Every screen keeps its cosmetic delays in a [`DelayQueue`] stored inside
//! the screen's own resource. Removing that resource on stage exit drops the
//! queue, so nothing scheduled by a screen can fire after it is gone.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Delayed<T> {
    due: Duration,
    seq: u64,
    item: T,
}

/// A queue of items that become due after a delay.
#[derive(Debug, Clone)]
pub struct DelayQueue<T> {
    now: Duration,
    next_seq: u64,
    entries: Vec<Delayed<T>>,
}

impl<T> Default for DelayQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> DelayQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `item` to become due `delay` from now.
    pub fn schedule(&mut self, delay: Duration, item: T) {
        self.entries.push(Delayed {
            due: self.now + delay,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Schedule with a delay in seconds. Negative values are treated as zero.
    pub fn schedule_secs(&mut self, secs: f32, item: T) {
        self.schedule(Duration::from_secs_f32(secs.max(0.0)), item);
    }

    /// Advance the clock and return every item that became due, earliest
    /// first; items due at the same instant keep their scheduling order.
    pub fn tick(&mut self, delta: Duration) -> Vec<T> {
        self.now += delta;
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|entry| entry.due <= now);
        self.entries = pending;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.item).collect()
    }

    /// Drop every pending item.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }
}
