//! Core domain: the stage sequencer owning forward-only progression.

use bevy::prelude::*;

use crate::core::state::Stage;

/// Holds the active stage and moves it forward one step at a time.
///
/// The Bevy `State<Stage>` mirrors this value; only the sequencer decides
/// when it changes.
#[derive(Resource, Debug, Default)]
pub struct StageSequencer {
    current: Stage,
    advances: u32,
}

impl StageSequencer {
    pub fn current(&self) -> Stage {
        self.current
    }

    /// Number of successful advances since the session started.
    pub fn advances(&self) -> u32 {
        self.advances
    }

    /// Move to the next stage. A no-op at the terminal stage.
    pub fn advance(&mut self) -> Option<Stage> {
        let next = self.current.next()?;
        self.current = next;
        self.advances += 1;
        Some(next)
    }

    /// Advance only if `stage` is the one currently active.
    ///
    /// Completion reports for any other stage are stale and ignored, so a
    /// duplicated report can never skip a stage.
    pub fn complete(&mut self, stage: Stage) -> Option<Stage> {
        if stage != self.current {
            return None;
        }
        self.advance()
    }
}
