//! Core domain: the stage enumeration driving which screen is active.

use bevy::prelude::*;

/// One screen of the greeting. Stages only ever move forward.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum Stage {
    #[default]
    Intro,
    Selection,
    Catching,
    CakeCutting,
    Gallery,
    SeekAndFind,
    Final,
}

impl Stage {
    /// Every stage in presentation order.
    pub const ORDER: [Stage; 7] = [
        Stage::Intro,
        Stage::Selection,
        Stage::Catching,
        Stage::CakeCutting,
        Stage::Gallery,
        Stage::SeekAndFind,
        Stage::Final,
    ];

    /// The stage that follows this one, `None` for the terminal stage.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Intro => Some(Stage::Selection),
            Stage::Selection => Some(Stage::Catching),
            Stage::Catching => Some(Stage::CakeCutting),
            Stage::CakeCutting => Some(Stage::Gallery),
            Stage::Gallery => Some(Stage::SeekAndFind),
            Stage::SeekAndFind => Some(Stage::Final),
            Stage::Final => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Position of the stage in [`Stage::ORDER`].
    pub fn index(self) -> usize {
        Stage::ORDER
            .iter()
            .position(|stage| *stage == self)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Intro => "Intro",
            Stage::Selection => "Companion Selection",
            Stage::Catching => "Catching",
            Stage::CakeCutting => "Cake Cutting",
            Stage::Gallery => "Gallery",
            Stage::SeekAndFind => "Seek and Find",
            Stage::Final => "Final Message",
        }
    }
}
