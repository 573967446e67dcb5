//! Core domain: session-wide state threaded through every stage.

use bevy::prelude::*;

use crate::content::{CompanionDef, CompanionStatsDef};

/// The companion picked on the selection screen. Never mutated once chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanionChoice {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub description: String,
    pub stats: CompanionStatsDef,
    pub accent: Color,
}

impl CompanionChoice {
    pub fn from_def(def: &CompanionDef) -> Self {
        let (r, g, b) = def.accent;
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            image: def.image.clone(),
            category: def.category.clone(),
            description: def.description.clone(),
            stats: def.stats.clone(),
            accent: Color::srgb_u8(r, g, b),
        }
    }
}

/// A creature caught during the catching stage, kept for the final message.
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtCreature {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Session state shared across stages.
#[derive(Resource, Debug, Default)]
pub struct Session {
    companion: Option<CompanionChoice>,
    caught: Vec<CaughtCreature>,
}

impl Session {
    /// Store the chosen companion. Returns `false` if one was already chosen.
    pub fn choose_companion(&mut self, companion: CompanionChoice) -> bool {
        if self.companion.is_some() {
            return false;
        }
        self.companion = Some(companion);
        true
    }

    pub fn companion(&self) -> Option<&CompanionChoice> {
        self.companion.as_ref()
    }

    pub fn record_caught(&mut self, creature: CaughtCreature) {
        self.caught.push(creature);
    }

    pub fn caught(&self) -> &[CaughtCreature] {
        &self.caught
    }
}
