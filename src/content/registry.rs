//! ContentRegistry resource holding all loaded content in file order.

use bevy::prelude::*;

use super::data::*;

/// Central registry for all loaded greeting content.
/// Lists keep the order of the data files, which is the display order.
#[derive(Resource, Debug, Clone, Default)]
pub struct ContentRegistry {
    pub companions: Vec<CompanionDef>,
    pub creatures: Vec<CreatureDef>,
    pub hidden_targets: Vec<HiddenTargetDef>,
    pub gallery_cards: Vec<GalleryCardDef>,
    pub greeting: GreetingDef,
}

impl ContentRegistry {
    pub fn companion(&self, id: &str) -> Option<&CompanionDef> {
        self.companions.iter().find(|c| c.id == id)
    }

    pub fn creature(&self, id: &str) -> Option<&CreatureDef> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn hidden_target(&self, id: &str) -> Option<&HiddenTargetDef> {
        self.hidden_targets.iter().find(|t| t.id == id)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Companions: {}\n\
             - Creatures: {}\n\
             - Hidden Targets: {}\n\
             - Gallery Cards: {}\n\
             - Greeting for: {}",
            self.companions.len(),
            self.creatures.len(),
            self.hidden_targets.len(),
            self.gallery_cards.len(),
            self.greeting.recipient,
        )
    }

    /// Returns total count of all loaded list items.
    pub fn total_count(&self) -> usize {
        self.companions.len()
            + self.creatures.len()
            + self.hidden_targets.len()
            + self.gallery_cards.len()
    }
}
