//! Core domain: one-way signals between screens and the sequencer.

use bevy::ecs::message::Message;

use crate::core::resources::CompanionChoice;
use crate::core::state::Stage;

/// Written by a screen once its completion condition is met
#[derive(Debug, Clone)]
pub struct StageCompletedEvent {
    pub stage: Stage,
}

impl Message for StageCompletedEvent {}

/// Written once when the companion choice is committed
#[derive(Debug, Clone)]
pub struct CompanionChosenEvent {
    pub companion: CompanionChoice,
}

impl Message for CompanionChosenEvent {}
