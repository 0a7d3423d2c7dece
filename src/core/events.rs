//! Core domain: events for the game flow.

use bevy::ecs::message::Message;

/// Fired when the player walks through the door of the last level
#[derive(Debug)]
pub struct GameCompletedEvent;

impl Message for GameCompletedEvent {}
