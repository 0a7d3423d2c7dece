//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{PlayerRig, despawn_player, spawn_player, sync_player_rig, tick_player};
