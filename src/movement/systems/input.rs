//! Movement domain: keyboard sampling and jump edges.

use bevy::prelude::*;

use crate::movement::{InputState, MovementController, MovementTuning, Player};
use crate::physics::{PhysicsFacade, PlatformerEngine};

const JUMP_KEY: KeyCode = KeyCode::Space;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<InputState>,
    mut engine: ResMut<PlatformerEngine>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);

    let Ok(mut controller) = query.single_mut() else {
        return;
    };

    // Edges apply as they arrive, between ticks
    if keyboard.just_pressed(JUMP_KEY) {
        controller.press_jump(&mut input, &tuning);
    }
    if keyboard.just_released(JUMP_KEY) {
        controller.release_jump(&mut input, engine.kinematics_mut(), &tuning);
    }
}
