//! Sprites domain: animation state machine tests.

use super::{AnimationInput, AnimationState, FRAME_DELAY, PlayerAnimation, PlayerTextures};
use crate::movement::Facing;

fn walking() -> AnimationInput {
    AnimationInput {
        moving: true,
        grounded: true,
        ..Default::default()
    }
}

#[test]
fn test_state_priority() {
    let mut animation = PlayerAnimation::default();

    animation.update(
        0.0,
        AnimationInput {
            on_ladder: true,
            jumping: true,
            moving: true,
            ..Default::default()
        },
    );
    assert_eq!(animation.state, AnimationState::Ladder);

    animation.update(
        0.0,
        AnimationInput {
            moving: true,
            grounded: false,
            ..Default::default()
        },
    );
    assert_eq!(animation.state, AnimationState::Jump);

    animation.update(0.0, walking());
    assert_eq!(animation.state, AnimationState::Walk);

    animation.update(
        0.0,
        AnimationInput {
            grounded: true,
            ..Default::default()
        },
    );
    assert_eq!(animation.state, AnimationState::Idle);
}

#[test]
fn test_frame_advances_by_one_at_delay() {
    let mut animation = PlayerAnimation::default();

    animation.update(0.1, walking());
    assert_eq!(animation.current_frame, 0);

    animation.update(0.1, walking());
    assert_eq!(animation.current_frame, 1);
    assert_eq!(animation.frame_timer, 0.0);
}

#[test]
fn test_walk_wraps_after_last_frame() {
    let mut animation = PlayerAnimation {
        state: AnimationState::Walk,
        current_frame: 7,
        ..Default::default()
    };

    animation.update(FRAME_DELAY, walking());

    assert_eq!(animation.current_frame, 0);
}

#[test]
fn test_not_animating_always_frame_zero() {
    let mut animation = PlayerAnimation {
        current_frame: 5,
        ..Default::default()
    };

    // Idle on the ground
    animation.update(
        1.0,
        AnimationInput {
            grounded: true,
            ..Default::default()
        },
    );
    assert_eq!(animation.current_frame, 0);

    // Falling without rising
    animation.current_frame = 3;
    animation.update(1.0, AnimationInput::default());
    assert_eq!(animation.state, AnimationState::Jump);
    assert_eq!(animation.current_frame, 0);

    // Holding still on a ladder
    animation.current_frame = 3;
    animation.update(
        1.0,
        AnimationInput {
            on_ladder: true,
            ..Default::default()
        },
    );
    assert_eq!(animation.current_frame, 0);
}

#[test]
fn test_jump_cycles_four_frames_while_rising() {
    let mut animation = PlayerAnimation::default();
    let rising = AnimationInput {
        jumping: true,
        ..Default::default()
    };

    for _ in 0..4 {
        animation.update(FRAME_DELAY, rising);
    }

    assert_eq!(animation.state, AnimationState::Jump);
    assert_eq!(animation.current_frame, 0);
}

#[test]
fn test_ladder_climb_uses_walk_frames() {
    let mut animation = PlayerAnimation::default();
    let climbing = AnimationInput {
        on_ladder: true,
        moving_on_ladder: true,
        ..Default::default()
    };

    animation.update(FRAME_DELAY, climbing);
    animation.update(FRAME_DELAY, climbing);

    assert_eq!(animation.current_frame, 2);
    assert_eq!(animation.current_sprite_key(), "walk_3");
}

#[test]
fn test_facing_flips_sprite() {
    let mut animation = PlayerAnimation::default();
    assert!(!animation.flip_x());

    animation.update(
        0.0,
        AnimationInput {
            facing: Facing::Left,
            grounded: true,
            ..Default::default()
        },
    );

    assert!(animation.flip_x());
    assert_eq!(animation.current_sprite_key(), "idle");
}

#[test]
fn test_sprite_keys_cover_every_frame() {
    let keys = PlayerTextures::sprite_keys();

    assert_eq!(keys.len(), 13);
    assert!(keys.contains(&"idle".to_string()));
    assert!(keys.contains(&"walk_8".to_string()));
    assert!(keys.contains(&"jump_4".to_string()));
}
