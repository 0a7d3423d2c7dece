//! Physics domain: tests for the kinematic platformer engine.

use bevy::prelude::*;

use super::{GameLayer, Obstacle, PhysicsFacade, PlatformerEngine, PlayerKinematics, REFERENCE_HZ};

const DT: f32 = 1.0 / REFERENCE_HZ;
const PLAYER_SIZE: Vec2 = Vec2::new(48.0, 64.0);

fn floor() -> Rect {
    // Top surface at y = 80
    Rect::from_center_size(Vec2::new(1000.0, 64.0), Vec2::new(2000.0, 32.0))
}

fn engine_at(center: Vec2, walls: Vec<Rect>, ladders: Vec<Rect>) -> PlatformerEngine {
    PlatformerEngine::new(PlayerKinematics::new(center, PLAYER_SIZE), 4.0, walls, ladders)
}

#[test]
fn test_touching_edges_do_not_overlap() {
    // Player box spans 76..124 horizontally when centered at x = 100
    let wall = Obstacle::new(Rect::new(124.0, 0.0, 200.0, 200.0), GameLayer::Ground, PLAYER_SIZE);
    assert!(!wall.overlaps(Vec2::new(100.0, 100.0)));
    assert!(wall.overlaps(Vec2::new(101.0, 100.0)));

    // Corner contact stays a touch
    assert!(!wall.overlaps(Vec2::new(100.0, 232.0)));
    assert!(wall.overlaps(Vec2::new(101.0, 231.0)));
}

#[test]
fn test_obstacle_layer_filtering() {
    let ladder = Obstacle::new(Rect::new(0.0, 0.0, 64.0, 64.0), GameLayer::Ladder, PLAYER_SIZE);

    assert!(ladder.in_mask(GameLayer::Ladder));
    assert!(!ladder.in_mask(GameLayer::Ground));
    assert!(ladder.in_mask([GameLayer::Ground, GameLayer::Ladder]));
}

#[test]
fn test_ladder_never_blocks_movement() {
    let ladder = Rect::new(200.0, 80.0, 264.0, 400.0);
    let mut engine = engine_at(Vec2::new(170.0, 112.0), vec![floor()], vec![ladder]);

    for _ in 0..5 {
        engine.set_desired_velocity(6.0, engine.kinematics().velocity.y);
        engine.step(DT);
    }

    assert_eq!(engine.kinematics().center.x, 200.0);
    assert!(engine.query_on_ladder());
    assert_eq!(engine.count(GameLayer::Ground), 1);
    assert_eq!(engine.count(GameLayer::Ladder), 1);
}

#[test]
fn test_standing_on_floor_is_grounded() {
    let engine = engine_at(Vec2::new(100.0, 112.0), vec![floor()], vec![]);
    assert!(engine.query_grounded(6.0));
}

#[test]
fn test_hovering_beyond_tolerance_is_not_grounded() {
    let engine = engine_at(Vec2::new(100.0, 120.0), vec![floor()], vec![]);
    assert!(!engine.query_grounded(6.0));
    assert!(engine.query_grounded(10.0));
}

#[test]
fn test_gravity_is_cancelled_by_floor() {
    let mut engine = engine_at(Vec2::new(100.0, 112.0), vec![floor()], vec![]);
    engine.step(DT);

    assert_eq!(engine.kinematics().center.y, 112.0);
    assert_eq!(engine.kinematics().velocity.y, 0.0);
    assert!(engine.query_grounded(6.0));
}

#[test]
fn test_falling_player_lands_on_floor() {
    let mut engine = engine_at(Vec2::new(100.0, 400.0), vec![floor()], vec![]);

    for _ in 0..120 {
        engine.step(DT);
    }

    assert_eq!(engine.kinematics().center.y, 112.0);
    assert_eq!(engine.kinematics().velocity.y, 0.0);
}

#[test]
fn test_fast_fall_does_not_tunnel_through_thin_platform() {
    let thin = Rect::from_center_size(Vec2::new(500.0, 64.0), Vec2::new(1000.0, 4.0));
    let mut engine = engine_at(Vec2::new(100.0, 200.0), vec![thin], vec![]);
    engine.kinematics_mut().velocity.y = -100.0;

    engine.step(DT);

    assert_eq!(engine.kinematics().center.y, 98.0);
    assert_eq!(engine.kinematics().velocity.y, 0.0);
}

#[test]
fn test_wall_blocks_horizontal_movement() {
    let wall = Rect::new(200.0, 80.0, 264.0, 400.0);
    let mut engine = engine_at(Vec2::new(170.0, 112.0), vec![floor(), wall], vec![]);

    for _ in 0..5 {
        engine.set_desired_velocity(6.0, engine.kinematics().velocity.y);
        engine.step(DT);
    }

    assert_eq!(engine.kinematics().center.x, 176.0);
    assert_eq!(engine.kinematics().center.y, 112.0);
}

#[test]
fn test_ceiling_stops_ascent() {
    let ceiling = Rect::new(0.0, 200.0, 400.0, 232.0);
    let mut engine = engine_at(Vec2::new(100.0, 112.0), vec![floor(), ceiling], vec![]);
    engine.command_jump(20.0);

    for _ in 0..10 {
        engine.step(DT);
        assert!(engine.kinematics().top() <= 200.0);
    }
}

#[test]
fn test_ladder_suspends_gravity() {
    let ladder = Rect::from_center_size(Vec2::new(100.0, 300.0), Vec2::new(64.0, 256.0));
    let mut engine = engine_at(Vec2::new(100.0, 300.0), vec![floor()], vec![ladder]);
    assert!(engine.query_on_ladder());

    engine.set_desired_velocity(0.0, 0.0);
    engine.step(DT);

    assert_eq!(engine.kinematics().center.y, 300.0);
    assert_eq!(engine.kinematics().velocity.y, 0.0);
}

#[test]
fn test_command_jump_sets_vertical_speed() {
    let mut engine = engine_at(Vec2::new(100.0, 112.0), vec![floor()], vec![]);
    engine.set_desired_velocity(6.0, 0.0);
    engine.command_jump(20.0);

    assert_eq!(engine.kinematics().velocity, Vec2::new(6.0, 20.0));
}

#[test]
fn test_teleport_clears_velocity() {
    let mut kinematics = PlayerKinematics::new(Vec2::new(10.0, 10.0), PLAYER_SIZE);
    kinematics.velocity = Vec2::new(3.0, -9.0);
    kinematics.teleport(Vec2::new(128.0, 256.0));

    assert_eq!(kinematics.center, Vec2::new(128.0, 256.0));
    assert_eq!(kinematics.velocity, Vec2::ZERO);
}
