//! Level domain: tests for level building, pickups and progression.

use bevy::prelude::*;

use super::{DOOR_SIZE, Level, LevelAdvance, LevelSession, WorldBounds};
use crate::content::{LadderDef, LevelDef, PlatformDef};

fn one_key_level(id: &str) -> LevelDef {
    LevelDef {
        id: id.to_string(),
        name: id.to_string(),
        spawn: (100.0, 150.0),
        background: (70, 130, 180),
        platforms: vec![PlatformDef {
            x: 0.0,
            y: 64.0,
            tiles: 4,
            tile_size: (64.0, 32.0),
        }],
        ladders: vec![LadderDef {
            x: 600.0,
            y_start: 65.0,
            y_end: 320.0,
        }],
        keys: vec![(250.0, 200.0)],
        doors: vec![(400.0, 144.0)],
    }
}

fn player_at(x: f32, y: f32) -> Rect {
    Rect::from_center_size(Vec2::new(x, y), Vec2::new(48.0, 64.0))
}

#[test]
fn test_level_expands_tile_runs() {
    let level = Level::from_def(&one_key_level("a"));

    assert_eq!(level.walls.len(), 4);
    assert_eq!(level.walls[1].center(), Vec2::new(64.0, 64.0));
    assert_eq!(level.walls[1].size(), Vec2::new(64.0, 32.0));
    assert_eq!(level.ladders.len(), 4);
    assert_eq!(level.doors[0].size(), DOOR_SIZE);
    assert_eq!(level.spawn, Vec2::new(100.0, 150.0));
}

#[test]
fn test_key_edge_contact_does_not_collect() {
    let mut level = Level::from_def(&one_key_level("a"));

    // Key spans 234..266; a player at x = 210 only touches it
    assert!(level.collect_keys(player_at(210.0, 200.0)).is_empty());
    assert_eq!(level.collect_keys(player_at(211.0, 200.0)), vec![0]);
}

#[test]
fn test_collecting_key_removes_it() {
    let mut level = Level::from_def(&one_key_level("a"));

    assert!(level.collect_keys(player_at(100.0, 112.0)).is_empty());
    assert_eq!(level.keys_remaining(), 1);

    assert_eq!(level.collect_keys(player_at(250.0, 200.0)), vec![0]);
    assert_eq!(level.keys_remaining(), 0);

    // Consumed keys do not come back
    assert!(level.collect_keys(player_at(250.0, 200.0)).is_empty());
}

#[test]
fn test_door_locked_until_keys_collected() {
    let mut level = Level::from_def(&one_key_level("a"));
    let at_door = player_at(400.0, 112.0);

    assert!(!level.door_unlocked_at(at_door));

    level.collect_keys(player_at(250.0, 200.0));
    assert!(level.door_unlocked_at(at_door));
    assert!(!level.door_unlocked_at(player_at(100.0, 112.0)));
}

#[test]
fn test_collect_key_then_door_advances_level() {
    let mut session = LevelSession::new(vec![one_key_level("a"), one_key_level("b")]);

    let collected = session.current_mut().collect_keys(player_at(250.0, 200.0));
    assert_eq!(collected.len(), 1);
    assert_eq!(session.current().keys_remaining(), 0);
    assert!(session.current().door_unlocked_at(player_at(400.0, 112.0)));

    assert_eq!(session.advance(), LevelAdvance::Next(1));
    assert_eq!(session.index(), 1);
    assert_eq!(session.current().id, "b");
    assert!(!session.is_completed());
}

#[test]
fn test_advancing_past_last_level_completes_game() {
    let mut session = LevelSession::new(vec![one_key_level("only")]);
    let generation = session.generation();

    assert_eq!(session.advance(), LevelAdvance::Completed);
    assert!(session.is_completed());
    assert_eq!(session.index(), 0);
    assert_eq!(session.generation(), generation);
}

#[test]
fn test_switch_out_of_range_is_noop() {
    let mut session = LevelSession::new(vec![one_key_level("a"), one_key_level("b")]);
    let generation = session.generation();

    assert!(!session.switch_to(5));
    assert_eq!(session.index(), 0);
    assert_eq!(session.generation(), generation);
}

#[test]
fn test_restart_restores_keys_and_bumps_generation() {
    let mut session = LevelSession::new(vec![one_key_level("a")]);
    session.current_mut().collect_keys(player_at(250.0, 200.0));
    let generation = session.generation();

    session.restart();

    assert_eq!(session.current().keys_remaining(), 1);
    assert_eq!(session.generation(), generation + 1);
}

#[test]
fn test_cycle_wraps_both_directions() {
    let mut session = LevelSession::new(vec![
        one_key_level("a"),
        one_key_level("b"),
        one_key_level("c"),
    ]);

    assert_eq!(session.cycle(-1), 2);
    assert_eq!(session.current().id, "c");
    assert_eq!(session.cycle(1), 0);
    assert_eq!(session.current().id, "a");
}

#[test]
fn test_empty_level_list_uses_fallback() {
    let session = LevelSession::new(Vec::new());
    assert_eq!(session.level_count(), 1);
    assert_eq!(session.current().id, LevelDef::fallback().id);
}

#[test]
fn test_world_bounds_contains_edges() {
    let bounds = WorldBounds::default();
    assert!(bounds.contains(Vec2::new(0.0, 0.0)));
    assert!(bounds.contains(Vec2::new(2000.0, 900.0)));
    assert!(!bounds.contains(Vec2::new(2000.1, 10.0)));
    assert_eq!(bounds.size(), Vec2::new(2000.0, 900.0));
}
