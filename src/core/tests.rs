//! Core domain: run clock and banner tests.

use super::{BANNER_DURATION, LevelBanner, RunClock, format_clock};

#[test]
fn test_format_clock_pads_minutes_and_seconds() {
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(65), "01:05");
    assert_eq!(format_clock(600), "10:00");
}

#[test]
fn test_clock_truncates_to_whole_seconds() {
    let mut clock = RunClock::default();
    clock.tick(59.9);
    assert_eq!(clock.display(), "00:59");

    clock.tick(0.2);
    assert_eq!(clock.display(), "01:00");
}

#[test]
fn test_finished_clock_stops() {
    let mut clock = RunClock::default();
    clock.tick(125.5);

    assert_eq!(clock.finish(), 125);
    clock.tick(30.0);

    assert_eq!(clock.display(), "02:05");
    assert_eq!(clock.final_seconds, Some(125));

    clock.reset();
    assert_eq!(clock.display(), "00:00");
}

#[test]
fn test_banner_shows_for_two_seconds() {
    let mut banner = LevelBanner::default();
    assert!(!banner.is_visible());

    banner.show(3, 7);
    assert_eq!(banner.text, "Level 3");
    assert_eq!(banner.remaining, BANNER_DURATION);
    assert_eq!(banner.generation, Some(7));

    banner.tick(1.5);
    assert!(banner.is_visible());
    banner.tick(0.6);
    assert!(!banner.is_visible());
    assert_eq!(banner.remaining, 0.0);
}
