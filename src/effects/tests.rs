//! Effects domain: trigger mapping, particle pool and shake tests.

use bevy::prelude::*;

use super::{
    AudioCue, BurstKind, EffectRequest, EffectsTrigger, FOOTSTEP_CUE_VOLUME, ParticlePool,
    ScreenShake,
};
use crate::movement::FrameReport;

const DT: f32 = 1.0 / 60.0;

fn grounded() -> FrameReport {
    FrameReport {
        grounded: true,
        position: Vec2::new(300.0, 112.0),
        ..Default::default()
    }
}

fn count_cues(requests: &[EffectRequest], wanted: AudioCue) -> usize {
    requests
        .iter()
        .filter(|r| matches!(r, EffectRequest::Cue { cue, .. } if *cue == wanted))
        .count()
}

#[test]
fn test_jump_start_requests_burst_shake_and_cue() {
    let mut trigger = EffectsTrigger::default();
    let report = FrameReport {
        jump_started: true,
        position: Vec2::new(300.0, 140.0),
        ..Default::default()
    };

    let requests = trigger.on_frame(&report, DT);

    assert!(requests.contains(&EffectRequest::Burst {
        kind: BurstKind::Jump,
        position: Vec2::new(300.0, 140.0),
    }));
    assert!(requests.contains(&EffectRequest::Shake {
        duration: 0.08,
        intensity: 2.0,
    }));
    assert!(requests.contains(&EffectRequest::Cue {
        cue: AudioCue::Jump,
        volume: 0.2,
    }));
}

#[test]
fn test_landing_requests_burst_and_shake_only() {
    let mut trigger = EffectsTrigger::default();
    let report = FrameReport {
        landed: true,
        ..grounded()
    };

    let requests = trigger.on_frame(&report, DT);

    assert_eq!(requests.len(), 2);
    assert!(requests.contains(&EffectRequest::Shake {
        duration: 0.1,
        intensity: 3.0,
    }));
}

#[test]
fn test_footsteps_respect_interval() {
    let mut trigger = EffectsTrigger::default();
    let walking = FrameReport {
        walking: true,
        moving_horizontally: true,
        ..grounded()
    };

    let mut steps = 0;
    for _ in 0..50 {
        steps += count_cues(&trigger.on_frame(&walking, DT), AudioCue::Footstep);
    }

    // One immediately, then one per 0.3 s of walking
    assert_eq!(steps, 3);
}

#[test]
fn test_footstep_volume() {
    let mut trigger = EffectsTrigger::default();
    let walking = FrameReport {
        walking: true,
        ..grounded()
    };

    let requests = trigger.on_frame(&walking, DT);

    assert_eq!(
        requests,
        vec![EffectRequest::Cue {
            cue: AudioCue::Footstep,
            volume: FOOTSTEP_CUE_VOLUME,
        }]
    );
}

#[test]
fn test_airborne_motion_requests_trail() {
    let mut trigger = EffectsTrigger::default();
    let airborne = FrameReport {
        moving_horizontally: true,
        moved_horizontally: true,
        position: Vec2::new(10.0, 20.0),
        ..Default::default()
    };

    let requests = trigger.on_frame(&airborne, DT);
    assert_eq!(
        requests,
        vec![EffectRequest::Trail {
            position: Vec2::new(10.0, 20.0)
        }]
    );

    let standing = trigger.on_frame(&grounded(), DT);
    assert!(standing.is_empty());
}

#[test]
fn test_airborne_push_against_world_edge_requests_no_trail() {
    let mut trigger = EffectsTrigger::default();
    let pinned = FrameReport {
        moving_horizontally: true,
        moved_horizontally: false,
        position: Vec2::new(24.0, 300.0),
        ..Default::default()
    };

    assert!(trigger.on_frame(&pinned, DT).is_empty());
}

#[test]
fn test_bursts_spawn_expected_counts() {
    let mut pool = ParticlePool::with_seed(7);

    pool.burst(BurstKind::Jump, Vec2::new(100.0, 100.0));
    assert_eq!(pool.len(), 16);
    assert!(pool.particles.iter().all(|p| p.position.y == 75.0));

    pool.burst(BurstKind::Land, Vec2::new(100.0, 100.0));
    assert_eq!(pool.len(), 28);
    assert!(
        pool.particles[16..]
            .iter()
            .all(|p| p.position.y == 80.0 && p.velocity.y <= 0.2)
    );
}

#[test]
fn test_particle_ranges() {
    let mut pool = ParticlePool::with_seed(3);
    for _ in 0..20 {
        pool.burst(BurstKind::Jump, Vec2::ZERO);
    }

    for particle in &pool.particles {
        assert!((1.0..=5.0).contains(&particle.size));
        assert!((0.2..=0.8).contains(&particle.lifetime));
        assert!(particle.velocity.x.abs() <= 1.5);
    }
}

#[test]
fn test_particles_fall_and_expire() {
    let mut pool = ParticlePool::with_seed(11);
    pool.burst(BurstKind::Land, Vec2::ZERO);
    let before = pool.particles[0];

    pool.update(DT);
    let after = pool.particles[0];
    assert_eq!(after.position, before.position + before.velocity);
    assert!((after.velocity.y - (before.velocity.y - 0.1)).abs() < 1e-6);

    for _ in 0..60 {
        pool.update(DT);
    }
    assert!(pool.is_empty());
}

#[test]
fn test_trail_chance_roughly_one_in_five() {
    let mut pool = ParticlePool::with_seed(42);

    let spawned = (0..1000).filter(|_| pool.maybe_trail(Vec2::ZERO)).count();

    assert!((120..=280).contains(&spawned), "spawned {}", spawned);
    assert_eq!(pool.len(), spawned);
}

#[test]
fn test_shake_offset_bounded_and_expires() {
    let mut shake = ScreenShake::default();
    shake.start(0.1, 3.0);

    for _ in 0..5 {
        shake.update(DT);
        let offset = shake.offset();
        assert!(offset.x.abs() <= 2.11 && offset.y.abs() <= 2.11);
    }

    for _ in 0..5 {
        shake.update(DT);
    }
    assert!(!shake.is_active());
    assert_eq!(shake.offset(), Vec2::ZERO);
}
