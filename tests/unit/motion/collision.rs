use super::*;
use crate::{
    foundation::core::Vec2,
    motion::reflect::motion_at,
    scene::config::SceneConfig,
};

fn scenario() -> Scene {
    let mut cfg = SceneConfig::default();
    cfg.fps = 30;
    cfg.padding = 24.0;
    cfg.object_size = Vec2::new(200.0, 100.0);
    cfg.canvas.width = 24 + 600 + 200 + 24;
    cfg.canvas.height = 24 + 600 + 100 + 24;
    cfg.speed = Vec2::new(540.0, 100.0);
    cfg.start = Vec2::new(50.0, 24.0);
    Scene::new(&cfg)
}

fn at(scene: &Scene, f: u64) -> CollisionState {
    collision_at(scene, &motion_at(scene, FrameIndex(f)))
}

#[test]
fn wall_distance_is_symmetric() {
    assert_eq!(wall_distance(0.0), 0.0);
    assert_eq!(wall_distance(3.0), 0.0);
    assert_eq!(wall_distance(0.25), 0.25);
    assert_eq!(wall_distance(1.75), 0.25);
    assert_eq!(wall_distance(2.5), 0.5);
}

#[test]
fn first_hit_is_flagged_once() {
    let scene = scenario();
    let before = at(&scene, 31);
    let hit = at(&scene, 32);
    let after = at(&scene, 33);
    assert_eq!(before.total_bounces, 0);
    assert!(!before.just_collided);
    assert_eq!(before.last_collision, None);

    assert_eq!(hit.total_bounces, 1);
    assert!(hit.just_collided);
    assert_eq!(hit.last_collision, Some(FrameIndex(32)));
    assert_eq!(hit.frames_since_collision(FrameIndex(32)), Some(0));

    assert!(!after.just_collided);
    assert_eq!(after.frames_since_collision(FrameIndex(33)), Some(1));
}

#[test]
fn frame_zero_compares_against_itself() {
    let scene = scenario();
    assert!(!at(&scene, 0).just_collided);
}

#[test]
fn totals_never_decrease_and_step_by_one_or_two() {
    let scene = Scene::new(&SceneConfig::default());
    let mut prev = at(&scene, 0);
    for f in 1..5000 {
        let cur = at(&scene, f);
        let delta = cur.total_bounces - prev.total_bounces;
        assert!(delta <= 2, "jump of {delta} at {f}");
        assert_eq!(cur.just_collided, delta > 0);
        if cur.just_collided {
            assert_eq!(cur.last_collision, Some(FrameIndex(f)));
        }
        assert!(cur.last_collision >= prev.last_collision);
        prev = cur;
    }
}

#[test]
fn corner_hit_counts_twice() {
    let mut cfg = SceneConfig::default();
    cfg.fps = 30;
    cfg.padding = 0.0;
    cfg.object_size = Vec2::new(100.0, 100.0);
    cfg.canvas.width = 400;
    cfg.canvas.height = 400;
    cfg.speed = Vec2::new(300.0, 300.0);
    cfg.start = Vec2::new(0.0, 0.0);
    let scene = Scene::new(&cfg);

    // Both axes reach the far wall after exactly one second.
    let hit = at(&scene, 30);
    assert_eq!(at(&scene, 29).total_bounces, 0);
    assert_eq!(hit.total_bounces, 2);
    assert!(hit.just_collided);
    assert_eq!(hit.proximity, 0.0);
}

#[test]
fn proximity_is_small_near_walls_and_large_mid_flight() {
    let scene = scenario();
    assert!(at(&scene, 32).proximity < 0.01);
    assert!(at(&scene, 0).proximity < 0.05);
    // x is mid-flight around frame 64 but y has barely left its wall, so y wins.
    let mid = at(&scene, 64);
    assert!(mid.proximity <= wall_distance(motion_at(&scene, FrameIndex(64)).y.cycles));
    for f in 0..2000 {
        let p = at(&scene, f).proximity;
        assert!((0.0..=0.5).contains(&p));
    }
}

#[test]
fn wall_distance_peaks_at_half_a_travel() {
    assert_eq!(wall_distance(0.0), 0.0);
    assert_eq!(wall_distance(0.5), 0.5);
    assert_eq!(wall_distance(1.5), 0.5);
    assert_eq!(wall_distance(2.0), 0.0);
    assert_eq!(wall_distance(3.25), 0.25);
    assert_eq!(wall_distance(3.75), 0.25);
}
