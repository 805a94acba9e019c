use super::*;
use crate::{
    animation::spring::settle_frames,
    foundation::core::Vec2,
    motion::{collision::collision_at, reflect::motion_at},
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

fn color(scene: &Scene, f: u64) -> (CollisionState, ColorState) {
    let frame = FrameIndex(f);
    let c = collision_at(scene, &motion_at(scene, frame));
    (c, color_at(scene, frame, &c))
}

#[test]
fn target_hue_wraps_at_360() {
    assert_eq!(target_hue(0, 42.0), 0.0);
    assert_eq!(target_hue(1, 42.0), 42.0);
    assert_eq!(target_hue(9, 42.0), 18.0);
    assert_eq!(target_hue(3, 0.0), 0.0);
}

#[test]
fn first_wall_hit_targets_42_degrees() {
    let scene = scenario();
    let (c, col) = color(&scene, 32);
    assert_eq!(c.total_bounces, 1);
    assert_eq!(col.target_hue_deg, 42.0);
    // The window has just opened: still showing the previous target.
    assert_eq!(col.hue_deg, 0.0);
}

#[test]
fn hue_settles_exactly_after_the_spring_rests() {
    let scene = scenario();
    let settle = settle_frames(scene.fps, scene.config.springs.hue).unwrap();
    assert!(settle < 32);

    let (_, before_hit) = color(&scene, 31);
    assert_eq!(before_hit.hue_deg, 0.0);

    let (_, settled) = color(&scene, 32 + settle);
    assert_eq!(settled.hue_deg, 42.0);
}

#[test]
fn hue_stays_inside_the_easing_window() {
    let scene = Scene::new(&SceneConfig::default());
    for f in 0..3000 {
        let (_, col) = color(&scene, f);
        let (lo, hi) = if col.from_hue_deg <= col.target_hue_deg {
            (col.from_hue_deg, col.target_hue_deg)
        } else {
            (col.target_hue_deg, col.from_hue_deg)
        };
        assert!(col.hue_deg >= lo && col.hue_deg <= hi, "frame {f}");
    }
}

#[test]
fn each_collision_restarts_the_window() {
    let scene = Scene::new(&SceneConfig::default());
    for f in 1..3000 {
        let (c, col) = color(&scene, f);
        if c.just_collided {
            assert_eq!(col.ease, 0.0, "frame {f}");
            assert_eq!(col.hue_deg, col.from_hue_deg, "frame {f}");
        }
    }
}
