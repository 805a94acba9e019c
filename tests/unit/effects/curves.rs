use super::*;
use crate::{
    animation::spring::settle_frames,
    motion::{collision::collision_at, reflect::motion_at},
    scene::config::SceneConfig,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn scene() -> Scene {
    Scene::new(&SceneConfig::default())
}

#[test]
fn entrance_starts_hidden_and_low() {
    let s = scene();
    let e = entrance(&s, FrameIndex(0));
    assert_eq!(e.opacity, 0.0);
    assert_eq!(e.scale, 0.0);
    assert_eq!(e.offset_y, s.config.juice.intro_offset_px);
}

#[test]
fn entrance_settles_in_place() {
    let s = scene();
    let rest = settle_frames(s.fps, s.config.springs.intro).unwrap();
    let e = entrance(&s, FrameIndex(rest.max(s.config.timing.intro_frames)));
    assert_eq!(e.opacity, 1.0);
    assert_eq!(e.scale, 1.0);
    assert_eq!(e.offset_y, 0.0);
}

#[test]
fn icon_waits_for_its_delay() {
    let s = scene();
    let delay = s.config.timing.icon_delay_frames;
    for f in 0..=delay {
        let icon = icon_entrance(&s, FrameIndex(f));
        assert_eq!(icon.progress, 0.0, "frame {f}");
        assert_eq!(icon.opacity, 0.0, "frame {f}");
        assert_eq!(icon.offset_y, s.config.juice.icon_offset_px, "frame {f}");
    }
    assert!(icon_entrance(&s, FrameIndex(delay + 1)).progress > 0.0);

    let rest = settle_frames(s.fps, s.config.springs.icon).unwrap();
    let settled = icon_entrance(&s, FrameIndex(delay + rest));
    assert!(approx(settled.opacity, s.config.juice.icon_opacity));
    assert_eq!(settled.offset_y, 0.0);
}

#[test]
fn hit_progress_follows_the_knot_table() {
    let s = scene();
    assert_eq!(hit_progress(&s, 0.0), 1.0);
    assert!(approx(hit_progress(&s, 0.035), 0.65));
    assert_eq!(hit_progress(&s, 0.12), 0.0);
    assert_eq!(hit_progress(&s, 0.5), 0.0);
}

#[test]
fn no_hit_means_no_punch_squash_or_glow() {
    let s = scene();
    for f in [0, 7, 90, 1000] {
        assert_eq!(punch(&s, FrameIndex(f), 0.0), 1.0);
    }
    assert_eq!(squash(&s, 0.0), Vec2::new(1.0, 1.0));
    let g = glow(&s, 0.0);
    assert_eq!(g.strength, 0.0);
    assert_eq!(g.blur_px, 0.0);
}

#[test]
fn full_hit_reaches_configured_peaks() {
    let s = scene();
    let j = &s.config.juice;

    let p = punch(&s, FrameIndex(10_000), 1.0);
    assert!(approx(p, j.punch_scale));

    let sq = squash(&s, 1.0);
    assert!(approx(sq.x, j.squash.x));
    assert!(approx(sq.y, j.squash.y));

    let g = glow(&s, 1.0);
    assert_eq!(g.strength, 1.0);
    assert!(approx(g.blur_px, j.hit_blur_px));
}

#[test]
fn punch_never_exceeds_its_peak() {
    let s = scene();
    for f in 0..200 {
        for hit in [0.25, 0.5, 1.0] {
            let p = punch(&s, FrameIndex(f), hit);
            let peak = 1.0 + (s.config.juice.punch_scale - 1.0) * hit;
            assert!(p >= 1.0 && p <= peak + 1e-9, "frame {f} hit {hit}: {p}");
        }
    }
}

#[test]
fn breathing_and_shimmer_loop() {
    let s = scene();
    let t = &s.config.timing;
    assert!(approx(icon_breathe(&s, FrameIndex(0)), 1.0 + 0.5 * s.config.juice.breathe_amplitude));
    assert!(approx(
        icon_breathe(&s, FrameIndex(t.breathe_period_frames)),
        icon_breathe(&s, FrameIndex(0))
    ));

    assert_eq!(shimmer_shift(&s, FrameIndex(0)), 0.0);
    assert_eq!(shimmer_shift(&s, FrameIndex(t.shimmer_period_frames)), 0.0);
    let half = shimmer_shift(&s, FrameIndex(t.shimmer_period_frames / 2));
    assert!(approx(half, s.config.juice.shimmer_travel_px * 0.5));
}

#[test]
fn accent_fades_in_after_the_icon_delay() {
    let s = scene();
    let t = &s.config.timing;
    assert_eq!(accent_opacity(&s, FrameIndex(0)), 0.0);
    assert_eq!(accent_opacity(&s, FrameIndex(t.icon_delay_frames)), 0.0);
    let end = t.icon_delay_frames + t.accent_fade_frames;
    assert!(approx(accent_opacity(&s, FrameIndex(end)), s.config.juice.accent_opacity));
    assert!(approx(accent_opacity(&s, FrameIndex(end + 500)), s.config.juice.accent_opacity));
}

#[test]
fn curves_stay_bounded_across_collisions() {
    let s = scene();
    for f in 0..3000 {
        let frame = FrameIndex(f);
        let c = collision_at(&s, &motion_at(&s, frame));
        let cv = curves_at(&s, frame, c.proximity);
        assert!((0.0..=1.0).contains(&cv.hit_progress), "frame {f}");
        assert!((0.0..=1.0).contains(&cv.glow.strength), "frame {f}");
        assert!((0.0..=1.0).contains(&cv.entrance.opacity), "frame {f}");
        assert!(cv.squash.x.is_finite() && cv.squash.y.is_finite(), "frame {f}");
        assert!(cv.punch_scale >= 1.0, "frame {f}");
    }
}
