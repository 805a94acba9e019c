use super::*;

#[test]
fn frame_range_iterates_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let frames: Vec<_> = r.frames().collect();
    assert_eq!(frames, vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]);
    assert_eq!(r.len_frames(), 3);
    assert!(!r.is_empty());
    assert!(FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap().is_empty());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn prev_saturates_at_zero() {
    assert_eq!(FrameIndex(0).prev(), FrameIndex(0));
    assert_eq!(FrameIndex(7).prev(), FrameIndex(6));
}

#[test]
fn whole_fps_floors_at_one() {
    assert_eq!(Fps::whole(0).get(), 1);
    assert_eq!(Fps::whole(30).as_f64(), 30.0);
    assert_eq!(Fps::whole(30).frames_to_secs(45), 1.5);
}

#[test]
fn secs_to_frames_ceil_rounds_up() {
    let fps = Fps::whole(30);
    assert_eq!(fps.secs_to_frames_ceil(1.0), 30);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 31);
    assert_eq!(fps.secs_to_frames_ceil(-3.0), 0);
}

#[test]
fn rgb_alpha_premultiplies() {
    let c = Rgba8Premul::from_rgb_alpha([255, 255, 255], 0.5);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    let clear = Rgba8Premul::from_rgb_alpha([10, 20, 30], 0.0);
    assert_eq!([clear.r, clear.g, clear.b, clear.a], [0, 0, 0, 0]);
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn transform_scales_around_anchor() {
    let t = Transform2D {
        scale: Vec2::new(2.0, 2.0),
        anchor: Vec2::new(5.0, 5.0),
        ..Transform2D::default()
    };
    let p = t.to_affine() * kurbo::Point::new(5.0, 5.0);
    assert!((p.x - 5.0).abs() < 1e-12);
    assert!((p.y - 5.0).abs() < 1e-12);
}
