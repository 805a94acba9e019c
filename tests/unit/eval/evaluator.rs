use super::*;
use crate::{eval::fingerprint::fingerprint_layers, scene::config::SceneConfig};

fn scene() -> Scene {
    Scene::new(&SceneConfig::default())
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn eval_frame_is_idempotent() {
    let s = scene();
    let a = Evaluator::eval_frame(&s, FrameIndex(500));
    let b = Evaluator::eval_frame(&s, FrameIndex(500));
    assert_eq!(a, b);
    assert_eq!(a.frame, FrameIndex(500));
    assert_eq!(a.layers.len(), 8);
}

#[test]
fn out_of_order_matches_in_order() {
    let s = scene();
    let forward: Vec<_> = (0..200).map(|f| Evaluator::eval_frame(&s, FrameIndex(f))).collect();
    for f in (0..200).rev() {
        assert_eq!(Evaluator::eval_frame(&s, FrameIndex(f)), forward[f as usize]);
    }
}

#[test]
fn sequential_range_keeps_frame_order() {
    let s = scene();
    let frames = Evaluator::eval_range(&s, range(10, 40), &EvalThreading::default()).unwrap();
    assert_eq!(frames.len(), 30);
    for (i, fr) in frames.iter().enumerate() {
        assert_eq!(fr.frame, FrameIndex(10 + i as u64));
    }
}

#[test]
fn parallel_range_matches_sequential() {
    let s = scene();
    let r = range(0, 257);
    let seq = Evaluator::eval_range(&s, r, &EvalThreading::default()).unwrap();
    let par = Evaluator::eval_range(
        &s,
        r,
        &EvalThreading {
            parallel: true,
            chunk_size: 16,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), par.len());
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.frame, b.frame);
        assert_eq!(fingerprint_layers(&a.layers), fingerprint_layers(&b.layers));
    }
}

#[test]
fn zero_chunk_size_still_covers_the_range() {
    let s = scene();
    let frames = Evaluator::eval_range(
        &s,
        range(5, 9),
        &EvalThreading {
            parallel: true,
            chunk_size: 0,
            threads: Some(1),
        },
    )
    .unwrap();
    let idx: Vec<u64> = frames.iter().map(|f| f.frame.0).collect();
    assert_eq!(idx, vec![5, 6, 7, 8]);
}

#[test]
fn empty_range_is_rejected() {
    let s = scene();
    let err = Evaluator::eval_range(&s, range(3, 3), &EvalThreading::default()).unwrap_err();
    assert!(matches!(err, RicochetError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let s = scene();
    let err = Evaluator::eval_range(
        &s,
        range(0, 4),
        &EvalThreading {
            parallel: true,
            chunk_size: 2,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, RicochetError::Validation(_)));
}
