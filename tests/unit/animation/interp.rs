use super::*;

#[test]
fn two_knots_interpolate_linearly() {
    assert_eq!(remap_clamped(5.0, [0.0, 10.0], [0.0, 1.0]), 0.5);
    assert!((remap_clamped(0.5, [0.0, 1.0], [1.0, 1.06]) - 1.03).abs() < 1e-12);
}

#[test]
fn clamp_holds_both_ends() {
    assert_eq!(remap_clamped(-4.0, [0.0, 10.0], [2.0, 3.0]), 2.0);
    assert_eq!(remap_clamped(40.0, [0.0, 10.0], [2.0, 3.0]), 3.0);
}

#[test]
fn multi_knot_tables_hold_their_end_values() {
    let input = [0.0, 0.035, 0.12];
    let output = [1.0, 0.65, 0.0];
    assert_eq!(interpolate(-1.0, &input, &output), 1.0);
    assert_eq!(interpolate(2.0, &input, &output), 0.0);
}

#[test]
fn multi_segment_picks_the_right_segment() {
    let knots = Knots {
        input: vec![0.0, 0.035, 0.12],
        output: vec![1.0, 0.65, 0.0],
    };
    assert_eq!(knots.sample(0.0), 1.0);
    assert!((knots.sample(0.035) - 0.65).abs() < 1e-12);
    assert!((knots.sample(0.0775) - 0.325).abs() < 1e-12);
    assert_eq!(knots.sample(0.5), 0.0);
    assert!(knots.is_well_formed());
}

#[test]
fn degenerate_knots_do_not_divide_by_zero() {
    assert_eq!(remap_clamped(3.0, [3.0, 3.0], [0.0, 1.0]), 1.0);
    assert_eq!(remap_clamped(2.0, [3.0, 3.0], [0.0, 1.0]), 0.0);
    assert_eq!(interpolate(9.0, &[1.0], &[7.0]), 7.0);
    assert_eq!(interpolate(9.0, &[], &[]), 9.0);
}

#[test]
fn malformed_knots_are_reported() {
    let knots = Knots {
        input: vec![1.0, 0.0],
        output: vec![0.0, 1.0],
    };
    assert!(!knots.is_well_formed());
}
