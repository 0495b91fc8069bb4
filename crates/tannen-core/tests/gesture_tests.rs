// Host-side tests for the pure gesture classifier.

use glam::{Vec2, Vec3};
use tannen_core::{
    classify, pinch_distance, GestureSignal, HandFrame, ANCHOR_KNUCKLE, FINGER_PIPS, FINGER_TIPS,
    INDEX_TIP, LANDMARK_COUNT, PINCH_DISTANCE, THUMB_TIP,
};

fn base_points() -> [Vec3; LANDMARK_COUNT] {
    [Vec3::new(0.5, 0.5, 0.0); LANDMARK_COUNT]
}

/// All four fingertips above their PIP joints, thumb far from the index tip.
fn open_palm_frame() -> HandFrame {
    let mut points = base_points();
    for tip in FINGER_TIPS {
        points[tip] = Vec3::new(0.5, 0.3, 0.0);
    }
    points[THUMB_TIP] = Vec3::new(0.1, 0.5, 0.0);
    HandFrame::new(points)
}

/// `folded` of the four fingertips dropped below their PIP joints.
fn folded_frame(folded: usize) -> HandFrame {
    let mut points = base_points();
    for (i, tip) in FINGER_TIPS.iter().enumerate() {
        let y = if i < folded { 0.7 } else { 0.3 };
        points[*tip] = Vec3::new(0.5, y, 0.0);
    }
    points[THUMB_TIP] = Vec3::new(0.1, 0.6, 0.0);
    HandFrame::new(points)
}

#[test]
fn absent_hand_is_the_zero_signal() {
    let signal = classify(None);
    assert_eq!(signal, GestureSignal::default());
    assert!(!signal.is_fist && !signal.is_open_palm && !signal.is_pinching);
    assert_eq!(signal.hand_pos, Vec2::ZERO);
}

#[test]
fn three_of_four_folded_tips_make_a_fist() {
    for folded in 3..=4 {
        let signal = classify(Some(&folded_frame(folded)));
        assert!(signal.is_fist, "{folded} folded tips should be a fist");
        assert!(!signal.is_open_palm);
    }
}

#[test]
fn two_folded_tips_are_neither_fist_nor_palm() {
    let signal = classify(Some(&folded_frame(2)));
    assert!(!signal.is_fist);
    // Not all tips are extended either.
    assert!(!signal.is_open_palm);
}

#[test]
fn all_tips_extended_is_an_open_palm() {
    let signal = classify(Some(&open_palm_frame()));
    assert!(signal.is_open_palm);
    assert!(!signal.is_fist);
}

#[test]
fn fist_and_open_palm_are_never_both_true() {
    // Sweep every fold count; the flags must stay exclusive throughout.
    for folded in 0..=4 {
        let signal = classify(Some(&folded_frame(folded)));
        assert!(
            !(signal.is_fist && signal.is_open_palm),
            "both flags true at {folded} folded tips"
        );
    }
    let signal = classify(Some(&open_palm_frame()));
    assert!(!(signal.is_fist && signal.is_open_palm));
}

#[test]
fn tip_exactly_level_with_pip_is_not_folded() {
    // Strict inequality both ways: a tip level with its joint counts for
    // neither the fist nor the extended test.
    let frame = HandFrame::new(base_points());
    let signal = classify(Some(&frame));
    assert!(!signal.is_fist);
    assert!(!signal.is_open_palm);
}

#[test]
fn pinch_requires_strictly_closer_than_threshold() {
    // Distance lands one float ulp above the 0.05 threshold: not a pinch.
    let mut points = base_points();
    points[THUMB_TIP] = Vec3::new(0.5, 0.5, 0.0);
    points[INDEX_TIP] = Vec3::new(0.5, 0.55, 0.0);
    let frame = HandFrame::new(points);
    assert!(pinch_distance(&frame) >= PINCH_DISTANCE);
    assert!(!classify(Some(&frame)).is_pinching);

    // 0.049 is a pinch.
    points[INDEX_TIP] = Vec3::new(0.5, 0.549, 0.0);
    let frame = HandFrame::new(points);
    assert!(pinch_distance(&frame) < PINCH_DISTANCE);
    assert!(classify(Some(&frame)).is_pinching);
}

#[test]
fn pinch_ignores_depth() {
    // Same x/y, wildly different z: still a pinch (2D distance only).
    let mut points = base_points();
    points[THUMB_TIP] = Vec3::new(0.5, 0.5, 0.0);
    points[INDEX_TIP] = Vec3::new(0.5, 0.5, 0.9);
    assert!(classify(Some(&HandFrame::new(points))).is_pinching);
}

#[test]
fn pinch_can_co_occur_with_a_fist() {
    let mut frame = folded_frame(4);
    frame.points[THUMB_TIP] = frame.points[INDEX_TIP];
    let signal = classify(Some(&frame));
    assert!(signal.is_fist);
    assert!(signal.is_pinching);
}

#[test]
fn hand_position_is_mirrored_and_centered() {
    let mut points = base_points();
    points[ANCHOR_KNUCKLE] = Vec3::new(0.25, 0.75, 0.0);
    let signal = classify(Some(&HandFrame::new(points)));
    // x axis inverted for the front-camera mirror, both axes in [-1,1].
    assert!((signal.hand_pos.x - 0.5).abs() < 1e-6);
    assert!((signal.hand_pos.y + 0.5).abs() < 1e-6);

    let mut points = base_points();
    points[ANCHOR_KNUCKLE] = Vec3::new(0.5, 0.5, 0.0);
    let signal = classify(Some(&HandFrame::new(points)));
    assert_eq!(signal.hand_pos, Vec2::ZERO);
}
