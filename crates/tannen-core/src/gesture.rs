//! Per-frame gesture classification.
//!
//! The classifier is a pure function from one landmark frame to a discrete
//! gesture signal plus a continuous hand position. Thresholds operate on
//! normalized coordinates so the result is camera-resolution independent.

use crate::constants::{FIST_FOLD_COUNT, PINCH_DISTANCE};
use crate::hand::{HandFrame, ANCHOR_KNUCKLE, FINGER_PIPS, FINGER_TIPS, INDEX_TIP, THUMB_TIP};
use glam::Vec2;

/// Derived gesture state, fully replaced every tick.
///
/// `is_fist` and `is_open_palm` are mutually exclusive by construction (the
/// fist test runs first and the open-palm test requires it false).
/// `is_pinching` is independent and may co-occur with either. `hand_pos` is
/// in [-1,1] on both axes, mirror-corrected for a front-facing camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSignal {
    pub is_fist: bool,
    pub is_open_palm: bool,
    pub is_pinching: bool,
    pub hand_pos: Vec2,
}

/// Classify a landmark frame; an absent hand is the valid zero signal.
pub fn classify(frame: Option<&HandFrame>) -> GestureSignal {
    let Some(frame) = frame else {
        return GestureSignal::default();
    };

    // Fist first: the open-palm test requires it false, which keeps the two
    // flags exclusive and the state machine unambiguous.
    let is_fist = folded_tip_count(frame) >= FIST_FOLD_COUNT;
    let is_open_palm = !is_fist && all_tips_extended(frame);
    let is_pinching = pinch_distance(frame) < PINCH_DISTANCE;

    let anchor = frame.point(ANCHOR_KNUCKLE);
    GestureSignal {
        is_fist,
        is_open_palm,
        is_pinching,
        hand_pos: Vec2::new((anchor.x - 0.5) * -2.0, (anchor.y - 0.5) * -2.0),
    }
}

/// Fingertips sitting below their PIP joint (image-space y grows downward).
fn folded_tip_count(frame: &HandFrame) -> usize {
    FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .filter(|(tip, pip)| frame.point(**tip).y > frame.point(**pip).y)
        .count()
}

fn all_tips_extended(frame: &HandFrame) -> bool {
    FINGER_TIPS
        .iter()
        .zip(FINGER_PIPS.iter())
        .all(|(tip, pip)| frame.point(*tip).y < frame.point(*pip).y)
}

/// 2D thumb-tip to index-tip distance in normalized space.
#[inline]
pub fn pinch_distance(frame: &HandFrame) -> f32 {
    let thumb = frame.point(THUMB_TIP);
    let index = frame.point(INDEX_TIP);
    Vec2::new(thumb.x, thumb.y).distance(Vec2::new(index.x, index.y))
}
