//! Hand-landmark frame type and the landmark indices the classifier touches.
//!
//! A frame is the output of one landmark-model inference: 21 points in
//! normalized image space (x/y/z roughly in [0,1], y grows downward). Frames
//! are consumed once per tick and never retained.

use glam::Vec3;

pub const LANDMARK_COUNT: usize = 21;

pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
/// Stable central knuckle used as the hand-position reference.
pub const ANCHOR_KNUCKLE: usize = 9;
/// Index, middle, ring and pinky tips.
pub const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
/// PIP joints matching `FINGER_TIPS` by position.
pub const FINGER_PIPS: [usize; 4] = [6, 10, 14, 18];

#[derive(Clone, Debug)]
pub struct HandFrame {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }
}
