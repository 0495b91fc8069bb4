use std::f32::consts::PI;

// Shared tuning constants for the gesture classifier, state machine and
// animation layer. These are product knobs, not architectural values.

// Gesture classifier (normalized landmark space, resolution independent)
pub const PINCH_DISTANCE: f32 = 0.05; // thumb-tip to index-tip, 2D, strict
pub const FIST_FOLD_COUNT: usize = 3; // folded tips (of 4) required for a fist
pub const HAND_ROTATION_SCALE: f32 = PI; // hand x in [-1,1] to yaw target

// Picking
pub const FOCUS_PICK_RADIUS: f32 = 0.2; // NDC distance from hand to photo, strict

// Tree cone volume
pub const TREE_HALF_HEIGHT: f32 = 3.5;
pub const CONE_BASE_RADIUS: f32 = 3.5;
pub const CONE_TAPER: f32 = 0.45; // radius lost per unit of height
pub const PHOTO_BAND_HALF_HEIGHT: f32 = 3.0; // photos avoid the cone extremes

// Scatter volumes (half-extents for particles, min/max box for photos)
pub const PARTICLE_SCATTER_EXTENT: [f32; 3] = [7.5, 5.0, 5.0];
pub const PHOTO_SCATTER_MIN: [f32; 3] = [-8.0, -5.0, -5.0];
pub const PHOTO_SCATTER_MAX: [f32; 3] = [8.0, 8.0, 5.0];

// Particle field
pub const PARTICLE_COUNT: usize = 450;
pub const PARTICLE_SCALE_MIN: f32 = 0.05;
pub const PARTICLE_SCALE_SPAN: f32 = 0.15;
pub const PARTICLE_SPIN_RATE_MAX: f32 = 1.2; // radians per second
pub const SCATTER_SCALE_MULT: f32 = 1.5; // particles swell while scattered

// Palette (linear RGB)
pub const COLOR_GREEN: [f32; 3] = [0.043, 0.239, 0.180];
pub const COLOR_GOLD: [f32; 3] = [1.0, 0.843, 0.0];
pub const COLOR_RED: [f32; 3] = [0.769, 0.118, 0.227];
pub const GOLD_CHANCE: f32 = 0.4; // drawn after the green default
pub const RED_CHANCE: f32 = 0.15; // drawn last, wins over gold

// Interpolation rates (per second; convergence is frame-rate independent)
pub const ASSEMBLE_RATE: f32 = 3.0;
pub const SCATTER_RATE: f32 = 1.5;
pub const SCALE_RATE: f32 = 2.0;
pub const ROTATION_RATE: f32 = 2.0;
pub const PHOTO_MOVE_RATE: f32 = 3.0;
pub const GROUP_YAW_RATE: f32 = 2.0;
pub const AUTO_ROTATE_SPEED: f32 = 0.1; // idle group yaw, radians per second
pub const SCATTER_YAW_SCALE: f32 = 0.5; // hand rotation target to group yaw
pub const FLOAT_AMPLITUDE: f32 = 0.05; // additive vertical bob

// Photos
pub const PHOTO_BASE_SCALE: f32 = 0.8;
pub const FOCUS_SCALE: f32 = 3.5;
pub const FOCUS_POSITION: [f32; 3] = [0.0, 0.0, 4.0]; // in front of the viewpoint

/// Tree cone radius at height `y` (clamped to zero above the tip).
#[inline]
pub fn cone_radius_at(y: f32) -> f32 {
    (CONE_BASE_RADIUS - (y + TREE_HALF_HEIGHT) * CONE_TAPER).max(0.0)
}

#[inline]
pub fn focus_position_vec3() -> glam::Vec3 {
    glam::Vec3::new(FOCUS_POSITION[0], FOCUS_POSITION[1], FOCUS_POSITION[2])
}
