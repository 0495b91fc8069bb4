//! Per-element interpolation steps.
//!
//! Every step is a pure function of (pose, record, mode, dt, elapsed) so the
//! layer is callable from any scheduler: the real-time loop or a headless
//! test driver. Smoothing uses `1 - exp(-rate * dt)`, which makes convergence
//! speed independent of frame rate (two half steps equal one full step).

use crate::camera::Camera;
use crate::constants::{
    focus_position_vec3, ASSEMBLE_RATE, FLOAT_AMPLITUDE, FOCUS_PICK_RADIUS, FOCUS_SCALE,
    PHOTO_BASE_SCALE, PHOTO_MOVE_RATE, ROTATION_RATE, SCALE_RATE, SCATTER_RATE,
    SCATTER_SCALE_MULT,
};
use crate::particles::Particle;
use crate::photos::{PhotoId, PhotoRecord};
use crate::store::Mode;
use fnv::FnvHasher;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

/// Exponential-decay smoothing factor for one frame delta.
#[inline]
pub fn smoothing(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

#[inline]
pub fn ease_toward(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, smoothing(rate, dt))
}

#[inline]
pub fn ease_scalar(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * smoothing(rate, dt)
}

/// Particle position convergence rate for the current mode: snappier while
/// the tree assembles, looser while it drifts apart.
#[inline]
pub fn position_rate(mode: Mode) -> f32 {
    match mode {
        Mode::Assembled => ASSEMBLE_RATE,
        _ => SCATTER_RATE,
    }
}

/// Live transform of one visual element.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Pose {
    pub fn at(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(scale),
        }
    }
}

/// Phase offset derived from a photo's identity so elements never bob in
/// lockstep. Stable for the session.
pub fn float_phase(id: PhotoId) -> f32 {
    let mut hasher = FnvHasher::default();
    id.hash(&mut hasher);
    (hasher.finish() % 6_283) as f32 * 1e-3 // [0, TAU)
}

/// Additive vertical bob; never fed back into state.
#[inline]
fn float_offset(elapsed: f32, phase: f32) -> f32 {
    FLOAT_AMPLITUDE * (elapsed + phase).sin()
}

/// One interpolation tick for a decorative particle.
pub fn step_particle(
    pose: &mut Pose,
    particle: &Particle,
    index: usize,
    mode: Mode,
    dt: f32,
    elapsed: f32,
) {
    let mut target = match mode {
        Mode::Assembled => particle.assembled,
        _ => particle.scattered,
    };
    target.y += float_offset(elapsed, (index as f32) % TAU);
    pose.position = ease_toward(pose.position, target, position_rate(mode), dt);

    pose.rotation.x += particle.spin_rate * dt;
    pose.rotation.y += particle.spin_rate * dt;

    let scale_target = match mode {
        Mode::Assembled => particle.base_scale,
        _ => particle.base_scale * SCATTER_SCALE_MULT,
    };
    pose.scale = Vec3::splat(ease_scalar(pose.scale.x, scale_target, SCALE_RATE, dt));
}

/// One interpolation tick for a photo frame. A focused photo overrides its
/// mode target with a fixed in-front-of-camera placement, a larger scale and
/// an orientation facing the viewpoint.
pub fn step_photo(
    pose: &mut Pose,
    photo: &PhotoRecord,
    mode: Mode,
    focused: bool,
    camera: &Camera,
    dt: f32,
    elapsed: f32,
) {
    if focused && mode == Mode::Focus {
        pose.position = ease_toward(pose.position, focus_position_vec3(), PHOTO_MOVE_RATE, dt);
        let facing = face_rotation(pose.position, camera.eye);
        pose.rotation = ease_toward(pose.rotation, facing, ROTATION_RATE, dt);
        let s = ease_scalar(pose.scale.x, FOCUS_SCALE, PHOTO_MOVE_RATE, dt);
        pose.scale = Vec3::new(s, s, 1.0);
        return;
    }

    // Photos always track their target at the full move rate; only the
    // decorative particles slow down while scattered.
    let mut target = match mode {
        Mode::Assembled => photo.assembled,
        _ => photo.scattered,
    };
    target.y += float_offset(elapsed, float_phase(photo.id));
    pose.position = ease_toward(pose.position, target, PHOTO_MOVE_RATE, dt);
    pose.rotation = ease_toward(pose.rotation, photo.rest_rotation, ROTATION_RATE, dt);
    let s = ease_scalar(pose.scale.x, PHOTO_BASE_SCALE, PHOTO_MOVE_RATE, dt);
    pose.scale = Vec3::new(s, s, 1.0);
}

/// Euler angles (pitch/yaw, zero roll) orienting a plane at `from` toward
/// `to`. Facing the default viewpoint head-on yields zero rotation.
pub fn face_rotation(from: Vec3, to: Vec3) -> Vec3 {
    let d = to - from;
    let yaw = d.x.atan2(d.z);
    let pitch = (-d.y).atan2((d.x * d.x + d.z * d.z).sqrt());
    Vec3::new(pitch, yaw, 0.0)
}

/// A photo whose projected position fell inside the pick radius.
#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    pub id: PhotoId,
    pub distance: f32,
}

/// Collect photos within `FOCUS_PICK_RADIUS` (strict) of the hand position
/// in NDC. Elements that cannot be projected are skipped for the tick.
pub fn pick_hits<I>(positions: I, camera: &Camera, hand: Vec2) -> SmallVec<[PickHit; 4]>
where
    I: Iterator<Item = (PhotoId, Vec3)>,
{
    let mut hits = SmallVec::new();
    for (id, world) in positions {
        let Some(ndc) = camera.project_ndc(world) else {
            continue;
        };
        let distance = ndc.distance(hand);
        if distance < FOCUS_PICK_RADIUS {
            hits.push(PickHit { id, distance });
        }
    }
    hits
}

/// Nearest hit wins; ties keep the earlier element.
pub fn nearest_hit(hits: &[PickHit]) -> Option<PhotoId> {
    let mut best: Option<PickHit> = None;
    for hit in hits {
        if best.map_or(true, |b| hit.distance < b.distance) {
            best = Some(*hit);
        }
    }
    best.map(|h| h.id)
}
