//! Scene driver: owns the live poses and advances them once per rendered
//! frame from the shared store's snapshot.

use crate::animate::{
    ease_scalar, nearest_hit, pick_hits, step_particle, step_photo, Pose,
};
use crate::camera::Camera;
use crate::constants::{
    AUTO_ROTATE_SPEED, GROUP_YAW_RATE, PARTICLE_COUNT, PHOTO_BASE_SCALE, SCATTER_YAW_SCALE,
};
use crate::particles::{spawn_particles, Particle};
use crate::photos::PhotoId;
use crate::store::{AppStore, Mode};
use fnv::FnvHashMap;
use glam::Quat;
use rand::prelude::*;

pub struct Scene {
    particles: Vec<Particle>,
    particle_poses: Vec<Pose>,
    photo_poses: FnvHashMap<PhotoId, Pose>,
    /// Whole-tree yaw: hand-driven while scattered, slow idle spin otherwise.
    group_yaw: f32,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = spawn_particles(PARTICLE_COUNT, &mut rng);
        let particle_poses = particles
            .iter()
            .map(|p| Pose::at(p.assembled, p.base_scale))
            .collect();
        Self {
            particles,
            particle_poses,
            photo_poses: FnvHashMap::default(),
            group_yaw: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_poses(&self) -> &[Pose] {
        &self.particle_poses
    }

    pub fn photo_pose(&self, id: PhotoId) -> Option<&Pose> {
        self.photo_poses.get(&id)
    }

    pub fn group_yaw(&self) -> f32 {
        self.group_yaw
    }

    /// Advance every pose by one frame and run pinch picking.
    ///
    /// `dt` is the frame delta in seconds, `elapsed` the running scene time
    /// used for oscillation phase. Elements without a mounted pose are
    /// skipped for the tick; nothing here panics across the tick boundary.
    pub fn step(&mut self, store: &mut AppStore, camera: &Camera, dt: f32, elapsed: f32) {
        self.sync_photos(store);
        let mode = store.mode;

        for (i, particle) in self.particles.iter().enumerate() {
            let Some(pose) = self.particle_poses.get_mut(i) else {
                continue;
            };
            step_particle(pose, particle, i, mode, dt, elapsed);
        }

        for record in store.photos.iter() {
            let Some(pose) = self.photo_poses.get_mut(&record.id) else {
                continue;
            };
            let focused = store.focused() == Some(record.id);
            step_photo(pose, record, mode, focused, camera, dt, elapsed);
        }

        let yaw_target = if mode == Mode::Scattered {
            store.rotation_target * SCATTER_YAW_SCALE
        } else {
            elapsed * AUTO_ROTATE_SPEED
        };
        self.group_yaw = ease_scalar(self.group_yaw, yaw_target, GROUP_YAW_RATE, dt);

        // Pinch picking substitutes for ray-casting: project each photo and
        // compare to the hand signal, nearest match under threshold wins.
        if mode == Mode::Scattered && store.gesture.is_pinching {
            let spin = Quat::from_rotation_y(self.group_yaw);
            let hits = pick_hits(
                self.photo_poses
                    .iter()
                    .map(|(id, pose)| (*id, spin * pose.position)),
                camera,
                store.gesture.hand_pos,
            );
            if let Some(id) = nearest_hit(&hits) {
                log::debug!("pinch focus on {:?} ({} candidate(s))", id, hits.len());
                store.focus(id);
            }
        }
    }

    /// Mount poses for newly added photos and drop poses for removed ones.
    /// New photos animate in from the tree origin.
    fn sync_photos(&mut self, store: &AppStore) {
        self.photo_poses
            .retain(|id, _| store.photos.get(*id).is_some());
        for record in store.photos.iter() {
            self.photo_poses
                .entry(record.id)
                .or_insert_with(|| Pose::at(glam::Vec3::ZERO, PHOTO_BASE_SCALE));
        }
    }
}
