//! Ordered registry of user-added photos with precomputed placements.
//!
//! Records are created on upload and never mutated afterward except
//! delete-by-id. The animation layer only reads placements; it never writes
//! back. Clearing a focus selection that points at a removed photo is the
//! caller's responsibility (`AppStore::remove_photo` does so).

use crate::constants::{
    cone_radius_at, PHOTO_BAND_HALF_HEIGHT, PHOTO_SCATTER_MAX, PHOTO_SCATTER_MIN,
};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Unique, session-stable photo identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u64);

/// Opaque handle to the image bytes behind a photo; never inspected here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRef(pub String);

#[derive(Clone, Debug)]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub source: SourceRef,
    /// Placement inside the tree cone, biased toward the outer radius.
    pub assembled: Vec3,
    /// Independent placement in the looser scatter box.
    pub scattered: Vec3,
    /// Euler radians; faces roughly outward from the tree axis.
    pub rest_rotation: Vec3,
}

pub struct PhotoRegistry {
    records: Vec<PhotoRecord>,
    next_id: u64,
    rng: StdRng,
}

impl PhotoRegistry {
    pub fn new(seed: u64) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Add a photo, sampling both placements, and return its id.
    ///
    /// Assembled: polar angle uniform, height uniform in the photo band,
    /// radius uniform in the outer half of the cone radius at that height.
    pub fn add(&mut self, source: SourceRef) -> PhotoId {
        let theta = self.rng.gen::<f32>() * TAU;
        let y = self
            .rng
            .gen_range(-PHOTO_BAND_HALF_HEIGHT..=PHOTO_BAND_HALF_HEIGHT);
        let max_r = cone_radius_at(y);
        let r = self.rng.gen_range(max_r * 0.5..=max_r);

        let scattered = Vec3::new(
            self.rng.gen_range(PHOTO_SCATTER_MIN[0]..=PHOTO_SCATTER_MAX[0]),
            self.rng.gen_range(PHOTO_SCATTER_MIN[1]..=PHOTO_SCATTER_MAX[1]),
            self.rng.gen_range(PHOTO_SCATTER_MIN[2]..=PHOTO_SCATTER_MAX[2]),
        );

        let id = PhotoId(self.next_id);
        self.next_id += 1;
        self.records.push(PhotoRecord {
            id,
            source,
            assembled: Vec3::new(r * theta.cos(), y, r * theta.sin()),
            scattered,
            rest_rotation: Vec3::new(0.0, theta - FRAC_PI_2, 0.0),
        });
        id
    }

    /// Delete by identity. Removing a nonexistent id is a no-op, not an error.
    pub fn remove(&mut self, id: PhotoId) -> bool {
        let before = self.records.len();
        self.records.retain(|p| p.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: PhotoId) -> Option<&PhotoRecord> {
        self.records.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhotoRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
