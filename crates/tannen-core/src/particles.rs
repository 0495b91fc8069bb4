//! Decorative particle field, generated once at startup and read-only after.

use crate::constants::{
    cone_radius_at, COLOR_GOLD, COLOR_GREEN, COLOR_RED, GOLD_CHANCE, PARTICLE_SCALE_MIN,
    PARTICLE_SCALE_SPAN, PARTICLE_SCATTER_EXTENT, PARTICLE_SPIN_RATE_MAX, RED_CHANCE,
    TREE_HALF_HEIGHT,
};
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Sphere,
    Box,
    Cone,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    pub color: [f32; 3],
    pub assembled: Vec3,
    pub scattered: Vec3,
    pub base_scale: f32,
    /// Continuous self-rotation, radians per second.
    pub spin_rate: f32,
}

/// Generate the particle field. Assembled positions sample the tree cone
/// uniformly by area (sqrt-radius trick); scattered positions fill a looser
/// box. Deterministic for a given rng seed.
pub fn spawn_particles(count: usize, rng: &mut StdRng) -> Vec<Particle> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = if rng.gen::<f32>() > 0.8 {
            ParticleKind::Sphere
        } else if rng.gen::<f32>() > 0.5 {
            ParticleKind::Box
        } else {
            ParticleKind::Cone
        };

        let theta = rng.gen::<f32>() * TAU;
        let y = rng.gen_range(-TREE_HALF_HEIGHT..=TREE_HALF_HEIGHT);
        let r = rng.gen::<f32>().sqrt() * cone_radius_at(y);

        let scattered = Vec3::new(
            rng.gen_range(-PARTICLE_SCATTER_EXTENT[0]..=PARTICLE_SCATTER_EXTENT[0]),
            rng.gen_range(-PARTICLE_SCATTER_EXTENT[1]..=PARTICLE_SCATTER_EXTENT[1]),
            rng.gen_range(-PARTICLE_SCATTER_EXTENT[2]..=PARTICLE_SCATTER_EXTENT[2]),
        );

        let mut color = COLOR_GREEN;
        if rng.gen::<f32>() < GOLD_CHANCE {
            color = COLOR_GOLD;
        }
        if rng.gen::<f32>() < RED_CHANCE {
            color = COLOR_RED;
        }

        out.push(Particle {
            kind,
            color,
            assembled: Vec3::new(r * theta.cos(), y, r * theta.sin()),
            scattered,
            base_scale: PARTICLE_SCALE_MIN + rng.gen::<f32>() * PARTICLE_SCALE_SPAN,
            spin_rate: rng.gen::<f32>() * PARTICLE_SPIN_RATE_MAX,
        });
    }
    out
}
