//! Drifting point cloud confined to a reflecting cube.

use crate::constants::{rgb, PARTICLE_BOUND, PARTICLE_MAX_SPEED, PARTICLE_PALETTE, PARTICLE_SPAWN_RADIUS};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub bound: f32,
    /// Rotation of the whole cloud about Y, in radians.
    pub spin: f32,
}

impl ParticleField {
    /// Scatter `count` particles uniformly in spherical coordinates around the
    /// origin, each with a small random velocity and a palette color.
    pub fn scatter(count: usize, rng: &mut impl Rng) -> Self {
        let palette: Vec<[f32; 3]> = PARTICLE_PALETTE.iter().map(|c| rgb(*c)).collect();
        let particles = (0..count)
            .map(|_| {
                let radius = rng.gen::<f32>() * PARTICLE_SPAWN_RADIUS;
                let theta = rng.gen::<f32>() * std::f32::consts::TAU;
                let phi = rng.gen::<f32>() * std::f32::consts::PI;
                let position = Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.cos(),
                    radius * phi.sin() * theta.sin(),
                );
                let velocity = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
                );
                let color = *palette.choose(rng).unwrap_or(&[1.0, 1.0, 1.0]);
                Particle {
                    position,
                    velocity,
                    color,
                }
            })
            .collect();
        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            bound: PARTICLE_BOUND,
            spin: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle by its velocity, reflecting off the cube faces.
    pub fn step(&mut self) {
        let bound = self.bound;
        for p in &mut self.particles {
            for axis in 0..3 {
                let (pos, vel) = reflect_axis(p.position[axis], p.velocity[axis], bound);
                p.position[axis] = pos;
                p.velocity[axis] = vel;
            }
        }
    }
}

/// One axis of the reflecting step. Crossing `±bound` flips the velocity and
/// mirrors the overshoot back inside; the result is always within the bound.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, bound: f32) -> (f32, f32) {
    let next = pos + vel;
    if next.abs() <= bound {
        return (next, vel);
    }
    let wall = bound.copysign(next);
    let mirrored = 2.0 * wall - next;
    (mirrored.clamp(-bound, bound), -vel)
}
