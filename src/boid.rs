/*
 * Boid Module
 *
 * This module defines the Boid struct: a plain data aggregate holding the
 * position, velocity, accumulated force and mass of one agent.
 * The flocking behaviour itself lives in the physics module, which owns
 * read/write access to every boid during a tick:
 * 1. Avoidance: Repel neighbours that get too close
 * 2. Cohesion: Match the velocity of the local neighbourhood
 * 3. Gathering: Attract boids further away
 */

use crate::error::{FlockError, FlockResult};
use crate::vector::Vec3;

pub const DEFAULT_MASS: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
    // Force accumulated during the current tick, zero between ticks
    pub force: Vec3,
    pub mass: f32,
}

// What the renderer is allowed to see of a boid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoidState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Boid {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass: DEFAULT_MASS,
        }
    }

    // Mass divides the force during integration, so it has to be positive
    pub fn with_mass(position: Vec3, mass: f32) -> FlockResult<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(FlockError::InvalidMass(mass));
        }

        Ok(Self {
            mass,
            ..Self::new(position)
        })
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    // Add a force to the accumulator
    #[inline]
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    #[inline]
    pub fn reset_force(&mut self) {
        self.force = Vec3::ZERO;
    }

    pub fn state(&self) -> BoidState {
        BoidState {
            position: self.position,
            velocity: self.velocity,
        }
    }
}
