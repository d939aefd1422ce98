/*
 * Boundary Module
 *
 * Keeps boids inside the cube [-edge, edge]^3. A boid that crosses a face is
 * put back one unit inside that face and the matching velocity component is
 * negated. The one unit inset is part of the behaviour: boids never sit
 * exactly on the boundary plane after a reflection.
 */

use crate::boid::Boid;
use crate::vector::Vec3;

pub const BOUNDARY_INSET: f32 = 1.0;

// Reflect one axis, returning the corrected coordinate and velocity component
#[inline]
fn reflect_axis(position: f32, velocity: f32, edge: f32) -> (f32, f32) {
    if position > edge {
        (edge - BOUNDARY_INSET, -velocity)
    } else if position < -edge {
        (-(edge - BOUNDARY_INSET), -velocity)
    } else {
        (position, velocity)
    }
}

pub fn keep_in_bounds(position: Vec3, velocity: Vec3, edge: f32) -> (Vec3, Vec3) {
    let (px, vx) = reflect_axis(position.x, velocity.x, edge);
    let (py, vy) = reflect_axis(position.y, velocity.y, edge);
    let (pz, vz) = reflect_axis(position.z, velocity.z, edge);

    (Vec3::new(px, py, pz), Vec3::new(vx, vy, vz))
}

pub fn apply_bounds(boid: &mut Boid, edge: f32) {
    let (position, velocity) = keep_in_bounds(boid.position, boid.velocity, edge);
    boid.position = position;
    boid.velocity = velocity;
}
