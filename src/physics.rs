/*
 * Physics Module
 *
 * This module handles the per-tick physics of the flock in two passes:
 *
 * Interaction pass: every unordered pair (i, j), i < j, is evaluated exactly
 * once. The pair's distance picks a zone from the force model and the resulting
 * force is added to i and subtracted from j, so the pass conserves the total
 * force of the flock. Cohesion needs each boid's neighbourhood velocity
 * average, which is scanned from a snapshot before the pair loop.
 *
 * Integration pass: each boid's force is clamped per component, turned into
 * velocity (clamped the same way) and position, reflected at the boundary and
 * reset to zero for the next tick.
 *
 * With `enable_parallel` the interaction pass runs on rayon: neighbourhood
 * averages are scanned in parallel and every boid reduces its own net force
 * from the same read-only snapshot, then the results are written back.
 */

use rayon::prelude::*;

use crate::boid::Boid;
use crate::boundary::apply_bounds;
use crate::flock::Flock;
use crate::forces::{force_magnitude, ForceZone};
use crate::params::{NeighborScan, SimulationParams};
use crate::vector::{clamp_components, direction_between, normalize_or_zero, Vec3};

// Run one full tick: interaction pass followed by integration pass
pub fn step(flock: &mut Flock, params: &SimulationParams, delta_t: f32) {
    accumulate_forces(flock, params);
    integrate(flock, params, delta_t);
}

// Average velocity of the boids in `index`'s cohesion band, None when nobody qualifies
fn neighbor_average(boids: &[Boid], index: usize, params: &SimulationParams) -> Option<Vec3> {
    let position = boids[index].position;
    let start = match params.neighbor_scan {
        NeighborScan::Forward => index + 1,
        NeighborScan::All => 0,
    };

    let mut sum = Vec3::ZERO;
    let mut count = 0;

    for (k, other) in boids.iter().enumerate().skip(start) {
        if k == index {
            continue;
        }

        let d = position.distance(other.position);
        if d >= params.avoidance_radius && d < params.cohesion_radius {
            sum += other.velocity;
            count += 1;
        }
    }

    if count > 0 {
        Some(sum / count as f32)
    } else {
        None
    }
}

pub fn neighbor_averages(boids: &[Boid], params: &SimulationParams) -> Vec<Option<Vec3>> {
    (0..boids.len())
        .map(|i| neighbor_average(boids, i, params))
        .collect()
}

fn neighbor_averages_parallel(boids: &[Boid], params: &SimulationParams) -> Vec<Option<Vec3>> {
    (0..boids.len())
        .into_par_iter()
        .map(|i| neighbor_average(boids, i, params))
        .collect()
}

// Force that pair (i, j) adds to i; j receives the negation.
// `average` is i's neighbourhood velocity average.
pub fn pair_force(
    boids: &[Boid],
    i: usize,
    j: usize,
    average: Option<Vec3>,
    params: &SimulationParams,
) -> Vec3 {
    let (dir, distance) = match direction_between(boids[i].position, boids[j].position) {
        Some(found) => found,
        // Coincident boids contribute nothing
        None => return Vec3::ZERO,
    };

    let (zone, magnitude) = force_magnitude(distance, params);
    match zone {
        ForceZone::Avoidance => dir * magnitude,
        ForceZone::Cohesion => match average {
            Some(average) => (normalize_or_zero(average) - boids[i].velocity) * magnitude,
            None => Vec3::ZERO,
        },
        ForceZone::Gathering => -dir * magnitude,
        ForceZone::Outside => Vec3::ZERO,
    }
}

// Interaction pass. Expects every force to be zero on entry.
pub fn accumulate_forces(flock: &mut Flock, params: &SimulationParams) {
    if params.enable_parallel {
        accumulate_forces_parallel(flock, params);
    } else {
        accumulate_forces_sequential(flock, params);
    }
}

fn accumulate_forces_sequential(flock: &mut Flock, params: &SimulationParams) {
    let averages = neighbor_averages(flock.boids(), params);
    let boids = flock.boids_mut();
    let n = boids.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let force = pair_force(boids, i, j, averages[i], params);
            boids[i].apply_force(force);
            boids[j].apply_force(-force);
        }
    }
}

fn accumulate_forces_parallel(flock: &mut Flock, params: &SimulationParams) {
    let boids = flock.boids();
    let n = boids.len();
    let averages = neighbor_averages_parallel(boids, params);

    // Each boid sums what it receives from both sides of every pair it belongs to
    let net_forces: Vec<Vec3> = (0..n)
        .into_par_iter()
        .map(|k| {
            let mut force = Vec3::ZERO;
            for j in (k + 1)..n {
                force += pair_force(boids, k, j, averages[k], params);
            }
            for i in 0..k {
                force -= pair_force(boids, i, k, averages[i], params);
            }
            force
        })
        .collect();

    for (boid, force) in flock.boids_mut().iter_mut().zip(net_forces) {
        boid.apply_force(force);
    }
}

// Integration pass
pub fn integrate(flock: &mut Flock, params: &SimulationParams, delta_t: f32) {
    for boid in flock.boids_mut() {
        let force = clamp_components(boid.force, params.max_force);

        let velocity = boid.velocity + (force / boid.mass) * delta_t;
        boid.velocity = clamp_components(velocity, params.max_speed);
        boid.position += boid.velocity * delta_t;

        apply_bounds(boid, params.edge);
        boid.reset_force();
    }
}
