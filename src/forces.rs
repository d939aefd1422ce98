/*
 * Forces Module
 *
 * Maps the distance between two boids to the behavioural zone it falls in and
 * to the scalar force magnitude for that zone. Zones are half-open and tested
 * in a fixed order, so misconfigured radii only change which zone wins:
 *
 *   [0, rA)   avoidance   wA * (1 - r)^3 * (3r + 1),  r = d / rA   (wA when d <= 1)
 *   [rA, rC)  cohesion    wC * d
 *   [rC, rG)  gathering   wG / d^2                                  (wG when d <= 1)
 *   [rG, inf) none        0
 */

use crate::params::SimulationParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceZone {
    Avoidance,
    Cohesion,
    Gathering,
    Outside,
}

pub fn classify(distance: f32, params: &SimulationParams) -> ForceZone {
    if distance < params.avoidance_radius {
        ForceZone::Avoidance
    } else if distance < params.cohesion_radius {
        ForceZone::Cohesion
    } else if distance < params.gathering_radius {
        ForceZone::Gathering
    } else {
        ForceZone::Outside
    }
}

// Repulsion, strongest up close and falling to zero at the avoidance radius.
// Distances of one unit or less get the flat weight to keep the push bounded.
#[inline]
pub fn avoidance_magnitude(distance: f32, radius: f32, weight: f32) -> f32 {
    if distance <= 1.0 {
        return weight;
    }

    let r = distance / radius;
    let falloff = 1.0 - r;
    weight * falloff * falloff * falloff * (3.0 * r + 1.0)
}

// Grows linearly with separation; scales a velocity-matching vector, not a direction
#[inline]
pub fn cohesion_magnitude(distance: f32, weight: f32) -> f32 {
    weight * distance
}

// Inverse-square attraction
#[inline]
pub fn gathering_magnitude(distance: f32, weight: f32) -> f32 {
    if distance <= 1.0 {
        weight
    } else {
        weight / (distance * distance)
    }
}

// Zone and magnitude for a pair separated by `distance`
pub fn force_magnitude(distance: f32, params: &SimulationParams) -> (ForceZone, f32) {
    let zone = classify(distance, params);
    let magnitude = match zone {
        ForceZone::Avoidance => {
            avoidance_magnitude(distance, params.avoidance_radius, params.avoidance_weight)
        }
        ForceZone::Cohesion => cohesion_magnitude(distance, params.cohesion_weight),
        ForceZone::Gathering => gathering_magnitude(distance, params.gathering_weight),
        ForceZone::Outside => 0.0,
    };
    (zone, magnitude)
}
