//! End-to-end scenarios for the flocking core.
//!
//! These tests drive the public API the way the viewer does: build a flock,
//! run interaction and integration passes, and read back positions and
//! velocities through the render view.

use flock3d::boundary::keep_in_bounds;
use flock3d::forces::{classify, ForceZone};
use flock3d::physics::{accumulate_forces, integrate, step};
use flock3d::vector::Vec3;
use flock3d::{Boid, Flock, NeighborScan, SimulationParams, SimulationState, SpawnConfig, SpawnPattern};

// rA=1, rC=5, rG=10, unit weights, Fmax=Vmax=5, edge=50
fn reference_params() -> SimulationParams {
    SimulationParams {
        avoidance_radius: 1.0,
        cohesion_radius: 5.0,
        gathering_radius: 10.0,
        avoidance_weight: 1.0,
        cohesion_weight: 1.0,
        gathering_weight: 1.0,
        max_force: 5.0,
        max_speed: 5.0,
        edge: 50.0,
        delta_t: 1.0,
        ..SimulationParams::default()
    }
}

fn moving_flock(count: usize, edge: f32, seed: u64) -> Flock {
    let config = SpawnConfig {
        count,
        edge,
        pattern: SpawnPattern::Random { seed },
    };
    let spawned = Flock::spawn(&config).unwrap();
    let boids = spawned
        .boids()
        .iter()
        .enumerate()
        .map(|(i, boid)| {
            let t = i as f32 * 0.7;
            boid.with_velocity(Vec3::new(t.cos(), t.sin(), 0.5 - (t * 0.3).sin()))
        })
        .collect();
    Flock::from_boids(boids)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_two_boids_in_cohesion_band_stay_put() {
    let flock = Flock::from_positions(vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)]);
    let mut state = SimulationState::with_flock(flock, reference_params());

    state.tick();

    let states: Vec<_> = state.states().collect();
    assert_eq!(states[0].position, Vec3::ZERO);
    assert_eq!(states[1].position, Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(states[0].velocity, Vec3::ZERO);
    assert_eq!(states[1].velocity, Vec3::ZERO);
}

#[test]
fn test_single_boid_tick_is_a_no_op() {
    let boid = Boid::new(Vec3::new(3.0, -4.0, 5.0));
    let mut flock = Flock::from_boids(vec![boid]);

    step(&mut flock, &reference_params(), 1.0);

    assert_eq!(flock.boids()[0], boid);
}

#[test]
fn test_single_boid_outside_bounds_is_reflected() {
    let boid = Boid::new(Vec3::new(55.0, 0.0, 0.0)).with_velocity(Vec3::new(1.0, 0.0, 0.0));
    let mut flock = Flock::from_boids(vec![boid]);

    step(&mut flock, &reference_params(), 1.0);

    let state = flock.states().next().unwrap();
    assert_eq!(state.position.x, 49.0);
    assert_eq!(state.velocity.x, -1.0);
}

#[test]
fn test_boundary_reflection_inverts_sign() {
    let edge = 50.0;
    let (position, velocity) = keep_in_bounds(Vec3::new(edge + 5.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), edge);
    assert_eq!(position.x, edge - 1.0);
    assert!(velocity.x < 0.0);
}

#[test]
fn test_zone_boundaries() {
    let params = reference_params();
    assert_eq!(classify(1.0, &params), ForceZone::Cohesion);
    assert_eq!(classify(5.0, &params), ForceZone::Gathering);
    assert_eq!(classify(10.0, &params), ForceZone::Outside);
}

#[test]
fn test_coincident_boids_do_not_fault() {
    let mut flock = Flock::from_positions(vec![Vec3::ONE; 3]);
    let params = reference_params();

    accumulate_forces(&mut flock, &params);
    assert!(flock.boids().iter().all(|boid| boid.force == Vec3::ZERO));

    integrate(&mut flock, &params, 1.0);
    assert!(flock.states().all(|state| state.position == Vec3::ONE));
}

#[test]
fn test_forces_are_zero_sum_for_both_scans() {
    for scan in [NeighborScan::Forward, NeighborScan::All] {
        for parallel in [false, true] {
            let params = SimulationParams {
                neighbor_scan: scan,
                enable_parallel: parallel,
                ..reference_params()
            };
            let mut flock = moving_flock(50, 10.0, 21);
            accumulate_forces(&mut flock, &params);

            let total = flock.boids().iter().fold(Vec3::ZERO, |acc, boid| acc + boid.force);
            assert!(total.abs_diff_eq(Vec3::ZERO, 1e-3), "total force {:?}", total);
        }
    }
}

#[test]
fn test_forces_are_reset_after_integration() {
    let params = reference_params();
    let mut flock = moving_flock(20, 6.0, 5);

    step(&mut flock, &params, 1.0);

    assert!(flock.boids().iter().all(|boid| boid.force == Vec3::ZERO));
}

#[test]
fn test_long_run_stays_inside_the_cube() {
    for parallel in [false, true] {
        let params = SimulationParams {
            enable_parallel: parallel,
            ..SimulationParams::default()
        };
        let edge = params.edge;
        let max_speed = params.max_speed;
        let mut state = SimulationState::new(params).unwrap();
        let count = state.flock().len();

        for _ in 0..200 {
            state.tick();
        }

        assert_eq!(state.ticks(), 200);
        // Population is fixed for the whole run
        assert_eq!(state.states().len(), count);
        for boid in state.states() {
            assert!(boid.position.is_finite());
            assert!(boid.position.x.abs() <= edge);
            assert!(boid.position.y.abs() <= edge);
            assert!(boid.position.z.abs() <= edge);
            assert!(boid.velocity.x.abs() <= max_speed);
            assert!(boid.velocity.y.abs() <= max_speed);
            assert!(boid.velocity.z.abs() <= max_speed);
        }
    }
}

#[test]
fn test_paused_simulation_does_not_move() {
    let mut state = SimulationState::new(SimulationParams::default()).unwrap();
    let before: Vec<_> = state.states().collect();

    for _ in 0..10 {
        state.advance(false);
    }

    let after: Vec<_> = state.states().collect();
    assert_eq!(before, after);
    assert_eq!(state.ticks(), 0);
}
