/*
 * Boid Flocking Simulation
 *
 * This application simulates a 3D flock of boids inside a bounding cube. Each
 * pair of boids interacts through one of three distance zones:
 * 1. Avoidance: Repel boids that get too close
 * 2. Cohesion: Steer towards the velocity of the local neighbourhood
 * 3. Gathering: Attract boids further away
 *
 * The simulation starts paused; press Space to run it. Parameters can be
 * adjusted live from the control panel. Set RUST_LOG to change log verbosity.
 */

use flock3d::app;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    nannou::app(app::model).update(app::update).run();
}
