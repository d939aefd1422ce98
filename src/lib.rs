/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (vector, boid, flock, forces, physics, boundary,
 * simulation) has no windowing dependencies beyond nannou's math types;
 * the remaining modules make up the interactive viewer.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidState};
pub use camera::Camera;
pub use debug::DebugInfo;
pub use error::{FlockError, FlockResult};
pub use flock::{Flock, SpawnConfig, SpawnPattern};
pub use params::{NeighborScan, SimulationParams};
pub use simulation::SimulationState;
pub use app::Model;

// Define modules
pub mod vector;
pub mod error;
pub mod boid;
pub mod flock;
pub mod forces;
pub mod boundary;
pub mod physics;
pub mod params;
pub mod simulation;
pub mod camera;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;
