/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation: zone radii and weights,
 * force and speed limits, the bounding cube and the fixed time step.
 * These parameters can be modified through the UI. Nothing here is
 * validated; out-of-order radii or negative weights are legal and simply
 * produce the behaviour the force model implies.
 *
 * It also provides a ParamWatcher for snapshot-based change detection, so the
 * app can tell whether the flock must be rebuilt or only the physics changed.
 */

use crate::flock::{SpawnConfig, SpawnPattern};

// Which boids contribute to a boid's neighbourhood velocity average
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborScan {
    // Only boids later in flock order
    Forward,
    // Every other boid
    All,
}

impl NeighborScan {
    pub fn label(&self) -> &'static str {
        match self {
            NeighborScan::Forward => "Forward",
            NeighborScan::All => "All",
        }
    }
}

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub spacing: f32,
    // Zone radii
    pub avoidance_radius: f32,
    pub cohesion_radius: f32,
    pub gathering_radius: f32,
    // Zone weights
    pub avoidance_weight: f32,
    pub cohesion_weight: f32,
    pub gathering_weight: f32,
    pub max_force: f32,
    pub max_speed: f32,
    // Half-extent of the bounding cube
    pub edge: f32,
    pub delta_t: f32,
    pub neighbor_scan: NeighborScan,
    // Performance settings
    pub enable_parallel: bool,
    pub fixed_physics_fps: f32,
    pub max_ticks_per_frame: usize,
    // Viewer settings
    pub show_debug: bool,
    pub show_bounds: bool,
    pub running: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 216,
            spacing: 3.0,
            avoidance_radius: 2.0,
            cohesion_radius: 6.0,
            gathering_radius: 12.0,
            avoidance_weight: 1.0,
            cohesion_weight: 0.05,
            gathering_weight: 1.0,
            max_force: 5.0,
            max_speed: 5.0,
            edge: 50.0,
            delta_t: 0.1,
            neighbor_scan: NeighborScan::Forward,
            enable_parallel: false,
            fixed_physics_fps: 60.0,
            max_ticks_per_frame: 8,
            show_debug: false,
            show_bounds: true,
            // Paused until the user starts it
            running: false,
        }
    }
}

impl SimulationParams {
    pub fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            count: self.num_boids,
            edge: self.edge,
            pattern: SpawnPattern::Lattice { spacing: self.spacing },
        }
    }

    // 0 <= rA <= rC <= rG
    pub fn radii_in_order(&self) -> bool {
        0.0 <= self.avoidance_radius
            && self.avoidance_radius <= self.cohesion_radius
            && self.cohesion_radius <= self.gathering_radius
    }

    // Legal but surprising configurations, worth a warning in the log
    pub fn configuration_hazards(&self) -> Vec<String> {
        let mut hazards = Vec::new();

        if !self.radii_in_order() {
            hazards.push(format!(
                "zone radii out of order (avoidance {}, cohesion {}, gathering {})",
                self.avoidance_radius, self.cohesion_radius, self.gathering_radius
            ));
        }
        if self.max_force <= 0.0 {
            hazards.push(format!("max force {} clamps every force to a degenerate range", self.max_force));
        }
        if self.max_speed <= 0.0 {
            hazards.push(format!("max speed {} clamps every velocity to a degenerate range", self.max_speed));
        }

        hazards
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_spacing_range() -> std::ops::RangeInclusive<f32> {
        0.5..=10.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=40.0
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        -2.0..=5.0
    }

    pub fn get_limit_range() -> std::ops::RangeInclusive<f32> {
        0.0..=20.0
    }

    pub fn get_edge_range() -> std::ops::RangeInclusive<f32> {
        10.0..=200.0
    }

    pub fn get_delta_t_range() -> std::ops::RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn get_physics_fps_range() -> std::ops::RangeInclusive<f32> {
        10.0..=240.0
    }

    pub fn get_max_ticks_per_frame_range() -> std::ops::RangeInclusive<usize> {
        1..=32
    }
}

// What changed between two snapshots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    // Flock has to be rebuilt (count or spacing changed)
    pub reset_needed: bool,
    // Anything the passes read
    pub physics_changed: bool,
    // Physics tick rate changed
    pub step_rate_changed: bool,
    // Run/pause toggled
    pub running_changed: bool,
    // Anything at all
    pub ui_changed: bool,
}

// Snapshot-based change detection for the UI
#[derive(Default)]
pub struct ParamWatcher {
    previous: Option<SimulationParams>,
}

impl ParamWatcher {
    pub fn new() -> Self {
        Self { previous: None }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self, params: &SimulationParams) {
        self.previous = Some(params.clone());
    }

    // Without a snapshot nothing has changed
    pub fn detect_changes(&self, params: &SimulationParams) -> ParamChanges {
        let prev = match &self.previous {
            Some(prev) => prev,
            None => return ParamChanges::default(),
        };

        let reset_needed = params.num_boids != prev.num_boids || params.spacing != prev.spacing;

        let physics_changed = params.avoidance_radius != prev.avoidance_radius
            || params.cohesion_radius != prev.cohesion_radius
            || params.gathering_radius != prev.gathering_radius
            || params.avoidance_weight != prev.avoidance_weight
            || params.cohesion_weight != prev.cohesion_weight
            || params.gathering_weight != prev.gathering_weight
            || params.max_force != prev.max_force
            || params.max_speed != prev.max_speed
            || params.edge != prev.edge
            || params.delta_t != prev.delta_t
            || params.neighbor_scan != prev.neighbor_scan
            || params.enable_parallel != prev.enable_parallel;

        let step_rate_changed = params.fixed_physics_fps != prev.fixed_physics_fps;

        ParamChanges {
            reset_needed,
            physics_changed,
            step_rate_changed,
            running_changed: params.running != prev.running,
            ui_changed: params != prev,
        }
    }
}
