/*
 * Application Module
 *
 * This module defines the main application model and logic for the boid simulation.
 * It handles the initialization, update, and rendering hookup of the simulation.
 *
 * Physics runs on a fixed timestep: wall-clock time only decides how many ticks
 * run in a frame (capped per frame), each tick always advances by the configured
 * `delta_t`.
 */

use log::{debug, error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;
use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::debug::{mean_speed, DebugInfo};
use crate::flock::Flock;
use crate::input;
use crate::params::{ParamWatcher, SimulationParams};
use crate::renderer;
use crate::simulation::SimulationState;
use crate::ui;

pub const WINDOW_TITLE: &str = "Boid Flocking Simulation";

// Main model for the application
pub struct Model {
    pub simulation: SimulationState,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
    pub watcher: ParamWatcher,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub last_update_time: Instant,
}

fn step_size(params: &SimulationParams) -> Duration {
    Duration::from_secs_f32(1.0 / params.fixed_physics_fps)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    let physics_step_size = step_size(&params);

    // A bad spawn configuration leaves an empty flock; the UI can fix it and reset
    let simulation = match SimulationState::new(params.clone()) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("Could not spawn the initial flock: {}", err);
            SimulationState::with_flock(Flock::new(), params)
        }
    };

    Model {
        simulation,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
        watcher: ParamWatcher::new(),
        physics_accumulator: Duration::ZERO,
        physics_step_size,
        last_update_time: Instant::now(),
    }
}

// Rebuild the flock from the current parameters, keeping the old one on failure
pub fn reset_simulation(model: &mut Model) {
    if let Err(err) = model.simulation.reset() {
        error!("Could not reset the flock: {}", err);
    }
    model.physics_accumulator = Duration::ZERO;
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (actions, changes) = ui::update_ui(
        &mut model.egui,
        &mut model.simulation.params,
        &mut model.watcher,
        &model.debug_info,
        &model.camera,
    );

    if changes.physics_changed {
        debug!("Simulation parameters changed: {:?}", model.simulation.params);
        for hazard in model.simulation.params.configuration_hazards() {
            warn!("Configuration hazard: {}", hazard);
        }
    }

    if changes.running_changed {
        info!("Simulation {}", if model.simulation.params.running { "running" } else { "paused" });
    }

    if changes.step_rate_changed {
        model.physics_step_size = step_size(&model.simulation.params);
    }

    if actions.reset_boids || changes.reset_needed {
        reset_simulation(model);
    }

    if actions.reset_camera {
        model.camera.reset();
    }

    let current_time = Instant::now();
    let frame_time = current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;

    let running = model.simulation.params.running;
    let mut ticks_this_frame = 0;

    if running {
        model.physics_accumulator += frame_time;

        while model.physics_accumulator >= model.physics_step_size
            && ticks_this_frame < model.simulation.params.max_ticks_per_frame
        {
            model.simulation.tick();
            model.physics_accumulator -= model.physics_step_size;
            ticks_this_frame += 1;
        }

        // Drop the backlog instead of spiralling when the physics can't keep up
        if ticks_this_frame == model.simulation.params.max_ticks_per_frame {
            model.physics_accumulator = Duration::ZERO;
        }
    } else {
        model.physics_accumulator = Duration::ZERO;
    }

    // Single step while paused
    if model.simulation.advance(actions.step_once && !running) {
        ticks_this_frame += 1;
    }

    model.debug_info.ticks_per_frame = ticks_this_frame;
    model.debug_info.total_ticks = model.simulation.ticks();
    model.debug_info.mean_speed = mean_speed(model.simulation.states());
}
