/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the ParamWatcher.
 */

use nannou_egui::{egui, Egui};

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::params::{NeighborScan, ParamChanges, ParamWatcher, SimulationParams};

// Buttons pressed this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiActions {
    pub reset_boids: bool,
    pub step_once: bool,
    pub reset_camera: bool,
}

// Update the UI and return the buttons pressed plus what changed in the parameters
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    watcher: &mut ParamWatcher,
    debug_info: &DebugInfo,
    camera: &Camera,
) -> (UiActions, ParamChanges) {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    watcher.take_snapshot(params);

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                ui.add(egui::Slider::new(&mut params.spacing, SimulationParams::get_spacing_range()).text("Spawn Spacing"));

                if ui.button("Reset Boids").clicked() {
                    actions.reset_boids = true;
                }
            });

            ui.collapsing("Zones", |ui| {
                ui.add(egui::Slider::new(&mut params.avoidance_radius, SimulationParams::get_radius_range()).text("Avoidance Radius"));
                ui.add(egui::Slider::new(&mut params.cohesion_radius, SimulationParams::get_radius_range()).text("Cohesion Radius"));
                ui.add(egui::Slider::new(&mut params.gathering_radius, SimulationParams::get_radius_range()).text("Gathering Radius"));
                ui.add(egui::Slider::new(&mut params.avoidance_weight, SimulationParams::get_weight_range()).text("Avoidance Weight"));
                ui.add(egui::Slider::new(&mut params.cohesion_weight, SimulationParams::get_weight_range()).text("Cohesion Weight"));
                ui.add(egui::Slider::new(&mut params.gathering_weight, SimulationParams::get_weight_range()).text("Gathering Weight"));

                ui.label("Cohesion neighbours:");
                ui.horizontal(|ui| {
                    for scan in [NeighborScan::Forward, NeighborScan::All] {
                        ui.radio_value(&mut params.neighbor_scan, scan, scan.label());
                    }
                });
            });

            ui.collapsing("Limits", |ui| {
                ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_limit_range()).text("Max Force"));
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_limit_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.edge, SimulationParams::get_edge_range()).text("Bounding Edge"));
                ui.add(egui::Slider::new(&mut params.delta_t, SimulationParams::get_delta_t_range()).text("Time Step"));
            });

            ui.collapsing("Camera Controls", |ui| {
                ui.label("Orbit: Click and drag");
                ui.label("Zoom: Use mouse wheel or trackpad pinch gesture");
                if ui.button("Reset Camera").clicked() {
                    actions.reset_camera = true;
                }
                ui.label(format!("Camera Distance: {:.1}", camera.distance));
            });

            ui.collapsing("Performance Tuning", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Enable Parallel Processing");
                ui.add(egui::Slider::new(&mut params.fixed_physics_fps, SimulationParams::get_physics_fps_range()).text("Physics Rate"));
                ui.add(egui::Slider::new(&mut params.max_ticks_per_frame, SimulationParams::get_max_ticks_per_frame_range()).text("Max Ticks per Frame"));

                ui.separator();

                // Performance metrics
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Ticks this frame: {}", debug_info.ticks_per_frame));
            });

            ui.checkbox(&mut params.show_bounds, "Show Bounding Box");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.horizontal(|ui| {
                ui.checkbox(&mut params.running, "Running");
                if ui.button("Step").clicked() {
                    actions.step_once = true;
                }
            });
        });

    // Detect parameter changes
    let changes = watcher.detect_changes(params);

    (actions, changes)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
    camera_distance: f32,
    edge: f32,
) {
    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 7.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boids_len),
        format!("Ticks: {} (+{})", debug_info.total_ticks, debug_info.ticks_per_frame),
        format!("Mean speed: {:.2}", debug_info.mean_speed),
        format!("Camera distance: {:.1}", camera_distance),
        format!("Bounds: +/-{:.0}", edge),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge of the panel
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
