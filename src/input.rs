/*
 * Input Module
 *
 * This module handles user input events for the boid simulation.
 *
 * Features:
 * - Camera orbit with mouse drag
 * - Camera zoom with mouse wheel
 * - Space toggles the simulation, Enter steps one tick while paused
 * - Backspace rebuilds the flock, R resets the camera
 * - Passing raw events to egui
 */

use log::info;
use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::{reset_simulation, Model};

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let new_pos = Vec2::new(pos.x, pos.y);

    if model.camera.is_dragging {
        model.camera.drag(new_pos);
    }

    model.mouse_position = new_pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the UI panel don't orbit the camera
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        model.camera.start_drag(model.mouse_position);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.camera.end_drag();
    }
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            model.camera.zoom(vec2(x, y));
        }
        MouseScrollDelta::PixelDelta(pos) => {
            model.camera.zoom(vec2(pos.x as f32, pos.y as f32) * 0.01);
        }
    }
}

// Keyboard controls
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into egui widgets belong to egui
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            let params = &mut model.simulation.params;
            params.running = !params.running;
            info!("Simulation {}", if params.running { "running" } else { "paused" });
        }
        Key::Return => {
            let running = model.simulation.params.running;
            model.simulation.advance(!running);
        }
        Key::Back => reset_simulation(model),
        Key::R => model.camera.reset(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
