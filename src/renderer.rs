/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation.
 * It builds one triangle per boid from the read-only flock view, projects it
 * through the orbit camera and draws it together with the bounding cube and
 * debug information.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::BoidState;
use crate::ui;

// Triangle vertices around a boid: nose half a unit towards -x, tail one unit back
const NOSE_OFFSET: [f32; 3] = [-0.5, 0.0, 0.0];
const TAIL_UPPER_OFFSET: [f32; 3] = [1.0, 0.5, 0.0];
const TAIL_LOWER_OFFSET: [f32; 3] = [1.0, -0.5, 0.0];

// Flat vertex list, three vertices per boid, in flock order
pub fn boid_geometry<I>(states: I) -> Vec<Vec3>
where
    I: IntoIterator<Item = BoidState>,
{
    let states = states.into_iter();
    let mut vertices = Vec::with_capacity(states.size_hint().0 * 3);

    for state in states {
        for offset in [NOSE_OFFSET, TAIL_UPPER_OFFSET, TAIL_LOWER_OFFSET] {
            vertices.push(state.position + Vec3::from(offset));
        }
    }

    vertices
}

// The 12 edges of the cube [-edge, edge]^3
pub fn bounding_box_edges(edge: f32) -> Vec<(Vec3, Vec3)> {
    let corner = |i: usize| {
        vec3(
            if i & 1 == 0 { -edge } else { edge },
            if i & 2 == 0 { -edge } else { edge },
            if i & 4 == 0 { -edge } else { edge },
        )
    };

    let mut edges = Vec::with_capacity(12);
    for i in 0..8 {
        // Connect each corner to the neighbours that differ in exactly one higher bit
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                edges.push((corner(i), corner(i | bit)));
            }
        }
    }
    edges
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let params = &model.simulation.params;

    draw.background().color(GRAY);

    if params.show_bounds {
        for (start, end) in bounding_box_edges(params.edge) {
            // Skip edges that cross behind the camera
            if let (Some(a), Some(b)) = (
                model.camera.project(start, window_rect),
                model.camera.project(end, window_rect),
            ) {
                draw.line().start(a).end(b).weight(1.0).color(CYAN);
            }
        }
    }

    let vertices = boid_geometry(model.simulation.states());
    for triangle in vertices.chunks_exact(3) {
        let projected: Option<Vec<Vec2>> = triangle
            .iter()
            .map(|&vertex| model.camera.project(vertex, window_rect))
            .collect();

        if let Some(points) = projected {
            draw.polygon().color(MAGENTA).points(points);
        }
    }

    if params.show_debug {
        // Velocity vector of the first boid
        if let Some(first) = model.simulation.states().next() {
            if let (Some(start), Some(end)) = (
                model.camera.project(first.position, window_rect),
                model.camera.project(first.position + first.velocity * 5.0, window_rect),
            ) {
                draw.arrow().start(start).end(end).color(YELLOW).stroke_weight(2.0);
            }
        }

        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.simulation.states().len(),
            model.camera.distance,
            params.edge,
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
