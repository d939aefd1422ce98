/*
 * Camera Module
 *
 * This module defines the Camera struct: an orbit camera that circles the
 * origin of the simulation volume. It handles rotating (drag) and zooming
 * (mouse wheel) and provides the perspective projection from world space to
 * window coordinates used by the renderer.
 */

use nannou::prelude::*;

const DEFAULT_DISTANCE: f32 = 90.0;
const DEFAULT_FOV_DEGREES: f32 = 60.0;
const NEAR_PLANE: f32 = 0.01;
// Keep pitch away from the poles so the view basis stays well defined
const MAX_PITCH: f32 = 1.5;

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotation_speed: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
            min_distance: 5.0,
            max_distance: 600.0,
            rotation_speed: 0.01,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = DEFAULT_DISTANCE;
        self.end_drag();
    }

    // Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        vec3(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    // Orthonormal basis (right, up, forward) looking at the origin
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (-self.eye()).normalize();
        let right = forward.cross(vec3(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    // Project a world point to window coordinates, None if it is behind the camera
    pub fn project(&self, point: Vec3, window_rect: Rect) -> Option<Vec2> {
        let (right, up, forward) = self.basis();
        let relative = point - self.eye();

        let depth = relative.dot(forward);
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = (window_rect.h() / 2.0) / (self.fov / 2.0).tan();
        let x = relative.dot(right) * focal / depth;
        let y = relative.dot(up) * focal / depth;

        Some(vec2(x, y) + window_rect.xy())
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let zoom_factor = 1.0 - scroll_delta.y * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start rotating the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Orbit while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.yaw -= delta.x * self.rotation_speed;
                self.pitch = (self.pitch - delta.y * self.rotation_speed).clamp(-MAX_PITCH, MAX_PITCH);
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::from_w_h(800.0, 600.0)
    }

    #[test]
    fn test_default_eye_looks_down_negative_z() {
        let camera = Camera::new();
        assert!(camera.eye().abs_diff_eq(vec3(0.0, 0.0, DEFAULT_DISTANCE), 1e-4));
    }

    #[test]
    fn test_origin_projects_to_window_centre() {
        let camera = Camera::new();
        let projected = camera.project(Vec3::ZERO, window()).unwrap();
        assert!(projected.abs_diff_eq(Vec2::ZERO, 1e-4));
    }

    #[test]
    fn test_projection_keeps_orientation() {
        let camera = Camera::new();
        let right = camera.project(vec3(10.0, 0.0, 0.0), window()).unwrap();
        let up = camera.project(vec3(0.0, 10.0, 0.0), window()).unwrap();
        assert!(right.x > 0.0 && right.y.abs() < 1e-3);
        assert!(up.y > 0.0 && up.x.abs() < 1e-3);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = Camera::new();
        assert!(camera.project(vec3(0.0, 0.0, 200.0), window()).is_none());
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom(vec2(0.0, 5.0));
        }
        assert_eq!(camera.distance, camera.min_distance);

        for _ in 0..100 {
            camera.zoom(vec2(0.0, -5.0));
        }
        assert_eq!(camera.distance, camera.max_distance);
    }

    #[test]
    fn test_drag_clamps_pitch() {
        let mut camera = Camera::new();
        camera.start_drag(Vec2::ZERO);
        camera.drag(vec2(0.0, -10_000.0));
        assert_eq!(camera.pitch, MAX_PITCH);
        camera.end_drag();
        assert!(!camera.is_dragging);
    }
}
