/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and other debug information to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Physics ticks run this frame and in total
 * - Mean boid speed (read from the render view of the flock)
 */

use std::time::Duration;

use crate::boid::BoidState;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_per_frame: usize,
    pub total_ticks: u64,
    pub mean_speed: f32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_per_frame: 0,
            total_ticks: 0,
            mean_speed: 0.0,
        }
    }
}

// Average velocity magnitude over the flock, zero for an empty flock
pub fn mean_speed<I>(states: I) -> f32
where
    I: IntoIterator<Item = BoidState>,
{
    let (total, count) = states
        .into_iter()
        .fold((0.0, 0usize), |(total, count), state| (total + state.velocity.length(), count + 1));

    if count > 0 {
        total / count as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;

    #[test]
    fn test_mean_speed() {
        let states = vec![
            BoidState { position: Vec3::ZERO, velocity: Vec3::new(3.0, 4.0, 0.0) },
            BoidState { position: Vec3::ZERO, velocity: Vec3::ZERO },
        ];
        assert_eq!(mean_speed(states), 2.5);
        assert_eq!(mean_speed(Vec::new()), 0.0);
    }
}
