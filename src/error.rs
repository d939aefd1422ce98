/*
 * Error Module
 *
 * Construction-time failures for boids and flocks. The per-tick passes never fail;
 * their numeric edge cases are handled by policy inside the passes themselves.
 */

use std::fmt;

pub type FlockResult<T> = Result<T, FlockError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FlockError {
    // Mass must be strictly positive and finite
    InvalidMass(f32),
    // Lattice spacing must be strictly positive and finite
    InvalidSpacing(f32),
    // Bounding half-extent must be strictly positive and finite
    InvalidExtent(f32),
    // Requested lattice doesn't fit inside the bounding cube
    SpawnOutOfBounds { half_width: f32, edge: f32 },
}

impl fmt::Display for FlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlockError::InvalidMass(mass) => {
                write!(f, "boid mass must be positive and finite, got {}", mass)
            }
            FlockError::InvalidSpacing(spacing) => {
                write!(f, "spawn spacing must be positive and finite, got {}", spacing)
            }
            FlockError::InvalidExtent(edge) => {
                write!(f, "bounding extent must be positive and finite, got {}", edge)
            }
            FlockError::SpawnOutOfBounds { half_width, edge } => write!(
                f,
                "spawn lattice half-width {:.2} exceeds bounding extent {:.2}",
                half_width, edge
            ),
        }
    }
}

impl std::error::Error for FlockError {}
