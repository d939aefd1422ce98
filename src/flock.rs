/*
 * Flock Module
 *
 * The Flock owns every boid in the simulation as a contiguous Vec, indexed by
 * position. Both passes of a tick iterate the same indexing, so the order is
 * stable for the whole tick.
 *
 * Boids are created here, either from explicit positions or from a spawn
 * configuration (lattice or seeded random placement inside the bounding cube).
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boid::{Boid, BoidState};
use crate::error::{FlockError, FlockResult};
use crate::vector::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnPattern {
    // Cubic lattice centred on the origin
    Lattice { spacing: f32 },
    // Uniform placement inside the bounding cube, reproducible for a given seed
    Random { seed: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnConfig {
    pub count: usize,
    pub edge: f32,
    pub pattern: SpawnPattern,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    pub fn new() -> Self {
        Self { boids: Vec::new() }
    }

    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        Self {
            boids: positions.into_iter().map(Boid::new).collect(),
        }
    }

    pub fn spawn(config: &SpawnConfig) -> FlockResult<Self> {
        let positions = match config.pattern {
            SpawnPattern::Lattice { spacing } => lattice_positions(config.count, spacing, config.edge)?,
            SpawnPattern::Random { seed } => random_positions(config.count, config.edge, seed)?,
        };

        Ok(Self::from_positions(positions))
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // Full boid data, forces included. For tests and introspection; the renderer reads `states`
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    // Read-only view handed to the renderer: positions and velocities only
    pub fn states(&self) -> impl ExactSizeIterator<Item = BoidState> + '_ {
        self.boids.iter().map(Boid::state)
    }
}

// Smallest side length whose cube holds `count` points
fn lattice_side(count: usize) -> usize {
    let mut side = 0;
    while side * side * side < count {
        side += 1;
    }
    side
}

fn lattice_positions(count: usize, spacing: f32, edge: f32) -> FlockResult<Vec<Vec3>> {
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Err(FlockError::InvalidSpacing(spacing));
    }

    let side = lattice_side(count);
    let half_width = side.saturating_sub(1) as f32 * spacing / 2.0;
    if half_width > edge {
        return Err(FlockError::SpawnOutOfBounds { half_width, edge });
    }

    // Fill x first, then y, then z
    let positions = (0..count)
        .map(|i| {
            let x = (i % side) as f32;
            let y = ((i / side) % side) as f32;
            let z = (i / (side * side)) as f32;
            Vec3::new(x, y, z) * spacing - Vec3::splat(half_width)
        })
        .collect();

    Ok(positions)
}

fn random_positions(count: usize, edge: f32, seed: u64) -> FlockResult<Vec<Vec3>> {
    if !(edge > 0.0 && edge.is_finite()) {
        return Err(FlockError::InvalidExtent(edge));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let positions = (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-edge..edge),
                rng.gen_range(-edge..edge),
                rng.gen_range(-edge..edge),
            )
        })
        .collect();

    Ok(positions)
}
