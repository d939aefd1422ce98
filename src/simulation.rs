/*
 * Simulation Module
 *
 * SimulationState bundles the flock with the parameters it is simulated under
 * and drives the fixed-topology tick: interaction pass, then integration pass.
 * The caller decides whether a tick runs (the "running" flag) and the step is
 * always the fixed `delta_t` from the parameters, never wall-clock time.
 */

use log::{info, trace};

use crate::boid::BoidState;
use crate::error::FlockResult;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::physics;

pub struct SimulationState {
    flock: Flock,
    pub params: SimulationParams,
    ticks: u64,
}

impl SimulationState {
    // Spawn the configured flock on its lattice
    pub fn new(params: SimulationParams) -> FlockResult<Self> {
        let flock = Flock::spawn(&params.spawn_config())?;
        info!("Spawned {} boids (spacing {})", flock.len(), params.spacing);

        Ok(Self {
            flock,
            params,
            ticks: 0,
        })
    }

    pub fn with_flock(flock: Flock, params: SimulationParams) -> Self {
        Self {
            flock,
            params,
            ticks: 0,
        }
    }

    // Introspection access to the whole flock. The viewer only goes through `states`
    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self) {
        trace!("tick {}", self.ticks);
        physics::step(&mut self.flock, &self.params, self.params.delta_t);
        self.ticks += 1;
    }

    // Tick only when asked to; returns whether a tick ran
    pub fn advance(&mut self, run: bool) -> bool {
        if run {
            self.tick();
        }
        run
    }

    // Rebuild the flock from the current parameters. On failure the old flock stays.
    pub fn reset(&mut self) -> FlockResult<()> {
        let flock = Flock::spawn(&self.params.spawn_config())?;
        info!("Reset flock to {} boids", flock.len());

        self.flock = flock;
        self.ticks = 0;
        Ok(())
    }

    pub fn states(&self) -> impl ExactSizeIterator<Item = BoidState> + '_ {
        self.flock.states()
    }
}
