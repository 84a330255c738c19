//! Fixed timestep simulation clock
//!
//! The host calls in with whatever frame delta it measured; the clock clamps
//! it, applies the time scale and feeds the resolver fixed `SIM_DT` ticks.
//! It never blocks and owns no timer.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::tuning::Tuning;

/// Cooperative per-tick driver for the shot in motion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationClock {
    /// Sole mutual-exclusion flag for shot and reset requests
    simulating: bool,
    /// Scaled simulation time not yet consumed by a tick
    accumulator: f32,
    /// Ticks run since the session started
    ticks: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start driving a new shot
    pub fn begin(&mut self) {
        self.simulating = true;
        self.accumulator = 0.0;
    }

    /// Stop driving (ball at rest or shot cancelled)
    pub fn stop(&mut self) {
        self.simulating = false;
        self.accumulator = 0.0;
    }

    /// Advance by one host frame
    ///
    /// Runs `step` once per fixed tick until it reports a result or the
    /// frame's time is used up. A result stops the clock.
    pub fn drive<T, F>(&mut self, frame_dt: f32, tuning: &Tuning, mut step: F) -> Option<T>
    where
        F: FnMut(f32) -> Option<T>,
    {
        if !self.simulating {
            return None;
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, tuning.max_frame_dt)
        } else {
            0.0
        };
        self.accumulator += frame_dt * tuning.time_scale;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.ticks += 1;
            if let Some(result) = step(SIM_DT) {
                self.stop();
                return Some(result);
            }
        }

        // Drop backlog instead of spiralling
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        None
    }
}
