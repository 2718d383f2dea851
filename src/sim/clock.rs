//! Fixed-step accumulator for real-time drivers

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame time honored, in seconds
const MAX_FRAME_DT: f32 = 0.25;

/// Turns variable frame times into whole simulation ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `dt` seconds of wall time; returns how many ticks to run.
    ///
    /// Long stalls are capped at [`MAX_SUBSTEPS`] and the backlog dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = 0.0;
        }
        steps
    }
}
