//! Headless session driver
//!
//! Plays one or more runs back to back and reports how each ended.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::autopilot::autopilot_input;
use crate::settings::Settings;
use crate::sim::{FixedStep, GameEvent, GameState, PieceKind, Snapshot, TickInput, tick};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Collided { kind: PieceKind },
    TickLimit,
}

/// Result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session: u32,
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub spawned: u32,
    pub jumps: u32,
    pub outcome: Outcome,
}

/// Drives a [`GameState`] according to [`Settings`]
pub struct Runner {
    settings: Settings,
    state: GameState,
}

impl Runner {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        Self {
            settings,
            state: GameState::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play every configured session; `on_snapshot` sees periodic snapshots
    pub fn run(&mut self, mut on_snapshot: impl FnMut(&Snapshot)) -> Vec<SessionSummary> {
        let mut summaries = Vec::new();
        for session in 1..=self.settings.sessions {
            if session > 1 {
                self.state.reset_session();
            }
            let summary = self.run_session(session, &mut on_snapshot);
            log::info!(
                "Session {} over: score {} in {} ticks ({:?})",
                summary.session,
                summary.score,
                summary.ticks,
                summary.outcome
            );
            summaries.push(summary);
        }
        summaries
    }

    fn run_session(
        &mut self,
        session: u32,
        on_snapshot: &mut impl FnMut(&Snapshot),
    ) -> SessionSummary {
        log::info!("Session {} starting (seed {})", session, self.state.seed);
        let mut clock = FixedStep::new();
        let mut last_frame = Instant::now();
        let mut spawned = 0;
        let mut jumps = 0;

        let outcome = 'session: loop {
            let steps = if self.settings.realtime {
                std::thread::sleep(Duration::from_millis(2));
                let now = Instant::now();
                let dt = now.duration_since(last_frame).as_secs_f32();
                last_frame = now;
                clock.advance(dt)
            } else {
                1
            };

            for _ in 0..steps {
                if self.state.time_ticks >= self.settings.max_ticks {
                    break 'session Outcome::TickLimit;
                }

                let input = if self.settings.autopilot {
                    autopilot_input(&self.state)
                } else {
                    TickInput::default()
                };

                for event in tick(&mut self.state, &input) {
                    match event {
                        GameEvent::Spawned { .. } => spawned += 1,
                        GameEvent::Jumped => jumps += 1,
                        GameEvent::Collided { kind, .. } => break 'session Outcome::Collided { kind },
                        _ => {}
                    }
                }

                let every = self.settings.snapshot_every;
                if every > 0 && self.state.time_ticks % every == 0 {
                    let snapshot = self.state.snapshot();
                    match serde_json::to_string(&snapshot) {
                        Ok(json) => log::trace!("tick {}: {}", self.state.time_ticks, json),
                        Err(err) => log::warn!("Could not encode snapshot: {}", err),
                    }
                    on_snapshot(&snapshot);
                }
            }
        };

        SessionSummary {
            session,
            seed: self.state.seed,
            score: self.state.score,
            ticks: self.state.time_ticks,
            spawned,
            jumps,
            outcome,
        }
    }
}
