//! Session lifecycle: idle, running, ended.
//!
//! A [`Session`] owns every piece of mutable game state (bird, pipe pool,
//! score, frame clock, best score) for as long as the application runs.
//! Front ends drive it with [`Session::start`], [`Session::jump`] and one
//! [`Session::frame`] call per rendered frame.

use super::collaborators::{FeedbackSink, HighScoreStore, Preload, RenderSink, Snapshot};
use super::collision::{self, Termination};
use super::config::SessionParams;
use super::entities::{spawn_pipes, Bird, Pipe, Playfield};
use super::error::GameError;
use super::game_loop::FrameClock;
use super::{physics, scoring};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Menu shown, nothing simulated yet.
    Idle,
    /// Frames advance the simulation.
    Running,
    /// Last round finished; shown as the menu until the next start.
    Ended { score: u32, cause: Termination },
}

/// What a call to [`Session::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No session was running; nothing happened.
    Inactive,
    /// The frame was rendered and the next one should be scheduled.
    Continue { ticks: u32 },
    /// The round ended on this frame.
    Ended {
        score: u32,
        new_best: bool,
        cause: Termination,
    },
}

/// State of one round, rebuilt on every start.
#[derive(Debug, Clone)]
struct Round {
    bird: Bird,
    pipes: Vec<Pipe>,
    score: u32,
    clock: FrameClock,
    ticks: u64,
}

pub struct Session<S: HighScoreStore, R: Rng> {
    params: SessionParams,
    playfield: Playfield,
    phase: Phase,
    round: Option<Round>,
    best_score: Option<u32>,
    store: S,
    rng: R,
}

impl<S: HighScoreStore, R: Rng> Session<S, R> {
    /// Create an idle session. The best score is read from `store` once here.
    pub fn new(params: SessionParams, playfield: Playfield, store: S, rng: R) -> Self {
        let best_score = match store.load() {
            Ok(best) => best,
            Err(e) => {
                warn!(error = %e, "Could not read best score, starting without one");
                None
            }
        };

        Self {
            params,
            playfield,
            phase: Phase::Idle,
            round: None,
            best_score,
            store,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score of the current or most recent round.
    pub fn score(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.score)
    }

    /// Physics ticks run in the current or most recent round.
    pub fn ticks(&self) -> u64 {
        self.round.as_ref().map_or(0, |r| r.ticks)
    }

    pub fn bird(&self) -> Option<&Bird> {
        self.round.as_ref().map(|r| &r.bird)
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.round.as_ref().map_or(&[], |r| r.pipes.as_slice())
    }

    pub fn clock(&self) -> Option<&FrameClock> {
        self.round.as_ref().map(|r| &r.clock)
    }

    /// View of the current or most recent round.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.round.as_ref().map(|r| Snapshot {
            bird: &r.bird,
            pipes: &r.pipes,
            score: r.score,
            best_score: self.best_score,
            playfield: &self.playfield,
        })
    }

    /// Replace the parameter bundle. Only allowed between rounds.
    pub fn set_params(&mut self, params: SessionParams) -> Result<(), GameError> {
        if self.is_running() {
            return Err(GameError::AlreadyRunning);
        }
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Begin a fresh round at timestamp `now`.
    ///
    /// Nothing changes if preloading or parameter validation fails.
    pub fn start<P: Preload>(&mut self, now: Duration, preload: &mut P) -> Result<(), GameError> {
        if self.is_running() {
            return Err(GameError::AlreadyRunning);
        }

        if let Err(e) = preload.preload() {
            error!(error = %e, "Session start aborted");
            return Err(e.into());
        }
        self.params.validate()?;

        let bird = Bird::spawn(&self.playfield, &self.params);
        let pipes = spawn_pipes(&self.playfield, &self.params, &mut self.rng);
        info!(pipes = pipes.len(), best = ?self.best_score, "Session started");

        self.round = Some(Round {
            bird,
            pipes,
            score: 0,
            clock: FrameClock::new(now, self.params.max_frame_delta),
            ticks: 0,
        });
        self.phase = Phase::Running;
        Ok(())
    }

    /// Overwrite the bird's velocity with the jump impulse.
    ///
    /// Ignored unless a round is running. Returns whether it was applied.
    pub fn jump<F: FeedbackSink>(&mut self, feedback: &mut F) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.round.as_mut() {
            Some(round) => {
                round.bird.velocity = self.params.jump_impulse;
                feedback.on_jump();
                true
            }
            None => false,
        }
    }

    /// Process one rendered frame at timestamp `now`.
    ///
    /// Drains whole ticks from the accumulator, scores once, renders, then
    /// checks for the end of the round.
    pub fn frame<V: RenderSink, F: FeedbackSink>(
        &mut self,
        now: Duration,
        render: &mut V,
        feedback: &mut F,
    ) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Inactive;
        }
        let Some(round) = self.round.as_mut() else {
            return FrameOutcome::Inactive;
        };

        let Round {
            bird,
            pipes,
            score,
            clock,
            ticks: total_ticks,
        } = round;
        let playfield = &self.playfield;
        let params = &self.params;
        let rng = &mut self.rng;

        clock.begin_frame(now);
        let tick_score = *score;
        let ticks = clock.drain(|| {
            physics::step(bird, pipes, tick_score, playfield, params, rng);
        });
        *total_ticks += ticks as u64;

        let before = *score;
        *score = scoring::update_score(bird, pipes, *score);
        if *score > before {
            debug!(score = *score, "Pipe passed");
            feedback.on_score(*score);
        }

        render.render(&Snapshot {
            bird,
            pipes,
            score: *score,
            best_score: self.best_score,
            playfield,
        });

        match collision::termination(bird, pipes, playfield, params) {
            Some(cause) => {
                let final_score = *score;
                self.finish(final_score, cause, feedback)
            }
            None => FrameOutcome::Continue { ticks },
        }
    }

    fn finish<F: FeedbackSink>(
        &mut self,
        score: u32,
        cause: Termination,
        feedback: &mut F,
    ) -> FrameOutcome {
        let new_best = self.best_score.map_or(true, |best| score >= best);
        if new_best {
            self.best_score = Some(score);
            if let Err(e) = self.store.save(score) {
                warn!(error = %e, score, "Could not persist best score");
            }
        }

        info!(score, ?cause, new_best, ticks = self.ticks(), "Session ended");
        self.phase = Phase::Ended { score, cause };
        feedback.on_session_end(score);

        FrameOutcome::Ended {
            score,
            new_best,
            cause,
        }
    }
}
