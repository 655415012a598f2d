/// Session controller: Idle → Running → Ended → Idle.
///
/// Owns the live `PlayState`, the spawner timer and the RNG.  The host calls
/// [`Session::advance`] once per display frame and keeps calling it for as
/// long as it returns [`FrameOutcome::Continue`].

use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compute::{init_state, tick};
use crate::entities::{Difficulty, InputState, PlayState, SessionStatus, Viewport};
use crate::render::{render_frame, render_summary};
use crate::spawn::{spawn_wave, Spawner, SPAWN_PERIOD};
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// Nothing left to simulate until the next transition.
    Stop,
}

#[derive(Debug)]
pub struct Session {
    viewport: Viewport,
    status: SessionStatus,
    play: Option<PlayState>,
    spawner: Option<Spawner>,
    rng: StdRng,
}

impl Session {
    pub fn new(viewport: Viewport, rng: StdRng) -> Self {
        Self {
            viewport,
            status: SessionStatus::Idle,
            play: None,
            spawner: None,
            rng,
        }
    }

    pub fn seeded(viewport: Viewport, seed: u64) -> Self {
        Self::new(viewport, StdRng::seed_from_u64(seed))
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn play(&self) -> Option<&PlayState> {
        self.play.as_ref()
    }

    pub fn play_mut(&mut self) -> Option<&mut PlayState> {
        self.play.as_mut()
    }

    pub fn spawner_active(&self) -> bool {
        self.spawner.as_ref().is_some_and(Spawner::is_active)
    }

    /// Start a fresh session.  Any previous session, running or not, is
    /// discarded together with its spawner.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.cancel_spawner();

        self.play = Some(init_state(difficulty, self.viewport));
        self.spawner = Some(Spawner::start(SPAWN_PERIOD));
        self.status = SessionStatus::Running;

        let params = difficulty.params();
        info!(
            "session started: difficulty={} obstacles/tick={} speed+={}",
            difficulty.as_str(),
            params.obstacles_per_tick,
            params.speed_increment
        );
    }

    /// Return to the start screen.  A no-op while already idle.
    pub fn new_session(&mut self) {
        if self.status == SessionStatus::Idle {
            return;
        }
        self.cancel_spawner();
        self.play = None;
        self.status = SessionStatus::Idle;
        info!("back to start screen");
    }

    /// Run one frame: spawner ticks that fell due within `dt`, then the
    /// simulation step, then drawing.
    pub fn advance<S: DrawSurface>(
        &mut self,
        input: &InputState,
        dt: Duration,
        surface: &mut S,
    ) -> Result<FrameOutcome, S::Error> {
        match self.status {
            SessionStatus::Idle => return Ok(FrameOutcome::Stop),
            SessionStatus::Ended => {
                if let Some(play) = &self.play {
                    render_summary(surface, play)?;
                }
                return Ok(FrameOutcome::Stop);
            }
            SessionStatus::Running => {}
        }

        let Some(mut play) = self.play.take() else {
            self.status = SessionStatus::Idle;
            return Ok(FrameOutcome::Stop);
        };

        let due = self.spawner.as_mut().map_or(0, |s| s.poll(dt));
        for _ in 0..due {
            play = spawn_wave(&play, &mut self.rng);
        }

        let play = tick(&play, input, dt);
        let terminal = play.terminal;
        let play = self.play.insert(play);

        render_frame(surface, play)?;

        if !terminal {
            return Ok(FrameOutcome::Continue);
        }

        info!(
            "game over: score={} after {:.1}s",
            play.score,
            play.elapsed.as_secs_f32()
        );
        self.status = SessionStatus::Ended;
        self.cancel_spawner();
        if let Some(play) = &self.play {
            render_summary(surface, play)?;
        }
        Ok(FrameOutcome::Stop)
    }

    fn cancel_spawner(&mut self) {
        if let Some(mut spawner) = self.spawner.take() {
            spawner.cancel();
            debug!("spawner cancelled");
        }
    }
}
