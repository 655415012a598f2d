/// Entity factories and the fixed-cadence spawner.
///
/// Placement randomness always comes through an injected `Rng` so tests can
/// pin it with a seed.

use std::time::Duration;

use log::trace;
use rand::Rng;

use crate::entities::{
    Adversary, Craft, Obstacle, PlayState, Projectile, Viewport, ADVERSARY_HEIGHT,
    ADVERSARY_WIDTH, CRAFT_BOTTOM_OFFSET, CRAFT_SPEED, CRAFT_WIDTH, MUZZLE_OFFSET,
    OBSTACLE_CLEARANCE, OBSTACLE_WIDTH, PROJECTILE_SPEED,
};

/// Time between spawner ticks.
pub const SPAWN_PERIOD: Duration = Duration::from_secs(1);

// ── Factories ─────────────────────────────────────────────────────────────────

/// Uniform in `[0, max)`, or 0 when the extent is empty.
fn random_up_to(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

pub fn new_craft(viewport: Viewport) -> Craft {
    let max_x = (viewport.width - CRAFT_WIDTH).max(0.0);
    Craft {
        x: (viewport.width / 2.0).min(max_x),
        y: (viewport.height - CRAFT_BOTTOM_OFFSET).max(0.0),
        speed: CRAFT_SPEED,
    }
}

pub fn new_projectile(craft: &Craft) -> Projectile {
    Projectile {
        x: craft.x + MUZZLE_OFFSET,
        y: craft.y,
        speed: PROJECTILE_SPEED,
    }
}

/// A fresh adversary just above the top edge, moving at `speed` for life.
pub fn new_adversary(viewport: Viewport, speed: f32, rng: &mut impl Rng) -> Adversary {
    Adversary {
        x: random_up_to(rng, viewport.width - ADVERSARY_WIDTH),
        y: -ADVERSARY_HEIGHT,
        speed,
        exploded_for: None,
    }
}

/// An obstacle somewhere above the craft's row, never closer than
/// `OBSTACLE_CLEARANCE`.
pub fn new_obstacle(viewport: Viewport, craft: &Craft, rng: &mut impl Rng) -> Obstacle {
    let ceiling = (craft.y - OBSTACLE_CLEARANCE).min(viewport.height);
    Obstacle {
        x: random_up_to(rng, viewport.width - OBSTACLE_WIDTH),
        y: random_up_to(rng, ceiling),
    }
}

/// One spawner tick: a single adversary plus the difficulty's obstacle count.
/// A terminal session is returned unchanged.
pub fn spawn_wave(state: &PlayState, rng: &mut impl Rng) -> PlayState {
    if state.terminal {
        return state.clone();
    }

    let mut adversaries = state.adversaries.clone();
    adversaries.push(new_adversary(state.viewport, state.adversary_speed, rng));

    let mut obstacles = state.obstacles.clone();
    for _ in 0..state.params.obstacles_per_tick {
        obstacles.push(new_obstacle(state.viewport, &state.craft, rng));
    }

    trace!(
        "spawn tick: {} adversaries, {} obstacles live",
        adversaries.len(),
        obstacles.len()
    );

    PlayState {
        adversaries,
        obstacles,
        ..state.clone()
    }
}

// ── Spawner timer ─────────────────────────────────────────────────────────────

/// Recurring timer fed by host-measured elapsed time.
///
/// The owner polls it once per frame; once cancelled it never fires again.
#[derive(Debug)]
pub struct Spawner {
    period: Duration,
    since_last: Duration,
    cancelled: bool,
}

impl Spawner {
    pub fn start(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            since_last: Duration::ZERO,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    /// Advance by `dt` and return how many ticks fell due.
    pub fn poll(&mut self, dt: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.since_last += dt;
        let mut fired = 0;
        while self.since_last >= self.period {
            self.since_last -= self.period;
            fired += 1;
        }
        fired
    }
}
