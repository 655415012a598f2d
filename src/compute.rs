/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `PlayState` and returns a brand-new `PlayState`.  The frame step never
/// draws and never touches randomness; spawning lives in `spawn`.

use std::time::Duration;

use crate::collision::overlaps;
use crate::entities::{
    Adversary, Difficulty, InputState, PlayState, Projectile, Viewport, BASE_ADVERSARY_SPEED,
    CRAFT_WIDTH, EXPLOSION_DELAY,
};
use crate::spawn::{new_craft, new_projectile};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state of a session.
pub fn init_state(difficulty: Difficulty, viewport: Viewport) -> PlayState {
    PlayState {
        craft: new_craft(viewport),
        projectiles: Vec::new(),
        adversaries: Vec::new(),
        obstacles: Vec::new(),
        score: 0,
        adversary_speed: BASE_ADVERSARY_SPEED,
        difficulty,
        params: difficulty.params(),
        terminal: false,
        elapsed: Duration::ZERO,
        frame: 0,
        viewport,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

fn max_craft_x(viewport: Viewport) -> f32 {
    (viewport.width - CRAFT_WIDTH).max(0.0)
}

pub fn move_craft_left(state: &PlayState) -> PlayState {
    let mut next = state.clone();
    next.craft.x = (state.craft.x - state.craft.speed).clamp(0.0, max_craft_x(state.viewport));
    next
}

pub fn move_craft_right(state: &PlayState) -> PlayState {
    let mut next = state.clone();
    next.craft.x = (state.craft.x + state.craft.speed).clamp(0.0, max_craft_x(state.viewport));
    next
}

/// Launch a projectile from the craft's current position.
pub fn fire_projectile(state: &PlayState) -> PlayState {
    let mut projectiles = state.projectiles.clone();
    projectiles.push(new_projectile(&state.craft));
    PlayState {
        projectiles,
        ..state.clone()
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  `dt` is the host time since the
/// previous frame; motion itself is per-frame, `dt` only feeds the session
/// clock and explosion timers.
pub fn tick(state: &PlayState, input: &InputState, dt: Duration) -> PlayState {
    if state.terminal {
        return state.clone();
    }

    // ── 1. Craft ─────────────────────────────────────────────────────────────
    let mut moved = state.clone();
    if input.left {
        moved = move_craft_left(&moved);
    }
    if input.right {
        moved = move_craft_right(&moved);
    }
    if input.fire {
        moved = fire_projectile(&moved);
    }
    let craft = moved.craft.clone();

    // ── 2. Move projectiles, drop those past the top ─────────────────────────
    let projectiles: Vec<Projectile> = moved
        .projectiles
        .iter()
        .filter_map(|p| {
            let y = p.y - p.speed;
            if y < 0.0 {
                None
            } else {
                Some(Projectile { y, ..p.clone() })
            }
        })
        .collect();

    // ── 3. Collision: projectiles ↔ obstacles ────────────────────────────────
    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .filter(|p| {
            !state
                .obstacles
                .iter()
                .any(|o| overlaps(&p.bounds(), &o.bounds()))
        })
        .collect();

    // ── 4. Collision: projectiles ↔ adversaries ──────────────────────────────
    let mut struck: Vec<usize> = Vec::new();
    let mut used_projectiles: Vec<usize> = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let target = state
            .adversaries
            .iter()
            .enumerate()
            .find(|(ai, a)| {
                !a.is_exploded()
                    && !struck.contains(ai)
                    && overlaps(&projectile.bounds(), &a.bounds())
            })
            .map(|(ai, _)| ai);
        if let Some(ai) = target {
            struck.push(ai);
            used_projectiles.push(pi);
        }
    }

    let projectiles: Vec<Projectile> = projectiles
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !used_projectiles.contains(i))
        .map(|(_, p)| p)
        .collect();

    // ── 5. Ramp the speed handed to future adversaries ───────────────────────
    let adversary_speed = state.adversary_speed + state.params.speed_increment.max(0.0);

    // ── 6. Move adversaries, age explosions, check the craft ────────────────
    let craft_box = craft.bounds();
    let mut terminal = false;
    let mut adversaries: Vec<Adversary> = Vec::with_capacity(state.adversaries.len());

    for (ai, adversary) in state.adversaries.iter().enumerate() {
        let exploded_for = if struck.contains(&ai) {
            Some(Duration::ZERO)
        } else {
            adversary.exploded_for.map(|t| t + dt)
        };
        if exploded_for.is_some_and(|t| t >= EXPLOSION_DELAY) {
            continue;
        }

        let y = adversary.y + adversary.speed;
        if y > state.viewport.height {
            continue;
        }

        let next = Adversary {
            y,
            exploded_for,
            ..adversary.clone()
        };
        if overlaps(&next.bounds(), &craft_box) {
            terminal = true;
        }
        adversaries.push(next);
    }

    PlayState {
        craft,
        projectiles,
        adversaries,
        score: state.score + struck.len() as u32,
        adversary_speed,
        terminal,
        elapsed: state.elapsed + dt,
        frame: state.frame + 1,
        ..moved
    }
}

/// `MM:SS` rendering of a session clock.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
