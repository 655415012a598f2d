/// All game entity types — pure data, no logic.

use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

// ── Shapes & speeds ───────────────────────────────────────────────────────────

pub const CRAFT_WIDTH: f32 = 50.0;
pub const CRAFT_HEIGHT: f32 = 50.0;
pub const CRAFT_SPEED: f32 = 5.0;
/// Distance between the craft's row and the bottom of the viewport.
pub const CRAFT_BOTTOM_OFFSET: f32 = 100.0;

pub const PROJECTILE_WIDTH: f32 = 10.0;
pub const PROJECTILE_HEIGHT: f32 = 20.0;
pub const PROJECTILE_SPEED: f32 = 8.0;
/// Horizontal offset from the craft's left edge to the muzzle.
pub const MUZZLE_OFFSET: f32 = 20.0;

pub const ADVERSARY_WIDTH: f32 = 50.0;
pub const ADVERSARY_HEIGHT: f32 = 50.0;
/// Adversary speed at the start of every session.
pub const BASE_ADVERSARY_SPEED: f32 = 2.0;
/// How long a struck adversary stays visible before it is pruned.
pub const EXPLOSION_DELAY: Duration = Duration::from_millis(100);

pub const OBSTACLE_WIDTH: f32 = 40.0;
pub const OBSTACLE_HEIGHT: f32 = 40.0;
/// Obstacles never spawn within this distance above the craft's row.
pub const OBSTACLE_CLEARANCE: f32 = 80.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world pixels. `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// World dimensions, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

// ── Difficulty ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Values derived from the chosen difficulty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyParams {
    /// Obstacles added on every spawner tick.
    pub obstacles_per_tick: u32,
    /// Added to the session's adversary speed once per frame.
    pub speed_increment: f32,
}

impl Difficulty {
    pub fn params(self) -> DifficultyParams {
        let (obstacles_per_tick, speed_increment) = match self {
            Difficulty::Easy => (1, 0.002),
            Difficulty::Medium => (4, 0.01),
            Difficulty::Hard => (6, 0.02),
        };
        DifficultyParams {
            obstacles_per_tick,
            speed_increment,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "med" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Craft {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Adversary {
    pub x: f32,
    pub y: f32,
    /// Copied from the session speed at spawn; later ramps do not apply.
    pub speed: f32,
    /// Time since this adversary was struck, or `None` while it is intact.
    pub exploded_for: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
}

impl Craft {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, CRAFT_WIDTH, CRAFT_HEIGHT)
    }
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

impl Adversary {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ADVERSARY_WIDTH, ADVERSARY_HEIGHT)
    }

    pub fn is_exploded(&self) -> bool {
        self.exploded_for.is_some()
    }
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Key state sampled by the host once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Fire was pressed since the previous frame.
    pub fire: bool,
}

// ── Session state ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Running,
    Ended,
}

/// Everything one play-through owns.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct PlayState {
    pub craft: Craft,
    pub projectiles: Vec<Projectile>,
    pub adversaries: Vec<Adversary>,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Speed handed to the next adversary the spawner creates.
    pub adversary_speed: f32,
    pub difficulty: Difficulty,
    pub params: DifficultyParams,
    /// Set when an adversary reaches the craft.
    pub terminal: bool,
    pub elapsed: Duration,
    pub frame: u64,
    pub viewport: Viewport,
}
