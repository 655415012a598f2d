/// Turns a `PlayState` into draw calls.  No game logic lives here.

use crate::compute::format_elapsed;
use crate::entities::PlayState;
use crate::surface::{DrawSurface, Paint};

const HUD_FONT: u16 = 24;
const TITLE_FONT: u16 = 48;

/// Draw one complete frame: craft, projectiles, adversaries, obstacles and
/// the score overlay.
pub fn render_frame<S: DrawSurface>(surface: &mut S, state: &PlayState) -> Result<(), S::Error> {
    surface.clear()?;

    surface.fill_rect(state.craft.bounds(), Paint::White)?;

    for projectile in &state.projectiles {
        surface.fill_rect(projectile.bounds(), Paint::Red)?;
    }

    for adversary in &state.adversaries {
        let paint = if adversary.is_exploded() {
            Paint::Orange
        } else {
            Paint::Green
        };
        surface.fill_rect(adversary.bounds(), paint)?;
    }

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.bounds(), Paint::Gray)?;
    }

    draw_hud(surface, state)?;
    surface.present()
}

fn draw_hud<S: DrawSurface>(surface: &mut S, state: &PlayState) -> Result<(), S::Error> {
    surface.draw_text(10.0, 30.0, &format!("Score: {}", state.score), HUD_FONT, Paint::White)?;
    surface.draw_text(
        10.0,
        50.0,
        &format!("Speed: {:.2}", state.adversary_speed),
        HUD_FONT,
        Paint::White,
    )?;
    surface.draw_text(
        10.0,
        70.0,
        &format!("Time: {}", format_elapsed(state.elapsed)),
        HUD_FONT,
        Paint::White,
    )
}

/// End-of-session overlay, drawn over whatever the last frame left behind.
pub fn render_summary<S: DrawSurface>(surface: &mut S, state: &PlayState) -> Result<(), S::Error> {
    let cx = state.viewport.width / 2.0;
    let cy = state.viewport.height / 2.0;

    surface.draw_text(cx - 100.0, cy, "Game Over", TITLE_FONT, Paint::White)?;
    surface.draw_text(
        cx - 50.0,
        cy + 40.0,
        &format!("Score: {}", state.score),
        HUD_FONT,
        Paint::Yellow,
    )?;
    surface.draw_text(
        cx - 50.0,
        cy + 70.0,
        &format!("Time: {}", format_elapsed(state.elapsed)),
        HUD_FONT,
        Paint::White,
    )?;
    surface.present()
}
