/// Rendering layer — all terminal I/O lives here.
///
/// `TerminalSurface` maps world pixels onto character cells and translates
/// draw calls into queued crossterm commands.  No game logic is performed.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use space_shooter::entities::{Rect, Viewport};
use space_shooter::surface::{DrawSurface, Paint};

/// World pixels covered by one terminal cell.  Cells are roughly twice as
/// tall as they are wide, so this keeps shapes square on screen.
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

const C_HINT: Color = Color::DarkGrey;
const CONTROLS_HINT: &str = "← → / A D : Move   SPACE : Shoot   R : New game   Q : Quit";

/// World extent that exactly fills a terminal of the given size.
pub fn world_viewport(cols: u16, rows: u16) -> Viewport {
    Viewport {
        width: f32::from(cols) * CELL_WIDTH,
        height: f32::from(rows) * CELL_HEIGHT,
    }
}

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::White => Color::White,
        Paint::Red => Color::Red,
        Paint::Green => Color::Green,
        Paint::Orange => Color::DarkYellow,
        Paint::Gray => Color::Grey,
        Paint::Yellow => Color::Yellow,
    }
}

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    cols: u16,
    rows: u16,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, cols: u16, rows: u16) -> Self {
        Self { out, cols, rows }
    }

    /// Half-open cell span covered by `[start, end)` world pixels, clipped.
    fn span(start: f32, end: f32, cell: f32, limit: u16) -> (u16, u16) {
        let lo = (start / cell).floor().max(0.0);
        let hi = (end / cell).ceil().min(f32::from(limit));
        if hi <= lo {
            (0, 0)
        } else {
            (lo as u16, hi as u16)
        }
    }
}

impl<W: Write> DrawSurface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> std::io::Result<()> {
        let (c0, c1) = Self::span(rect.x, rect.x + rect.width, CELL_WIDTH, self.cols);
        let (r0, r1) = Self::span(rect.y, rect.y + rect.height, CELL_HEIGHT, self.rows);
        if c0 == c1 || r0 == r1 {
            return Ok(());
        }

        let fill = "█".repeat(usize::from(c1 - c0));
        self.out.queue(style::SetForegroundColor(paint_color(paint)))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&fill))?;
        }
        Ok(())
    }

    /// `y` is the text baseline, as on a canvas.
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        size: u16,
        paint: Paint,
    ) -> std::io::Result<()> {
        let col = (x / CELL_WIDTH).floor().max(0.0) as u16;
        let row = ((y - f32::from(size)) / CELL_HEIGHT).floor().max(0.0) as u16;
        if col >= self.cols || row >= self.rows {
            return Ok(());
        }

        let visible: String = text.chars().take(usize::from(self.cols - col)).collect();
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(paint_color(paint)))?;
        if size >= 48 {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.out.queue(Print(visible))?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        let last_row = self.rows.saturating_sub(1);
        let hint: String = CONTROLS_HINT.chars().take(usize::from(self.cols)).collect();
        self.out.queue(cursor::MoveTo(0, last_row))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(hint))?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, last_row))?;
        self.out.flush()
    }
}
