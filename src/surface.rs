/// Drawing capability the simulation renders onto.
///
/// Coordinates are world pixels.  Implementors decide how a pixel maps onto
/// their medium; the simulation owns no rendering state.

use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    White,
    Red,
    Green,
    Orange,
    Gray,
    Yellow,
}

pub trait DrawSurface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), Self::Error>;

    /// `size` is a nominal font height in pixels.
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        size: u16,
        paint: Paint,
    ) -> Result<(), Self::Error>;

    /// Called once every draw call of a frame has been issued.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
