use crate::entities::Rect;

/// True iff the two rectangles share interior area.
///
/// Rectangles that only touch along an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
