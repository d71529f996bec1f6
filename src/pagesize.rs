//! Page sizes, as (width, height) in points, portrait orientation.
//!
//! Layout files are always rendered on [`LETTER`] paper; library users can pick
//! another size through [`PageGeometry`](crate::layout::PageGeometry).

use crate::rect::Rect;
use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// US Letter, 8.5 x 11 inches
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

/// The full page rectangle, anchored at the origin, as written to `/MediaBox`
pub fn media_box(size: PageSize) -> Rect {
    Rect {
        x1: Pt(0.0),
        y1: Pt(0.0),
        x2: size.0,
        y2: size.1,
    }
}
