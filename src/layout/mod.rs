//! Page geometry and line placement.
//!
//! Text widths come from [`Font::approx_text_width`](crate::Font::approx_text_width)
//! rather than real glyph metrics, and lines never wrap: a line that is too long
//! simply runs past the right margin.

mod geometry;
mod lines;
mod margins;

pub use geometry::*;
pub use lines::*;
pub use margins::*;
