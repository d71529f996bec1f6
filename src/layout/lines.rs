use super::PageGeometry;
use crate::font::Font;
use crate::parser::{LineSpec, PageSpec};
use crate::units::Pt;

/// A line with its baseline start coordinates resolved
#[derive(Clone, PartialEq, Debug)]
pub struct PositionedLine<'a> {
    pub line: &'a LineSpec,
    pub x: Pt,
    pub y: Pt,
}

/// Positions every line of a page.
///
/// Top-anchored lines stack downwards from the top baseline in declaration order.
/// Bottom-anchored lines stack upwards from the bottom baseline, starting with the
/// one declared last, so the last footer line in the file sits lowest on the page.
/// Spacers take up room like any other line.
///
/// The result holds the top lines followed by the bottom lines, each in the order
/// they were placed.
pub fn layout_page<'a>(
    page: &'a PageSpec,
    geometry: &PageGeometry,
    font: &Font,
) -> Vec<PositionedLine<'a>> {
    let (bottom, top): (Vec<&LineSpec>, Vec<&LineSpec>) = page
        .lines
        .iter()
        .partition(|line| line.style.is_bottom_anchored());

    let mut positioned = Vec::with_capacity(page.lines.len());

    let mut y = geometry.top_baseline;
    for line in top {
        positioned.push(place(line, y, geometry, font));
        y -= geometry.advance(line.style.font_size);
    }

    let mut y = geometry.bottom_baseline;
    for line in bottom.into_iter().rev() {
        positioned.push(place(line, y, geometry, font));
        y += geometry.advance(line.style.font_size);
    }

    positioned
}

fn place<'a>(
    line: &'a LineSpec,
    y: Pt,
    geometry: &PageGeometry,
    font: &Font,
) -> PositionedLine<'a> {
    let width = font.approx_text_width(line.style.font_size, &line.text);
    PositionedLine {
        line,
        x: geometry.x_for(line.style.align, width),
        y,
    }
}
