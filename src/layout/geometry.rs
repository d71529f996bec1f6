use super::Margins;
use crate::pagesize::{self, PageSize};
use crate::style::Align;
use crate::units::Pt;

/// Default page size
pub const PAGE_SIZE: PageSize = pagesize::LETTER;
/// Default left and right margins
pub const SIDE_MARGIN: Pt = Pt(72.0);
/// Baseline of the first top-anchored line
pub const TOP_BASELINE: Pt = Pt(750.0);
/// Baseline of the lowest bottom-anchored line
pub const BOTTOM_BASELINE: Pt = Pt(72.0);
/// Extra space between consecutive lines, on top of the font size
pub const LINE_GAP: Pt = Pt(4.0);

/// Where lines go on a page. [`PageGeometry::default`] is US Letter with one inch
/// side margins, which is what layout files are rendered with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
    pub top_baseline: Pt,
    pub bottom_baseline: Pt,
    pub line_gap: Pt,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            size: PAGE_SIZE,
            margins: Margins::all(SIDE_MARGIN),
            top_baseline: TOP_BASELINE,
            bottom_baseline: BOTTOM_BASELINE,
            line_gap: LINE_GAP,
        }
    }
}

impl PageGeometry {
    pub fn page_width(&self) -> Pt {
        self.size.0
    }

    /// Horizontal room between the left and right margins
    pub fn usable_width(&self) -> Pt {
        self.page_width() - self.margins.left - self.margins.right
    }

    /// Starting x of a line that is `text_width` wide. Centred and right aligned
    /// lines never start left of the left margin.
    pub fn x_for(&self, align: Align, text_width: Pt) -> Pt {
        let left = self.margins.left;
        let x = match align {
            Align::Left => return left,
            Align::Center => (self.page_width() - text_width) / 2.0_f32,
            Align::Right => self.page_width() - self.margins.right - text_width,
        };
        if x < left {
            left
        } else {
            x
        }
    }

    /// Vertical distance taken up by a line set at `font_size`
    pub fn advance(&self, font_size: u32) -> Pt {
        Pt::from(font_size) + self.line_gap
    }
}
