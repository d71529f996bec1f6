//! Content stream generation for pages.

use crate::font::Font;
use crate::layout::{layout_page, PageGeometry, PositionedLine};
use crate::parser::PageSpec;
use crate::text::escape_pdf_string;
use std::io::Write;

/// Renders positioned lines to a PDF content stream.
///
/// All lines share one text object. Each line selects the font at its own size,
/// sets the fill colour, and moves there with an absolute text matrix, so lines do
/// not depend on each other's state.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    lines: &[PositionedLine],
    font: &Font,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    write!(&mut content, "BT\n")?;
    for positioned in lines.iter() {
        let style = &positioned.line.style;
        write!(
            &mut content,
            "/{} {} Tf\n",
            font.resource_name(),
            style.font_size
        )?;
        write!(&mut content, "{} rg\n", style.colour)?;
        write!(
            &mut content,
            "1 0 0 1 {} {} Tm\n",
            positioned.x, positioned.y
        )?;
        write!(&mut content, "(")?;
        content.write_all(&escape_pdf_string(&positioned.line.text))?;
        write!(&mut content, ") Tj\n")?;
    }
    write!(&mut content, "ET\n")?;

    Ok(content)
}

/// Lays out a page and renders its content stream
pub fn build_content(
    page: &PageSpec,
    geometry: &PageGeometry,
    font: &Font,
) -> Result<Vec<u8>, std::io::Error> {
    let lines = layout_page(page, geometry, font);
    render_contents(&lines, font)
}
