use crate::units::Pt;

/// Average glyph advance as a fraction of the font size, used in place of real
/// font metrics
const APPROX_ADVANCE: f32 = 0.5;

/// One of the standard 14 Type1 fonts, which every PDF reader provides, so
/// nothing needs to be embedded.
///
/// Documents only ever use a single font, registered in every page's resources as
/// [`Font::resource_name`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Font {
    base_font: &'static str,
}

/// The font every line is drawn in
pub const HELVETICA: Font = Font {
    base_font: "Helvetica",
};

impl Font {
    /// The PostScript name written as the font's `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        self.base_font
    }

    /// The name pages use to refer to the font from their content streams
    pub fn resource_name(&self) -> &'static str {
        "F1"
    }

    /// Estimate how wide `text` is when set at `size`.
    ///
    /// Every byte is assumed to be half an em wide. This is only an approximation
    /// (Helvetica's real advances vary per glyph), but alignment must stay stable,
    /// so it is kept exactly as is.
    pub fn approx_text_width(&self, size: u32, text: &[u8]) -> Pt {
        Pt(size as f32 * APPROX_ADVANCE * text.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn width_is_half_an_em_per_byte() {
        assert_eq!(HELVETICA.approx_text_width(12, b"Hello"), Pt(30.0));
        assert_eq!(HELVETICA.approx_text_width(14, b"Hello"), Pt(35.0));
        assert_eq!(HELVETICA.approx_text_width(40, b""), Pt(0.0));
        assert_eq!(HELVETICA.approx_text_width(12, b"caf\xe9"), Pt(24.0));
    }

    #[test]
    fn names() {
        assert_eq!(HELVETICA.base_font(), "Helvetica");
        assert_eq!(HELVETICA.resource_name(), "F1");
    }
}
