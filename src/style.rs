use crate::colour::Colour;
use crate::text::{parse_leading_int, split_by_comma, to_lower, trim};

/// Font size used when a directive gives none, or gives one that isn't positive
pub const DEFAULT_FONT_SIZE: u32 = 12;

/// Horizontal placement of a line between the page margins
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// `center` and `right` (ignoring case and surrounding whitespace) select those
    /// alignments; every other name, including `left`, is left aligned
    pub fn from_name<N: AsRef<[u8]>>(name: N) -> Align {
        match to_lower(trim(name.as_ref())).as_slice() {
            b"center" => Align::Center,
            b"right" => Align::Right,
            _ => Align::Left,
        }
    }
}

/// Which edge of the page a line is stacked from
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Anchor {
    /// Stacked downwards from the top baseline
    #[default]
    Top,
    /// Stacked upwards from the bottom baseline
    Bottom,
}

impl Anchor {
    pub fn from_name<N: AsRef<[u8]>>(name: N) -> Anchor {
        if to_lower(trim(name.as_ref())) == b"bottom" {
            Anchor::Bottom
        } else {
            Anchor::Top
        }
    }
}

/// The fully resolved style of a line at the moment it was read. `Style` is
/// `Copy`, so every line owns its own snapshot.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Style {
    pub font_size: u32,
    pub colour: Colour,
    pub align: Align,
    pub anchor: Anchor,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            font_size: DEFAULT_FONT_SIZE,
            colour: Colour::default(),
            align: Align::default(),
            anchor: Anchor::default(),
        }
    }
}

impl Style {
    /// Resolve the parameter list of a page directive:
    /// `size, colour, alignment, bottom`. Every field is positional and optional;
    /// missing or unrecognised values take their default.
    pub fn from_params<P: AsRef<[u8]>>(params: P) -> Style {
        let parts = split_by_comma(params.as_ref());

        let font_size = parts
            .first()
            .map(|&size| parse_leading_int(size))
            .filter(|&size| size > 0)
            .map(|size| u32::try_from(size).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_FONT_SIZE);

        Style {
            font_size,
            colour: parts
                .get(1)
                .map(|&name| Colour::from_name(name))
                .unwrap_or_default(),
            align: parts
                .get(2)
                .map(|&name| Align::from_name(name))
                .unwrap_or_default(),
            anchor: parts
                .get(3)
                .map(|&name| Anchor::from_name(name))
                .unwrap_or_default(),
        }
    }

    pub fn is_bottom_anchored(&self) -> bool {
        self.anchor == Anchor::Bottom
    }
}
