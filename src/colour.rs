use crate::text::{to_lower, trim};
use crate::units::write_general;
use std::fmt;

/// A DeviceRGB colour; r, g, b range from 0.0 to 1.0
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b }
    }

    /// Look up a colour by name, ignoring case and surrounding whitespace.
    /// Known names are `black`, `white`, `red`, `green`, `blue`, and `gray` / `grey`;
    /// anything else is black.
    pub fn from_name<N: AsRef<[u8]>>(name: N) -> Colour {
        match to_lower(trim(name.as_ref())).as_slice() {
            b"black" => colours::BLACK,
            b"white" => colours::WHITE,
            b"red" => colours::RED,
            b"green" => colours::GREEN,
            b"blue" => colours::BLUE,
            b"gray" | b"grey" => colours::GREY,
            other => {
                log::trace!(
                    "unknown colour name {:?}, using black",
                    String::from_utf8_lossy(other)
                );
                colours::BLACK
            }
        }
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

/// Writes the three channels separated by spaces, ready for an `rg` operator
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_general(f, self.r)?;
        f.write_str(" ")?;
        write_general(f, self.g)?;
        f.write_str(" ")?;
        write_general(f, self.b)
    }
}

/// The colours that can be named in a layout file
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    pub const GREY: Colour = Colour {
        r: 0.5,
        g: 0.5,
        b: 0.5,
    };
}
