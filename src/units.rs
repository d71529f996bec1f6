use derive_more::{Add, AddAssign, Div, From, Into, Mul, Sub, SubAssign};
use std::fmt;

/// Significant digits printed for numbers in content streams
const SIGNIFICANT_DIGITS: i32 = 6;

/// A length in PDF user space units (points, 1/72 of an inch).
///
/// Formats like C's `%g`: six significant digits, trailing zeros dropped, and
/// scientific notation once the exponent leaves `-4..6`. Whole values print
/// without a fractional part (`72`, not `72.0`).
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl From<u32> for Pt {
    fn from(value: u32) -> Self {
        Pt(value as f32)
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_general(f, self.0)
    }
}

/// Write `value` the way `%g` would
pub(crate) fn write_general(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    let value = value as f64;
    if value == 0.0 {
        return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }
    if !value.is_finite() {
        return write!(f, "{value}");
    }

    // the exponent has to be taken after rounding to the printed precision
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return Err(fmt::Error);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            f,
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        let fixed = format!("{value:.decimals$}");
        f.write_str(trim_fraction(&fixed))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whole_points_print_without_fraction() {
        assert_eq!(Pt(72.0).to_string(), "72");
        assert_eq!(Pt(288.5).to_string(), "288.5");
        assert_eq!(Pt(-3.0).to_string(), "-3");
        assert_eq!(Pt(0.0).to_string(), "0");
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(Pt(123456.0).to_string(), "123456");
        assert_eq!(Pt(-999254.0).to_string(), "-999254");
        assert_eq!(Pt(0.5).to_string(), "0.5");
        assert_eq!(Pt(0.0001).to_string(), "0.0001");
        assert_eq!(Pt(1.234567).to_string(), "1.23457");
    }

    #[test]
    fn large_and_tiny_values_use_exponents() {
        assert_eq!(Pt(-1999258.0).to_string(), "-1.99926e+06");
        assert_eq!(Pt(1234567.0).to_string(), "1.23457e+06");
        assert_eq!(Pt(1000000.0).to_string(), "1e+06");
        assert_eq!(Pt(999999.5).to_string(), "1e+06");
        assert_eq!(Pt(0.00001).to_string(), "1e-05");
    }

    #[test]
    fn arithmetic() {
        let mut y = Pt(750.0);
        y -= Pt::from(16u32);
        assert_eq!(y, Pt(734.0));
        assert_eq!(Pt(14.0) * 0.5_f32, Pt(7.0));
        assert_eq!((Pt(612.0) - Pt(35.0)) / 2.0_f32, Pt(288.5));
    }
}
