//! Text rendering of quantities.
//!
//! `Display` renders the SI value followed by the SI symbol. Precision and the `+` flag apply to the number, and
//! width pads the complete text. With the `0` flag the number is zero padded after its sign instead:
//!
//! ```rust
//! use siqty_core::speed::{Speed, SpeedUnit};
//!
//! let v = Speed::from_kilometres_per_hour(36.0);
//! assert_eq!(v.to_string(), "10 m/s");
//! assert_eq!(format!("{v:.2}"), "10.00 m/s");
//! assert_eq!(format!("{v:>10}"), "    10 m/s");
//! assert_eq!(format!("{v:+010.1}"), "+010.0 m/s");
//! assert_eq!(v.display_in(SpeedUnit::KILOMETRES_PER_HOUR).to_string(), "36 km/h");
//! ```

use core::fmt::{Alignment, Display, Formatter, Result, Write};

use crate::dimension::Dimension;
use crate::quantity::Quantity;
use crate::unit::Unit;

impl<D: Dimension> Display for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_with_unit(f, self.si_value(), " ", D::SI_UNIT.symbol())
    }
}

impl<D: Dimension> Quantity<D> {
    /// Renders the quantity in `unit` instead of the SI unit.
    ///
    /// ```rust
    /// use siqty_core::pressure::{Pressure, PressureUnit};
    ///
    /// let p = Pressure::from_pascals(250_000.0);
    /// assert_eq!(format!("{:.1}", p.display_in(PressureUnit::BAR)), "2.5 bar");
    /// assert_eq!(p.display_in(PressureUnit::KILOPASCALS).with_separator("").to_string(), "250kPa");
    /// ```
    #[inline]
    pub fn display_in(self, unit: Unit<D>) -> Formatted<D> {
        Formatted {
            value: self.value_in(unit),
            unit,
            separator: " ",
        }
    }
}

/// A quantity bound to a display unit, see [`Quantity::display_in`].
pub struct Formatted<D> {
    value: f64,
    unit: Unit<D>,
    separator: &'static str,
}

impl<D> Clone for Formatted<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Formatted<D> {}

impl<D> Formatted<D> {
    /// Sets the text placed between the number and the symbol (default `" "`).
    ///
    /// Typical choices are `""`, `" "` and the no-break space `"\u{a0}"`.
    #[inline]
    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// The numeric part, expressed in the bound unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The bound unit.
    #[inline]
    pub fn unit(&self) -> Unit<D> {
        self.unit
    }
}

impl<D> Display for Formatted<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_with_unit(f, self.value, self.separator, self.unit.symbol())
    }
}

fn write_with_unit(f: &mut Formatter<'_>, value: f64, separator: &str, symbol: &str) -> Result {
    let mut number = match (f.precision(), f.sign_plus()) {
        (Some(precision), true) => format!("{value:+.precision$}"),
        (Some(precision), false) => format!("{value:.precision$}"),
        (None, true) => format!("{value:+}"),
        (None, false) => format!("{value}"),
    };

    let Some(width) = f.width() else {
        f.write_str(&number)?;
        f.write_str(separator)?;
        return f.write_str(symbol);
    };

    let suffix_len = separator.chars().count() + symbol.chars().count();

    // Zero padding goes between the sign and the digits and ignores fill and alignment.
    if f.sign_aware_zero_pad() && value.is_finite() {
        let zeros = width.saturating_sub(suffix_len + number.len());
        let digits_at = usize::from(number.starts_with(['+', '-']));
        number.insert_str(digits_at, &"0".repeat(zeros));
    }

    let len = number.chars().count() + suffix_len;
    let pad = width.saturating_sub(len);
    let (before, after) = match f.align() {
        Some(Alignment::Left) => (0, pad),
        Some(Alignment::Center) => (pad / 2, pad - pad / 2),
        _ => (pad, 0),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(&number)?;
    f.write_str(separator)?;
    f.write_str(symbol)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}
