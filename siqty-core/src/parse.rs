//! Parsing quantities from text.
//!
//! The accepted form is a number, optional whitespace and a unit symbol registered for the target dimension:
//!
//! ```rust
//! use siqty_core::acceleration::Acceleration;
//! use siqty_core::length::Length;
//!
//! let a: Acceleration = "2.5 m/s²".parse().unwrap();
//! assert_eq!(a, Acceleration::from_metres_per_second_squared(2.5));
//!
//! let l = Length::parse("  12mm ").unwrap();
//! assert_eq!(l.si_value(), 0.012);
//!
//! assert!(Acceleration::try_parse("abc").is_none());
//! ```
//!
//! Numbers use `.` as the decimal separator and follow [`str::parse::<f64>`], so `1e3`, `-0.5`, `inf` and `NaN`
//! are accepted. Unit symbols go through the dimension's registry, see [`crate::UnitRegistry`] for the spellings
//! it understands.

use core::str::FromStr;

use crate::dimension::Dimension;
use crate::error::ParseQuantityError;
use crate::quantity::Quantity;

impl<D: Dimension> Quantity<D> {
    /// Parses `"<number> <symbol>"` into a quantity.
    ///
    /// # Errors
    ///
    /// See [`ParseQuantityError`].
    pub fn parse(text: &str) -> Result<Self, ParseQuantityError> {
        let result = parse_quantity(text);
        if let Err(err) = &result {
            log::debug!("failed to parse {} from {:?}: {}", D::NAME, text, err);
        }
        result
    }

    /// Parses `"<number> <symbol>"`, returning `None` on any failure.
    #[inline]
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

impl<D: Dimension> FromStr for Quantity<D> {
    type Err = ParseQuantityError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_quantity<D: Dimension>(text: &str) -> Result<Quantity<D>, ParseQuantityError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseQuantityError::Empty);
    }

    let (number, symbol) = split_number(text)?;
    if symbol.is_empty() {
        return Err(ParseQuantityError::MissingUnit(number.to_owned()));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ParseQuantityError::InvalidNumber(number.to_owned()))?;
    let unit = D::registry().resolve(symbol)?;

    Ok(Quantity::new(value, unit))
}

/// Splits trimmed input into its number and symbol parts.
///
/// With whitespace present the first token is the number. Otherwise the longest prefix shaped like an `f64`
/// literal is taken, so `"12mm"` splits as `("12", "mm")`.
fn split_number(text: &str) -> Result<(&str, &str), ParseQuantityError> {
    if let Some(pos) = text.find(char::is_whitespace) {
        return Ok((&text[..pos], text[pos..].trim_start()));
    }

    match number_len(text.as_bytes()) {
        0 => Err(ParseQuantityError::InvalidNumber(text.to_owned())),
        len => Ok((&text[..len], &text[len..])),
    }
}

/// Length of the longest prefix of `bytes` matching the grammar `str::parse::<f64>` accepts:
/// `[+-]` followed by `inf`, `infinity`, `nan` (any case) or `digits[.digits][(e|E)[+-]digits]`.
///
/// Returns 0 when no prefix matches. The returned length always ends on an ASCII byte.
fn number_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        if bytes
            .get(i..i + word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes()))
        {
            return i + word.len();
        }
    }

    let int_end = digits_from(i);
    let mut has_digits = int_end > i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        if has_digits || frac_end > i + 1 {
            has_digits = true;
            i = frac_end;
        }
    }

    if !has_digits {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(i + 1), Some(b'+' | b'-')));
        let exp_start = i + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            i = exp_end;
        }
    }

    i
}
