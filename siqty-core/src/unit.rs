//! Unit and scale types.

use core::fmt::{Debug, Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::dimension::Dimension;

/// Linear transform between a display unit and the SI unit of its dimension.
///
/// `to_si(x) = x * factor / divisor` and `from_si(x) = x * divisor / factor`. Keeping the two constants apart
/// lets sub-multiples such as centimetres divide by an exact `100.0` instead of multiplying by the inexact `0.01`.
///
/// Compound units fold every step into one constant at definition time, e.g. centimetres per hour squared is
/// `Scale::per(100.0 * 3600.0 * 3600.0)`.
///
/// There are no offsets: every scale passes through the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    factor: f64,
    divisor: f64,
}

impl Scale {
    /// The scale of an SI unit.
    pub const IDENTITY: Scale = Scale::ratio(1.0, 1.0);

    /// One display unit equals `factor` SI units.
    #[inline]
    pub const fn times(factor: f64) -> Self {
        Self::ratio(factor, 1.0)
    }

    /// One display unit equals `1 / divisor` SI units.
    #[inline]
    pub const fn per(divisor: f64) -> Self {
        Self::ratio(1.0, divisor)
    }

    /// One display unit equals `factor / divisor` SI units.
    ///
    /// Both constants should be finite and non-zero.
    #[inline]
    pub const fn ratio(factor: f64, divisor: f64) -> Self {
        Self { factor, divisor }
    }

    /// Converts a display value to SI.
    #[inline]
    pub fn to_si(self, value: f64) -> f64 {
        value * self.factor / self.divisor
    }

    /// Converts an SI value to the display unit.
    #[inline]
    pub fn from_si(self, si_value: f64) -> f64 {
        si_value * self.divisor / self.factor
    }

    /// Size of one display unit expressed in SI units.
    #[inline]
    pub fn si_per_unit(self) -> f64 {
        self.factor / self.divisor
    }
}

/// A named unit of dimension `D`.
///
/// A unit is a display symbol plus a [`Scale`]. Units are `const` values: the built-in ones live as associated
/// constants on `Unit<D>` (e.g. `Unit::<LengthDim>::MILLIMETRES`, usually written through the `LengthUnit` alias).
///
/// # Equality
///
/// Two units are equal, and hash equally, **iff their symbols match**. The scale does not take part:
///
/// ```rust
/// use siqty_core::{Scale, Unit};
/// use siqty_core::length::LengthDim;
///
/// let a = Unit::<LengthDim>::new("m", Scale::IDENTITY);
/// let b = Unit::<LengthDim>::new("m", Scale::times(2.0));
/// assert_eq!(a, b);
/// ```
pub struct Unit<D> {
    symbol: &'static str,
    scale: Scale,
    _dim: PhantomData<fn() -> D>,
}

impl<D> Unit<D> {
    /// Creates a unit from its symbol and scale.
    #[inline]
    pub const fn new(symbol: &'static str, scale: Scale) -> Self {
        Self {
            symbol,
            scale,
            _dim: PhantomData,
        }
    }

    /// Printable symbol, e.g. `"m/s²"`.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The linear transform to and from SI.
    #[inline]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Converts a value in this unit to the SI unit.
    ///
    /// ```rust
    /// use siqty_core::acceleration::AccelerationUnit;
    /// assert_eq!(AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED.to_si(100.0), 1.0);
    /// ```
    #[inline]
    pub fn to_si(&self, value: f64) -> f64 {
        self.scale.to_si(value)
    }

    /// Converts an SI value to this unit.
    ///
    /// ```rust
    /// use siqty_core::acceleration::AccelerationUnit;
    /// assert_eq!(AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED.from_si(1.0), 100.0);
    /// ```
    #[inline]
    pub fn from_si(&self, si_value: f64) -> f64 {
        self.scale.from_si(si_value)
    }
}

impl<D: Dimension> Unit<D> {
    /// Returns `true` if this unit compares equal to the SI unit of `D`.
    #[inline]
    pub fn is_si(&self) -> bool {
        *self == D::SI_UNIT
    }
}

impl<D> Clone for Unit<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Unit<D> {}

impl<D> PartialEq for Unit<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl<D> Eq for Unit<D> {}

impl<D> Hash for Unit<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl<D: Dimension> Debug for Unit<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Unit")
            .field("dimension", &D::NAME)
            .field("symbol", &self.symbol)
            .field("scale", &self.scale)
            .finish()
    }
}

impl<D> Display for Unit<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad(self.symbol)
    }
}
