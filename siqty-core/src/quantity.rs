//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::QuantityError;
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity of dimension `D`.
///
/// `Quantity<D>` stores a single `f64`: the magnitude in the SI unit of `D`. The unit a value was entered in is
/// forgotten at construction and only comes back when reading it out with [`Quantity::value_in`] or formatting it.
///
/// # Examples
///
/// ```rust
/// use siqty_core::length::{Length, LengthUnit};
///
/// let a = Length::new(150.0, LengthUnit::CENTIMETRES);
/// let b = Length::from_metres(0.5);
/// assert_eq!((a + b).metres(), 2.0);
/// assert_eq!((a + b).value_in(LengthUnit::MILLIMETRES), 2000.0);
/// ```
pub struct Quantity<D: Dimension> {
    si_value: f64,
    _dim: PhantomData<fn() -> D>,
}

impl<D: Dimension> Quantity<D> {
    /// The zero quantity.
    ///
    /// ```rust
    /// use siqty_core::force::Force;
    /// assert_eq!(Force::ZERO.si_value(), 0.0);
    /// ```
    pub const ZERO: Self = Self::from_si_value(0.0);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use siqty_core::voltage::Voltage;
    /// assert!(Voltage::NAN.si_value().is_nan());
    /// ```
    pub const NAN: Self = Self::from_si_value(f64::NAN);

    /// Creates a quantity from a value expressed in `unit`.
    ///
    /// ```rust
    /// use siqty_core::acceleration::{Acceleration, AccelerationUnit};
    /// let a = Acceleration::new(250.0, AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED);
    /// assert_eq!(a.si_value(), 2.5);
    /// ```
    #[inline]
    pub fn new(value: f64, unit: Unit<D>) -> Self {
        Self::from_si_value(unit.to_si(value))
    }

    /// Builds a quantity straight from its SI value without going through a unit.
    ///
    /// Reserved for the operator table and deserialization.
    #[inline]
    pub(crate) const fn from_si_value(si_value: f64) -> Self {
        Self {
            si_value,
            _dim: PhantomData,
        }
    }

    /// Returns the magnitude in the SI unit of `D`.
    #[inline]
    pub const fn si_value(self) -> f64 {
        self.si_value
    }

    /// Returns the magnitude expressed in `unit`.
    ///
    /// ```rust
    /// use siqty_core::speed::{Speed, SpeedUnit};
    /// let v = Speed::from_metres_per_second(10.0);
    /// assert_eq!(v.value_in(SpeedUnit::KILOMETRES_PER_HOUR), 36.0);
    /// ```
    #[inline]
    pub fn value_in(self, unit: Unit<D>) -> f64 {
        unit.from_si(self.si_value)
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use siqty_core::length::Length;
    /// assert_eq!(Length::from_metres(-10.0).abs().metres(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_si_value(self.si_value.abs())
    }

    /// Returns the smaller of two quantities (NaN is ignored, as in [`f64::min`]).
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_si_value(self.si_value.min(other.si_value))
    }

    /// Returns the larger of two quantities (NaN is ignored, as in [`f64::max`]).
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_si_value(self.si_value.max(other.si_value))
    }

    /// Returns `true` if the SI value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.si_value.is_finite()
    }

    /// Three-way comparison of SI values.
    ///
    /// Consistent with `<` and `>` for numbers; NaN sorts below every number and equal to NaN, which makes the
    /// ordering total.
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use siqty_core::time::Time;
    /// assert_eq!(Time::from_seconds(1.0).compare_to(&Time::from_minutes(1.0)), Ordering::Less);
    /// assert_eq!(Time::NAN.compare_to(&Time::ZERO), Ordering::Less);
    /// ```
    pub fn compare_to(&self, other: &Self) -> Ordering {
        match self.si_value.partial_cmp(&other.si_value) {
            Some(ordering) => ordering,
            None => other.si_value.is_nan().cmp(&self.si_value.is_nan()),
        }
    }

    /// Returns `true` if `|self - other| < tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance` is not strictly positive (zero, negative or NaN). Use
    /// [`Quantity::try_equals_within`] to get an error value instead.
    ///
    /// ```rust
    /// use siqty_core::length::Length;
    /// let a = Length::from_metres(1.0);
    /// let b = Length::from_millimetres(1000.4);
    /// assert!(a.equals_within(b, Length::from_millimetres(1.0)));
    /// ```
    #[track_caller]
    pub fn equals_within(self, other: Self, tolerance: Self) -> bool {
        match self.try_equals_within(other, tolerance) {
            Ok(equal) => equal,
            Err(err) => panic!("Quantity::equals_within: {err}"),
        }
    }

    /// Checked form of [`Quantity::equals_within`].
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NonPositiveTolerance`] if `tolerance` is not strictly positive.
    pub fn try_equals_within(self, other: Self, tolerance: Self) -> Result<bool, QuantityError> {
        if tolerance.si_value.is_nan() || tolerance.si_value <= 0.0 {
            return Err(QuantityError::NonPositiveTolerance(tolerance.si_value));
        }
        Ok((self.si_value - other.si_value).abs() < tolerance.si_value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-type traits (hand written so they don't require bounds on `D`)
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> Debug for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(D::NAME).field(&self.si_value).finish()
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.si_value == other.si_value
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si_value.partial_cmp(&other.si_value)
    }
}

impl<D: Dimension> Hash for Quantity<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 == -0.0, so they must hash alike
        let bits = if self.si_value == 0.0 {
            0.0f64.to_bits()
        } else {
            self.si_value.to_bits()
        };
        bits.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_si_value(self.si_value + rhs.si_value)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.si_value += rhs.si_value;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_si_value(self.si_value - rhs.si_value)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.si_value -= rhs.si_value;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_si_value(-self.si_value)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_si_value(self.si_value * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.si_value *= rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_si_value(self.si_value / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.si_value /= rhs;
    }
}

/// Same-dimension division yields a plain ratio.
impl<D: Dimension> Div for Quantity<D> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.si_value / rhs.si_value
    }
}

impl<D: Dimension> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension> Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.si_value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension> Deserialize<'de> for Quantity<D> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let si_value = f64::deserialize(deserializer)?;
        Ok(Quantity::from_si_value(si_value))
    }
}

/// Serde helper module for serializing quantities together with a unit symbol.
///
/// Use this with the `#[serde(with = "...")]` attribute to make serialized data self-describing. Values are written
/// in the SI unit; on read any registered symbol of the dimension is accepted and converted.
///
/// # Examples
///
/// ```rust
/// use siqty_core::length::Length;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "siqty_core::serde_with_unit")]
///     max_distance: Length,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Length,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<D>` as a struct with `value` (SI) and `unit` (SI symbol) fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<D, S>(quantity: &Quantity<D>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.si_value())?;
        state.serialize_field("unit", D::SI_UNIT.symbol())?;
        state.end()
    }

    /// Deserializes a `Quantity<D>` from a struct with `value` and optionally `unit` fields.
    ///
    /// Without `unit` the value is taken as SI. With `unit` the symbol is resolved through the dimension's
    /// registry and the value converted; unknown symbols are rejected.
    pub fn deserialize<'de, D, De>(deserializer: De) -> Result<Quantity<D>, De::Error>
    where
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D>(PhantomData<fn() -> D>);

        impl<'de, D: Dimension> Visitor<'de> for QuantityVisitor<D> {
            type Value = Quantity<D>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                match unit {
                    None => Ok(Quantity::from_si_value(value)),
                    Some(symbol) => match D::registry().lookup(&symbol) {
                        Some(unit) => Ok(Quantity::new(value, unit)),
                        None => Err(de::Error::custom(format!(
                            "unknown {} unit '{}'",
                            D::NAME,
                            symbol
                        ))),
                    },
                }
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
