//! Symbol registry per dimension.
//!
//! A [`UnitRegistry`] maps printable unit symbols back to [`Unit`] values. It backs parsing, unit-aware
//! deserialization and the symbol-based [`UnitRegistry::convert`].
//!
//! # Symbol normalisation
//!
//! Lookups accept a few alternative spellings of the registered symbols:
//!
//! | written            | matched as |
//! |--------------------|------------|
//! | `m/s^2`, `m^3`     | `m/s²`, `m³` |
//! | `μm` (Greek mu)    | `µm` (micro sign) |
//! | `N*s`, `N·s`       | `N⋅s` |
//! | ohm sign (U+2126) | `Ω` (U+03A9) |
//! | `um`, `uF`         | `µm`, `µF` (only if the plain symbol is unknown) |
//!
//! Surrounding whitespace is ignored.
//!
//! ```rust
//! use siqty_core::acceleration::{AccelerationDim, AccelerationUnit};
//! use siqty_core::Dimension;
//!
//! let registry = AccelerationDim::registry();
//! assert_eq!(registry.lookup("cm/s^2"), Some(AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED));
//! assert_eq!(registry.lookup("furlong/fortnight²"), None);
//! ```

use std::collections::HashMap;

use crate::error::ParseQuantityError;
use crate::unit::Unit;

/// Symbol to unit table for one dimension.
pub struct UnitRegistry<D: 'static> {
    dimension: &'static str,
    units: &'static [Unit<D>],
    by_symbol: HashMap<String, Unit<D>>,
}

impl<D: 'static> UnitRegistry<D> {
    /// Builds a registry from a unit table.
    ///
    /// When two units share a (normalised) symbol the first one wins and a warning is logged.
    pub fn new(dimension: &'static str, units: &'static [Unit<D>]) -> Self {
        let mut by_symbol = HashMap::with_capacity(units.len());

        for unit in units {
            let key = normalize_symbol(unit.symbol());
            if by_symbol.contains_key(&key) {
                log::warn!(
                    "duplicate {} unit symbol `{}`; keeping the first definition",
                    dimension,
                    unit.symbol()
                );
                continue;
            }
            by_symbol.insert(key, *unit);
        }

        log::debug!(
            "built {} unit registry with {} symbols",
            dimension,
            by_symbol.len()
        );

        Self {
            dimension,
            units,
            by_symbol,
        }
    }

    /// Name of the dimension this registry serves.
    #[inline]
    pub fn dimension(&self) -> &'static str {
        self.dimension
    }

    /// Every registered unit, in declaration order (SI unit first).
    #[inline]
    pub fn units(&self) -> &'static [Unit<D>] {
        self.units
    }

    /// Every registered symbol, in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|unit| unit.symbol())
    }

    /// Finds the unit written as `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<Unit<D>> {
        let key = normalize_symbol(symbol);
        if let Some(unit) = self.by_symbol.get(&key) {
            return Some(*unit);
        }

        // ASCII stand-in for the micro prefix
        let rest = key.strip_prefix('u')?;
        self.by_symbol.get(&format!("µ{rest}")).copied()
    }

    /// Like [`UnitRegistry::lookup`], but reports unknown symbols as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseQuantityError::UnknownUnit`] if no unit matches.
    pub fn resolve(&self, symbol: &str) -> Result<Unit<D>, ParseQuantityError> {
        self.lookup(symbol)
            .ok_or_else(|| ParseQuantityError::UnknownUnit {
                dimension: self.dimension,
                symbol: symbol.trim().to_owned(),
            })
    }

    /// Converts `value` from the unit written as `from` to the unit written as `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseQuantityError::UnknownUnit`] if either symbol is not registered.
    ///
    /// ```rust
    /// use siqty_core::length::LengthDim;
    /// use siqty_core::Dimension;
    ///
    /// let inches = LengthDim::registry().convert(254.0, "mm", "in").unwrap();
    /// assert!((inches - 10.0).abs() < 1e-12);
    /// ```
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ParseQuantityError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        if from == to {
            return Ok(value);
        }

        Ok(to.from_si(from.to_si(value)))
    }
}

/// Rewrites alternative spellings into the registered form.
pub(crate) fn normalize_symbol(symbol: &str) -> String {
    let trimmed = symbol.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '^' => match chars.peek() {
                Some('2') => {
                    chars.next();
                    out.push('²');
                }
                Some('3') => {
                    chars.next();
                    out.push('³');
                }
                _ => out.push('^'),
            },
            // Greek small mu
            '\u{3bc}' => out.push('µ'),
            // Ohm sign
            '\u{2126}' => out.push('Ω'),
            '*' | '·' => out.push('⋅'),
            other => out.push(other),
        }
    }

    out
}
