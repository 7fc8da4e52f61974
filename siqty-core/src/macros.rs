//! Macros for defining unit tables and cross-dimension operators.

/// Declares the unit table of a dimension.
///
/// For a dimension tag `LengthDim` this emits:
///
/// - `pub type Length = Quantity<LengthDim>` and `pub type LengthUnit = Unit<LengthDim>`,
/// - one associated `const` per unit on `Unit<LengthDim>`, plus `Unit::<LengthDim>::ALL` (SI unit first),
/// - a `from_<unit>` constructor and a `<unit>` accessor per unit on `Quantity<LengthDim>`.
///
/// The dimension tag itself, with its `#[derive(Dimension)]`, is written next to the invocation.
macro_rules! define_units {
    (
        $(#[$qmeta:meta])*
        quantity $quantity:ident;
        $(#[$umeta:meta])*
        unit $unit:ident for $dim:ident;
        {
            $(
                $(#[$meta:meta])*
                $konst:ident = $symbol:literal, $scale:expr => $from:ident, $get:ident;
            )+
        }
    ) => {
        $(#[$qmeta])*
        pub type $quantity = $crate::Quantity<$dim>;

        $(#[$umeta])*
        pub type $unit = $crate::Unit<$dim>;

        impl $crate::Unit<$dim> {
            $(
                $(#[$meta])*
                pub const $konst: Self = Self::new($symbol, $scale);
            )+

            /// Every unit of this dimension, SI unit first.
            pub const ALL: &'static [Self] = &[$(Self::$konst),+];
        }

        impl $crate::Quantity<$dim> {
            $(
                #[doc = concat!("Creates a quantity from a value in `", $symbol, "`.")]
                #[inline]
                pub fn $from(value: f64) -> Self {
                    Self::new(value, $crate::Unit::<$dim>::$konst)
                }

                #[doc = concat!("Returns the value in `", $symbol, "`.")]
                #[inline]
                pub fn $get(self) -> f64 {
                    self.value_in($crate::Unit::<$dim>::$konst)
                }
            )+
        }
    };
}

/// Implements cross-dimension `*` and `/` between quantity aliases.
///
/// Each line binds one operator; the result is built from the product or quotient of the SI values:
///
/// ```text
/// impl_relations! {
///     Length * Length => Area;
///     Length / Time => Speed;
///     f64 / Time => Frequency;
/// }
/// ```
///
/// Only the listed bindings exist. Writing `a * b` does not imply `b * a`.
macro_rules! impl_relations {
    (@bind f64 / $rhs:ident => $out:ident) => {
        impl core::ops::Div<$rhs> for f64 {
            type Output = $out;
            #[inline]
            fn div(self, rhs: $rhs) -> $out {
                <$out>::from_si_value(self / rhs.si_value())
            }
        }
    };

    (@bind $lhs:ident * $rhs:ident => $out:ident) => {
        impl core::ops::Mul<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn mul(self, rhs: $rhs) -> $out {
                <$out>::from_si_value(self.si_value() * rhs.si_value())
            }
        }
    };

    (@bind $lhs:ident / $rhs:ident => $out:ident) => {
        impl core::ops::Div<$rhs> for $lhs {
            type Output = $out;
            #[inline]
            fn div(self, rhs: $rhs) -> $out {
                <$out>::from_si_value(self.si_value() / rhs.si_value())
            }
        }
    };

    ($($lhs:ident $op:tt $rhs:ident => $out:ident;)+) => {
        $(impl_relations!(@bind $lhs $op $rhs => $out);)+
    };
}
