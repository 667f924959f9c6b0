//! Mass units.
//!
//! The SI unit for this dimension is [`Kilogram`]. Mass has no natural origin, so none of these
//! units is absolute-capable.

use crate::{Dimension, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// Dimension tag for mass.
pub enum Mass {}
impl Dimension for Mass {
    const NAME: &'static str = "mass";
}

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Helper macro to declare a gram-based SI mass unit.
macro_rules! si_gram {
    ($name:ident, $sym:literal, $scale:expr) => {
        #[doc = concat!("SI mass unit `", stringify!($name), "` (`1 ", $sym, " = ", stringify!($scale), " kg`).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = Mass, scale = $scale)]
        pub struct $name;
    };
}

si_gram!(Microgram, "µg", 1e-9);
si_gram!(Milligram, "mg", 1e-6);
si_gram!(Gram, "g", 1e-3);
si_gram!(Kilogram, "kg", 1.0);

/// Tonne (metric ton): `1 t = 1000 kg` (exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "t", dimension = Mass, scale = 1_000.0)]
pub struct Tonne;

/// Avoirdupois pound (`0.45359237 kg`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "lb", dimension = Mass, scale = 0.453_592_37)]
pub struct Pound;

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "oz", dimension = Mass, scale = 0.453_592_37 / 16.0)]
pub struct Ounce;

/// Stone (`14 lb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "st", dimension = Mass, scale = 0.453_592_37 * 14.0)]
pub struct Stone;

/// All mass units defined in this module.
pub const UNITS: &[UnitDescriptor<Mass>] = &[
    Microgram::DESCRIPTOR,
    Milligram::DESCRIPTOR,
    Gram::DESCRIPTOR,
    Kilogram::DESCRIPTOR,
    Tonne::DESCRIPTOR,
    Pound::DESCRIPTOR,
    Ounce::DESCRIPTOR,
    Stone::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn relative_only() {
        assert!(UNITS.iter().all(|u| !u.is_absolute_capable()));
    }

    #[test]
    fn avoirdupois_ladder() {
        assert_relative_eq!(Pound::DESCRIPTOR.scale() / Ounce::DESCRIPTOR.scale(), 16.0, epsilon = 1e-12);
        assert_relative_eq!(Stone::DESCRIPTOR.scale() / Pound::DESCRIPTOR.scale(), 14.0, epsilon = 1e-12);
        assert_relative_eq!(Gram::DESCRIPTOR.from_si(Kilogram::DESCRIPTOR.to_si(1.0)), 1_000.0, epsilon = 1e-9);
    }
}
