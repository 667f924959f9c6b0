//! Dimensionless units.
//!
//! [`Unitless`] is the plain-number unit used for factors and ratios; its symbol is empty so that
//! formatting prints bare values.

use crate::{Dimensionless, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// A plain number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "", name = "unit", dimension = Dimensionless, scale = 1.0)]
pub struct Unitless;

/// Percent (`0.01`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "%", dimension = Dimensionless, scale = 0.01)]
pub struct Percent;

/// Per mille (`0.001`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "‰", dimension = Dimensionless, scale = 0.001)]
pub struct PerMille;

/// Parts per million (`10^-6`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ppm", dimension = Dimensionless, scale = 1e-6)]
pub struct PartsPerMillion;

/// All dimensionless units defined in this module.
pub const UNITS: &[UnitDescriptor<Dimensionless>] = &[
    Unitless::DESCRIPTOR,
    Percent::DESCRIPTOR,
    PerMille::DESCRIPTOR,
    PartsPerMillion::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unitless_prints_bare() {
        assert_eq!(Unitless.to_string(), "");
        assert_eq!(Unitless::DESCRIPTOR.name(), "unit");
        assert!(Unitless::DESCRIPTOR.is_si());
    }

    #[test]
    fn percent() {
        assert_relative_eq!(Percent::DESCRIPTOR.from_si(0.25), 25.0, epsilon = 1e-12);
    }
}
