//! Acceleration units.
//!
//! The SI unit for this dimension is [`MeterPerSecondSquared`]. Units are declared directly;
//! no length/time arithmetic is involved.

use crate::{Dimension, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// Dimension tag for acceleration.
pub enum Acceleration {}
impl Dimension for Acceleration {
    const NAME: &'static str = "acceleration";
}

/// Marker trait for any [`Unit`] whose dimension is [`Acceleration`].
pub trait AccelerationUnit: Unit<Dim = Acceleration> {}
impl<T: Unit<Dim = Acceleration>> AccelerationUnit for T {}

/// Metre per second squared (SI unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "m/s²", dimension = Acceleration, scale = 1.0)]
pub struct MeterPerSecondSquared;

/// Kilometre per hour per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "km/h/s", dimension = Acceleration, scale = 1_000.0 / 3_600.0)]
pub struct KilometerPerHourPerSecond;

/// Foot per second squared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft/s²", dimension = Acceleration, scale = 0.3048)]
pub struct FootPerSecondSquared;

/// Gal (`1 cm/s²`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "Gal", dimension = Acceleration, scale = 0.01)]
pub struct Gal;

/// Standard gravity (`9.80665 m/s²`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "g0", dimension = Acceleration, scale = 9.806_65)]
pub struct StandardGravity;

/// All acceleration units defined in this module.
pub const UNITS: &[UnitDescriptor<Acceleration>] = &[
    MeterPerSecondSquared::DESCRIPTOR,
    KilometerPerHourPerSecond::DESCRIPTOR,
    FootPerSecondSquared::DESCRIPTOR,
    Gal::DESCRIPTOR,
    StandardGravity::DESCRIPTOR,
];
