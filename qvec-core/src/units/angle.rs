//! Angle units.
//!
//! The SI unit for this dimension is [`Radian`]. All angle units are absolute-capable: relative
//! values are angles, absolute values are directions.

use crate::{Dimension, Unit, UnitDescriptor};
use core::f64::consts::PI;
use qvec_derive::Unit;

/// Dimension tag for plane angle.
pub enum Angle {}
impl Dimension for Angle {
    const NAME: &'static str = "angle";
}

/// Marker trait for any [`Unit`] whose dimension is [`Angle`].
pub trait AngleUnit: Unit<Dim = Angle> {}
impl<T: Unit<Dim = Angle>> AngleUnit for T {}

/// Radian (SI unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "rad", dimension = Angle, scale = 1.0, absolute = true)]
pub struct Radian;

/// Milliradian (`10^-3 rad`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mrad", dimension = Angle, scale = 1e-3, absolute = true)]
pub struct Milliradian;

/// Degree (`π / 180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°", dimension = Angle, scale = PI / 180.0, absolute = true)]
pub struct Degree;

/// Arcminute (`1/60 °`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "arcmin", dimension = Angle, scale = PI / 180.0 / 60.0, absolute = true)]
pub struct Arcminute;

/// Arcsecond (`1/3600 °`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "arcsec", dimension = Angle, scale = PI / 180.0 / 3_600.0, absolute = true)]
pub struct Arcsecond;

/// Gradian (`1/400` of a turn).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "grad", dimension = Angle, scale = PI / 200.0, absolute = true)]
pub struct Gradian;

/// Full turn (`2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "rev", dimension = Angle, scale = 2.0 * PI, absolute = true)]
pub struct Turn;

/// All angle units defined in this module.
pub const UNITS: &[UnitDescriptor<Angle>] = &[
    Radian::DESCRIPTOR,
    Milliradian::DESCRIPTOR,
    Degree::DESCRIPTOR,
    Arcminute::DESCRIPTOR,
    Arcsecond::DESCRIPTOR,
    Gradian::DESCRIPTOR,
    Turn::DESCRIPTOR,
];
