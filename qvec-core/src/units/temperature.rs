//! Temperature units.
//!
//! The SI unit for this dimension is [`Kelvin`]. Celsius and Fahrenheit are offset scales: an
//! absolute reading converts with `K = raw * scale + offset`, while a temperature *difference*
//! uses the same scale without the offset.
//!
//! ```rust
//! use qvec_core::units::temperature::{Celsius, Fahrenheit};
//! use qvec_core::Scalar;
//!
//! let body = Scalar::absolute(37.0, Celsius).unwrap();
//! assert!((body.value_in(Fahrenheit) - 98.6).abs() < 1e-9);
//!
//! let rise = Scalar::relative(10.0, Celsius);
//! assert!((rise.value_in(Fahrenheit) - 18.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// Dimension tag for temperature.
pub enum Temperature {}
impl Dimension for Temperature {
    const NAME: &'static str = "temperature";
}

/// Marker trait for any [`Unit`] whose dimension is [`Temperature`].
pub trait TemperatureUnit: Unit<Dim = Temperature> {}
impl<T: Unit<Dim = Temperature>> TemperatureUnit for T {}

/// Kelvin (SI unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "K", dimension = Temperature, scale = 1.0, absolute = true)]
pub struct Kelvin;

/// Degree Celsius (`K = °C + 273.15`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°C", name = "degree_celsius", dimension = Temperature, scale = 1.0,
       offset = 273.15, absolute = true)]
pub struct Celsius;

/// Degree Fahrenheit (`K = (°F + 459.67) * 5/9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°F", name = "degree_fahrenheit", dimension = Temperature, scale = 5.0 / 9.0,
       offset = 459.67 * 5.0 / 9.0, absolute = true)]
pub struct Fahrenheit;

/// Degree Rankine (`K = °R * 5/9`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "°R", name = "degree_rankine", dimension = Temperature, scale = 5.0 / 9.0,
       absolute = true)]
pub struct Rankine;

/// All temperature units defined in this module.
pub const UNITS: &[UnitDescriptor<Temperature>] = &[
    Kelvin::DESCRIPTOR,
    Celsius::DESCRIPTOR,
    Fahrenheit::DESCRIPTOR,
    Rankine::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_points() {
        let c = Celsius::DESCRIPTOR;
        let f = Fahrenheit::DESCRIPTOR;
        assert_relative_eq!(c.to_si(0.0), 273.15, epsilon = 1e-12);
        assert_relative_eq!(f.to_si(32.0), 273.15, epsilon = 1e-9);
        assert_relative_eq!(f.from_si(c.to_si(100.0)), 212.0, epsilon = 1e-9);
        assert_relative_eq!(f.to_si(-459.67), 0.0, epsilon = 1e-9);
        assert_relative_eq!(Rankine::DESCRIPTOR.from_si(c.to_si(0.0)), 491.67, epsilon = 1e-9);
    }
}
