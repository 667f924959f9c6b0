//! Length units.
//!
//! The SI unit for this dimension is [`Meter`]. Every length unit is absolute-capable, so the same
//! table serves relative lengths and absolute positions.
//!
//! - **SI ladder**: nanometre to kilometre.
//! - **Imperial**: inch, foot, yard, statute mile, nautical mile (international definitions, exact).
//! - **Astronomy**: astronomical unit (exact, IAU 2012), light-year (Julian year), parsec.
//!
//! ```rust
//! use qvec_core::units::length::{AstronomicalUnit, Kilometer};
//! use qvec_core::Scalar;
//!
//! let au = Scalar::relative(1.0, AstronomicalUnit);
//! assert_eq!(au.value_in(Kilometer), 149_597_870.7);
//! ```

use crate::{Dimension, Unit, UnitDescriptor};
use core::f64::consts::PI;
use qvec_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {
    const NAME: &'static str = "length";
}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Exact length of one astronomical unit, in metres.
pub const METERS_PER_AU: f64 = 149_597_870_700.0;

/// Helper macro to declare a metre-based SI length unit.
macro_rules! si_meter {
    ($name:ident, $sym:literal, $scale:expr) => {
        #[doc = concat!("SI length unit `", stringify!($name), "` (`1 ", $sym, " = ", stringify!($scale), " m`).")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
        #[unit(symbol = $sym, dimension = Length, scale = $scale, absolute = true)]
        pub struct $name;
    };
}

si_meter!(Nanometer, "nm", 1e-9);
si_meter!(Micrometer, "µm", 1e-6);
si_meter!(Millimeter, "mm", 1e-3);
si_meter!(Centimeter, "cm", 1e-2);
si_meter!(Decimeter, "dm", 1e-1);
si_meter!(Meter, "m", 1.0);
si_meter!(Decameter, "dam", 1e1);
si_meter!(Hectometer, "hm", 1e2);
si_meter!(Kilometer, "km", 1e3);

/// International inch (`1 in = 0.0254 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "in", dimension = Length, scale = 0.0254, absolute = true)]
pub struct Inch;

/// International foot (`1 ft = 0.3048 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ft", dimension = Length, scale = 0.3048, absolute = true)]
pub struct Foot;

/// International yard (`1 yd = 0.9144 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "yd", dimension = Length, scale = 0.9144, absolute = true)]
pub struct Yard;

/// Statute mile (`1 mi = 1609.344 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "mi", dimension = Length, scale = 1_609.344, absolute = true)]
pub struct Mile;

/// Nautical mile (`1 nmi = 1852 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "nmi", dimension = Length, scale = 1_852.0, absolute = true)]
pub struct NauticalMile;

/// Astronomical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "au", dimension = Length, scale = METERS_PER_AU, absolute = true)]
pub struct AstronomicalUnit;

/// Light-year: distance light travels in one Julian year (`365.25 d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ly", dimension = Length, scale = 299_792_458.0 * 86_400.0 * 365.25, absolute = true)]
pub struct LightYear;

/// Parsec (`1 pc = au * 648000 / π`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "pc", dimension = Length, scale = METERS_PER_AU * 648_000.0 / PI, absolute = true)]
pub struct Parsec;

/// All length units defined in this module.
pub const UNITS: &[UnitDescriptor<Length>] = &[
    Nanometer::DESCRIPTOR,
    Micrometer::DESCRIPTOR,
    Millimeter::DESCRIPTOR,
    Centimeter::DESCRIPTOR,
    Decimeter::DESCRIPTOR,
    Meter::DESCRIPTOR,
    Decameter::DESCRIPTOR,
    Hectometer::DESCRIPTOR,
    Kilometer::DESCRIPTOR,
    Inch::DESCRIPTOR,
    Foot::DESCRIPTOR,
    Yard::DESCRIPTOR,
    Mile::DESCRIPTOR,
    NauticalMile::DESCRIPTOR,
    AstronomicalUnit::DESCRIPTOR,
    LightYear::DESCRIPTOR,
    Parsec::DESCRIPTOR,
];
