//! Dimensionally-safe quantity vectors.
//!
//! `qvec` is the user-facing crate in this workspace. It re-exports the full API from `qvec-core`, the predefined
//! unit modules and markers, named quantity aliases (`LengthVector`, `AbsoluteTemperatureVector`, …) and a runtime
//! [`registry`] of unit symbols.
//!
//! A [`Vector<D>`] stores SI values for dimension `D` together with a display unit and an [`AbsRel`] tag. Storage is
//! dense or sparse; both give identical results and the choice only affects memory and speed.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Keeps positions and displacements apart at runtime: `Abs - Abs = Rel`, `Abs + Abs` is an error.
//! - Gives large, mostly-zero vectors a sparse representation without changing their semantics.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional inference (length / time as a velocity).
//! - Persistence or any wire format.
//!
//! # Quick start
//!
//! ```rust
//! use qvec::{Kilometer, LengthVector, Meter, StorageType, VectorQuantity};
//!
//! let legs = LengthVector::relative(&[1.2, 0.0, 0.0, 3.4], Kilometer, StorageType::Sparse).unwrap();
//! assert_eq!(legs.cardinality(), 2);
//! assert!((legs.z_sum() - 4_600.0).abs() < 1e-9);
//!
//! let metres = legs.values_in(Meter);
//! assert!((metres[3] - 3_400.0).abs() < 1e-9);
//! ```
//!
//! Copy-on-write mutation:
//!
//! ```rust
//! use qvec::{Meter, LengthVector, StorageType, VectorQuantity};
//!
//! let v = LengthVector::relative(&[1.0, 2.0, 3.0], Meter, StorageType::Dense).unwrap();
//! let mut m = v.mutable();
//! m.multiply_by(2.0).unwrap();
//! assert_eq!(v.values_si(), vec![1.0, 2.0, 3.0]);
//! assert_eq!(m.values_si(), vec![2.0, 4.0, 6.0]);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use qvec::{DurationVector, LengthVector, Meter, Second, StorageType};
//!
//! let d = LengthVector::relative(&[1.0], Meter, StorageType::Dense).unwrap();
//! let t = DurationVector::relative(&[1.0], Second, StorageType::Dense).unwrap();
//! let _ = d.plus(&t); // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (markers are also re-exported at the crate root):
//!
//! - `qvec::length` (metres, kilometres, inches, AU, light-year, …)
//! - `qvec::time` (seconds, hours, days, Julian years, …)
//! - `qvec::temperature` (kelvin, Celsius, Fahrenheit, Rankine)
//! - `qvec::angle` (radians, degrees, arcseconds, turns, …)
//! - `qvec::mass`, `qvec::acceleration`, `qvec::money`, `qvec::dimensionless`
//!
//! # Feature flags
//!
//! - `parallel`: runs large dense kernels on `rayon` (forwarded to `qvec-core`).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use qvec_core::*;

pub mod registry;

mod aliases;
pub use aliases::*;

pub use qvec_core::units::acceleration::{
    AccelerationUnit, FootPerSecondSquared, Gal, KilometerPerHourPerSecond, MeterPerSecondSquared, StandardGravity,
};
pub use qvec_core::units::angle::{
    AngleUnit, Arcminute, Arcsecond, Degree, Gradian, Milliradian, Radian, Turn,
};
pub use qvec_core::units::dimensionless::{PartsPerMillion, PerMille, Percent, Unitless};
pub use qvec_core::units::length::{
    AstronomicalUnit, Centimeter, Decameter, Decimeter, Foot, Hectometer, Inch, Kilometer, LengthUnit, LightYear,
    Meter, Micrometer, Mile, Millimeter, Nanometer, NauticalMile, Parsec, Yard,
};
pub use qvec_core::units::mass::{
    Gram, Kilogram, MassUnit, Microgram, Milligram, Ounce, Pound, Stone, Tonne,
};
pub use qvec_core::units::money::{Euro, EuroCent, Kiloeuro, Megaeuro};
pub use qvec_core::units::temperature::{Celsius, Fahrenheit, Kelvin, Rankine, TemperatureUnit};
pub use qvec_core::units::time::{
    Day, Hour, JulianYear, Microsecond, Millisecond, Minute, Nanosecond, Second, TimeUnit, Week,
};
