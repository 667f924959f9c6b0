//! Predefined unit modules grouped by dimension.
//!
//! `qvec-core` ships the built-in unit tables so that the `#[derive(Unit)]` expansion can implement `From<Marker> for
//! UnitDescriptor<Dim>` without downstream crates having to fight Rust’s orphan rules.
//!
//! Every module defines a dimension tag, its unit markers and a `UNITS` table listing their descriptors.
//!
//! ## Modules
//!
//! - [`length`]: length units (metre is the SI unit); all absolute-capable, for positions.
//! - [`time`]: time units (second is the SI unit); all absolute-capable, for instants.
//! - [`temperature`]: kelvin, Celsius, Fahrenheit, Rankine; Celsius and Fahrenheit carry offsets.
//! - [`angle`]: angle units (radian is the SI unit); all absolute-capable, for directions.
//! - [`mass`]: mass units (kilogram is the SI unit).
//! - [`acceleration`]: acceleration units (m/s² is the SI unit).
//! - [`money`]: money units (euro is the reference unit).
//! - [`dimensionless`]: plain numbers, percent and friends.

pub mod acceleration;
pub mod angle;
pub mod dimensionless;
pub mod length;
pub mod mass;
pub mod money;
pub mod temperature;
pub mod time;
