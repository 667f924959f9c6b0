//! Time units.
//!
//! The SI unit for this dimension is [`Second`]. Civil units use the conventional mapping
//! `1 day = 86_400 s` (leap seconds ignored). All time units are absolute-capable: relative values
//! are durations, absolute values are instants on a time scale.

use crate::{Dimension, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {
    const NAME: &'static str = "time";
}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Conventional civil mapping used by this module: seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Nanoseconds (`1 ns = 10^-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ns", dimension = Time, scale = 1e-9, absolute = true)]
pub struct Nanosecond;

/// Microseconds (`1 µs = 10^-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "µs", dimension = Time, scale = 1e-6, absolute = true)]
pub struct Microsecond;

/// Milliseconds (`1 ms = 10^-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "ms", dimension = Time, scale = 1e-3, absolute = true)]
pub struct Millisecond;

/// Second (SI unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "s", dimension = Time, scale = 1.0, absolute = true)]
pub struct Second;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "min", dimension = Time, scale = 60.0, absolute = true)]
pub struct Minute;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "h", dimension = Time, scale = 3_600.0, absolute = true)]
pub struct Hour;

/// Mean solar day (`86 400 s`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "d", dimension = Time, scale = SECONDS_PER_DAY, absolute = true)]
pub struct Day;

/// Week (`7 d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "wk", dimension = Time, scale = 7.0 * SECONDS_PER_DAY, absolute = true)]
pub struct Week;

/// Julian year (`365.25 d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "a", dimension = Time, scale = 365.25 * SECONDS_PER_DAY, absolute = true)]
pub struct JulianYear;

/// All time units defined in this module.
pub const UNITS: &[UnitDescriptor<Time>] = &[
    Nanosecond::DESCRIPTOR,
    Microsecond::DESCRIPTOR,
    Millisecond::DESCRIPTOR,
    Second::DESCRIPTOR,
    Minute::DESCRIPTOR,
    Hour::DESCRIPTOR,
    Day::DESCRIPTOR,
    Week::DESCRIPTOR,
    JulianYear::DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn civil_ladder() {
        assert_eq!(Minute::DESCRIPTOR.scale(), 60.0);
        assert_eq!(Hour::DESCRIPTOR.scale(), 3_600.0);
        assert_eq!(Day::DESCRIPTOR.scale(), SECONDS_PER_DAY);
        assert_relative_eq!(JulianYear::DESCRIPTOR.scale() / Day::DESCRIPTOR.scale(), 365.25);
    }

    #[test]
    fn all_absolute_capable() {
        assert!(UNITS.iter().all(UnitDescriptor::is_absolute_capable));
        assert!(UNITS.iter().all(|u| u.offset() == 0.0));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_h_s(h in -1e6..1e6f64) {
            let hour = Hour::DESCRIPTOR;
            let back = hour.from_si(hour.to_si(h));
            prop_assert!((back - h).abs() < 1e-9 * h.abs().max(1.0));
        }
    }
}
