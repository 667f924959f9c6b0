//! Core storage and arithmetic engine for dimensionally-safe quantity vectors.
//!
//! `qvec-core` provides a small model of physical quantities held in SI:
//!
//! - A *dimension* is an empty enum implementing [`Dimension`] (length, time, temperature, …).
//! - A *unit* is a [`UnitDescriptor<D>`]: scale, offset and absolute capability within dimension `D`. Built-in unit
//!   markers (`Meter`, `Celsius`, …) derive [`Unit`] and convert into descriptors.
//! - A [`Vector<D>`] holds `n` SI values in dense or sparse [`VectorData`], a display unit, and an [`AbsRel`] tag.
//! - A [`Scalar<D>`] is the single-value counterpart.
//! - A [`MutableVector<D>`] is a copy-on-write handle with in-place variants of every operation.
//!
//! Most users should depend on `qvec` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (a length vector cannot be added to a time vector).
//! - Runtime enforcement of the absolute/relative algebra: `Abs - Abs = Rel`, `Abs ± Rel = Abs`, `Abs + Abs` is an
//!   error, and only relative quantities can be scaled.
//! - Dense and sparse storage with value-identical semantics, sparse-preserving kernels where they apply, and
//!   explicit conversion between the two.
//! - Copy-on-write mutation that never leaks into shared immutable vectors.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional inference (length / time is not turned into velocity). Products and quotients are only defined
//!   against dimensionless factors, plus same-dimension ratios.
//! - Persistence or serialization.
//!
//! # Quick start
//!
//! ```rust
//! use qvec_core::units::temperature::{Celsius, Kelvin};
//! use qvec_core::{AbsRel, StorageType, Vector, VectorQuantity};
//!
//! let morning = Vector::absolute(&[12.0, 14.5, 9.0], Celsius, StorageType::Dense).unwrap();
//! let noon = Vector::absolute(&[19.0, 21.5, 15.0], Celsius, StorageType::Dense).unwrap();
//!
//! let warming = noon.minus(&morning).unwrap();
//! assert_eq!(warming.kind(), AbsRel::Relative);
//! let kelvin = warming.values_in(Kelvin);
//! assert!((kelvin[0] - 7.0).abs() < 1e-9);
//!
//! assert!(noon.plus(&morning).is_err());
//! ```
//!
//! # Feature flags
//!
//! - `parallel`: dense element-wise kernels run on `rayon` for vectors of at least [`PARALLEL_THRESHOLD`] elements.
//!   Results are identical to the sequential kernels.
//!
//! # Errors
//!
//! Fallible operations return [`Result<T>`] with a [`QuantityError`] describing the failure at the point of
//! detection. Floating-point edge cases (NaN, infinities) otherwise follow IEEE-754.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: storage conversions at `trace`, copy-on-write copies, sparse
//! densification and rejected operations at `debug`. No logger is installed.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

pub mod data;
mod dimension;
mod error;
mod facade;
mod functions;
mod kind;
mod mutable;
mod scalar;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use data::{VectorData, PARALLEL_THRESHOLD};
pub use dimension::{Dimension, Dimensionless};
pub use error::{QuantityError, Result};
pub use facade::{QuantityFactory, ScalarIter, VectorQuantity};
pub use functions::MathFunction;
pub use kind::{AbsRel, StorageType};
pub use mutable::MutableVector;
pub use scalar::Scalar;
pub use unit::{Unit, UnitDescriptor};
pub use vector::Vector;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qvec-core` so the unit derive can implement conversions into [`UnitDescriptor`] without
/// running into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::angle;
pub use units::dimensionless;
pub use units::length;
pub use units::mass;
pub use units::money;
pub use units::temperature;
pub use units::time;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn immutable_types_are_send_and_sync() {
        assert_send_sync::<Vector<length::Length>>();
        assert_send_sync::<Scalar<temperature::Temperature>>();
        assert_send_sync::<VectorData>();
        assert_send_sync::<MutableVector<time::Time>>();
    }
}
