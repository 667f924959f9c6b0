//! Single SI-valued quantity with a display unit and an absolute/relative tag.

use crate::dimension::{Dimension, Dimensionless};
use crate::error::{QuantityError, Result};
use crate::kind::{additive_unit, AbsRel};
use crate::unit::{Unit, UnitDescriptor};
use crate::units::dimensionless::Unitless;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A single quantity of dimension `D`.
///
/// The value is stored in SI; the display unit is only consulted by [`Scalar::value`] and
/// formatting. Arithmetic never mutates the receiver and re-tags results with the left operand's
/// display unit.
///
/// ```rust
/// use qvec_core::units::temperature::{Celsius, Kelvin};
/// use qvec_core::Scalar;
///
/// let boiling = Scalar::absolute(100.0, Celsius).unwrap();
/// assert!((boiling.value_in(Kelvin) - 373.15).abs() < 1e-9);
///
/// let freezing = Scalar::absolute(0.0, Celsius).unwrap();
/// let span = boiling.minus(&freezing).unwrap();
/// assert!((span.value() - 100.0).abs() < 1e-9);
/// assert!(!span.is_absolute());
/// ```
pub struct Scalar<D: Dimension> {
    si: f64,
    unit: UnitDescriptor<D>,
    kind: AbsRel,
}

impl<D: Dimension> Clone for Scalar<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Scalar<D> {}

impl<D: Dimension> Scalar<D> {
    /// A relative quantity of `value` in `unit`.
    pub fn relative(value: f64, unit: impl Into<UnitDescriptor<D>>) -> Self {
        let unit = unit.into().relative();
        Self {
            si: unit.to_si(value),
            unit,
            kind: AbsRel::Relative,
        }
    }

    /// An absolute quantity of `value` in `unit`.
    ///
    /// Fails with [`QuantityError::InvalidOperation`] when `unit` is not absolute-capable.
    pub fn absolute(value: f64, unit: impl Into<UnitDescriptor<D>>) -> Result<Self> {
        let unit = AbsRel::Absolute.display_unit(unit.into())?;
        Ok(Self {
            si: unit.to_si(value),
            unit,
            kind: AbsRel::Absolute,
        })
    }

    /// A quantity from its SI value, displayed in `unit`.
    pub fn from_si(si: f64, unit: impl Into<UnitDescriptor<D>>, kind: AbsRel) -> Result<Self> {
        let unit = kind.display_unit(unit.into())?;
        Ok(Self::from_parts(si, unit, kind))
    }

    /// Assembles a scalar whose unit already matches `kind`.
    pub(crate) fn from_parts(si: f64, unit: UnitDescriptor<D>, kind: AbsRel) -> Self {
        Self { si, unit, kind }
    }

    /// SI value.
    #[inline]
    pub fn si(&self) -> f64 {
        self.si
    }

    /// Value in the display unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.unit.from_si(self.si)
    }

    /// Value expressed in `unit`; relative quantities ignore the unit's offset.
    pub fn value_in(&self, unit: impl Into<UnitDescriptor<D>>) -> f64 {
        let unit = unit.into();
        match self.kind {
            AbsRel::Absolute => unit.from_si(self.si),
            AbsRel::Relative => unit.relative().from_si(self.si),
        }
    }

    /// Display unit.
    #[inline]
    pub fn display_unit(&self) -> UnitDescriptor<D> {
        self.unit
    }

    /// Absolute/relative tag.
    #[inline]
    pub fn kind(&self) -> AbsRel {
        self.kind
    }

    /// Returns `true` for absolute quantities.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.kind.is_absolute()
    }

    /// Same quantity, displayed in `unit`.
    pub fn with_display_unit(&self, unit: impl Into<UnitDescriptor<D>>) -> Result<Self> {
        Self::from_si(self.si, unit, self.kind)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// `self + other`, following the absolute/relative algebra.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        let kind = self.kind.plus(other.kind)?;
        let unit = additive_unit((self.kind, self.unit), (other.kind, other.unit), kind);
        Ok(Self::from_parts(self.si + other.si, unit, kind))
    }

    /// `self - other`, following the absolute/relative algebra.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        let kind = self.kind.minus(other.kind)?;
        let unit = additive_unit((self.kind, self.unit), (other.kind, other.unit), kind);
        Ok(Self::from_parts(self.si - other.si, unit, kind))
    }

    /// `self * factor` for a dimensionless factor; relative only.
    pub fn times(&self, factor: &Scalar<Dimensionless>) -> Result<Self> {
        factor.kind.require_relative("multiplication")?;
        self.multiply_by(factor.si)
    }

    /// `self / divisor` for a dimensionless divisor; relative only.
    pub fn divide(&self, divisor: &Scalar<Dimensionless>) -> Result<Self> {
        divisor.kind.require_relative("division")?;
        self.divide_by(divisor.si)
    }

    /// Ratio of two relative quantities of the same dimension.
    pub fn ratio(&self, other: &Self) -> Result<Scalar<Dimensionless>> {
        self.kind.require_relative("ratio")?;
        other.kind.require_relative("ratio")?;
        if other.si == 0.0 {
            return Err(QuantityError::DivideByZero("ratio denominator is zero".to_string()));
        }
        Ok(Scalar::from_parts(
            self.si / other.si,
            Unitless::DESCRIPTOR,
            AbsRel::Relative,
        ))
    }

    /// `self * factor`; relative only.
    pub fn multiply_by(&self, factor: f64) -> Result<Self> {
        self.kind.require_relative("multiplication")?;
        Ok(Self::from_parts(self.si * factor, self.unit, self.kind))
    }

    /// `self / factor`; relative only.
    pub fn divide_by(&self, factor: f64) -> Result<Self> {
        self.kind.require_relative("division")?;
        if factor == 0.0 {
            return Err(QuantityError::DivideByZero("factor is zero".to_string()));
        }
        Ok(Self::from_parts(self.si / factor, self.unit, self.kind))
    }
}

impl<D: Dimension> PartialEq for Scalar<D> {
    /// Equal when both kind and SI value match; the display unit does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.si == other.si
    }
}

impl<D: Dimension> PartialOrd for Scalar<D> {
    /// Only quantities of the same kind are ordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind != other.kind {
            return None;
        }
        self.si.partial_cmp(&other.si)
    }
}

impl<D: Dimension> core::fmt::Debug for Scalar<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scalar")
            .field("si", &self.si)
            .field("unit", &self.unit.symbol())
            .field("kind", &self.kind)
            .finish()
    }
}

impl<D: Dimension> Display for Scalar<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.value())
        } else {
            write!(f, "{} {}", self.value(), self.unit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Meter};
    use crate::units::mass::Kilogram;
    use crate::units::temperature::{Celsius, Fahrenheit, Kelvin};
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn relative_ignores_offset() {
        let dt = Scalar::relative(10.0, Celsius);
        assert_relative_eq!(dt.si(), 10.0);
        assert_relative_eq!(dt.value_in(Fahrenheit), 18.0, epsilon = 1e-9);
    }

    #[test]
    fn absolute_applies_offset() {
        let t = Scalar::absolute(32.0, Fahrenheit).unwrap();
        assert_relative_eq!(t.value_in(Celsius), 0.0, epsilon = 1e-9);
        assert_relative_eq!(t.value_in(Kelvin), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn absolute_requires_capable_unit() {
        assert!(matches!(
            Scalar::absolute(1.0, Kilogram),
            Err(QuantityError::InvalidOperation(_))
        ));
    }

    #[test]
    fn with_display_unit_keeps_si() {
        let d = Scalar::relative(1500.0, Meter);
        let km = d.with_display_unit(Kilometer).unwrap();
        assert_relative_eq!(km.value(), 1.5);
        assert_eq!(km.si(), d.si());
        assert_eq!(km.to_string(), "1.5 km");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn plus_keeps_left_unit() {
        let a = Scalar::relative(1.0, Kilometer);
        let b = Scalar::relative(500.0, Meter);
        let sum = a.plus(&b).unwrap();
        assert_relative_eq!(sum.value(), 1.5);
        assert_eq!(sum.display_unit().symbol(), "km");
    }

    #[test]
    fn absolute_plus_absolute_is_invalid() {
        let a = Scalar::absolute(1.0, Celsius).unwrap();
        assert!(a.plus(&a).is_err());
    }

    #[test]
    fn relative_plus_absolute_is_absolute_in_absolute_unit() {
        let dt = Scalar::relative(5.0, Kelvin);
        let t = Scalar::absolute(20.0, Celsius).unwrap();
        let r = dt.plus(&t).unwrap();
        assert!(r.is_absolute());
        assert_relative_eq!(r.value(), 25.0, epsilon = 1e-9);
        assert_eq!(r.display_unit().symbol(), "°C");
    }

    #[test]
    fn scaling_is_relative_only() {
        let t = Scalar::absolute(20.0, Celsius).unwrap();
        assert!(t.multiply_by(2.0).is_err());
        let d = Scalar::relative(2.0, Meter);
        assert_relative_eq!(d.multiply_by(3.0).unwrap().value(), 6.0);
        assert!(matches!(
            d.divide_by(0.0),
            Err(QuantityError::DivideByZero(_))
        ));
    }

    #[test]
    fn times_divide_and_ratio() {
        let d = Scalar::relative(3.0, Kilometer);
        let two = Scalar::relative(2.0, Unitless);
        assert_relative_eq!(d.times(&two).unwrap().value(), 6.0);
        assert_relative_eq!(d.divide(&two).unwrap().value(), 1.5);
        let r = d.ratio(&Scalar::relative(1500.0, Meter)).unwrap();
        assert_relative_eq!(r.value(), 2.0);
    }

    #[test]
    fn ordering_only_within_kind() {
        let a = Scalar::relative(1.0, Meter);
        let b = Scalar::relative(2.0, Meter);
        assert!(a < b);
        let c = Scalar::absolute(2.0, Meter).unwrap();
        assert_eq!(a.partial_cmp(&c), None);
        assert_ne!(b, c);
    }
}
