//! Storage mode and absolute/relative tags.

use crate::error::{QuantityError, Result as QuantityResult};
use crate::unit::UnitDescriptor;
use crate::Dimension;
use core::fmt::{Display, Formatter, Result};

/// Backing representation of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StorageType {
    /// One SI value per index.
    #[default]
    Dense,
    /// Sorted `(index, value)` pairs; absent indices are zero.
    Sparse,
}

impl Display for StorageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            StorageType::Dense => write!(f, "Dense"),
            StorageType::Sparse => write!(f, "Sparse"),
        }
    }
}

/// Whether a quantity is a point on a scale (absolute) or a difference (relative).
///
/// Absolute quantities (positions, instants, temperatures) cannot be added to each other or
/// scaled; relative ones form a vector space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbsRel {
    /// A point on a scale with an origin.
    Absolute,
    /// A difference between two points.
    Relative,
}

impl AbsRel {
    /// Returns `true` for [`AbsRel::Absolute`].
    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self, AbsRel::Absolute)
    }

    /// Kind of `self + other`.
    ///
    /// ```text
    /// Rel + Rel -> Rel
    /// Abs + Rel -> Abs
    /// Rel + Abs -> Abs
    /// Abs + Abs -> InvalidOperation
    /// ```
    pub fn plus(self, other: AbsRel) -> QuantityResult<AbsRel> {
        match (self, other) {
            (AbsRel::Relative, AbsRel::Relative) => Ok(AbsRel::Relative),
            (AbsRel::Absolute, AbsRel::Absolute) => Err(QuantityError::InvalidOperation(
                "cannot add two absolute quantities".to_string(),
            )),
            _ => Ok(AbsRel::Absolute),
        }
    }

    /// Kind of `self - other`.
    ///
    /// ```text
    /// Rel - Rel -> Rel
    /// Abs - Rel -> Abs
    /// Abs - Abs -> Rel
    /// Rel - Abs -> InvalidOperation
    /// ```
    pub fn minus(self, other: AbsRel) -> QuantityResult<AbsRel> {
        match (self, other) {
            (AbsRel::Absolute, AbsRel::Relative) => Ok(AbsRel::Absolute),
            (AbsRel::Relative, AbsRel::Absolute) => Err(QuantityError::InvalidOperation(
                "cannot subtract an absolute quantity from a relative one".to_string(),
            )),
            _ => Ok(AbsRel::Relative),
        }
    }

    /// Fails unless `self` is relative; `op` names the rejected operation.
    pub fn require_relative(self, op: &str) -> QuantityResult<()> {
        match self {
            AbsRel::Relative => Ok(()),
            AbsRel::Absolute => Err(QuantityError::InvalidOperation(format!(
                "{} is not defined for absolute quantities",
                op
            ))),
        }
    }

    /// Checks that `unit` can display a quantity of this kind and returns the unit to store.
    ///
    /// Relative quantities always store the unit's relative counterpart.
    pub fn display_unit<D: Dimension>(self, unit: UnitDescriptor<D>) -> QuantityResult<UnitDescriptor<D>> {
        match self {
            AbsRel::Relative => Ok(unit.relative()),
            AbsRel::Absolute if unit.is_absolute_capable() => Ok(unit),
            AbsRel::Absolute => Err(QuantityError::InvalidOperation(format!(
                "unit {} cannot express absolute {} quantities",
                unit.symbol(),
                D::NAME
            ))),
        }
    }
}

/// Display unit of an additive result: an absolute result keeps the unit of its absolute operand,
/// and `Abs - Abs` yields the relative counterpart of the left unit.
pub(crate) fn additive_unit<D: Dimension>(
    left: (AbsRel, UnitDescriptor<D>),
    right: (AbsRel, UnitDescriptor<D>),
    result: AbsRel,
) -> UnitDescriptor<D> {
    match (left.0, result) {
        (AbsRel::Relative, AbsRel::Absolute) => right.1,
        (AbsRel::Absolute, AbsRel::Relative) => left.1.relative(),
        _ => left.1,
    }
}

impl Display for AbsRel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AbsRel::Absolute => write!(f, "Abs"),
            AbsRel::Relative => write!(f, "Rel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimensionless;

    const CELSIUS_LIKE: UnitDescriptor<Dimensionless> =
        UnitDescriptor::new("shifted", "s", 1.0, 273.15, true);
    const PLAIN: UnitDescriptor<Dimensionless> = UnitDescriptor::new("plain", "p", 1.0, 0.0, false);

    #[test]
    fn plus_algebra() {
        use AbsRel::*;
        assert_eq!(Relative.plus(Relative), Ok(Relative));
        assert_eq!(Absolute.plus(Relative), Ok(Absolute));
        assert_eq!(Relative.plus(Absolute), Ok(Absolute));
        assert!(matches!(
            Absolute.plus(Absolute),
            Err(QuantityError::InvalidOperation(_))
        ));
    }

    #[test]
    fn minus_algebra() {
        use AbsRel::*;
        assert_eq!(Relative.minus(Relative), Ok(Relative));
        assert_eq!(Absolute.minus(Relative), Ok(Absolute));
        assert_eq!(Absolute.minus(Absolute), Ok(Relative));
        assert!(Relative.minus(Absolute).is_err());
    }

    #[test]
    fn display_unit_checks_capability() {
        assert!(AbsRel::Absolute.display_unit(PLAIN).is_err());
        assert_eq!(AbsRel::Absolute.display_unit(CELSIUS_LIKE), Ok(CELSIUS_LIKE));
        assert_eq!(AbsRel::Relative.display_unit(CELSIUS_LIKE).unwrap().offset(), 0.0);
    }

    #[test]
    fn additive_unit_selection() {
        use AbsRel::*;
        let rel = CELSIUS_LIKE.relative();
        assert_eq!(
            additive_unit((Relative, rel), (Absolute, CELSIUS_LIKE), Absolute),
            CELSIUS_LIKE
        );
        assert_eq!(
            additive_unit((Absolute, CELSIUS_LIKE), (Absolute, CELSIUS_LIKE), Relative),
            rel
        );
        assert_eq!(additive_unit((Relative, rel), (Relative, PLAIN), Relative), rel);
    }

    #[test]
    fn display() {
        assert_eq!(AbsRel::Absolute.to_string(), "Abs");
        assert_eq!(StorageType::Sparse.to_string(), "Sparse");
    }
}
