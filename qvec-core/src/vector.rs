//! Immutable vector quantities.

use crate::data::VectorData;
use crate::dimension::{Dimension, Dimensionless};
use crate::error::{QuantityError, Result};
use crate::facade::{fmt_vector, QuantityFactory, VectorQuantity};
use crate::functions::MathFunction;
use crate::kind::{additive_unit, AbsRel, StorageType};
use crate::mutable::MutableVector;
use crate::scalar::Scalar;
use crate::unit::{Unit, UnitDescriptor};
use crate::units::dimensionless::Unitless;
use core::fmt::{Debug, Display, Formatter};
use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable vector of quantities of dimension `D`.
///
/// Values are held in SI inside shared storage; cloning a vector, changing its display unit or
/// requesting the storage mode it already has never copies the data. Every arithmetic operation
/// returns a new vector and leaves the receiver untouched.
///
/// ```rust
/// use qvec_core::units::length::{Kilometer, Meter};
/// use qvec_core::{StorageType, Vector, VectorQuantity};
///
/// let a = Vector::relative(&[1.0, 2.0, 3.0], Kilometer, StorageType::Dense).unwrap();
/// let b = Vector::relative(&[500.0, 0.0, 250.0], Meter, StorageType::Sparse).unwrap();
/// let sum = a.plus(&b).unwrap();
/// assert_eq!(sum.values_in_unit(), vec![1.5, 2.0, 3.25]);
/// assert_eq!(sum.to_string(), "[1.5 2 3.25] km");
/// ```
pub struct Vector<D: Dimension> {
    data: Arc<VectorData>,
    unit: UnitDescriptor<D>,
    kind: AbsRel,
}

impl<D: Dimension> QuantityFactory<D> for Vector<D> {
    type Mutable = MutableVector<D>;

    fn instantiate_type(data: Arc<VectorData>, unit: UnitDescriptor<D>, kind: AbsRel) -> Self {
        Self { data, unit, kind }
    }

    fn instantiate_mutable_type(
        data: Arc<VectorData>,
        unit: UnitDescriptor<D>,
        kind: AbsRel,
    ) -> MutableVector<D> {
        MutableVector::from_shared(data, unit, kind)
    }
}

impl<D: Dimension> VectorQuantity<D> for Vector<D> {
    #[inline]
    fn data(&self) -> &VectorData {
        &self.data
    }

    #[inline]
    fn display_unit(&self) -> UnitDescriptor<D> {
        self.unit
    }

    #[inline]
    fn kind(&self) -> AbsRel {
        self.kind
    }
}

impl<D: Dimension> Vector<D> {
    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Wraps existing SI storage, checking that `unit` can express `kind`.
    pub fn new(data: VectorData, unit: impl Into<UnitDescriptor<D>>, kind: AbsRel) -> Result<Self> {
        let unit = kind.display_unit(unit.into())?;
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// A relative vector from raw values in `unit`.
    pub fn relative(
        values: &[f64],
        unit: impl Into<UnitDescriptor<D>>,
        storage: StorageType,
    ) -> Result<Self> {
        Self::with_kind(values, unit.into(), AbsRel::Relative, storage)
    }

    /// An absolute vector from raw values in `unit`; the unit must be absolute-capable.
    pub fn absolute(
        values: &[f64],
        unit: impl Into<UnitDescriptor<D>>,
        storage: StorageType,
    ) -> Result<Self> {
        Self::with_kind(values, unit.into(), AbsRel::Absolute, storage)
    }

    fn with_kind(
        values: &[f64],
        unit: UnitDescriptor<D>,
        kind: AbsRel,
        storage: StorageType,
    ) -> Result<Self> {
        let unit = kind.display_unit(unit)?;
        let data = VectorData::instantiate(values, &unit, storage)?;
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// Like [`Vector::relative`]/[`Vector::absolute`], for a source that may be absent.
    pub fn from_optional(
        values: Option<&[f64]>,
        unit: impl Into<UnitDescriptor<D>>,
        kind: AbsRel,
        storage: StorageType,
    ) -> Result<Self> {
        let unit = kind.display_unit(unit.into())?;
        let data = VectorData::try_instantiate(values, &unit, storage)?;
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// A vector from values that are already SI, displayed in `unit`.
    pub fn from_si(
        si: Vec<f64>,
        unit: impl Into<UnitDescriptor<D>>,
        kind: AbsRel,
        storage: StorageType,
    ) -> Result<Self> {
        Self::new(VectorData::from_si(si, storage)?, unit, kind)
    }

    /// A vector of length `len` from an index → raw value map; unspecified entries are raw zero.
    pub fn from_map(
        values: &BTreeMap<usize, f64>,
        len: usize,
        unit: impl Into<UnitDescriptor<D>>,
        kind: AbsRel,
        storage: StorageType,
    ) -> Result<Self> {
        let unit = kind.display_unit(unit.into())?;
        let data = VectorData::instantiate_map(values, len, &unit, storage)?;
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// A vector from scalars; unit and kind are taken from the first element.
    ///
    /// Fails with [`QuantityError::EmptyInput`] for an empty slice and with
    /// [`QuantityError::InvalidOperation`] when the scalars mix absolute and relative kinds.
    pub fn from_scalars(scalars: &[Scalar<D>], storage: StorageType) -> Result<Self> {
        let first = scalars.first().ok_or(QuantityError::EmptyInput)?;
        if scalars.iter().any(|s| s.kind() != first.kind()) {
            return Err(QuantityError::InvalidOperation(
                "cannot mix absolute and relative scalars in one vector".to_string(),
            ));
        }
        let si = scalars.iter().map(Scalar::si).collect();
        let data = VectorData::from_si(si, storage)?;
        Ok(Self::instantiate_type(Arc::new(data), first.display_unit(), first.kind()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Storage and display
    // ─────────────────────────────────────────────────────────────────────────

    /// Dense version of this vector; shares storage when already dense.
    pub fn to_dense(&self) -> Self {
        if self.data.is_dense() {
            return self.clone();
        }
        let data = self.data.to_dense().into_owned();
        Self::instantiate_type(Arc::new(data), self.unit, self.kind)
    }

    /// Sparse version of this vector; shares storage when already sparse.
    pub fn to_sparse(&self) -> Self {
        if !self.data.is_dense() {
            return self.clone();
        }
        let data = self.data.to_sparse().into_owned();
        Self::instantiate_type(Arc::new(data), self.unit, self.kind)
    }

    /// Returns `true` when both vectors reference the same storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Same values, displayed in `unit`. Storage is shared.
    pub fn with_display_unit(&self, unit: impl Into<UnitDescriptor<D>>) -> Result<Self> {
        let unit = self.kind.display_unit(unit.into())?;
        Ok(Self::instantiate_type(Arc::clone(&self.data), unit, self.kind))
    }

    /// A copy-on-write mutable handle over the same storage.
    pub fn mutable(&self) -> MutableVector<D> {
        Self::instantiate_mutable_type(Arc::clone(&self.data), self.unit, self.kind)
    }

    pub(crate) fn shared_data(&self) -> &Arc<VectorData> {
        &self.data
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Absolute/relative algebra
    // ─────────────────────────────────────────────────────────────────────────

    fn additive(
        &self,
        other: &impl VectorQuantity<D>,
        kind: AbsRel,
        data: VectorData,
    ) -> Self {
        let unit = additive_unit((self.kind, self.unit), (other.kind(), other.display_unit()), kind);
        if self.kind.is_absolute() && !kind.is_absolute() {
            return Self::instantiate_type_rel(Arc::new(data), unit);
        }
        Self::instantiate_type(Arc::new(data), unit, kind)
    }

    /// Element-wise `self + other`.
    ///
    /// `Abs + Abs` fails with [`QuantityError::InvalidOperation`]; an absolute result is
    /// displayed in the absolute operand's unit.
    pub fn plus(&self, other: &impl VectorQuantity<D>) -> Result<Self> {
        let kind = self.kind.plus(other.kind())?;
        let data = self.data.plus(other.data())?;
        Ok(self.additive(other, kind, data))
    }

    /// Element-wise `self - other`.
    ///
    /// `Abs - Abs` yields a relative vector in the relative counterpart of the left unit;
    /// `Rel - Abs` fails with [`QuantityError::InvalidOperation`].
    pub fn minus(&self, other: &impl VectorQuantity<D>) -> Result<Self> {
        let kind = self.kind.minus(other.kind())?;
        let data = self.data.minus(other.data())?;
        Ok(self.additive(other, kind, data))
    }

    /// Adds `scalar` to every element.
    pub fn plus_scalar(&self, scalar: &Scalar<D>) -> Result<Self> {
        let kind = self.kind.plus(scalar.kind())?;
        let unit = additive_unit((self.kind, self.unit), (scalar.kind(), scalar.display_unit()), kind);
        let data = self.data.map({
            let si = scalar.si();
            move |x| x + si
        });
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// Subtracts `scalar` from every element.
    pub fn minus_scalar(&self, scalar: &Scalar<D>) -> Result<Self> {
        let kind = self.kind.minus(scalar.kind())?;
        let unit = additive_unit((self.kind, self.unit), (scalar.kind(), scalar.display_unit()), kind);
        let data = self.data.map({
            let si = scalar.si();
            move |x| x - si
        });
        Ok(Self::instantiate_type(Arc::new(data), unit, kind))
    }

    /// Element-wise product with a dimensionless vector; relative only.
    pub fn times(&self, factors: &impl VectorQuantity<Dimensionless>) -> Result<Self> {
        self.kind.require_relative("multiplication")?;
        factors.kind().require_relative("multiplication")?;
        let data = self.data.times(factors.data())?;
        Ok(Self::instantiate_type(Arc::new(data), self.unit, self.kind))
    }

    /// Element-wise quotient by a dimensionless vector; relative only.
    pub fn divide(&self, divisors: &impl VectorQuantity<Dimensionless>) -> Result<Self> {
        self.kind.require_relative("division")?;
        divisors.kind().require_relative("division")?;
        let data = self.data.divide(divisors.data())?;
        Ok(Self::instantiate_type(Arc::new(data), self.unit, self.kind))
    }

    /// Element-wise ratio of two relative vectors of the same dimension.
    pub fn ratio(&self, other: &impl VectorQuantity<D>) -> Result<Vector<Dimensionless>> {
        self.kind.require_relative("ratio")?;
        other.kind().require_relative("ratio")?;
        let data = self.data.divide(other.data())?;
        Ok(Vector::instantiate_type(
            Arc::new(data),
            Unitless::DESCRIPTOR,
            AbsRel::Relative,
        ))
    }

    /// Every element multiplied by `factor`; relative only.
    pub fn multiply_by(&self, factor: f64) -> Result<Self> {
        self.kind.require_relative("multiplication")?;
        let data = self.data.map(move |x| x * factor);
        Ok(Self::instantiate_type(Arc::new(data), self.unit, self.kind))
    }

    /// Every element divided by `factor`; relative only.
    pub fn divide_by(&self, factor: f64) -> Result<Self> {
        self.kind.require_relative("division")?;
        let mut data = (*self.data).clone();
        data.divide_by_factor(factor)?;
        Ok(Self::instantiate_type(Arc::new(data), self.unit, self.kind))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Math functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies `function` to every SI element.
    ///
    /// Absolute vectors only accept rounding functions
    /// (see [`MathFunction::preserves_absolute`]).
    pub fn apply(&self, function: MathFunction) -> Result<Self> {
        check_function(self.kind, function)?;
        let data = self.data.map(move |x| function.apply(x));
        Ok(Self::instantiate_type(Arc::new(data), self.unit, self.kind))
    }

    impl_math_functions!(immutable);
}

pub(crate) fn check_function(kind: AbsRel, function: MathFunction) -> Result<()> {
    if kind.is_absolute() && !function.preserves_absolute() {
        debug!("rejecting {} on an absolute vector", function);
        return Err(QuantityError::InvalidOperation(format!(
            "{} is not defined for absolute quantities",
            function
        )));
    }
    Ok(())
}

impl<D: Dimension> Clone for Vector<D> {
    fn clone(&self) -> Self {
        Self::instantiate_type(Arc::clone(&self.data), self.unit, self.kind)
    }
}

impl<D: Dimension> PartialEq for Vector<D> {
    /// Equal when kind and every SI value match; display unit and storage mode do not take part.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && (Arc::ptr_eq(&self.data, &other.data) || self.data == other.data)
    }
}

impl<D: Dimension> Debug for Vector<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Vector")
            .field("kind", &self.kind)
            .field("unit", &self.unit.symbol())
            .field("data", &self.data)
            .finish()
    }
}

impl<D: Dimension> Display for Vector<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        fmt_vector(self, false, f)
    }
}

impl<'a, D: Dimension> IntoIterator for &'a Vector<D> {
    type Item = Scalar<D>;
    type IntoIter = crate::facade::ScalarIter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Meter};
    use crate::units::mass::Kilogram;
    use crate::units::temperature::{Celsius, Kelvin};
    use approx::assert_relative_eq;

    fn rel(values: &[f64], storage: StorageType) -> Vector<crate::units::length::Length> {
        Vector::relative(values, Meter, storage).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn absolute_requires_capable_unit() {
        let err = Vector::absolute(&[1.0], Kilogram, StorageType::Dense).unwrap_err();
        assert!(matches!(err, QuantityError::InvalidOperation(_)));
    }

    #[test]
    fn from_scalars_takes_unit_of_first() {
        let v = Vector::from_scalars(
            &[Scalar::relative(1.0, Kilometer), Scalar::relative(500.0, Meter)],
            StorageType::Dense,
        )
        .unwrap();
        assert_eq!(v.display_unit().symbol(), "km");
        assert_eq!(v.values_in_unit(), vec![1.0, 0.5]);
        assert_eq!(
            Vector::<crate::units::length::Length>::from_scalars(&[], StorageType::Dense),
            Err(QuantityError::EmptyInput)
        );
    }

    #[test]
    fn from_scalars_rejects_mixed_kinds() {
        let scalars = [
            Scalar::relative(1.0, Meter),
            Scalar::absolute(1.0, Meter).unwrap(),
        ];
        assert!(Vector::from_scalars(&scalars, StorageType::Dense).is_err());
    }

    #[test]
    fn from_optional_none() {
        let err = Vector::from_optional(None, Meter, AbsRel::Relative, StorageType::Dense)
            .unwrap_err();
        assert_eq!(err, QuantityError::NullInput("values"));
    }

    #[test]
    fn from_map_absolute_celsius_fills_offset() {
        let map = BTreeMap::from([(0, 10.0)]);
        let v = Vector::from_map(&map, 3, Celsius, AbsRel::Absolute, StorageType::Sparse).unwrap();
        assert_eq!(v.cardinality(), 3);
        assert_relative_eq!(v.get_si(2).unwrap(), 273.15, epsilon = 1e-9);
        assert_relative_eq!(v.get_in_unit(0).unwrap(), 10.0, epsilon = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Storage sharing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversions_share_storage_when_noop() {
        let d = rel(&[1.0, 0.0, 2.0], StorageType::Dense);
        assert!(d.to_dense().shares_storage_with(&d));
        let s = d.to_sparse();
        assert!(!s.shares_storage_with(&d));
        assert!(s.to_sparse().shares_storage_with(&s));
        assert_eq!(s, d);
    }

    #[test]
    fn with_display_unit_shares_storage() {
        let d = rel(&[1000.0, 2500.0], StorageType::Dense);
        let km = d.with_display_unit(Kilometer).unwrap();
        assert!(km.shares_storage_with(&d));
        assert_eq!(km.values_in_unit(), vec![1.0, 2.5]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn absolute_minus_absolute_is_relative() {
        let a = Vector::absolute(&[20.0, 30.0], Celsius, StorageType::Dense).unwrap();
        let b = Vector::absolute(&[10.0, 0.0], Celsius, StorageType::Dense).unwrap();
        let d = a.minus(&b).unwrap();
        assert_eq!(d.kind(), AbsRel::Relative);
        assert_eq!(d.display_unit().offset(), 0.0);
        let values = d.values_in_unit();
        assert_relative_eq!(values[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(values[1], 30.0, epsilon = 1e-9);
    }

    #[test]
    fn absolute_plus_relative_is_absolute() {
        let a = Vector::absolute(&[20.0], Celsius, StorageType::Dense).unwrap();
        let r = Vector::relative(&[5.0], Kelvin, StorageType::Dense).unwrap();
        let sum = a.plus(&r).unwrap();
        assert!(sum.is_absolute());
        assert_relative_eq!(sum.get_in_unit(0).unwrap(), 25.0, epsilon = 1e-9);
        assert!(matches!(
            a.plus(&a),
            Err(QuantityError::InvalidOperation(_))
        ));
        assert!(r.minus(&a).is_err());
    }

    #[test]
    fn scaling_absolute_is_invalid() {
        let a = Vector::absolute(&[1.0], Meter, StorageType::Dense).unwrap();
        assert!(a.multiply_by(2.0).is_err());
        assert!(a.divide_by(2.0).is_err());
        assert!(a.sqrt().is_err());
        assert!(a.round().is_ok());
    }

    #[test]
    fn sign_changes_on_absolute_are_rejected() {
        let t = Vector::absolute(&[20.0], Celsius, StorageType::Dense).unwrap();
        assert!(matches!(t.neg(), Err(QuantityError::InvalidOperation(_))));
        assert!(matches!(t.abs(), Err(QuantityError::InvalidOperation(_))));
        let r = Vector::relative(&[-20.0], Kelvin, StorageType::Dense).unwrap();
        assert_eq!(r.neg().unwrap().values_si(), vec![20.0]);
        assert_eq!(r.abs().unwrap().values_si(), vec![20.0]);
    }

    #[test]
    fn receiver_is_untouched() {
        let a = rel(&[1.0, 2.0], StorageType::Dense);
        let b = a.multiply_by(10.0).unwrap();
        assert_eq!(a.values_si(), vec![1.0, 2.0]);
        assert_eq!(b.values_si(), vec![10.0, 20.0]);
    }

    #[test]
    fn scalar_offsets() {
        let a = rel(&[1.0, 0.0], StorageType::Sparse);
        let shifted = a.plus_scalar(&Scalar::relative(1.0, Kilometer)).unwrap();
        assert_eq!(shifted.values_si(), vec![1001.0, 1000.0]);
        let back = shifted.minus_scalar(&Scalar::relative(1.0, Kilometer)).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn times_and_ratio() {
        let a = rel(&[2.0, 4.0], StorageType::Dense);
        let f = Vector::relative(&[0.5, 2.0], Unitless, StorageType::Dense).unwrap();
        assert_eq!(a.times(&f).unwrap().values_si(), vec![1.0, 8.0]);
        assert_eq!(a.divide(&f).unwrap().values_si(), vec![4.0, 2.0]);
        let r = a.ratio(&rel(&[1.0, 2.0], StorageType::Dense)).unwrap();
        assert_eq!(r.values_si(), vec![2.0, 2.0]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display and iteration
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_forms() {
        let v = rel(&[1.0, 0.0, 2.5], StorageType::Sparse);
        assert_eq!(v.to_string(), "[1 0 2.5] m");
        assert_eq!(format!("{:#}", v), "Immutable Rel Sparse [1 0 2.5] m");
    }

    #[test]
    fn iteration_yields_scalars() {
        let v = rel(&[1.0, 2.0], StorageType::Dense);
        let values: Vec<f64> = v.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1.0, 2.0]);
        assert_eq!((&v).into_iter().len(), 2);
    }
}
