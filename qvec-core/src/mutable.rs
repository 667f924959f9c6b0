//! Copy-on-write mutable vector quantities.

use crate::data::VectorData;
use crate::dimension::{Dimension, Dimensionless};
use crate::error::{QuantityError, Result};
use crate::facade::{fmt_vector, QuantityFactory, VectorQuantity};
use crate::functions::MathFunction;
use crate::kind::{AbsRel, StorageType};
use crate::scalar::Scalar;
use crate::unit::UnitDescriptor;
use crate::vector::{check_function, Vector};
use core::fmt::{Debug, Display, Formatter};
use log::{debug, trace};
use std::sync::Arc;

/// A mutable vector of quantities of dimension `D`.
///
/// The handle starts out sharing storage with the vector it was created from. The first in-place
/// operation while the storage is marked shared copies it privately; later operations write
/// through. [`MutableVector::immutable`] hands out a snapshot referencing the same storage and
/// marks it shared again, so the snapshot never observes later mutations.
///
/// ```rust
/// use qvec_core::units::time::Second;
/// use qvec_core::{StorageType, Vector, VectorQuantity};
///
/// let v = Vector::relative(&[1.0, 2.0], Second, StorageType::Dense).unwrap();
/// let mut m = v.mutable();
/// m.multiply_by(3.0).unwrap();
/// assert_eq!(m.values_si(), vec![3.0, 6.0]);
/// assert_eq!(v.values_si(), vec![1.0, 2.0]);
/// ```
pub struct MutableVector<D: Dimension> {
    data: Arc<VectorData>,
    shared: bool,
    unit: UnitDescriptor<D>,
    kind: AbsRel,
}

impl<D: Dimension> VectorQuantity<D> for MutableVector<D> {
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

impl<D: Dimension> MutableVector<D> {
    pub(crate) fn from_shared(data: Arc<VectorData>, unit: UnitDescriptor<D>, kind: AbsRel) -> Self {
        Self {
            data,
            shared: true,
            unit,
            kind,
        }
    }

    /// Whether the next mutation will copy the storage first.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// Storage for writing, detached from any other holder.
    fn storage_mut(&mut self) -> &mut VectorData {
        if self.shared {
            debug!(
                "copy-on-write: copying {} storage of {} elements",
                self.data.storage_type(),
                self.data.len()
            );
            self.data = Arc::new((*self.data).clone());
            self.shared = false;
        }
        Arc::make_mut(&mut self.data)
    }

    /// Applies `f` to every element. Shared storage is mapped into a fresh buffer in one pass
    /// instead of being copied first and then transformed.
    fn transform<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        if self.shared {
            debug!(
                "copy-on-write: mapping {} storage of {} elements",
                self.data.storage_type(),
                self.data.len()
            );
            self.data = Arc::new(self.data.map(f));
            self.shared = false;
        } else {
            Arc::make_mut(&mut self.data).assign(f);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots and copies
    // ─────────────────────────────────────────────────────────────────────────

    /// An immutable snapshot over the same storage. Marks the storage shared.
    pub fn immutable(&mut self) -> Vector<D> {
        self.shared = true;
        Vector::instantiate_type(Arc::clone(&self.data), self.unit, self.kind)
    }

    /// Another mutable handle over the same storage. Both handles copy before their next write.
    pub fn mutable(&mut self) -> MutableVector<D> {
        self.shared = true;
        Vector::<D>::instantiate_mutable_type(Arc::clone(&self.data), self.unit, self.kind)
    }

    /// An independent deep copy.
    pub fn copy(&self) -> MutableVector<D> {
        trace!("deep copy of mutable vector ({} elements)", self.data.len());
        Self {
            data: Arc::new((*self.data).clone()),
            shared: false,
            unit: self.unit,
            kind: self.kind,
        }
    }

    /// Returns `true` when both handles reference the same storage.
    pub fn shares_storage_with(&self, other: &Vector<D>) -> bool {
        Arc::ptr_eq(&self.data, other.shared_data())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Storage mode and display unit
    // ─────────────────────────────────────────────────────────────────────────

    /// Switches to dense storage.
    pub fn densify(&mut self) -> &mut Self {
        if !self.data.is_dense() {
            self.data = Arc::new(self.data.to_dense().into_owned());
            self.shared = false;
        }
        self
    }

    /// Switches to sparse storage.
    pub fn sparsify(&mut self) -> &mut Self {
        if self.data.is_dense() {
            self.data = Arc::new(self.data.to_sparse().into_owned());
            self.shared = false;
        }
        self
    }

    /// Switches to `storage`.
    pub fn set_storage_type(&mut self, storage: StorageType) -> &mut Self {
        match storage {
            StorageType::Dense => self.densify(),
            StorageType::Sparse => self.sparsify(),
        }
    }

    /// Changes the display unit. Values are unaffected.
    pub fn set_display_unit(&mut self, unit: impl Into<UnitDescriptor<D>>) -> Result<&mut Self> {
        self.unit = self.kind.display_unit(unit.into())?;
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Element writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Writes an SI value.
    pub fn set_si(&mut self, index: usize, si: f64) -> Result<&mut Self> {
        QuantityError::check_index(index, self.data.len())?;
        self.storage_mut().set(index, si)?;
        Ok(self)
    }

    /// Writes a scalar of the same kind.
    pub fn set(&mut self, index: usize, value: &Scalar<D>) -> Result<&mut Self> {
        if value.kind() != self.kind {
            return Err(QuantityError::InvalidOperation(format!(
                "cannot store a {:?} scalar in a {:?} vector",
                value.kind(),
                self.kind
            )));
        }
        self.set_si(index, value.si())
    }

    /// Writes a value expressed in the display unit.
    pub fn set_in_unit(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        let si = self.unit.to_si(value);
        self.set_si(index, si)
    }

    /// Writes a value expressed in `unit`.
    pub fn set_in(
        &mut self,
        index: usize,
        value: f64,
        unit: impl Into<UnitDescriptor<D>>,
    ) -> Result<&mut Self> {
        let unit = self.kind.display_unit(unit.into())?;
        self.set_si(index, unit.to_si(value))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    fn require_kind_kept(&self, result: AbsRel, op: &str) -> Result<()> {
        if result != self.kind {
            return Err(QuantityError::InvalidOperation(format!(
                "in-place {} would turn a {:?} vector into {:?}",
                op, self.kind, result
            )));
        }
        Ok(())
    }

    /// `self += other`, element-wise. Only `Rel += Rel` and `Abs += Rel` are allowed.
    pub fn increment_by(&mut self, other: &impl VectorQuantity<D>) -> Result<&mut Self> {
        let kind = self.kind.plus(other.kind())?;
        self.require_kind_kept(kind, "increment")?;
        QuantityError::check_lengths(self.data.len(), other.len())?;
        self.storage_mut().increment_by(other.data())?;
        Ok(self)
    }

    /// `self -= other`, element-wise. Only `Rel -= Rel` and `Abs -= Rel` are allowed.
    pub fn decrement_by(&mut self, other: &impl VectorQuantity<D>) -> Result<&mut Self> {
        let kind = self.kind.minus(other.kind())?;
        self.require_kind_kept(kind, "decrement")?;
        QuantityError::check_lengths(self.data.len(), other.len())?;
        self.storage_mut().decrement_by(other.data())?;
        Ok(self)
    }

    /// Adds `scalar` to every element.
    pub fn increment_by_scalar(&mut self, scalar: &Scalar<D>) -> Result<&mut Self> {
        let kind = self.kind.plus(scalar.kind())?;
        self.require_kind_kept(kind, "increment")?;
        let si = scalar.si();
        self.transform(move |x| x + si);
        Ok(self)
    }

    /// Subtracts `scalar` from every element.
    pub fn decrement_by_scalar(&mut self, scalar: &Scalar<D>) -> Result<&mut Self> {
        let kind = self.kind.minus(scalar.kind())?;
        self.require_kind_kept(kind, "decrement")?;
        let si = scalar.si();
        self.transform(move |x| x - si);
        Ok(self)
    }

    /// Adds an SI amount to every element.
    pub fn increment_by_si(&mut self, si: f64) -> &mut Self {
        self.transform(move |x| x + si);
        self
    }

    /// Multiplies every element by `factor`; relative only.
    pub fn multiply_by(&mut self, factor: f64) -> Result<&mut Self> {
        self.kind.require_relative("multiplication")?;
        self.transform(move |x| x * factor);
        Ok(self)
    }

    /// Divides every element by `factor`; relative only.
    pub fn divide_by(&mut self, factor: f64) -> Result<&mut Self> {
        self.kind.require_relative("division")?;
        if factor == 0.0 {
            return Err(QuantityError::DivideByZero("factor is zero".to_string()));
        }
        self.transform(move |x| x / factor);
        Ok(self)
    }

    /// Element-wise product with a dimensionless vector; relative only.
    pub fn multiply_by_vector(
        &mut self,
        factors: &impl VectorQuantity<Dimensionless>,
    ) -> Result<&mut Self> {
        self.kind.require_relative("multiplication")?;
        factors.kind().require_relative("multiplication")?;
        QuantityError::check_lengths(self.data.len(), factors.len())?;
        self.storage_mut().multiply_by(factors.data())?;
        Ok(self)
    }

    /// Element-wise quotient by a dimensionless vector; relative only.
    ///
    /// A zero divisor fails before the storage is touched, so a shared handle is not copied.
    pub fn divide_by_vector(
        &mut self,
        divisors: &impl VectorQuantity<Dimensionless>,
    ) -> Result<&mut Self> {
        self.kind.require_relative("division")?;
        divisors.kind().require_relative("division")?;
        QuantityError::check_lengths(self.data.len(), divisors.len())?;
        divisors.data().check_divisor()?;
        self.storage_mut().divide_by(divisors.data())?;
        Ok(self)
    }

    /// Scales the vector so that its elements sum to one; relative only.
    ///
    /// Fails with [`QuantityError::DivideByZero`] when the sum is zero.
    pub fn normalize(&mut self) -> Result<&mut Self> {
        self.kind.require_relative("normalize")?;
        let sum = self.data.z_sum();
        if sum == 0.0 {
            return Err(QuantityError::DivideByZero(
                "cannot normalize a vector whose sum is zero".to_string(),
            ));
        }
        self.transform(move |x| x / sum);
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Math functions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies `function` to every SI element in place.
    pub fn apply(&mut self, function: MathFunction) -> Result<&mut Self> {
        check_function(self.kind, function)?;
        self.transform(move |x| function.apply(x));
        Ok(self)
    }

    impl_math_functions!(mutable);
}

impl<D: Dimension> Debug for MutableVector<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MutableVector")
            .field("kind", &self.kind)
            .field("unit", &self.unit.symbol())
            .field("shared", &self.shared)
            .field("data", &self.data)
            .finish()
    }
}

impl<D: Dimension> Display for MutableVector<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        fmt_vector(self, true, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimensionless::Unitless;
    use crate::units::length::{Length, Meter};
    use crate::units::temperature::Celsius;
    use approx::assert_relative_eq;

    fn vector(values: &[f64], storage: StorageType) -> Vector<Length> {
        Vector::relative(values, Meter, storage).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Copy-on-write
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn creation_does_not_copy() {
        let v = vector(&[1.0, 2.0], StorageType::Dense);
        let m = v.mutable();
        assert!(m.is_shared());
        assert!(m.shares_storage_with(&v));
    }

    #[test]
    fn first_write_copies_then_writes_through() {
        let v = vector(&[1.0, 2.0], StorageType::Dense);
        let mut m = v.mutable();
        m.set_si(0, 5.0).unwrap();
        assert!(!m.is_shared());
        assert!(!m.shares_storage_with(&v));
        assert_eq!(v.values_si(), vec![1.0, 2.0]);

        let before = Arc::as_ptr(&m.data);
        m.set_si(1, 6.0).unwrap();
        assert_eq!(before, Arc::as_ptr(&m.data));
        assert_eq!(m.values_si(), vec![5.0, 6.0]);
    }

    #[test]
    fn immutable_snapshot_is_isolated_from_later_writes() {
        let mut m = vector(&[1.0, 2.0], StorageType::Sparse).mutable();
        m.increment_by_si(1.0);
        let snapshot = m.immutable();
        assert!(m.is_shared());
        assert!(m.shares_storage_with(&snapshot));
        m.multiply_by(10.0).unwrap();
        assert_eq!(snapshot.values_si(), vec![2.0, 3.0]);
        assert_eq!(m.values_si(), vec![20.0, 30.0]);
    }

    #[test]
    fn failed_divide_does_not_copy() {
        let v = vector(&[1.0, 2.0], StorageType::Dense);
        let mut m = v.mutable();
        let divisors = Vector::relative(&[1.0, 0.0], Unitless, StorageType::Dense).unwrap();
        assert!(m.divide_by_vector(&divisors).is_err());
        assert!(m.shares_storage_with(&v));

        let implicit_zero = Vector::relative(&[2.0, 0.0], Unitless, StorageType::Sparse).unwrap();
        assert!(matches!(
            m.divide_by_vector(&implicit_zero),
            Err(QuantityError::DivideByZero(_))
        ));
        let short = Vector::relative(&[2.0], Unitless, StorageType::Dense).unwrap();
        assert_eq!(
            m.divide_by_vector(&short).unwrap_err(),
            QuantityError::LengthMismatch { left: 2, right: 1 }
        );
        assert!(m.shares_storage_with(&v));

        let halves = Vector::relative(&[2.0, 4.0], Unitless, StorageType::Sparse).unwrap();
        m.divide_by_vector(&halves).unwrap();
        assert!(!m.shares_storage_with(&v));
        assert_eq!(m.values_si(), vec![0.5, 0.5]);
    }

    #[test]
    fn shared_transform_maps_into_fresh_storage() {
        let v = vector(&[0.0, 0.0, 2.0, 0.0], StorageType::Sparse);
        let mut m = v.mutable();
        m.cos().unwrap();
        assert!(!m.is_shared());
        assert!(!m.shares_storage_with(&v));
        assert_eq!(m.storage_type(), StorageType::Dense);
        assert_eq!(v.storage_type(), StorageType::Sparse);
        assert_eq!(v.values_si(), vec![0.0, 0.0, 2.0, 0.0]);
        let values = m.values_si();
        assert_relative_eq!(values[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(values[2], 2.0f64.cos(), epsilon = 1e-12);

        let before = Arc::as_ptr(&m.data);
        m.multiply_by(2.0).unwrap();
        assert_eq!(before, Arc::as_ptr(&m.data));
        assert_relative_eq!(m.values_si()[3], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn shared_sparse_scaling_stays_sparse() {
        let v = vector(&[0.0, 3.0, 0.0], StorageType::Sparse);
        let mut m = v.mutable();
        m.multiply_by(2.0).unwrap();
        assert!(!m.shares_storage_with(&v));
        assert_eq!(m.storage_type(), StorageType::Sparse);
        assert_eq!(m.cardinality(), 1);
        assert_eq!(m.values_si(), vec![0.0, 6.0, 0.0]);
        assert_eq!(v.values_si(), vec![0.0, 3.0, 0.0]);
    }

    #[test]
    fn copy_is_independent() {
        let mut m = vector(&[1.0], StorageType::Dense).mutable();
        let mut c = m.copy();
        c.set_si(0, 9.0).unwrap();
        assert_eq!(m.get_si(0).unwrap(), 1.0);
        m.set_si(0, 4.0).unwrap();
        assert_eq!(c.get_si(0).unwrap(), 9.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // In-place operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn increment_and_decrement_by_vector() {
        let mut m = vector(&[1.0, 0.0, 3.0], StorageType::Sparse).mutable();
        let other = vector(&[1.0, 1.0, 1.0], StorageType::Dense);
        m.increment_by(&other).unwrap();
        assert_eq!(m.values_si(), vec![2.0, 1.0, 4.0]);
        m.decrement_by(&other).unwrap().decrement_by(&other).unwrap();
        assert_eq!(m.values_si(), vec![0.0, -1.0, 2.0]);
        assert_eq!(m.storage_type(), StorageType::Sparse);
        assert_eq!(
            m.increment_by(&vector(&[1.0], StorageType::Dense)).unwrap_err(),
            QuantityError::LengthMismatch { left: 3, right: 1 }
        );
    }

    #[test]
    fn in_place_kind_changes_are_rejected() {
        let a = Vector::absolute(&[20.0], Celsius, StorageType::Dense).unwrap();
        let mut m = a.mutable();
        assert!(m.decrement_by(&a).is_err());
        assert!(m.multiply_by(2.0).is_err());
        assert!(m.normalize().is_err());
        assert!(m.cos().is_err());
        assert!(m.floor().is_ok());
    }

    #[test]
    fn sign_changes_on_absolute_are_rejected() {
        let a = Vector::absolute(&[20.0], Celsius, StorageType::Dense).unwrap();
        let mut m = a.mutable();
        assert!(matches!(m.neg(), Err(QuantityError::InvalidOperation(_))));
        assert!(matches!(m.abs(), Err(QuantityError::InvalidOperation(_))));
        assert!(m.is_shared());
        assert_eq!(m.values_si(), a.values_si());
    }

    #[test]
    fn normalize_divides_by_sum() {
        let mut m = vector(&[1.0, 3.0], StorageType::Dense).mutable();
        m.normalize().unwrap();
        assert_eq!(m.values_si(), vec![0.25, 0.75]);
        let mut zero = vector(&[1.0, -1.0], StorageType::Dense).mutable();
        assert!(matches!(
            zero.normalize(),
            Err(QuantityError::DivideByZero(_))
        ));
    }

    #[test]
    fn set_variants() {
        let mut m = vector(&[0.0, 0.0], StorageType::Sparse).mutable();
        m.set(0, &Scalar::relative(2.0, Meter)).unwrap();
        m.set_in(1, 1.5, crate::units::length::Kilometer).unwrap();
        assert_eq!(m.values_si(), vec![2.0, 1500.0]);
        m.set_display_unit(crate::units::length::Kilometer).unwrap();
        m.set_in_unit(0, 0.0).unwrap();
        assert_eq!(m.cardinality(), 1);
        assert!(m.set_si(2, 1.0).is_err());
    }

    #[test]
    fn math_functions_chain() {
        let mut m = vector(&[-4.0, 9.0], StorageType::Dense).mutable();
        m.abs().unwrap().sqrt().unwrap().pow(2.0).unwrap();
        let values = m.values_si();
        assert_relative_eq!(values[0], 4.0, epsilon = 1e-12);
        assert_relative_eq!(values[1], 9.0, epsilon = 1e-12);
    }

    #[test]
    fn storage_mode_switches() {
        let mut m = vector(&[1.0, 0.0], StorageType::Dense).mutable();
        m.sparsify();
        assert_eq!(m.storage_type(), StorageType::Sparse);
        m.set_storage_type(StorageType::Dense);
        assert_eq!(m.storage_type(), StorageType::Dense);
        assert_eq!(format!("{:#}", m), "Mutable Rel Dense [1 0] m");
    }
}
