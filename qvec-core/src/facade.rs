//! Factory extension points and the read-only vector quantity interface.
//!
//! Every vector result in this crate is assembled through [`QuantityFactory`]; nothing below the
//! facade names a concrete quantity type. [`VectorQuantity`] supplies the accessors shared by
//! immutable and mutable vectors on top of three required getters.

use crate::data::VectorData;
use crate::dimension::Dimension;
use crate::error::Result;
use crate::kind::{AbsRel, StorageType};
use crate::scalar::Scalar;
use crate::unit::UnitDescriptor;
use crate::vector::Vector;
use core::fmt::{self, Formatter};
use std::sync::Arc;

/// Construction hooks used by the arithmetic engine to re-wrap results.
pub trait QuantityFactory<D: Dimension>: Sized {
    /// Mutable counterpart produced by [`QuantityFactory::instantiate_mutable_type`].
    type Mutable;

    /// Wraps SI storage with a display unit that already matches `kind`.
    fn instantiate_type(data: Arc<VectorData>, unit: UnitDescriptor<D>, kind: AbsRel) -> Self;

    /// Wraps SI storage as a relative quantity in the relative counterpart of `unit`.
    ///
    /// Used for `Abs - Abs`.
    fn instantiate_type_rel(data: Arc<VectorData>, unit: UnitDescriptor<D>) -> Self {
        Self::instantiate_type(data, unit.relative(), AbsRel::Relative)
    }

    /// Builds the scalar returned by element access.
    fn instantiate_scalar(si: f64, unit: UnitDescriptor<D>, kind: AbsRel) -> Scalar<D> {
        Scalar::from_parts(si, unit, kind)
    }

    /// Wraps storage in a copy-on-write mutable handle. The storage is treated as shared.
    fn instantiate_mutable_type(
        data: Arc<VectorData>,
        unit: UnitDescriptor<D>,
        kind: AbsRel,
    ) -> Self::Mutable;
}

/// Read access common to immutable and mutable vectors.
pub trait VectorQuantity<D: Dimension> {
    /// SI storage.
    fn data(&self) -> &VectorData;

    /// Display unit.
    fn display_unit(&self) -> UnitDescriptor<D>;

    /// Absolute/relative tag.
    fn kind(&self) -> AbsRel;

    /// Number of elements.
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns `true` when there are no elements.
    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// Returns `true` for absolute quantities.
    fn is_absolute(&self) -> bool {
        self.kind().is_absolute()
    }

    /// Current storage mode.
    fn storage_type(&self) -> StorageType {
        self.data().storage_type()
    }

    /// Element `index` as a scalar in the display unit.
    fn get(&self, index: usize) -> Result<Scalar<D>> {
        let si = self.data().get(index)?;
        Ok(Vector::<D>::instantiate_scalar(si, self.display_unit(), self.kind()))
    }

    /// SI value of element `index`.
    fn get_si(&self, index: usize) -> Result<f64> {
        self.data().get(index)
    }

    /// Value of element `index` in the display unit.
    fn get_in_unit(&self, index: usize) -> Result<f64> {
        Ok(self.display_unit().from_si(self.data().get(index)?))
    }

    /// Value of element `index` in `unit`.
    fn get_in(&self, index: usize, unit: impl Into<UnitDescriptor<D>>) -> Result<f64>
    where
        Self: Sized,
    {
        let unit = convert_unit(self.kind(), unit.into());
        Ok(unit.from_si(self.data().get(index)?))
    }

    /// All SI values, dense.
    fn values_si(&self) -> Vec<f64> {
        self.data().dense_values_si()
    }

    /// All values in the display unit, dense.
    fn values_in_unit(&self) -> Vec<f64> {
        let unit = self.display_unit();
        self.values_si().into_iter().map(|v| unit.from_si(v)).collect()
    }

    /// All values in `unit`, dense.
    fn values_in(&self, unit: impl Into<UnitDescriptor<D>>) -> Vec<f64>
    where
        Self: Sized,
    {
        let unit = convert_unit(self.kind(), unit.into());
        self.values_si().into_iter().map(|v| unit.from_si(v)).collect()
    }

    /// Iterates over the elements as scalars.
    fn iter(&self) -> ScalarIter<'_, D> {
        ScalarIter {
            data: self.data(),
            unit: self.display_unit(),
            kind: self.kind(),
            index: 0,
        }
    }

    /// Sum of all elements, in SI.
    fn z_sum(&self) -> f64 {
        self.data().z_sum()
    }

    /// Number of non-zero elements.
    fn cardinality(&self) -> usize {
        self.data().cardinality()
    }
}

/// Relative quantities convert through the unit's relative counterpart.
fn convert_unit<D: Dimension>(kind: AbsRel, unit: UnitDescriptor<D>) -> UnitDescriptor<D> {
    match kind {
        AbsRel::Absolute => unit,
        AbsRel::Relative => unit.relative(),
    }
}

/// Iterator over the elements of a vector quantity.
pub struct ScalarIter<'a, D: Dimension> {
    data: &'a VectorData,
    unit: UnitDescriptor<D>,
    kind: AbsRel,
    index: usize,
}

impl<D: Dimension> Iterator for ScalarIter<'_, D> {
    type Item = Scalar<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let si = self.data.get(self.index).ok()?;
        self.index += 1;
        Some(Vector::<D>::instantiate_scalar(si, self.unit, self.kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<D: Dimension> ExactSizeIterator for ScalarIter<'_, D> {}

/// Shared `Display` body: `[v0 v1 …] sym`, prefixed with `Mutable|Immutable Abs|Rel Dense|Sparse`
/// under the alternate flag.
pub(crate) fn fmt_vector<D: Dimension>(
    q: &impl VectorQuantity<D>,
    mutable: bool,
    f: &mut Formatter<'_>,
) -> fmt::Result {
    if f.alternate() {
        let state = if mutable { "Mutable" } else { "Immutable" };
        write!(f, "{} {} {} ", state, q.kind(), q.storage_type())?;
    }
    f.write_str("[")?;
    for (i, v) in q.values_in_unit().iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", v)?;
    }
    f.write_str("]")?;
    let symbol = q.display_unit().symbol();
    if !symbol.is_empty() {
        write!(f, " {}", symbol)?;
    }
    Ok(())
}
