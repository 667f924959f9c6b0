//! SI-valued vector storage with interchangeable dense and sparse representations.
//!
//! [`VectorData`] is the engine underneath every vector quantity. It never knows about display
//! units beyond the conversion performed at construction; all arithmetic happens on SI values.
//!
//! # Result storage modes
//!
//! | operation        | result is sparse when            |
//! |------------------|----------------------------------|
//! | `plus`, `minus`  | both operands are sparse         |
//! | `times`          | at least one operand is sparse   |
//! | `divide`         | the numerator is sparse          |
//! | unary transforms | input is sparse and `f(0) == 0`  |
//!
//! In-place variants keep the receiver's storage mode.

mod dense;
mod sparse;

pub use dense::DenseData;
pub use sparse::SparseData;

use crate::error::{QuantityError, Result};
use crate::kind::StorageType;
use crate::unit::UnitDescriptor;
use crate::Dimension;
use log::{debug, trace};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Minimum element count before dense kernels are split across threads.
///
/// Only used with the `parallel` feature.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// SI values under one of two storage modes.
#[derive(Clone, Debug)]
pub enum VectorData {
    /// Every element stored.
    Dense(DenseData),
    /// Only non-zero elements stored.
    Sparse(SparseData),
}

#[derive(Clone, Copy, Debug)]
enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
}

impl BinaryOp {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Plus => a + b,
            BinaryOp::Minus => a - b,
            BinaryOp::Times => a * b,
            BinaryOp::Divide => a / b,
        }
    }

    fn result_storage(self, left: StorageType, right: StorageType) -> StorageType {
        use StorageType::*;
        match (self, left, right) {
            (BinaryOp::Plus | BinaryOp::Minus, Sparse, Sparse) => Sparse,
            (BinaryOp::Plus | BinaryOp::Minus, _, _) => Dense,
            (BinaryOp::Times, Dense, Dense) => Dense,
            (BinaryOp::Times, _, _) => Sparse,
            (BinaryOp::Divide, left, _) => left,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dense kernels (optionally data-parallel)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "parallel")]
fn zip_map<F>(a: &[f64], b: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    if a.len() >= PARALLEL_THRESHOLD {
        a.par_iter().zip(b.par_iter()).map(|(&x, &y)| f(x, y)).collect()
    } else {
        a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn zip_map<F>(a: &[f64], b: &[f64], f: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

#[cfg(feature = "parallel")]
fn zip_assign<F>(a: &mut [f64], b: &[f64], f: F)
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    if a.len() >= PARALLEL_THRESHOLD {
        a.par_iter_mut().zip(b.par_iter()).for_each(|(x, &y)| *x = f(*x, y));
    } else {
        a.iter_mut().zip(b).for_each(|(x, &y)| *x = f(*x, y));
    }
}

#[cfg(not(feature = "parallel"))]
fn zip_assign<F>(a: &mut [f64], b: &[f64], f: F)
where
    F: Fn(f64, f64) -> f64 + Sync + Send,
{
    a.iter_mut().zip(b).for_each(|(x, &y)| *x = f(*x, y));
}

#[cfg(feature = "parallel")]
fn map_assign<F>(a: &mut [f64], f: F)
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    use rayon::prelude::*;
    if a.len() >= PARALLEL_THRESHOLD {
        a.par_iter_mut().for_each(|x| *x = f(*x));
    } else {
        a.iter_mut().for_each(|x| *x = f(*x));
    }
}

#[cfg(not(feature = "parallel"))]
fn map_assign<F>(a: &mut [f64], f: F)
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    a.iter_mut().for_each(|x| *x = f(*x));
}

impl VectorData {
    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Converts raw values expressed in `unit` to SI and stores them as `storage`.
    ///
    /// Fails with [`QuantityError::EmptyInput`] for an empty slice.
    pub fn instantiate<D: Dimension>(
        values: &[f64],
        unit: &UnitDescriptor<D>,
        storage: StorageType,
    ) -> Result<Self> {
        if values.is_empty() {
            return Err(QuantityError::EmptyInput);
        }
        let si: Vec<f64> = if unit.is_si() {
            values.to_vec()
        } else {
            values.iter().map(|&v| unit.to_si(v)).collect()
        };
        Self::from_si(si, storage)
    }

    /// Like [`VectorData::instantiate`], but for a source that may be absent.
    ///
    /// `None` fails with [`QuantityError::NullInput`].
    pub fn try_instantiate<D: Dimension>(
        values: Option<&[f64]>,
        unit: &UnitDescriptor<D>,
        storage: StorageType,
    ) -> Result<Self> {
        let values = values.ok_or(QuantityError::NullInput("values"))?;
        Self::instantiate(values, unit, storage)
    }

    /// Stores values that are already SI.
    pub fn from_si(si: Vec<f64>, storage: StorageType) -> Result<Self> {
        if si.is_empty() {
            return Err(QuantityError::EmptyInput);
        }
        Ok(match storage {
            StorageType::Dense => VectorData::Dense(DenseData::new(si)),
            StorageType::Sparse => VectorData::Sparse(SparseData::from_dense(&si)),
        })
    }

    /// Builds a vector of length `len` from an index → raw value map.
    ///
    /// Indices missing from the map hold the raw value `0` in `unit`, i.e. the unit's offset in SI.
    /// Keys outside `[0, len)` fail with [`QuantityError::IndexOutOfBounds`].
    pub fn instantiate_map<D: Dimension>(
        values: &BTreeMap<usize, f64>,
        len: usize,
        unit: &UnitDescriptor<D>,
        storage: StorageType,
    ) -> Result<Self> {
        if len == 0 {
            return Err(QuantityError::EmptyInput);
        }
        if let Some((&index, _)) = values.iter().next_back() {
            QuantityError::check_index(index, len)?;
        }
        let fill = unit.to_si(0.0);
        if fill == 0.0 && storage == StorageType::Sparse {
            let pairs = values.iter().map(|(&i, &v)| (i, unit.to_si(v)));
            return Ok(VectorData::Sparse(SparseData::from_sorted_pairs(len, pairs)));
        }
        let mut si = vec![fill; len];
        for (&i, &v) in values {
            si[i] = unit.to_si(v);
        }
        Self::from_si(si, storage)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inspection and element access
    // ─────────────────────────────────────────────────────────────────────────

    /// Logical number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            VectorData::Dense(d) => d.len(),
            VectorData::Sparse(s) => s.len(),
        }
    }

    /// Returns `true` when there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current storage mode.
    #[inline]
    pub fn storage_type(&self) -> StorageType {
        match self {
            VectorData::Dense(_) => StorageType::Dense,
            VectorData::Sparse(_) => StorageType::Sparse,
        }
    }

    /// Returns `true` for dense storage.
    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self, VectorData::Dense(_))
    }

    /// SI value at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        let value = match self {
            VectorData::Dense(d) => d.get(index),
            VectorData::Sparse(s) => s.get(index),
        };
        value.ok_or(QuantityError::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Writes an SI value at `index`. On sparse storage zero removes the entry.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.len();
        let written = match self {
            VectorData::Dense(d) => d.set(index, value),
            VectorData::Sparse(s) => s.set(index, value),
        };
        if written {
            Ok(())
        } else {
            Err(QuantityError::IndexOutOfBounds { index, len })
        }
    }

    /// All SI values as a dense array.
    pub fn dense_values_si(&self) -> Vec<f64> {
        match self {
            VectorData::Dense(d) => d.as_slice().to_vec(),
            VectorData::Sparse(s) => s.to_dense_vec(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Storage conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Dense view: borrowed when already dense, otherwise a new zero-filled array with the
    /// stored pairs scattered into it.
    pub fn to_dense(&self) -> Cow<'_, VectorData> {
        match self {
            VectorData::Dense(_) => Cow::Borrowed(self),
            VectorData::Sparse(s) => {
                trace!("densifying sparse vector (len {}, nnz {})", s.len(), s.nnz());
                Cow::Owned(VectorData::Dense(DenseData::new(s.to_dense_vec())))
            }
        }
    }

    /// Sparse view: borrowed when already sparse, otherwise the non-zero entries in order.
    pub fn to_sparse(&self) -> Cow<'_, VectorData> {
        match self {
            VectorData::Sparse(_) => Cow::Borrowed(self),
            VectorData::Dense(d) => {
                trace!("sparsifying dense vector (len {})", d.len());
                Cow::Owned(VectorData::Sparse(SparseData::from_dense(d.as_slice())))
            }
        }
    }

    /// Owned conversion to dense storage.
    pub fn into_dense(self) -> VectorData {
        match self {
            VectorData::Sparse(s) => VectorData::Dense(DenseData::new(s.to_dense_vec())),
            dense => dense,
        }
    }

    /// Owned conversion to sparse storage.
    pub fn into_sparse(self) -> VectorData {
        match self {
            VectorData::Dense(d) => VectorData::Sparse(SparseData::from_dense(d.as_slice())),
            sparse => sparse,
        }
    }

    /// Owned conversion to `storage`.
    pub fn into_storage(self, storage: StorageType) -> VectorData {
        match storage {
            StorageType::Dense => self.into_dense(),
            StorageType::Sparse => self.into_sparse(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reductions
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of non-zero elements.
    pub fn cardinality(&self) -> usize {
        match self {
            VectorData::Dense(d) => d.cardinality(),
            VectorData::Sparse(s) => s.cardinality(),
        }
    }

    /// Sum of all elements.
    pub fn z_sum(&self) -> f64 {
        match self {
            VectorData::Dense(d) => d.z_sum(),
            VectorData::Sparse(s) => s.z_sum(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Element-wise binary operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Element-wise sum.
    pub fn plus(&self, other: &VectorData) -> Result<VectorData> {
        self.binary(other, BinaryOp::Plus)
    }

    /// Element-wise difference.
    pub fn minus(&self, other: &VectorData) -> Result<VectorData> {
        self.binary(other, BinaryOp::Minus)
    }

    /// Element-wise product.
    pub fn times(&self, other: &VectorData) -> Result<VectorData> {
        self.binary(other, BinaryOp::Times)
    }

    /// Element-wise quotient. Any zero in `other`, stored or implicit, fails with
    /// [`QuantityError::DivideByZero`].
    pub fn divide(&self, other: &VectorData) -> Result<VectorData> {
        self.binary(other, BinaryOp::Divide)
    }

    /// Fails with [`QuantityError::DivideByZero`] at the first zero element, stored or implicit.
    pub(crate) fn check_divisor(&self) -> Result<()> {
        let zero_at = match self {
            VectorData::Dense(d) => d.as_slice().iter().position(|&v| v == 0.0),
            VectorData::Sparse(s) => s.first_implicit_zero(),
        };
        match zero_at {
            Some(index) => {
                debug!("rejecting divide: divisor is zero at index {}", index);
                Err(QuantityError::DivideByZero(format!(
                    "divisor is zero at index {}",
                    index
                )))
            }
            None => Ok(()),
        }
    }

    fn binary(&self, other: &VectorData, op: BinaryOp) -> Result<VectorData> {
        QuantityError::check_lengths(self.len(), other.len())?;
        if let BinaryOp::Divide = op {
            other.check_divisor()?;
        }
        let storage = op.result_storage(self.storage_type(), other.storage_type());
        if let (BinaryOp::Plus | BinaryOp::Minus, VectorData::Sparse(a), VectorData::Sparse(b)) =
            (op, self, other)
        {
            return Ok(VectorData::Sparse(SparseData::merge(a, b, |x, y| op.apply(x, y))));
        }
        let left = self.si_slice();
        let right = other.si_slice();
        let values = zip_map(&left, &right, move |x, y| op.apply(x, y));
        let result = VectorData::Dense(DenseData::new(values));
        Ok(result.into_storage(storage))
    }

    /// All SI values, borrowed when dense.
    fn si_slice(&self) -> Cow<'_, [f64]> {
        match self {
            VectorData::Dense(d) => Cow::Borrowed(d.as_slice()),
            VectorData::Sparse(s) => Cow::Owned(s.to_dense_vec()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place binary operations (storage mode of the receiver is kept)
    // ─────────────────────────────────────────────────────────────────────────

    /// `self += other`, element-wise.
    pub fn increment_by(&mut self, other: &VectorData) -> Result<()> {
        self.binary_assign(other, BinaryOp::Plus)
    }

    /// `self -= other`, element-wise.
    pub fn decrement_by(&mut self, other: &VectorData) -> Result<()> {
        self.binary_assign(other, BinaryOp::Minus)
    }

    /// `self *= other`, element-wise.
    pub fn multiply_by(&mut self, other: &VectorData) -> Result<()> {
        self.binary_assign(other, BinaryOp::Times)
    }

    /// `self /= other`, element-wise; zero divisors fail before anything is written.
    pub fn divide_by(&mut self, other: &VectorData) -> Result<()> {
        self.binary_assign(other, BinaryOp::Divide)
    }

    fn binary_assign(&mut self, other: &VectorData, op: BinaryOp) -> Result<()> {
        QuantityError::check_lengths(self.len(), other.len())?;
        if let BinaryOp::Divide = op {
            other.check_divisor()?;
        }
        match self {
            VectorData::Dense(d) => {
                let right = other.si_slice();
                zip_assign(d.as_mut_slice(), &right, move |x, y| op.apply(x, y));
            }
            VectorData::Sparse(_) => {
                let result = self.binary(other, op)?;
                *self = result.into_sparse();
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Unary transforms
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies `f` to every logical element in place.
    ///
    /// Sparse storage stays sparse when `f(0.0) == 0.0`; otherwise it is densified first, since
    /// every implicit zero now maps to a non-zero value.
    pub fn assign<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            VectorData::Dense(d) => map_assign(d.as_mut_slice(), f),
            VectorData::Sparse(s) => {
                if f(0.0) == 0.0 {
                    s.map_stored(f);
                } else {
                    debug!(
                        "transform maps 0 to non-zero; densifying sparse vector (len {})",
                        s.len()
                    );
                    let mut values = s.to_dense_vec();
                    map_assign(&mut values, f);
                    *self = VectorData::Dense(DenseData::new(values));
                }
            }
        }
    }

    /// Applies `f` to every logical element, returning new storage.
    ///
    /// Sparse input that densifies is expanded straight into the result.
    pub fn map<F>(&self, f: F) -> VectorData
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            VectorData::Sparse(s) if f(0.0) != 0.0 => {
                debug!(
                    "transform maps 0 to non-zero; densifying sparse vector (len {})",
                    s.len()
                );
                let mut values = s.to_dense_vec();
                map_assign(&mut values, f);
                VectorData::Dense(DenseData::new(values))
            }
            _ => {
                let mut out = self.clone();
                out.assign(f);
                out
            }
        }
    }

    /// Adds an SI constant to every element.
    pub fn increment_by_si(&mut self, value: f64) {
        self.assign(move |x| x + value);
    }

    /// Multiplies every element by `factor`.
    pub fn multiply_by_factor(&mut self, factor: f64) {
        self.assign(move |x| x * factor);
    }

    /// Divides every element by `factor`; zero fails with [`QuantityError::DivideByZero`].
    pub fn divide_by_factor(&mut self, factor: f64) -> Result<()> {
        if factor == 0.0 {
            return Err(QuantityError::DivideByZero("factor is zero".to_string()));
        }
        self.assign(move |x| x / factor);
        Ok(())
    }
}

impl PartialEq for VectorData {
    /// Logical equality: same length and same value at every index, regardless of storage mode.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match (self, other) {
            (VectorData::Dense(a), VectorData::Dense(b)) => a == b,
            (VectorData::Sparse(a), VectorData::Sparse(b)) => a == b,
            _ => self.dense_values_si() == other.dense_values_si(),
        }
    }
}
