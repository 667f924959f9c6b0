//! Sparse storage: sorted `(index, value)` pairs, zero elsewhere.

/// Sparse SI values.
///
/// # Invariants
///
/// - `indices` is strictly increasing and every index is `< len`.
/// - `indices.len() == values.len()`.
/// - No stored value compares equal to `0.0`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SparseData {
    indices: Vec<usize>,
    values: Vec<f64>,
    len: usize,
}

impl SparseData {
    /// An all-zero sparse vector of logical length `len`.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            len,
        }
    }

    /// Keeps the non-zero entries of `dense`, in ascending index order.
    ///
    /// `-0.0` compares equal to zero and is dropped, so it reads back as `+0.0`.
    pub fn from_dense(dense: &[f64]) -> Self {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        for (i, &v) in dense.iter().enumerate() {
            if v != 0.0 {
                indices.push(i);
                values.push(v);
            }
        }
        Self {
            indices,
            values,
            len: dense.len(),
        }
    }

    /// Builds sparse storage from pairs already in ascending index order.
    ///
    /// Zero values are skipped; callers guarantee ordering and bounds.
    pub(crate) fn from_sorted_pairs(len: usize, pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut out = Self::zeros(len);
        for (i, v) in pairs {
            debug_assert!(i < len);
            debug_assert!(out.indices.last().map_or(true, |&last| last < i));
            if v != 0.0 {
                out.indices.push(i);
                out.values.push(v);
            }
        }
        out
    }

    /// Logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the logical length is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Stored indices, ascending.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values, parallel to [`SparseData::indices`].
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over stored `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at `index` (zero when not stored), or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        Some(match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        })
    }

    /// Writes `value` at `index`. Zero removes the entry, anything else inserts in index order.
    ///
    /// Returns `false` past the end.
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        if index >= self.len {
            return false;
        }
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                if value == 0.0 {
                    self.indices.remove(pos);
                    self.values.remove(pos);
                } else {
                    self.values[pos] = value;
                }
            }
            Err(pos) => {
                if value != 0.0 {
                    self.indices.insert(pos, index);
                    self.values.insert(pos, value);
                }
            }
        }
        true
    }

    /// Scatters the stored pairs into a zero-filled dense array.
    pub fn to_dense_vec(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.len];
        for (i, v) in self.iter() {
            out[i] = v;
        }
        out
    }

    /// First index that is not stored (an implicit zero), if any.
    pub fn first_implicit_zero(&self) -> Option<usize> {
        if self.nnz() == self.len {
            return None;
        }
        self.indices
            .iter()
            .enumerate()
            .find(|&(pos, &i)| pos != i)
            .map(|(pos, _)| pos)
            .or(Some(self.nnz()))
    }

    /// Applies `f` to every stored value and drops the entries that become zero.
    ///
    /// Only valid when `f(0.0) == 0.0`; implicit zeros are left untouched.
    pub(crate) fn map_stored(&mut self, f: impl Fn(f64) -> f64) {
        let mut write = 0;
        for read in 0..self.indices.len() {
            let v = f(self.values[read]);
            if v != 0.0 {
                self.indices[write] = self.indices[read];
                self.values[write] = v;
                write += 1;
            }
        }
        self.indices.truncate(write);
        self.values.truncate(write);
    }

    /// Union merge of two sparse vectors of equal length, in O(nnz(a) + nnz(b)).
    ///
    /// `f` receives the logical value of both operands at each index present in either.
    pub(crate) fn merge(a: &SparseData, b: &SparseData, f: impl Fn(f64, f64) -> f64) -> SparseData {
        debug_assert_eq!(a.len, b.len);
        let mut out = SparseData::zeros(a.len);
        let (mut i, mut j) = (0, 0);
        while i < a.nnz() || j < b.nnz() {
            let ai = a.indices.get(i).copied().unwrap_or(usize::MAX);
            let bj = b.indices.get(j).copied().unwrap_or(usize::MAX);
            let (index, v) = if ai == bj {
                let r = (ai, f(a.values[i], b.values[j]));
                i += 1;
                j += 1;
                r
            } else if ai < bj {
                let r = (ai, f(a.values[i], 0.0));
                i += 1;
                r
            } else {
                let r = (bj, f(0.0, b.values[j]));
                j += 1;
                r
            };
            if v != 0.0 {
                out.indices.push(index);
                out.values.push(v);
            }
        }
        out
    }

    /// Number of stored entries, all of which are non-zero.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.nnz()
    }

    /// Sum of stored values.
    pub fn z_sum(&self) -> f64 {
        self.values.iter().sum()
    }
}
