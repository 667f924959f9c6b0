//! Dense storage: one SI value per index.

/// Contiguous SI values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DenseData {
    values: Vec<f64>,
}

impl DenseData {
    /// Wraps SI values.
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// A dense vector of `len` zeros.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Overwrites the value at `index`. Returns `false` past the end.
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Borrow the SI values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the SI values.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Consumes the storage, returning the SI values.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Number of non-zero elements.
    pub fn cardinality(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }

    /// Sum of all elements.
    pub fn z_sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut d = DenseData::new(vec![1.0, 2.0]);
        assert_eq!(d.get(1), Some(2.0));
        assert_eq!(d.get(2), None);
        assert!(d.set(0, 5.0));
        assert!(!d.set(2, 5.0));
        assert_eq!(d.as_slice(), &[5.0, 2.0]);
    }

    #[test]
    fn reductions() {
        let d = DenseData::new(vec![1.0, 0.0, -3.0, 0.0, 4.5]);
        assert_eq!(d.cardinality(), 3);
        assert_eq!(d.z_sum(), 2.5);
        assert_eq!(DenseData::zeros(4).cardinality(), 0);
    }
}
