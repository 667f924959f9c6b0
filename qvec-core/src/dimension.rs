//! Dimension types and traits.

/// Marker trait for **dimensions** (Length, Time, Temperature …).
///
/// A *dimension* is the category that distinguishes a metre from a second. Each dimension is
/// modelled as an empty enum; vectors and scalars carry it as a phantom type parameter so that
/// quantities of different dimensions cannot be mixed.
///
/// ```rust
/// use qvec_core::Dimension;
///
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {
///     const NAME: &'static str = "luminosity";
/// }
/// ```
pub trait Dimension: 'static {
    /// Stable lowercase name, used by unit registries to check compatibility.
    const NAME: &'static str;
}

/// Dimension for dimensionless quantities (ratios, factors).
pub enum Dimensionless {}
impl Dimension for Dimensionless {
    const NAME: &'static str = "dimensionless";
}
