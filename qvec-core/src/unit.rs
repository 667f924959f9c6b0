//! Unit descriptors and the [`Unit`] trait.

use crate::dimension::Dimension;
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;

/// Runtime description of a unit within dimension `D`.
///
/// Raw values expressed in this unit convert to the canonical SI unit of the dimension with
///
/// ```text
/// si  = raw * scale + offset
/// raw = (si - offset) / scale
/// ```
///
/// The descriptor is a small `Copy` value; vectors keep one as their display unit and only consult
/// it at construction (raw → SI) and retrieval (SI → display).
///
/// # Invariants
///
/// - `scale` should be finite and non-zero.
/// - A non-zero `offset` only makes sense for absolute-capable units (°C, °F).
pub struct UnitDescriptor<D: Dimension> {
    name: &'static str,
    symbol: &'static str,
    scale: f64,
    offset: f64,
    absolute: bool,
    _dim: PhantomData<fn() -> D>,
}

impl<D: Dimension> UnitDescriptor<D> {
    /// Creates a descriptor.
    ///
    /// ```rust
    /// use qvec_core::{Dimensionless, UnitDescriptor};
    ///
    /// const PERCENT: UnitDescriptor<Dimensionless> =
    ///     UnitDescriptor::new("percent", "%", 0.01, 0.0, false);
    /// assert_eq!(PERCENT.to_si(50.0), 0.5);
    /// ```
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        scale: f64,
        offset: f64,
        absolute: bool,
    ) -> Self {
        Self {
            name,
            symbol,
            scale,
            offset,
            absolute,
            _dim: PhantomData,
        }
    }

    /// Human-readable name, e.g. `"kilometer"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Printable symbol, e.g. `"km"`.
    #[inline]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Multiplicative factor to SI.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Additive offset to SI (applied after scaling).
    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether absolute quantities may be expressed in this unit.
    #[inline]
    pub const fn is_absolute_capable(&self) -> bool {
        self.absolute
    }

    /// Whether a raw value in this unit already is its SI value.
    #[inline]
    pub fn is_si(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Converts a raw value in this unit to SI.
    #[inline]
    pub fn to_si(&self, raw: f64) -> f64 {
        raw * self.scale + self.offset
    }

    /// Converts an SI value to this unit.
    #[inline]
    pub fn from_si(&self, si: f64) -> f64 {
        (si - self.offset) / self.scale
    }

    /// The relative counterpart of this unit: same scale, no offset, not absolute-capable.
    ///
    /// A difference of two absolute temperatures in °C is a temperature *interval* in °C, which
    /// converts to kelvin without the 273.15 offset.
    pub const fn relative(&self) -> Self {
        Self::new(self.name, self.symbol, self.scale, 0.0, false)
    }
}

impl<D: Dimension> Clone for UnitDescriptor<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for UnitDescriptor<D> {}

impl<D: Dimension> PartialEq for UnitDescriptor<D> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.scale == other.scale
            && self.offset == other.offset
            && self.absolute == other.absolute
    }
}

impl<D: Dimension> Debug for UnitDescriptor<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnitDescriptor")
            .field("dimension", &D::NAME)
            .field("name", &self.name)
            .field("symbol", &self.symbol)
            .field("scale", &self.scale)
            .field("offset", &self.offset)
            .field("absolute", &self.absolute)
            .finish()
    }
}

/// Trait implemented by every **unit** marker type.
///
/// Unit markers are zero-sized structs declared with `#[derive(Unit)]`; the derive also provides
/// `From<Marker> for UnitDescriptor<Dim>`, so a marker value can be passed wherever a descriptor
/// is expected.
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
/// * `DESCRIPTOR` carries name, symbol, scale, offset and absolute capability.
pub trait Unit: Copy + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Runtime descriptor of this unit.
    const DESCRIPTOR: UnitDescriptor<Self::Dim>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    enum TestDim {}
    impl Dimension for TestDim {
        const NAME: &'static str = "test";
    }

    const BASE: UnitDescriptor<TestDim> = UnitDescriptor::new("base", "b", 1.0, 0.0, true);
    const KILO: UnitDescriptor<TestDim> = UnitDescriptor::new("kilobase", "kb", 1000.0, 0.0, true);
    const SHIFTED: UnitDescriptor<TestDim> = UnitDescriptor::new("shifted", "sb", 2.0, 10.0, true);

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_si_applies_scale_then_offset() {
        assert_eq!(BASE.to_si(3.0), 3.0);
        assert_eq!(KILO.to_si(1.5), 1500.0);
        assert_eq!(SHIFTED.to_si(5.0), 20.0);
    }

    #[test]
    fn from_si_inverts_to_si() {
        for raw in [-3.5, 0.0, 1.0, 42.25] {
            assert_relative_eq!(SHIFTED.from_si(SHIFTED.to_si(raw)), raw, epsilon = 1e-12);
            assert_relative_eq!(KILO.from_si(KILO.to_si(raw)), raw, epsilon = 1e-12);
        }
    }

    #[test]
    fn is_si_only_for_identity_units() {
        assert!(BASE.is_si());
        assert!(!KILO.is_si());
        assert!(!SHIFTED.is_si());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Relative counterpart
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn relative_strips_offset_and_absolute_flag() {
        let rel = SHIFTED.relative();
        assert_eq!(rel.symbol(), "sb");
        assert_eq!(rel.scale(), 2.0);
        assert_eq!(rel.offset(), 0.0);
        assert!(!rel.is_absolute_capable());
        assert_eq!(rel.to_si(5.0), 10.0);
    }

    #[test]
    fn equality_ignores_name() {
        let renamed = UnitDescriptor::<TestDim>::new("other", "b", 1.0, 0.0, true);
        assert_eq!(BASE, renamed);
        assert_ne!(BASE, BASE.relative());
    }

    #[test]
    fn debug_includes_dimension() {
        let s = format!("{:?}", KILO);
        assert!(s.contains("test"));
        assert!(s.contains("kb"));
    }
}
