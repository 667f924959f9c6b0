//! Unit registry and conversion by symbol.
//!
//! This module maps every built-in unit symbol (`"km"`, `"°F"`, `"g0"`, …) to its metadata and implements conversion
//! between compatible units at runtime, for callers that only know units by name.
//!
//! # Conversion Formula
//!
//! Every dimension has one SI unit. Absolute readings convert through it with offsets applied:
//!
//! ```text
//! v_si  = v_src * src.scale + src.offset
//! v_dst = (v_si - dst.offset) / dst.scale
//! ```
//!
//! Intervals (relative values) use the same formula with both offsets taken as zero.

use log::debug;
use once_cell::sync::Lazy;
use qvec_core::{units, Dimension, UnitDescriptor};
use std::collections::HashMap;

/// Errors returned by registry lookups and conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No built-in unit has this symbol.
    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),

    /// The two units belong to different dimensions.
    #[error("Incompatible dimensions: {src} ({src_dim}) vs {dst} ({dst_dim})")]
    IncompatibleDimension {
        /// Source unit symbol.
        src: String,
        /// Source dimension name.
        src_dim: &'static str,
        /// Destination unit symbol (or the requested dimension for typed lookups).
        dst: String,
        /// Destination dimension name.
        dst_dim: &'static str,
    },
}

/// Dimension-erased metadata about a built-in unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitInfo {
    /// Human-readable name.
    pub name: &'static str,
    /// Printable symbol, unique across the registry.
    pub symbol: &'static str,
    /// Name of the dimension ([`Dimension::NAME`]).
    pub dimension: &'static str,
    /// Multiplicative factor to SI.
    pub scale: f64,
    /// Additive offset to SI.
    pub offset: f64,
    /// Whether absolute quantities may use this unit.
    pub absolute: bool,
}

impl UnitInfo {
    /// Erases the dimension of a typed descriptor.
    pub fn of<D: Dimension>(unit: &UnitDescriptor<D>) -> Self {
        Self {
            name: unit.name(),
            symbol: unit.symbol(),
            dimension: D::NAME,
            scale: unit.scale(),
            offset: unit.offset(),
            absolute: unit.is_absolute_capable(),
        }
    }

    /// Rebuilds the typed descriptor. Callers check the dimension first.
    fn typed<D: Dimension>(&self) -> UnitDescriptor<D> {
        UnitDescriptor::new(self.name, self.symbol, self.scale, self.offset, self.absolute)
    }
}

static REGISTRY: Lazy<HashMap<&'static str, UnitInfo>> = Lazy::new(|| {
    fn register<D: Dimension>(map: &mut HashMap<&'static str, UnitInfo>, table: &[UnitDescriptor<D>]) {
        for unit in table {
            map.insert(unit.symbol(), UnitInfo::of(unit));
        }
    }

    let mut map = HashMap::new();
    register(&mut map, units::length::UNITS);
    register(&mut map, units::time::UNITS);
    register(&mut map, units::temperature::UNITS);
    register(&mut map, units::angle::UNITS);
    register(&mut map, units::mass::UNITS);
    register(&mut map, units::acceleration::UNITS);
    register(&mut map, units::money::UNITS);
    register(&mut map, units::dimensionless::UNITS);
    debug!("unit registry initialised with {} units", map.len());
    map
});

// =============================================================================
// Registry Functions
// =============================================================================

/// Returns metadata for the unit with the given symbol.
pub fn lookup(symbol: &str) -> Result<UnitInfo, RegistryError> {
    REGISTRY
        .get(symbol)
        .copied()
        .ok_or_else(|| RegistryError::UnknownUnit(symbol.to_string()))
}

/// Returns the dimension name for the given symbol, or `None` if the symbol is not recognized.
#[inline]
pub fn dimension(symbol: &str) -> Option<&'static str> {
    REGISTRY.get(symbol).map(|u| u.dimension)
}

/// Checks if two units are compatible (same dimension).
///
/// Returns `false` if either unit is not recognized.
pub fn compatible(a: &str, b: &str) -> bool {
    match (dimension(a), dimension(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}

fn pair(src: &str, dst: &str) -> Result<(UnitInfo, UnitInfo), RegistryError> {
    let src_info = lookup(src)?;
    let dst_info = lookup(dst)?;
    if src_info.dimension != dst_info.dimension {
        return Err(RegistryError::IncompatibleDimension {
            src: src.to_string(),
            src_dim: src_info.dimension,
            dst: dst.to_string(),
            dst_dim: dst_info.dimension,
        });
    }
    Ok((src_info, dst_info))
}

/// Converts an absolute reading from one unit to another, offsets included.
///
/// ```rust
/// use qvec::registry;
///
/// let f = registry::convert_value(100.0, "°C", "°F").unwrap();
/// assert!((f - 212.0).abs() < 1e-9);
/// ```
pub fn convert_value(v: f64, src: &str, dst: &str) -> Result<f64, RegistryError> {
    let (src, dst) = pair(src, dst)?;
    if src == dst {
        return Ok(v);
    }
    Ok((v * src.scale + src.offset - dst.offset) / dst.scale)
}

/// Converts an interval (a relative value) from one unit to another; offsets are ignored.
///
/// ```rust
/// use qvec::registry;
///
/// let f = registry::convert_interval(10.0, "°C", "°F").unwrap();
/// assert!((f - 18.0).abs() < 1e-9);
/// ```
pub fn convert_interval(v: f64, src: &str, dst: &str) -> Result<f64, RegistryError> {
    let (src, dst) = pair(src, dst)?;
    Ok(v * (src.scale / dst.scale))
}

/// Returns the typed descriptor for `symbol`, checking that it belongs to dimension `D`.
///
/// ```rust
/// use qvec::registry;
/// use qvec::length::Length;
///
/// let km = registry::descriptor::<Length>("km").unwrap();
/// assert_eq!(km.scale(), 1000.0);
/// assert!(registry::descriptor::<Length>("s").is_err());
/// ```
pub fn descriptor<D: Dimension>(symbol: &str) -> Result<UnitDescriptor<D>, RegistryError> {
    let info = lookup(symbol)?;
    if info.dimension != D::NAME {
        return Err(RegistryError::IncompatibleDimension {
            src: symbol.to_string(),
            src_dim: info.dimension,
            dst: D::NAME.to_string(),
            dst_dim: D::NAME,
        });
    }
    Ok(info.typed())
}

/// All units of the named dimension, ordered by scale.
pub fn units_of(dimension: &str) -> Vec<UnitInfo> {
    let mut out: Vec<UnitInfo> = REGISTRY
        .values()
        .filter(|u| u.dimension == dimension)
        .copied()
        .collect();
    out.sort_by(|a, b| a.scale.total_cmp(&b.scale).then_with(|| a.symbol.cmp(b.symbol)));
    out
}

/// Number of registered units.
pub fn len() -> usize {
    REGISTRY.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;
    use qvec_core::length::Length;
    use qvec_core::temperature::Temperature;

    #[test]
    fn test_lookup_returns_correct_dimensions() {
        assert_eq!(lookup("m").unwrap().dimension, "length");
        assert_eq!(lookup("km").unwrap().dimension, "length");
        assert_eq!(lookup("s").unwrap().dimension, "time");
        assert_eq!(lookup("h").unwrap().dimension, "time");
        assert_eq!(lookup("°C").unwrap().dimension, "temperature");
        assert_eq!(lookup("rad").unwrap().dimension, "angle");
        assert_eq!(lookup("g0").unwrap().dimension, "acceleration");
        assert_eq!(lookup("EUR").unwrap().dimension, "money");
        assert_eq!(lookup("%").unwrap().dimension, "dimensionless");
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            lookup("furlong"),
            Err(RegistryError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_compatible() {
        assert!(compatible("m", "km"));
        assert!(compatible("s", "h"));
        assert!(compatible("K", "°F"));
        assert!(!compatible("m", "s"));
        assert!(!compatible("m", "furlong"));
    }

    #[test]
    fn test_convert_meters_to_kilometers() {
        let result = convert_value(1000.0, "m", "km").unwrap();
        assert_relative_eq!(result, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_hours_to_seconds() {
        let result = convert_value(1.0, "h", "s").unwrap();
        assert_relative_eq!(result, 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_degrees_to_radians() {
        let result = convert_value(180.0, "°", "rad").unwrap();
        assert_relative_eq!(result, PI, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_temperature_readings_and_intervals() {
        assert_relative_eq!(convert_value(0.0, "°C", "K").unwrap(), 273.15, epsilon = 1e-12);
        assert_relative_eq!(convert_value(-40.0, "°C", "°F").unwrap(), -40.0, epsilon = 1e-9);
        assert_relative_eq!(convert_interval(1.0, "K", "°F").unwrap(), 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_incompatible_dimensions() {
        let err = convert_value(1.0, "m", "s").unwrap_err();
        assert_eq!(
            err,
            RegistryError::IncompatibleDimension {
                src: "m".to_string(),
                src_dim: "length",
                dst: "s".to_string(),
                dst_dim: "time",
            }
        );
    }

    #[test]
    fn test_convert_preserves_special_values() {
        assert!(convert_value(f64::NAN, "m", "km").unwrap().is_nan());
        let inf = convert_value(f64::INFINITY, "s", "min").unwrap();
        assert!(inf.is_infinite() && inf.is_sign_positive());
    }

    #[test]
    fn test_typed_descriptor() {
        let f = descriptor::<Temperature>("°F").unwrap();
        assert!(f.is_absolute_capable());
        assert_relative_eq!(f.to_si(32.0), 273.15, epsilon = 1e-9);
        assert!(matches!(
            descriptor::<Length>("K"),
            Err(RegistryError::IncompatibleDimension { .. })
        ));
    }

    #[test]
    fn test_units_of_is_sorted_and_complete() {
        let lengths = units_of("length");
        assert_eq!(lengths.len(), units::length::UNITS.len());
        assert_eq!(lengths.first().map(|u| u.symbol), Some("nm"));
        assert_eq!(lengths.last().map(|u| u.symbol), Some("pc"));
    }

    #[test]
    fn test_symbols_are_unique_across_dimensions() {
        let total = units::length::UNITS.len()
            + units::time::UNITS.len()
            + units::temperature::UNITS.len()
            + units::angle::UNITS.len()
            + units::mass::UNITS.len()
            + units::acceleration::UNITS.len()
            + units::money::UNITS.len()
            + units::dimensionless::UNITS.len();
        assert_eq!(len(), total);
    }
}
