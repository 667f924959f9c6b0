//! Named quantity types.
//!
//! Each physical quantity is a type alias over the generic core types. Absolute and relative
//! quantities of one dimension share a Rust type; the kind is fixed when the value is built
//! (`Vector::absolute` for positions, instants and temperatures, `Vector::relative` for the rest).
//!
//! ```rust
//! use qvec::{AbsRel, Meter, PositionVector, StorageType, VectorQuantity};
//!
//! let start = PositionVector::absolute(&[0.0, 12.5, 40.0], Meter, StorageType::Dense).unwrap();
//! let end = PositionVector::absolute(&[3.0, 12.5, 52.0], Meter, StorageType::Dense).unwrap();
//! let travelled = end.minus(&start).unwrap();
//! assert_eq!(travelled.kind(), AbsRel::Relative);
//! assert_eq!(travelled.values_in_unit(), vec![3.0, 0.0, 12.0]);
//! ```

use qvec_core::acceleration::Acceleration;
use qvec_core::angle::Angle;
use qvec_core::length::Length;
use qvec_core::mass::Mass;
use qvec_core::money::Money;
use qvec_core::temperature::Temperature;
use qvec_core::time::Time;
use qvec_core::{Dimensionless, MutableVector, Scalar, Vector};

macro_rules! quantity_aliases {
    ($($dim:ty => $vector:ident, $mutable:ident, $scalar:ident, $what:literal;)+) => {
        $(
            #[doc = concat!("Immutable vector of ", $what, ".")]
            pub type $vector = Vector<$dim>;

            #[doc = concat!("Mutable vector of ", $what, ".")]
            pub type $mutable = MutableVector<$dim>;

            #[doc = concat!("Single ", $what, " value.")]
            pub type $scalar = Scalar<$dim>;
        )+
    };
}

quantity_aliases! {
    Length => LengthVector, MutableLengthVector, LengthScalar, "lengths (relative)";
    Length => PositionVector, MutablePositionVector, PositionScalar, "positions (absolute lengths)";
    Time => DurationVector, MutableDurationVector, DurationScalar, "durations (relative times)";
    Time => TimeVector, MutableTimeVector, TimeScalar, "instants (absolute times)";
    Temperature => TemperatureVector, MutableTemperatureVector, TemperatureScalar,
        "temperature differences (relative)";
    Temperature => AbsoluteTemperatureVector, MutableAbsoluteTemperatureVector,
        AbsoluteTemperatureScalar, "absolute temperatures";
    Angle => AngleVector, MutableAngleVector, AngleScalar, "angles (relative)";
    Angle => DirectionVector, MutableDirectionVector, DirectionScalar, "directions (absolute angles)";
    Mass => MassVector, MutableMassVector, MassScalar, "masses";
    Acceleration => AccelerationVector, MutableAccelerationVector, AccelerationScalar, "accelerations";
    Money => MoneyVector, MutableMoneyVector, MoneyScalar, "money amounts";
    Dimensionless => DimensionlessVector, MutableDimensionlessVector, DimensionlessScalar,
        "dimensionless numbers";
}
