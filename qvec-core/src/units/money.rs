//! Money units.
//!
//! Amounts are stored in [`Euro`]. Only fixed subdivisions and multiples are provided; exchange
//! rates between currencies are not constants and are out of scope.

use crate::{Dimension, Unit, UnitDescriptor};
use qvec_derive::Unit;

/// Dimension tag for money.
pub enum Money {}
impl Dimension for Money {
    const NAME: &'static str = "money";
}

/// Euro (reference unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "EUR", dimension = Money, scale = 1.0)]
pub struct Euro;

/// Euro cent (`0.01 EUR`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "cEUR", dimension = Money, scale = 0.01)]
pub struct EuroCent;

/// Thousand euros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "kEUR", dimension = Money, scale = 1e3)]
pub struct Kiloeuro;

/// Million euros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Unit)]
#[unit(symbol = "MEUR", dimension = Money, scale = 1e6)]
pub struct Megaeuro;

/// All money units defined in this module.
pub const UNITS: &[UnitDescriptor<Money>] = &[
    Euro::DESCRIPTOR,
    EuroCent::DESCRIPTOR,
    Kiloeuro::DESCRIPTOR,
    Megaeuro::DESCRIPTOR,
];
