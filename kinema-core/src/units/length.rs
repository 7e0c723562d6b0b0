//! Length units.
//!
//! ```rust
//! use kinema_core::length::{Kilometers, Meters, M};
//!
//! let run = 12.0 * M;
//! assert_eq!(run, Meters::new(12.0));
//! assert_eq!(format!("{}", Kilometers::new(5.0)), "5 km");
//! ```

use crate::{Dimension, Quantity, Unit};
use kinema_derive::Unit;

/// Dimension tag for length.
#[derive(Debug)]
pub enum Length {}
impl Dimension for Length {}

/// Any [`Unit`] that measures [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length)]
pub struct Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);
