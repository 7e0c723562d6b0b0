//! Time units.
//!
//! ```rust
//! use kinema_core::time::{Seconds, SEC};
//!
//! assert_eq!(4.0 * SEC, Seconds::new(4.0));
//! ```

use crate::{Dimension, Quantity, Unit};
use kinema_derive::Unit;

/// Dimension tag for time.
#[derive(Debug)]
pub enum Time {}
impl Dimension for Time {}

/// Any [`Unit`] that measures [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);
