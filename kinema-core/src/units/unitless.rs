//! Dimensionless quantities.
//!
//! A ratio of like quantities (`Per<U, U>`) simplifies to `Quantity<Unitless>`. Since it has no dimension left,
//! it may be turned back into a bare `f64`.
//!
//! ```rust
//! use kinema_core::length::Meters;
//! use kinema_core::Simplify;
//!
//! let share: f64 = (Meters::new(3.0) / Meters::new(12.0)).simplify().into();
//! assert_eq!(share, 0.25);
//! ```

use crate::dimension::Dimensionless;
use crate::{Quantity, Unit};
use core::fmt::{Display, Formatter, Result};

/// Unit of dimensionless quantities; its symbol is empty.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
}

impl Display for Quantity<Unitless> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value())
    }
}

impl From<Quantity<Unitless>> for f64 {
    fn from(ratio: Quantity<Unitless>) -> Self {
        ratio.value()
    }
}
