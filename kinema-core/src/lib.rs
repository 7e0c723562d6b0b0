//! Compile-time dimensional analysis over `f64`.
//!
//! `kinema-core` models physical quantities as phantom-typed numbers:
//!
//! - A *dimension* (length, time, …) is a marker type implementing [`Dimension`].
//! - A *unit* is a zero-sized marker implementing [`Unit`], tied to exactly one dimension.
//! - A [`Quantity<U>`] is an `f64` tagged with a unit. The tag costs nothing at runtime.
//! - Division builds derived units: `Quantity<N> / Quantity<D>` is a `Quantity<Per<N, D>>` whose dimension is
//!   [`DivDim<N::Dim, D::Dim>`](DivDim).
//!
//! Most users should depend on `kinema`, which re-exports everything here.
//!
//! # What this crate solves
//!
//! - Adding, subtracting or comparing quantities of different units is a type error.
//! - Functions can demand a dimension (`L: LengthUnit`) instead of a bare `f64`.
//! - Derived dimensions are inferred by the compiler from the operation that produced them.
//!
//! # What this crate does not try to solve
//!
//! - Conversion between units of the same dimension. `Kilometers` and `Meters` are simply different types.
//! - Parsing unit expressions from text.
//! - General exponent tracking (`m^2`, `s^-1`); only the shapes built by `/` and [`Simplify`] are modeled.
//!
//! # Quick start
//!
//! ```rust
//! use kinema_core::length::{Meter, M};
//! use kinema_core::time::{Second, SEC};
//! use kinema_core::velocity::Velocity;
//!
//! let v: Velocity<Meter, Second> = (12.0 * M) / (4.0 * SEC);
//! assert_eq!(v.value(), 3.0);
//! assert_eq!(v.to_string(), "3 m/s");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use kinema_core::length::Meters;
//! use kinema_core::time::Seconds;
//!
//! let _ = Meters::new(12.0) - Seconds::new(4.0);
//! ```
//!
//! ```compile_fail
//! use kinema_core::length::Meters;
//! use kinema_core::time::Seconds;
//!
//! let _ = Meters::new(12.0) < Seconds::new(4.0);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Quantity<U>` (as a bare `f64`) and the [`serde_with_unit`] adapter.
//!
//! # Panics and errors
//!
//! Nothing here returns `Result` or panics. Arithmetic is plain `f64` arithmetic; dividing by a zero quantity yields
//! an infinity or NaN exactly as IEEE-754 prescribes.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod dimension;
mod quantity;
mod unit;

pub use dimension::{Dimension, Dimensionless, DivDim};
pub use quantity::Quantity;
pub use unit::{Per, Simplify, Unit};
pub use units::unitless::Unitless;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

pub mod units;

pub use units::length;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
