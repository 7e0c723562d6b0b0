//! Dimension-checked speed calculation.
//!
//! `kinema` is the user-facing crate of this workspace. It re-exports the quantity model of `kinema-core` and adds
//! the speed calculator built on it.
//!
//! A value is always a `Quantity<U>`, where `U` is a zero-sized unit tag. The compiler derives the unit of every
//! result, so a speed can only come from dividing a length by a time:
//!
//! ```rust
//! use kinema::{calculate_speed, speed_line, M, SEC};
//!
//! let v = calculate_speed(12.0 * M, 4.0 * SEC);
//! assert_eq!(speed_line(v), "Speed: 3 m/s");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use kinema::{Meters, Seconds};
//!
//! let _ = Meters::new(12.0) + Seconds::new(4.0);
//! ```
//!
//! # Modules
//!
//! - [`speed`]: the calculator and its report line.
//! - [`scenario`]: the distance/duration input, loadable from TOML.
//! - [`length`], [`time`], [`velocity`], [`unitless`]: the units, also re-exported at the crate root.
//!
//! # Errors
//!
//! Arithmetic never fails at runtime. The only fallible operations are the scenario loaders, which return
//! [`ScenarioError`].

#![forbid(unsafe_code)]

pub mod error;
pub mod scenario;
pub mod speed;

pub use error::{Result, ScenarioError};
pub use scenario::Scenario;
pub use speed::{calculate_speed, speed_line};

pub use kinema_core::*;

pub use kinema_core::units::length::*;
pub use kinema_core::units::time::*;
pub use kinema_core::units::velocity::*;
