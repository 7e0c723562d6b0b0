//! Predefined units grouped by dimension.
//!
//! They live in `kinema-core` so the derived `Display` impls on `Quantity<_>` satisfy the orphan rules.
//!
//! - [`length`]: metre and kilometre.
//! - [`time`]: second and hour.
//! - [`velocity`]: `Length / Time` aliases built from the two above.
//! - [`unitless`]: the unit of pure ratios.

pub mod length;
pub mod time;
pub mod unitless;
pub mod velocity;
