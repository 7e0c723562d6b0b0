//! Velocity (`Length / Time`).
//!
//! There are no standalone velocity units. A velocity is whatever dividing a length by a time produces, so
//! `Velocity<Meter, Second>` is literally `Quantity<Per<Meter, Second>>` and prints as `m/s`.
//!
//! ```rust
//! use kinema_core::length::{Meter, Meters};
//! use kinema_core::time::{Second, Seconds};
//! use kinema_core::velocity::Velocity;
//!
//! let v: Velocity<Meter, Second> = Meters::new(12.0) / Seconds::new(4.0);
//! assert_eq!(v.to_string(), "3 m/s");
//! ```
//!
//! Dividing in the wrong order gives a different type, which does not fit a velocity slot:
//!
//! ```compile_fail
//! use kinema_core::length::{Meter, Meters};
//! use kinema_core::time::{Second, Seconds};
//! use kinema_core::velocity::Velocity;
//!
//! let v: Velocity<Meter, Second> = Seconds::new(4.0) / Meters::new(12.0);
//! ```

use crate::units::length::{Length, Meter};
use crate::units::time::{Second, Time};
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension of velocities.
pub type VelocityDim = DivDim<Length, Time>;

/// Any [`Unit`] that measures [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity in length unit `N` per time unit `D`.
pub type Velocity<N, D> = Quantity<Per<N, D>>;

/// Metres per second.
pub type MetersPerSecond = Velocity<Meter, Second>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Kilometers, Meters};
    use crate::units::time::{Hour, Hours, Seconds};
    use crate::Simplify;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn is_velocity<U: VelocityUnit>(_: Quantity<U>) -> bool {
        true
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Length / Time
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_div_time() {
        let v: MetersPerSecond = Meters::new(12.0) / Seconds::new(4.0);
        assert_eq!(v.value(), 3.0);
        assert!(is_velocity(v));
    }

    #[test]
    fn other_units_keep_their_tags() {
        let v: Velocity<Kilometer, Hour> = Kilometers::new(90.0) / Hours::new(1.5);
        assert_relative_eq!(v.value(), 60.0);
        assert_eq!(v.to_string(), "60 km/h");
        assert!(is_velocity(v));
    }

    #[test]
    fn display() {
        let v: MetersPerSecond = Velocity::new(3.0);
        assert_eq!(v.to_string(), "3 m/s");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Velocity * Time = Length, Length / Velocity = Time
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn velocity_times_time() {
        let v: MetersPerSecond = Velocity::new(3.0);
        let d: Meters = v * Seconds::new(4.0);
        assert_eq!(d.value(), 12.0);
        let d: Meters = Seconds::new(4.0) * v;
        assert_eq!(d.value(), 12.0);
    }

    #[test]
    fn length_div_velocity_simplifies_to_time() {
        let v: MetersPerSecond = Velocity::new(3.0);
        let t: Seconds = (Meters::new(12.0) / v).simplify();
        assert_eq!(t.value(), 4.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Zero and negative durations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_duration_follows_ieee754() {
        let pos: MetersPerSecond = Meters::new(12.0) / Seconds::new(0.0);
        assert_eq!(pos.value(), f64::INFINITY);

        let neg: MetersPerSecond = Meters::new(-12.0) / Seconds::new(0.0);
        assert_eq!(neg.value(), f64::NEG_INFINITY);

        let nan: MetersPerSecond = Meters::new(0.0) / Seconds::new(0.0);
        assert!(nan.value().is_nan());
    }

    #[test]
    fn negative_duration_gives_negative_speed() {
        let v: MetersPerSecond = Meters::new(12.0) / Seconds::new(-4.0);
        assert_eq!(v.value(), -3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_division_matches_f64(d in 1e-6..1e6f64, t in 1e-6..1e6f64) {
            let v: MetersPerSecond = Meters::new(d) / Seconds::new(t);
            prop_assert_eq!(v.value(), d / t);
        }

        #[test]
        fn prop_velocity_time_roundtrip(d in 1e-3..1e3f64, t in 1e-3..1e3f64) {
            let v: MetersPerSecond = Meters::new(d) / Seconds::new(t);
            let back: Meters = v * Seconds::new(t);
            prop_assert!((back.value() - d).abs() <= 1e-12 * d);
        }
    }
}
