//! The speed calculator.
//!
//! [`calculate_speed`] divides a length by a time. The dimensions are checked by the signature: the result is a
//! [`Velocity`] in the input units, and passing the arguments the wrong way round does not compile:
//!
//! ```compile_fail
//! use kinema::speed::calculate_speed;
//! use kinema::{Meters, Seconds};
//!
//! let _ = calculate_speed(Seconds::new(4.0), Meters::new(12.0));
//! ```
//!
//! ```compile_fail
//! use kinema::speed::calculate_speed;
//! use kinema::Meters;
//!
//! let _ = calculate_speed(Meters::new(12.0), Meters::new(4.0));
//! ```

use kinema_core::length::LengthUnit;
use kinema_core::time::TimeUnit;
use kinema_core::velocity::Velocity;
use kinema_core::{Quantity, Unit};
use tracing::{debug, warn};

/// `distance / duration`, tagged as a velocity.
///
/// A zero or negative duration is not rejected. The value is what IEEE-754 division gives (`±inf` or NaN for a
/// zero duration, a negative speed for a negative one); a non-finite result is additionally reported as a `warn`
/// event.
///
/// ```rust
/// use kinema::speed::calculate_speed;
/// use kinema::{Meter, Meters, Second, Seconds, Velocity};
///
/// let v: Velocity<Meter, Second> = calculate_speed(Meters::new(12.0), Seconds::new(4.0));
/// assert_eq!(v.value(), 3.0);
/// ```
pub fn calculate_speed<L, T>(distance: Quantity<L>, duration: Quantity<T>) -> Velocity<L, T>
where
    L: LengthUnit,
    T: TimeUnit,
{
    let speed = distance / duration;

    if speed.is_finite() {
        debug!(
            distance = distance.value(),
            duration = duration.value(),
            speed = speed.value(),
            "computed speed in {}/{}",
            L::SYMBOL,
            T::SYMBOL
        );
    } else {
        warn!(
            distance = distance.value(),
            duration = duration.value(),
            "speed is not finite: {}",
            speed.value()
        );
    }

    speed
}

/// The report line printed by the `speed` binary: `Speed: <value> <length>/<time>`.
pub fn speed_line<L: Unit, T: Unit>(speed: Velocity<L, T>) -> String {
    format!("Speed: {speed}")
}
