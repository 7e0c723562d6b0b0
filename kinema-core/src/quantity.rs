//! The `Quantity` type and its arithmetic.

use crate::unit::{Per, Unit};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An `f64` tagged with a unit.
///
/// The unit `U` lives only in the type, so a `Quantity<U>` has the size and cost of a bare `f64`. Which operators
/// exist decides which physics is legal: like units add, any two units divide into a [`Per`], and nothing else
/// mixes.
///
/// ```rust
/// use kinema_core::length::{Meters, M};
///
/// let a = 12.0 * M;
/// let b = Meters::new(3.0);
/// assert_eq!((a + b).value(), 15.0);
/// ```
///
/// ```compile_fail
/// use kinema_core::length::Meters;
/// use kinema_core::time::Seconds;
///
/// let _ = Meters::new(1.0) + Seconds::new(1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// NaN in this unit.
    pub const NAN: Self = Self::new(f64::NAN);

    /// Tags `value` with the unit `U`.
    ///
    /// ```rust
    /// use kinema_core::time::Seconds;
    /// assert_eq!(Seconds::new(4.0).value(), 4.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// The bare number, with the unit dropped.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Smaller of two quantities of the same unit.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Larger of two quantities of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// `false` for NaN and the infinities.
    ///
    /// ```rust
    /// use kinema_core::length::Meters;
    /// use kinema_core::time::Seconds;
    ///
    /// let v = Meters::new(12.0) / Seconds::new(0.0);
    /// assert!(!v.is_finite());
    /// ```
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-unit arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(0.0), |acc, q| acc + q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling by bare numbers
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

/// `12.0 * M` is how a raw number picks up a unit.
impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> PartialEq<f64> for Quantity<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension algebra
// ─────────────────────────────────────────────────────────────────────────────

/// `N / D`. The divisor may be zero; the value then follows IEEE-754.
impl<N: Unit, D: Unit> Div<Quantity<D>> for Quantity<N> {
    type Output = Quantity<Per<N, D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

/// `(N / D) * D = N`.
impl<N: Unit, D: Unit> Mul<Quantity<D>> for Quantity<Per<N, D>> {
    type Output = Quantity<N>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Quantity<N> {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit> Mul<Quantity<Per<N, D>>> for Quantity<D> {
    type Output = Quantity<N>;
    #[inline]
    fn mul(self, rhs: Quantity<Per<N, D>>) -> Quantity<N> {
        rhs * self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde adapter that keeps the unit symbol next to the value.
///
/// Plain `Quantity<U>` serializes as a bare number. Under `#[serde(with = "kinema_core::serde_with_unit")]` it
/// becomes `{"value": 12.0, "unit": "m"}`, and deserialization rejects a `unit` that is not `U::SYMBOL`. A missing
/// `unit` is accepted.
///
/// ```rust
/// use kinema_core::length::Meters;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "kinema_core::serde_with_unit")]
///     distance: Meters,
/// }
///
/// let leg: Leg = serde_json::from_str(r#"{"distance":{"value":12.0,"unit":"m"}}"#).unwrap();
/// assert_eq!(leg.distance.value(), 12.0);
/// assert!(serde_json::from_str::<Leg>(r#"{"distance":{"value":12.0,"unit":"s"}}"#).is_err());
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Writes `{ value, unit }`.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Reads `{ value, unit? }`, checking `unit` against `U::SYMBOL`.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "a quantity table with `value` and optional `unit` = {:?}", U::SYMBOL)
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                match unit {
                    Some(found) if found != U::SYMBOL => Err(de::Error::custom(format!(
                        "unit mismatch: expected '{}', found '{}'",
                        U::SYMBOL,
                        found
                    ))),
                    _ => Ok(Quantity::new(value)),
                }
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
