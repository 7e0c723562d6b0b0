//! Unit trait and unit composition.

use crate::dimension::{Dimension, DivDim};
use crate::units::unitless::Unitless;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** marker type.
///
/// * `Dim` ties the unit to its [`Dimension`]; two quantities can only be added when their units are the same type,
///   and functions constrain their inputs through `Dim` (see [`crate::length::LengthUnit`]).
/// * `SYMBOL` is the printable suffix used by [`Display`] (`"m"`, `"s"`).
///
/// Units carry no scaling factor. A unit is a tag, not a conversion rule.
///
/// # Invariants
///
/// - Implementors are zero-sized.
/// - `SYMBOL` is non-empty for every unit except [`Unitless`].
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension this unit measures.
    type Dim: Dimension;

    /// Printable symbol.
    const SYMBOL: &'static str;
}

/// The unit `N / D`.
///
/// Dividing a `Quantity<N>` by a `Quantity<D>` yields a `Quantity<Per<N, D>>`, whose dimension is
/// `DivDim<N::Dim, D::Dim>`. The type keeps both constituent units, so `Per<Meter, Second>` and
/// `Per<Kilometer, Hour>` are distinct even though both are velocities.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
}

impl<N: Unit, D: Unit> Display for Quantity<Per<N, D>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}/{}", self.value(), N::SYMBOL, D::SYMBOL)
    }
}

/// Reduction of composite units to simpler ones.
///
/// Only the two shapes that arise from a single division are covered:
///
/// - `Per<U, U>` reduces to [`Unitless`] (a ratio of like quantities);
/// - `Per<N, Per<N, D>>` reduces to `D` (e.g. distance divided by speed is a duration).
pub trait Simplify {
    /// Unit after simplification.
    type Out: Unit;

    /// Re-tag this quantity with the simplified unit. The value is unchanged.
    fn simplify(self) -> Quantity<Self::Out>;
}

impl<U: Unit> Simplify for Quantity<Per<U, U>> {
    type Out = Unitless;

    /// ```rust
    /// use kinema_core::length::Meters;
    /// use kinema_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(3.0) / Meters::new(4.0);
    /// let r: Quantity<Unitless> = ratio.simplify();
    /// assert_eq!(r.value(), 0.75);
    /// ```
    fn simplify(self) -> Quantity<Unitless> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit> Simplify for Quantity<Per<N, Per<N, D>>> {
    type Out = D;

    /// ```rust
    /// use kinema_core::length::{Meter, Meters};
    /// use kinema_core::time::{Second, Seconds};
    /// use kinema_core::velocity::Velocity;
    /// use kinema_core::Simplify;
    ///
    /// let v: Velocity<Meter, Second> = Velocity::new(3.0);
    /// let t: Seconds = (Meters::new(12.0) / v).simplify();
    /// assert_eq!(t.value(), 4.0);
    /// ```
    fn simplify(self) -> Quantity<D> {
        Quantity::new(self.value())
    }
}
