//! Dimension markers.

use core::marker::PhantomData;

/// Marker trait for a physical **dimension**.
///
/// A dimension is what separates a metre from a second. Base dimensions are uninhabited enums, so they can only
/// ever appear at the type level:
///
/// ```rust
/// use kinema_core::Dimension;
///
/// pub enum Luminosity {}
/// impl Dimension for Luminosity {}
/// ```
pub trait Dimension: 'static {}

/// The dimension `N / D`.
///
/// Produced by dividing two quantities; velocity is `DivDim<Length, Time>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {}

/// Dimension of pure numbers (ratios of like quantities).
#[derive(Debug)]
pub enum Dimensionless {}
impl Dimension for Dimensionless {}
