//! The rectangular area control points bounce around in.

use nalgebra::{Scalar, Vector2};
use num::Zero;

/// Axis aligned rectangle anchored at the origin, spanning `[0, width] x [0, height]`.
///
/// Passed freshly into every tick so a resized window takes effect immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport<T> {
    /// Extent along the x axis
    pub width: T,

    /// Extent along the y axis
    pub height: T,
}

impl<T: Scalar + Zero + PartialOrd + Copy> Viewport<T> {
    /// Checks whether a point lies inside the viewport, edges included.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        T::zero() <= point.x && point.x <= self.width && T::zero() <= point.y && point.y <= self.height
    }
}

impl<T> From<(T, T)> for Viewport<T> {
    fn from(size: (T, T)) -> Self {
        Viewport {
            width: size.0,
            height: size.1,
        }
    }
}

impl<T> From<Viewport<T>> for (T, T) {
    fn from(viewport: Viewport<T>) -> Self {
        (viewport.width, viewport.height)
    }
}
