//! The moving control polygon a knot is built from.

use crate::smooth;
use crate::viewport::Viewport;
use nalgebra::{RealField, Scalar, Vector2};
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// A single control point: a position and the velocity it drifts with.
///
/// Every control point is owned by exactly one [`ControlPath`] slot and is
/// mutated in place on every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoint<T: Scalar> {
    /// Where the point currently is
    pub position: Vector2<T>,

    /// How far it moves per tick
    pub velocity: Vector2<T>,
}

/// Ordered, cyclic sequence of control points.
///
/// Indices wrap around: `-1` is the last point and `len` the first one, which
/// is what the closed-curve construction in [`smooth`] relies on. The path may
/// be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPath<T: Scalar>(pub PathInternal<T>);
type PathInternal<T> = SmallVec<[ControlPoint<T>; 8]>;

impl<T: Scalar> Deref for ControlPath<T> {
    type Target = PathInternal<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<T: Scalar> DerefMut for ControlPath<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Scalar> Default for ControlPath<T> {
    fn default() -> Self {
        ControlPath::new()
    }
}

impl<T: Scalar> ControlPath<T> {
    /// Creates an empty path.
    pub fn new() -> ControlPath<T> {
        ControlPath(SmallVec::new())
    }

    /// Adds a control point at the end of the path. Always succeeds.
    pub fn append(&mut self, position: Vector2<T>, velocity: Vector2<T>) {
        self.0.push(ControlPoint { position, velocity });
    }

    /// Removes and returns the last control point, `None` on an empty path.
    pub fn remove_last(&mut self) -> Option<ControlPoint<T>> {
        self.0.pop()
    }

    /// Accesses a control point by cyclic index.
    pub fn cyclic(&self, index: isize) -> &ControlPoint<T> {
        &self.0[smooth::cyclic(index, self.0.len())]
    }

    /// Collects the current positions in path order.
    pub fn positions(&self) -> Vec<Vector2<T>> {
        self.0.iter().map(|point| point.position.clone()).collect()
    }
}

impl<T: RealField> ControlPath<T> {
    /// Moves every control point by its velocity and reflects at the viewport walls.
    ///
    /// A coordinate leaving `[0, extent]` only negates the matching velocity
    /// component. The position is not clamped back inside, so a point may sit
    /// outside the viewport for a tick before its reversed velocity brings it
    /// back in.
    pub fn advance(&mut self, viewport: &Viewport<T>) {
        for point in self.0.iter_mut() {
            point.position += point.velocity.clone();
            if point.position.x > viewport.width || point.position.x < T::zero() {
                point.velocity.x = -point.velocity.x.clone();
            }
            if point.position.y > viewport.height || point.position.y < T::zero() {
                point.velocity.y = -point.velocity.y.clone();
            }
        }
    }
}
