//! One animated smoothed closed curve.

use crate::path::ControlPath;
use crate::smooth;
use crate::viewport::Viewport;
use nalgebra::Vector2;
use rand::Rng;

/// Samples per curve segment used by freshly created knots.
pub const DEFAULT_DENSITY: usize = 35;

/// Number of control points a prefilled knot starts with.
const PREFILL_POINTS: usize = 3;

/// Exclusive upper bound of a prefilled velocity component.
const PREFILL_MAX_SPEED: f64 = 2.0;

/// A control path together with its smoothed closed polyline.
///
/// The polyline is a cache: it is regenerated before any mutating call
/// returns, so readers always observe a curve matching the current control
/// points. Below three control points the polyline is empty and only the
/// control points themselves are worth drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct Knot {
    path: ControlPath<f64>,
    density: usize,
    polyline: Vec<Vector2<f64>>,
    hue: u16,
}

impl Knot {
    /// Creates a knot without any control points.
    pub fn new(density: usize) -> Knot {
        Knot {
            path: ControlPath::new(),
            density: density.max(1),
            polyline: Vec::new(),
            hue: 0,
        }
    }

    /// Creates a knot prefilled with a few randomly placed, randomly moving
    /// control points.
    ///
    /// Positions are uniform inside the viewport, velocity components uniform
    /// in `[0, 2)`.
    pub fn prefilled<R: Rng>(rng: &mut R, viewport: &Viewport<f64>, density: usize) -> Knot {
        let mut knot = Knot::new(density);
        for _ in 0..PREFILL_POINTS {
            let position = Vector2::new(
                rng.gen_range(0.0..=viewport.width),
                rng.gen_range(0.0..=viewport.height),
            );
            let velocity = Vector2::new(
                rng.gen_range(0.0..PREFILL_MAX_SPEED),
                rng.gen_range(0.0..PREFILL_MAX_SPEED),
            );
            knot.add_point(position, velocity);
        }
        knot
    }

    /// Appends a control point and refreshes the polyline.
    pub fn add_point(&mut self, position: Vector2<f64>, velocity: Vector2<f64>) {
        self.path.append(position, velocity);
        self.recompute();
    }

    /// Drops the last control point and refreshes the polyline.
    /// No-op on a knot without points.
    pub fn remove_point(&mut self) {
        self.path.remove_last();
        self.recompute();
    }

    /// Advances one animation frame: move the control points, bounce them off
    /// the viewport walls, step the display hue and refresh the polyline.
    pub fn tick(&mut self, viewport: &Viewport<f64>) {
        self.path.advance(viewport);
        self.hue = (self.hue + 1) % 360;
        self.recompute();
    }

    /// Sets the tessellation density, floored at 1, and refreshes the polyline.
    pub fn set_density(&mut self, density: usize) {
        self.density = density.max(1);
        self.recompute();
    }

    /// Current tessellation density.
    pub fn density(&self) -> usize {
        self.density
    }

    /// Display hue in `[0, 360)`, stepped once per tick. Only a renderer
    /// cares about this value.
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// The underlying control path.
    pub fn path(&self) -> &ControlPath<f64> {
        &self.path
    }

    /// Current control point positions, for marker rendering.
    pub fn control_points(&self) -> Vec<Vector2<f64>> {
        self.path.positions()
    }

    /// The smoothed closed curve, for line rendering.
    ///
    /// Pure read; the cache is refreshed by the mutating calls.
    pub fn polyline(&self) -> &[Vector2<f64>] {
        &self.polyline
    }

    fn recompute(&mut self) {
        let positions = self.path.positions();
        self.polyline = smooth::smooth_closed(&positions, self.density);
    }
}
