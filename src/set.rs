//! The collection of knots a running session animates.

use crate::knot::{Knot, DEFAULT_DENSITY};
use crate::viewport::Viewport;
use log::debug;
use nalgebra::Vector2;
use rand::Rng;

/// Default cap on the number of knots a set will hold.
pub const DEFAULT_MAX_KNOTS: usize = 9;

/// Ordered collection of [`Knot`]s with one active knot receiving edits.
///
/// The set is never empty: it starts with a single knot and refuses to remove
/// the last one. Requests it cannot honour (cap reached, index out of range)
/// are silently ignored, matching the forgiving posture of an interactive
/// tool, and logged at debug level.
#[derive(Clone, Debug)]
pub struct CurveSet {
    knots: Vec<Knot>,
    active: usize,
    paused: bool,
    max_knots: usize,
}

impl Default for CurveSet {
    fn default() -> Self {
        CurveSet::new(DEFAULT_MAX_KNOTS)
    }
}

impl CurveSet {
    /// Creates a set holding one empty knot, paused.
    pub fn new(max_knots: usize) -> CurveSet {
        CurveSet {
            knots: vec![Knot::new(DEFAULT_DENSITY)],
            active: 0,
            paused: true,
            max_knots: max_knots.max(1),
        }
    }

    /* Structural edits */

    /// Appends a prefilled knot and makes it active.
    /// No-op once the cap is reached.
    pub fn add_knot<R: Rng>(&mut self, rng: &mut R, viewport: &Viewport<f64>) {
        if self.knots.len() >= self.max_knots {
            debug!("knot cap of {} reached, ignoring add", self.max_knots);
            return;
        }
        self.knots.push(Knot::prefilled(rng, viewport, DEFAULT_DENSITY));
        self.active = self.knots.len() - 1;
    }

    /// Removes the active knot.
    ///
    /// Refuses when only one knot remains. When the removed index was the last
    /// one the active index moves to the new last knot; otherwise it stays put
    /// and the knot shifting into the slot becomes active.
    pub fn remove_knot(&mut self) {
        if self.knots.len() <= 1 {
            debug!("refusing to remove the last knot");
            return;
        }
        self.knots.remove(self.active);
        if self.active >= self.knots.len() {
            self.active = self.knots.len() - 1;
        }
    }

    /// Makes the knot at `index` active. Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.knots.len() {
            self.active = index;
        } else {
            debug!("select {} out of range ({} knots), ignored", index, self.knots.len());
        }
    }

    /// Resets to a single empty knot, active and paused.
    pub fn reset(&mut self) {
        self.knots.clear();
        self.knots.push(Knot::new(DEFAULT_DENSITY));
        self.active = 0;
        self.paused = true;
    }

    /* Edits forwarded to the active knot */

    /// Appends a control point to the active knot.
    pub fn add_point(&mut self, position: Vector2<f64>, velocity: Vector2<f64>) {
        self.knots[self.active].add_point(position, velocity);
    }

    /// Drops the last control point of the active knot.
    pub fn remove_point(&mut self) {
        self.knots[self.active].remove_point();
    }

    /// Applies a signed delta to the active knot's density, floored at 1.
    pub fn adjust_density(&mut self, delta: i64) {
        let knot = &mut self.knots[self.active];
        let density = knot.density() as i64 + delta;
        knot.set_density(density.max(1) as usize);
    }

    /* Animation */

    /// Flips the shared pause flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether the animation is currently paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Advances every knot by one frame unless paused.
    ///
    /// The viewport is taken fresh on every call so a resized window changes
    /// the bounce boundary immediately.
    pub fn tick_all(&mut self, viewport: &Viewport<f64>) {
        if self.paused {
            return;
        }
        for knot in self.knots.iter_mut() {
            knot.tick(viewport);
        }
    }

    /* Queries */

    /// Index of the knot currently receiving edits.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The knot currently receiving edits.
    pub fn active(&self) -> &Knot {
        &self.knots[self.active]
    }

    /// Number of knots in the set, at least 1.
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }

    /// The configured cap on the number of knots.
    pub fn max_knots(&self) -> usize {
        self.max_knots
    }

    /// The knot at `index`, if any.
    pub fn knot(&self, index: usize) -> Option<&Knot> {
        self.knots.get(index)
    }

    /// Mutable access to the knot at `index`, for edits addressed to a
    /// specific knot instead of the active one.
    pub fn knot_mut(&mut self, index: usize) -> Option<&mut Knot> {
        self.knots.get_mut(index)
    }

    /// Iterates over all knots in order.
    pub fn knots(&self) -> impl Iterator<Item = &Knot> {
        self.knots.iter()
    }
}
