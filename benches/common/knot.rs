use crate::common::samples::PATHS;
use criterion::{black_box, Criterion};
use knotwork::smooth::smooth_closed;
use knotwork::{Knot, Viewport};
use nalgebra::Vector2;

pub fn smooth(c: &mut Criterion) {
    c.bench_function("smooth_closed", |b| {
        for path in PATHS.iter() {
            let positions = path.positions();
            b.iter(|| black_box(smooth_closed(&positions, 35)))
        }
    });
}

pub fn tick(c: &mut Criterion) {
    c.bench_function("knot_tick", |b| {
        let viewport = Viewport {
            width: 800.0,
            height: 600.0,
        };
        let mut knot = Knot::new(35);
        for position in PATHS.OCTAGON.positions() {
            knot.add_point(position, Vector2::new(1.0, 1.5));
        }
        b.iter(|| knot.tick(&viewport));
    });
}

pub fn all(c: &mut Criterion) {
    smooth(c);
    tick(c);
}
