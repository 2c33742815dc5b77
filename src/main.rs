use knotwork::{CurveSet, Viewport};
use log::info;
use nalgebra::Vector2;

mod svg;
use svg::Svg;

const FRAMES: usize = 600;

fn main() {
    env_logger::init();

    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let mut rng = rand::thread_rng();

    let mut set = CurveSet::default();

    // A hand placed knot plus a couple of random ones.
    set.add_point(Vector2::new(100.0, 100.0), Vector2::new(1.2, 0.4));
    set.add_point(Vector2::new(700.0, 150.0), Vector2::new(0.7, 1.1));
    set.add_point(Vector2::new(400.0, 500.0), Vector2::new(1.6, 0.9));
    set.add_knot(&mut rng, &viewport);
    set.add_knot(&mut rng, &viewport);

    set.toggle_pause();
    for _ in 0..FRAMES {
        set.tick_all(&viewport);
    }
    info!("animated {} knots for {} frames", set.knot_count(), FRAMES);

    let mut svg = Svg {
        view_box: (0.0, 0.0, viewport.width, viewport.height),
        elements: Vec::with_capacity(0),
    };
    for knot in set.knots() {
        svg.add_knot(knot);
    }
    println!("{}", svg);
}
