use knotwork::ControlPath;
use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Corner points generated randomly
/// ```python
/// from random import random
/// for i in range(8):
///     print(f"({random() * 800:.5f}, {random() * 600:.5f})")
/// ```
pub static POINTS: [(f64, f64); 8] = [
    (238.11724, 54.71478),
    (719.36133, 297.41699),
    (501.61361, 550.68644),
    (45.07835, 412.87975),
    (156.42900, 104.67624),
    (680.54720, 477.22316),
    (352.93144, 31.14060),
    (592.00486, 232.70054),
];

pub static PATHS: Lazy<Paths> = Lazy::new(Paths::new);
#[allow(non_snake_case)]
pub struct Paths {
    pub TRIANGLE: ControlPath<f64>,
    pub PENTAGON: ControlPath<f64>,
    pub OCTAGON: ControlPath<f64>,
}

impl Paths {
    pub fn new() -> Paths {
        Paths {
            TRIANGLE: path(&[0, 1, 2]),
            PENTAGON: path(&[0, 1, 2, 3, 4]),
            OCTAGON: path(&[0, 1, 2, 3, 4, 5, 6, 7]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPath<f64>> {
        [&self.TRIANGLE, &self.PENTAGON, &self.OCTAGON].into_iter()
    }
}

fn path(indices: &[usize]) -> ControlPath<f64> {
    let mut path = ControlPath::new();
    for &i in indices {
        let (x, y) = POINTS[i];
        path.append(Vector2::new(x, y), Vector2::new(1.0, 1.5));
    }
    path
}
