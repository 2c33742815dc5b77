//! Small helper rendering knots as svg.
//!
//! Only used by the demo binary; not part of the library surface.

use knotwork::Knot;
use nalgebra::Vector2;
use std::fmt::{Display, Formatter};

type Rect = (f64, f64, f64, f64);

pub struct Svg {
    pub view_box: Rect,
    pub elements: Vec<Box<dyn Display>>,
}

impl Svg {
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Display for Svg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub color: String,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.center[0], self.center[1], self.radius, self.color
        )
    }
}

/// A closed run of line segments, rendered as a single svg path.
pub struct Loop {
    pub points: Vec<Vector2<f64>>,
    pub width: f64,
    pub color: String,
}

impl Display for Loop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<path stroke=\"{}\" fill=\"none\" stroke-width=\"{}\" d=\"",
            self.color, self.width
        )?;
        for (i, p) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { "L" };
            write!(f, "{} {} {} ", command, p[0], p[1])?;
        }
        writeln!(f, "Z\"/>")?;
        Ok(())
    }
}

/* Methods actually processing knots */
impl Svg {
    /// Draws one knot: markers for the control points and the smoothed
    /// polyline as a closed loop stroked with the knot's hue.
    pub fn add_knot(&mut self, knot: &Knot) {
        for center in knot.control_points() {
            self.add_elem(Circle {
                center,
                radius: 3.0,
                color: "white".to_string(),
            });
        }

        let polyline = knot.polyline();
        if !polyline.is_empty() {
            self.add_elem(Loop {
                points: polyline.to_vec(),
                width: 3.0,
                color: format!("hsl({}, 100%, 50%)", knot.hue()),
            });
        }
    }
}
