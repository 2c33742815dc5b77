#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod knot;
pub mod path;
pub mod set;
pub mod smooth;
pub mod viewport;

pub use crate::knot::Knot;
pub use crate::path::{ControlPath, ControlPoint};
pub use crate::set::CurveSet;
pub use crate::viewport::Viewport;
