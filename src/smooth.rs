//! Pure functions turning a cyclic control polygon into a dense closed polyline.
//!
//! The construction follows the classic midpoint scheme: for every control
//! point a quadratic segment is spanned by the midpoints towards its two
//! neighbours, with the point itself acting as the middle handle. Sampling
//! each segment with [`interpolate`] and concatenating the runs yields one
//! closed curve through all segments.

use nalgebra::{Field, Scalar, Vector2};
use num::Num;
use smallvec::{smallvec, SmallVec};

/// Evaluates the interpolation of a point list at parameter `alpha`.
///
/// A single point is returned as is. A longer list combines its last point,
/// weighted by `alpha`, with the interpolation of the remaining points,
/// weighted by `1 - alpha`. For the 3-point segments used by [`smooth_closed`]
/// this is a quadratic Bézier-style evaluation with one level of recursion.
///
/// **An empty list will panic!**
pub fn interpolate<T: Field + Scalar>(points: &[Vector2<T>], alpha: T) -> Vector2<T> {
    match points {
        [] => panic!("cannot interpolate an empty point list"),
        [point] => point.clone(),
        [rest @ .., last] => {
            let inv_alpha = T::one() - alpha.clone();
            last * alpha.clone() + interpolate(rest, alpha) * inv_alpha
        }
    }
}

/// Computes the midpoint between two points.
pub fn midpoint<T: Field + Scalar>(a: &Vector2<T>, b: &Vector2<T>) -> Vector2<T> {
    let two = T::one() + T::one();
    (a + b) / two
}

/// Normalizes a possibly negative cyclic index into `[0, len)`.
///
/// Index `-1` addresses the last element and index `len` the first one. The
/// wrap-around is an explicit `rem_euclid` instead of any language specific
/// negative indexing.
pub fn cyclic(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Samples one quadratic segment at `alpha = k / density` for `k = 0..density`.
///
/// The end of the segment (`alpha = 1`) is deliberately left out as it is the
/// first sample of the next segment.
fn sample_segment<T>(segment: &[Vector2<T>], density: usize, out: &mut Vec<Vector2<T>>)
where
    T: Field + Scalar + Num,
{
    let density_t = convert::usize_to_generic::<T>(density);
    for k in 0..density {
        let alpha = convert::usize_to_generic::<T>(k) / density_t.clone();
        out.push(interpolate(segment, alpha));
    }
}

/// Smooths a closed control polygon into a dense polyline.
///
/// For every cyclic index `i` the quadratic segment
/// `[midpoint(p[i], p[i+1]), p[i+1], midpoint(p[i+1], p[i+2])]`
/// is sampled `density` times and all runs are concatenated in order,
/// yielding exactly `points.len() * density` samples.
///
/// Fewer than three control points cannot form a closed curve, so the result
/// is empty. `density` must be at least 1; callers clamp before calling.
pub fn smooth_closed<T>(points: &[Vector2<T>], density: usize) -> Vec<Vector2<T>>
where
    T: Field + Scalar + Num,
{
    assert!(density >= 1);
    if points.len() < 3 {
        return Vec::new();
    }

    let len = points.len();
    let mut polyline = Vec::with_capacity(len * density);
    for i in -2..len as isize - 2 {
        let a = &points[cyclic(i, len)];
        let b = &points[cyclic(i + 1, len)];
        let c = &points[cyclic(i + 2, len)];
        let segment: SmallVec<[Vector2<T>; 3]> = smallvec![midpoint(a, b), b.clone(), midpoint(b, c)];
        sample_segment(&segment, density, &mut polyline);
    }
    polyline
}

mod convert {
    use num::Num;

    /// Helper function used when a sample index or density is needed as a scalar
    pub(crate) fn usize_to_generic<T: Num>(n: usize) -> T {
        let mut k = T::zero();
        for _ in 0..n {
            k = k + T::one();
        }
        k
    }
}
