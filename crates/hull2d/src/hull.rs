//! Monotone-chain convex hull over integer points.
//!
//! Output contract
//! - Open polygon (first vertex not repeated), starting at the smallest point in
//!   (x, y) order and running counter-clockwise.
//! - Collinear points on an edge are pruned; duplicates collapse.
//! - All-collinear input degenerates to the two extreme points. This is returned
//!   as-is; callers that need a polygon must check `len() >= 3`.

use std::fmt;

use crate::orient::Orientation;
use crate::point::Point;

/// Fewest points accepted by the builder.
pub const MIN_POINTS: usize = 3;

/// Errors surfaced by the hull builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    InsufficientPoints { count: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { count } => write!(
                f,
                "at least {MIN_POINTS} points are required to compute the convex hull (got {count})"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Convex hull of `points`, sorting the slice in place as a side effect.
pub fn convex_hull(points: &mut [Point]) -> Result<Vec<Point>, HullError> {
    if points.len() < MIN_POINTS {
        return Err(HullError::InsufficientPoints {
            count: points.len(),
        });
    }
    points.sort_unstable();

    let mut hull: Vec<Point> = Vec::with_capacity(points.len() + 1);
    for &p in points.iter() {
        pop_non_left_turns(&mut hull, p, 1);
        hull.push(p);
    }

    // Upper chain may not pop into the lower one.
    let lower_len = hull.len();
    for &p in points.iter().rev() {
        pop_non_left_turns(&mut hull, p, lower_len);
        hull.push(p);
    }

    // Last push is the smallest point again.
    hull.pop();
    Ok(hull)
}

/// Non-mutating variant of [`convex_hull`]; sorts a copy.
pub fn convex_hull_of(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let mut owned = points.to_vec();
    convex_hull(&mut owned)
}

#[inline]
fn pop_non_left_turns(hull: &mut Vec<Point>, candidate: Point, floor: usize) {
    while hull.len() > floor {
        let n = hull.len();
        if Orientation::of(hull[n - 2], hull[n - 1], candidate) == Orientation::CounterClockwise {
            break;
        }
        hull.pop();
    }
}

/// True if every cyclic triple of `hull` is a strict left turn. Needs ≥3 vertices.
pub fn is_strictly_convex(hull: &[Point]) -> bool {
    let n = hull.len();
    if n < MIN_POINTS {
        return false;
    }
    (0..n).all(|i| {
        Orientation::of(hull[i], hull[(i + 1) % n], hull[(i + 2) % n])
            == Orientation::CounterClockwise
    })
}

/// True if `p` lies inside or on the boundary of the CCW polygon `hull`.
///
/// Degenerate hulls (fewer than 3 vertices) are treated as the segment or point
/// they describe.
pub fn encloses(hull: &[Point], p: Point) -> bool {
    match hull {
        [] => false,
        [a] => *a == p,
        [a, b] => on_segment(*a, *b, p),
        _ => (0..hull.len()).all(|i| {
            Orientation::of(hull[i], hull[(i + 1) % hull.len()], p) != Orientation::Clockwise
        }),
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    Orientation::of(a, b, p) == Orientation::Collinear
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}
