//! Integer lattice points.
//!
//! - `Point` orders lexicographically (x, then y); the derive relies on field order.
//! - `to_vec` lifts into `Vector2<i64>` so differences never overflow `i32`.

use nalgebra::Vector2;
use std::fmt;

/// A point with integer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widened coordinates for exact difference arithmetic.
    #[inline]
    pub fn to_vec(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }

    /// Parse `"<x> <y>"` (any whitespace). Exactly two `i32` tokens, nothing else.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let x = tokens.next()?.parse().ok()?;
        let y = tokens.next()?.parse().ok()?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Same layout as one row of a point file.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
