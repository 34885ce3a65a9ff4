//! Turn direction of a path a → b → c.
//!
//! Sign convention
//! - `cross = (b.y−a.y)·(c.x−b.x) − (b.x−a.x)·(c.y−b.y)`, i.e. the negated z-component
//!   of `(b−a) × (c−b)`. With y pointing up, a left (CCW) turn is negative.
//! - Differences are taken in `i64` and products in `i128`; exact for all `i32` inputs.

use crate::point::Point;

/// Classification of three ordered points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `cross < 0`: left turn.
    CounterClockwise,
    /// `cross == 0`.
    Collinear,
    /// `cross > 0`: right turn.
    Clockwise,
}

impl Orientation {
    /// Classify the path a → b → c.
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        let ab = b.to_vec() - a.to_vec();
        let bc = c.to_vec() - b.to_vec();
        let cross = i128::from(ab.y) * i128::from(bc.x) - i128::from(ab.x) * i128::from(bc.y);
        match cross.signum() {
            0 => Orientation::Collinear,
            1 => Orientation::Clockwise,
            _ => Orientation::CounterClockwise,
        }
    }

    /// Signed form: −1, 0 or +1.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Orientation::CounterClockwise => -1,
            Orientation::Collinear => 0,
            Orientation::Clockwise => 1,
        }
    }
}

/// Signed orientation of a → b → c (−1, 0, +1).
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i32 {
    Orientation::of(a, b, c).sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_turns() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        assert_eq!(Orientation::of(a, b, Point::new(1, 1)), Orientation::CounterClockwise);
        assert_eq!(Orientation::of(a, b, Point::new(1, -1)), Orientation::Clockwise);
        assert_eq!(Orientation::of(a, b, Point::new(5, 0)), Orientation::Collinear);
        assert_eq!(orientation(a, b, Point::new(1, 1)), -1);
        assert_eq!(orientation(a, b, Point::new(1, -1)), 1);
    }

    #[test]
    fn reversed_path_flips_sign() {
        let (a, b, c) = (Point::new(-3, 7), Point::new(2, 2), Point::new(9, 11));
        assert_eq!(orientation(a, b, c), -orientation(c, b, a));
    }

    #[test]
    fn repeated_points_are_collinear() {
        let p = Point::new(4, 4);
        assert_eq!(orientation(p, p, Point::new(0, 9)), 0);
        assert_eq!(orientation(Point::new(0, 9), p, p), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN);
        let c = Point::new(i32::MAX, i32::MAX);
        assert_eq!(Orientation::of(a, b, c), Orientation::CounterClockwise);
        assert_eq!(Orientation::of(c, b, a), Orientation::Clockwise);
        let mid = Point::new(0, 0);
        let lo = Point::new(-i32::MAX, -i32::MAX);
        let hi = Point::new(i32::MAX, i32::MAX);
        assert_eq!(Orientation::of(lo, mid, hi), Orientation::Collinear);
    }
}
