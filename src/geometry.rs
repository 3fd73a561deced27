//! Integer pixel geometry used by the layout engine.

use std::ops::Add;

/// A 2-D integer offset, used both as a relative displacement and as an
/// absolute anchor on a surface. Plain `Copy` value: assigning an anchor
/// never aliases the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<(i32, i32)> for Point {
    type Output = Point;

    fn add(self, rhs: (i32, i32)) -> Point {
        Point::new(self.x + rhs.0, self.y + rhs.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point() {
        assert_eq!(Point::new(3, 4) + Point::new(-1, 10), Point::new(2, 14));
    }

    #[test]
    fn test_add_pair() {
        assert_eq!(Point::new(100, 300) + (104, 0), Point::new(204, 300));
    }

    #[test]
    fn test_copies_are_independent() {
        let anchor = Point::new(5, 5);
        let mut walker = anchor;
        walker.x += 104;
        assert_eq!(anchor, Point::new(5, 5));
        assert_eq!(walker, Point::new(109, 5));
    }
}
