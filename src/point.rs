//! Scenery coordinates.

use std::ops;

use serde::{Deserialize, Serialize};

/// A point on the scenery, in scene pixels.
///
/// The origin is the top left corner, X grows to the right and Y downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn add(p1: Point, p2: Point) -> Point {
    Point::new(p1.x + p2.x, p1.y + p2.y)
}

impl ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_coordinates() {
        assert_eq!(add(Point::new(1.0, 2.0), Point::new(3.0, 4.0)), Point::new(4.0, 6.0));
    }

    #[test]
    fn addition_is_commutative_and_associative() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(0.25, 8.0);
        let c = Point::new(-3.0, 0.5);
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn decodes_uppercase_keys() {
        let p: Point = serde_json::from_str(r#"{"X": 10.0, "Y": -4.5}"#).unwrap();
        assert_eq!(p, Point::new(10.0, -4.5));
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"X":10.0,"Y":-4.5}"#);
    }
}
