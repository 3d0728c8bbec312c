//! C ABI exports, see `include/geometry.h`.
#![allow(non_snake_case)]

use crate::point::Point;
use log::warn;

/// Create a point from two coordinates.
#[no_mangle]
pub extern "C" fn createPoint(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Print `Point(x: %.2f, y: %.2f)` and a newline to standard output.
#[no_mangle]
pub extern "C" fn displayPoint(p: Point) {
    if let Err(err) = p.display() {
        warn!("Could not write point to stdout: {}", err);
    }
}

/// Euclidean distance from `p` to the origin.
#[no_mangle]
pub extern "C" fn distanceToOrigin(p: Point) -> f64 {
    p.distance_to_origin()
}

/// Add two points coordinate-wise.
#[no_mangle]
pub extern "C" fn addPoints(p1: Point, p2: Point) -> Point {
    p1 + p2
}
