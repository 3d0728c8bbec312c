use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use crate::{ORIGIN_X, ORIGIN_Y};

/// A point in the plane.
///
/// The layout is fixed to `x` followed by `y`, both `f64`, so the type can
/// cross the C boundary by value.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(ORIGIN_X as f64, ORIGIN_Y as f64);

    /// Any `f64` is accepted, including NaN and infinities.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let xs = self.x - other.x;
        let ys = self.y - other.y;
        ((xs * xs) + (ys * ys)).sqrt()
    }

    pub fn distance_to_origin(&self) -> f64 {
        self.distance(&Point::ORIGIN)
    }

    /// Write the point followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Print the point to standard output.
    pub fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Two decimal places, spelled the way C's `%.2f` spells them.
pub struct Fixed2(pub f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            let sign = if self.0.is_sign_negative() { "-" } else { "" };
            write!(f, "{}nan", sign)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x: {}, y: {})", Fixed2(self.x), Fixed2(self.y))
    }
}
