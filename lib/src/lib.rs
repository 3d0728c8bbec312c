pub mod ffi;
pub mod point;

pub use point::Point;

/// x coordinate of the reference point used for distance to the origin.
pub const ORIGIN_X: i32 = 0;

/// y coordinate of the reference point used for distance to the origin.
pub const ORIGIN_Y: i32 = 0;
