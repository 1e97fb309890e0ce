//! Degree-based geometry shared by the engine and behaviors.
//!
//! Headings are whole degrees. Heading 0 moves toward +y and heading 90
//! moves toward +x, so a heading `h` advances a body by
//! `(sin h, cos h) * distance`.

use std::f64::consts::PI;

use crate::enums::BearingConvention;
use crate::types::Position;

/// Heading (degrees, `[0, 360)`) that moves `from` straight toward `to`.
pub fn bearing(from: &Position, to: &Position) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dx.atan2(dy) * 180.0 / PI).rem_euclid(360.0)
}

/// Mathematical angle from `from` to `to` rotated by 180 degrees.
/// Yields `[0, 360]`; kept for behaviors written against that mapping.
pub fn legacy_bearing(from: &Position, to: &Position) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dy.atan2(dx) + PI) * 360.0 / (2.0 * PI)
}

/// Bearing under the given convention, in whole degrees.
pub fn bearing_degrees(from: &Position, to: &Position, convention: BearingConvention) -> i32 {
    let raw = match convention {
        BearingConvention::Compass => bearing(from, to),
        BearingConvention::Legacy => legacy_bearing(from, to),
    };
    whole_degrees(raw)
}

/// Round an angle to whole degrees in `0..=359`.
pub fn whole_degrees(degrees: f64) -> i32 {
    normalize_degrees(degrees.round() as i32)
}

/// Wrap any integer angle into `0..=359`.
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Clamp an integer angle into `0..=359`.
pub fn clamp_degrees(degrees: i32) -> i32 {
    degrees.clamp(0, 359)
}

/// Smallest absolute difference between two headings (`0..=180`).
pub fn angular_offset(a: i32, b: i32) -> i32 {
    let diff = (a - b).rem_euclid(360);
    diff.min(360 - diff)
}

/// The opposite heading.
pub fn reciprocal_degrees(degrees: i32) -> i32 {
    normalize_degrees(degrees + 180)
}

/// Integer Euclidean distance between two grid points (truncated).
pub fn distance(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    let dx = i64::from(x1) - i64::from(x2);
    let dy = i64::from(y1) - i64::from(y2);
    ((dx * dx + dy * dy) as f64).sqrt() as i32
}

/// Integer square root of `|n|`.
pub fn isqrt(n: i32) -> i32 {
    f64::from(n.unsigned_abs()).sqrt() as i32
}

pub fn sin_deg(degrees: i32) -> f64 {
    f64::from(degrees).to_radians().sin()
}

pub fn cos_deg(degrees: i32) -> f64 {
    f64::from(degrees).to_radians().cos()
}

pub fn tan_deg(degrees: i32) -> f64 {
    f64::from(degrees).to_radians().tan()
}

/// Arc tangent of `ratio`, rounded to whole degrees in `-90..=90`.
pub fn atan_deg(ratio: f64) -> i32 {
    ratio.atan().to_degrees().round() as i32
}
