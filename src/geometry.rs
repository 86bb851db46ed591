// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plane geometry shared by the router, the scene and the renderer.
//!
//! Coordinates are world units (`f64`), y grows downwards. Point equality is exact: the router
//! relies on candidates sharing coordinates bit-for-bit, so no tolerance is applied anywhere in
//! this module.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed margin applied to the low-coordinate edge of an obstacle along the tested segment's
/// axis. The leading edges use the caller's clearance instead; the two only coincide at the
/// default clearance.
pub const TRAILING_EDGE_MARGIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|`; the router's step cost and heuristic.
    pub fn manhattan(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when the two points differ in exactly one coordinate.
    pub fn is_axis_aligned_with(self, other: Point) -> bool {
        (self.x == other.x) != (self.y == other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned node box: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same size, top-left corner moved to `top_left`.
    pub fn with_position(&self, top_left: Point) -> Self {
        Self { x: top_left.x, y: top_left.y, ..*self }
    }

    /// Grows the box by `amount` on every side.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    /// Edge-inclusive hit test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True when the interiors intersect with positive area. Boxes that merely share an edge
    /// or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Finite coordinates and a non-negative size.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RectParseError {
    #[error("expected `x,y,width,height`, got {count} component(s)")]
    ComponentCount { count: usize },
    #[error("invalid number `{raw}`")]
    InvalidNumber { raw: String },
}

impl FromStr for Rect {
    type Err = RectParseError;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != 4 {
            return Err(RectParseError::ComponentCount { count: parts.len() });
        }

        let mut values = [0.0f64; 4];
        for (slot, raw) in values.iter_mut().zip(&parts) {
            *slot = raw
                .parse::<f64>()
                .map_err(|_| RectParseError::InvalidNumber { raw: (*raw).to_owned() })?;
        }

        Ok(Rect::new(values[0], values[1], values[2], values[3]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is negative")]
    Negative,
}

/// Distance a route keeps from a node's border. Finite and non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Clearance(f64);

impl Clearance {
    pub const DEFAULT: Clearance = Clearance(30.0);

    pub fn try_new(value: f64) -> Result<Self, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else if value < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Self(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Clearance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for Clearance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Clearance::try_new(raw).map_err(serde::de::Error::custom)
    }
}

/// A straight segment between two points. Callers in this crate only build horizontal or
/// vertical segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// Crossing point of a horizontal and a vertical segment.
///
/// The crossing is taken on the supporting lines: the result is `(vertical.x, horizontal.y)`
/// whether or not it lies within both segments' extents. Parallel pairs (including
/// zero-length segments, which count as both) yield `None`.
pub fn segment_intersection(a: Segment, b: Segment) -> Option<Point> {
    if (a.is_vertical() && b.is_vertical()) || (a.is_horizontal() && b.is_horizontal()) {
        return None;
    }
    if a.is_horizontal() && b.is_vertical() {
        return Some(Point::new(b.start.x, a.start.y));
    }
    if a.is_vertical() && b.is_horizontal() {
        return Some(Point::new(a.start.x, b.start.y));
    }
    None
}

/// Corners of the smallest axis-aligned box containing `points`, ordered
/// `(minX,minY), (maxX,minY), (minX,maxY), (maxX,maxY)`.
pub fn bounding_box_corners(points: &[Point]) -> Option<[Point; 4]> {
    let first = points.first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    Some([
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(min_x, max_y),
        Point::new(max_x, max_y),
    ])
}

/// Whether the horizontal or vertical segment `a → b` cuts through `rect` grown by the
/// clearance.
///
/// Along the segment's own axis the low edge of the obstacle is grown by
/// [`TRAILING_EDGE_MARGIN`] instead of the clearance. Comparisons are strict, so a segment
/// running exactly on the grown border is not blocked. Diagonal segments never are.
pub fn segment_blocked_by_rect(a: Point, b: Point, rect: &Rect, clearance: Clearance) -> bool {
    let c = clearance.get();
    let min_x = a.x.min(b.x);
    let max_x = a.x.max(b.x);
    let min_y = a.y.min(b.y);
    let max_y = a.y.max(b.y);

    if a.y == b.y {
        min_y > rect.y - c
            && min_y < rect.bottom() + c
            && min_x < rect.right() + c
            && max_x > rect.x - TRAILING_EDGE_MARGIN
    } else if a.x == b.x {
        min_x > rect.x - c
            && min_x < rect.right() + c
            && min_y < rect.bottom() + c
            && max_y > rect.y - TRAILING_EDGE_MARGIN
    } else {
        false
    }
}
