// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Waypoint candidates for a two-box route.

use serde::{Deserialize, Serialize};

use crate::geometry::{bounding_box_corners, segment_intersection, Clearance, Point, Rect, Segment};

use super::RouteOptions;

/// Length of the short probe segments used when the two approach stubs are parallel.
const PROBE_LENGTH: f64 = 10.0;

/// Border edge a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    /// Midpoint of the anchor's edge.
    pub fn connection_point(self, rect: &Rect) -> Point {
        match self {
            Anchor::Top => Point::new(rect.x + rect.width / 2.0, rect.y),
            Anchor::Bottom => Point::new(rect.x + rect.width / 2.0, rect.bottom()),
            Anchor::Left => Point::new(rect.x, rect.y + rect.height / 2.0),
            Anchor::Right => Point::new(rect.right(), rect.y + rect.height / 2.0),
        }
    }

    /// Connection point pushed outward along the edge normal.
    pub fn offset_point(self, rect: &Rect, clearance: Clearance) -> Point {
        self.connection_point(rect) + self.outward() * clearance.get()
    }

    fn outward(self) -> Point {
        match self {
            Anchor::Top => Point::new(0.0, -1.0),
            Anchor::Bottom => Point::new(0.0, 1.0),
            Anchor::Left => Point::new(-1.0, 0.0),
            Anchor::Right => Point::new(1.0, 0.0),
        }
    }
}

/// Where a route attaches to both boxes and where its search starts and ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub from_connection: Point,
    pub from_offset: Point,
    pub to_connection: Point,
    pub to_offset: Point,
}

impl Endpoints {
    pub fn new(from: &Rect, to: &Rect, options: &RouteOptions) -> Self {
        Self {
            from_connection: options.from_anchor.connection_point(from),
            from_offset: options.from_anchor.offset_point(from, options.clearance),
            to_connection: options.to_anchor.connection_point(to),
            to_offset: options.to_anchor.offset_point(to, options.clearance),
        }
    }

    fn from_approach(&self) -> Segment {
        Segment::new(self.from_connection, self.from_offset)
    }

    fn to_approach(&self) -> Segment {
        Segment::new(self.to_connection, self.to_offset)
    }
}

/// Unique waypoints in insertion order.
///
/// Uniqueness is exact coordinate equality; the first occurrence of a point keeps its slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    points: Vec<Point>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `point` unless an equal point is already present. Returns whether it was added.
    pub fn insert(&mut self, point: Point) -> bool {
        if self.contains(point) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.iter().any(|p| *p == point)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl Extend<Point> for CandidateSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

/// Candidate waypoints for routing `from → to` with `options`.
pub fn candidate_points(from: &Rect, to: &Rect, options: &RouteOptions) -> CandidateSet {
    generate(from, to, &Endpoints::new(from, to, options), options.clearance)
}

pub(crate) fn generate(from: &Rect, to: &Rect, ends: &Endpoints, clearance: Clearance) -> CandidateSet {
    let c = clearance.get();
    let mut set = CandidateSet::new();
    set.insert(ends.from_offset);
    set.insert(ends.to_offset);

    for rect in [from, to] {
        let hull = [
            ends.from_offset,
            ends.to_offset,
            rect.top_left() - Point::new(c, c),
            rect.bottom_right() + Point::new(c, c),
        ];
        if let Some(corners) = bounding_box_corners(&hull) {
            set.extend(corners);
        }
    }

    match segment_intersection(ends.from_approach(), ends.to_approach()) {
        Some(crossing) => {
            set.insert(crossing);
        }
        None => {
            let horizontal = Point::new(PROBE_LENGTH, 0.0);
            let vertical = Point::new(0.0, PROBE_LENGTH);
            let probes = [
                (ends.from_approach(), Segment::new(ends.to_offset, ends.to_offset + horizontal)),
                (ends.from_approach(), Segment::new(ends.to_offset, ends.to_offset + vertical)),
                (ends.to_approach(), Segment::new(ends.from_offset, ends.from_offset + horizontal)),
                (ends.to_approach(), Segment::new(ends.from_offset, ends.from_offset + vertical)),
            ];
            set.extend(probes.into_iter().filter_map(|(a, b)| segment_intersection(a, b)));
        }
    }

    set
}
