// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Orthogonal connector routing between two boxes.
//!
//! A route leaves `from` at its anchor, steps out by the clearance, travels through a small set
//! of candidate waypoints (see [`candidates`]) and re-enters `to` the same way. Only the two
//! endpoint boxes are obstacles. Failure to find a path is an empty [`Route`], never an error.
//!
//! Every call is pure: nothing is cached between calls, so routing is safe from any thread.

pub mod candidates;
pub mod search;


use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::geometry::{Clearance, Point, Rect};

pub use candidates::{candidate_points, Anchor, CandidateSet, Endpoints};
pub use search::{SearchMode, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteOptions {
    pub clearance: Clearance,
    pub strategy: Strategy,
    pub mode: SearchMode,
    pub from_anchor: Anchor,
    pub to_anchor: Anchor,
}

impl RouteOptions {
    pub fn with_clearance(mut self, clearance: Clearance) -> Self {
        self.clearance = clearance;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_anchors(mut self, from: Anchor, to: Anchor) -> Self {
        self.from_anchor = from;
        self.to_anchor = to;
        self
    }
}

/// Ordered polyline from the `from` connection point to the `to` connection point.
///
/// Consecutive points differ in exactly one coordinate. An empty route means no path was found.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Sum of the Manhattan lengths of all segments.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.manhattan(b)).sum()
    }

    pub fn is_orthogonal(&self) -> bool {
        self.segments().all(|(a, b)| a.is_axis_aligned_with(b))
    }

    /// Drops interior points where the polyline keeps going in the same direction.
    pub fn compress(&self) -> Route {
        if self.points.len() <= 2 {
            return self.clone();
        }

        let direction = |a: Point, b: Point| (sign(b.x - a.x), sign(b.y - a.y));
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);

        let mut prev_dir = direction(self.points[0], self.points[1]);
        for idx in 1..self.points.len() - 1 {
            let dir = direction(self.points[idx], self.points[idx + 1]);
            if dir != prev_dir {
                points.push(self.points[idx]);
                prev_dir = dir;
            }
        }

        if let Some(last) = self.points.last() {
            points.push(*last);
        }
        Route { points }
    }
}

/// Routes with the A* strategy between the top-edge midpoints of both boxes.
pub fn compute_route(from: &Rect, to: &Rect, clearance: Clearance, relaxed: bool) -> Route {
    let mode = if relaxed { SearchMode::Relaxed } else { SearchMode::Strict };
    route_with(from, to, &RouteOptions::default().with_clearance(clearance).with_mode(mode))
}

pub fn route_with(from: &Rect, to: &Rect, options: &RouteOptions) -> Route {
    let ends = Endpoints::new(from, to, options);
    if !is_routable(from, to, &ends) {
        debug!(%from, %to, "skipping degenerate box pair");
        return Route::empty();
    }

    let candidates = candidates::generate(from, to, &ends, options.clearance);
    let obstacles = search::Obstacles::new(from, to, options.clearance, options.mode);
    let path = search::find_path(
        options.strategy,
        ends.from_offset,
        ends.to_offset,
        candidates.points(),
        &obstacles,
    );

    debug!(
        candidates = candidates.len(),
        path = path.len(),
        strategy = options.strategy.as_str(),
        mode = ?options.mode,
        "routed connector"
    );
    assemble(&ends, &path)
}

/// Strict routing, retried in relaxed mode when the strict search finds nothing. Returns the
/// route together with the mode that produced it.
pub fn route_with_fallback_mode(from: &Rect, to: &Rect, options: &RouteOptions) -> (Route, SearchMode) {
    let strict = route_with(from, to, &options.with_mode(SearchMode::Strict));
    if !strict.is_empty() {
        return (strict, SearchMode::Strict);
    }

    let relaxed = route_with(from, to, &options.with_mode(SearchMode::Relaxed));
    if !relaxed.is_empty() {
        warn!(%from, %to, "strict routing failed, using relaxed route");
    }
    (relaxed, SearchMode::Relaxed)
}

pub fn route_with_fallback(from: &Rect, to: &Rect, options: &RouteOptions) -> Route {
    route_with_fallback_mode(from, to, options).0
}

/// Routes every pair on the rayon pool. Output order matches `requests`.
pub fn route_batch(requests: &[(Rect, Rect)], options: &RouteOptions) -> Vec<Route> {
    requests.par_iter().map(|(from, to)| route_with(from, to, options)).collect()
}

/// Overlapping or identical boxes, and boxes sharing a connection point, have nothing to route.
fn is_routable(from: &Rect, to: &Rect, ends: &Endpoints) -> bool {
    from.is_well_formed()
        && to.is_well_formed()
        && from != to
        && !from.overlaps(to)
        && ends.from_connection != ends.to_connection
}

/// Like `f64::signum`, but zero stays zero.
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn assemble(ends: &Endpoints, path: &[Point]) -> Route {
    if path.is_empty() {
        return Route::empty();
    }

    let mut points: Vec<Point> = Vec::with_capacity(path.len() + 2);
    let full = std::iter::once(ends.from_connection)
        .chain(path.iter().copied())
        .chain(std::iter::once(ends.to_connection));
    for point in full {
        if points.last() != Some(&point) {
            points.push(point);
        }
    }
    Route { points }
}
