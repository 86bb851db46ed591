// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Path search over the implicit candidate graph.
//!
//! Two candidates are adjacent when they share a coordinate and no other unblocked candidate
//! lies between them on that line. Both strategies expand neighbors in the same order (left,
//! right, up, down), which keeps results deterministic for a given candidate order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::geometry::{segment_blocked_by_rect, Clearance, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "dfs")]
    DepthFirst,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::AStar => "astar",
            Strategy::DepthFirst => "dfs",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Strategy::AStar => Strategy::DepthFirst,
            Strategy::DepthFirst => Strategy::AStar,
        }
    }
}

/// Whether edges through an obstacle are rejected (`Strict`) or allowed (`Relaxed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Strict,
    Relaxed,
}

/// The two endpoint boxes, as seen by the edge filter.
#[derive(Debug, Clone, Copy)]
pub struct Obstacles<'a> {
    rects: [&'a Rect; 2],
    clearance: Clearance,
    mode: SearchMode,
}

impl<'a> Obstacles<'a> {
    pub fn new(from: &'a Rect, to: &'a Rect, clearance: Clearance, mode: SearchMode) -> Self {
        Self { rects: [from, to], clearance, mode }
    }

    pub fn blocks(&self, a: Point, b: Point) -> bool {
        self.mode == SearchMode::Strict
            && self
                .rects
                .iter()
                .any(|rect| segment_blocked_by_rect(a, b, rect, self.clearance))
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn of(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    fn cross(self, p: Point) -> f64 {
        match self {
            Axis::X => p.y,
            Axis::Y => p.x,
        }
    }
}

/// Nearest reachable candidates on each side of `current` along `axis`, lower side first.
fn nearest_along(
    current: Point,
    candidates: &[Point],
    axis: Axis,
    obstacles: &Obstacles<'_>,
    out: &mut SmallVec<[Point; 4]>,
) {
    let here = axis.of(current);
    let mut before: Option<Point> = None;
    let mut after: Option<Point> = None;

    for &candidate in candidates {
        if axis.cross(candidate) != axis.cross(current) || candidate == current {
            continue;
        }
        if obstacles.blocks(current, candidate) {
            continue;
        }
        let value = axis.of(candidate);
        if value < here {
            if before.map_or(true, |b| value > axis.of(b)) {
                before = Some(candidate);
            }
        } else if value > here && after.map_or(true, |a| value < axis.of(a)) {
            after = Some(candidate);
        }
    }

    out.extend(before);
    out.extend(after);
}

/// Axis-aligned neighbors of `current`: left, right, up, down.
pub fn neighbors(
    current: Point,
    candidates: &[Point],
    obstacles: &Obstacles<'_>,
) -> SmallVec<[Point; 4]> {
    let mut out = SmallVec::new();
    nearest_along(current, candidates, Axis::X, obstacles, &mut out);
    nearest_along(current, candidates, Axis::Y, obstacles, &mut out);
    out
}

pub fn find_path(
    strategy: Strategy,
    start: Point,
    goal: Point,
    candidates: &[Point],
    obstacles: &Obstacles<'_>,
) -> Vec<Point> {
    match strategy {
        Strategy::AStar => astar(start, goal, candidates, obstacles),
        Strategy::DepthFirst => depth_first(start, goal, candidates, obstacles),
    }
}

struct SearchNode {
    point: Point,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<usize>,
    closed: bool,
}

/// Best-first search with a Manhattan heuristic. Returns `start ..= goal` or an empty path.
pub fn astar(start: Point, goal: Point, candidates: &[Point], obstacles: &Obstacles<'_>) -> Vec<Point> {
    let h = start.manhattan(goal);
    let mut arena = vec![SearchNode { point: start, g: 0.0, h, f: h, parent: None, closed: false }];
    let mut open: Vec<usize> = vec![0];
    let mut expansions = 0usize;

    while let Some(pos) = best_open(&open, &arena) {
        let current = open[pos];
        if arena[current].point == goal {
            trace!(expansions, "astar reached goal");
            return reconstruct(&arena, current);
        }

        open.remove(pos);
        arena[current].closed = true;
        expansions += 1;

        let point = arena[current].point;
        let g = arena[current].g;
        for neighbor in neighbors(point, candidates, obstacles) {
            let tentative = g + point.manhattan(neighbor);
            match arena.iter().position(|node| node.point == neighbor) {
                Some(idx) if arena[idx].closed => {}
                Some(idx) => {
                    if tentative < arena[idx].g {
                        let node = &mut arena[idx];
                        node.g = tentative;
                        node.f = tentative + node.h;
                        node.parent = Some(current);
                    }
                }
                None => {
                    let h = neighbor.manhattan(goal);
                    arena.push(SearchNode {
                        point: neighbor,
                        g: tentative,
                        h,
                        f: tentative + h,
                        parent: Some(current),
                        closed: false,
                    });
                    open.push(arena.len() - 1);
                }
            }
        }
    }

    trace!(expansions, "astar exhausted open list");
    Vec::new()
}

/// Position in `open` of the first node with the smallest `f`.
fn best_open(open: &[usize], arena: &[SearchNode]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (pos, &idx) in open.iter().enumerate() {
        match best {
            Some(b) if arena[idx].f >= arena[open[b]].f => {}
            _ => best = Some(pos),
        }
    }
    best
}

fn reconstruct(arena: &[SearchNode], goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(idx) = cursor {
        path.push(arena[idx].point);
        cursor = arena[idx].parent;
    }
    path.reverse();
    path
}

/// Exhaustive depth-first search. Returns the first complete path in expansion order.
pub fn depth_first(
    start: Point,
    goal: Point,
    candidates: &[Point],
    obstacles: &Obstacles<'_>,
) -> Vec<Point> {
    let mut path = Vec::new();
    if visit(start, goal, candidates, obstacles, &mut path) {
        path
    } else {
        Vec::new()
    }
}

// `path` doubles as the visited set: a point is on it exactly while it is being explored.
fn visit(
    current: Point,
    goal: Point,
    candidates: &[Point],
    obstacles: &Obstacles<'_>,
    path: &mut Vec<Point>,
) -> bool {
    if current == goal {
        path.push(current);
        return true;
    }
    if path.contains(&current) {
        return false;
    }

    path.push(current);
    for next in neighbors(current, candidates, obstacles) {
        if visit(next, goal, candidates, obstacles, path) {
            return true;
        }
    }
    path.pop();
    false
}
