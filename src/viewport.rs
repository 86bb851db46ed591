// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pan/zoom mapping between screen units and world units.
//!
//! `screen = center + (world + offset + pan) / zoom`, so a larger zoom shows more of the world.

use crate::geometry::Point;

pub const ZOOM_STEP: f64 = 0.1;
pub const ZOOM_FLOOR: f64 = 0.1;
pub const ZOOM_CEILING: f64 = 10.0;

/// An in-progress pan gesture, in raw world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pan {
    pub start: Point,
    pub end: Point,
    pub offset: Point,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: Point,
    offset: Point,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    pan: Pan,
}

impl Viewport {
    /// A viewport for a `width × height` screen, world origin at its center.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            offset: Point::ORIGIN,
            zoom: 1.0,
            min_zoom: ZOOM_FLOOR,
            max_zoom: ZOOM_CEILING,
            pan: Pan::default(),
        }
    }

    /// Sets the zoom bounds. They are still clamped to `[0.1, 10]` when zooming.
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> &Pan {
        &self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.pan.active
    }

    /// Recenters on a resized screen; pan offset and zoom are kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.center = Point::new(width / 2.0, height / 2.0);
    }

    /// Back to zoom 1 with no offset.
    pub fn reset(&mut self) {
        self.offset = Point::ORIGIN;
        self.zoom = 1.0;
        self.pan = Pan::default();
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        self.center + (world + self.offset + self.pan.offset) * (1.0 / self.zoom)
    }

    /// Maps a screen position to world units, ignoring any pan in progress.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        (screen - self.center) * self.zoom - self.offset
    }

    /// Exact inverse of [`Viewport::world_to_screen`], including an in-progress pan.
    pub fn screen_to_world_panned(&self, screen: Point) -> Point {
        self.screen_to_world(screen) - self.pan.offset
    }

    pub fn begin_pan(&mut self, screen: Point) {
        let start = self.screen_to_world(screen);
        self.pan = Pan { start, end: start, offset: Point::ORIGIN, active: true };
    }

    pub fn update_pan(&mut self, screen: Point) {
        if !self.pan.active {
            return;
        }
        self.pan.end = self.screen_to_world(screen);
        self.pan.offset = self.pan.end - self.pan.start;
    }

    /// Folds the gesture into the permanent offset.
    pub fn end_pan(&mut self) {
        if !self.pan.active {
            return;
        }
        self.offset = self.offset + self.pan.offset;
        self.pan = Pan::default();
    }

    /// Steps the zoom by `0.1` in the direction of `direction`'s sign.
    pub fn zoom_by(&mut self, direction: f64) {
        let step = if direction > 0.0 {
            ZOOM_STEP
        } else if direction < 0.0 {
            -ZOOM_STEP
        } else {
            0.0
        };
        let min = self.min_zoom.max(ZOOM_FLOOR);
        let max = self.max_zoom.min(ZOOM_CEILING);
        self.zoom = (self.zoom + step).min(max).max(min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn origin_maps_to_screen_center() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.world_to_screen(Point::ORIGIN), Point::new(400.0, 300.0));
        assert_eq!(viewport.screen_to_world(Point::new(400.0, 300.0)), Point::ORIGIN);
    }

    #[test]
    fn mapping_round_trips_with_zoom_offset_and_pan() {
        let mut viewport = Viewport::new(800.0, 600.0);
        viewport.zoom_by(1.0);
        viewport.zoom_by(1.0);
        viewport.begin_pan(Point::new(100.0, 100.0));
        viewport.update_pan(Point::new(160.0, 80.0));

        let world = Point::new(-123.0, 45.5);
        let screen = viewport.world_to_screen(world);
        assert!(approx(viewport.screen_to_world_panned(screen), world));
        assert!(!approx(viewport.screen_to_world(screen), world));
    }

    #[test]
    fn pan_folds_into_offset_on_release() {
        let mut viewport = Viewport::new(200.0, 200.0);
        viewport.begin_pan(Point::new(100.0, 100.0));
        viewport.update_pan(Point::new(130.0, 90.0));
        assert!(viewport.is_panning());
        assert_eq!(viewport.pan().offset, Point::new(30.0, -10.0));

        viewport.end_pan();
        assert!(!viewport.is_panning());
        assert_eq!(viewport.offset(), Point::new(30.0, -10.0));
        assert_eq!(viewport.world_to_screen(Point::ORIGIN), Point::new(130.0, 90.0));
    }

    #[test]
    fn update_without_active_pan_is_ignored() {
        let mut viewport = Viewport::new(200.0, 200.0);
        viewport.update_pan(Point::new(10.0, 10.0));
        viewport.end_pan();
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut viewport = Viewport::new(100.0, 100.0).with_zoom_limits(0.5, 1.2);
        for _ in 0..20 {
            viewport.zoom_by(-3.0);
        }
        assert!((viewport.zoom() - 0.5).abs() < 1e-9);
        for _ in 0..20 {
            viewport.zoom_by(0.01);
        }
        assert!((viewport.zoom() - 1.2).abs() < 1e-9);
        viewport.zoom_by(0.0);
        assert!((viewport.zoom() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn zoom_limits_never_exceed_hard_bounds() {
        let mut viewport = Viewport::new(100.0, 100.0).with_zoom_limits(0.0, 50.0);
        for _ in 0..200 {
            viewport.zoom_by(1.0);
        }
        assert!((viewport.zoom() - ZOOM_CEILING).abs() < 1e-9);
        for _ in 0..200 {
            viewport.zoom_by(-1.0);
        }
        assert!((viewport.zoom() - ZOOM_FLOOR).abs() < 1e-9);
    }

    #[test]
    fn resize_recenters_and_reset_restores_defaults() {
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.zoom_by(1.0);
        viewport.resize(300.0, 100.0);
        assert_eq!(viewport.center(), Point::new(150.0, 50.0));
        viewport.reset();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }
}
