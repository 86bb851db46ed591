// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering of a scene.
//!
//! World coordinates go through the [`Viewport`] into screen units, and screen units map onto
//! character cells of `CELL_WIDTH × CELL_HEIGHT`. Anything that lands outside the canvas is
//! dropped.

mod canvas;
mod text;

use crate::geometry::{Point, Rect};
use crate::scene::{FollowingEyes, Scene};
use crate::viewport::Viewport;

pub use canvas::{Canvas, CanvasError};

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Spacing of background grid dots, in world units.
pub const GRID_SPACING: f64 = 37.79;
/// The grid is hidden once the viewport zooms out past this.
pub const GRID_MAX_ZOOM: f64 = 0.8;

const GRID_DOT: char = '·';
const WAYPOINT: char = '•';

/// Something that can paint itself onto a [`Surface`].
pub trait Drawable {
    fn draw(&self, surface: &mut Surface<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub show_grid: bool,
    pub show_waypoints: bool,
}

/// A canvas seen through a viewport.
pub struct Surface<'a> {
    canvas: &'a mut Canvas,
    viewport: &'a Viewport,
}

impl<'a> Surface<'a> {
    pub fn new(canvas: &'a mut Canvas, viewport: &'a Viewport) -> Self {
        Self { canvas, viewport }
    }

    pub fn viewport(&self) -> &Viewport {
        self.viewport
    }

    /// Cell containing a world point. May be off-canvas.
    pub fn cell_of(&self, world: Point) -> (i64, i64) {
        let screen = self.viewport.world_to_screen(world);
        ((screen.x / CELL_WIDTH).floor() as i64, (screen.y / CELL_HEIGHT).floor() as i64)
    }

    pub fn outline(&mut self, rect: &Rect) {
        let (x0, y0) = self.cell_of(rect.top_left());
        let (x1, y1) = self.cell_of(rect.bottom_right());
        self.canvas.outline(x0, y0, x1, y1);
    }

    /// Centers `text` inside the box, shortened to fit. Boxes with no interior get no label.
    pub fn label(&mut self, rect: &Rect, text: &str) {
        let (x0, y0) = self.cell_of(rect.top_left());
        let (x1, y1) = self.cell_of(rect.bottom_right());
        if x1 - x0 < 2 || y1 - y0 < 2 {
            return;
        }

        let inner = usize::try_from(x1 - x0 - 1).unwrap_or(0);
        let fitted = text::fit_label(text, inner);
        let start = text::centered_start(x0 + 1, x1 - 1, text::text_len(&fitted));
        self.canvas.plot_str(start, y0 + (y1 - y0) / 2, &fitted);
    }

    /// Straight runs between consecutive points. Every pair must share an axis.
    pub fn polyline(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            debug_assert!(a.x == b.x || a.y == b.y, "off-axis segment {a} -> {b}");
            let (ax, ay) = self.cell_of(a);
            let (bx, by) = self.cell_of(b);
            if a.y == b.y {
                self.canvas.hline(ax, bx, ay);
            } else {
                self.canvas.vline(ax, ay, by);
            }
        }
    }

    pub fn marker(&mut self, world: Point, ch: char) {
        let (x, y) = self.cell_of(world);
        self.canvas.plot(x, y, ch);
    }

    fn grid(&mut self) {
        let width = self.canvas.width() as f64 * CELL_WIDTH;
        let height = self.canvas.height() as f64 * CELL_HEIGHT;
        let top_left = self.viewport.screen_to_world_panned(Point::ORIGIN);
        let bottom_right = self.viewport.screen_to_world_panned(Point::new(width, height));

        let first_col = (top_left.x / GRID_SPACING).ceil() as i64;
        let last_col = (bottom_right.x / GRID_SPACING).floor() as i64;
        let first_row = (top_left.y / GRID_SPACING).ceil() as i64;
        let last_row = (bottom_right.y / GRID_SPACING).floor() as i64;

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let dot = Point::new(col as f64 * GRID_SPACING, row as f64 * GRID_SPACING);
                self.marker(dot, GRID_DOT);
            }
        }
    }
}

/// Renders `scene` (and the optional eyes widget) onto a fresh `width × height` canvas.
///
/// Layers, bottom to top: grid, connectors, nodes, waypoint markers, eyes.
pub fn render_scene(
    scene: &Scene,
    eyes: Option<&FollowingEyes>,
    viewport: &Viewport,
    width: usize,
    height: usize,
    options: RenderOptions,
) -> Result<Canvas, CanvasError> {
    let mut canvas = Canvas::new(width, height)?;
    {
        let mut surface = Surface::new(&mut canvas, viewport);
        if options.show_grid && viewport.zoom() <= GRID_MAX_ZOOM {
            surface.grid();
        }
        for connector in scene.connectors() {
            connector.draw(&mut surface);
        }
        for node in scene.nodes() {
            node.draw(&mut surface);
        }
        if options.show_waypoints {
            for connector in scene.connectors() {
                for point in connector.route().points() {
                    surface.marker(*point, WAYPOINT);
                }
            }
        }
        if let Some(eyes) = eyes {
            eyes.draw(&mut surface);
        }
    }
    Ok(canvas)
}
