// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character grid with box-drawing junction merging.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);
    const ALL: Self = Self(0b1111);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Box-drawing glyph for each edge combination, indexed by the `BoxEdges` bits
/// (left = 1, right = 2, up = 4, down = 8).
const GLYPHS: [char; 16] = [
    ' ', '─', '─', '─', '│', '┘', '└', '┴', '│', '┐', '┌', '┬', '│', '┤', '├', '┼',
];

fn edges_of(ch: char) -> Option<BoxEdges> {
    let bits = match ch {
        '─' => 0b0011,
        '│' => 0b1100,
        '┘' => 0b0101,
        '└' => 0b0110,
        '┴' => 0b0111,
        '┐' => 0b1001,
        '┌' => 0b1010,
        '┬' => 0b1011,
        '┤' => 0b1101,
        '├' => 0b1110,
        '┼' => 0b1111,
        _ => return None,
    };
    Some(BoxEdges(bits))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

/// A fixed-size character grid.
///
/// Plain characters overwrite whatever is in a cell. Box-drawing characters accumulate edges
/// instead, and each cell renders with only the edges that its neighbors connect to, so crossing
/// lines become junctions and line ends become corners.
///
/// The `usize` methods are bounds-checked; the `i64` drawing methods clip silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    edges: Vec<BoxEdges>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match edges_of(ch) {
            Some(edges) => self.edges[idx] = self.edges[idx].union(edges),
            None => {
                self.cells[idx] = ch;
                self.edges[idx] = BoxEdges::NONE;
            }
        }
        Ok(())
    }

    /// Writes `text` from `(x, y)`, clipped at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.set(col, y, ch)?;
        }
        Ok(())
    }

    /// Sets a cell given signed coordinates; returns `false` when the cell is off-canvas.
    pub fn plot(&mut self, x: i64, y: i64, ch: char) -> bool {
        match self.clip_cell(x, y) {
            Some((x, y)) => self.set(x, y, ch).is_ok(),
            None => false,
        }
    }

    /// Writes `text` starting at a signed position, dropping characters that fall off-canvas.
    pub fn plot_str(&mut self, x: i64, y: i64, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.plot(x.saturating_add(offset as i64), y, ch);
        }
    }

    /// Horizontal line over `x0..=x1` on row `y`, clipped to the canvas.
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64) {
        let Some(row) = clip_axis(y, self.height) else {
            return;
        };
        if let Some((from, to)) = clip_span(x0, x1, self.width) {
            for x in from..=to {
                let idx = row * self.width + x;
                self.edges[idx] = self.edges[idx].union(BoxEdges::LEFT.union(BoxEdges::RIGHT));
            }
        }
    }

    /// Vertical line over `y0..=y1` in column `x`, clipped to the canvas.
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64) {
        let Some(col) = clip_axis(x, self.width) else {
            return;
        };
        if let Some((from, to)) = clip_span(y0, y1, self.height) {
            for y in from..=to {
                let idx = y * self.width + col;
                self.edges[idx] = self.edges[idx].union(BoxEdges::UP.union(BoxEdges::DOWN));
            }
        }
    }

    /// Outline of the cell rectangle spanned by the two corners, clipped to the canvas.
    pub fn outline(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        if min_x == max_x && min_y == max_y {
            if let Some((x, y)) = self.clip_cell(min_x, min_y) {
                let idx = y * self.width + x;
                self.edges[idx] = BoxEdges::ALL;
            }
            return;
        }
        self.hline(min_x, max_x, min_y);
        self.hline(min_x, max_x, max_y);
        self.vline(min_x, min_y, max_y);
        self.vline(max_x, min_y, max_y);
    }

    fn clip_cell(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        Some((clip_axis(x, self.width)?, clip_axis(y, self.height)?))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }

    fn render_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }
        let connected = self.connected_edges(x, y, edges);
        GLYPHS[usize::from(if connected.is_empty() { edges.0 } else { connected.0 })]
    }

    fn connected_edges(&self, x: usize, y: usize, edges: BoxEdges) -> BoxEdges {
        let neighbor = |dx: isize, dy: isize| -> BoxEdges {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
                return BoxEdges::NONE;
            }
            self.edges[ny as usize * self.width + nx as usize]
        };

        let mut connected = BoxEdges::NONE;
        let sides = [
            (BoxEdges::LEFT, BoxEdges::RIGHT, -1, 0),
            (BoxEdges::RIGHT, BoxEdges::LEFT, 1, 0),
            (BoxEdges::UP, BoxEdges::DOWN, 0, -1),
            (BoxEdges::DOWN, BoxEdges::UP, 0, 1),
        ];
        for (side, facing, dx, dy) in sides {
            if edges.contains(side) && neighbor(dx, dy).contains(facing) {
                connected = connected.union(side);
            }
        }
        connected
    }

    /// Rows with trailing blanks and trailing empty rows removed.
    pub fn to_trimmed_string(&self) -> String {
        let mut lines = (0..self.height)
            .map(|y| {
                let row = (0..self.width)
                    .map(|x| self.render_at(x, y, y * self.width + x))
                    .collect::<String>();
                row.trim_end_matches(' ').to_owned()
            })
            .collect::<Vec<_>>();
        while matches!(lines.last(), Some(line) if line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

fn clip_axis(v: i64, len: usize) -> Option<usize> {
    usize::try_from(v).ok().filter(|v| *v < len)
}

fn clip_span(a: i64, b: i64, len: usize) -> Option<(usize, usize)> {
    let (lo, hi) = (a.min(b), a.max(b));
    let last = i64::try_from(len).ok()?.checked_sub(1)?;
    if hi < 0 || lo > last {
        return None;
    }
    Some((lo.max(0) as usize, hi.min(last) as usize))
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.render_at(x, y, y * self.width + x))?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
