// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared deterministic benchmark fixtures (no RNG crate).

use tether::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// The demo layout: A lower left, B upper right.
    Demo,
    /// Boxes sharing an edge.
    Touching,
    /// `to` directly below `from`, so the route has to wrap around.
    Stacked,
    /// Far apart with a large size mismatch.
    Distant,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Demo, Case::Touching, Case::Stacked, Case::Distant];

    pub fn id(self) -> &'static str {
        match self {
            Case::Demo => "demo",
            Case::Touching => "touching",
            Case::Stacked => "stacked",
            Case::Distant => "distant",
        }
    }

    pub fn pair(self) -> (Rect, Rect) {
        match self {
            Case::Demo => (Rect::new(-250.0, 44.0, 100.0, 100.0), Rect::new(100.0, -50.0, 100.0, 100.0)),
            Case::Touching => (Rect::new(0.0, 0.0, 100.0, 100.0), Rect::new(100.0, 0.0, 100.0, 100.0)),
            Case::Stacked => (Rect::new(0.0, 0.0, 120.0, 60.0), Rect::new(10.0, 200.0, 80.0, 40.0)),
            Case::Distant => (Rect::new(-4000.0, 3000.0, 20.0, 20.0), Rect::new(2500.0, -1800.0, 600.0, 300.0)),
        }
    }
}

/// `count` well-separated pairs from a fixed linear congruential sequence.
pub fn batch(count: usize) -> Vec<(Rect, Rect)> {
    let mut state: u64 = 0x7e7e_5eed;
    let mut next = move |span: f64| {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as f64 / (1u64 << 31) as f64) * span
    };

    (0..count)
        .map(|_| {
            let from = Rect::new(next(400.0) - 200.0, next(400.0) - 200.0, 20.0 + next(150.0), 20.0 + next(150.0));
            // Shift `to` past `from` on a random side so the pair never overlaps.
            let gap = 40.0 + next(300.0);
            let to = if next(1.0) < 0.5 {
                Rect::new(from.right() + gap, from.y + next(200.0) - 100.0, 20.0 + next(150.0), 20.0 + next(150.0))
            } else {
                Rect::new(from.x + next(200.0) - 100.0, from.bottom() + gap, 20.0 + next(150.0), 20.0 + next(150.0))
            };
            (from, to)
        })
        .collect()
}
