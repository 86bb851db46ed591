// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! A pair of eyes whose pupils follow the pointer.

use std::f64::consts::TAU;

use crate::geometry::Point;
use crate::render::{Drawable, Surface};

pub const PUPIL_RADIUS: f64 = 10.0;
pub const EYEBALL_RADIUS: f64 = 20.0;
pub const EYE_SPACING: f64 = 45.0;

const RIM_SAMPLES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Eye {
    center: Point,
    pupil: Point,
}

impl Eye {
    fn at(center: Point) -> Self {
        Self { center, pupil: center }
    }

    fn look_at(&mut self, target: Point) {
        let delta = target - self.center;
        let reach = self.center.distance(target).min(PUPIL_RADIUS);
        let angle = delta.y.atan2(delta.x);
        self.pupil = self.center + Point::new(angle.cos(), angle.sin()) * reach;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowingEyes {
    left: Eye,
    right: Eye,
}

impl FollowingEyes {
    /// Eyes centered around `anchor`, `EYE_SPACING` apart.
    pub fn new(anchor: Point) -> Self {
        let half = Point::new(EYE_SPACING / 2.0, 0.0);
        Self { left: Eye::at(anchor - half), right: Eye::at(anchor + half) }
    }

    /// Parks the eyes near the top-left of a `width × height` screen at zoom 1.
    pub fn for_screen(width: f64, height: f64) -> Self {
        Self::new(Point::new(-(width / 2.5) - EYEBALL_RADIUS, -(height / 2.5)))
    }

    pub fn follow(&mut self, pointer: Point) {
        self.left.look_at(pointer);
        self.right.look_at(pointer);
    }

    pub fn centers(&self) -> [Point; 2] {
        [self.left.center, self.right.center]
    }

    pub fn pupils(&self) -> [Point; 2] {
        [self.left.pupil, self.right.pupil]
    }
}

impl Drawable for FollowingEyes {
    fn draw(&self, surface: &mut Surface<'_>) {
        for eye in [self.left, self.right] {
            for step in 0..RIM_SAMPLES {
                let angle = TAU * step as f64 / RIM_SAMPLES as f64;
                let rim = eye.center + Point::new(angle.cos(), angle.sin()) * EYEBALL_RADIUS;
                surface.marker(rim, '·');
            }
            surface.marker(eye.pupil, '●');
        }
    }
}
