// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer-driven node dragging.

use tracing::trace;

use crate::geometry::Point;

use super::{NodeId, Positionable, Scene, SceneError};

/// Tracks which node the pointer grabbed and where on it.
///
/// Positions are world coordinates; map screen input through the viewport first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragController {
    target: Option<NodeId>,
    grab_offset: Point,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.target.is_some()
    }

    /// Grabs the node under `world`, if any.
    pub fn press(&mut self, scene: &Scene, world: Point) -> Option<NodeId> {
        let id = scene.node_at(world)?;
        let origin = scene.node(id)?.position();
        self.target = Some(id);
        self.grab_offset = world - origin;
        trace!(node = %id, "drag started");
        Some(id)
    }

    /// Moves the grabbed node so the grab point follows `world`. Returns whether anything moved.
    pub fn drag(&mut self, scene: &mut Scene, world: Point) -> Result<bool, SceneError> {
        let Some(id) = self.target else {
            return Ok(false);
        };
        scene.move_node(id, world - self.grab_offset)?;
        Ok(true)
    }

    pub fn release(&mut self) -> Option<NodeId> {
        self.grab_offset = Point::ORIGIN;
        self.target.take()
    }
}
