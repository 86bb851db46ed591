// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nodes, connectors and the events fired when they change.
//!
//! A [`Scene`] owns every node and connector. Moving a node re-routes each connector attached
//! to it and notifies subscribers through [`EventEmitting`]. Input handling lives in
//! [`drag`]; the scene never looks at pointer state itself.

pub mod drag;
mod events;
pub mod eyes;

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::geometry::{Point, Rect};
use crate::render::{Drawable, Surface};
use crate::route::{route_with, route_with_fallback_mode, Route, RouteOptions, SearchMode};

pub use drag::DragController;
pub use events::{Emitter, EventEmitting, Subscription};
pub use eyes::FollowingEyes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectorId(u32);

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Anything with a box that can be moved and hit-tested.
pub trait Positionable {
    fn bounds(&self) -> Rect;

    fn set_position(&mut self, top_left: Point);

    fn position(&self) -> Point {
        self.bounds().top_left()
    }

    /// Edge-inclusive.
    fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    bounds: Rect,
    label: String,
    draggable: bool,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }
}

impl Positionable for Node {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_position(&mut self, top_left: Point) {
        self.bounds = self.bounds.with_position(top_left);
    }
}

impl Drawable for Node {
    fn draw(&self, surface: &mut Surface<'_>) {
        surface.outline(&self.bounds);
        surface.label(&self.bounds, &self.label);
    }
}

/// A connector from one node's anchor to another's, with its current route.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    id: ConnectorId,
    from: NodeId,
    to: NodeId,
    route: Route,
    mode: SearchMode,
}

impl Connector {
    pub fn id(&self) -> ConnectorId {
        self.id
    }

    pub fn from_node(&self) -> NodeId {
        self.from
    }

    pub fn to_node(&self) -> NodeId {
        self.to
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Search mode that produced the current route.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }
}

impl Drawable for Connector {
    fn draw(&self, surface: &mut Surface<'_>) {
        surface.polyline(self.route.compress().points());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    NodeMoved { id: NodeId, bounds: Rect },
    ConnectorRerouted { id: ConnectorId, points: Vec<Point>, mode: SearchMode },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("unknown connector {0}")]
    UnknownConnector(ConnectorId),
    #[error("node {0} cannot be connected to itself")]
    SelfConnection(NodeId),
}

#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    connectors: Vec<Connector>,
    options: RouteOptions,
    strict_only: bool,
    events: Emitter<SceneEvent>,
    next_node: u32,
    next_connector: u32,
}

impl Scene {
    pub fn new(options: RouteOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// When disabled, connectors keep whatever `options.mode` produces, even an empty route.
    pub fn with_relaxed_fallback(mut self, enabled: bool) -> Self {
        self.strict_only = !enabled;
        self
    }

    pub fn route_options(&self) -> &RouteOptions {
        &self.options
    }

    /// Replaces the routing options and re-routes every connector.
    pub fn set_route_options(&mut self, options: RouteOptions) -> Result<(), SceneError> {
        self.options = options;
        let ids = self.connectors.iter().map(Connector::id).collect::<Vec<_>>();
        for id in ids {
            self.reroute(id)?;
        }
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.iter().find(|connector| connector.id == id)
    }

    pub fn add_node(&mut self, bounds: Rect, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.push(Node { id, bounds, label: label.into(), draggable: true });
        id
    }

    pub fn set_draggable(&mut self, id: NodeId, draggable: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.draggable = draggable;
        Ok(())
    }

    /// Connects `from` to `to` and routes the connector immediately.
    pub fn add_connector(&mut self, from: NodeId, to: NodeId) -> Result<ConnectorId, SceneError> {
        if from == to {
            return Err(SceneError::SelfConnection(from));
        }
        self.bounds_of(from)?;
        self.bounds_of(to)?;

        let id = ConnectorId(self.next_connector);
        self.next_connector += 1;
        self.connectors.push(Connector { id, from, to, route: Route::empty(), mode: SearchMode::Strict });
        self.reroute(id)?;
        Ok(id)
    }

    /// Moves a node so its top-left corner sits at `top_left`, then re-routes its connectors.
    pub fn move_node(&mut self, id: NodeId, top_left: Point) -> Result<(), SceneError> {
        let bounds = self.bounds_of(id)?.with_position(top_left);
        self.set_node_bounds(id, bounds)
    }

    /// Replaces a node's box (position and size), then re-routes its connectors.
    pub fn set_node_bounds(&mut self, id: NodeId, bounds: Rect) -> Result<(), SceneError> {
        let node = self.node_mut(id)?;
        node.bounds = bounds;
        self.events.emit(&SceneEvent::NodeMoved { id, bounds });

        let attached = self
            .connectors
            .iter()
            .filter(|connector| connector.touches(id))
            .map(Connector::id)
            .collect::<Vec<_>>();
        for connector in attached {
            self.reroute(connector)?;
        }
        Ok(())
    }

    /// First draggable node, in insertion order, whose box contains `point`.
    pub fn node_at(&self, point: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|node| node.draggable && node.hit_test(point))
            .map(Node::id)
    }

    fn reroute(&mut self, id: ConnectorId) -> Result<(), SceneError> {
        let (from, to) = {
            let connector = self.connector(id).ok_or(SceneError::UnknownConnector(id))?;
            (connector.from, connector.to)
        };
        let from_bounds = self.bounds_of(from)?;
        let to_bounds = self.bounds_of(to)?;

        let (route, mode) = if self.strict_only {
            (route_with(&from_bounds, &to_bounds, &self.options), self.options.mode)
        } else {
            route_with_fallback_mode(&from_bounds, &to_bounds, &self.options)
        };
        debug!(connector = %id, points = route.len(), ?mode, "rerouted connector");

        let event = SceneEvent::ConnectorRerouted { id, points: route.points().to_vec(), mode };
        if let Some(connector) = self.connectors.iter_mut().find(|c| c.id == id) {
            connector.route = route;
            connector.mode = mode;
        }
        self.events.emit(&event);
        Ok(())
    }

    fn bounds_of(&self, id: NodeId) -> Result<Rect, SceneError> {
        self.node(id).map(Node::bounds).ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or(SceneError::UnknownNode(id))
    }
}

impl EventEmitting for Scene {
    type Event = SceneEvent;

    fn emitter(&mut self) -> &mut Emitter<SceneEvent> {
        &mut self.events
    }
}
