// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tether: draggable boxes joined by orthogonal connectors, in the terminal.
//!
//! [`route`] is the pure routing engine. [`scene`] owns nodes and connectors and re-routes them
//! as nodes move; [`viewport`] and [`render`] turn a scene into text; [`tui`] wires it all to a
//! ratatui terminal.

pub mod config;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod route;
pub mod scene;
pub mod tui;
pub mod viewport;
