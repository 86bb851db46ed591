// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::*;
use crate::scene::Positionable;

const COLS: u16 = 80;
const ROWS: u16 = 23;

fn app() -> App {
    App::new(&Config::default(), COLS, ROWS).expect("demo app")
}

fn key(app: &mut App, ch: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)).unwrap();
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16, modifiers: KeyModifiers) {
    app.handle_mouse(MouseEvent { kind, column, row, modifiers }).expect("mouse event");
}

fn node_a_bounds(app: &App) -> Rect {
    app.scene.nodes()[0].bounds()
}

#[test]
fn starts_with_a_routed_demo_connector() {
    let app = app();
    let status = app.status();
    assert_eq!(status.route_points, 5);
    assert_eq!(status.mode, SearchMode::Strict);
    assert_eq!(status.reroutes, 0);
    assert_eq!(status.zoom, 1.0);
}

#[test]
fn dragging_a_node_moves_it_and_reroutes() {
    let mut app = app();
    // Cell (15, 15) sits inside node A at world (-196, 64).
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 15, 15, KeyModifiers::NONE);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 20, 15, KeyModifiers::NONE);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 20, 15, KeyModifiers::NONE);
    app.drain_scene_events();

    assert_eq!(node_a_bounds(&app), Rect::new(-210.0, 44.0, 100.0, 100.0));
    assert_eq!(app.status().reroutes, 1);
    assert!(!app.drag.is_dragging());

    let route = app.scene.connector(app.link).unwrap().route();
    assert_eq!(route.first(), Some(Point::new(-160.0, 44.0)));
    assert_eq!(app.status().route_points, route.len());
}

#[test]
fn pressing_empty_space_drags_nothing() {
    let mut app = app();
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 40, 2, KeyModifiers::NONE);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 45, 2, KeyModifiers::NONE);
    app.drain_scene_events();

    assert_eq!(node_a_bounds(&app), Rect::new(-250.0, 44.0, 100.0, 100.0));
    assert_eq!(app.status().reroutes, 0);
}

#[test]
fn ctrl_drag_pans_instead_of_moving_nodes() {
    let mut app = app();
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 40, 11, KeyModifiers::CONTROL);
    assert!(app.viewport.is_panning());
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 50, 11, KeyModifiers::CONTROL);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 50, 11, KeyModifiers::CONTROL);

    assert!(!app.viewport.is_panning());
    assert_eq!(app.viewport.offset(), Point::new(80.0, 0.0));
    assert_eq!(node_a_bounds(&app), Rect::new(-250.0, 44.0, 100.0, 100.0));
}

#[test]
fn ctrl_scroll_zooms_and_plain_scroll_does_not() {
    let mut app = app();
    mouse(&mut app, MouseEventKind::ScrollDown, 0, 0, KeyModifiers::NONE);
    assert_eq!(app.viewport.zoom(), 1.0);

    mouse(&mut app, MouseEventKind::ScrollDown, 0, 0, KeyModifiers::CONTROL);
    assert!((app.viewport.zoom() - 1.1).abs() < 1e-9);
    mouse(&mut app, MouseEventKind::ScrollUp, 0, 0, KeyModifiers::CONTROL);
    mouse(&mut app, MouseEventKind::ScrollUp, 0, 0, KeyModifiers::CONTROL);
    assert!((app.viewport.zoom() - 0.9).abs() < 1e-9);
}

#[test]
fn keys_toggle_overlays_and_zoom() {
    let mut app = app();
    key(&mut app, 'g');
    key(&mut app, 'w');
    assert!(app.status().show_grid && app.status().show_waypoints);

    key(&mut app, '+');
    assert!((app.viewport.zoom() - 0.9).abs() < 1e-9);
    key(&mut app, 'r');
    assert_eq!(app.viewport.zoom(), 1.0);
}

#[test]
fn strategy_key_reroutes_with_the_other_search() {
    let mut app = app();
    key(&mut app, 's');
    app.drain_scene_events();
    assert_eq!(app.status().strategy, Strategy::DepthFirst);
    assert_eq!(app.status().reroutes, 1);

    key(&mut app, 's');
    assert_eq!(app.status().strategy, Strategy::AStar);
}

#[test]
fn q_and_esc_quit() {
    let mut by_letter = app();
    key(&mut by_letter, 'q');
    assert!(by_letter.should_quit);

    let mut by_escape = app();
    by_escape.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
    assert!(by_escape.should_quit);
}

#[test]
fn pointer_moves_steer_the_eyes() {
    let mut app = app();
    let before = app.eyes.pupils();
    mouse(&mut app, MouseEventKind::Moved, 79, 22, KeyModifiers::NONE);
    assert_ne!(app.eyes.pupils(), before);
}

#[test]
fn render_fills_the_canvas_area() {
    let app = app();
    let canvas = app.render(usize::from(COLS), usize::from(ROWS)).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (80, 23));
    assert!(canvas.to_string().contains('A'));
}

#[test]
fn invalid_config_is_rejected_before_the_terminal_is_touched() {
    let config = Config { clearance: f64::NAN, ..Config::default() };
    assert!(App::new(&config, COLS, ROWS).is_err());
}
