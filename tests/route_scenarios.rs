// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tether::config::{Config, ConfigError};
use tether::geometry::{Clearance, Point, Rect};
use tether::render::{render_scene, RenderOptions, CELL_HEIGHT, CELL_WIDTH};
use tether::route::{compute_route, route_with, route_with_fallback, Route, RouteOptions, Strategy};
use tether::scene::{DragController, Scene};
use tether::viewport::Viewport;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("route_scenarios")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn demo_from() -> Rect {
    Rect::new(-250.0, 44.0, 100.0, 100.0)
}

fn demo_to() -> Rect {
    Rect::new(100.0, -50.0, 100.0, 100.0)
}

fn as_lines(route: &Route) -> String {
    route.points().iter().map(|point| format!("{point}\n")).collect()
}

/// Segments strictly between the two clearance stubs must stay out of both boxes.
fn assert_clear_of(route: &Route, boxes: &[Rect]) {
    let points = route.points();
    for pair in points[1..points.len() - 1].windows(2) {
        let (a, b) = (pair[0], pair[1]);
        for rect in boxes {
            let inside_x = a.x.max(b.x) > rect.x && a.x.min(b.x) < rect.right();
            let inside_y = a.y.max(b.y) > rect.y && a.y.min(b.y) < rect.bottom();
            assert!(!(inside_x && inside_y), "segment {a} -> {b} crosses {rect}");
        }
    }
}

#[test]
fn demo_route_matches_golden_output() {
    let route = compute_route(&demo_from(), &demo_to(), Clearance::DEFAULT, false);
    assert_eq!(as_lines(&route), read_fixture("demo_route.txt"));
    assert_eq!(route.length(), 504.0);
}

#[rstest]
#[case::astar(Strategy::AStar)]
#[case::dfs(Strategy::DepthFirst)]
fn both_strategies_route_the_demo_cleanly(#[case] strategy: Strategy) {
    let options = RouteOptions::default().with_strategy(strategy);
    let route = route_with(&demo_from(), &demo_to(), &options);

    assert!(!route.is_empty());
    assert!(route.is_orthogonal());
    assert_eq!(route.first(), Some(Point::new(-200.0, 44.0)));
    assert_eq!(route.last(), Some(Point::new(150.0, -50.0)));
    assert_clear_of(&route, &[demo_from(), demo_to()]);
}

#[rstest]
#[case::strict(false)]
#[case::relaxed(true)]
fn identical_boxes_have_no_route(#[case] relaxed: bool) {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(compute_route(&rect, &rect, Clearance::DEFAULT, relaxed).is_empty());
}

#[test]
fn config_file_drives_routing() {
    let config = Config::load(fixtures_dir().join("tether.json")).expect("config fixture");
    assert_eq!(config.strategy, Strategy::DepthFirst);
    assert!(config.show_waypoints && !config.show_grid);

    let options = config.route_options().unwrap();
    let route = route_with_fallback(&demo_from(), &demo_to(), &options);
    assert_eq!(&route.points()[..2], &[Point::new(-200.0, 44.0), Point::new(-200.0, 32.0)]);
}

#[test]
fn config_with_unknown_fields_is_rejected() {
    let err = Config::load(fixtures_dir().join("unknown_field.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn dragging_through_the_scene_keeps_the_connector_attached() {
    let mut scene = Scene::new(RouteOptions::default());
    let a = scene.add_node(demo_from(), "A");
    let b = scene.add_node(demo_to(), "B");
    let link = scene.add_connector(a, b).unwrap();

    let mut drag = DragController::new();
    assert_eq!(drag.press(&scene, Point::new(-200.0, 100.0)), Some(a));
    for step in 1..=10 {
        let pointer = Point::new(-200.0 + f64::from(step) * 40.0, 100.0 + f64::from(step) * 25.0);
        assert!(drag.drag(&mut scene, pointer).unwrap());

        let route = scene.connector(link).unwrap().route();
        let expected_start = Point::new(-200.0 + f64::from(step) * 40.0, 44.0 + f64::from(step) * 25.0);
        assert_eq!(route.first(), Some(expected_start));
        assert_eq!(route.last(), Some(Point::new(150.0, -50.0)));
        assert!(route.is_orthogonal());
    }
    assert_eq!(drag.release(), Some(a));
}

#[test]
fn rendered_demo_shows_boxes_and_connector() {
    let mut scene = Scene::new(RouteOptions::default());
    let a = scene.add_node(demo_from(), "A");
    let b = scene.add_node(demo_to(), "B");
    scene.add_connector(a, b).unwrap();

    let viewport = Viewport::new(80.0 * CELL_WIDTH, 24.0 * CELL_HEIGHT);
    let canvas = render_scene(&scene, None, &viewport, 80, 24, RenderOptions::default()).unwrap();
    let text = canvas.to_string();

    assert_eq!(text.lines().count(), 24);
    assert!(text.contains('A') && text.contains('B'));
    assert_eq!(canvas.get(15, 7).unwrap(), '┌');
    assert_eq!(canvas.get(58, 7).unwrap(), '┐');
}
