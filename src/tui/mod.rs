// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Shows the demo scene (two nodes and one connector) on a ratatui canvas. Mouse input drives the
//! drag controller and the viewport; every drag step re-routes the connector.

use std::{
    error::Error,
    io,
    sync::mpsc::{self, Receiver},
    time::Duration,
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::geometry::{Point, Rect};
use crate::render::{render_scene, Canvas, CanvasError, RenderOptions, CELL_HEIGHT, CELL_WIDTH};
use crate::route::{SearchMode, Strategy};
use crate::scene::{
    ConnectorId, DragController, EventEmitting, FollowingEyes, Scene, SceneError, SceneEvent,
};
use crate::viewport::Viewport;

mod chrome;

const FOOTER_HEIGHT: u16 = 1;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive terminal UI until the user quits.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let (cols, rows) = crossterm::terminal::size()?;
    let mut app = App::new(config, cols, rows.saturating_sub(FOOTER_HEIGHT))?;
    let mut terminal = TerminalSession::new()?;
    info!("tui started");

    while !app.should_quit {
        app.drain_scene_events();
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(cols, rows) => app.resize(cols, rows.saturating_sub(FOOTER_HEIGHT)),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)])
        .split(frame.size());
    let (canvas_area, footer_area) = (areas[0], areas[1]);

    let body = match app.render(usize::from(canvas_area.width), usize::from(canvas_area.height)) {
        Ok(canvas) => canvas.to_string(),
        Err(err) => format!("render failed: {err}"),
    };
    frame.render_widget(Paragraph::new(body), canvas_area);
    frame.render_widget(Paragraph::new(chrome::footer_line(&app.status())), footer_area);
}

/// Demo layout: node A lower left, node B upper right, A → B.
pub fn demo_scene(scene: &mut Scene) -> Result<ConnectorId, SceneError> {
    let a = scene.add_node(Rect::new(-250.0, 44.0, 100.0, 100.0), "A");
    let b = scene.add_node(Rect::new(100.0, -50.0, 100.0, 100.0), "B");
    scene.add_connector(a, b)
}

/// Everything the footer shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Status {
    pub(crate) strategy: Strategy,
    pub(crate) zoom: f64,
    pub(crate) route_points: usize,
    pub(crate) mode: SearchMode,
    pub(crate) reroutes: usize,
    pub(crate) show_grid: bool,
    pub(crate) show_waypoints: bool,
}

pub(crate) struct App {
    scene: Scene,
    link: ConnectorId,
    viewport: Viewport,
    drag: DragController,
    eyes: FollowingEyes,
    render: RenderOptions,
    scene_events: Receiver<SceneEvent>,
    route_points: usize,
    mode: SearchMode,
    reroutes: usize,
    should_quit: bool,
}

impl App {
    /// `cols × rows` is the canvas area in cells, without the footer.
    pub(crate) fn new(config: &Config, cols: u16, rows: u16) -> Result<Self, Box<dyn Error>> {
        let mut scene =
            Scene::new(config.route_options()?).with_relaxed_fallback(config.relaxed_fallback);
        let link = demo_scene(&mut scene)?;

        let (route_points, mode) = scene
            .connector(link)
            .map(|connector| (connector.route().len(), connector.mode()))
            .unwrap_or((0, SearchMode::Strict));

        let (tx, scene_events) = mpsc::channel();
        scene.subscribe(move |event: &SceneEvent| {
            // The receiver lives as long as the app; a closed channel only means shutdown.
            let _ = tx.send(event.clone());
        });

        let (width, height) = screen_size(cols, rows);
        Ok(Self {
            scene,
            link,
            viewport: Viewport::new(width, height).with_zoom_limits(config.min_zoom, config.max_zoom),
            drag: DragController::new(),
            eyes: FollowingEyes::for_screen(width, height),
            render: RenderOptions {
                show_grid: config.show_grid,
                show_waypoints: config.show_waypoints,
            },
            scene_events,
            route_points,
            mode,
            reroutes: 0,
            should_quit: false,
        })
    }

    pub(crate) fn resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = screen_size(cols, rows);
        self.viewport.resize(width, height);
    }

    pub(crate) fn render(&self, cols: usize, rows: usize) -> Result<Canvas, CanvasError> {
        render_scene(&self.scene, Some(&self.eyes), &self.viewport, cols, rows, self.render)
    }

    pub(crate) fn status(&self) -> Status {
        Status {
            strategy: self.scene.route_options().strategy,
            zoom: self.viewport.zoom(),
            route_points: self.route_points,
            mode: self.mode,
            reroutes: self.reroutes,
            show_grid: self.render.show_grid,
            show_waypoints: self.render.show_waypoints,
        }
    }

    pub(crate) fn drain_scene_events(&mut self) {
        while let Ok(event) = self.scene_events.try_recv() {
            if let SceneEvent::ConnectorRerouted { id, points, mode } = event {
                if id == self.link {
                    self.route_points = points.len();
                    self.mode = mode;
                    self.reroutes += 1;
                }
            }
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<(), SceneError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('g') => self.render.show_grid = !self.render.show_grid,
            KeyCode::Char('w') => self.render.show_waypoints = !self.render.show_waypoints,
            KeyCode::Char('s') => {
                let options = *self.scene.route_options();
                let options = options.with_strategy(options.strategy.toggled());
                debug!(strategy = options.strategy.as_str(), "switching strategy");
                self.scene.set_route_options(options)?;
            }
            KeyCode::Char('r') => self.viewport.reset(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.viewport.zoom_by(-1.0),
            KeyCode::Char('-') => self.viewport.zoom_by(1.0),
            _ => {}
        }
        Ok(())
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), SceneError> {
        let screen = cell_center(mouse.column, mouse.row);
        let ctrl = mouse.modifiers.contains(KeyModifiers::CONTROL);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if ctrl => self.viewport.begin_pan(screen),
            MouseEventKind::Down(MouseButton::Left) => {
                let world = self.viewport.screen_to_world_panned(screen);
                self.drag.press(&self.scene, world);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.viewport.is_panning() {
                    self.viewport.update_pan(screen);
                } else {
                    let world = self.viewport.screen_to_world_panned(screen);
                    self.drag.drag(&mut self.scene, world)?;
                    self.eyes.follow(world);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.viewport.end_pan();
                self.drag.release();
            }
            MouseEventKind::Moved => {
                self.eyes.follow(self.viewport.screen_to_world_panned(screen));
            }
            MouseEventKind::ScrollDown if ctrl => self.viewport.zoom_by(1.0),
            MouseEventKind::ScrollUp if ctrl => self.viewport.zoom_by(-1.0),
            _ => {}
        }
        Ok(())
    }
}

fn screen_size(cols: u16, rows: u16) -> (f64, f64) {
    (f64::from(cols) * CELL_WIDTH, f64::from(rows) * CELL_HEIGHT)
}

fn cell_center(col: u16, row: u16) -> Point {
    Point::new(
        f64::from(col) * CELL_WIDTH + CELL_WIDTH / 2.0,
        f64::from(row) * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
