// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tether CLI entrypoint.
//!
//! Without a subcommand this runs the interactive TUI. `tether route` computes one connector
//! route and prints it.

use std::error::Error;
use std::path::PathBuf;

use tether::config::Config;
use tether::geometry::{Clearance, NumericError, Rect, RectParseError};
use tether::route::{route_with, route_with_fallback_mode, Route, SearchMode, Strategy};
use thiserror::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <file>]\n  {program} route <x,y,w,h> <x,y,w,h> [--clearance <n>] [--relaxed] [--dfs] [--compress] [--json] [--config <file>]\n\nWithout a subcommand the interactive TUI starts. Set TETHER_LOG=<file> to capture its logs.\n\n`route` prints one `x,y` waypoint per line, or a JSON array with --json.\n--relaxed searches in relaxed mode directly; otherwise relaxed mode is only a fallback\n(see `relaxed_fallback` in the config file).\n--compress drops collinear waypoints."
    );
}

#[derive(Debug, PartialEq, Error)]
enum CliError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("`{0}` given more than once")]
    Duplicate(&'static str),
    #[error("`{0}` needs a value")]
    MissingValue(&'static str),
    #[error("expected two boxes, got {0}")]
    BoxCount(usize),
    #[error("invalid box `{raw}`: {source}")]
    InvalidBox {
        raw: String,
        #[source]
        source: RectParseError,
    },
    #[error("invalid clearance `{raw}`: {reason}")]
    InvalidClearance { raw: String, reason: String },
    #[error("`{0}` only applies to `route`")]
    RouteOnly(&'static str),
}

#[derive(Debug, Default, Clone, PartialEq)]
struct RouteArgs {
    from: Option<Rect>,
    to: Option<Rect>,
    clearance: Option<Clearance>,
    relaxed: bool,
    dfs: bool,
    compress: bool,
    json: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Tui,
    Route(RouteArgs),
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    command: Command,
    config: Option<PathBuf>,
}

fn set_flag(flag: &mut bool, name: &'static str) -> Result<(), CliError> {
    if *flag {
        return Err(CliError::Duplicate(name));
    }
    *flag = true;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, CliError> {
    let mut is_route = false;
    let mut config = None;
    let mut boxes = Vec::new();
    let mut seen = RouteArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "route" if !is_route && boxes.is_empty() => is_route = true,
            "--config" => {
                if config.is_some() {
                    return Err(CliError::Duplicate("--config"));
                }
                let path = args.next().ok_or(CliError::MissingValue("--config"))?;
                config = Some(PathBuf::from(path));
            }
            "--clearance" => {
                if seen.clearance.is_some() {
                    return Err(CliError::Duplicate("--clearance"));
                }
                let raw = args.next().ok_or(CliError::MissingValue("--clearance"))?;
                seen.clearance = Some(parse_clearance(&raw)?);
            }
            "--relaxed" => set_flag(&mut seen.relaxed, "--relaxed")?,
            "--dfs" => set_flag(&mut seen.dfs, "--dfs")?,
            "--compress" => set_flag(&mut seen.compress, "--compress")?,
            "--json" => set_flag(&mut seen.json, "--json")?,
            _ if arg.starts_with("--") => return Err(CliError::UnknownOption(arg)),
            _ => {
                // Boxes may start with `-` (negative x), so only `--` marks an option.
                let rect = arg
                    .parse::<Rect>()
                    .map_err(|source| CliError::InvalidBox { raw: arg.clone(), source })?;
                boxes.push(rect);
            }
        }
    }

    if !is_route {
        if let Some(flag) = route_only_flag(&seen) {
            return Err(CliError::RouteOnly(flag));
        }
        if !boxes.is_empty() {
            return Err(CliError::RouteOnly("<x,y,w,h>"));
        }
        return Ok(CliOptions { command: Command::Tui, config });
    }

    let [from, to] = boxes[..] else {
        return Err(CliError::BoxCount(boxes.len()));
    };
    let route = RouteArgs { from: Some(from), to: Some(to), ..seen };
    Ok(CliOptions { command: Command::Route(route), config })
}

fn route_only_flag(args: &RouteArgs) -> Option<&'static str> {
    [
        (args.clearance.is_some(), "--clearance"),
        (args.relaxed, "--relaxed"),
        (args.dfs, "--dfs"),
        (args.compress, "--compress"),
        (args.json, "--json"),
    ]
    .into_iter()
    .find_map(|(set, name)| set.then_some(name))
}

fn parse_clearance(raw: &str) -> Result<Clearance, CliError> {
    let invalid = |reason: String| CliError::InvalidClearance { raw: raw.to_owned(), reason };
    let value = raw.parse::<f64>().map_err(|err| invalid(err.to_string()))?;
    Clearance::try_new(value).map_err(|err: NumericError| invalid(err.to_string()))
}

/// Computes the route described by `args`; flags win over `config`.
fn compute(args: &RouteArgs, config: &Config) -> Result<(Route, SearchMode), Box<dyn Error>> {
    let (Some(from), Some(to)) = (args.from, args.to) else {
        return Err(Box::new(CliError::BoxCount(0)));
    };

    let mut options = config.route_options()?;
    if let Some(clearance) = args.clearance {
        options = options.with_clearance(clearance);
    }
    if args.dfs {
        options = options.with_strategy(Strategy::DepthFirst);
    }

    let (route, mode) = if args.relaxed {
        let options = options.with_mode(SearchMode::Relaxed);
        (route_with(&from, &to, &options), SearchMode::Relaxed)
    } else if config.relaxed_fallback {
        route_with_fallback_mode(&from, &to, &options)
    } else {
        (route_with(&from, &to, &options), SearchMode::Strict)
    };

    if args.compress {
        Ok((route.compress(), mode))
    } else {
        Ok((route, mode))
    }
}

fn format_route(route: &Route, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(route);
    }
    Ok(route.points().iter().map(|point| format!("{point}\n")).collect())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tether".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(err) => {
                eprintln!("tether: {err}");
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = match &options.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        match options.command {
            Command::Tui => {
                if let Some(path) = std::env::var_os(tether::logging::LOG_FILE_ENV) {
                    tether::logging::init_file(PathBuf::from(path).as_path())?;
                }
                tether::tui::run(&config)
            }
            Command::Route(args) => {
                tether::logging::init_stderr();
                let (route, mode) = compute(&args, &config)?;
                if route.is_empty() {
                    tracing::warn!("no route between the given boxes");
                } else if mode == SearchMode::Relaxed {
                    tracing::info!("route found in relaxed mode");
                }
                let output = format_route(&route, args.json)?;
                if args.json {
                    println!("{output}");
                } else {
                    print!("{output}");
                }
                Ok(())
            }
        }
    })();

    if let Err(err) = result {
        eprintln!("tether: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether::geometry::Point;

    fn parse(args: &[&str]) -> Result<CliOptions, CliError> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    fn route_args(args: &[&str]) -> RouteArgs {
        match parse(args).expect("valid args").command {
            Command::Route(route) => route,
            Command::Tui => panic!("expected the route command"),
        }
    }

    #[test]
    fn parses_empty_args_as_tui() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.command, Command::Tui);
        assert_eq!(options.config, None);
    }

    #[test]
    fn parses_config_for_tui() {
        let options = parse(&["--config", "tether.json"]).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("tether.json")));
    }

    #[test]
    fn parses_route_with_negative_coordinates() {
        let args = route_args(&["route", "-250,44,100,100", "100,-50,100,100"]);
        assert_eq!(args.from, Some(Rect::new(-250.0, 44.0, 100.0, 100.0)));
        assert_eq!(args.to, Some(Rect::new(100.0, -50.0, 100.0, 100.0)));
        assert!(!args.relaxed && !args.dfs && !args.compress && !args.json);
    }

    #[test]
    fn parses_route_flags_in_any_order() {
        let args = route_args(&[
            "route", "--json", "0,0,10,10", "--clearance", "12.5", "--dfs", "50,0,10,10",
            "--relaxed", "--compress",
        ]);
        assert_eq!(args.clearance.map(Clearance::get), Some(12.5));
        assert!(args.relaxed && args.dfs && args.compress && args.json);
    }

    #[test]
    fn rejects_duplicates_and_unknowns() {
        assert_eq!(parse(&["--config", "a", "--config", "b"]), Err(CliError::Duplicate("--config")));
        assert_eq!(
            parse(&["route", "0,0,1,1", "5,5,1,1", "--dfs", "--dfs"]),
            Err(CliError::Duplicate("--dfs"))
        );
        assert_eq!(parse(&["--mcp"]), Err(CliError::UnknownOption("--mcp".to_owned())));
        assert_eq!(parse(&["--config"]), Err(CliError::MissingValue("--config")));
    }

    #[test]
    fn rejects_bad_boxes_and_clearance() {
        assert_eq!(parse(&["route", "0,0,1,1"]), Err(CliError::BoxCount(1)));
        assert!(matches!(
            parse(&["route", "0,0,1", "5,5,1,1"]),
            Err(CliError::InvalidBox { source: RectParseError::ComponentCount { count: 3 }, .. })
        ));
        assert!(matches!(
            parse(&["route", "0,0,1,1", "5,5,1,1", "--clearance", "-3"]),
            Err(CliError::InvalidClearance { .. })
        ));
    }

    #[test]
    fn route_flags_without_route_are_usage_errors() {
        assert_eq!(parse(&["--json"]), Err(CliError::RouteOnly("--json")));
        assert_eq!(parse(&["0,0,1,1"]), Err(CliError::RouteOnly("<x,y,w,h>")));
    }

    #[test]
    fn computes_the_demo_route() {
        let args = route_args(&["route", "-250,44,100,100", "100,-50,100,100"]);
        let (route, mode) = compute(&args, &Config::default()).unwrap();
        assert_eq!(mode, SearchMode::Strict);
        assert_eq!(
            format_route(&route, false).unwrap(),
            "-200,44\n-200,14\n-200,-80\n150,-80\n150,-50\n"
        );
    }

    #[test]
    fn compress_keeps_endpoints_and_corners() {
        let args = route_args(&["route", "-250,44,100,100", "100,-50,100,100", "--compress"]);
        let (route, _) = compute(&args, &Config::default()).unwrap();
        assert_eq!(
            route.points(),
            &[
                Point::new(-200.0, 44.0),
                Point::new(-200.0, -80.0),
                Point::new(150.0, -80.0),
                Point::new(150.0, -50.0),
            ]
        );
    }

    #[test]
    fn identical_boxes_print_an_empty_json_array() {
        let args = route_args(&["route", "0,0,100,100", "0,0,100,100", "--json"]);
        let (route, _) = compute(&args, &Config::default()).unwrap();
        assert_eq!(format_route(&route, true).unwrap(), "[]");
    }

    #[test]
    fn json_output_lists_points_as_objects() {
        let args = route_args(&["route", "0,0,100,100", "100,0,100,100", "--json"]);
        let (route, _) = compute(&args, &Config::default()).unwrap();
        assert_eq!(
            format_route(&route, true).unwrap(),
            r#"[{"x":50.0,"y":0.0},{"x":50.0,"y":-30.0},{"x":150.0,"y":-30.0},{"x":150.0,"y":0.0}]"#
        );
    }
}
