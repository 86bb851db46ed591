// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tether and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON settings shared by the CLI and the TUI.
//!
//! Every field is optional in the file; missing fields take the defaults below and unknown
//! fields are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Clearance, NumericError};
use crate::route::{RouteOptions, Strategy};
use crate::viewport::{ZOOM_CEILING, ZOOM_FLOOR};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub clearance: f64,
    pub strategy: Strategy,
    pub relaxed_fallback: bool,
    pub show_grid: bool,
    pub show_waypoints: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clearance: Clearance::DEFAULT.get(),
            strategy: Strategy::AStar,
            relaxed_fallback: true,
            show_grid: false,
            show_waypoints: false,
            min_zoom: ZOOM_FLOOR,
            max_zoom: ZOOM_CEILING,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clearance()?;
        for (field, value) in [("min_zoom", self.min_zoom), ("max_zoom", self.max_zoom)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid {
                field: "min_zoom",
                reason: format!("{} is larger than max_zoom {}", self.min_zoom, self.max_zoom),
            });
        }
        Ok(())
    }

    pub fn clearance(&self) -> Result<Clearance, ConfigError> {
        Clearance::try_new(self.clearance).map_err(|err: NumericError| ConfigError::Invalid {
            field: "clearance",
            reason: err.to_string(),
        })
    }

    pub fn route_options(&self) -> Result<RouteOptions, ConfigError> {
        Ok(RouteOptions::default()
            .with_clearance(self.clearance()?)
            .with_strategy(self.strategy))
    }
}
