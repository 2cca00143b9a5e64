// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.
//!
//! Command-line flags override these values.

use floor_lite_geometry::DEFAULT_TOLERANCE;

/// Tool configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Point coincidence tolerance (`FLOOR_LITE_TOLERANCE`).
    pub tolerance: f64,
    /// Name of the level seeded into the scratch document (`FLOOR_LITE_LEVEL_NAME`).
    pub level_name: String,
    /// Elevation of the seeded level (`FLOOR_LITE_LEVEL_ELEVATION`).
    pub level_elevation: f64,
    /// Name of the seeded floor type (`FLOOR_LITE_FLOOR_TYPE`).
    pub floor_type_name: String,
    /// Thickness of the seeded floor type (`FLOOR_LITE_FLOOR_THICKNESS`).
    pub floor_thickness: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str, default: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(default)
        };

        Self {
            tolerance: number("FLOOR_LITE_TOLERANCE", DEFAULT_TOLERANCE),
            level_name: lookup("FLOOR_LITE_LEVEL_NAME").unwrap_or_else(|| "Level 1".into()),
            level_elevation: number("FLOOR_LITE_LEVEL_ELEVATION", 0.0),
            floor_type_name: lookup("FLOOR_LITE_FLOOR_TYPE")
                .unwrap_or_else(|| "Generic 150mm".into()),
            floor_thickness: number("FLOOR_LITE_FLOOR_THICKNESS", 0.15),
        }
    }
}
