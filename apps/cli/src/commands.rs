// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use floor_lite_command::{CommandResult, CreateFloorFromLines};
use floor_lite_document::Document;
use floor_lite_geometry::{
    chain_order, sample_outline, sample_outline_as_listed, LoopValidator, OutlineFile,
    RecordingSink, Segment, Tee, Tolerance, TracingSink, ValidationReport,
};

use crate::config::Config;

/// Process exit codes.
pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILED: i32 = 1;

/// Where the outline comes from and how to read it.
#[derive(Args, Debug, Clone)]
pub struct OutlineArgs {
    /// Outline JSON file. Uses the built-in twelve-line sample when omitted.
    pub file: Option<PathBuf>,

    /// Coincidence tolerance; overrides the file and FLOOR_LITE_TOLERANCE.
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Reorder the lines into walking order before checking.
    #[arg(long)]
    pub reorder: bool,

    /// Use the sample in the order its lines were drawn.
    #[arg(long, conflicts_with = "file")]
    pub listed: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub outline: OutlineArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CreateFloorArgs {
    #[command(flatten)]
    pub outline: OutlineArgs,

    /// Name of the level to seed into the scratch document.
    #[arg(long)]
    pub level: Option<String>,

    /// Name of the floor type to seed into the scratch document.
    #[arg(long)]
    pub floor_type: Option<String>,

    /// Seed no level, to exercise the missing-level path.
    #[arg(long)]
    pub no_level: bool,

    /// Seed no floor type, to exercise the missing-floor-type path.
    #[arg(long)]
    pub no_floor_type: bool,

    /// Mark the floor as structural.
    #[arg(long)]
    pub structural: bool,
}

/// A loaded outline and the tolerance to check it with.
struct Outline {
    segments: Option<Vec<Segment>>,
    tolerance: Tolerance,
}

impl Outline {
    fn load(args: &OutlineArgs, config: &Config) -> Result<Self> {
        let (segments, file_tolerance) = match &args.file {
            Some(path) => read_outline(path)?,
            None if args.listed => (Some(sample_outline_as_listed()), None),
            None => (Some(sample_outline()), None),
        };

        let tolerance = match (args.tolerance, file_tolerance) {
            (Some(t), _) => Tolerance::new(t)?,
            (None, Some(t)) => t,
            (None, None) => Tolerance::new(config.tolerance)
                .context("FLOOR_LITE_TOLERANCE is not a valid tolerance")?,
        };

        let segments = match segments {
            Some(lines) if args.reorder => Some(reorder(lines, tolerance)),
            other => other,
        };

        Ok(Self {
            segments,
            tolerance,
        })
    }

    fn lines(&self) -> &[Segment] {
        self.segments.as_deref().unwrap_or_default()
    }
}

fn read_outline(path: &Path) -> Result<(Option<Vec<Segment>>, Option<Tolerance>)> {
    let file = OutlineFile::read(path)
        .with_context(|| format!("failed to load outline from {}", path.display()))?;
    let tolerance = file.tolerance()?;
    tracing::debug!(path = %path.display(), "outline loaded");
    Ok((file.segments, tolerance))
}

fn reorder(lines: Vec<Segment>, tolerance: Tolerance) -> Vec<Segment> {
    match chain_order(&lines, tolerance) {
        Some(ordered) => ordered,
        None => {
            tracing::warn!("lines do not chain; keeping input order");
            lines
        }
    }
}

/// `check`: print a validation report.
pub fn handle_check(args: CheckArgs, config: &Config) -> Result<i32> {
    let outline = Outline::load(&args.outline, config)?;
    let validator = LoopValidator::new(outline.tolerance);

    let outcome = validator.check(outline.lines(), &mut TracingSink);
    let report = ValidationReport::new(outline.lines().len(), outline.tolerance, outcome);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.closed { EXIT_OK } else { EXIT_FAILED })
}

/// `create-floor`: run the floor command against a scratch document.
pub fn handle_create_floor(args: CreateFloorArgs, config: &Config) -> Result<i32> {
    let outline = Outline::load(&args.outline, config)?;

    let mut doc = Document::new();
    if !args.no_level {
        let name = args.level.clone().unwrap_or_else(|| config.level_name.clone());
        doc.add_level(name, config.level_elevation);
    }
    if !args.no_floor_type {
        let name = args
            .floor_type
            .clone()
            .unwrap_or_else(|| config.floor_type_name.clone());
        doc.add_floor_type(name, config.floor_thickness);
    }

    let command = CreateFloorFromLines::new(LoopValidator::new(outline.tolerance))
        .with_structural(args.structural);

    let mut recorded = RecordingSink::new();
    let mut traced = TracingSink;
    let outcome = {
        let mut sink = Tee {
            first: &mut recorded,
            second: &mut traced,
        };
        command.execute(&mut doc, outline.lines(), &mut sink)
    };

    let floor = outcome.floor().and_then(|key| doc.floor(*key)).map(|f| {
        json!({
            "id": f.id.0,
            "level": doc.level(f.level).map(|l| l.name.as_str()),
            "floor_type": doc.floor_type(f.floor_type).map(|t| t.name.as_str()),
            "lines": f.boundary.len(),
            "structural": f.structural,
        })
    });

    let succeeded = outcome.result() == CommandResult::Succeeded;
    let report = json!({
        "result": if succeeded { "Succeeded" } else { "Failed" },
        "diagnostics": recorded.diagnostics(),
        "floor": floor,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if succeeded { EXIT_OK } else { EXIT_FAILED })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_lookup(|_| None)
    }

    fn outline_args() -> OutlineArgs {
        OutlineArgs {
            file: None,
            tolerance: None,
            reorder: false,
            listed: false,
        }
    }

    #[test]
    fn sample_check_passes() {
        let args = CheckArgs {
            outline: outline_args(),
        };
        assert_eq!(handle_check(args, &config()).unwrap(), EXIT_OK);
    }

    #[test]
    fn listed_sample_fails_unless_reordered() {
        let mut outline = outline_args();
        outline.listed = true;
        let args = CheckArgs {
            outline: outline.clone(),
        };
        assert_eq!(handle_check(args, &config()).unwrap(), EXIT_FAILED);

        outline.reorder = true;
        let args = CheckArgs { outline };
        assert_eq!(handle_check(args, &config()).unwrap(), EXIT_OK);
    }

    #[test]
    fn flag_tolerance_wins_and_is_validated() {
        let mut outline = outline_args();
        outline.tolerance = Some(-1.0);
        assert!(Outline::load(&outline, &config()).is_err());

        outline.tolerance = Some(0.5);
        let loaded = Outline::load(&outline, &config()).unwrap();
        assert_eq!(loaded.tolerance.value(), 0.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut outline = outline_args();
        outline.file = Some(PathBuf::from("/nonexistent/outline.json"));
        assert!(Outline::load(&outline, &config()).is_err());
    }

    #[test]
    fn create_floor_paths() {
        let base = CreateFloorArgs {
            outline: outline_args(),
            level: None,
            floor_type: None,
            no_level: false,
            no_floor_type: false,
            structural: false,
        };
        assert_eq!(handle_create_floor(base.clone(), &config()).unwrap(), EXIT_OK);

        let mut no_level = base.clone();
        no_level.no_level = true;
        assert_eq!(handle_create_floor(no_level, &config()).unwrap(), EXIT_FAILED);

        let mut no_type = base;
        no_type.no_floor_type = true;
        assert_eq!(handle_create_floor(no_type, &config()).unwrap(), EXIT_FAILED);
    }
}
