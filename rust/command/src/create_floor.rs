// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The create-floor-from-lines command.
//!
//! 1. Validate the outline; an open outline stops the command.
//! 2. Pick the first level and the first floor type.
//! 3. Build the floor inside a transaction, committing on success and
//!    rolling back otherwise.
//!
//! Every failure emits one error diagnostic, except an open outline, for
//! which the validator has already emitted its warning. Success emits a
//! single success message.

use floor_lite_geometry::{DiagnosticSink, LoopValidator, Segment, Severity};

use crate::error::CommandFailure;
use crate::host::{FloorFactory, FloorTypeProvider, LevelProvider};

/// Name of the transaction the floor is created in.
pub const TRANSACTION_NAME: &str = "Create Floor";

/// Message emitted after a committed floor.
pub const SUCCESS_MESSAGE: &str = "Floor created successfully!";

/// Overall result reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Succeeded,
    Failed,
}

/// What the command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome<F> {
    Succeeded(F),
    Failed(CommandFailure),
}

impl<F> CommandOutcome<F> {
    pub fn result(&self) -> CommandResult {
        match self {
            CommandOutcome::Succeeded(_) => CommandResult::Succeeded,
            CommandOutcome::Failed(_) => CommandResult::Failed,
        }
    }

    pub fn floor(&self) -> Option<&F> {
        match self {
            CommandOutcome::Succeeded(floor) => Some(floor),
            CommandOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&CommandFailure> {
        match self {
            CommandOutcome::Succeeded(_) => None,
            CommandOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<F, CommandFailure> {
        match self {
            CommandOutcome::Succeeded(floor) => Ok(floor),
            CommandOutcome::Failed(failure) => Err(failure),
        }
    }
}

/// Creates a floor from a line outline.
///
/// # Example
///
/// ```
/// use floor_lite_command::{CommandResult, CreateFloorFromLines};
/// use floor_lite_document::Document;
/// use floor_lite_geometry::{sample_outline, RecordingSink};
///
/// let mut doc = Document::new();
/// doc.add_level("Level 1", 0.0);
/// doc.add_floor_type("Generic 150mm", 0.15);
///
/// let mut sink = RecordingSink::new();
/// let outcome = CreateFloorFromLines::default().execute(&mut doc, &sample_outline(), &mut sink);
///
/// assert_eq!(outcome.result(), CommandResult::Succeeded);
/// assert_eq!(doc.floors().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CreateFloorFromLines {
    validator: LoopValidator,
    transaction_name: String,
    structural: bool,
}

impl Default for CreateFloorFromLines {
    fn default() -> Self {
        Self::new(LoopValidator::default())
    }
}

impl CreateFloorFromLines {
    pub fn new(validator: LoopValidator) -> Self {
        Self {
            validator,
            transaction_name: TRANSACTION_NAME.to_owned(),
            structural: false,
        }
    }

    pub fn with_transaction_name(mut self, name: impl Into<String>) -> Self {
        self.transaction_name = name.into();
        self
    }

    pub fn with_structural(mut self, structural: bool) -> Self {
        self.structural = structural;
        self
    }

    pub fn validator(&self) -> &LoopValidator {
        &self.validator
    }

    /// Runs the command against `host`.
    pub fn execute<H>(
        &self,
        host: &mut H,
        boundary: &[Segment],
        sink: &mut dyn DiagnosticSink,
    ) -> CommandOutcome<H::Floor>
    where
        H: LevelProvider
            + FloorTypeProvider
            + FloorFactory<
                Level = <H as LevelProvider>::Level,
                FloorType = <H as FloorTypeProvider>::FloorType,
            >,
    {
        if let Err(defect) = self.validator.check(boundary, sink) {
            tracing::warn!(%defect, "outline rejected");
            return CommandOutcome::Failed(defect.into());
        }

        match self.build(host, boundary) {
            Ok(floor) => {
                tracing::info!(lines = boundary.len(), "floor created");
                sink.emit(Severity::Success, SUCCESS_MESSAGE);
                CommandOutcome::Succeeded(floor)
            }
            Err(failure) => {
                tracing::warn!(%failure, "floor command failed");
                sink.emit(Severity::Error, &failure.to_string());
                CommandOutcome::Failed(failure)
            }
        }
    }

    fn build<H>(
        &self,
        host: &mut H,
        boundary: &[Segment],
    ) -> Result<H::Floor, CommandFailure>
    where
        H: LevelProvider
            + FloorTypeProvider
            + FloorFactory<
                Level = <H as LevelProvider>::Level,
                FloorType = <H as FloorTypeProvider>::FloorType,
            >,
    {
        let level = LevelProvider::first_level(host).ok_or(CommandFailure::NoLevel)?;
        let floor_type =
            FloorTypeProvider::first_floor_type(host).ok_or(CommandFailure::NoFloorType)?;

        host.start_transaction(&self.transaction_name)
            .map_err(|e| CommandFailure::Unexpected(e.to_string()))?;
        tracing::debug!(transaction = %self.transaction_name, "transaction started");

        let created = host.new_floor(boundary, &floor_type, &level, self.structural);
        let floor = match created {
            Ok(Some(floor)) => floor,
            Ok(None) => {
                rollback(host);
                return Err(CommandFailure::FloorNotCreated);
            }
            Err(e) => {
                rollback(host);
                return Err(CommandFailure::Creation(e.to_string()));
            }
        };

        if let Err(e) = host.commit_transaction() {
            rollback(host);
            return Err(CommandFailure::Unexpected(e.to_string()));
        }

        Ok(floor)
    }
}

/// Rolls back, logging rather than surfacing a failure to do so.
fn rollback<H: FloorFactory>(host: &mut H) {
    if let Err(e) = host.rollback_transaction() {
        tracing::error!(error = %e, "rollback failed");
    }
}
