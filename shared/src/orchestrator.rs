//! Two-stage analysis state machine.
//!
//! The orchestrator never performs I/O. It hands out [`Command`]s for the
//! caller to run (see [`crate::client::execute`]) and consumes the resulting
//! [`AnalysisEvent`]s. Each command is tagged with the [`RunId`] of the run
//! that issued it; completions for any other run are dropped.

use log::{debug, info, warn};
use strum_macros::Display;

use crate::error::AnalysisError;
use crate::intake::SelectedImage;
use crate::models::{DetectionOutcome, DiagnosisOutcome, RunId};
use crate::stage::StageState;

pub const DETECTION_FAILED_MESSAGE: &str =
    "Optic disc detection could not complete. Please try again.";
pub const DIAGNOSIS_FAILED_MESSAGE: &str = "The diagnosis could not complete. Please try again.";

/// A remote call the caller must perform on behalf of the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    Detect { run: RunId, file: F },
    Diagnose { run: RunId, file: F },
}

impl<F> Command<F> {
    pub fn run(&self) -> RunId {
        match self {
            Command::Detect { run, .. } | Command::Diagnose { run, .. } => *run,
        }
    }
}

/// Completion of a [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    Detected {
        run: RunId,
        result: Result<DetectionOutcome, AnalysisError>,
    },
    Diagnosed {
        run: RunId,
        result: Result<DiagnosisOutcome, AnalysisError>,
    },
}

impl AnalysisEvent {
    pub fn run(&self) -> RunId {
        match self {
            AnalysisEvent::Detected { run, .. } | AnalysisEvent::Diagnosed { run, .. } => *run,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Empty,
    Stage1Loading,
    Stage1Error,
    Stage2Loading,
    Stage2Error,
    Stage2Done,
}

pub struct Orchestrator<F> {
    run: Option<RunId>,
    image: Option<SelectedImage<F>>,
    detection: StageState<DetectionOutcome>,
    diagnosis: StageState<DiagnosisOutcome>,
}

impl<F> Default for Orchestrator<F> {
    fn default() -> Self {
        Self {
            run: None,
            image: None,
            detection: StageState::Idle,
            diagnosis: StageState::Idle,
        }
    }
}

impl<F: Clone> Orchestrator<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run for `image`, superseding whatever was in flight.
    pub fn select(&mut self, image: SelectedImage<F>) -> Command<F> {
        if let Some(run) = self.run.filter(|_| self.phase().is_in_flight()) {
            info!("Superseding in-flight run {}", run);
        }
        let file = image.file.clone();
        self.image = Some(image);
        self.start_detection(file)
    }

    /// Applies a completion and returns the follow-up command, if any.
    pub fn apply(&mut self, event: AnalysisEvent) -> Option<Command<F>> {
        if self.run != Some(event.run()) {
            warn!("Dropping stale response for run {}", event.run());
            return None;
        }

        match event {
            AnalysisEvent::Detected { run, result } => {
                if !self.detection.is_loading() {
                    warn!("Unexpected detection response for run {}", run);
                    return None;
                }
                match result {
                    Ok(outcome) => {
                        info!(
                            "Optic disc detection finished for run {} ({} regions)",
                            run,
                            outcome.detections().len()
                        );
                        let file = self.image.as_ref()?.file.clone();
                        self.detection = StageState::Resolved(outcome);
                        self.diagnosis = StageState::Loading;
                        debug!("Issuing diagnosis for run {}", run);
                        Some(Command::Diagnose { run, file })
                    }
                    Err(err) => {
                        warn!("Optic disc detection failed for run {}: {}", run, err);
                        self.detection = StageState::Failed(DETECTION_FAILED_MESSAGE.to_string());
                        None
                    }
                }
            }
            AnalysisEvent::Diagnosed { run, result } => {
                if !self.diagnosis.is_loading() {
                    warn!("Unexpected diagnosis response for run {}", run);
                    return None;
                }
                match result {
                    Ok(outcome) => {
                        info!(
                            "Diagnosis finished for run {}: {} ({}%)",
                            run,
                            outcome.verdict(),
                            outcome.confidence
                        );
                        self.diagnosis = StageState::Resolved(outcome);
                    }
                    Err(err) => {
                        warn!("Diagnosis failed for run {}: {}", run, err);
                        self.diagnosis = StageState::Failed(DIAGNOSIS_FAILED_MESSAGE.to_string());
                    }
                }
                None
            }
        }
    }

    /// Re-runs the whole analysis for the current image after a detection failure.
    pub fn retry_detection(&mut self) -> Option<Command<F>> {
        if !self.detection.is_failed() {
            return None;
        }
        let file = self.image.as_ref()?.file.clone();
        info!("Retrying optic disc detection");
        Some(self.start_detection(file))
    }

    /// Re-issues only the diagnosis; the detection result stays on screen.
    pub fn retry_diagnosis(&mut self) -> Option<Command<F>> {
        if !self.diagnosis.is_failed() || self.detection.outcome().is_none() {
            return None;
        }
        let file = self.image.as_ref()?.file.clone();
        let run = RunId::new();
        self.run = Some(run);
        self.diagnosis = StageState::Loading;
        info!("Retrying diagnosis as run {}", run);
        Some(Command::Diagnose { run, file })
    }

    /// Back to [`Phase::Empty`]. Responses still in flight become stale.
    pub fn reset(&mut self) {
        if let Some(run) = self.run {
            info!("Resetting analysis (was run {}, {})", run, self.phase());
        }
        *self = Self::default();
    }

    fn start_detection(&mut self, file: F) -> Command<F> {
        let run = RunId::new();
        self.run = Some(run);
        self.detection = StageState::Loading;
        self.diagnosis = StageState::Idle;
        info!("Starting run {}", run);
        Command::Detect { run, file }
    }
}

impl<F> Orchestrator<F> {
    pub fn phase(&self) -> Phase {
        if self.image.is_none() {
            return Phase::Empty;
        }
        match (&self.detection, &self.diagnosis) {
            (StageState::Failed(_), _) => Phase::Stage1Error,
            (StageState::Resolved(_), StageState::Loading) => Phase::Stage2Loading,
            (StageState::Resolved(_), StageState::Failed(_)) => Phase::Stage2Error,
            (StageState::Resolved(_), StageState::Resolved(_)) => Phase::Stage2Done,
            _ => Phase::Stage1Loading,
        }
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.run
    }

    pub fn image(&self) -> Option<&SelectedImage<F>> {
        self.image.as_ref()
    }

    pub fn detection(&self) -> &StageState<DetectionOutcome> {
        &self.detection
    }

    pub fn diagnosis(&self) -> &StageState<DiagnosisOutcome> {
        &self.diagnosis
    }
}

impl Phase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Phase::Stage1Loading | Phase::Stage2Loading)
    }
}
