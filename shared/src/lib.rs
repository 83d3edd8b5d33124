pub mod client;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod orchestrator;
pub mod stage;
pub mod view;

pub use client::{AnalysisClient, decode_response, execute, with_deadline};
pub use config::ClientConfig;
pub use error::{AnalysisError, IntakeError};
pub use intake::{FileMeta, Intake, SelectedImage, format_file_size};
pub use models::{Detection, DetectionOutcome, DiagnosisOutcome, RunId, Verdict};
pub use orchestrator::{AnalysisEvent, Command, Orchestrator, Phase};
pub use stage::{StageState, StageStatus};
