//! Applicant admission pipeline.
//!
//! A roster of applicants is pushed through eligibility, test, interview, and merit
//! stages. Each stage reports its outcome to the attached notification sinks, and
//! the controller asks a confirmation gate before running each one.

pub mod domain;
pub mod gate;
pub mod notification;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod stages;

#[cfg(test)]
mod tests;

pub use domain::{format_cohort, Applicant, ApplicantId, Cohort, Roster};
pub use gate::{
    AutoConfirm, Confirmation, ConfirmationGate, ConsoleGate, ScriptedGate, STAGE_PROMPT,
};
pub use notification::{
    ConsoleNotifier, MemoryNotifier, NotificationSink, Observers, TracingNotifier,
};
pub use pipeline::{AdmissionPipeline, PipelineError, PipelineOutcome, PipelineState, StageRecord};
pub use report::{render_roster, AdmissionSummary, MeritEntryView, RunStatus, StageSummaryView};
pub use scoring::{FixedScore, ScoreGenerator, UniformScores};
pub use stages::{
    standard_stages, EligibilityStage, FilterStage, InterviewStage, MeritRankStage, StageKind,
    TestStage,
};
