use serde::Serialize;

use super::domain::{Applicant, Roster};
use super::pipeline::{PipelineOutcome, StageRecord};
use super::stages::StageKind;

/// Serializable summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionSummary {
    pub outcome: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted_at: Option<StageKind>,
    pub stages: Vec<StageSummaryView>,
    pub merit_list: Vec<MeritEntryView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSummaryView {
    pub stage: StageKind,
    pub stage_label: &'static str,
    pub input: usize,
    pub passed: usize,
}

impl From<&StageRecord> for StageSummaryView {
    fn from(record: &StageRecord) -> Self {
        Self {
            stage: record.stage,
            stage_label: record.stage.label(),
            input: record.input,
            passed: record.output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeritEntryView {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub age: u32,
    pub test_score: Option<f64>,
    pub interview_score: Option<f64>,
    pub combined_score: f64,
}

impl MeritEntryView {
    fn new(rank: usize, applicant: &Applicant) -> Self {
        Self {
            rank,
            id: applicant.id().0.clone(),
            name: applicant.name.clone(),
            age: applicant.age,
            test_score: applicant.test_score,
            interview_score: applicant.interview_score,
            combined_score: applicant.combined_score(),
        }
    }
}

impl AdmissionSummary {
    /// `planned` is the stage order the pipeline was configured with, used to name
    /// the stage an aborted run stopped at.
    pub fn from_outcome(outcome: &PipelineOutcome<'_>, planned: &[StageKind]) -> Self {
        let stages = outcome.stages().iter().map(StageSummaryView::from).collect();

        match outcome {
            PipelineOutcome::Completed { merit_list, .. } => Self {
                outcome: RunStatus::Completed,
                aborted_at: None,
                stages,
                merit_list: merit_list
                    .iter()
                    .enumerate()
                    .map(|(index, applicant)| MeritEntryView::new(index + 1, applicant))
                    .collect(),
            },
            PipelineOutcome::Aborted { at_stage, .. } => Self {
                outcome: RunStatus::Aborted,
                aborted_at: planned.get(*at_stage).copied(),
                stages,
                merit_list: Vec::new(),
            },
        }
    }
}

/// Plain-text listing of a roster, one applicant per line.
pub fn render_roster(roster: &Roster) -> String {
    let mut lines = vec![format!("Roster ({} applicants)", roster.len())];
    lines.extend(
        roster
            .applicants()
            .iter()
            .map(|applicant| format!("- {applicant}")),
    );
    lines.join("\n")
}
