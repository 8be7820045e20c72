use std::io::{self, Write};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{format_cohort, Applicant, Cohort};
use super::gate::{Confirmation, ConfirmationGate, STAGE_PROMPT};
use super::notification::NotificationSink;
use super::stages::{standard_stages, FilterStage, StageKind};

/// Where the controller is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    AwaitingConfirmation(usize),
    Running(usize),
    Aborted,
    Completed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Aborted | PipelineState::Completed)
    }
}

/// Cohort sizes before and after one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageRecord {
    pub stage: StageKind,
    pub input: usize,
    pub output: usize,
}

/// Result of [`AdmissionPipeline::start`].
#[derive(Debug)]
pub enum PipelineOutcome<'a> {
    Completed {
        merit_list: Cohort<'a>,
        stages: Vec<StageRecord>,
    },
    Aborted {
        /// Index of the stage the operator declined.
        at_stage: usize,
        stages: Vec<StageRecord>,
    },
}

impl<'a> PipelineOutcome<'a> {
    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineOutcome::Completed { .. })
    }

    pub fn stages(&self) -> &[StageRecord] {
        match self {
            PipelineOutcome::Completed { stages, .. } | PipelineOutcome::Aborted { stages, .. } => {
                stages
            }
        }
    }

    pub fn merit_list(&self) -> Option<&[&'a mut Applicant]> {
        match self {
            PipelineOutcome::Completed { merit_list, .. } => Some(merit_list.as_slice()),
            PipelineOutcome::Aborted { .. } => None,
        }
    }
}

/// Error raised while driving the pipeline console.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read operator confirmation: {0}")]
    Confirmation(#[source] io::Error),
    #[error("failed to write pipeline output: {0}")]
    Output(#[source] io::Error),
}

/// Runs the filter stages in order, asking the gate before each one.
///
/// Every stage is bound to the controller's notification sinks when it is added,
/// and sinks added later are bound to the stages already present.
pub struct AdmissionPipeline<G, W> {
    stages: Vec<Box<dyn FilterStage>>,
    sinks: Vec<Arc<dyn NotificationSink>>,
    gate: G,
    output: W,
    state: PipelineState,
}

impl<G, W> AdmissionPipeline<G, W>
where
    G: ConfirmationGate,
    W: Write,
{
    pub fn new(notifications: Arc<dyn NotificationSink>, gate: G, output: W) -> Self {
        Self {
            stages: Vec::new(),
            sinks: vec![notifications],
            gate,
            output,
            state: PipelineState::Completed,
        }
    }

    /// Controller preloaded with eligibility, test, interview, and merit stages.
    pub fn standard(notifications: Arc<dyn NotificationSink>, gate: G, output: W) -> Self {
        let mut pipeline = Self::new(notifications, gate, output);
        for stage in standard_stages() {
            pipeline.add_boxed_stage(stage);
        }
        pipeline
    }

    pub fn add_sink(&mut self, sink: Arc<dyn NotificationSink>) {
        for stage in &mut self.stages {
            stage.attach(sink.clone());
        }
        self.sinks.push(sink);
    }

    pub fn add_stage(&mut self, stage: impl FilterStage + 'static) {
        self.add_boxed_stage(Box::new(stage));
    }

    pub fn add_boxed_stage(&mut self, mut stage: Box<dyn FilterStage>) {
        for sink in &self.sinks {
            stage.attach(sink.clone());
        }
        self.stages.push(stage);
        self.state = PipelineState::AwaitingConfirmation(0);
    }

    pub fn stage_kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(|stage| stage.kind()).collect()
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive the cohort through every stage.
    ///
    /// Returns `Aborted` as soon as the gate declines or runs out of input; the
    /// remaining stages are not touched and no merit list is printed.
    pub fn start<'a>(&mut self, cohort: Cohort<'a>) -> Result<PipelineOutcome<'a>, PipelineError> {
        let mut current = cohort;
        let mut records = Vec::with_capacity(self.stages.len());

        for index in 0..self.stages.len() {
            self.state = PipelineState::AwaitingConfirmation(index);
            let answer = self
                .gate
                .confirm(STAGE_PROMPT)
                .map_err(PipelineError::Confirmation)?;

            if answer != Confirmation::Proceed {
                self.state = PipelineState::Aborted;
                info!(stage = index, ?answer, "admission process terminated");
                writeln!(self.output, "Admission process terminated.")
                    .and_then(|()| self.output.flush())
                    .map_err(PipelineError::Output)?;
                return Ok(PipelineOutcome::Aborted {
                    at_stage: index,
                    stages: records,
                });
            }

            self.state = PipelineState::Running(index);
            let stage = &mut self.stages[index];
            let kind = stage.kind();
            let input = current.len();
            debug!(stage = kind.label(), input, "stage started");

            current = stage.process(current);

            let record = StageRecord {
                stage: kind,
                input,
                output: current.len(),
            };
            info!(
                stage = kind.label(),
                input = record.input,
                passed = record.output,
                "stage finished"
            );
            records.push(record);

            writeln!(
                self.output,
                "Applicants after this stage: {}",
                format_cohort(&current)
            )
            .map_err(PipelineError::Output)?;
        }

        self.state = PipelineState::Completed;
        self.print_merit_list(&current)
            .map_err(PipelineError::Output)?;

        Ok(PipelineOutcome::Completed {
            merit_list: current,
            stages: records,
        })
    }

    fn print_merit_list(&mut self, merit_list: &[&mut Applicant]) -> io::Result<()> {
        writeln!(self.output, "\nFinal Merit List:")?;
        for applicant in merit_list {
            writeln!(self.output, "{applicant}")?;
        }
        self.output.flush()
    }
}
