//! Filter stages applied to the applicant cohort, in pipeline order.

mod assessment;
mod eligibility;
mod merit;

pub use assessment::{
    InterviewStage, TestStage, INTERVIEW_PASS_MARK, INTERVIEW_SCALE, TEST_PASS_MARK, TEST_SCALE,
};
pub use eligibility::{EligibilityStage, MINIMUM_AGE};
pub use merit::MeritRankStage;

use std::sync::Arc;

use serde::Serialize;

use super::domain::Cohort;
use super::notification::{NotificationSink, Observers};

/// Identifies each stage of the admission pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Eligibility,
    Test,
    Interview,
    MeritRank,
}

impl StageKind {
    pub const fn label(self) -> &'static str {
        match self {
            StageKind::Eligibility => "Eligibility",
            StageKind::Test => "Test",
            StageKind::Interview => "Interview",
            StageKind::MeritRank => "Merit List",
        }
    }

    /// Whether the stage drops applicants, as opposed to only reordering them.
    pub const fn is_filtering(self) -> bool {
        !matches!(self, StageKind::MeritRank)
    }

    pub fn completion_message(self, input: usize, output: usize) -> String {
        if self.is_filtering() {
            format!(
                "{output} out of {input} applicants passed the {} Filter.",
                self.label()
            )
        } else {
            format!("{} generated for {output} applicants.", self.label())
        }
    }
}

/// A single step of the admission pipeline.
///
/// `process` takes ownership of the incoming cohort and returns the cohort for the
/// next stage. Implementations may drop or reorder entries but never add any, and
/// publish exactly one completion message per call.
pub trait FilterStage {
    fn kind(&self) -> StageKind;

    fn observers_mut(&mut self) -> &mut Observers;

    fn attach(&mut self, sink: Arc<dyn NotificationSink>) {
        self.observers_mut().attach(sink);
    }

    fn process<'a>(&mut self, cohort: Cohort<'a>) -> Cohort<'a>;
}

/// The four stages in their standard order, using uniform random draws for scores.
pub fn standard_stages() -> Vec<Box<dyn FilterStage>> {
    let stages: [Box<dyn FilterStage>; 4] = [
        Box::new(EligibilityStage::new()),
        Box::new(TestStage::new()),
        Box::new(InterviewStage::new()),
        Box::new(MeritRankStage::new()),
    ];
    Vec::from(stages)
}
