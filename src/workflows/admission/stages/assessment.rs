use tracing::debug;

use super::super::domain::{Applicant, Cohort};
use super::super::notification::Observers;
use super::super::scoring::{ScoreGenerator, UniformScores};
use super::{FilterStage, StageKind};

/// Test scores are drawn from `[0, TEST_SCALE)`.
pub const TEST_SCALE: f64 = 100.0;
pub const TEST_PASS_MARK: f64 = 50.0;

/// Interview scores are drawn from `[0, INTERVIEW_SCALE)`.
pub const INTERVIEW_SCALE: f64 = 10.0;
pub const INTERVIEW_PASS_MARK: f64 = 5.0;

/// Score every applicant first, then keep those at or above the pass mark.
///
/// Rejected applicants keep the score they were given.
fn score_and_select<'a>(
    kind: StageKind,
    cohort: Cohort<'a>,
    generator: &mut dyn ScoreGenerator,
    scale: f64,
    pass_mark: f64,
    assign: fn(&mut Applicant, f64),
) -> Cohort<'a> {
    let mut passed = Vec::with_capacity(cohort.len());
    for applicant in cohort {
        let score = generator.draw(scale);
        assign(applicant, score);
        if score >= pass_mark {
            passed.push(applicant);
        } else {
            debug!(
                stage = kind.label(),
                applicant = %applicant.id(),
                score,
                pass_mark,
                "below pass mark"
            );
        }
    }
    passed
}

/// Simulated written test.
pub struct TestStage {
    observers: Observers,
    generator: Box<dyn ScoreGenerator>,
}

impl TestStage {
    pub fn new() -> Self {
        Self::with_generator(UniformScores::new())
    }

    pub fn with_generator(generator: impl ScoreGenerator + 'static) -> Self {
        Self {
            observers: Observers::default(),
            generator: Box::new(generator),
        }
    }
}

impl Default for TestStage {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStage for TestStage {
    fn kind(&self) -> StageKind {
        StageKind::Test
    }

    fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    fn process<'a>(&mut self, cohort: Cohort<'a>) -> Cohort<'a> {
        let total = cohort.len();
        let passed = score_and_select(
            self.kind(),
            cohort,
            self.generator.as_mut(),
            TEST_SCALE,
            TEST_PASS_MARK,
            |applicant, score| applicant.test_score = Some(score),
        );

        self.observers
            .publish(&self.kind().completion_message(total, passed.len()));
        passed
    }
}

/// Simulated interview.
pub struct InterviewStage {
    observers: Observers,
    generator: Box<dyn ScoreGenerator>,
}

impl InterviewStage {
    pub fn new() -> Self {
        Self::with_generator(UniformScores::new())
    }

    pub fn with_generator(generator: impl ScoreGenerator + 'static) -> Self {
        Self {
            observers: Observers::default(),
            generator: Box::new(generator),
        }
    }
}

impl Default for InterviewStage {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStage for InterviewStage {
    fn kind(&self) -> StageKind {
        StageKind::Interview
    }

    fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    fn process<'a>(&mut self, cohort: Cohort<'a>) -> Cohort<'a> {
        let total = cohort.len();
        let passed = score_and_select(
            self.kind(),
            cohort,
            self.generator.as_mut(),
            INTERVIEW_SCALE,
            INTERVIEW_PASS_MARK,
            |applicant, score| applicant.interview_score = Some(score),
        );

        self.observers
            .publish(&self.kind().completion_message(total, passed.len()));
        passed
    }
}
