use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::workflows::admission::domain::{Applicant, Roster};
use crate::workflows::admission::gate::ScriptedGate;
use crate::workflows::admission::notification::MemoryNotifier;
use crate::workflows::admission::pipeline::AdmissionPipeline;
use crate::workflows::admission::scoring::{FixedScore, ScoreGenerator};
use crate::workflows::admission::stages::{
    EligibilityStage, InterviewStage, MeritRankStage, TestStage,
};

pub(super) const YES_TO_ALL: [&str; 4] = ["yes", "yes", "yes", "yes"];

/// Generator that replays `scores` in order, one per draw.
pub(super) fn scripted_scores(scores: &[f64]) -> impl ScoreGenerator + 'static {
    let mut queue: VecDeque<f64> = scores.iter().copied().collect();
    move |_scale: f64| queue.pop_front().expect("scripted score available")
}

pub(super) fn scored(id: &str, age: u32, test: f64, interview: f64) -> Applicant {
    let mut applicant = Applicant::new(id, format!("Applicant {id}"), age);
    applicant.test_score = Some(test);
    applicant.interview_score = Some(interview);
    applicant
}

pub(super) fn ids(applicants: &[&mut Applicant]) -> Vec<String> {
    applicants
        .iter()
        .map(|applicant| applicant.id().0.clone())
        .collect()
}

pub(super) fn roster_ids(roster: &Roster) -> Vec<String> {
    roster
        .applicants()
        .iter()
        .map(|applicant| applicant.id().0.clone())
        .collect()
}

pub(super) type TestPipeline = AdmissionPipeline<ScriptedGate, Vec<u8>>;

/// Standard stage order with the given score generators in place of random draws.
pub(super) fn pipeline_with_generators(
    replies: &[&str],
    test: impl ScoreGenerator + 'static,
    interview: impl ScoreGenerator + 'static,
) -> (TestPipeline, Arc<MemoryNotifier>) {
    let sink = Arc::new(MemoryNotifier::default());
    let gate = ScriptedGate::new(replies.iter().copied());
    let mut pipeline = AdmissionPipeline::new(sink.clone(), gate, Vec::new());
    pipeline.add_stage(EligibilityStage::new());
    pipeline.add_stage(TestStage::with_generator(test));
    pipeline.add_stage(InterviewStage::with_generator(interview));
    pipeline.add_stage(MeritRankStage::new());
    (pipeline, sink)
}

/// Every applicant scores 60 on the test and 6 in the interview.
pub(super) fn passing_pipeline(replies: &[&str]) -> (TestPipeline, Arc<MemoryNotifier>) {
    pipeline_with_generators(replies, FixedScore(60.0), FixedScore(6.0))
}

pub(super) fn transcript(pipeline: TestPipeline) -> String {
    String::from_utf8(pipeline.into_output()).expect("pipeline output is utf8")
}

/// Writer handle that several owners can append to, so the pipeline output and a
/// console sink land in one transcript.
#[derive(Debug, Clone, Default)]
pub(super) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(super) fn contents(&self) -> String {
        let bytes = self.0.lock().expect("buffer not poisoned").clone();
        String::from_utf8(bytes).expect("transcript is utf8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer not poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
