use std::sync::Arc;

use super::common::*;
use crate::workflows::admission::domain::{Applicant, Roster};
use crate::workflows::admission::gate::ScriptedGate;
use crate::workflows::admission::notification::MemoryNotifier;
use crate::workflows::admission::pipeline::AdmissionPipeline;
use crate::workflows::admission::stages::{
    INTERVIEW_PASS_MARK, INTERVIEW_SCALE, MINIMUM_AGE, TEST_PASS_MARK, TEST_SCALE,
};

const RUNS: usize = 200;

fn parse_counts(message: &str) -> Option<(usize, usize)> {
    let mut words = message.split_whitespace();
    let passed = words.next()?.parse().ok()?;
    if words.next()? != "out" || words.next()? != "of" {
        return None;
    }
    let total = words.next()?.parse().ok()?;
    Some((passed, total))
}

#[test]
fn random_runs_respect_stage_invariants() {
    for _ in 0..RUNS {
        let sink = Arc::new(MemoryNotifier::default());
        let mut pipeline =
            AdmissionPipeline::standard(sink.clone(), ScriptedGate::new(YES_TO_ALL), Vec::new());
        let mut roster = Roster::sample();

        let outcome = pipeline.start(roster.cohort()).expect("pipeline runs");
        let records = outcome.stages().to_vec();
        let merit_list = outcome.merit_list().expect("run completes");

        assert_eq!(records.len(), 4);
        assert_eq!((records[0].input, records[0].output), (5, 4));
        for pair in records.windows(2) {
            assert_eq!(pair[0].output, pair[1].input);
        }
        for record in &records {
            assert!(record.output <= record.input);
        }
        assert_eq!(records[3].input, records[3].output);
        assert_eq!(merit_list.len(), records[3].output);

        for applicant in merit_list {
            assert!(applicant.age >= MINIMUM_AGE);
            assert!(applicant.test_score.is_some_and(|s| s >= TEST_PASS_MARK));
            assert!(applicant
                .interview_score
                .is_some_and(|s| s >= INTERVIEW_PASS_MARK));
        }
        assert!(merit_list
            .windows(2)
            .all(|pair| pair[0].combined_score() >= pair[1].combined_score()));
        drop(outcome);

        let messages = sink.messages();
        assert_eq!(messages.len(), 4);
        for (message, record) in messages.iter().take(3).zip(&records) {
            assert_eq!(
                parse_counts(message),
                Some((record.output, record.input)),
                "notification {message:?} disagrees with stage record"
            );
        }

        for applicant in roster.applicants() {
            if let Some(score) = applicant.test_score {
                assert!((0.0..TEST_SCALE).contains(&score));
            }
            if let Some(score) = applicant.interview_score {
                assert!((0.0..INTERVIEW_SCALE).contains(&score));
                assert!(applicant.test_score.is_some_and(|s| s >= TEST_PASS_MARK));
            }
        }
        let bob: &Applicant = roster.get("2").expect("bob on roster");
        assert!(bob.test_score.is_none());
    }
}

#[test]
fn merit_output_is_a_permutation_of_its_input() {
    for _ in 0..RUNS {
        let (mut pipeline, _sink) = pipeline_with_generators(
            &YES_TO_ALL,
            crate::workflows::admission::scoring::UniformScores::new(),
            crate::workflows::admission::scoring::UniformScores::new(),
        );
        let mut roster = Roster::sample();

        let outcome = pipeline.start(roster.cohort()).expect("pipeline runs");
        let mut ranked = ids(outcome.merit_list().expect("run completes"));
        let interview_output = outcome.stages()[2].output;
        drop(outcome);

        assert_eq!(ranked.len(), interview_output);
        ranked.sort();
        let mut survivors: Vec<String> = roster
            .applicants()
            .iter()
            .filter(|a| a.interview_score.is_some_and(|s| s >= INTERVIEW_PASS_MARK))
            .map(|a| a.id().0.clone())
            .collect();
        survivors.sort();
        assert_eq!(ranked, survivors);
    }
}
