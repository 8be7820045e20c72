use tracing::debug;

use super::super::domain::Cohort;
use super::super::notification::Observers;
use super::{FilterStage, StageKind};

/// Applicants younger than this are dropped.
pub const MINIMUM_AGE: u32 = 18;

/// Age gate. Deterministic; never touches scores.
#[derive(Debug, Default)]
pub struct EligibilityStage {
    observers: Observers,
}

impl EligibilityStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStage for EligibilityStage {
    fn kind(&self) -> StageKind {
        StageKind::Eligibility
    }

    fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    fn process<'a>(&mut self, cohort: Cohort<'a>) -> Cohort<'a> {
        let total = cohort.len();
        let eligible: Cohort<'a> = cohort
            .into_iter()
            .filter(|applicant| {
                let keep = applicant.age >= MINIMUM_AGE;
                if !keep {
                    debug!(applicant = %applicant.id(), age = applicant.age, "below minimum age");
                }
                keep
            })
            .collect();

        self.observers
            .publish(&self.kind().completion_message(total, eligible.len()));
        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::admission::domain::{Applicant, Roster};
    use crate::workflows::admission::notification::MemoryNotifier;
    use std::sync::Arc;

    #[test]
    fn keeps_adults_and_drops_minors() {
        let mut roster = Roster::new(vec![
            Applicant::new("1", "Ana", 17),
            Applicant::new("2", "Ben", 18),
            Applicant::new("3", "Cyd", 0),
            Applicant::new("4", "Dov", 65),
        ]);
        let sink = Arc::new(MemoryNotifier::default());
        let mut stage = EligibilityStage::new();
        stage.attach(sink.clone());

        let output = stage.process(roster.cohort());
        let ids: Vec<&str> = output.iter().map(|a| a.id().0.as_str()).collect();

        assert_eq!(ids, vec!["2", "4"]);
        assert_eq!(
            sink.messages(),
            vec!["2 out of 4 applicants passed the Eligibility Filter."]
        );
    }

    #[test]
    fn empty_cohort_reports_zero_of_zero() {
        let sink = Arc::new(MemoryNotifier::default());
        let mut stage = EligibilityStage::new();
        stage.attach(sink.clone());

        let output = stage.process(Vec::new());

        assert!(output.is_empty());
        assert_eq!(
            sink.messages(),
            vec!["0 out of 0 applicants passed the Eligibility Filter."]
        );
    }
}
