use std::cmp::Ordering;

use super::super::domain::Cohort;
use super::super::notification::Observers;
use super::{FilterStage, StageKind};

/// Orders the cohort by descending combined score. Keeps everyone.
///
/// The sort is stable: applicants with equal totals keep their incoming order.
#[derive(Debug, Default)]
pub struct MeritRankStage {
    observers: Observers,
}

impl MeritRankStage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStage for MeritRankStage {
    fn kind(&self) -> StageKind {
        StageKind::MeritRank
    }

    fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    fn process<'a>(&mut self, mut cohort: Cohort<'a>) -> Cohort<'a> {
        let total = cohort.len();
        cohort.sort_by(|a, b| {
            b.combined_score()
                .partial_cmp(&a.combined_score())
                .unwrap_or(Ordering::Equal)
        });

        self.observers
            .publish(&self.kind().completion_message(total, cohort.len()));
        cohort
    }
}
