use std::fmt;

use serde::Serialize;

/// Identifier wrapper for applicants. Assigned once when the roster is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Candidate moving through the admission stages.
///
/// Scores stay `None` until the stage that owns them has run; the merit stage
/// treats a missing score as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applicant {
    id: ApplicantId,
    pub name: String,
    pub age: u32,
    pub test_score: Option<f64>,
    pub interview_score: Option<f64>,
}

impl Applicant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: ApplicantId(id.into()),
            name: name.into(),
            age,
            test_score: None,
            interview_score: None,
        }
    }

    pub fn id(&self) -> &ApplicantId {
        &self.id
    }

    /// Sum used to order the merit list.
    pub fn combined_score(&self) -> f64 {
        self.test_score.unwrap_or(0.0) + self.interview_score.unwrap_or(0.0)
    }
}

impl fmt::Display for Applicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Applicant {{ id: {}, name: {}, age: {}, test_score: {}, interview_score: {} }}",
            self.id,
            self.name,
            self.age,
            DisplayScore(self.test_score),
            DisplayScore(self.interview_score)
        )
    }
}

struct DisplayScore(Option<f64>);

impl fmt::Display for DisplayScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(score) => write!(f, "{score:.2}"),
            None => f.write_str("-"),
        }
    }
}

/// Ordered sequence of applicants flowing between stages.
///
/// Entries borrow from the [`Roster`], so score updates made by one stage stay
/// on the roster even after a later stage drops the applicant.
pub type Cohort<'a> = Vec<&'a mut Applicant>;

/// Owner of every applicant record for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    applicants: Vec<Applicant>,
}

impl Roster {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self { applicants }
    }

    /// The five-person intake used by the console demo.
    pub fn sample() -> Self {
        Self::new(vec![
            Applicant::new("1", "Alice", 20),
            Applicant::new("2", "Bob", 17),
            Applicant::new("3", "Charlie", 19),
            Applicant::new("4", "David", 22),
            Applicant::new("5", "Eve", 18),
        ])
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn get(&self, id: &str) -> Option<&Applicant> {
        self.applicants.iter().find(|applicant| applicant.id.0 == id)
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    /// Hand out the whole roster, in order, as the first stage's input.
    pub fn cohort(&mut self) -> Cohort<'_> {
        self.applicants.iter_mut().collect()
    }
}

/// Render a cohort as a bracketed, one-applicant-per-line listing.
pub fn format_cohort(cohort: &[&mut Applicant]) -> String {
    if cohort.is_empty() {
        return "[]".to_string();
    }

    let entries: Vec<String> = cohort
        .iter()
        .map(|applicant| format!("  {applicant}"))
        .collect();
    format!("[\n{}\n]", entries.join(",\n"))
}
