use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("unknown rule \"{0}\" in configuration")]
    UnknownRule(String),

    #[error("planning range contains duplicate date {0}")]
    DuplicateDate(NaiveDate),

    #[error("date {0} already has a diary entry")]
    DateAlreadyPlanned(NaiveDate),

    #[error("every candidate for {date} has been declined ({rejected} rejections)")]
    CandidatesExhausted { date: NaiveDate, rejected: usize },

    #[error("no admissible plan found after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

impl PlanError {
    /// True for the terminal conditions: the search space is gone and
    /// retrying cannot help. Configuration errors are not infeasibility.
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            PlanError::CandidatesExhausted { .. } | PlanError::AttemptsExhausted { .. }
        )
    }
}
