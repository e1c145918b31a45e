use std::collections::BTreeSet;

use chrono::NaiveDate;

/// The (date, meal) pairs the user has declined this session.
///
/// Append-only: nothing ever leaves the set, so a declined pairing can never
/// be offered again within the session. Not persisted; a fresh process
/// starts with a clean slate.
#[derive(Debug, Clone, Default)]
pub struct RejectionSet {
    declined: BTreeSet<(NaiveDate, String)>,
}

impl RejectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, date: NaiveDate, meal: impl Into<String>) {
        self.declined.insert((date, meal.into()));
    }

    pub fn is_rejected(&self, date: NaiveDate, meal: &str) -> bool {
        self.declined.contains(&(date, meal.to_string()))
    }

    /// How many distinct meals have been declined for a date.
    pub fn rejected_for(&self, date: NaiveDate) -> usize {
        self.declined.iter().filter(|(d, _)| *d == date).count()
    }

    pub fn len(&self) -> usize {
        self.declined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declined.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.declined.iter().map(|(date, meal)| (*date, meal.as_str()))
    }
}
