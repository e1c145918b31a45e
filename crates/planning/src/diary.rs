use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use chrono::{Duration, NaiveDate};
use mealprep_catalog::Meal;
use serde::{Deserialize, Serialize};

/// Date-to-meal mapping spanning confirmed history and dates being planned.
///
/// Backed by a `BTreeMap` so chronological queries (nearest populated
/// neighbor on either side of a date, windows around a date) are range
/// scans. The diary may have gaps; "neighboring entries" always means
/// nearest populated dates, not adjacent calendar days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealDiary {
    entries: BTreeMap<NaiveDate, Meal>,
}

impl MealDiary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, meal: Meal) -> Option<Meal> {
        self.entries.insert(date, meal)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Meal> {
        self.entries.get(&date)
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<Meal> {
        self.entries.remove(&date)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Meal)> {
        self.entries.iter().map(|(date, meal)| (*date, meal))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    /// Nearest populated entry strictly before `date`.
    pub fn previous_entry(&self, date: NaiveDate) -> Option<(NaiveDate, &Meal)> {
        self.entries
            .range(..date)
            .next_back()
            .map(|(d, meal)| (*d, meal))
    }

    /// Nearest populated entry strictly after `date`.
    pub fn next_entry(&self, date: NaiveDate) -> Option<(NaiveDate, &Meal)> {
        self.entries
            .range((Bound::Excluded(date), Bound::Unbounded))
            .next()
            .map(|(d, meal)| (*d, meal))
    }

    /// Entries within `days` calendar days of `date`, on either side,
    /// excluding `date` itself.
    pub fn entries_within(
        &self,
        date: NaiveDate,
        days: i64,
    ) -> impl Iterator<Item = (NaiveDate, &Meal)> {
        let window = Duration::days(days);
        self.entries
            .range(date - window..=date + window)
            .filter(move |(d, _)| **d != date)
            .map(|(d, meal)| (*d, meal))
    }

    /// A new diary with `other`'s entries layered over this one's.
    pub fn upsert(&self, other: &MealDiary) -> MealDiary {
        let mut merged = self.entries.clone();
        merged.extend(other.entries.clone());
        MealDiary { entries: merged }
    }

    /// The entries of this diary whose dates are absent from `other`.
    pub fn difference(&self, other: &MealDiary) -> MealDiary {
        MealDiary {
            entries: self
                .entries
                .iter()
                .filter(|(date, _)| !other.contains_date(**date))
                .map(|(date, meal)| (*date, meal.clone()))
                .collect(),
        }
    }

    /// A copy without the given dates.
    pub fn except_dates(&self, dates: impl IntoIterator<Item = NaiveDate>) -> MealDiary {
        let excluded: std::collections::BTreeSet<NaiveDate> = dates.into_iter().collect();
        MealDiary {
            entries: self
                .entries
                .iter()
                .filter(|(date, _)| !excluded.contains(*date))
                .map(|(date, meal)| (*date, meal.clone()))
                .collect(),
        }
    }

    /// Entries with date >= `min` and, when given, date < `max`.
    pub fn filter_dates(&self, min: NaiveDate, max: Option<NaiveDate>) -> MealDiary {
        MealDiary {
            entries: self
                .entries
                .iter()
                .filter(|(date, _)| **date >= min && max.is_none_or(|m| **date < m))
                .map(|(date, meal)| (*date, meal.clone()))
                .collect(),
        }
    }
}

impl FromIterator<(NaiveDate, Meal)> for MealDiary {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, Meal)>>(iter: T) -> Self {
        MealDiary {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for MealDiary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (date, meal)) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", date.format("%a %d %b %Y"), meal.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_catalog::{Meal, Meat};

    fn meal(name: &str, meat: Meat) -> Meal {
        Meal::new(name, meat, [], vec![]).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn test_neighbor_lookup_skips_gaps() {
        let diary: MealDiary = [
            (date(3), meal("Pizza", Meat::Pork)),
            (date(10), meal("Fish Pie", Meat::Fish)),
        ]
        .into_iter()
        .collect();

        let (previous, _) = diary.previous_entry(date(7)).unwrap();
        assert_eq!(previous, date(3));

        let (next, _) = diary.next_entry(date(7)).unwrap();
        assert_eq!(next, date(10));

        assert!(diary.previous_entry(date(3)).is_none());
        assert!(diary.next_entry(date(10)).is_none());
    }

    #[test]
    fn test_entries_within_excludes_the_target_date() {
        let diary: MealDiary = [
            (date(5), meal("Pizza", Meat::Pork)),
            (date(8), meal("Moussaka", Meat::Lamb)),
            (date(20), meal("Fish Pie", Meat::Fish)),
        ]
        .into_iter()
        .collect();

        let nearby: Vec<NaiveDate> = diary.entries_within(date(8), 7).map(|(d, _)| d).collect();
        assert_eq!(nearby, vec![date(5)]);
    }

    #[test]
    fn test_upsert_prefers_the_other_diary() {
        let base: MealDiary = [(date(1), meal("Pizza", Meat::Pork))].into_iter().collect();
        let layer: MealDiary = [
            (date(1), meal("Moussaka", Meat::Lamb)),
            (date(2), meal("Fish Pie", Meat::Fish)),
        ]
        .into_iter()
        .collect();

        let merged = base.upsert(&layer);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(date(1)).unwrap().name(), "Moussaka");
    }

    #[test]
    fn test_difference_returns_only_new_dates() {
        let original: MealDiary = [(date(1), meal("Pizza", Meat::Pork))].into_iter().collect();
        let extended = {
            let mut d = original.clone();
            d.insert(date(2), meal("Fish Pie", Meat::Fish));
            d
        };

        let fresh = extended.difference(&original);
        assert_eq!(fresh.dates().collect::<Vec<_>>(), vec![date(2)]);
    }

    #[test]
    fn test_display_lists_entries_chronologically() {
        let diary: MealDiary = [
            (date(11), meal("Fish Pie", Meat::Fish)),
            (date(10), meal("Pizza", Meat::Pork)),
        ]
        .into_iter()
        .collect();

        let rendered = diary.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Pizza"));
        assert!(lines[1].contains("Fish Pie"));
    }
}
