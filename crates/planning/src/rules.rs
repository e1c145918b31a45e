use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use mealprep_catalog::{Meal, Meat, Tag};

use crate::diary::MealDiary;
use crate::error::PlanError;

/// Days within which the same meal may not repeat.
const MEAL_REPEAT_WINDOW_DAYS: i64 = 7;
/// Days within which a second fish meal may not appear.
const FISH_WINDOW_DAYS: i64 = 7;
/// Days within which a second pasta meal may not appear.
const PASTA_WINDOW_DAYS: i64 = 5;

/// A predicate deciding whether a candidate meal may be assigned to a date.
///
/// Implementations are stateless: the verdict is a pure function of the
/// candidate, the target date and the diary. Cross-date rules read the
/// diary's nearest populated neighbors or a day window around the target;
/// they never mutate anything.
pub trait Rule: Send + Sync {
    /// Stable identifier used to activate the rule from configuration.
    fn name(&self) -> &'static str;

    /// One line describing what the rule forbids.
    fn description(&self) -> &'static str;

    fn admits(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool;
}

/// Rejects a candidate whose meat matches the nearest populated diary entry
/// on either side of the target date. Strict equality on the meat value:
/// two meatless dishes back to back are rejected too.
pub struct NoConsecutiveSameMeat;

impl Rule for NoConsecutiveSameMeat {
    fn name(&self) -> &'static str {
        "no-consecutive-same-meat"
    }

    fn description(&self) -> &'static str {
        "neighboring diary entries may not share a meat"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool {
        diary
            .previous_entry(date)
            .into_iter()
            .chain(diary.next_entry(date))
            .all(|(_, meal)| meal.meat() != candidate.meat())
    }
}

/// Rejects a candidate already planned within a week of the target date.
pub struct NoRepeatWithinAWeek;

impl Rule for NoRepeatWithinAWeek {
    fn name(&self) -> &'static str {
        "no-repeat-within-seven-days"
    }

    fn description(&self) -> &'static str {
        "the same meal may not appear twice within seven days"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool {
        diary
            .entries_within(date, MEAL_REPEAT_WINDOW_DAYS)
            .all(|(_, meal)| meal.name() != candidate.name())
    }
}

/// Rejects a fish candidate when another fish meal sits within a week.
pub struct NoFishWithinAWeek;

impl Rule for NoFishWithinAWeek {
    fn name(&self) -> &'static str {
        "no-fish-within-seven-days"
    }

    fn description(&self) -> &'static str {
        "fish meals must be at least a week apart"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool {
        if candidate.meat() != Meat::Fish {
            return true;
        }
        diary
            .entries_within(date, FISH_WINDOW_DAYS)
            .all(|(_, meal)| meal.meat() != Meat::Fish)
    }
}

/// Rejects a pasta candidate when another pasta meal sits within five days.
pub struct NoPastaWithinFiveDays;

impl Rule for NoPastaWithinFiveDays {
    fn name(&self) -> &'static str {
        "no-pasta-within-five-days"
    }

    fn description(&self) -> &'static str {
        "pasta meals must be at least five days apart"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool {
        if !candidate.has_tag(Tag::Pasta) {
            return true;
        }
        diary
            .entries_within(date, PASTA_WINDOW_DAYS)
            .all(|(_, meal)| !meal.has_tag(Tag::Pasta))
    }
}

/// Rejects roast-tagged candidates on any day other than Sunday.
pub struct RoastOnSundaysOnly;

impl Rule for RoastOnSundaysOnly {
    fn name(&self) -> &'static str {
        "roast-on-sundays-only"
    }

    fn description(&self) -> &'static str {
        "roasts may only be planned on a Sunday"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, _diary: &MealDiary) -> bool {
        date.weekday() == Weekday::Sun || !candidate.has_tag(Tag::Roast)
    }
}

/// On Sundays, admits only roast-tagged candidates.
pub struct ForceSundayRoast;

impl Rule for ForceSundayRoast {
    fn name(&self) -> &'static str {
        "force-sunday-roast"
    }

    fn description(&self) -> &'static str {
        "Sundays must be a roast"
    }

    fn admits(&self, candidate: &Meal, date: NaiveDate, _diary: &MealDiary) -> bool {
        date.weekday() != Weekday::Sun || candidate.has_tag(Tag::Roast)
    }
}

/// The active rules for a run, applied as a conjunction.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Self {
        RuleSet { rules }
    }

    /// Admits everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True iff every active rule admits the candidate. Short-circuits on
    /// the first failure; order affects nothing but work done.
    pub fn is_admissible(&self, candidate: &Meal, date: NaiveDate, diary: &MealDiary) -> bool {
        self.rules
            .iter()
            .all(|rule| rule.admits(candidate, date, diary))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry mapping rule names to implementations.
///
/// Adding a rule means registering another implementation here; nothing else
/// dispatches on rule identity.
pub struct RuleRegistry {
    rules: BTreeMap<&'static str, Arc<dyn Rule>>,
}

impl RuleRegistry {
    pub fn empty() -> Self {
        RuleRegistry {
            rules: BTreeMap::new(),
        }
    }

    /// All rules shipped with the system.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(NoConsecutiveSameMeat));
        registry.register(Arc::new(NoRepeatWithinAWeek));
        registry.register(Arc::new(NoFishWithinAWeek));
        registry.register(Arc::new(NoPastaWithinFiveDays));
        registry.register(Arc::new(RoastOnSundaysOnly));
        registry.register(Arc::new(ForceSundayRoast));
        registry
    }

    /// Register a rule under its own name, replacing any previous holder.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.insert(rule.name(), rule);
    }

    /// Build the active rule set from configured names. Unknown names are a
    /// configuration error, reported before any planning starts.
    pub fn rule_set(&self, names: &[String]) -> Result<RuleSet, PlanError> {
        let mut active = Vec::with_capacity(names.len());
        for name in names {
            let rule = self
                .rules
                .get(name.as_str())
                .ok_or_else(|| PlanError::UnknownRule(name.clone()))?;
            active.push(Arc::clone(rule));
        }
        Ok(RuleSet::new(active))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }
}
