use std::collections::BTreeSet;

use chrono::NaiveDate;
use mealprep_catalog::Meal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::diary::MealDiary;
use crate::error::PlanError;
use crate::rejections::RejectionSet;
use crate::rules::RuleSet;

/// Re-validation sweeps per attempt. Assignments can invalidate an earlier
/// neighbor (rules look both ways), so each attempt sweeps until no planned
/// date is in violation; a plan that will not settle in this many sweeps is
/// abandoned and the attempt retried with fresh draws.
const MAX_REVALIDATION_SWEEPS: usize = 8;

/// One interactive planning session.
///
/// Holds the candidate pool, the active rules, the confirmed diary history
/// and the session's accumulated rejections, and drives the generate →
/// present → reject → regenerate loop the caller runs against it. The
/// session performs no I/O.
///
/// Selection is uniformly random over the admissible candidates; the point
/// is to shuffle a plan, not optimize one. The random source is seedable for
/// deterministic tests.
pub struct PlanSession {
    pool: Vec<Meal>,
    rules: RuleSet,
    history: MealDiary,
    rejections: RejectionSet,
    rng: StdRng,
    max_attempts: u32,
    infeasible: bool,
}

enum AttemptFailure {
    /// A date had candidates left but none admissible; retrying with
    /// different earlier choices may succeed.
    NoAdmissible { date: NaiveDate },
    /// A date has no candidates at all before rule filtering; terminal.
    Exhausted { date: NaiveDate, rejected: usize },
}

impl PlanSession {
    pub fn new(
        pool: Vec<Meal>,
        rules: RuleSet,
        history: MealDiary,
        max_attempts: u32,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        PlanSession {
            pool,
            rules,
            history,
            rejections: RejectionSet::new(),
            rng,
            max_attempts,
            infeasible: false,
        }
    }

    /// Fill every date in `dates` with an admissible meal.
    ///
    /// An empty range returns an empty slice without evaluating any rule.
    pub fn generate(&mut self, dates: &[NaiveDate]) -> Result<MealDiary, PlanError> {
        self.plan(&MealDiary::new(), dates)
    }

    /// Re-plan `dates` while keeping the rest of a previously proposed slice.
    ///
    /// Entries of `proposal` outside `dates` are kept where the rules still
    /// allow them; a re-picked neighbor can invalidate a kept entry, in
    /// which case that entry is re-picked too. When a changed date cannot be
    /// filled at all against the kept entries, the remaining attempts
    /// re-plan the whole slice instead. The returned slice covers every
    /// date of the original proposal.
    pub fn regenerate(
        &mut self,
        proposal: &MealDiary,
        dates: &[NaiveDate],
    ) -> Result<MealDiary, PlanError> {
        self.plan(proposal, dates)
    }

    /// Record that the user declined `meal` on `date`. The pairing is
    /// excluded from every later candidate pool this session.
    pub fn reject(&mut self, date: NaiveDate, meal: &str) {
        tracing::debug!(%date, meal, "meal rejected");
        self.rejections.reject(date, meal);
    }

    /// True once a terminal failure has been observed; the session cannot
    /// produce a plan any more.
    pub fn is_infeasible(&self) -> bool {
        self.infeasible
    }

    pub fn rejections(&self) -> &RejectionSet {
        &self.rejections
    }

    fn plan(&mut self, proposal: &MealDiary, dates: &[NaiveDate]) -> Result<MealDiary, PlanError> {
        let mut targets = BTreeSet::new();
        for &date in dates {
            if !targets.insert(date) {
                return Err(PlanError::DuplicateDate(date));
            }
            if self.history.contains_date(date) {
                return Err(PlanError::DateAlreadyPlanned(date));
            }
        }

        let mut kept = proposal.except_dates(targets.iter().copied());
        for (date, _) in kept.iter() {
            if self.history.contains_date(date) {
                return Err(PlanError::DateAlreadyPlanned(date));
            }
        }

        if targets.is_empty() && kept.is_empty() {
            return Ok(MealDiary::new());
        }

        for attempt in 1..=self.max_attempts {
            match self.attempt(&kept, &targets) {
                Ok(slice) => {
                    tracing::debug!(attempt, entries = slice.len(), "plan generated");
                    return Ok(slice);
                }
                Err(AttemptFailure::Exhausted { date, rejected }) => {
                    self.infeasible = true;
                    return Err(PlanError::CandidatesExhausted { date, rejected });
                }
                Err(AttemptFailure::NoAdmissible { date }) => {
                    tracing::debug!(%date, attempt, "no admissible meal, retrying");
                    // A kept neighbor can be what blocks the date: from here
                    // on, re-plan the whole slice instead of the subset.
                    if !kept.is_empty() {
                        targets.extend(kept.dates());
                        kept = MealDiary::new();
                    }
                }
            }
        }

        self.infeasible = true;
        Err(PlanError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    /// One full pass: fill the pending dates chronologically, then sweep
    /// every planned date for violations and re-pick until stable.
    fn attempt(
        &mut self,
        kept: &MealDiary,
        targets: &BTreeSet<NaiveDate>,
    ) -> Result<MealDiary, AttemptFailure> {
        let mut working = self.history.upsert(kept);
        let planned: BTreeSet<NaiveDate> =
            kept.dates().chain(targets.iter().copied()).collect();
        let mut pending: Vec<NaiveDate> = targets.iter().copied().collect();

        let mut sweeps = 0;
        while !pending.is_empty() {
            sweeps += 1;
            if sweeps > MAX_REVALIDATION_SWEEPS {
                return Err(AttemptFailure::NoAdmissible { date: pending[0] });
            }

            for date in std::mem::take(&mut pending) {
                let choice = self.pick(date, &working)?;
                working.insert(date, choice);
            }

            for &date in &planned {
                if let Some(meal) = working.get(date) {
                    if !self.rules.is_admissible(meal, date, &working) {
                        pending.push(date);
                    }
                }
            }
            for &date in &pending {
                working.remove(date);
            }
        }

        Ok(working.difference(&self.history))
    }

    fn pick(&mut self, date: NaiveDate, diary: &MealDiary) -> Result<Meal, AttemptFailure> {
        let PlanSession {
            pool,
            rules,
            rejections,
            rng,
            ..
        } = self;

        let candidates: Vec<&Meal> = pool
            .iter()
            .filter(|meal| !rejections.is_rejected(date, meal.name()))
            .collect();

        if candidates.is_empty() {
            return Err(AttemptFailure::Exhausted {
                date,
                rejected: rejections.rejected_for(date),
            });
        }

        let admissible: Vec<&Meal> = candidates
            .into_iter()
            .filter(|meal| rules.is_admissible(meal, date, diary))
            .collect();

        admissible
            .choose(rng)
            .map(|meal| (*meal).clone())
            .ok_or(AttemptFailure::NoAdmissible { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_catalog::{Meal, Meat};

    fn meal(name: &str, meat: Meat) -> Meal {
        Meal::new(name, meat, [], vec![]).unwrap()
    }

    fn pool() -> Vec<Meal> {
        vec![
            meal("Chilli con Carne", Meat::Beef),
            meal("Chicken Fajitas", Meat::Chicken),
            meal("Fish Pie", Meat::Fish),
        ]
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn test_empty_range_yields_empty_slice() {
        let mut session = PlanSession::new(pool(), RuleSet::empty(), MealDiary::new(), 5, Some(1));
        let slice = session.generate(&[]).unwrap();
        assert!(slice.is_empty());
        assert!(!session.is_infeasible());
    }

    #[test]
    fn test_duplicate_dates_are_a_configuration_error() {
        let mut session = PlanSession::new(pool(), RuleSet::empty(), MealDiary::new(), 5, Some(1));
        let err = session.generate(&[date(1), date(1)]).unwrap_err();
        assert!(matches!(err, PlanError::DuplicateDate(_)));
        assert!(!session.is_infeasible());
    }

    #[test]
    fn test_dates_already_in_history_are_rejected() {
        let history: MealDiary = [(date(1), meal("Pizza", Meat::Pork))].into_iter().collect();
        let mut session = PlanSession::new(pool(), RuleSet::empty(), history, 5, Some(1));
        let err = session.generate(&[date(1)]).unwrap_err();
        assert!(matches!(err, PlanError::DateAlreadyPlanned(_)));
    }

    #[test]
    fn test_same_seed_gives_same_plan() {
        let dates = [date(1), date(2), date(3)];

        let mut first = PlanSession::new(pool(), RuleSet::empty(), MealDiary::new(), 5, Some(42));
        let mut second = PlanSession::new(pool(), RuleSet::empty(), MealDiary::new(), 5, Some(42));

        assert_eq!(
            first.generate(&dates).unwrap(),
            second.generate(&dates).unwrap()
        );
    }

    #[test]
    fn test_single_candidate_pool_still_succeeds() {
        let mut session = PlanSession::new(
            vec![meal("Pizza", Meat::Pork)],
            RuleSet::empty(),
            MealDiary::new(),
            5,
            Some(1),
        );

        let slice = session.generate(&[date(1)]).unwrap();
        assert_eq!(slice.get(date(1)).unwrap().name(), "Pizza");
    }

    #[test]
    fn test_rejected_meals_never_come_back() {
        let mut session = PlanSession::new(
            vec![meal("Pizza", Meat::Pork), meal("Fish Pie", Meat::Fish)],
            RuleSet::empty(),
            MealDiary::new(),
            5,
            Some(7),
        );

        session.reject(date(1), "Pizza");
        for _ in 0..20 {
            let slice = session.generate(&[date(1)]).unwrap();
            assert_eq!(slice.get(date(1)).unwrap().name(), "Fish Pie");
        }
    }

    #[test]
    fn test_exhausted_pool_is_terminal() {
        let mut session = PlanSession::new(
            vec![meal("Pizza", Meat::Pork)],
            RuleSet::empty(),
            MealDiary::new(),
            5,
            Some(1),
        );

        session.reject(date(1), "Pizza");
        let err = session.generate(&[date(1)]).unwrap_err();
        assert!(matches!(err, PlanError::CandidatesExhausted { .. }));
        assert!(err.is_infeasible());
        assert!(session.is_infeasible());
    }
}
