//! Plan generation: the meal diary, the rule predicates restricting it, and
//! the session that fills a date range under those rules.
//!
//! The generator is a greedy chronological pass with uniform random choice
//! over the admissible candidates, retried wholesale (bounded) when a date
//! runs out of options. There is deliberately no backtracking search; the
//! user-facing reject/regenerate loop supplies the feedback instead.

pub mod diary;
pub mod error;
pub mod generator;
pub mod rejections;
pub mod rules;

pub use diary::MealDiary;
pub use error::PlanError;
pub use generator::PlanSession;
pub use rejections::RejectionSet;
pub use rules::{Rule, RuleRegistry, RuleSet};
