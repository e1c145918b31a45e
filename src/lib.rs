//! mealprep: interactive meal planning and shopping list generation.
//!
//! The binary wires configuration, storage and the terminal prompt loop
//! around the domain crates: `mealprep-catalog` (static meal data),
//! `mealprep-planning` (the plan generator) and `mealprep-shopping`
//! (shopping list aggregation).

pub mod config;
pub mod interactive;
pub mod observability;
pub mod storage;
