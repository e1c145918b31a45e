//! Shopping list aggregation over a confirmed diary slice.
//!
//! Lines merge only on an exact (ingredient, unit) match, with no unit
//! conversion, and every entry keeps track of which meals, on which dates,
//! asked for it.

pub mod aggregation;
pub mod render;

pub use aggregation::{ShoppingList, ShoppingListEntry};
