//! Static meal and ingredient catalog.
//!
//! Everything in this crate is immutable data: meals with their required
//! properties, tags and ingredient lines, plus the [`Catalog`] registry the
//! rest of the system looks meals up in. Validation happens once, when the
//! catalog is built; downstream code can rely on every meal being
//! well-formed.

mod builtin;
pub mod catalog;
pub mod error;
pub mod ingredient;
pub mod meal;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use ingredient::{Category, IngredientQuantity, Ingredients, Unit};
pub use meal::{Meal, Meat, Tag};
