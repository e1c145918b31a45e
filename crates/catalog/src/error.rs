use thiserror::Error;

use crate::ingredient::Ingredients;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown meal \"{0}\"")]
    UnknownMeal(String),

    #[error("duplicate meal \"{0}\" in catalog")]
    DuplicateMeal(String),

    #[error("meal \"{meal}\" lists {ingredient} more than once")]
    DuplicateIngredient { meal: String, ingredient: Ingredients },
}
