use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::CatalogError;
use crate::ingredient::IngredientQuantity;

/// The meat property every meal must declare.
///
/// This is the one recognized meal property; it lives as a plain field so a
/// meal without it cannot be constructed at all. Meatless dishes carry
/// `Meat::None`, which rules compare like any other value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Meat {
    Beef,
    Chicken,
    Fish,
    Lamb,
    None,
    Pork,
    Turkey,
}

/// Optional boolean flags on a meal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Tag {
    Indian,
    Pasta,
    Roast,
    Vegetarian,
}

/// A named dish with its required property, tags and ingredient lines.
///
/// Immutable once constructed; the constructor enforces the catalog
/// invariants so downstream code never has to re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    name: String,
    meat: Meat,
    tags: BTreeSet<Tag>,
    ingredients: Vec<IngredientQuantity>,
}

impl Meal {
    /// Build a meal, rejecting duplicate ingredient+unit lines.
    pub fn new(
        name: impl Into<String>,
        meat: Meat,
        tags: impl IntoIterator<Item = Tag>,
        ingredients: Vec<IngredientQuantity>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();

        let mut seen = BTreeSet::new();
        for line in &ingredients {
            if !seen.insert((line.ingredient, line.unit)) {
                return Err(CatalogError::DuplicateIngredient {
                    meal: name,
                    ingredient: line.ingredient,
                });
            }
        }

        Ok(Meal {
            name,
            meat,
            tags: tags.into_iter().collect(),
            ingredients,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meat(&self) -> Meat {
        self.meat
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }

    pub fn ingredients(&self) -> &[IngredientQuantity] {
        &self.ingredients
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
