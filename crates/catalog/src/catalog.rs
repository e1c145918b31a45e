use std::collections::BTreeMap;

use crate::builtin::builtin_meals;
use crate::error::CatalogError;
use crate::meal::Meal;

/// Name-keyed registry of every known meal.
///
/// Lookup is case-insensitive; the original casing is preserved for display.
/// Construction validates the whole set, so any configuration referencing a
/// meal that passed through here is known to resolve.
#[derive(Debug, Clone)]
pub struct Catalog {
    meals: BTreeMap<String, Meal>,
}

impl Catalog {
    pub fn new(meals: impl IntoIterator<Item = Meal>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for meal in meals {
            let key = meal.name().to_lowercase();
            if map.insert(key, meal.clone()).is_some() {
                return Err(CatalogError::DuplicateMeal(meal.name().to_string()));
            }
        }
        Ok(Catalog { meals: map })
    }

    /// The curated builtin meal set.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_meals()?)
    }

    pub fn get(&self, name: &str) -> Result<&Meal, CatalogError> {
        self.meals
            .get(&name.to_lowercase())
            .ok_or_else(|| CatalogError::UnknownMeal(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.meals.contains_key(&name.to_lowercase())
    }

    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.meals.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.meals.values().map(|meal| meal.name())
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Resolve a configured candidate pool. An empty selection means the
    /// whole catalog; any unknown name fails the load.
    pub fn select(&self, names: &[String]) -> Result<Vec<Meal>, CatalogError> {
        if names.is_empty() {
            return Ok(self.meals().cloned().collect());
        }

        names
            .iter()
            .map(|name| self.get(name).cloned())
            .collect()
    }
}
