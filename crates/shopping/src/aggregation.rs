use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use chrono::NaiveDate;
use mealprep_catalog::{Ingredients, Unit};
use mealprep_planning::MealDiary;
use serde::Serialize;

/// One aggregated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub ingredient: Ingredients,
    pub unit: Unit,
    /// Sum across contributing lines. `None` when the lines are unmeasured
    /// ("as needed"), which is not the same thing as a total of zero.
    pub amount: Option<f64>,
    /// Contributing meal names, each with the dates it was planned for.
    pub sources: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl ShoppingListEntry {
    pub fn meals(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// How many diary entries contributed to this line.
    pub fn occurrences(&self) -> usize {
        self.sources.values().map(BTreeSet::len).sum()
    }
}

/// The consolidated shopping list for a confirmed diary slice.
///
/// Derived state: rebuild it from the diary rather than mutating it. The
/// backing map is ordered, so two diaries with the same entries produce the
/// same list regardless of how they were assembled.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    entries: BTreeMap<(Ingredients, Unit), ShoppingListEntry>,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
}

impl ShoppingList {
    pub fn from_diary(diary: &MealDiary) -> Self {
        let mut entries: BTreeMap<(Ingredients, Unit), ShoppingListEntry> = BTreeMap::new();

        for (date, meal) in diary.iter() {
            for line in meal.ingredients() {
                match entries.entry((line.ingredient, line.unit)) {
                    Entry::Vacant(slot) => {
                        let mut sources = BTreeMap::new();
                        sources.insert(meal.name().to_string(), BTreeSet::from([date]));
                        slot.insert(ShoppingListEntry {
                            ingredient: line.ingredient,
                            unit: line.unit,
                            amount: line.amount,
                            sources,
                        });
                    }
                    Entry::Occupied(mut slot) => {
                        let entry = slot.get_mut();
                        entry.amount = match (entry.amount, line.amount) {
                            (Some(total), Some(amount)) => Some(total + amount),
                            _ => None,
                        };
                        entry
                            .sources
                            .entry(meal.name().to_string())
                            .or_default()
                            .insert(date);
                    }
                }
            }
        }

        ShoppingList {
            entries,
            first_date: diary.first_date(),
            last_date: diary.last_date(),
        }
    }

    /// Entries in output order: category display order, then ingredient
    /// name, then unit.
    pub fn entries(&self) -> Vec<&ShoppingListEntry> {
        let mut entries: Vec<&ShoppingListEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            (a.ingredient.category(), a.ingredient.name(), a.unit).cmp(&(
                b.ingredient.category(),
                b.ingredient.name(),
                b.unit,
            ))
        });
        entries
    }

    pub fn get(&self, ingredient: Ingredients, unit: Unit) -> Option<&ShoppingListEntry> {
        self.entries.get(&(ingredient, unit))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Date span of the diary slice the list was built from.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.first_date.zip(self.last_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_catalog::{IngredientQuantity, Meal, Meat};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn test_empty_diary_gives_empty_list() {
        let list = ShoppingList::from_diary(&MealDiary::new());
        assert!(list.is_empty());
        assert_eq!(list.date_range(), None);
    }

    #[test]
    fn test_zero_amounts_are_kept() {
        let meal = Meal::new(
            "Garnish Only",
            Meat::None,
            [],
            vec![IngredientQuantity::measured(
                Ingredients::Parsley,
                Unit::Gram,
                0.0,
            )],
        )
        .unwrap();
        let diary: MealDiary = [(date(1), meal)].into_iter().collect();

        let list = ShoppingList::from_diary(&diary);
        let entry = list.get(Ingredients::Parsley, Unit::Gram).unwrap();
        assert_eq!(entry.amount, Some(0.0));
    }

    #[test]
    fn test_unmeasured_amounts_stay_absent_when_merged() {
        let first = Meal::new(
            "First",
            Meat::None,
            [],
            vec![IngredientQuantity::as_needed(Ingredients::OliveOil)],
        )
        .unwrap();
        let second = Meal::new(
            "Second",
            Meat::None,
            [],
            vec![IngredientQuantity::as_needed(Ingredients::OliveOil)],
        )
        .unwrap();
        let diary: MealDiary = [(date(1), first), (date(2), second)].into_iter().collect();

        let list = ShoppingList::from_diary(&diary);
        let entry = list.get(Ingredients::OliveOil, Unit::AsNeeded).unwrap();
        assert_eq!(entry.amount, None);
        assert_eq!(entry.meals().count(), 2);
    }

    #[test]
    fn test_same_meal_on_two_dates_doubles_the_totals() {
        let meal = Meal::new(
            "Chilli con Carne",
            Meat::Beef,
            [],
            vec![IngredientQuantity::measured(
                Ingredients::BeefMince,
                Unit::Gram,
                900.0,
            )],
        )
        .unwrap();
        let diary: MealDiary = [(date(1), meal.clone()), (date(5), meal)]
            .into_iter()
            .collect();

        let list = ShoppingList::from_diary(&diary);
        let entry = list.get(Ingredients::BeefMince, Unit::Gram).unwrap();
        assert_eq!(entry.amount, Some(1800.0));
        assert_eq!(entry.occurrences(), 2);
        assert_eq!(
            entry.sources["Chilli con Carne"],
            BTreeSet::from([date(1), date(5)])
        );
    }
}
