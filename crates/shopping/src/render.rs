//! Plain-text rendering of a shopping list, grouped by aisle category.

use std::fmt::Write;

use mealprep_catalog::{Category, Unit};

use crate::aggregation::{ShoppingList, ShoppingListEntry};

/// Format an entry's amount for display. Whole numbers drop the decimals.
pub fn format_amount(amount: Option<f64>, unit: Unit) -> String {
    match amount {
        None => "as needed".to_string(),
        Some(value) => {
            let number = if value.fract() == 0.0 {
                format!("{value:.0}")
            } else {
                format!("{value}")
            };
            format!("{} {}", number, unit.label(value))
        }
    }
}

fn render_entry(entry: &ShoppingListEntry) -> String {
    let sources: Vec<String> = entry
        .sources
        .iter()
        .map(|(meal, dates)| {
            if dates.len() > 1 {
                format!("{} x{}", meal, dates.len())
            } else {
                meal.clone()
            }
        })
        .collect();

    format!(
        "  - {}: {} ({})",
        entry.ingredient.name(),
        format_amount(entry.amount, entry.unit),
        sources.join(", ")
    )
}

impl ShoppingList {
    /// Render the list with one section per ingredient category.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some((first, last)) = self.date_range() {
            let _ = writeln!(out, "Shopping list {first} to {last}");
        } else {
            let _ = writeln!(out, "Shopping list (empty)");
        }

        let mut current: Option<Category> = None;
        for entry in self.entries() {
            let category = entry.ingredient.category();
            if current != Some(category) {
                let _ = writeln!(out, "\n{}:", category.list_header());
                current = Some(category);
            }
            let _ = writeln!(out, "{}", render_entry(entry));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mealprep_catalog::{IngredientQuantity, Ingredients, Meal, Meat};
    use mealprep_planning::MealDiary;

    #[test]
    fn test_amounts_format_cleanly() {
        assert_eq!(format_amount(Some(750.0), Unit::Gram), "750 g");
        assert_eq!(format_amount(Some(0.5), Unit::Number), "0.5 units");
        assert_eq!(format_amount(Some(1.0), Unit::Jar), "1 jar");
        assert_eq!(format_amount(None, Unit::AsNeeded), "as needed");
    }

    #[test]
    fn test_rendered_list_groups_by_category() {
        let meal = Meal::new(
            "Chilli con Carne",
            Meat::Beef,
            [],
            vec![
                IngredientQuantity::measured(Ingredients::BeefMince, Unit::Gram, 900.0),
                IngredientQuantity::measured(Ingredients::Onion, Unit::Number, 1.0),
                IngredientQuantity::as_needed(Ingredients::TomatoPuree),
            ],
        )
        .unwrap();
        let diary: MealDiary = [(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(), meal)]
            .into_iter()
            .collect();

        let rendered = ShoppingList::from_diary(&diary).render();

        let vegetables = rendered.find("Vegetables:").unwrap();
        let meat = rendered.find("Meat:").unwrap();
        let condiments = rendered.find("Condiments:").unwrap();
        assert!(vegetables < meat && meat < condiments);
        assert!(rendered.contains("Beef Mince: 900 g (Chilli con Carne)"));
        assert!(rendered.contains("Tomato Puree: as needed"));
    }
}
