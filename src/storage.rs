use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use mealprep_catalog::Catalog;
use mealprep_planning::MealDiary;
use mealprep_shopping::ShoppingList;

const DIARY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Load the stored diary. A missing file is an empty diary; a present file
/// that fails to parse, or that names a meal the catalog does not know, is
/// an error.
pub fn load_diary(path: &Path, catalog: &Catalog) -> Result<MealDiary> {
    if !path.exists() {
        return Ok(MealDiary::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read diary file {}", path.display()))?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&raw)
        .with_context(|| format!("diary file {} is not valid JSON", path.display()))?;

    let mut diary = MealDiary::new();
    for (date_string, meal_name) in entries {
        let date = NaiveDate::parse_from_str(&date_string, DIARY_DATE_FORMAT)
            .with_context(|| format!("diary contains invalid date \"{date_string}\""))?;
        let meal = catalog
            .get(&meal_name)
            .with_context(|| format!("diary entry for {date_string}"))?;
        diary.insert(date, meal.clone());
    }
    Ok(diary)
}

/// Persist the diary as a `{date: meal-name}` JSON object, sorted by date.
pub fn save_diary(path: &Path, diary: &MealDiary) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let entries: BTreeMap<String, String> = diary
        .iter()
        .map(|(date, meal)| {
            (
                date.format(DIARY_DATE_FORMAT).to_string(),
                meal.name().to_string(),
            )
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write diary file {}", path.display()))
}

/// File name covering the slice's date span.
pub fn shopping_list_filename(first: NaiveDate, last: NaiveDate) -> String {
    format!("shopping_list_{first}_to_{last}.txt")
}

/// Render the list and write it under `dir`, returning the file path.
pub fn write_shopping_list(dir: &Path, list: &ShoppingList) -> Result<PathBuf> {
    let (first, last) = list
        .date_range()
        .context("cannot write a shopping list for an empty plan")?;

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(shopping_list_filename(first, last));
    fs::write(&path, list.render())
        .with_context(|| format!("failed to write shopping list {}", path.display()))?;
    Ok(path)
}
