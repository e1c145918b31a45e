use chrono::NaiveDate;
use mealprep::storage;
use mealprep_catalog::Catalog;
use mealprep_planning::MealDiary;
use mealprep_shopping::ShoppingList;
use temp_dir::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

#[test]
fn test_missing_diary_file_is_an_empty_diary() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin().unwrap();

    let diary = storage::load_diary(&dir.path().join("meal_diary.json"), &catalog).unwrap();
    assert!(diary.is_empty());
}

#[test]
fn test_diary_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meal_diary.json");
    let catalog = Catalog::builtin().unwrap();

    let diary: MealDiary = [
        (date(10), catalog.get("Pizza").unwrap().clone()),
        (date(11), catalog.get("Fish Pie").unwrap().clone()),
    ]
    .into_iter()
    .collect();

    storage::save_diary(&path, &diary).unwrap();
    let loaded = storage::load_diary(&path, &catalog).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get(date(10)).unwrap().name(), "Pizza");
    assert_eq!(loaded.get(date(11)).unwrap().name(), "Fish Pie");
}

#[test]
fn test_stored_representation_is_dates_to_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meal_diary.json");
    let catalog = Catalog::builtin().unwrap();

    let diary: MealDiary = [(date(10), catalog.get("Moussaka").unwrap().clone())]
        .into_iter()
        .collect();
    storage::save_diary(&path, &diary).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["2026-08-10"], "Moussaka");
}

#[test]
fn test_diary_naming_an_unknown_meal_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meal_diary.json");
    std::fs::write(&path, r#"{"2026-08-10": "Deep Fried Mars Bar"}"#).unwrap();

    let catalog = Catalog::builtin().unwrap();
    assert!(storage::load_diary(&path, &catalog).is_err());
}

#[test]
fn test_malformed_diary_json_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meal_diary.json");
    std::fs::write(&path, "not json").unwrap();

    let catalog = Catalog::builtin().unwrap();
    assert!(storage::load_diary(&path, &catalog).is_err());
}

#[test]
fn test_shopping_list_file_is_named_after_the_range() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin().unwrap();

    let diary: MealDiary = [
        (date(10), catalog.get("Pizza").unwrap().clone()),
        (date(16), catalog.get("Moussaka").unwrap().clone()),
    ]
    .into_iter()
    .collect();
    let list = ShoppingList::from_diary(&diary);

    let path = storage::write_shopping_list(dir.path(), &list).unwrap();
    assert!(
        path.ends_with("shopping_list_2026-08-10_to_2026-08-16.txt"),
        "{}",
        path.display()
    );

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Shopping list 2026-08-10 to 2026-08-16"));
    assert!(contents.contains("Mozzarella Cheese"));
}

#[test]
fn test_empty_shopping_list_is_not_written() {
    let dir = TempDir::new().unwrap();
    let list = ShoppingList::from_diary(&MealDiary::new());
    assert!(storage::write_shopping_list(dir.path(), &list).is_err());
}
