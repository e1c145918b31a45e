//! The builtin meal data.
//!
//! Amounts are per household batch, not per portion. Lines without an amount
//! are pantry staples the shopper is assumed to buy by eye.

use crate::error::CatalogError;
use crate::ingredient::{IngredientQuantity, Ingredients, Unit};
use crate::meal::{Meal, Meat, Tag};

fn grams(ingredient: Ingredients, amount: f64) -> IngredientQuantity {
    IngredientQuantity::measured(ingredient, Unit::Gram, amount)
}

fn millilitres(ingredient: Ingredients, amount: f64) -> IngredientQuantity {
    IngredientQuantity::measured(ingredient, Unit::Millilitre, amount)
}

fn count(ingredient: Ingredients, amount: f64) -> IngredientQuantity {
    IngredientQuantity::measured(ingredient, Unit::Number, amount)
}

fn jars(ingredient: Ingredients, amount: f64) -> IngredientQuantity {
    IngredientQuantity::measured(ingredient, Unit::Jar, amount)
}

fn as_needed(ingredient: Ingredients) -> IngredientQuantity {
    IngredientQuantity::as_needed(ingredient)
}

pub(crate) fn builtin_meals() -> Result<Vec<Meal>, CatalogError> {
    Ok(vec![
        Meal::new(
            "Beef and Ale Stew",
            Meat::Beef,
            [],
            vec![
                as_needed(Ingredients::BayLeaves),
                count(Ingredients::Carrot, 2.0),
                count(Ingredients::Celery, 2.0),
                count(Ingredients::ChoppedTomatoes, 1.0),
                as_needed(Ingredients::Flour),
                millilitres(Ingredients::Guinness, 500.0),
                count(Ingredients::Onion, 2.0),
                grams(Ingredients::Potato, 900.0),
                grams(Ingredients::StewingBeef, 750.0),
            ],
        )?,
        Meal::new(
            "Chicken and Leek Pie",
            Meat::Chicken,
            [],
            vec![
                count(Ingredients::ChickenBreast, 4.0),
                millilitres(Ingredients::ChickenStock, 150.0),
                millilitres(Ingredients::DoubleCream, 150.0),
                count(Ingredients::Eggs, 1.0),
                as_needed(Ingredients::FreshTarragon),
                count(Ingredients::GarlicClove, 1.0),
                count(Ingredients::Leek, 2.0),
                count(Ingredients::Onion, 1.0),
                grams(Ingredients::PuffPastry, 375.0),
                as_needed(Ingredients::VegetableOil),
                millilitres(Ingredients::WhiteWine, 150.0),
            ],
        )?,
        Meal::new(
            "Chicken Fajitas",
            Meat::Chicken,
            [],
            vec![
                grams(Ingredients::ChickenBreast, 400.0),
                as_needed(Ingredients::Coriander),
                as_needed(Ingredients::Paprika),
                count(Ingredients::RedOnion, 2.0),
                count(Ingredients::RedPepper, 1.0),
                as_needed(Ingredients::TortillaWraps),
                count(Ingredients::YellowPepper, 1.0),
            ],
        )?,
        Meal::new(
            "Chilli con Carne",
            Meat::Beef,
            [],
            vec![
                grams(Ingredients::BeefMince, 900.0),
                count(Ingredients::Carrot, 1.0),
                count(Ingredients::Celery, 1.0),
                count(Ingredients::ChoppedTomatoes, 1.0),
                count(Ingredients::FreshChilli, 1.0),
                count(Ingredients::GarlicClove, 2.0),
                count(Ingredients::KidneyBeans, 1.0),
                count(Ingredients::Onion, 1.0),
                grams(Ingredients::Rice, 250.0),
                as_needed(Ingredients::TomatoPuree),
            ],
        )?,
        Meal::new(
            "Fish Pie",
            Meat::Fish,
            [],
            vec![
                as_needed(Ingredients::BabySpinach),
                count(Ingredients::Carrot, 1.0),
                count(Ingredients::Celery, 2.0),
                grams(Ingredients::CheddarCheese, 150.0),
                count(Ingredients::Lemon, 1.0),
                as_needed(Ingredients::OliveOil),
                as_needed(Ingredients::Parsley),
                grams(Ingredients::Potato, 900.0),
                grams(Ingredients::RawKingPrawns, 125.0),
                count(Ingredients::RedChilli, 0.5),
                grams(Ingredients::SalmonFillet, 300.0),
                grams(Ingredients::SmokedHaddockFillet, 300.0),
            ],
        )?,
        Meal::new(
            "Honey-Garlic Salmon",
            Meat::Fish,
            [],
            vec![
                as_needed(Ingredients::Butter),
                as_needed(Ingredients::FreshLemonJuice),
                count(Ingredients::GarlicClove, 4.0),
                as_needed(Ingredients::Honey),
                as_needed(Ingredients::Paprika),
                grams(Ingredients::SalmonFillet, 1000.0),
                as_needed(Ingredients::SoySauce),
            ],
        )?,
        Meal::new(
            "Lemon Leek Linguine",
            Meat::None,
            [Tag::Pasta],
            vec![
                grams(Ingredients::Linguine, 400.0),
                count(Ingredients::Leek, 2.0),
                count(Ingredients::Lemon, 2.0),
                as_needed(Ingredients::GarlicClove),
                as_needed(Ingredients::ChickenStock),
                as_needed(Ingredients::Butter),
                as_needed(Ingredients::ParmesanCheese),
                as_needed(Ingredients::Parsley),
                as_needed(Ingredients::Chives),
            ],
        )?,
        Meal::new(
            "Moussaka",
            Meat::Lamb,
            [],
            vec![
                count(Ingredients::Aubergine, 4.0),
                as_needed(Ingredients::Butter),
                as_needed(Ingredients::Cinnamon),
                count(Ingredients::Eggs, 2.0),
                as_needed(Ingredients::Flour),
                as_needed(Ingredients::GarlicClove),
                grams(Ingredients::LambMince, 1000.0),
                as_needed(Ingredients::Milk),
                as_needed(Ingredients::Nutmeg),
                count(Ingredients::Onion, 2.0),
                as_needed(Ingredients::ParmesanCheese),
                as_needed(Ingredients::Parsley),
                as_needed(Ingredients::RedWine),
                as_needed(Ingredients::TomatoPuree),
            ],
        )?,
        Meal::new(
            "Pizza",
            Meat::Pork,
            [],
            vec![
                as_needed(Ingredients::Basil),
                grams(Ingredients::CaputoDoubleZeroFlour, 300.0),
                grams(Ingredients::Flour, 300.0),
                grams(Ingredients::ActiveDryYeast, 4.0),
                as_needed(Ingredients::Ham),
                as_needed(Ingredients::Honey),
                grams(Ingredients::MozzarellaCheese, 250.0),
                as_needed(Ingredients::OliveOil),
                millilitres(Ingredients::Passata, 250.0),
                as_needed(Ingredients::Pepperoni),
            ],
        )?,
        Meal::new(
            "Quiche Lorraine",
            Meat::Pork,
            [],
            vec![
                count(Ingredients::Bacon, 8.0),
                as_needed(Ingredients::CherryTomatoes),
                millilitres(Ingredients::DoubleCream, 275.0),
                count(Ingredients::Eggs, 3.0),
                grams(Ingredients::GruyereCheese, 75.0),
                as_needed(Ingredients::ShortcrustPastry),
            ],
        )?,
        Meal::new(
            "Roast Beef",
            Meat::Beef,
            [Tag::Roast],
            vec![as_needed(Ingredients::BeefJoint)],
        )?,
        Meal::new(
            "Roast Chicken",
            Meat::Chicken,
            [Tag::Roast],
            vec![as_needed(Ingredients::WholeChicken)],
        )?,
        Meal::new(
            "Roast Lamb",
            Meat::Lamb,
            [Tag::Roast],
            vec![as_needed(Ingredients::LegOfLamb)],
        )?,
        Meal::new(
            "Roast Pork",
            Meat::Pork,
            [Tag::Roast],
            vec![as_needed(Ingredients::PorkJoint)],
        )?,
        Meal::new(
            "Saag Paneer",
            Meat::None,
            [Tag::Indian, Tag::Vegetarian],
            vec![
                as_needed(Ingredients::CayennePepper),
                millilitres(Ingredients::CoconutMilk, 350.0),
                as_needed(Ingredients::Cumin),
                as_needed(Ingredients::DriedFenugreek),
                as_needed(Ingredients::GaramMasala),
                count(Ingredients::GarlicClove, 2.0),
                as_needed(Ingredients::Ghee),
                as_needed(Ingredients::Ginger),
                as_needed(Ingredients::KosherSalt),
                count(Ingredients::Onion, 1.0),
                grams(Ingredients::PaneerCheese, 350.0),
                grams(Ingredients::Spinach, 450.0),
                as_needed(Ingredients::Turmeric),
            ],
        )?,
        Meal::new(
            "Spaghetti Bolognese",
            Meat::Beef,
            [Tag::Pasta],
            vec![
                as_needed(Ingredients::BayLeaves),
                grams(Ingredients::BeefMince, 500.0),
                count(Ingredients::Carrot, 1.0),
                count(Ingredients::Celery, 2.0),
                count(Ingredients::ChoppedTomatoes, 1.0),
                count(Ingredients::GarlicClove, 3.0),
                as_needed(Ingredients::MixedHerbs),
                count(Ingredients::Onion, 2.0),
                as_needed(Ingredients::Oregano),
                as_needed(Ingredients::ParmesanCheese),
                grams(Ingredients::PorkMince, 500.0),
                as_needed(Ingredients::Spaghetti),
                as_needed(Ingredients::TomatoPuree),
            ],
        )?,
        Meal::new(
            "Turkey Stuffed Peppers",
            Meat::Turkey,
            [],
            vec![
                count(Ingredients::Eggs, 2.0),
                count(Ingredients::GreenPepper, 4.0),
                count(Ingredients::Onion, 2.0),
                millilitres(Ingredients::Passata, 500.0),
                grams(Ingredients::Rice, 400.0),
                jars(Ingredients::TomatoSoup, 1.0),
                grams(Ingredients::TurkeyMince, 500.0),
            ],
        )?,
    ])
}
