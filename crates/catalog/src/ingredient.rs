use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Aisle grouping for shopping list sections.
///
/// The derived `Ord` follows declaration order, which is the order the
/// sections appear in a rendered shopping list.
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
    EnumIter,
    EnumString,
)]
pub enum Category {
    Fruit,
    Vegetable,
    Herb,
    Carbohydrate,
    Dairy,
    Meat,
    Fish,
    Can,
    Condiment,
    Sauce,
    Spice,
}

impl Category {
    /// Title of this category's section in rendered shopping lists.
    pub fn list_header(&self) -> &'static str {
        match self {
            Category::Fruit => "Fruit",
            Category::Vegetable => "Vegetables",
            Category::Herb => "Herbs",
            Category::Carbohydrate => "Carbohydrates",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Fish => "Fish",
            Category::Can => "Cans",
            Category::Condiment => "Condiments",
            Category::Sauce => "Sauces",
            Category::Spice => "Spices",
        }
    }
}

/// Unit an ingredient line is measured in.
///
/// There is no conversion between units: lines for the same ingredient in
/// different units stay separate all the way into the shopping list.
/// `AsNeeded` marks pantry staples a recipe calls for without an amount.
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
    EnumIter,
    EnumString,
)]
pub enum Unit {
    Gram,
    Millilitre,
    Number,
    Bag,
    Jar,
    AsNeeded,
}

impl Unit {
    /// Label to print after an amount, pluralized where English wants it.
    pub fn label(&self, amount: f64) -> &'static str {
        let plural = amount != 1.0;
        match self {
            Unit::Gram => "g",
            Unit::Millilitre => "ml",
            Unit::Number => {
                if plural {
                    "units"
                } else {
                    "unit"
                }
            }
            Unit::Bag => {
                if plural {
                    "bags"
                } else {
                    "bag"
                }
            }
            Unit::Jar => {
                if plural {
                    "jars"
                } else {
                    "jar"
                }
            }
            Unit::AsNeeded => "",
        }
    }
}

/// One ingredient line of a meal.
///
/// `amount` is `None` for unmeasured lines ("as needed" staples); that is a
/// different thing from an amount of zero, and both survive aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub ingredient: Ingredients,
    pub unit: Unit,
    pub amount: Option<f64>,
}

impl IngredientQuantity {
    pub fn measured(ingredient: Ingredients, unit: Unit, amount: f64) -> Self {
        IngredientQuantity {
            ingredient,
            unit,
            amount: Some(amount),
        }
    }

    /// A line with no measured amount, e.g. olive oil or seasoning.
    pub fn as_needed(ingredient: Ingredients) -> Self {
        IngredientQuantity {
            ingredient,
            unit: Unit::AsNeeded,
            amount: None,
        }
    }
}

/// Every ingredient the builtin catalog knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Ingredients {
    ActiveDryYeast,
    Aubergine,
    BabySpinach,
    Bacon,
    Basil,
    BayLeaves,
    BeefJoint,
    BeefMince,
    Butter,
    CaputoDoubleZeroFlour,
    Carrot,
    CayennePepper,
    Celery,
    CheddarCheese,
    CherryTomatoes,
    ChickenBreast,
    ChickenStock,
    Chives,
    ChoppedTomatoes,
    Cinnamon,
    CoconutMilk,
    Coriander,
    Cumin,
    DoubleCream,
    DriedFenugreek,
    Eggs,
    Flour,
    FreshChilli,
    FreshLemonJuice,
    FreshTarragon,
    GaramMasala,
    GarlicClove,
    Ghee,
    Ginger,
    GreenPepper,
    GruyereCheese,
    Guinness,
    Ham,
    Honey,
    KidneyBeans,
    KosherSalt,
    LambMince,
    Leek,
    LegOfLamb,
    Lemon,
    Linguine,
    Milk,
    MixedHerbs,
    MozzarellaCheese,
    Nutmeg,
    OliveOil,
    Onion,
    Oregano,
    PaneerCheese,
    Paprika,
    ParmesanCheese,
    Parsley,
    Passata,
    Pepperoni,
    PorkJoint,
    PorkMince,
    Potato,
    PuffPastry,
    RawKingPrawns,
    RedChilli,
    RedOnion,
    RedPepper,
    RedWine,
    Rice,
    SalmonFillet,
    ShortcrustPastry,
    SmokedHaddockFillet,
    SoySauce,
    Spaghetti,
    Spinach,
    StewingBeef,
    TomatoPuree,
    TomatoSoup,
    TortillaWraps,
    TurkeyMince,
    Turmeric,
    VegetableOil,
    WhiteWine,
    WholeChicken,
    YellowPepper,
}

impl Ingredients {
    fn profile(&self) -> (&'static str, Category) {
        match self {
            Ingredients::ActiveDryYeast => ("Active Dry Yeast", Category::Condiment),
            Ingredients::Aubergine => ("Aubergine", Category::Vegetable),
            Ingredients::BabySpinach => ("Baby Spinach", Category::Vegetable),
            Ingredients::Bacon => ("Bacon", Category::Meat),
            Ingredients::Basil => ("Basil", Category::Herb),
            Ingredients::BayLeaves => ("Bay Leaves", Category::Herb),
            Ingredients::BeefJoint => ("Beef Joint", Category::Meat),
            Ingredients::BeefMince => ("Beef Mince", Category::Meat),
            Ingredients::Butter => ("Butter", Category::Dairy),
            Ingredients::CaputoDoubleZeroFlour => ("Caputo Double Zero Flour", Category::Condiment),
            Ingredients::Carrot => ("Carrot", Category::Vegetable),
            Ingredients::CayennePepper => ("Cayenne Pepper", Category::Spice),
            Ingredients::Celery => ("Celery", Category::Vegetable),
            Ingredients::CheddarCheese => ("Cheddar Cheese", Category::Dairy),
            Ingredients::CherryTomatoes => ("Cherry Tomatoes", Category::Vegetable),
            Ingredients::ChickenBreast => ("Chicken Breast", Category::Meat),
            Ingredients::ChickenStock => ("Chicken Stock", Category::Condiment),
            Ingredients::Chives => ("Chives", Category::Herb),
            Ingredients::ChoppedTomatoes => ("Chopped Tomatoes", Category::Can),
            Ingredients::Cinnamon => ("Cinnamon", Category::Spice),
            Ingredients::CoconutMilk => ("Coconut Milk", Category::Can),
            Ingredients::Coriander => ("Coriander", Category::Herb),
            Ingredients::Cumin => ("Cumin", Category::Spice),
            Ingredients::DoubleCream => ("Double Cream", Category::Dairy),
            Ingredients::DriedFenugreek => ("Dried Fenugreek", Category::Spice),
            Ingredients::Eggs => ("Eggs", Category::Dairy),
            Ingredients::Flour => ("Flour", Category::Condiment),
            Ingredients::FreshChilli => ("Fresh Chilli", Category::Vegetable),
            Ingredients::FreshLemonJuice => ("Fresh Lemon Juice", Category::Condiment),
            Ingredients::FreshTarragon => ("Fresh Tarragon", Category::Herb),
            Ingredients::GaramMasala => ("Garam Masala", Category::Spice),
            Ingredients::GarlicClove => ("Garlic Clove", Category::Vegetable),
            Ingredients::Ghee => ("Ghee", Category::Dairy),
            Ingredients::Ginger => ("Ginger", Category::Vegetable),
            Ingredients::GreenPepper => ("Green Pepper", Category::Vegetable),
            Ingredients::GruyereCheese => ("Gruyere Cheese", Category::Dairy),
            Ingredients::Guinness => ("Guinness", Category::Sauce),
            Ingredients::Ham => ("Ham", Category::Meat),
            Ingredients::Honey => ("Honey", Category::Condiment),
            Ingredients::KidneyBeans => ("Kidney Beans", Category::Can),
            Ingredients::KosherSalt => ("Kosher Salt", Category::Condiment),
            Ingredients::LambMince => ("Lamb Mince", Category::Meat),
            Ingredients::Leek => ("Leek", Category::Vegetable),
            Ingredients::LegOfLamb => ("Leg of Lamb", Category::Meat),
            Ingredients::Lemon => ("Lemon", Category::Fruit),
            Ingredients::Linguine => ("Linguine", Category::Carbohydrate),
            Ingredients::Milk => ("Milk", Category::Dairy),
            Ingredients::MixedHerbs => ("Mixed Herbs", Category::Herb),
            Ingredients::MozzarellaCheese => ("Mozzarella Cheese", Category::Dairy),
            Ingredients::Nutmeg => ("Nutmeg", Category::Spice),
            Ingredients::OliveOil => ("Olive Oil", Category::Condiment),
            Ingredients::Onion => ("Onion", Category::Vegetable),
            Ingredients::Oregano => ("Oregano", Category::Herb),
            Ingredients::PaneerCheese => ("Paneer Cheese", Category::Dairy),
            Ingredients::Paprika => ("Paprika", Category::Spice),
            Ingredients::ParmesanCheese => ("Parmesan Cheese", Category::Dairy),
            Ingredients::Parsley => ("Parsley", Category::Herb),
            Ingredients::Passata => ("Passata", Category::Can),
            Ingredients::Pepperoni => ("Pepperoni", Category::Meat),
            Ingredients::PorkJoint => ("Pork Joint", Category::Meat),
            Ingredients::PorkMince => ("Pork Mince", Category::Meat),
            Ingredients::Potato => ("Potato", Category::Vegetable),
            Ingredients::PuffPastry => ("Puff Pastry", Category::Carbohydrate),
            Ingredients::RawKingPrawns => ("Raw King Prawns", Category::Fish),
            Ingredients::RedChilli => ("Red Chilli", Category::Vegetable),
            Ingredients::RedOnion => ("Red Onion", Category::Vegetable),
            Ingredients::RedPepper => ("Red Pepper", Category::Vegetable),
            Ingredients::RedWine => ("Red Wine", Category::Sauce),
            Ingredients::Rice => ("Rice", Category::Carbohydrate),
            Ingredients::SalmonFillet => ("Salmon Fillet", Category::Fish),
            Ingredients::ShortcrustPastry => ("Shortcrust Pastry", Category::Carbohydrate),
            Ingredients::SmokedHaddockFillet => ("Smoked Haddock Fillet", Category::Fish),
            Ingredients::SoySauce => ("Soy Sauce", Category::Sauce),
            Ingredients::Spaghetti => ("Spaghetti", Category::Carbohydrate),
            Ingredients::Spinach => ("Spinach", Category::Vegetable),
            Ingredients::StewingBeef => ("Stewing Beef", Category::Meat),
            Ingredients::TomatoPuree => ("Tomato Puree", Category::Condiment),
            Ingredients::TomatoSoup => ("Tomato Soup", Category::Can),
            Ingredients::TortillaWraps => ("Tortilla Wraps", Category::Carbohydrate),
            Ingredients::TurkeyMince => ("Turkey Mince", Category::Meat),
            Ingredients::Turmeric => ("Turmeric", Category::Spice),
            Ingredients::VegetableOil => ("Vegetable Oil", Category::Condiment),
            Ingredients::WhiteWine => ("White Wine", Category::Sauce),
            Ingredients::WholeChicken => ("Whole Chicken", Category::Meat),
            Ingredients::YellowPepper => ("Yellow Pepper", Category::Vegetable),
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().0
    }

    pub fn category(&self) -> Category {
        self.profile().1
    }
}

impl fmt::Display for Ingredients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_order_matches_display_order() {
        let order: Vec<Category> = Category::iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert!(Category::Fruit < Category::Spice);
    }

    #[test]
    fn test_unit_labels_pluralize() {
        assert_eq!(Unit::Number.label(1.0), "unit");
        assert_eq!(Unit::Number.label(2.0), "units");
        assert_eq!(Unit::Jar.label(0.5), "jars");
        assert_eq!(Unit::Gram.label(500.0), "g");
    }

    #[test]
    fn test_as_needed_lines_have_no_amount() {
        let line = IngredientQuantity::as_needed(Ingredients::OliveOil);
        assert_eq!(line.unit, Unit::AsNeeded);
        assert_eq!(line.amount, None);
    }

    #[test]
    fn test_every_ingredient_has_a_nonempty_name() {
        for ingredient in Ingredients::iter() {
            assert!(!ingredient.name().is_empty());
        }
    }
}
