use crate::Recipe;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Nutrients charted on the detail view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TrackedNutrient {
    Calories,
    Fat,
    Carbohydrates,
    Protein,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum IngredientCategory {
    Proteins,
    Vegetables,
    Carbohydrates,
    Dairy,
    Others,
}

impl IngredientCategory {
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            IngredientCategory::Proteins => &["chicken", "beef", "pork"],
            IngredientCategory::Vegetables => &["carrot", "lettuce", "broccoli"],
            IngredientCategory::Carbohydrates => &["rice", "pasta", "bread"],
            IngredientCategory::Dairy => &["milk", "cheese", "cream"],
            IngredientCategory::Others => &[],
        }
    }

    /// First category with a keyword contained in `name`, `Others` otherwise.
    pub fn categorize(name: &str) -> Self {
        let name = name.to_lowercase();
        IngredientCategory::iter()
            .find(|category| category.keywords().iter().any(|k| name.contains(k)))
            .unwrap_or(IngredientCategory::Others)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientAmount {
    pub nutrient: TrackedNutrient,
    pub amount: f64,
    pub unit: String,
}

/// Per-recipe figures behind the detail charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBreakdown {
    pub nutrients: Vec<NutrientAmount>,
    /// Only categories with at least one ingredient appear.
    pub ingredient_categories: BTreeMap<IngredientCategory, usize>,
}

impl DetailBreakdown {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let nutrients = TrackedNutrient::iter()
            .map(|nutrient| {
                let name = nutrient.to_string();
                let found = recipe
                    .nutrition
                    .as_ref()
                    .and_then(|n| n.nutrients.iter().find(|n| n.name == name));
                NutrientAmount {
                    nutrient,
                    amount: found.map(|n| n.amount).unwrap_or(0.0),
                    unit: found.map(|n| n.unit.clone()).unwrap_or_default(),
                }
            })
            .collect();

        let mut ingredient_categories = BTreeMap::new();
        for ingredient in &recipe.extended_ingredients {
            *ingredient_categories
                .entry(IngredientCategory::categorize(&ingredient.name))
                .or_insert(0) += 1;
        }

        Self {
            nutrients,
            ingredient_categories,
        }
    }

    pub fn largest_nutrient_amount(&self) -> f64 {
        self.nutrients.iter().map(|n| n.amount).fold(0.0, f64::max)
    }
}
