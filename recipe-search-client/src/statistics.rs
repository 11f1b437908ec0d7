use crate::r#static::UNKNOWN_CUISINE;
use crate::Recipe;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate figures for one page of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub total: usize,
    /// Rounded to two decimals.
    pub average_calories: f64,
    pub cuisine_distribution: BTreeMap<String, usize>,
}

impl SummaryStatistics {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let total = recipes.len();

        let average_calories = if total == 0 {
            0.0
        } else {
            let sum: f64 = recipes.iter().map(|r| r.calories().unwrap_or(0.0)).sum();
            round2(sum / total as f64)
        };

        let mut cuisine_distribution = BTreeMap::new();
        for recipe in recipes {
            let cuisine = recipe.cuisine_tag().unwrap_or(UNKNOWN_CUISINE);
            *cuisine_distribution.entry(cuisine.to_string()).or_insert(0) += 1;
        }

        Self {
            total,
            average_calories,
            cuisine_distribution,
        }
    }

    pub fn average_calories_display(&self) -> String {
        format!("{:.2}", self.average_calories)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
