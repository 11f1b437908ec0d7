use super::invalid_parameter_error::InvalidParameterError;
use getset::Getters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A filter the search can be narrowed by. The display form is the upstream
/// query parameter name; parsing also accepts the short aliases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FilterField {
    #[strum(to_string = "cuisine")]
    Cuisine,
    #[strum(to_string = "diet")]
    Diet,
    #[strum(to_string = "includeIngredients", serialize = "include")]
    IncludeIngredients,
    #[strum(to_string = "excludeIngredients", serialize = "exclude")]
    ExcludeIngredients,
    #[strum(to_string = "minCalories", serialize = "min")]
    MinCalories,
    #[strum(to_string = "maxCalories", serialize = "max")]
    MaxCalories,
}

/// Optional narrowing of a search. Blank values are stored as `None` so an
/// untouched filter and a cleared one are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    cuisine: Option<String>,
    diet: Option<String>,
    /// Comma separated ingredient names.
    include_ingredients: Option<String>,
    /// Comma separated ingredient names.
    exclude_ingredients: Option<String>,
    min_calories: Option<u32>,
    max_calories: Option<u32>,
}

fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Filters::set`].
    pub fn with(mut self, field: FilterField, raw: &str) -> Result<Self, InvalidParameterError> {
        self.set(field, raw)?;
        Ok(self)
    }

    /// Set `field` from user input. Blank input clears the filter.
    pub fn set(&mut self, field: FilterField, raw: &str) -> Result<(), InvalidParameterError> {
        let value = clean(raw);

        match field {
            FilterField::Cuisine => self.cuisine = value,
            FilterField::Diet => self.diet = value,
            FilterField::IncludeIngredients => self.include_ingredients = value,
            FilterField::ExcludeIngredients => self.exclude_ingredients = value,
            FilterField::MinCalories | FilterField::MaxCalories => {
                let calories = match value {
                    Some(v) => Some(v.parse::<u32>().map_err(|_| {
                        InvalidParameterError::NotANumber {
                            field,
                            value: v.clone(),
                        }
                    })?),
                    None => None,
                };
                return self.set_calories(field, calories);
            }
        }
        Ok(())
    }

    pub fn set_calories(
        &mut self,
        field: FilterField,
        calories: Option<u32>,
    ) -> Result<(), InvalidParameterError> {
        match field {
            FilterField::MinCalories => self.min_calories = calories,
            FilterField::MaxCalories => self.max_calories = calories,
            _ => return Err(InvalidParameterError::NotNumeric { field }),
        }
        Ok(())
    }

    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Cuisine => self.cuisine = None,
            FilterField::Diet => self.diet = None,
            FilterField::IncludeIngredients => self.include_ingredients = None,
            FilterField::ExcludeIngredients => self.exclude_ingredients = None,
            FilterField::MinCalories => self.min_calories = None,
            FilterField::MaxCalories => self.max_calories = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// The filters that are set, in a fixed field order.
    pub fn pairs(&self) -> Vec<(FilterField, String)> {
        let mut pairs = Vec::new();
        let text = [
            (FilterField::Cuisine, &self.cuisine),
            (FilterField::Diet, &self.diet),
            (FilterField::IncludeIngredients, &self.include_ingredients),
            (FilterField::ExcludeIngredients, &self.exclude_ingredients),
        ];
        for (field, value) in text {
            if let Some(v) = value {
                pairs.push((field, v.clone()));
            }
        }
        if let Some(min) = self.min_calories {
            pairs.push((FilterField::MinCalories, min.to_string()));
        }
        if let Some(max) = self.max_calories {
            pairs.push((FilterField::MaxCalories, max.to_string()));
        }
        pairs
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if let (Some(min), Some(max)) = (self.min_calories, self.max_calories) {
            if min > max {
                return Err(InvalidParameterError::CalorieRange { min, max });
            }
        }
        Ok(())
    }
}
