use crate::error::{Error, Result};
use crate::r#static::CALORIES;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref BLOCK_TAG: Regex =
        Regex::new(r"(?i)</?(?:p|br|div|li|ol|ul|h[1-6])\b[^>]*>").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref BLANK_RUN: Regex = Regex::new(r"[ \t]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// The ingredient line as written in the recipe, e.g. "2 cups of rice".
    #[serde(default)]
    pub original: Option<String>,
}

/// A recipe as returned by both the search and the information endpoints.
/// Search results leave the detail-only fields empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
    pub total_results: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub number: u32,
}

impl SearchResponse {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::malformed("search", e))
    }
}

impl Recipe {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::malformed("recipe", e))
    }

    pub fn nutrient_amount(&self, name: &str) -> Option<f64> {
        self.nutrition
            .as_ref()?
            .nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount)
    }

    pub fn calories(&self) -> Option<f64> {
        self.nutrient_amount(CALORIES)
    }

    /// The single cuisine this recipe is filed under. The `cuisine` field wins;
    /// otherwise the first entry of `cuisines`.
    pub fn cuisine_tag(&self) -> Option<&str> {
        self.cuisine
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or_else(|| self.cuisines.iter().map(String::as_str).find(|c| !c.trim().is_empty()))
    }

    pub fn plain_summary(&self) -> Option<String> {
        self.summary.as_deref().map(strip_tags)
    }

    pub fn plain_instructions(&self) -> Option<String> {
        self.instructions
            .as_deref()
            .map(strip_tags)
            .filter(|i| !i.is_empty())
    }
}

/// Drop markup from upstream HTML snippets so they read as plain text.
/// Block tags separate words; inline tags vanish without a trace.
pub fn strip_tags(html: &str) -> String {
    let text = BLOCK_TAG.replace_all(html, " ");
    let text = HTML_TAG.replace_all(&text, "");
    BLANK_RUN.replace_all(text.trim(), " ").into_owned()
}
