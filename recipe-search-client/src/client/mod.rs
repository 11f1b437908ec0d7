pub mod spoonacular;

use crate::error::Result;
use crate::{Recipe, SearchParameters, SearchResponse};
use async_trait::async_trait;

/// A source of recipes. The cache sits in front of whichever provider the
/// client is built with.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    async fn search_recipes(&self, params: &SearchParameters) -> Result<SearchResponse>;

    async fn recipe_information(&self, id: u64) -> Result<Recipe>;
}
