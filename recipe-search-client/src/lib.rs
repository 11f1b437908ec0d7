pub mod breakdown;
pub mod cache;
mod client;
mod error;
pub mod pagination;
mod recipe;
pub mod search_parameters;
pub mod session;
mod r#static;
pub mod statistics;

#[cfg(test)]
mod tests;

use cache::{CacheConfig, CacheKey, CachedPayload, RecipeCache, SharedRecipeCache};
pub use client::spoonacular::Spoonacular;
pub use client::RecipeProvider;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
pub use r#static::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PAGE_SIZE};
pub use recipe::{strip_tags, Ingredient, Nutrient, Nutrition, Recipe, SearchResponse};
pub use search_parameters::filters::{FilterField, Filters};
pub use search_parameters::{InvalidParameterError, SearchParameters};
use std::sync::Arc;

// Re-export cache types
pub use cache::CacheStats;

#[derive(Clone)]
pub struct RecipeClient {
    provider: Arc<dyn RecipeProvider>,
    cache: Option<SharedRecipeCache>,
}

impl RecipeClient {
    /// Search for recipes, serving repeated parameter sets from the cache
    pub async fn search(&self, params: &SearchParameters) -> Result<SearchResponse> {
        params.validate()?;

        let cache_key = CacheKey::from_search(params);

        // Try cache first
        if let Some(cache) = &self.cache {
            if let Some(CachedPayload::Search(cached_result)) = cache.get(&cache_key) {
                log::info!("Returning cached search result for query: {}", params.query());
                return Ok(cached_result);
            }
        }

        let result = self.provider.search_recipes(params).await?;

        // Failed requests never reach this point, so only successes are cached
        if let Some(cache) = &self.cache {
            cache.put(cache_key, CachedPayload::Search(result.clone()));
        }

        log::info!(
            "Fetched {} of {} results for query: {}",
            result.results.len(),
            result.total_results,
            params.query()
        );
        Ok(result)
    }

    /// Full information for one recipe, including ingredients and nutrition
    pub async fn recipe_detail(&self, id: u64) -> Result<Recipe> {
        let cache_key = CacheKey::from_recipe(id);

        if let Some(cache) = &self.cache {
            if let Some(CachedPayload::Recipe(cached_result)) = cache.get(&cache_key) {
                log::info!("Returning cached recipe detail for id: {}", id);
                return Ok(*cached_result);
            }
        }

        let result = self.provider.recipe_information(id).await?;

        if let Some(cache) = &self.cache {
            cache.put(cache_key, CachedPayload::Recipe(Box::new(result.clone())));
        }

        Ok(result)
    }

    /// Create a new RecipeClient against Spoonacular without caching
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_provider(Arc::new(Spoonacular::new(api_key)?), None))
    }

    /// Create a new RecipeClient against Spoonacular with caching enabled
    pub fn with_cache(api_key: impl Into<String>, cache_config: CacheConfig) -> Result<Self> {
        let cache = Arc::new(RecipeCache::new(cache_config));
        Ok(Self::from_provider(
            Arc::new(Spoonacular::new(api_key)?),
            Some(cache),
        ))
    }

    /// Build a client around any provider, optionally sharing an existing cache
    pub fn from_provider(
        provider: Arc<dyn RecipeProvider>,
        cache: Option<SharedRecipeCache>,
    ) -> Self {
        Self { provider, cache }
    }

    /// Get cache statistics if caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|cache| cache.stats())
    }

    /// Clear cache if caching is enabled
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}
