use async_trait::async_trait;
use recipe_search_client::cache::{CacheConfig, RecipeCache};
use recipe_search_client::{
    Error, ErrorKind, Recipe, RecipeClient, RecipeProvider, Result, SearchParameters,
    SearchResponse,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct StaticProvider {
    response: SearchResponse,
    search_calls: AtomicUsize,
}

impl StaticProvider {
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeProvider for StaticProvider {
    async fn search_recipes(&self, _params: &SearchParameters) -> Result<SearchResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn recipe_information(&self, id: u64) -> Result<Recipe> {
        self.response
            .results
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound))
    }
}

/// Two recipes of 100 and 300 calories, out of `total_results`.
pub fn search_response(total_results: u64) -> SearchResponse {
    let body = format!(
        r#"{{
            "results": [
                {{"id": 1, "title": "Pasta Carbonara", "cuisine": "italian",
                  "nutrition": {{"nutrients": [{{"name": "Calories", "amount": 100.0, "unit": "kcal"}}]}}}},
                {{"id": 2, "title": "Pasta Salad",
                  "nutrition": {{"nutrients": [{{"name": "Calories", "amount": 300.0, "unit": "kcal"}}]}},
                  "extendedIngredients": [{{"id": 7, "name": "pasta", "original": "250g fusilli pasta"}}]}}
            ],
            "totalResults": {}
        }}"#,
        total_results
    );
    SearchResponse::parse(&body).unwrap()
}

pub fn client(response: SearchResponse) -> (RecipeClient, Arc<StaticProvider>) {
    let provider = Arc::new(StaticProvider {
        response,
        search_calls: AtomicUsize::new(0),
    });
    let cache = Arc::new(RecipeCache::new(CacheConfig::default()));
    (
        RecipeClient::from_provider(provider.clone(), Some(cache)),
        provider,
    )
}
