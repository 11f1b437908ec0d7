use crate::cache::{CacheConfig, RecipeCache};
use crate::error::{Error, ErrorKind, Result};
use crate::search_parameters::filters::{FilterField, Filters};
use crate::{Nutrient, Nutrition, Recipe, RecipeClient, RecipeProvider, SearchParameters, SearchResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory provider that counts how often it is asked.
pub(crate) struct FakeProvider {
    search: Mutex<Result<SearchResponse>>,
    detail: Mutex<Result<Recipe>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeProvider {
    pub(crate) fn with_search(response: SearchResponse) -> Self {
        Self {
            search: Mutex::new(Ok(response)),
            detail: Mutex::new(Err(Error::new(ErrorKind::NotFound))),
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_detail(recipe: Recipe) -> Self {
        let provider = Self::with_search(search_response(vec![], 0));
        *provider.detail.lock().unwrap() = Ok(recipe);
        provider
    }

    pub(crate) fn fail_with(&self, kind: ErrorKind) {
        *self.search.lock().unwrap() = Err(Error::new(kind.clone()));
        *self.detail.lock().unwrap() = Err(Error::new(kind));
    }

    pub(crate) fn succeed_with(&self, response: SearchResponse) {
        *self.search.lock().unwrap() = Ok(response);
    }

    pub(crate) fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeProvider for FakeProvider {
    async fn search_recipes(&self, _params: &SearchParameters) -> Result<SearchResponse> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search.lock().unwrap().clone()
    }

    async fn recipe_information(&self, _id: u64) -> Result<Recipe> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.detail.lock().unwrap().clone()
    }
}

pub(crate) fn recipe(id: u64, calories: f64, cuisine: Option<&str>) -> Recipe {
    Recipe {
        id,
        title: format!("Recipe {}", id),
        image: Some(format!("https://img.spoonacular.com/recipes/{}-312x231.jpg", id)),
        nutrition: Some(Nutrition {
            nutrients: vec![Nutrient {
                name: "Calories".to_string(),
                amount: calories,
                unit: "kcal".to_string(),
            }],
        }),
        cuisine: cuisine.map(str::to_string),
        cuisines: vec![],
        extended_ingredients: vec![],
        instructions: None,
        summary: None,
        ready_in_minutes: None,
        servings: None,
        source_url: None,
    }
}

pub(crate) fn search_response(results: Vec<Recipe>, total_results: u64) -> SearchResponse {
    SearchResponse {
        number: 20,
        offset: 0,
        results,
        total_results,
    }
}

fn cached_client(provider: Arc<FakeProvider>) -> RecipeClient {
    RecipeClient::from_provider(provider, Some(Arc::new(RecipeCache::new(CacheConfig::default()))))
}

#[tokio::test]
async fn test_repeated_search_is_served_from_cache() {
    let provider = Arc::new(FakeProvider::with_search(search_response(
        vec![recipe(1, 350.0, Some("italian"))],
        1,
    )));
    let client = cached_client(provider.clone());

    let filters = Filters::new()
        .with(FilterField::Cuisine, "italian")
        .unwrap()
        .with(FilterField::MinCalories, "")
        .unwrap();
    let params = SearchParameters::new("pasta").with_filters(filters);

    let first = client.search(&params).await.unwrap();
    assert_eq!(provider.search_calls(), 1);

    let second = client.search(&params).await.unwrap();
    assert_eq!(provider.search_calls(), 1);
    assert_eq!(first, second);

    // The same request without the blank filter maps to the same entry.
    let equivalent = SearchParameters::new("pasta")
        .with_filters(Filters::new().with(FilterField::Cuisine, "italian").unwrap());
    client.search(&equivalent).await.unwrap();
    assert_eq!(provider.search_calls(), 1);

    let stats = client.cache_stats().unwrap();
    assert_eq!(stats.search_entries, 1);
    assert_eq!(stats.hits, 2);
}

#[tokio::test]
async fn test_new_page_is_a_new_request() {
    let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 45)));
    let client = cached_client(provider.clone());

    client.search(&SearchParameters::new("pasta")).await.unwrap();
    client.search(&SearchParameters::new("pasta").with_page(2)).await.unwrap();

    assert_eq!(provider.search_calls(), 2);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
    provider.fail_with(ErrorKind::Network("connection reset".to_string()));
    let client = cached_client(provider.clone());
    let params = SearchParameters::new("pasta");

    let err = client.search(&params).await.unwrap_err();
    assert_eq!(err.user_message(), "Network error. Please check your connection.");
    assert_eq!(client.cache_stats().unwrap().total_entries, 0);

    provider.succeed_with(search_response(vec![recipe(1, 10.0, None)], 1));
    let response = client.search(&params).await.unwrap();
    assert_eq!(response.total_results, 1);
    assert_eq!(provider.search_calls(), 2);
}

#[tokio::test]
async fn test_invalid_parameters_never_reach_provider() {
    let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
    let client = cached_client(provider.clone());

    let err = client.search(&SearchParameters::new("")).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidParameters(_)));
    assert_eq!(provider.search_calls(), 0);
}

#[tokio::test]
async fn test_recipe_detail_is_cached_by_id() {
    let provider = Arc::new(FakeProvider::with_detail(recipe(716429, 543.0, None)));
    let client = cached_client(provider.clone());

    let first = client.recipe_detail(716429).await.unwrap();
    let second = client.recipe_detail(716429).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.detail_calls(), 1);
    assert_eq!(client.cache_stats().unwrap().recipe_entries, 1);
}

#[tokio::test]
async fn test_without_cache_every_call_goes_out() {
    let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
    let client = RecipeClient::from_provider(provider.clone(), None);
    let params = SearchParameters::new("pasta");

    client.search(&params).await.unwrap();
    client.search(&params).await.unwrap();

    assert_eq!(provider.search_calls(), 2);
    assert!(client.cache_stats().is_none());
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
    let client = cached_client(provider.clone());
    let params = SearchParameters::new("pasta");

    client.search(&params).await.unwrap();
    client.clear_cache();
    client.search(&params).await.unwrap();

    assert_eq!(provider.search_calls(), 2);
}
