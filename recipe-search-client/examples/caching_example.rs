use recipe_search_client::{
    cache::CacheConfig, FilterField, Filters, RecipeClient, SearchParameters,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let api_key = std::env::var("SPOONACULAR_API_KEY")?;
    let client = RecipeClient::with_cache(api_key, CacheConfig::default())?;

    let filters = Filters::new().with(FilterField::Cuisine, "italian")?;
    let params = SearchParameters::new("pasta").with_filters(filters);

    // First search goes to the API
    let start = std::time::Instant::now();
    let first = client.search(&params).await?;
    println!("First search took: {:?}", start.elapsed());
    println!("Found {} of {} recipes", first.results.len(), first.total_results);

    // Second search should come from the cache
    let start = std::time::Instant::now();
    client.search(&params).await?;
    println!("Cached search took: {:?}", start.elapsed());

    if let Some(stats) = client.cache_stats() {
        println!("Cache stats: {:?}", stats);
    }

    if let Some(recipe) = first.results.first() {
        let detail = client.recipe_detail(recipe.id).await?;
        println!(
            "{} uses {} ingredients",
            detail.title,
            detail.extended_ingredients.len()
        );
    }

    Ok(())
}
