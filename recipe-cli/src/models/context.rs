use getset::Getters;
use log::info;
use recipe_search_client::cache::RecipeCache;
use recipe_search_client::{RecipeClient, Spoonacular};
use std::sync::Arc;

use super::config::Config;
use crate::error::CliError;

#[derive(Getters)]
#[get = "pub"]
pub struct Context {
    recipe_client: RecipeClient,
    config: Config,
}

impl Context {
    pub fn new(config: Config) -> Result<Self, CliError> {
        if config.api_key().trim().is_empty() {
            return Err(CliError::MissingApiKey);
        }

        let provider = Spoonacular::with_options(
            config.api_key().trim(),
            config.base_url(),
            config.timeout(),
        )?;

        // The cache lives exactly as long as this context
        let cache_config = config.cache_config();
        let max_entries = cache_config
            .max_entries
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unbounded".to_string());
        info!(
            "Initialized RecipeClient against {} (cache enabled: {}, max entries: {})",
            config.base_url(),
            cache_config.enabled,
            max_entries
        );
        let cache = cache_config
            .enabled
            .then(|| Arc::new(RecipeCache::new(cache_config)));
        let recipe_client = RecipeClient::from_provider(Arc::new(provider), cache);

        Ok(Self {
            recipe_client,
            config,
        })
    }
}
