use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use getset::Getters;
use log::LevelFilter;
use recipe_search_client::cache::CacheConfig;
use recipe_search_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "recipe-search.yaml";
pub const ENV_PREFIX: &str = "RECIPE_";
pub const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";

#[serde_inline_default]
#[derive(Debug, Clone, Deserialize, Getters)]
#[get = "pub"]
pub struct Config {
    #[serde(default)]
    api_key: String,
    #[serde_inline_default(DEFAULT_BASE_URL.to_string())]
    base_url: String,
    #[serde_inline_default(true)]
    cache_enabled: bool,
    /// Unbounded when absent.
    #[serde(default)]
    cache_max_entries: Option<usize>,
    #[serde_inline_default(DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
    #[serde_inline_default(LevelFilter::Warn)]
    log_level: LevelFilter,
}

/// Values given on the command line. Unset fields leave the layers below alone.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LevelFilter>,
}

impl Config {
    /// Layers, lowest priority first: config file, `RECIPE_*` variables,
    /// `SPOONACULAR_API_KEY`, command line.
    pub fn figment(path: &Path, overrides: &Overrides) -> Figment {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&[API_KEY_VAR]).map(|_| "api_key".into()))
            .merge(Serialized::defaults(overrides))
    }

    pub fn load(path: &Path, overrides: &Overrides) -> Result<Self, figment::Error> {
        Self::figment(path, overrides).extract()
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.cache_max_entries,
            enabled: self.cache_enabled,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
