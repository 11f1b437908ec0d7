pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
pub const SEARCH_PATH: &str = "recipes/complexSearch";

/// Number of recipes requested per page.
pub const PAGE_SIZE: u32 = 20;

/// Bucket for recipes that carry no cuisine tag.
pub const UNKNOWN_CUISINE: &str = "Unknown";

pub const CALORIES: &str = "Calories";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn information_path(id: u64) -> String {
    format!("recipes/{}/information", id)
}
