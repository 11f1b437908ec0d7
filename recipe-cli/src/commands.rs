use crate::error::CliError;
use crate::render;
use recipe_search_client::breakdown::DetailBreakdown;
use recipe_search_client::pagination::Pagination;
use recipe_search_client::statistics::SummaryStatistics;
use recipe_search_client::{FilterField, Filters, RecipeClient, SearchParameters};

/// Filter values as given on the command line.
#[derive(Debug, Default)]
pub struct FilterArgs {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub min_calories: Option<u32>,
    pub max_calories: Option<u32>,
}

impl FilterArgs {
    pub fn into_filters(self) -> Result<Filters, CliError> {
        let mut filters = Filters::new();
        let text = [
            (FilterField::Cuisine, self.cuisine),
            (FilterField::Diet, self.diet),
            (FilterField::IncludeIngredients, self.include),
            (FilterField::ExcludeIngredients, self.exclude),
        ];
        for (field, value) in text {
            if let Some(value) = value {
                filters.set(field, &value)?;
            }
        }
        filters.set_calories(FilterField::MinCalories, self.min_calories)?;
        filters.set_calories(FilterField::MaxCalories, self.max_calories)?;
        Ok(filters)
    }
}

pub async fn search(client: &RecipeClient, params: &SearchParameters) -> Result<String, CliError> {
    let response = client.search(params).await?;
    let stats = SummaryStatistics::from_recipes(&response.results);
    let pages = Pagination::with_default_page_size(*params.page(), response.total_results);

    Ok(render::search_page(&response.results, &stats, &pages))
}

pub async fn show(client: &RecipeClient, id: u64) -> Result<String, CliError> {
    let recipe = client.recipe_detail(id).await?;
    let breakdown = DetailBreakdown::from_recipe(&recipe);

    Ok(render::detail(&recipe, &breakdown))
}
