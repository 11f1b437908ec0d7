use recipe_search_client::breakdown::DetailBreakdown;
use recipe_search_client::pagination::Pagination;
use recipe_search_client::statistics::SummaryStatistics;
use recipe_search_client::{CacheStats, Filters, Recipe};
use std::fmt::Write;

pub const NO_RECIPES: &str = "No recipes found. Try adjusting your search or filters.";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

const BAR_WIDTH: f64 = 30.0;

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn recipe_card(recipe: &Recipe) -> String {
    let calories = recipe
        .calories()
        .map(|c| format!("{:.0}", c))
        .unwrap_or_else(|| "N/A".to_string());

    let mut card = format!("[{}] {}\n    Calories: {}", recipe.id, recipe.title, calories);
    if let Some(image) = &recipe.image {
        let _ = write!(card, "\n    Image: {}", image);
    }
    card
}

pub fn recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return NO_RECIPES.to_string();
    }

    recipes
        .iter()
        .map(recipe_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn statistics(stats: &SummaryStatistics) -> String {
    let mut out = format!(
        "Total Recipes Found: {}\nAverage Calories: {}\nCuisine Distribution:",
        stats.total,
        stats.average_calories_display()
    );
    if stats.cuisine_distribution.is_empty() {
        out.push_str(" none");
    }
    for (cuisine, count) in &stats.cuisine_distribution {
        let _ = write!(out, "\n  {}: {}", capitalize(cuisine), count);
    }
    out
}

/// `None` when there is only one page.
pub fn pagination(pagination: &Pagination) -> Option<String> {
    if !pagination.is_visible() {
        return None;
    }

    let previous = if pagination.has_previous() { "« Prev" } else { "      " };
    let next = if pagination.has_next() { "Next »" } else { "      " };
    Some(format!(
        "{} | Page {} of {} | {}",
        previous,
        pagination.current_page(),
        pagination.total_pages(),
        next
    ))
}

pub fn filters(filters: &Filters) -> String {
    let pairs = filters.pairs();
    if pairs.is_empty() {
        return "Filters: none".to_string();
    }

    let shown: Vec<String> = pairs
        .iter()
        .map(|(field, value)| format!("{}={}", field, value))
        .collect();
    format!("Filters: {}", shown.join(", "))
}

pub fn search_page(recipes: &[Recipe], stats: &SummaryStatistics, pages: &Pagination) -> String {
    let mut out = statistics(stats);
    out.push_str("\n\n");
    out.push_str(&recipe_list(recipes));
    if let Some(controls) = pagination(pages) {
        out.push_str("\n\n");
        out.push_str(&controls);
    }
    out
}

fn bar(amount: f64, largest: f64) -> String {
    if largest <= 0.0 {
        return String::new();
    }
    let width = ((amount / largest) * BAR_WIDTH).round() as usize;
    "#".repeat(width)
}

pub fn detail(recipe: &Recipe, breakdown: &DetailBreakdown) -> String {
    let mut out = recipe.title.clone();
    if let Some(image) = &recipe.image {
        let _ = write!(out, "\n{}", image);
    }
    if let Some(minutes) = recipe.ready_in_minutes {
        let _ = write!(out, "\nReady in {} minutes", minutes);
    }
    if let Some(servings) = recipe.servings {
        let _ = write!(out, "\nServings: {}", servings);
    }

    if let Some(summary) = recipe.plain_summary() {
        let _ = write!(out, "\n\nSummary\n{}", summary);
    }

    out.push_str("\n\nIngredients");
    for ingredient in &recipe.extended_ingredients {
        let line = ingredient.original.as_deref().unwrap_or(&ingredient.name);
        let _ = write!(out, "\n  - {}", line);
    }

    out.push_str("\n\nInstructions\n");
    match recipe.plain_instructions() {
        Some(instructions) => out.push_str(&instructions),
        None => out.push_str(NO_INSTRUCTIONS),
    }

    out.push_str("\n\nNutrient Breakdown");
    let largest = breakdown.largest_nutrient_amount();
    for nutrient in &breakdown.nutrients {
        let _ = write!(
            out,
            "\n  {:<14}{:>9.1} {:<5}{}",
            nutrient.nutrient.to_string(),
            nutrient.amount,
            nutrient.unit,
            bar(nutrient.amount, largest)
        );
    }

    out.push_str("\n\nIngredient Categories");
    if breakdown.ingredient_categories.is_empty() {
        out.push_str("\n  none");
    }
    for (category, count) in &breakdown.ingredient_categories {
        let _ = write!(out, "\n  {:<14}{}", category.to_string(), count);
    }

    if let Some(url) = &recipe.source_url {
        let _ = write!(out, "\n\nSource: {}", url);
    }
    out
}

pub fn cache_stats(stats: Option<&CacheStats>) -> String {
    let Some(stats) = stats else {
        return "Cache disabled".to_string();
    };

    let capacity = stats
        .max_entries
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unbounded".to_string());
    let mut out = format!(
        "Cache: {} entries ({} searches, {} recipes), capacity {}\nHits: {}, misses: {}",
        stats.total_entries,
        stats.search_entries,
        stats.recipe_entries,
        capacity,
        stats.hits,
        stats.misses
    );
    if let Some(oldest) = stats.oldest_entry {
        let _ = write!(out, "\nOldest entry stored at {}", oldest.format("%H:%M:%S"));
    }
    out
}
