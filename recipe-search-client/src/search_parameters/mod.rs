pub mod filters;
pub mod invalid_parameter_error;

use crate::r#static::PAGE_SIZE;
use filters::Filters;
use getset::Getters;
pub use invalid_parameter_error::InvalidParameterError;
use utils::query::canonical_query;

/// Everything that determines which page of search results is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct SearchParameters {
    query: String,
    filters: Filters,
    /// 1-based.
    page: u32,
}

impl SearchParameters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_string(),
            filters: Filters::default(),
            page: 1,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if self.query.is_empty() {
            return Err(InvalidParameterError::EmptyQuery);
        }
        if self.page == 0 {
            return Err(InvalidParameterError::ZeroPage);
        }
        self.filters.validate()
    }

    /// The query and every filter that is actually set. Blank fields are
    /// dropped rather than sent as empty values.
    pub fn cleaned(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push(("query", self.query.clone()));
        }
        params.extend(
            self.filters
                .pairs()
                .into_iter()
                .map(|(field, value)| (<&'static str>::from(field), value)),
        );
        params
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(PAGE_SIZE)
    }

    /// Parameters sent upstream, minus the credential.
    pub fn request_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.cleaned();
        params.push(("number", PAGE_SIZE.to_string()));
        params.push(("offset", self.offset().to_string()));
        params.push(("addRecipeNutrition", "true".to_string()));
        params
    }

    /// Canonical, order independent form of [`SearchParameters::request_params`].
    pub fn signature(&self) -> String {
        canonical_query(self.request_params())
    }
}
