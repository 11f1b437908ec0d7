use crate::pagination::Pagination;
use crate::statistics::SummaryStatistics;
use crate::{
    Error, FilterField, Filters, InvalidParameterError, Recipe, RecipeClient, Result,
    SearchParameters, SearchResponse,
};
use getset::Getters;

#[derive(Debug, Clone)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(Error),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Handed out when a fetch starts. Only the most recently issued ticket may
/// update the session, so a slow response to an older query cannot overwrite
/// the results of a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct FetchTicket {
    id: u64,
    params: SearchParameters,
}

/// Query, filter and page state for one interactive user, plus whatever the
/// last applied fetch produced.
#[derive(Getters)]
#[getset(get = "pub")]
pub struct SearchSession {
    client: RecipeClient,
    query: String,
    filters: Filters,
    page: u32,
    state: LoadState,
    results: Vec<Recipe>,
    total_results: u64,
    statistics: SummaryStatistics,
    #[getset(skip)]
    latest_ticket: u64,
}

impl SearchSession {
    pub fn new(client: RecipeClient) -> Self {
        Self {
            client,
            query: String::new(),
            filters: Filters::default(),
            page: 1,
            state: LoadState::Idle,
            results: Vec::new(),
            total_results: 0,
            statistics: SummaryStatistics::default(),
            latest_ticket: 0,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.page = 1;
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn update_filter(
        &mut self,
        field: FilterField,
        raw: &str,
    ) -> std::result::Result<(), InvalidParameterError> {
        self.filters.set(field, raw)?;
        self.page = 1;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(Filters::default());
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::with_default_page_size(self.page, self.total_results)
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page == self.page || !self.pagination().contains(page) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        match self.pagination().next() {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.pagination().previous() {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn parameters(&self) -> SearchParameters {
        SearchParameters::new(self.query.clone())
            .with_filters(self.filters.clone())
            .with_page(self.page)
    }

    /// Start a fetch for the current state. Nothing is fetched without a query.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.query.is_empty() {
            return None;
        }

        self.latest_ticket += 1;
        self.state = LoadState::Loading;
        log::debug!("Fetch {} started for query: {}", self.latest_ticket, self.query);

        Some(FetchTicket {
            id: self.latest_ticket,
            params: self.parameters(),
        })
    }

    /// Apply the outcome of a fetch. Returns false if a newer fetch has been
    /// started since `ticket` was issued, in which case nothing changes.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: Result<SearchResponse>) -> bool {
        if ticket.id != self.latest_ticket {
            log::debug!(
                "Discarding fetch {} superseded by fetch {}",
                ticket.id,
                self.latest_ticket
            );
            return false;
        }

        match outcome {
            Ok(response) => {
                self.statistics = SummaryStatistics::from_recipes(&response.results);
                self.total_results = response.total_results;
                self.results = response.results;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                log::warn!("Search for '{}' failed: {}", ticket.params.query(), err);
                self.state = LoadState::Failed(err);
            }
        }
        true
    }

    /// Fetch for the current state and apply the result.
    pub async fn refresh(&mut self) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let outcome = self.client.search(ticket.params()).await;
        self.complete(&ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{recipe, search_response, FakeProvider};
    use crate::ErrorKind;
    use std::sync::Arc;

    fn session(provider: Arc<FakeProvider>) -> SearchSession {
        SearchSession::new(RecipeClient::from_provider(provider, None))
    }

    #[tokio::test]
    async fn empty_query_does_not_fetch() {
        let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
        let mut session = session(provider.clone());

        session.set_query("   ");
        assert!(!session.refresh().await);
        assert!(matches!(session.state(), LoadState::Idle));
        assert_eq!(provider.search_calls(), 0);
    }

    #[tokio::test]
    async fn refresh_updates_results_and_statistics() {
        let response = search_response(
            vec![recipe(1, 100.0, Some("italian")), recipe(2, 300.0, None)],
            45,
        );
        let provider = Arc::new(FakeProvider::with_search(response));
        let mut session = session(provider);

        session.set_query("pasta");
        assert!(session.refresh().await);

        assert!(matches!(session.state(), LoadState::Loaded));
        assert_eq!(session.results().len(), 2);
        assert_eq!(session.total_results(), &45);
        assert_eq!(session.statistics().average_calories, 200.0);
        assert_eq!(session.pagination().total_pages(), 3);
    }

    #[tokio::test]
    async fn changing_query_or_filter_resets_page() {
        let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 45)));
        let mut session = session(provider);

        session.set_query("pasta");
        session.refresh().await;
        assert!(session.next_page());
        assert!(session.next_page());
        assert_eq!(session.page(), &3);
        assert!(!session.next_page());

        session.update_filter(FilterField::Cuisine, "italian").unwrap();
        assert_eq!(session.page(), &1);

        session.go_to_page(2);
        session.set_query("soup");
        assert_eq!(session.page(), &1);
        assert!(!session.previous_page());
    }

    #[tokio::test]
    async fn failure_is_recorded_and_keeps_previous_results() {
        let provider = Arc::new(FakeProvider::with_search(search_response(
            vec![recipe(1, 100.0, None)],
            1,
        )));
        let mut session = session(provider.clone());

        session.set_query("pasta");
        session.refresh().await;
        assert_eq!(session.results().len(), 1);

        provider.fail_with(ErrorKind::QuotaExceeded);
        session.set_query("soup");
        assert!(session.refresh().await);

        let err = session.state().error().unwrap();
        assert_eq!(err.kind(), &ErrorKind::QuotaExceeded);
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
        let mut session = session(provider);

        session.set_query("pasta");
        let first = session.begin_fetch().unwrap();
        session.set_query("pizza");
        let second = session.begin_fetch().unwrap();

        // The newer request resolves first, then the older one arrives late.
        assert!(session.complete(&second, Ok(search_response(vec![recipe(2, 50.0, None)], 1))));
        assert!(!session.complete(&first, Ok(search_response(vec![], 99))));

        assert_eq!(session.total_results(), &1);
        assert_eq!(session.results()[0].id, 2);
        assert!(matches!(session.state(), LoadState::Loaded));
    }

    #[test]
    fn invalid_filter_leaves_page_alone() {
        let provider = Arc::new(FakeProvider::with_search(search_response(vec![], 0)));
        let mut session = session(provider);

        session.set_query("pasta");
        assert!(session.update_filter(FilterField::MaxCalories, "many").is_err());
        assert!(session.filters().is_empty());
    }
}
