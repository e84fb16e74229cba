use chrono::NaiveDate;

use crate::catalog::FoodSource;
use crate::error::Result;
use crate::models::{FoodItem, SortKey, SortState};
use crate::search::{sort_results, suggest};
use crate::tracker::{FoodLog, NutritionSummary, aggregate, export_filename, to_csv};

/// Handle for one issued search request.
///
/// Sequence numbers increase strictly; only the most recently issued ticket
/// may change the displayed results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

/// What happened when a search response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results replaced; holds the number of items now displayed.
    Applied(usize),
    /// A newer search was issued in the meantime; the response was dropped.
    Stale,
    /// The request failed; the previous results stay on screen.
    Failed,
}

/// All state of one client session, owned in one place.
///
/// Every user action is a method call; derived views (suggestions, sorted
/// results, nutrition summary) are recomputed from the owned snapshots.
pub struct Session<S: FoodSource> {
    source: S,
    catalog: Vec<FoodItem>,
    query: String,
    suggestions: Vec<String>,
    results: Vec<FoodItem>,
    sort: SortState,
    food_log: FoodLog,
    last_issued: u64,
    last_error: Option<String>,
}

impl<S: FoodSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: Vec::new(),
            query: String::new(),
            suggestions: Vec::new(),
            results: Vec::new(),
            sort: SortState::default(),
            food_log: FoodLog::new(),
            last_issued: 0,
            last_error: None,
        }
    }

    /// Fetch the full catalog used for autocomplete.
    ///
    /// On failure the previous catalog (possibly empty) is kept and the
    /// error is only logged. Returns whether the catalog was replaced.
    pub fn load_catalog(&mut self) -> bool {
        match self.source.fetch_all() {
            Ok(items) => {
                log::info!("catalog loaded: {} items", items.len());
                self.catalog = items;
                self.suggestions = suggest(&self.catalog, &self.query);
                true
            }
            Err(e) => {
                log::error!("catalog load failed: {}", e);
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Update the typed query and recompute suggestions.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.suggestions = suggest(&self.catalog, &self.query);
    }

    /// Issue a new search request and return its ticket.
    pub fn begin_search(&mut self, query: &str) -> SearchTicket {
        self.last_issued += 1;
        log::debug!("search #{} issued: {:?}", self.last_issued, query);
        SearchTicket {
            seq: self.last_issued,
            query: query.to_string(),
        }
    }

    /// Apply the response of a previously issued search.
    ///
    /// Only the most recently issued ticket is applied; responses to older
    /// tickets are dropped whatever order they arrive in.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        response: Result<Vec<FoodItem>>,
    ) -> SearchOutcome {
        if ticket.seq != self.last_issued {
            log::debug!(
                "search #{} ({:?}) superseded by #{}, dropping response",
                ticket.seq,
                ticket.query,
                self.last_issued
            );
            return SearchOutcome::Stale;
        }

        match response {
            Ok(items) => {
                log::debug!("search #{} applied: {} items", ticket.seq, items.len());
                self.results = items;
                self.suggestions.clear();
                self.last_error = None;
                SearchOutcome::Applied(self.results.len())
            }
            Err(e) => {
                log::error!("search failed: {}", e);
                self.last_error = Some(e.to_string());
                SearchOutcome::Failed
            }
        }
    }

    /// Search for `query` and apply the response.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        let ticket = self.begin_search(query);
        let response = self.source.search(query);
        self.complete_search(&ticket, response)
    }

    /// Search for the current query.
    pub fn submit(&mut self) -> SearchOutcome {
        let query = self.query.clone();
        self.search(&query)
    }

    /// Pick a suggestion: it becomes the query and is searched right away.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn select_suggestion(&mut self, index: usize) -> Option<SearchOutcome> {
        let name = self.suggestions.get(index)?.clone();
        self.query = name.clone();
        self.suggestions.clear();
        Some(self.search(&name))
    }

    /// Column-header selection on the result table.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        log::debug!(
            "sort by {} {}",
            key,
            if self.sort.ascending { "asc" } else { "desc" }
        );
    }

    /// Results as displayed: the last search result under the current sort.
    pub fn sorted_results(&self) -> Vec<FoodItem> {
        sort_results(&self.results, self.sort)
    }

    /// Log the item at `index` of the displayed (sorted) results.
    pub fn log_result(&mut self, index: usize) -> Option<FoodItem> {
        let item = self.sorted_results().into_iter().nth(index)?;
        self.food_log.log(item.clone());
        Some(item)
    }

    pub fn log_item(&mut self, item: FoodItem) {
        self.food_log.log(item);
    }

    /// Nutrition summary of the log, or `None` while nothing is logged.
    pub fn summary(&self) -> Option<NutritionSummary> {
        if self.food_log.is_empty() {
            return None;
        }
        Some(aggregate(self.food_log.items()))
    }

    /// CSV export of the log as `(filename, bytes)`, or `None` while nothing is logged.
    pub fn export_csv(&self, date: NaiveDate) -> Result<Option<(String, Vec<u8>)>> {
        if self.food_log.is_empty() {
            return Ok(None);
        }
        let bytes = to_csv(self.food_log.items())?;
        Ok(Some((export_filename(date), bytes)))
    }

    /// The service this session talks to.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn catalog(&self) -> &[FoodItem] {
        &self.catalog
    }

    /// Last search result in fetch order.
    pub fn results(&self) -> &[FoodItem] {
        &self.results
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn food_log(&self) -> &FoodLog {
        &self.food_log
    }

    /// Message of the most recent failed request, cleared by the next successful search.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DietError;

    struct CatalogSource(Vec<FoodItem>);

    impl FoodSource for CatalogSource {
        fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
            let q = query.to_lowercase();
            Ok(self
                .0
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&q))
                .cloned()
                .collect())
        }
    }

    fn session() -> Session<CatalogSource> {
        Session::new(CatalogSource(vec![
            FoodItem::new(1, "Apple", 95.0, 0.5, 25.0, 0.3),
            FoodItem::new(2, "Apricot", 17.0, 0.5, 3.9, 0.1),
            FoodItem::new(3, "Banana", 105.0, 1.3, 27.0, 0.4),
        ]))
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut s = session();
        let first = s.begin_search("apple");
        let second = s.begin_search("banana");
        assert!(second.seq > first.seq);

        let banana = vec![FoodItem::new(3, "Banana", 105.0, 1.3, 27.0, 0.4)];
        assert_eq!(s.complete_search(&second, Ok(banana)), SearchOutcome::Applied(1));

        let apple = vec![FoodItem::new(1, "Apple", 95.0, 0.5, 25.0, 0.3)];
        assert_eq!(s.complete_search(&first, Ok(apple)), SearchOutcome::Stale);
        assert_eq!(s.results()[0].name, "Banana");
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut s = session();
        assert_eq!(s.search("ap"), SearchOutcome::Applied(2));

        let ticket = s.begin_search("x");
        let outcome = s.complete_search(
            &ticket,
            Err(DietError::MalformedResponse("expected a JSON array".to_string())),
        );
        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(s.results().len(), 2);
        assert!(s.last_error().is_some());

        s.search("banana");
        assert!(s.last_error().is_none());
    }

    #[test]
    fn test_select_suggestion_searches_and_clears() {
        let mut s = session();
        assert!(s.load_catalog());
        s.set_query("ap");
        assert_eq!(s.suggestions(), ["Apple", "Apricot"]);

        assert_eq!(s.select_suggestion(1), Some(SearchOutcome::Applied(1)));
        assert_eq!(s.query(), "Apricot");
        assert!(s.suggestions().is_empty());
        assert_eq!(s.results()[0].id, 2);

        assert_eq!(s.select_suggestion(0), None);
    }

    #[test]
    fn test_log_result_uses_displayed_order() {
        let mut s = session();
        s.search("");
        s.toggle_sort(SortKey::Calories);

        let logged = s.log_result(0).unwrap();
        assert_eq!(logged.name, "Apricot");
        assert_eq!(s.food_log().len(), 1);
        assert!(s.log_result(10).is_none());
    }

    #[test]
    fn test_summary_and_export_need_logged_items() {
        let mut s = session();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert!(s.summary().is_none());
        assert!(s.export_csv(date).unwrap().is_none());

        s.log_item(FoodItem::new(1, "Apple", 95.0, 0.5, 25.0, 0.3));
        assert!(s.summary().is_some());

        let (name, bytes) = s.export_csv(date).unwrap().unwrap();
        assert_eq!(name, "logged_foods_2025-01-31.csv");
        assert!(bytes.ends_with(b"\"Apple\",95,0.5,25,0.3"));
    }
}
